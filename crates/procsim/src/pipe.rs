use crate::{Drawable, Painter, Pen, Rgb};
use gems::Point2;

const WALL_COLOR: Rgb = Rgb(100, 100, 100);
const FLUID_COLOR: Rgb = Rgb(0, 180, 255);

/// Default stroke width of the pipe wall
pub const PIPE_THICKNESS: f64 = 12.;

/// The fluid stroke is this much thinner than the wall
const FLUID_INSET: f64 = 4.;

/// A static polyline which shows fluid while flowing
#[derive(Clone, Debug)]
pub struct Pipe {
    points: Vec<Point2<f64>>,
    thickness: f64,
    flowing: bool,
}

impl Pipe {
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|(x, y)| Point2::new(x, y))
                .collect(),
            thickness: PIPE_THICKNESS,
            flowing: false,
        }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn is_flowing(&self) -> bool {
        self.flowing
    }

    pub fn set_flowing(&mut self, flowing: bool) {
        self.flowing = flowing;
    }
}

impl Drawable for Pipe {
    fn draw(&self, painter: &mut dyn Painter) {
        if self.points.len() < 2 {
            return;
        }

        painter.polyline(&self.points, Pen::new(WALL_COLOR, self.thickness));

        if self.flowing {
            painter.polyline(
                &self.points,
                Pen::new(FLUID_COLOR, self.thickness - FLUID_INSET),
            );
        }
    }
}
