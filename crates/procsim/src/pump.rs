use crate::{Drawable, Painter, Pen, Rgb};
use gems::{Point2, polar_offset, wrap_degrees};

/// Rotation in degrees per unit of speed and tick
pub const PUMP_ANGLE_PER_SPEED: f64 = 15.;

/// Default housing radius
pub const PUMP_RADIUS: f64 = 22.;

const HOUSING_COLOR: Rgb = Rgb(70, 130, 180);
const SPOKE_COUNT: usize = 4;
const SPOKE_INSET: f64 = 6.;

/// Pump indicator: a housing with a rotor whose angle advances with the flow speed
#[derive(Clone, Debug)]
pub struct Pump {
    center: Point2<f64>,
    radius: f64,
    angle: f64,
    angle_per_speed: f64,
}

impl Pump {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius: PUMP_RADIUS,
            angle: 0.,
            angle_per_speed: PUMP_ANGLE_PER_SPEED,
        }
    }

    pub fn with_angle_per_speed(mut self, angle_per_speed: f64) -> Self {
        self.angle_per_speed = angle_per_speed;
        self
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rotor angle in degrees, always in [0, 360)
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn advance(&mut self, speed: f64) {
        self.angle = wrap_degrees(self.angle + speed * self.angle_per_speed);
    }
}

impl Drawable for Pump {
    fn draw(&self, painter: &mut dyn Painter) {
        painter.circle(
            self.center,
            self.radius,
            Pen::new(Rgb::BLACK, 2.),
            Some(HOUSING_COLOR),
        );

        let spoke = Pen::new(Rgb::WHITE, 3.);
        for i in 0..SPOKE_COUNT {
            let angle = self.angle + (i * 360 / SPOKE_COUNT) as f64;
            let tip = polar_offset(self.center, angle, self.radius - SPOKE_INSET);
            painter.line(self.center, tip, spoke);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Primitive, RecordingPainter};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_advance_wraps() {
        let mut pump = Pump::new(0., 0.);
        pump.advance(1.);
        assert_abs_diff_eq!(pump.angle(), 15.);

        pump.advance(23.);
        assert_abs_diff_eq!(pump.angle(), 0.);

        pump.advance(-1.);
        assert_abs_diff_eq!(pump.angle(), 345.);
    }

    #[test]
    fn test_custom_angle_scale() {
        let mut pump = Pump::new(0., 0.).with_angle_per_speed(100.);
        pump.advance(4.);
        assert_abs_diff_eq!(pump.angle(), 40.);
    }

    #[test]
    fn test_draw_spokes() {
        let mut pump = Pump::new(100., 100.);
        pump.advance(6.); // 90 degrees

        let mut painter = RecordingPainter::new();
        pump.draw(&mut painter);

        assert_eq!(painter.primitives.len(), 1 + SPOKE_COUNT);
        assert!(matches!(painter.primitives[0], Primitive::Circle { .. }));

        // First spoke points along +y after a quarter turn
        let Primitive::Polyline { points, .. } = &painter.primitives[1] else {
            panic!("expected spoke");
        };
        assert_abs_diff_eq!(points[1].x, 100., epsilon = 1e-9);
        assert_abs_diff_eq!(points[1].y, 116., epsilon = 1e-9);
    }
}
