use gems::{Point2, Rect2};

/// 8-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Stroke colour and width in scene units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Rgb,
    pub width: f64,
}

impl Pen {
    pub fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

/// Drawing surface used by the render pass.
///
/// Scene coordinates have their origin in the top-left corner with y growing downwards.
/// Implementations map them to whatever the backend uses.
pub trait Painter {
    /// Connected line through all points
    fn polyline(&mut self, points: &[Point2<f64>], pen: Pen);

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, pen: Pen) {
        self.polyline(&[from, to], pen);
    }

    fn circle(&mut self, center: Point2<f64>, radius: f64, outline: Pen, fill: Option<Rgb>);

    fn rect(&mut self, rect: &Rect2, outline: Option<Pen>, fill: Option<Rgb>);

    /// Lines of text centered in the rectangle
    fn text(&mut self, rect: &Rect2, lines: &[&str], color: Rgb);
}

/// Anything which can render itself onto a painter
pub trait Drawable {
    fn draw(&self, painter: &mut dyn Painter);
}

/// A primitive emitted by the render pass
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Polyline {
        points: Vec<Point2<f64>>,
        pen: Pen,
    },
    Circle {
        center: Point2<f64>,
        radius: f64,
        outline: Pen,
        fill: Option<Rgb>,
    },
    Rect {
        rect: Rect2,
        outline: Option<Pen>,
        fill: Option<Rgb>,
    },
    Text {
        rect: Rect2,
        lines: Vec<String>,
        color: Rgb,
    },
}

/// Painter which only remembers what it was asked to draw
#[derive(Default, Debug)]
pub struct RecordingPainter {
    pub primitives: Vec<Primitive>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Painter for RecordingPainter {
    fn polyline(&mut self, points: &[Point2<f64>], pen: Pen) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            pen,
        });
    }

    fn circle(&mut self, center: Point2<f64>, radius: f64, outline: Pen, fill: Option<Rgb>) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            outline,
            fill,
        });
    }

    fn rect(&mut self, rect: &Rect2, outline: Option<Pen>, fill: Option<Rgb>) {
        self.primitives.push(Primitive::Rect {
            rect: *rect,
            outline,
            fill,
        });
    }

    fn text(&mut self, rect: &Rect2, lines: &[&str], color: Rgb) {
        self.primitives.push(Primitive::Text {
            rect: *rect,
            lines: lines.iter().map(|s| s.to_string()).collect(),
            color,
        });
    }
}
