use gems::{Point2, Rect2};
use procsim::{Painter, Pen, Rgb};
use ratatui::{
    style::{Color, Style},
    text::Line as TextLine,
    widgets::canvas::{Circle, Context, Line, Rectangle},
};

pub fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Paints the scene onto a ratatui canvas.
///
/// The canvas uses the scene extent as its bounds but its y-axis points up, so every y
/// coordinate is mirrored. Stroke widths are not representable and are ignored. Every
/// primitive goes into its own layer to keep the scene's z-order.
pub struct CanvasPainter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,

    /// Extent of one terminal cell in scene units
    cell: (f64, f64),
}

impl<'a, 'b> CanvasPainter<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, height: f64, cell: (f64, f64)) -> Self {
        Self { ctx, height, cell }
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    /// Vertical distance between two braille dot rows
    fn dot_step(&self) -> f64 {
        (self.cell.1 / 4.).max(f64::EPSILON)
    }

    fn hline(&mut self, x1: f64, x2: f64, y: f64, color: Color) {
        let y = self.flip(y);
        self.ctx.draw(&Line {
            x1,
            y1: y,
            x2,
            y2: y,
            color,
        });
    }
}

impl Painter for CanvasPainter<'_, '_> {
    fn polyline(&mut self, points: &[Point2<f64>], pen: Pen) {
        let color = to_color(pen.color);
        for w in points.windows(2) {
            let line = Line {
                x1: w[0].x,
                y1: self.flip(w[0].y),
                x2: w[1].x,
                y2: self.flip(w[1].y),
                color,
            };
            self.ctx.draw(&line);
        }
        self.ctx.layer();
    }

    fn circle(&mut self, center: Point2<f64>, radius: f64, outline: Pen, fill: Option<Rgb>) {
        if let Some(fill) = fill {
            let color = to_color(fill);
            let step = self.dot_step();
            let mut dy = -radius;
            while dy <= radius {
                let half = (radius * radius - dy * dy).max(0.).sqrt();
                self.hline(center.x - half, center.x + half, center.y + dy, color);
                dy += step;
            }
        }

        let circle = Circle {
            x: center.x,
            y: self.flip(center.y),
            radius,
            color: to_color(outline.color),
        };
        self.ctx.draw(&circle);
        self.ctx.layer();
    }

    fn rect(&mut self, rect: &Rect2, outline: Option<Pen>, fill: Option<Rgb>) {
        let max = rect.max();

        if let Some(fill) = fill {
            let color = to_color(fill);
            let step = self.dot_step();
            let mut y = rect.min.y;
            while y <= max.y {
                self.hline(rect.min.x, max.x, y, color);
                y += step;
            }
        }

        if let Some(pen) = outline {
            let rectangle = Rectangle {
                x: rect.min.x,
                y: self.flip(max.y),
                width: rect.width,
                height: rect.height,
                color: to_color(pen.color),
            };
            self.ctx.draw(&rectangle);
        }

        self.ctx.layer();
    }

    fn text(&mut self, rect: &Rect2, lines: &[&str], color: Rgb) {
        let style = Style::default().fg(to_color(color));
        let center = rect.center();
        let top = center.y - 0.5 * self.cell.1 * (lines.len() as f64 - 1.);

        for (i, text) in lines.iter().enumerate() {
            let width = self.cell.0 * text.chars().count() as f64;
            let x = center.x - 0.5 * width;
            let y = self.flip(top + self.cell.1 * i as f64);
            self.ctx
                .print(x, y, TextLine::styled(text.to_string(), style));
        }
    }
}
