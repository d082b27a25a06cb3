use nalgebra::{Point2, Vector2};

/// Wrap an angle in degrees into [0, 360)
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360. { 0. } else { wrapped }
}

/// Point at `distance` from `origin` in direction `angle_deg`. Angles are measured from the
/// x-axis towards the y-axis.
pub fn polar_offset(origin: Point2<f64>, angle_deg: f64, distance: f64) -> Point2<f64> {
    let rad = angle_deg.to_radians();
    origin + Vector2::new(rad.cos(), rad.sin()) * distance
}

/// Axis-aligned rectangle given by its corner with the smallest coordinates and its extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min: Point2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min: Point2::new(x, y),
            width,
            height,
        }
    }

    pub fn max(&self) -> Point2<f64> {
        self.min + Vector2::new(self.width, self.height)
    }

    pub fn center(&self) -> Point2<f64> {
        self.min + Vector2::new(0.5 * self.width, 0.5 * self.height)
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f64) -> Self {
        Self {
            min: self.min + Vector2::new(margin, margin),
            width: (self.width - 2. * margin).max(0.),
            height: (self.height - 2. * margin).max(0.),
        }
    }
}
