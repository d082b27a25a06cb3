mod cycle;
mod geometry;
mod rescale;

pub use cycle::*;
pub use geometry::*;
pub use rescale::*;

pub use nalgebra::{Point2, Vector2};
