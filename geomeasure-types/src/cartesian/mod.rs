//! Types in screen (pixel) coordinates.

pub use nalgebra::{center, Point2, Vector2};

/// 2d point on the screen in pixels from the top-left corner.
pub type Point2d = Point2<f64>;

/// Screen-space offset between two [`Point2d`]s.
pub type Vector2d = Vector2<f64>;
