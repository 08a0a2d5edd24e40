//! Height comparisons between landmark positions.
//!
//! Image y grows downward, so a positive vertical distance means `b` is lower
//! than `a`. Inputs must be finite.

use posture_base::Vec2;

/// Signed vertical distance `b.y - a.y`.
pub fn vertical_distance(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    b.y - a.y
}

/// Unsigned vertical distance.
pub fn abs_diff(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    (a.y - b.y).abs()
}

pub fn midpoint_y(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    (a.y + b.y) / 2.0
}

/// True when `a` and `b` sit at nearly the same height, i.e. the segment
/// between them lies horizontally.
pub fn is_flat(a: Vec2<f64>, b: Vec2<f64>, threshold: f64) -> bool {
    abs_diff(a, b) < threshold
}
