pub mod angle;
pub mod arc_2d;

pub use angle::Angle;

/// 2D point type.
///
/// Coordinates follow the screen convention: `x` grows to the right and
/// `y` grows downward.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` when two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < TOLERANCE
}
