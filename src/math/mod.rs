pub mod angle;
pub mod linear;
pub mod rational;

pub use rational::Rational;

/// Approximate 2D point type handed to rendering consumers.
pub type Point2 = nalgebra::Point2<f64>;

/// Approximate 2D vector type handed to rendering consumers.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for comparisons of *approximate* (f64) evaluations.
///
/// Never used by the exact predicates; those compare rationals directly.
pub const TOLERANCE: f64 = 1e-10;
