//! An exact-arithmetic planar geometry kernel.
//!
//! Curves — points, lines, rays, segments, circles, circular arcs — carry
//! arbitrary-precision rational coordinates, and every pairwise
//! intersection is computed by exact case analysis into a tagged
//! [`Intersection`] result. The only approximate operations are the
//! precision-bounded square root and the angle/trig conversions, both
//! documented with their tolerance; no predicate compares against an
//! epsilon.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, InvariantError, PlanqError, Result};
pub use geometry::{
    Arc, Circle, Curve, Intersection, IntervalPos, Line, Orientation, PlanarCurve, Point, Ray,
    Rect, Segment, Sweep,
};
pub use math::Rational;
