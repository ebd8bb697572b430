//! Pairwise intersection engines.
//!
//! Exact case analyses shared by the curve types; all entry points are
//! crate-internal and surfaced through the curve methods and the
//! [`Curve`](crate::geometry::Curve) dispatch.

pub(crate) mod circles;
pub(crate) mod straight;
pub(crate) mod straight_circle;
