use thiserror::Error;

/// Top-level error type for the planq geometry kernel.
#[derive(Debug, Error)]
pub enum PlanqError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

/// Caller precondition violations, signaled at the API boundary.
///
/// A geometrically empty intersection is never an error; it is reported as
/// [`Intersection::Empty`](crate::geometry::Intersection::Empty).
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate curve: source and target coincide")]
    CoincidentEndpoints,

    #[error("arcs lie on different supporting circles")]
    DifferentCircles,
}

/// Defects in the kernel's own case analysis.
///
/// These branches are reachable only if an upstream invariant is broken;
/// they indicate a bug in the geometry, not a legitimate empty result, and
/// must never be swallowed.
#[derive(Debug, Error)]
pub enum InvariantError {
    #[error("unreachable arc containment mask {mask:#06b}")]
    ArcMask { mask: u8 },
}

/// Convenience type alias for results using [`PlanqError`].
pub type Result<T> = std::result::Result<T, PlanqError>;
