use super::curve::{Arc, Circle, Line, Ray, Segment};
use super::point::Point;

/// The exact intersection set of two curves.
///
/// Every intersection operation reports through this one closed union;
/// exactly one variant is populated, and a geometrically empty result is
/// the `Empty` variant, never an error. `Clone` deep-copies the populated
/// variant, so a retained result is independent of later computations.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// No shared point.
    Empty,
    /// A single shared point.
    Point(Point),
    /// A shared bounded sub-curve.
    Segment(Segment),
    /// A shared half-infinite sub-curve.
    Ray(Ray),
    /// Full line coincidence.
    Line(Line),
    /// A shared sub-arc.
    Arc(Arc),
    /// Full circle coincidence.
    Circle(Circle),
    /// Exactly two disjoint results: two points, a point and a sub-curve,
    /// or two sub-curves. Elements are never `Empty` or nested pairs.
    Pair(Box<Intersection>, Box<Intersection>),
}

impl Intersection {
    /// Builds a pair result.
    ///
    /// The caller upholds the element invariant: neither side is `Empty`
    /// or itself a pair.
    #[must_use]
    pub fn pair(first: Intersection, second: Intersection) -> Self {
        debug_assert!(
            !matches!(first, Intersection::Empty | Intersection::Pair(..)),
            "invalid pair element"
        );
        debug_assert!(
            !matches!(second, Intersection::Empty | Intersection::Pair(..)),
            "invalid pair element"
        );
        Intersection::Pair(Box::new(first), Box::new(second))
    }

    /// Whether this is the empty outcome.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    /// The single point, if the result is exactly one point.
    #[must_use]
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Intersection::Point(p) => Some(p),
            _ => None,
        }
    }

    /// Both points, if the result is a pair of points.
    #[must_use]
    pub fn as_point_pair(&self) -> Option<(&Point, &Point)> {
        match self {
            Intersection::Pair(a, b) => match (a.as_ref(), b.as_ref()) {
                (Intersection::Point(p), Intersection::Point(q)) => Some((p, q)),
                _ => None,
            },
            _ => None,
        }
    }
}
