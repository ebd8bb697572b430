use num_traits::Zero;

use crate::error::{GeometryError, Result};
use crate::geometry::curve::PlanarCurve;
use crate::geometry::intersect::straight::{self, Extent, StraightRef};
use crate::geometry::intersect::straight_circle;
use crate::geometry::point::{Orientation, Point};
use crate::geometry::Intersection;
use crate::math::rational::Rational;

use super::{foot_parameter, point_at, Arc, Circle, Ray, Segment};

/// An infinite line through two distinct points, directed source → target.
///
/// The direction matters only for orientation predicates; as a point set
/// the line extends infinitely on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    source: Point,
    target: Point,
}

impl Line {
    /// Creates a line through `source` and `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentEndpoints`] if the points
    /// coincide.
    pub fn new(source: Point, target: Point) -> Result<Self> {
        if source == target {
            return Err(GeometryError::CoincidentEndpoints.into());
        }
        Ok(Self { source, target })
    }

    /// Internal constructor; the caller upholds `source != target`.
    pub(crate) fn raw(source: Point, target: Point) -> Self {
        Self { source, target }
    }

    /// Returns the source point.
    #[must_use]
    pub fn source(&self) -> &Point {
        &self.source
    }

    /// Returns the target point.
    #[must_use]
    pub fn target(&self) -> &Point {
        &self.target
    }

    /// Exact x span source → target.
    #[must_use]
    pub fn delta_x(&self) -> Rational {
        self.target.x() - self.source.x()
    }

    /// Exact y span source → target.
    #[must_use]
    pub fn delta_y(&self) -> Rational {
        self.target.y() - self.source.y()
    }

    /// Slope of the line; `None` when vertical.
    #[must_use]
    pub fn slope(&self) -> Option<Rational> {
        let dx = self.delta_x();
        if dx.is_zero() {
            None
        } else {
            Some(self.delta_y() / dx)
        }
    }

    /// Whether the line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.delta_x().is_zero()
    }

    /// Whether the line is horizontal.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.delta_y().is_zero()
    }

    pub(crate) fn as_straight(&self) -> StraightRef<'_> {
        StraightRef {
            source: &self.source,
            target: &self.target,
            extent: Extent::Line,
        }
    }

    /// Intersection with another line.
    #[must_use]
    pub fn intersect_line(&self, other: &Line) -> Intersection {
        straight::intersect(&self.as_straight(), &other.as_straight())
    }

    /// Intersection with a ray.
    #[must_use]
    pub fn intersect_ray(&self, other: &Ray) -> Intersection {
        straight::intersect(&self.as_straight(), &other.as_straight())
    }

    /// Intersection with a segment.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Intersection {
        straight::intersect(&self.as_straight(), &other.as_straight())
    }

    /// Intersection with a circle.
    #[must_use]
    pub fn intersect_circle(&self, other: &Circle) -> Intersection {
        straight_circle::intersect(&self.as_straight(), other.center(), other.radius(), None)
    }

    /// Intersection with a circular arc.
    #[must_use]
    pub fn intersect_arc(&self, other: &Arc) -> Intersection {
        straight_circle::intersect(&self.as_straight(), other.center(), other.radius(), Some(other))
    }
}

impl PlanarCurve for Line {
    fn lies_on(&self, p: &Point) -> bool {
        p.orientation(&self.source, &self.target) == Orientation::Collinear
    }

    fn closest_point(&self, p: &Point) -> Point {
        let t = foot_parameter(&self.source, &self.target, p);
        point_at(&self.source, &self.target, &t)
    }

    fn translate(&mut self, dx: &Rational, dy: &Rational) {
        self.source = self.source.translated(dx, dy);
        self.target = self.target.translated(dx, dy);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::rational::{from_int, ratio};

    #[test]
    fn rejects_coincident_endpoints() {
        let p = Point::from_ints(1, 1);
        assert!(Line::new(p.clone(), p).is_err());
    }

    #[test]
    fn slope_and_verticality() {
        let l = Line::new(Point::from_ints(0, 0), Point::from_ints(2, 1)).unwrap();
        assert_eq!(l.slope(), Some(ratio(1, 2)));
        assert!(!l.is_vertical());

        let v = Line::new(Point::from_ints(3, 0), Point::from_ints(3, 5)).unwrap();
        assert_eq!(v.slope(), None);
        assert!(v.is_vertical());
        assert!(!v.is_horizontal());

        let h = Line::new(Point::from_ints(0, 2), Point::from_ints(9, 2)).unwrap();
        assert!(h.is_horizontal());
    }

    #[test]
    fn lies_on_whole_line() {
        let l = Line::new(Point::from_ints(0, 0), Point::from_ints(1, 1)).unwrap();
        // A line has no domain restriction; points before the source count.
        assert!(l.lies_on(&Point::from_ints(-4, -4)));
        assert!(l.lies_on(&Point::from_ints(9, 9)));
        assert!(!l.lies_on(&Point::from_ints(1, 2)));
    }

    #[test]
    fn closest_point_is_perpendicular_foot() {
        let l = Line::new(Point::from_ints(0, 0), Point::from_ints(4, 0)).unwrap();
        let c = l.closest_point(&Point::from_ints(-3, 5));
        // Unclamped: the foot may lie before the source.
        assert_eq!(c, Point::from_ints(-3, 0));
        assert_eq!(l.square_distance(&Point::from_ints(-3, 5)), from_int(25));
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let mut l = Line::new(Point::from_ints(0, 0), Point::from_ints(1, 0)).unwrap();
        l.translate(&from_int(2), &from_int(3));
        assert_eq!(l.source(), &Point::from_ints(2, 3));
        assert_eq!(l.target(), &Point::from_ints(3, 3));
    }
}
