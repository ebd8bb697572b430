use num_traits::{Signed, Zero};

use crate::error::{GeometryError, Result};
use crate::geometry::curve::PlanarCurve;
use crate::geometry::intersect::straight::{self, Extent, StraightRef};
use crate::geometry::intersect::straight_circle;
use crate::geometry::point::{IntervalPos, Orientation, Point};
use crate::geometry::Intersection;
use crate::math::rational::Rational;

use super::{foot_parameter, point_at, Arc, Circle, Line, Segment};

/// A half-infinite curve from `source` through `target` and beyond.
///
/// The domain excludes points before the source; the target only fixes the
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray {
    source: Point,
    target: Point,
}

impl Ray {
    /// Creates a ray from `source` through `target`.
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

    /// Returns the source point (the ray's origin).
    #[must_use]
    pub fn source(&self) -> &Point {
        &self.source
    }

    /// Returns the target point (direction marker, not an endpoint).
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

    /// Slope of the supporting line; `None` when vertical.
    #[must_use]
    pub fn slope(&self) -> Option<Rational> {
        let dx = self.delta_x();
        if dx.is_zero() {
            None
        } else {
            Some(self.delta_y() / dx)
        }
    }

    /// Whether the supporting line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.delta_x().is_zero()
    }

    /// Whether the supporting line is horizontal.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.delta_y().is_zero()
    }

    pub(crate) fn as_straight(&self) -> StraightRef<'_> {
        StraightRef {
            source: &self.source,
            target: &self.target,
            extent: Extent::Ray,
        }
    }

    /// Intersection with a line.
    #[must_use]
    pub fn intersect_line(&self, other: &Line) -> Intersection {
        straight::intersect(&self.as_straight(), &other.as_straight())
    }

    /// Intersection with another ray.
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

impl PlanarCurve for Ray {
    fn lies_on(&self, p: &Point) -> bool {
        if p.orientation(&self.source, &self.target) != Orientation::Collinear {
            return false;
        }
        // Behind the target is still on the ray; only Before is excluded.
        p.interval_position(&self.source, &self.target) != IntervalPos::Before
    }

    fn closest_point(&self, p: &Point) -> Point {
        let t = foot_parameter(&self.source, &self.target, p);
        if t.is_negative() {
            self.source.clone()
        } else {
            point_at(&self.source, &self.target, &t)
        }
    }

    fn translate(&mut self, dx: &Rational, dy: &Rational) {
        self.source = self.source.translated(dx, dy);
        self.target = self.target.translated(dx, dy);
    }
}
