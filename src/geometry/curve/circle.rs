use num_traits::{Signed, Zero};

use crate::geometry::curve::PlanarCurve;
use crate::geometry::intersect::{circles, straight_circle};
use crate::geometry::point::Point;
use crate::geometry::rect::Rect;
use crate::geometry::Intersection;
use crate::math::rational::{self, Rational};

use super::{Arc, Line, Ray, Segment};

/// A full circle with an exact center and radius.
///
/// A negative input radius is absorbed to its absolute value; a zero radius
/// is allowed and denotes the degenerate point circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: Rational,
}

impl Circle {
    /// Creates a circle from a center and radius.
    #[must_use]
    pub fn new(center: Point, radius: Rational) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> &Rational {
        &self.radius
    }

    /// Exact squared radius.
    #[must_use]
    pub fn square_radius(&self) -> Rational {
        rational::square(&self.radius)
    }

    /// Replaces the radius, absorbing a negative sign.
    pub fn set_radius(&mut self, radius: Rational) {
        self.radius = radius.abs();
    }

    /// Axis-aligned bounding rectangle, exact.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let min = Point::new(self.center.x() - &self.radius, self.center.y() - &self.radius);
        let max = Point::new(self.center.x() + &self.radius, self.center.y() + &self.radius);
        Rect::spanning(&min, &max)
    }

    /// Intersection with a line.
    #[must_use]
    pub fn intersect_line(&self, other: &Line) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, None)
    }

    /// Intersection with a ray.
    #[must_use]
    pub fn intersect_ray(&self, other: &Ray) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, None)
    }

    /// Intersection with a segment.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, None)
    }

    /// Intersection with another circle.
    ///
    /// Coincident circles surface as a copy of this circle.
    #[must_use]
    pub fn intersect_circle(&self, other: &Circle) -> Intersection {
        circles::circle_circle(self, other)
    }

    /// Intersection with a circular arc.
    #[must_use]
    pub fn intersect_arc(&self, other: &Arc) -> Intersection {
        circles::circle_arc(self, other)
    }

    /// Whether the circle meets the rectangle (boundary or interior).
    ///
    /// Bounding-rectangle fast-reject, then the rectangle's edges tested as
    /// segments; a circle wholly inside the rectangle counts as meeting it.
    #[must_use]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let bounds = self.bounding_rect();
        if !rect.intersects(&bounds) {
            return false;
        }
        if rect.contains_rect(&bounds) {
            return true;
        }
        rect.edges()
            .iter()
            .any(|edge| !self.intersect_segment(edge).is_empty())
    }
}

impl PlanarCurve for Circle {
    fn lies_on(&self, p: &Point) -> bool {
        self.center.square_distance(p) == self.square_radius()
    }

    /// Closest point on the circle, via the bounded square root.
    ///
    /// For the center itself every point is equidistant; the point at
    /// angle zero is returned by convention.
    fn closest_point(&self, p: &Point) -> Point {
        let d2 = self.center.square_distance(p);
        if d2.is_zero() {
            return Point::new(self.center.x() + &self.radius, self.center.y().clone());
        }
        let d = rational::sqrt(&d2);
        let scale = &self.radius / d;
        Point::new(
            self.center.x() + (p.x() - self.center.x()) * &scale,
            self.center.y() + (p.y() - self.center.y()) * &scale,
        )
    }

    fn translate(&mut self, dx: &Rational, dy: &Rational) {
        self.center = self.center.translated(dx, dy);
    }
}
