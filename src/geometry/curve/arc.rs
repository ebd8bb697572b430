use num_traits::{Signed, Zero};

use crate::error::Result;
use crate::geometry::curve::PlanarCurve;
use crate::geometry::intersect::{circles, straight_circle};
use crate::geometry::point::Point;
use crate::geometry::rect::Rect;
use crate::geometry::Intersection;
use crate::math::angle;
use crate::math::rational::{self, Rational};

use super::{Circle, Line, Ray, Segment};

/// Sweep orientation of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Counter-clockwise (left).
    Ccw,
    /// Clockwise (right).
    Cw,
}

/// A circular arc: a supporting circle, a sweep orientation, and two
/// bounding angles in `[0, 2π)`.
///
/// The swept domain runs from the source angle to the target angle in the
/// sweep direction. Equal bounding angles denote the full circle. Endpoint
/// points and other derived values are recomputed on access from the exact
/// fields; nothing is cached, so mutators cannot leave stale state behind.
///
/// Angle membership is an exact closed-interval comparison of normalized
/// rationals. Points whose angle against the center is irrational pass
/// through the approximate angle conversion first; only that conversion is
/// subject to bounded precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    center: Point,
    radius: Rational,
    orientation: Sweep,
    source_angle: Rational,
    target_angle: Rational,
}

impl Arc {
    /// Creates an arc. The radius sign is absorbed and both angles are
    /// normalized into `[0, 2π)`.
    #[must_use]
    pub fn new(
        center: Point,
        radius: Rational,
        orientation: Sweep,
        source_angle: &Rational,
        target_angle: &Rational,
    ) -> Self {
        Self {
            center,
            radius: radius.abs(),
            orientation,
            source_angle: angle::normalize(source_angle),
            target_angle: angle::normalize(target_angle),
        }
    }

    /// Internal constructor for already-normalized CCW bounds.
    pub(crate) fn raw_ccw(
        center: Point,
        radius: Rational,
        source_angle: Rational,
        target_angle: Rational,
    ) -> Self {
        Self {
            center,
            radius,
            orientation: Sweep::Ccw,
            source_angle,
            target_angle,
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

    /// Returns the sweep orientation.
    #[must_use]
    pub fn orientation(&self) -> Sweep {
        self.orientation
    }

    /// Returns the source bounding angle.
    #[must_use]
    pub fn source_angle(&self) -> &Rational {
        &self.source_angle
    }

    /// Returns the target bounding angle.
    #[must_use]
    pub fn target_angle(&self) -> &Rational {
        &self.target_angle
    }

    /// Exact squared radius, recomputed on access.
    #[must_use]
    pub fn square_radius(&self) -> Rational {
        rational::square(&self.radius)
    }

    /// Whether the domain covers the full circle.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.source_angle == self.target_angle
    }

    /// The supporting circle.
    #[must_use]
    pub fn supporting_circle(&self) -> Circle {
        Circle::new(self.center.clone(), self.radius.clone())
    }

    /// Whether both arcs lie on one circle.
    #[must_use]
    pub fn same_support(&self, other: &Arc) -> bool {
        self.center == other.center && self.radius == other.radius
    }

    /// CCW-normalized bounding angles: source/target swapped for a
    /// clockwise arc, so the returned pair always sweeps counter-clockwise.
    #[must_use]
    pub fn ccw_bounds(&self) -> (&Rational, &Rational) {
        match self.orientation {
            Sweep::Ccw => (&self.source_angle, &self.target_angle),
            Sweep::Cw => (&self.target_angle, &self.source_angle),
        }
    }

    /// Exact closed-interval membership of a normalized angle in the swept
    /// domain, wrap-aware.
    #[must_use]
    pub fn contains_angle(&self, theta: &Rational) -> bool {
        let (s, t) = self.ccw_bounds();
        angle::contains_ccw(s, t, &angle::normalize(theta))
    }

    /// Point on the supporting circle at a given angle (approximate trig).
    #[must_use]
    pub fn point_at_angle(&self, theta: &Rational) -> Point {
        let (cos, sin) = angle::unit_vector(theta);
        Point::new(
            self.center.x() + &self.radius * cos,
            self.center.y() + &self.radius * sin,
        )
    }

    /// Endpoint at the source angle, recomputed on access.
    #[must_use]
    pub fn source(&self) -> Point {
        self.point_at_angle(&self.source_angle)
    }

    /// Endpoint at the target angle, recomputed on access.
    #[must_use]
    pub fn target(&self) -> Point {
        self.point_at_angle(&self.target_angle)
    }

    /// Replaces the radius, absorbing a negative sign.
    pub fn set_radius(&mut self, radius: Rational) {
        self.radius = radius.abs();
    }

    /// Replaces the source bounding angle, normalizing into `[0, 2π)`.
    pub fn set_source_angle(&mut self, theta: &Rational) {
        self.source_angle = angle::normalize(theta);
    }

    /// Replaces the target bounding angle, normalizing into `[0, 2π)`.
    pub fn set_target_angle(&mut self, theta: &Rational) {
        self.target_angle = angle::normalize(theta);
    }

    /// Replaces the sweep orientation; the bounding angles keep their
    /// roles, so the swept domain flips to the complementary range.
    pub fn set_orientation(&mut self, orientation: Sweep) {
        self.orientation = orientation;
    }

    /// Axis-aligned bounding rectangle.
    ///
    /// Cardinal extremes inside the domain are exact (`center ± radius` on
    /// an axis); the endpoints go through the approximate trig conversion.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let mut points = vec![self.source(), self.target()];
        let zero = Rational::zero();
        let cardinals = [
            (zero.clone(), self.radius.clone(), zero.clone()),
            (angle::frac_pi_2(), zero.clone(), self.radius.clone()),
            (angle::pi(), -self.radius.clone(), zero.clone()),
            (angle::pi() + angle::frac_pi_2(), zero, -self.radius.clone()),
        ];
        for (theta, ox, oy) in cardinals {
            if self.contains_angle(&theta) {
                points.push(Point::new(self.center.x() + ox, self.center.y() + oy));
            }
        }
        Rect::bounding(&points)
    }

    /// Intersection with a line.
    #[must_use]
    pub fn intersect_line(&self, other: &Line) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, Some(self))
    }

    /// Intersection with a ray.
    #[must_use]
    pub fn intersect_ray(&self, other: &Ray) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, Some(self))
    }

    /// Intersection with a segment.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Intersection {
        straight_circle::intersect(&other.as_straight(), &self.center, &self.radius, Some(self))
    }

    /// Intersection with a circle.
    #[must_use]
    pub fn intersect_circle(&self, other: &Circle) -> Intersection {
        circles::circle_arc(other, self)
    }

    /// Intersection with another arc.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::ArcMask`](crate::error::InvariantError) if
    /// the same-circle case analysis reaches a containment mask that is
    /// unreachable for well-formed arcs; this reports a kernel defect, not
    /// an empty intersection.
    pub fn intersect_arc(&self, other: &Arc) -> Result<Intersection> {
        circles::arc_arc(self, other)
    }

    /// Overlap of two arcs that must share one supporting circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DifferentCircles`](crate::error::GeometryError)
    /// when the supports differ, and propagates the invariant failure of
    /// [`intersect_arc`](Self::intersect_arc) on an unreachable mask.
    pub fn common_circle_overlap(&self, other: &Arc) -> Result<Intersection> {
        circles::common_circle_overlap(self, other)
    }

    /// Whether the arc meets the rectangle (boundary or interior).
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

impl PlanarCurve for Arc {
    fn lies_on(&self, p: &Point) -> bool {
        self.center.square_distance(p) == self.square_radius()
            && self.contains_angle(&self.center.angle_to(p))
    }

    fn closest_point(&self, p: &Point) -> Point {
        if self.center.square_distance(p).is_zero() {
            return self.source();
        }
        let theta = self.center.angle_to(p);
        if self.contains_angle(&theta) {
            return self.supporting_circle().closest_point(p);
        }
        let source = self.source();
        let target = self.target();
        if p.square_distance(&source) <= p.square_distance(&target) {
            source
        } else {
            target
        }
    }

    fn translate(&mut self, dx: &Rational, dy: &Rational) {
        self.center = self.center.translated(dx, dy);
    }
}
