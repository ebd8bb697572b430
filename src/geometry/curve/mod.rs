mod arc;
mod circle;
mod line;
mod ray;
mod segment;

pub use arc::{Arc, Sweep};
pub use circle::Circle;
pub use line::Line;
pub use ray::Ray;
pub use segment::Segment;

use crate::error::Result;
use crate::geometry::point::Point;
use crate::geometry::Intersection;
use crate::math::rational::{self, Rational};

/// Shared read-only queries and the one mutator every curve supports.
pub trait PlanarCurve {
    /// Exact membership of a point on the curve.
    fn lies_on(&self, p: &Point) -> bool;

    /// Closest point of the curve to `p`.
    ///
    /// Exact for the line family; circle-family curves go through the
    /// bounded square root.
    fn closest_point(&self, p: &Point) -> Point;

    /// Squared distance from `p` to the curve, via [`closest_point`]
    /// (and therefore exact exactly when the closest point is).
    ///
    /// [`closest_point`]: PlanarCurve::closest_point
    fn square_distance(&self, p: &Point) -> Rational {
        p.square_distance(&self.closest_point(p))
    }

    /// Distance from `p` to the curve via the bounded square root.
    fn distance(&self, p: &Point) -> Rational {
        rational::sqrt(&self.square_distance(p))
    }

    /// Shifts the curve by `(dx, dy)`.
    fn translate(&mut self, dx: &Rational, dy: &Rational);
}

/// Parameter of the perpendicular foot of `p` on the line source → target,
/// in units of the source→target span. Exact.
pub(crate) fn foot_parameter(source: &Point, target: &Point, p: &Point) -> Rational {
    let dx = target.x() - source.x();
    let dy = target.y() - source.y();
    let num = (p.x() - source.x()) * &dx + (p.y() - source.y()) * &dy;
    let den = &dx * &dx + &dy * &dy;
    num / den
}

/// Point at parameter `t` on the line source → target. Exact.
pub(crate) fn point_at(source: &Point, target: &Point, t: &Rational) -> Point {
    Point::new(
        source.x() + t * (target.x() - source.x()),
        source.y() + t * (target.y() - source.y()),
    )
}

/// A closed union of every supported curve kind.
///
/// The exhaustive match in [`intersection`](Curve::intersection) is the
/// compile-time proof that all twenty-five pairwise combinations are
/// handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Arc(Arc),
}

impl Curve {
    /// Exact intersection with another curve.
    ///
    /// # Errors
    ///
    /// Only the arc/arc same-circle analysis can fail, with a typed
    /// invariant violation; every geometric outcome, including emptiness,
    /// is data.
    pub fn intersection(&self, other: &Curve) -> Result<Intersection> {
        Ok(match (self, other) {
            (Curve::Line(a), Curve::Line(b)) => a.intersect_line(b),
            (Curve::Line(a), Curve::Ray(b)) => a.intersect_ray(b),
            (Curve::Line(a), Curve::Segment(b)) => a.intersect_segment(b),
            (Curve::Line(a), Curve::Circle(b)) => a.intersect_circle(b),
            (Curve::Line(a), Curve::Arc(b)) => a.intersect_arc(b),
            (Curve::Ray(a), Curve::Line(b)) => a.intersect_line(b),
            (Curve::Ray(a), Curve::Ray(b)) => a.intersect_ray(b),
            (Curve::Ray(a), Curve::Segment(b)) => a.intersect_segment(b),
            (Curve::Ray(a), Curve::Circle(b)) => a.intersect_circle(b),
            (Curve::Ray(a), Curve::Arc(b)) => a.intersect_arc(b),
            (Curve::Segment(a), Curve::Line(b)) => a.intersect_line(b),
            (Curve::Segment(a), Curve::Ray(b)) => a.intersect_ray(b),
            (Curve::Segment(a), Curve::Segment(b)) => a.intersect_segment(b),
            (Curve::Segment(a), Curve::Circle(b)) => a.intersect_circle(b),
            (Curve::Segment(a), Curve::Arc(b)) => a.intersect_arc(b),
            (Curve::Circle(a), Curve::Line(b)) => a.intersect_line(b),
            (Curve::Circle(a), Curve::Ray(b)) => a.intersect_ray(b),
            (Curve::Circle(a), Curve::Segment(b)) => a.intersect_segment(b),
            (Curve::Circle(a), Curve::Circle(b)) => a.intersect_circle(b),
            (Curve::Circle(a), Curve::Arc(b)) => a.intersect_arc(b),
            (Curve::Arc(a), Curve::Line(b)) => a.intersect_line(b),
            (Curve::Arc(a), Curve::Ray(b)) => a.intersect_ray(b),
            (Curve::Arc(a), Curve::Segment(b)) => a.intersect_segment(b),
            (Curve::Arc(a), Curve::Circle(b)) => a.intersect_circle(b),
            (Curve::Arc(a), Curve::Arc(b)) => return a.intersect_arc(b),
        })
    }
}

impl PlanarCurve for Curve {
    fn lies_on(&self, p: &Point) -> bool {
        match self {
            Curve::Line(c) => c.lies_on(p),
            Curve::Ray(c) => c.lies_on(p),
            Curve::Segment(c) => c.lies_on(p),
            Curve::Circle(c) => c.lies_on(p),
            Curve::Arc(c) => c.lies_on(p),
        }
    }

    fn closest_point(&self, p: &Point) -> Point {
        match self {
            Curve::Line(c) => c.closest_point(p),
            Curve::Ray(c) => c.closest_point(p),
            Curve::Segment(c) => c.closest_point(p),
            Curve::Circle(c) => c.closest_point(p),
            Curve::Arc(c) => c.closest_point(p),
        }
    }

    fn translate(&mut self, dx: &Rational, dy: &Rational) {
        match self {
            Curve::Line(c) => c.translate(dx, dy),
            Curve::Ray(c) => c.translate(dx, dy),
            Curve::Segment(c) => c.translate(dx, dy),
            Curve::Circle(c) => c.translate(dx, dy),
            Curve::Arc(c) => c.translate(dx, dy),
        }
    }
}

impl From<Line> for Curve {
    fn from(c: Line) -> Self {
        Curve::Line(c)
    }
}

impl From<Ray> for Curve {
    fn from(c: Ray) -> Self {
        Curve::Ray(c)
    }
}

impl From<Segment> for Curve {
    fn from(c: Segment) -> Self {
        Curve::Segment(c)
    }
}

impl From<Circle> for Curve {
    fn from(c: Circle) -> Self {
        Curve::Circle(c)
    }
}

impl From<Arc> for Curve {
    fn from(c: Arc) -> Self {
        Curve::Arc(c)
    }
}
