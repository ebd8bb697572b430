//! Line-family × line-family intersection.
//!
//! The three straight variants share one engine. Non-parallel supports get
//! the Cramer solution restricted to each variant's domain; collinear
//! supports are intersected as exact parameter intervals along the first
//! curve, which covers every per-pair sub-case (ray/ray facing or nested,
//! segment/segment overlap, line/any coincidence) in one place.

use num_traits::{One, Zero};

use crate::geometry::curve::{point_at, Line, Ray, Segment};
use crate::geometry::point::{Orientation, Point};
use crate::geometry::Intersection;
use crate::math::linear;
use crate::math::rational::Rational;

/// Which straight variant a source/target pair stands for; selects the
/// valid parameter domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extent {
    Line,
    Ray,
    Segment,
}

/// Borrowed view of a straight curve.
pub(crate) struct StraightRef<'a> {
    pub source: &'a Point,
    pub target: &'a Point,
    pub extent: Extent,
}

impl StraightRef<'_> {
    /// Rebuilds the owned curve this view was taken from.
    fn to_curve(&self) -> Intersection {
        match self.extent {
            Extent::Line => Intersection::Line(Line::raw(self.source.clone(), self.target.clone())),
            Extent::Ray => Intersection::Ray(Ray::raw(self.source.clone(), self.target.clone())),
            Extent::Segment => {
                Intersection::Segment(Segment::raw(self.source.clone(), self.target.clone()))
            }
        }
    }
}

/// Exact intersection of two straight curves.
pub(crate) fn intersect(a: &StraightRef<'_>, b: &StraightRef<'_>) -> Intersection {
    let d1x = a.target.x() - a.source.x();
    let d1y = a.target.y() - a.source.y();
    let d2x = b.target.x() - b.source.x();
    let d2y = b.target.y() - b.source.y();

    let det = linear::det2(&d1x, &d2x, &d1y, &d2y);
    if det.is_zero() {
        return collinear(a, b);
    }

    // Unique support intersection by Cramer's rule, exact.
    let ex = b.source.x() - a.source.x();
    let ey = b.source.y() - a.source.y();
    let t = (&ex * &d2y - &ey * &d2x) / &det;
    let u = (&ex * &d1y - &ey * &d1x) / &det;
    if !in_domain(&t, a.extent) || !in_domain(&u, b.extent) {
        return Intersection::Empty;
    }
    Intersection::Point(point_at(a.source, a.target, &t))
}

pub(crate) fn in_domain(t: &Rational, extent: Extent) -> bool {
    match extent {
        Extent::Line => true,
        Extent::Ray => t >= &Rational::zero(),
        Extent::Segment => t >= &Rational::zero() && t <= &Rational::one(),
    }
}

/// A one-sided interval bound: the parameter value and which input curve
/// produced it.
#[derive(Clone)]
struct Bound {
    at: Rational,
    of: Side,
}

#[derive(Clone, Copy)]
enum Side {
    A,
    B,
}

fn collinear(a: &StraightRef<'_>, b: &StraightRef<'_>) -> Intersection {
    if b.source.orientation(a.source, a.target) != Orientation::Collinear {
        // Parallel, distinct supports.
        return Intersection::Empty;
    }

    // Both curves as parameter intervals along a's direction.
    let (a_lo, a_hi) = match a.extent {
        Extent::Line => (None, None),
        Extent::Ray => (Some(bound(Rational::zero(), Side::A)), None),
        Extent::Segment => (
            Some(bound(Rational::zero(), Side::A)),
            Some(bound(Rational::one(), Side::A)),
        ),
    };
    let ps = param_along(a, b.source);
    let pt = param_along(a, b.target);
    let (b_lo, b_hi) = match b.extent {
        Extent::Line => (None, None),
        Extent::Ray => {
            if pt > ps {
                // b points along a's direction.
                (Some(bound(ps, Side::B)), None)
            } else {
                (None, Some(bound(ps, Side::B)))
            }
        }
        Extent::Segment => {
            if ps <= pt {
                (Some(bound(ps, Side::B)), Some(bound(pt, Side::B)))
            } else {
                (Some(bound(pt, Side::B)), Some(bound(ps, Side::B)))
            }
        }
    };

    let lo = max_bound(a_lo, b_lo);
    let hi = min_bound(a_hi, b_hi);

    match (lo, hi) {
        // Both supports unbounded: only lines reach this, coincident.
        (None, None) => a.to_curve(),
        // Half-bounded overlap: the binding bound comes from a ray pointing
        // along the unbounded side; the overlap is exactly that ray.
        (Some(lo), None) => side_ref(a, b, lo.of).to_curve(),
        (None, Some(hi)) => side_ref(a, b, hi.of).to_curve(),
        (Some(lo), Some(hi)) => {
            if lo.at > hi.at {
                Intersection::Empty
            } else if lo.at == hi.at {
                Intersection::Point(point_at(a.source, a.target, &lo.at))
            } else {
                Intersection::Segment(Segment::raw(
                    point_at(a.source, a.target, &lo.at),
                    point_at(a.source, a.target, &hi.at),
                ))
            }
        }
    }
}

fn bound(at: Rational, of: Side) -> Bound {
    Bound { at, of }
}

fn side_ref<'a>(a: &'a StraightRef<'a>, b: &'a StraightRef<'a>, side: Side) -> &'a StraightRef<'a> {
    match side {
        Side::A => a,
        Side::B => b,
    }
}

fn max_bound(x: Option<Bound>, y: Option<Bound>) -> Option<Bound> {
    match (x, y) {
        (Some(p), Some(q)) => Some(if p.at >= q.at { p } else { q }),
        (p, None) => p,
        (None, q) => q,
    }
}

fn min_bound(x: Option<Bound>, y: Option<Bound>) -> Option<Bound> {
    match (x, y) {
        (Some(p), Some(q)) => Some(if p.at <= q.at { p } else { q }),
        (p, None) => p,
        (None, q) => q,
    }
}

/// Parameter of a collinear point along a's source→target span, measured on
/// the dominant axis. Exact.
pub(crate) fn param_along(a: &StraightRef<'_>, p: &Point) -> Rational {
    let dx = a.target.x() - a.source.x();
    if dx.is_zero() {
        (p.y() - a.source.y()) / (a.target.y() - a.source.y())
    } else {
        (p.x() - a.source.x()) / dx
    }
}
