//! Circle-family × line-family intersection.
//!
//! The straight curve is substituted into the circle equation, giving a
//! quadratic whose root count is decided by the exact discriminant sign; a
//! dedicated branch handles vertical supports so no division by a zero Δx
//! occurs. Candidate points are then filtered by the straight variant's
//! parameter domain and, for arcs, by the exact angular-domain test.

use num_traits::{Signed, Zero};

use crate::geometry::curve::Arc;
use crate::geometry::point::Point;
use crate::geometry::Intersection;
use crate::math::linear::{self, QuadRoots};
use crate::math::rational::{self, Rational};

use super::straight::{in_domain, param_along, StraightRef};

/// Exact intersection of a straight curve with a circle or arc.
///
/// `arc` narrows the circle to an angular domain; `None` means the full
/// circle.
pub(crate) fn intersect(
    s: &StraightRef<'_>,
    center: &Point,
    radius: &Rational,
    arc: Option<&Arc>,
) -> Intersection {
    let candidates = support_candidates(s, center, radius);
    let mut survivors = candidates
        .into_iter()
        .filter(|p| in_domain(&param_along(s, p), s.extent))
        .filter(|p| arc.map_or(true, |a| a.contains_angle(&center.angle_to(p))));
    match (survivors.next(), survivors.next()) {
        (None, _) => Intersection::Empty,
        (Some(p), None) => Intersection::Point(p),
        (Some(p), Some(q)) => {
            Intersection::pair(Intersection::Point(p), Intersection::Point(q))
        }
    }
}

/// Intersection points of the straight support line with the full circle,
/// ignoring every domain restriction. Zero, one (tangent) or two points.
fn support_candidates(s: &StraightRef<'_>, center: &Point, radius: &Rational) -> Vec<Point> {
    let dx = s.target.x() - s.source.x();
    if dx.is_zero() {
        // Vertical support: x is fixed, solve (y - cy)² = r² - (x - cx)².
        let x = s.source.x();
        let off = x - center.x();
        let k = rational::square(radius) - rational::square(&off);
        if k.is_negative() {
            return Vec::new();
        }
        if k.is_zero() {
            return vec![Point::new(x.clone(), center.y().clone())];
        }
        let root = rational::sqrt(&k);
        return vec![
            Point::new(x.clone(), center.y() - &root),
            Point::new(x.clone(), center.y() + &root),
        ];
    }

    // y = m·x + e on the support; substituted into the circle equation.
    let dy = s.target.y() - s.source.y();
    let m = dy / &dx;
    let e = s.source.y() - &m * s.source.x();
    let g = &e - center.y();
    let two = rational::from_int(2);
    let a = rational::square(&m) + rational::from_int(1);
    let b = &two * &m * &g - &two * center.x();
    let c = rational::square(center.x()) + rational::square(&g) - rational::square(radius);
    match linear::solve_quadratic(&a, &b, &c) {
        QuadRoots::Empty => Vec::new(),
        QuadRoots::Double(x) => {
            let y = &m * &x + &e;
            vec![Point::new(x, y)]
        }
        QuadRoots::Two(x1, x2) => {
            let y1 = &m * &x1 + &e;
            let y2 = &m * &x2 + &e;
            vec![Point::new(x1, y1), Point::new(x2, y2)]
        }
    }
}
