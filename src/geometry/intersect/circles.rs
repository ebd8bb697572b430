//! Circle-family intersection.
//!
//! `inspect` is the core circle/circle analysis. Tangency and containment
//! are decided on squared quantities, so every kiss verdict is exact and
//! kiss points are exact rationals; only the secant case takes a bounded
//! square root. Arc results filter the circle/circle points through the
//! exact angular-domain tests, and arcs on one supporting circle go
//! through a closed sixteen-way containment-mask analysis.

use num_traits::{Signed, Zero};

use crate::error::{GeometryError, InvariantError, Result};
use crate::geometry::curve::{Arc, Circle};
use crate::geometry::point::Point;
use crate::geometry::Intersection;
use crate::math::linear::{self, QuadRoots};
use crate::math::rational::{self, Rational};

/// Outcome of intersecting two supporting circles.
enum RoundRelation {
    /// One circle, reported twice.
    Coincident,
    /// No shared boundary point.
    Empty,
    /// Kissing circles: exactly one exact point.
    One(Point),
    /// Secant circles: two points, bounded-sqrt precision.
    Two(Point, Point),
}

/// The point `c1 + frac · (c2 − c1)`, exact.
fn along_centers(c1: &Point, c2: &Point, frac: &Rational) -> Point {
    Point::new(
        c1.x() + frac * (c2.x() - c1.x()),
        c1.y() + frac * (c2.y() - c1.y()),
    )
}

/// Case-complete circle/circle analysis on squared quantities.
fn inspect(c1: &Point, r1: &Rational, c2: &Point, r2: &Rational) -> RoundRelation {
    let d2 = c1.square_distance(c2);

    // Both degenerate to the same point.
    if r1.is_zero() && r2.is_zero() && d2.is_zero() {
        return RoundRelation::Coincident;
    }

    let sum = r1 + r2;
    let sum2 = rational::square(&sum);
    if d2 == sum2 {
        // External kiss; d equals r1 + r2 exactly, so the point is exact.
        return RoundRelation::One(along_centers(c1, c2, &(r1 / &sum)));
    }
    if d2 > sum2 {
        return RoundRelation::Empty;
    }

    let diff = (r1 - r2).abs();
    if d2.is_zero() {
        // Concentric: coincident when the radii agree, otherwise one
        // strictly inside the other with no boundary contact.
        return if diff.is_zero() {
            RoundRelation::Coincident
        } else {
            RoundRelation::Empty
        };
    }
    let diff2 = rational::square(&diff);
    if d2 == diff2 {
        // Internal kiss; the point sits at the larger circle's radius
        // fraction along the center line.
        return if r1 >= r2 {
            RoundRelation::One(along_centers(c1, c2, &(r1 / &diff)))
        } else {
            RoundRelation::One(along_centers(c2, c1, &(r2 / &diff)))
        };
    }
    if d2 < diff2 {
        // Strict containment.
        return RoundRelation::Empty;
    }

    secant_points(c1, r1, c2, r2)
}

/// The two proper intersection points, via the radical axis.
fn secant_points(c1: &Point, r1: &Rational, c2: &Point, r2: &Rational) -> RoundRelation {
    let two = rational::from_int(2);
    let a = &two * (c2.x() - c1.x());
    let b = &two * (c2.y() - c1.y());
    let c = rational::square(r1) - rational::square(r2) - rational::square(c1.x())
        + rational::square(c2.x())
        - rational::square(c1.y())
        + rational::square(c2.y());

    if b.is_zero() {
        // Centers share a y-coordinate: the radical axis fixes x directly,
        // avoiding the division by the zero y-span.
        let x = &c / &a;
        let k = rational::square(r1) - rational::square(&(&x - c1.x()));
        let root = rational::sqrt(&k);
        return RoundRelation::Two(
            Point::new(x.clone(), c1.y() - &root),
            Point::new(x, c1.y() + &root),
        );
    }

    // y = (c − a·x) / b, substituted into the first circle equation.
    let p = -&a / &b;
    let q = &c / &b - c1.y();
    let qa = rational::square(&p) + rational::from_int(1);
    let qb = &two * &p * &q - &two * c1.x();
    let qc = rational::square(c1.x()) + rational::square(&q) - rational::square(r1);
    match linear::solve_quadratic(&qa, &qb, &qc) {
        // Strict secant configuration: the discriminant is positive; the
        // degenerate verdicts only restate tangency already ruled out.
        QuadRoots::Empty => RoundRelation::Empty,
        QuadRoots::Double(x) => {
            let y = (&c - &a * &x) / &b;
            RoundRelation::One(Point::new(x, y))
        }
        QuadRoots::Two(x1, x2) => {
            let y1 = (&c - &a * &x1) / &b;
            let y2 = (&c - &a * &x2) / &b;
            RoundRelation::Two(Point::new(x1, y1), Point::new(x2, y2))
        }
    }
}

/// Circle × circle.
pub(crate) fn circle_circle(this: &Circle, other: &Circle) -> Intersection {
    match inspect(this.center(), this.radius(), other.center(), other.radius()) {
        RoundRelation::Coincident => Intersection::Circle(this.clone()),
        RoundRelation::Empty => Intersection::Empty,
        RoundRelation::One(p) => Intersection::Point(p),
        RoundRelation::Two(p, q) => {
            Intersection::pair(Intersection::Point(p), Intersection::Point(q))
        }
    }
}

fn on_arc(arc: &Arc, p: &Point) -> bool {
    arc.contains_angle(&arc.center().angle_to(p))
}

fn collect_points(points: Vec<Point>) -> Intersection {
    let mut it = points.into_iter();
    match (it.next(), it.next()) {
        (None, _) => Intersection::Empty,
        (Some(p), None) => Intersection::Point(p),
        (Some(p), Some(q)) => Intersection::pair(Intersection::Point(p), Intersection::Point(q)),
    }
}

/// Circle × arc.
pub(crate) fn circle_arc(circle: &Circle, arc: &Arc) -> Intersection {
    match inspect(circle.center(), circle.radius(), arc.center(), arc.radius()) {
        // One supporting circle: the overlap is the whole arc.
        RoundRelation::Coincident => Intersection::Arc(arc.clone()),
        RoundRelation::Empty => Intersection::Empty,
        RoundRelation::One(p) => {
            if on_arc(arc, &p) {
                Intersection::Point(p)
            } else {
                Intersection::Empty
            }
        }
        RoundRelation::Two(p, q) => {
            collect_points([p, q].into_iter().filter(|p| on_arc(arc, p)).collect())
        }
    }
}

/// Arc × arc.
pub(crate) fn arc_arc(this: &Arc, other: &Arc) -> Result<Intersection> {
    // Coincident supports, including both relation degeneracies, take the
    // same-circle analysis.
    if this.same_support(other) {
        return same_circle_overlap(this, other);
    }
    let result = match inspect(this.center(), this.radius(), other.center(), other.radius()) {
        RoundRelation::Coincident => return same_circle_overlap(this, other),
        RoundRelation::Empty => Intersection::Empty,
        RoundRelation::One(p) => {
            if on_arc(this, &p) && on_arc(other, &p) {
                Intersection::Point(p)
            } else {
                Intersection::Empty
            }
        }
        RoundRelation::Two(p, q) => collect_points(
            [p, q]
                .into_iter()
                .filter(|p| on_arc(this, p) && on_arc(other, p))
                .collect(),
        ),
    };
    Ok(result)
}

/// Overlap of two arcs that must share one supporting circle.
pub(crate) fn common_circle_overlap(this: &Arc, other: &Arc) -> Result<Intersection> {
    if !this.same_support(other) {
        return Err(GeometryError::DifferentCircles.into());
    }
    same_circle_overlap(this, other)
}

/// Collapses a CCW angular range on an arc's circle into a point (equal
/// bounds) or a CCW sub-arc.
fn span(arc: &Arc, from: &Rational, to: &Rational) -> Intersection {
    if from == to {
        Intersection::Point(arc.point_at_angle(from))
    } else {
        Intersection::Arc(Arc::raw_ccw(
            arc.center().clone(),
            arc.radius().clone(),
            from.clone(),
            to.clone(),
        ))
    }
}

/// The sixteen-way containment-mask analysis for two arcs on one circle.
///
/// Both arcs are normalized to CCW bounds; full-circle arcs short-circuit
/// because the mask derivation assumes proper arcs. The mask bits record
/// which CCW-normalized endpoints lie in the other arc's closed domain.
/// Closed-interval containment on a circle forces two implications —
/// an entering endpoint without its exit means the other arc's exit lies
/// inside (bit0 without bit1 requires bit3, bit1 without bit0 requires
/// bit2, and symmetrically) — so six masks cannot occur for well-formed
/// arcs and are reported as invariant violations, never silently dropped.
fn same_circle_overlap(this: &Arc, other: &Arc) -> Result<Intersection> {
    if other.is_full_circle() {
        return Ok(Intersection::Arc(this.clone()));
    }
    if this.is_full_circle() {
        return Ok(Intersection::Arc(other.clone()));
    }

    let (s1, t1) = this.ccw_bounds();
    let (s2, t2) = other.ccw_bounds();

    let mut mask = 0_u8;
    if other.contains_angle(s1) {
        mask |= 0b0001;
    }
    if other.contains_angle(t1) {
        mask |= 0b0010;
    }
    if this.contains_angle(s2) {
        mask |= 0b0100;
    }
    if this.contains_angle(t2) {
        mask |= 0b1000;
    }

    let result = match mask {
        0b0000 => Intersection::Empty,
        // This arc lies inside the other (possibly touching bounds).
        0b0011 | 0b0111 | 0b1011 => Intersection::Arc(this.clone()),
        // The other arc lies inside this one.
        0b1100 | 0b1101 | 0b1110 => Intersection::Arc(other.clone()),
        // Single overlap range entered at s1, left at t2.
        0b1001 => span(this, s1, t2),
        // Single overlap range entered at s2, left at t1.
        0b0110 => span(this, s2, t1),
        0b1111 => {
            if s1 == s2 && t1 == t2 {
                Intersection::Arc(this.clone())
            } else {
                // Mutual containment of all four endpoints: two disjoint
                // overlap ranges.
                Intersection::pair(span(this, s1, t2), span(this, s2, t1))
            }
        }
        m => return Err(InvariantError::ArcMask { mask: m }.into()),
    };
    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanqError;
    use crate::geometry::curve::{PlanarCurve, Sweep};
    use crate::math::angle;
    use crate::math::rational::{from_int, ratio, to_f64};
    use crate::math::TOLERANCE;

    fn pt(x: i64, y: i64) -> Point {
        Point::from_ints(x, y)
    }

    fn circle(x: i64, y: i64, r: i64) -> Circle {
        Circle::new(pt(x, y), from_int(r))
    }

    fn unit_arc(from: &Rational, to: &Rational) -> Arc {
        Arc::new(pt(0, 0), from_int(1), Sweep::Ccw, from, to)
    }

    #[test]
    fn external_kiss_is_one_exact_point() {
        let a = circle(0, 0, 5);
        let b = circle(8, 0, 3);
        assert_eq!(a.intersect_circle(&b), Intersection::Point(pt(5, 0)));
        assert_eq!(b.intersect_circle(&a), Intersection::Point(pt(5, 0)));
    }

    #[test]
    fn internal_kiss_is_one_exact_point() {
        let a = circle(0, 0, 5);
        let b = circle(2, 0, 3);
        assert_eq!(a.intersect_circle(&b), Intersection::Point(pt(5, 0)));
        assert_eq!(b.intersect_circle(&a), Intersection::Point(pt(5, 0)));
    }

    #[test]
    fn distant_circles_are_disjoint() {
        let a = circle(0, 0, 1);
        let b = circle(10, 0, 1);
        assert_eq!(a.intersect_circle(&b), Intersection::Empty);
    }

    #[test]
    fn strict_containment_is_empty() {
        let a = circle(0, 0, 5);
        let b = circle(1, 0, 2);
        assert_eq!(a.intersect_circle(&b), Intersection::Empty);
    }

    #[test]
    fn concentric_unequal_is_empty() {
        let a = circle(0, 0, 5);
        let b = circle(0, 0, 2);
        assert_eq!(a.intersect_circle(&b), Intersection::Empty);
    }

    #[test]
    fn coincident_circles_report_a_circle() {
        let a = circle(3, -2, 4);
        assert_eq!(a.intersect_circle(&a.clone()), Intersection::Circle(a));
    }

    #[test]
    fn degenerate_point_circles() {
        let a = circle(0, 0, 0);
        assert_eq!(a.intersect_circle(&circle(0, 0, 0)), Intersection::Circle(a.clone()));
        assert_eq!(a.intersect_circle(&circle(3, 0, 0)), Intersection::Empty);
        // A point circle kissing a proper circle from outside.
        assert_eq!(a.intersect_circle(&circle(5, 0, 5)), Intersection::Point(pt(0, 0)));
    }

    #[test]
    fn secant_circles_shared_y_axis_give_exact_points() {
        // Radical axis at x = 3; the roots are perfect squares.
        let a = circle(0, 0, 5);
        let b = circle(6, 0, 5);
        let result = a.intersect_circle(&b);
        let (p, q) = result.as_point_pair().unwrap();
        assert_eq!(p, &pt(3, -4));
        assert_eq!(q, &pt(3, 4));
    }

    #[test]
    fn secant_circles_shared_x_axis_give_exact_points() {
        let a = circle(0, 0, 5);
        let b = circle(0, 6, 5);
        let result = a.intersect_circle(&b);
        let (p, q) = result.as_point_pair().unwrap();
        let (lo, hi) = if p.x() <= q.x() { (p, q) } else { (q, p) };
        assert_eq!(lo, &pt(-4, 3));
        assert_eq!(hi, &pt(4, 3));
    }

    #[test]
    fn secant_circles_irrational_points_are_bounded_precision() {
        // Radical axis at x = 3/2 exactly; y = ±√(25 − 9/4) needs the
        // bounded square root.
        let a = circle(0, 0, 5);
        let b = circle(3, 0, 5);
        let result = a.intersect_circle(&b);
        let (p, q) = result.as_point_pair().unwrap();
        assert_eq!(p.x(), &ratio(3, 2));
        assert_eq!(q.x(), &ratio(3, 2));
        let y = to_f64(q.y());
        approx::assert_relative_eq!(y, (25.0 - 2.25_f64).sqrt(), epsilon = TOLERANCE);
        approx::assert_relative_eq!(to_f64(p.y()), -y, epsilon = TOLERANCE);
        // Residual against the circle equation stays within the documented
        // square-root tolerance, far under the test tolerance.
        let r2 = from_int(25);
        let res_p = to_f64(&(a.center().square_distance(p) - &r2));
        let res_q = to_f64(&(b.center().square_distance(q) - &r2));
        assert!(res_p.abs() < TOLERANCE, "res={res_p}");
        assert!(res_q.abs() < TOLERANCE, "res={res_q}");
    }

    #[test]
    fn skew_centers_secant_points_satisfy_both_circles() {
        // Centers share neither axis; the general radical-axis branch.
        let a = circle(0, 0, 5);
        let b = circle(3, 3, 4);
        let result = a.intersect_circle(&b);
        let (p, q) = result.as_point_pair().unwrap();
        for point in [p, q] {
            let res_a = to_f64(&(a.center().square_distance(point) - from_int(25)));
            let res_b = to_f64(&(b.center().square_distance(point) - from_int(16)));
            assert!(res_a.abs() < TOLERANCE, "res_a={res_a}");
            assert!(res_b.abs() < TOLERANCE, "res_b={res_b}");
        }
    }

    #[test]
    fn circle_arc_filters_by_angular_domain() {
        let upper = Arc::new(pt(0, 0), from_int(5), Sweep::Ccw, &Rational::zero(), &angle::pi());
        let b = circle(6, 0, 5);
        // Supports meet at (3, ±4); only (3, 4) is on the upper arc.
        assert_eq!(b.intersect_arc(&upper), Intersection::Point(pt(3, 4)));
    }

    #[test]
    fn circle_arc_same_support_is_the_arc() {
        let upper = Arc::new(pt(0, 0), from_int(5), Sweep::Ccw, &Rational::zero(), &angle::pi());
        let c = circle(0, 0, 5);
        assert_eq!(c.intersect_arc(&upper), Intersection::Arc(upper));
    }

    #[test]
    fn arcs_on_different_circles_filter_both_domains() {
        let upper_a = Arc::new(pt(0, 0), from_int(5), Sweep::Ccw, &Rational::zero(), &angle::pi());
        let upper_b = Arc::new(pt(6, 0), from_int(5), Sweep::Ccw, &Rational::zero(), &angle::pi());
        assert_eq!(upper_a.intersect_arc(&upper_b).unwrap(), Intersection::Point(pt(3, 4)));

        let lower_b = Arc::new(pt(6, 0), from_int(5), Sweep::Ccw, &angle::pi(), &Rational::zero());
        assert_eq!(upper_a.intersect_arc(&lower_b).unwrap(), Intersection::Empty);
    }

    #[test]
    fn same_circle_partial_overlap() {
        // CCW [0, π] against CCW [π/2, 3π/2]: the shared range is
        // [π/2, π].
        let a = unit_arc(&Rational::zero(), &angle::pi());
        let b = unit_arc(&angle::frac_pi_2(), &(angle::pi() * ratio(3, 2)));
        let result = a.intersect_arc(&b).unwrap();
        match result {
            Intersection::Arc(overlap) => {
                assert_eq!(overlap.source_angle(), &angle::frac_pi_2());
                assert_eq!(overlap.target_angle(), &angle::pi());
                assert_eq!(overlap.orientation(), Sweep::Ccw);
            }
            other => panic!("expected a sub-arc, got {other:?}"),
        }
    }

    #[test]
    fn same_circle_overlap_is_symmetric() {
        let a = unit_arc(&Rational::zero(), &angle::pi());
        let b = unit_arc(&angle::frac_pi_2(), &(angle::pi() * ratio(3, 2)));
        assert_eq!(a.intersect_arc(&b).unwrap(), b.intersect_arc(&a).unwrap());
    }

    #[test]
    fn cw_arc_is_normalized_before_the_mask() {
        // CW from π to 0 sweeps the same upper half as CCW [0, π].
        let a = Arc::new(pt(0, 0), from_int(1), Sweep::Cw, &angle::pi(), &Rational::zero());
        let b = unit_arc(&angle::frac_pi_2(), &(angle::pi() * ratio(3, 2)));
        match a.intersect_arc(&b).unwrap() {
            Intersection::Arc(overlap) => {
                assert_eq!(overlap.source_angle(), &angle::frac_pi_2());
                assert_eq!(overlap.target_angle(), &angle::pi());
            }
            other => panic!("expected a sub-arc, got {other:?}"),
        }
    }

    #[test]
    fn contained_arc_is_the_whole_overlap() {
        let outer = unit_arc(&Rational::zero(), &angle::pi());
        let inner = unit_arc(&(angle::frac_pi_2() / from_int(2)), &angle::frac_pi_2());
        assert_eq!(outer.intersect_arc(&inner).unwrap(), Intersection::Arc(inner.clone()));
        assert_eq!(inner.intersect_arc(&outer).unwrap(), Intersection::Arc(inner));
    }

    #[test]
    fn identical_arcs_are_coincident() {
        let a = unit_arc(&Rational::zero(), &angle::pi());
        assert_eq!(a.intersect_arc(&a.clone()).unwrap(), Intersection::Arc(a));
    }

    #[test]
    fn disjoint_arcs_on_one_circle() {
        let a = unit_arc(&Rational::zero(), &angle::frac_pi_2());
        let b = unit_arc(&angle::pi(), &(angle::pi() * ratio(3, 2)));
        assert_eq!(a.intersect_arc(&b).unwrap(), Intersection::Empty);
    }

    #[test]
    fn complementary_arcs_touch_in_two_points() {
        // [0, π] and [π, 2π) share exactly the two diameter endpoints.
        let a = unit_arc(&Rational::zero(), &angle::pi());
        let b = unit_arc(&angle::pi(), &angle::two_pi());
        match a.intersect_arc(&b).unwrap() {
            Intersection::Pair(first, second) => {
                match (*first, *second) {
                    (Intersection::Point(p), Intersection::Point(q)) => {
                        assert!((to_f64(p.x()) - 1.0).abs() < TOLERANCE, "p={p:?}");
                        assert!(to_f64(p.y()).abs() < TOLERANCE, "p={p:?}");
                        assert!((to_f64(q.x()) + 1.0).abs() < TOLERANCE, "q={q:?}");
                        assert!(to_f64(q.y()).abs() < TOLERANCE, "q={q:?}");
                    }
                    other => panic!("expected two points, got {other:?}"),
                }
            }
            other => panic!("expected a pair, got {other:?}"),
        }
    }

    #[test]
    fn wrapping_overlap_has_two_ranges() {
        // [0, π] against the wrapping [π/2, π/4]: the overlap is the point
        // range [0, π/4] plus the range [π/2, π].
        let quarter = angle::frac_pi_2() / from_int(2);
        let a = unit_arc(&Rational::zero(), &angle::pi());
        let b = unit_arc(&angle::frac_pi_2(), &quarter);
        match a.intersect_arc(&b).unwrap() {
            Intersection::Pair(first, second) => {
                match (*first, *second) {
                    (Intersection::Arc(low), Intersection::Arc(high)) => {
                        assert_eq!(low.source_angle(), &Rational::zero());
                        assert_eq!(low.target_angle(), &quarter);
                        assert_eq!(high.source_angle(), &angle::frac_pi_2());
                        assert_eq!(high.target_angle(), &angle::pi());
                    }
                    other => panic!("expected two sub-arcs, got {other:?}"),
                }
            }
            other => panic!("expected a pair, got {other:?}"),
        }
    }

    #[test]
    fn full_circle_arc_short_circuits() {
        let full = unit_arc(&angle::pi(), &angle::pi());
        assert!(full.is_full_circle());
        let half = unit_arc(&Rational::zero(), &angle::pi());
        assert_eq!(full.intersect_arc(&half).unwrap(), Intersection::Arc(half.clone()));
        assert_eq!(half.intersect_arc(&full).unwrap(), Intersection::Arc(half.clone()));
        assert_eq!(
            full.intersect_arc(&full.clone()).unwrap(),
            Intersection::Arc(full)
        );
    }

    #[test]
    fn common_circle_overlap_rejects_different_supports() {
        let a = unit_arc(&Rational::zero(), &angle::pi());
        let b = Arc::new(pt(5, 0), from_int(1), Sweep::Ccw, &Rational::zero(), &angle::pi());
        match a.common_circle_overlap(&b) {
            Err(PlanqError::Geometry(GeometryError::DifferentCircles)) => {}
            other => panic!("expected a precondition failure, got {other:?}"),
        }
    }

    #[test]
    fn kiss_point_lies_on_both_circles() {
        let a = circle(0, 0, 5);
        let b = circle(8, 0, 3);
        match a.intersect_circle(&b) {
            Intersection::Point(p) => {
                assert!(a.lies_on(&p));
                assert!(b.lies_on(&p));
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn circle_intersection_is_symmetric(
                x1 in -10i64..10, y1 in -10i64..10, r1 in 0i64..8,
                x2 in -10i64..10, y2 in -10i64..10, r2 in 0i64..8,
            ) {
                let a = circle(x1, y1, r1);
                let b = circle(x2, y2, r2);
                let ab = a.intersect_circle(&b);
                let ba = b.intersect_circle(&a);
                // Kiss points are exact and agree to the digit; secant
                // pairs agree in variant (their bounded-sqrt coordinates
                // may differ in the last retained digit).
                match (&ab, &ba) {
                    (Intersection::Point(p), Intersection::Point(q)) => prop_assert_eq!(p, q),
                    (x, y) => prop_assert_eq!(
                        std::mem::discriminant(x),
                        std::mem::discriminant(y)
                    ),
                }
                if let Some((p, q)) = ab.as_point_pair() {
                    for point in [p, q] {
                        let res_a =
                            to_f64(&(a.center().square_distance(point) - a.square_radius()));
                        let res_b =
                            to_f64(&(b.center().square_distance(point) - b.square_radius()));
                        prop_assert!(res_a.abs() < TOLERANCE, "res_a={res_a}");
                        prop_assert!(res_b.abs() < TOLERANCE, "res_b={res_b}");
                    }
                }
            }

            #[test]
            fn self_intersection_is_always_coincident(
                x in -10i64..10, y in -10i64..10, r in 0i64..8,
            ) {
                let c = circle(x, y, r);
                prop_assert_eq!(c.intersect_circle(&c.clone()), Intersection::Circle(c));
            }
        }
    }
}
