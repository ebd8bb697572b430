use num_traits::Signed;

use crate::math::angle;
use crate::math::linear;
use crate::math::rational::{self, Rational};
use crate::math::Point2;

/// Turn classification of a point against a directed reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The point lies left of the directed line source → target.
    Left,
    /// The point lies right of the directed line source → target.
    Right,
    /// The signed area of the triple is exactly zero.
    Collinear,
    /// Source and target coincide and the point lies elsewhere; the
    /// reference line is degenerate and no verdict exists.
    Undefined,
}

/// Position of a collinear point against the closed interval
/// [source, target].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalPos {
    /// Strictly before the source.
    Before,
    /// Within the closed interval.
    On,
    /// Strictly beyond the target.
    Behind,
}

/// An exact 2D point.
///
/// Equality is exact field equality; the derived ordering is lexicographic
/// on x, then y.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    x: Rational,
    y: Rational,
}

impl Point {
    /// Creates a point from exact coordinates.
    #[must_use]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// Creates a point from integer coordinates.
    #[must_use]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(rational::from_int(x), rational::from_int(y))
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> &Rational {
        &self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> &Rational {
        &self.y
    }

    /// Classifies this point against the directed line source → target.
    ///
    /// Exact sign test of the 2×2 determinant of `(source − self,
    /// target − self)`; never a tolerance comparison. Every other
    /// classification in the kernel reduces to this predicate.
    #[must_use]
    pub fn orientation(&self, source: &Point, target: &Point) -> Orientation {
        if source == target {
            return if self == source {
                Orientation::Collinear
            } else {
                Orientation::Undefined
            };
        }
        let det = linear::det2(
            &(&source.x - &self.x),
            &(&target.x - &self.x),
            &(&source.y - &self.y),
            &(&target.y - &self.y),
        );
        if det.is_positive() {
            Orientation::Left
        } else if det.is_negative() {
            Orientation::Right
        } else {
            Orientation::Collinear
        }
    }

    /// Classifies this point against the closed interval [source, target].
    ///
    /// The caller guarantees the point is collinear with the bounds. The
    /// verdict is taken on whichever coordinate axis is non-degenerate
    /// between the bounds; if both are degenerate the bounds coincide and
    /// the (collinear) point is `On`.
    #[must_use]
    pub fn interval_position(&self, source: &Point, target: &Point) -> IntervalPos {
        match axis_position(&self.x, &source.x, &target.x) {
            Some(pos) => pos,
            None => axis_position(&self.y, &source.y, &target.y).unwrap_or(IntervalPos::On),
        }
    }

    /// Angle of the ray from this point toward `other`, in `[0, 2π)`.
    ///
    /// Approximate (f64 arctangent pulled back into the field); exact
    /// membership tests on arcs compare these normalized rationals directly.
    #[must_use]
    pub fn angle_to(&self, other: &Point) -> Rational {
        angle::atan2(&(&other.y - &self.y), &(&other.x - &self.x))
    }

    /// Swept angle from the ray self → `from` to the ray self → `to`,
    /// normalized into `[0, 2π)` by adding a full turn when the raw
    /// subtraction is negative.
    #[must_use]
    pub fn sweep_angle(&self, from: &Point, to: &Point) -> Rational {
        let raw = self.angle_to(to) - self.angle_to(from);
        if raw.is_negative() {
            raw + angle::two_pi()
        } else {
            raw
        }
    }

    /// Exact squared distance to `other`.
    #[must_use]
    pub fn square_distance(&self, other: &Point) -> Rational {
        let dx = &other.x - &self.x;
        let dy = &other.y - &self.y;
        &dx * &dx + &dy * &dy
    }

    /// Distance to `other` via the precision-bounded square root.
    #[must_use]
    pub fn distance(&self, other: &Point) -> Rational {
        rational::sqrt(&self.square_distance(other))
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: &Rational, dy: &Rational) -> Point {
        Point::new(&self.x + dx, &self.y + dy)
    }

    /// Approximate f64 snapshot for rendering consumers.
    #[must_use]
    pub fn to_approx(&self) -> Point2 {
        Point2::new(rational::to_f64(&self.x), rational::to_f64(&self.y))
    }
}

fn axis_position(v: &Rational, a: &Rational, b: &Rational) -> Option<IntervalPos> {
    match a.cmp(b) {
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Less => Some(if v < a {
            IntervalPos::Before
        } else if v > b {
            IntervalPos::Behind
        } else {
            IntervalPos::On
        }),
        std::cmp::Ordering::Greater => Some(if v > a {
            IntervalPos::Before
        } else if v < b {
            IntervalPos::Behind
        } else {
            IntervalPos::On
        }),
    }
}
