use num_traits::{Signed, Zero};

use super::rational::{self, Rational};

/// 2×2 determinant `| a b ; c d |`, exact.
#[must_use]
pub fn det2(a: &Rational, b: &Rational, c: &Rational, d: &Rational) -> Rational {
    a * d - b * c
}

/// Real roots of `a·x² + b·x + c = 0` with `a != 0`.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadRoots {
    /// Negative discriminant.
    Empty,
    /// Zero discriminant; the single (exact) root.
    Double(Rational),
    /// Positive discriminant; roots in ascending order, via bounded sqrt.
    Two(Rational, Rational),
}

/// Solves a quadratic over the field.
///
/// The root count is decided by the exact sign of the discriminant; only
/// the roots of the two-root case carry bounded-sqrt precision. The double
/// root `-b / 2a` is exact.
#[must_use]
pub fn solve_quadratic(a: &Rational, b: &Rational, c: &Rational) -> QuadRoots {
    let four = rational::from_int(4);
    let two = rational::from_int(2);
    let disc = b * b - four * (a * c);
    if disc.is_negative() {
        return QuadRoots::Empty;
    }
    let denom = two * a;
    if disc.is_zero() {
        return QuadRoots::Double(-b / denom);
    }
    let root = rational::sqrt(&disc);
    let lo = (-b - &root) / &denom;
    let hi = (-b + &root) / &denom;
    if lo <= hi {
        QuadRoots::Two(lo, hi)
    } else {
        QuadRoots::Two(hi, lo)
    }
}
