//! Angular arithmetic over the rational field.
//!
//! Angles are rationals in radians, normalized into the half-open range
//! `[0, 2π)` where π is the crate's fixed rational approximation [`pi`].
//! Interval tests on normalized angles are exact comparisons; only the
//! conversions that involve trigonometry ([`atan2`], [`unit_vector`]) are
//! approximate.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::Zero;

use super::rational::{from_f64, to_f64, Rational};

// π to 50 decimal digits, held as numerator / 10^50.
const PI_NUMERATOR: &str = "314159265358979323846264338327950288419716939937510";

fn parse_digits(digits: &str) -> BigInt {
    digits
        .bytes()
        .fold(BigInt::zero(), |acc, b| acc * 10 + i64::from(b - b'0'))
}

/// The kernel's rational approximation of π.
#[must_use]
pub fn pi() -> Rational {
    static PI: OnceLock<Rational> = OnceLock::new();
    PI.get_or_init(|| {
        Rational::new(parse_digits(PI_NUMERATOR), BigInt::from(10u32).pow(50))
    })
    .clone()
}

/// The kernel's rational approximation of 2π.
#[must_use]
pub fn two_pi() -> Rational {
    pi() * Rational::from_integer(BigInt::from(2))
}

/// The kernel's rational approximation of π/2.
#[must_use]
pub fn frac_pi_2() -> Rational {
    pi() / Rational::from_integer(BigInt::from(2))
}

/// Normalizes an angle into `[0, 2π)` by exact rational reduction.
#[must_use]
pub fn normalize(angle: &Rational) -> Rational {
    let turn = two_pi();
    angle - &turn * (angle / &turn).floor()
}

/// Approximate four-quadrant arctangent, normalized into `[0, 2π)`.
///
/// The only approximate step is the f64 `atan2`; the result is pulled back
/// into the field and normalized exactly. Both components zero yields zero.
#[must_use]
pub fn atan2(dy: &Rational, dx: &Rational) -> Rational {
    if dy.is_zero() && dx.is_zero() {
        return Rational::zero();
    }
    let raw = to_f64(dy).atan2(to_f64(dx));
    normalize(&from_f64(raw))
}

/// Approximate unit vector `(cos θ, sin θ)` for a rational angle.
#[must_use]
pub fn unit_vector(theta: &Rational) -> (Rational, Rational) {
    let t = to_f64(theta);
    (from_f64(t.cos()), from_f64(t.sin()))
}

/// Closed-interval membership of a normalized angle in the CCW range from
/// `source` to `target`, wrap-aware and epsilon-free.
///
/// `source == target` denotes the full circle and contains every angle.
#[must_use]
pub fn contains_ccw(source: &Rational, target: &Rational, angle: &Rational) -> bool {
    if source == target {
        return true;
    }
    if source < target {
        source <= angle && angle <= target
    } else {
        angle >= source || angle <= target
    }
}
