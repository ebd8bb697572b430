use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// The exact coordinate field: arbitrary-precision rationals.
pub type Rational = BigRational;

/// Decimal digits carried by the precision-bounded square root.
///
/// [`sqrt`] truncates the true root at this scale; every other operation in
/// the kernel is exact. Tests that touch square-root results assert against
/// the tolerance `10^-SQRT_DIGITS` explicitly.
pub const SQRT_DIGITS: u32 = 50;

/// Builds a rational from an integer.
#[must_use]
pub fn from_int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Builds the rational `numer / denom`.
///
/// # Panics
///
/// Panics if `denom` is zero.
#[must_use]
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Returns `v * v`.
#[must_use]
pub fn square(v: &Rational) -> Rational {
    v * v
}

/// Precision-bounded square root.
///
/// Returns the largest rational with denominator `10^SQRT_DIGITS` (times the
/// input's reduced denominator) whose square does not exceed `value`. Exact
/// whenever `value` is a perfect rational square at that scale, e.g. for
/// integer squares and for ratios of integer squares.
///
/// # Panics
///
/// Panics if `value` is negative. Callers decide the sign of every radicand
/// exactly before taking a root, so a negative argument is a kernel defect,
/// not a data condition.
#[must_use]
pub fn sqrt(value: &Rational) -> Rational {
    assert!(
        !value.is_negative(),
        "square root of negative rational {value}"
    );
    if value.is_zero() {
        return Rational::zero();
    }
    let scale = BigInt::from(10u32).pow(SQRT_DIGITS);
    // sqrt(p/q) = sqrt(p*q) / q, with the radicand scaled to fixed precision.
    let p = value.numer();
    let q = value.denom();
    let radicand = p * q * (&scale * &scale);
    let root = radicand.sqrt();
    Rational::new(root, q * scale)
}

/// Approximate f64 view of a rational.
#[must_use]
pub fn to_f64(v: &Rational) -> f64 {
    num_traits::ToPrimitive::to_f64(v).unwrap_or(f64::NAN)
}

/// Pulls a finite f64 back into the field.
///
/// Non-finite inputs collapse to zero; they can only arise from degenerate
/// approximate evaluations, never from exact data.
#[must_use]
pub fn from_f64(x: f64) -> Rational {
    Rational::from_float(x).unwrap_or_else(Rational::zero)
}
