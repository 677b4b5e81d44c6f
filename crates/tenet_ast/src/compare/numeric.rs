//! Exact comparison of number literals.
//!
//! Literals that both fit an `i64` compare as integers. Anything else is
//! turned into a [`BigRational`] built from the literal's digits and exponent,
//! so no comparison ever rounds.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::number::{Literal, Number};

/// The exact value of a literal, in the cheapest representation that holds it.
///
/// Equality is by value, so `Int(3)` equals the rational `3/1`.
#[derive(Clone, Debug)]
pub enum Numeric {
    /// Fits a signed 64-bit integer.
    Int(i64),
    /// Everything else.
    Rational(BigRational),
}

impl Numeric {
    /// Evaluates a literal.
    ///
    /// # Panics
    ///
    /// Panics if the literal text is malformed or its exponent is out of
    /// range, which only happens when a number was built with
    /// [`Number::from_trusted`] from bad input.
    #[must_use]
    pub fn of(number: &Number) -> Self {
        match number.as_i64() {
            Some(n) => Self::Int(n),
            None => Self::Rational(to_rational(number)),
        }
    }
}

fn widen(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Numeric {}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Int(a), Self::Rational(b)) => widen(*a).cmp(b),
            (Self::Rational(a), Self::Int(b)) => a.cmp(&widen(*b)),
        }
    }
}

/// Compares two number literals by exact value.
///
/// # Panics
///
/// Panics if either literal is malformed; see [`Numeric::of`].
#[must_use]
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    Numeric::of(a).cmp(&Numeric::of(b))
}

/// Converts a literal to an exact rational. Every zero spelling maps to the
/// one canonical zero without touching its digits. The exponent is bounded
/// before any power of ten is built.
fn to_rational(number: &Number) -> BigRational {
    let Some(literal) = number.literal().filter(Literal::exponent_in_range) else {
        malformed(number)
    };
    if literal.is_zero() {
        return BigRational::zero();
    }
    literal_to_rational(&literal).unwrap_or_else(|| malformed(number))
}

fn literal_to_rational(literal: &Literal<'_>) -> Option<BigRational> {
    let mut digits = String::with_capacity(literal.integer.len() + literal.fraction.len());
    digits.push_str(literal.integer);
    digits.push_str(literal.fraction);
    let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10)?;

    let fraction_len = i64::try_from(literal.fraction.len()).ok()?;
    let scale = literal.exponent.checked_sub(fraction_len)?;
    let power = num_traits::pow(BigInt::from(10u8), usize::try_from(scale.unsigned_abs()).ok()?);

    let magnitude = if scale >= 0 {
        BigRational::from_integer(mantissa * power)
    } else {
        BigRational::new(mantissa, power)
    };
    Some(if literal.negative { -magnitude } else { magnitude })
}

#[cold]
fn malformed(number: &Number) -> ! {
    tracing::error!(literal = number.as_str(), "malformed number literal reached comparison");
    panic!("malformed number literal: {:?}", number.as_str())
}
