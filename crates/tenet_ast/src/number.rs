//! Number literals.
//!
//! A [`Number`] keeps the canonical decimal text it was written with. Its
//! logical value is an exact rational; [`crate::compare`] decides ordering
//! without ever rounding through a float.

use std::fmt;
use std::sync::Arc;

use tenet_foundation::{Error, Result};

/// Largest accepted magnitude of a literal's decimal exponent.
///
/// Bounds the size of the rational a literal can expand to.
pub const MAX_EXPONENT: u32 = 100_000;

/// A number literal in canonical decimal text form.
///
/// The grammar is `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
#[derive(Clone)]
pub struct Number(Arc<str>);

/// The pieces of a well-formed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Literal<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
    pub exponent: i64,
}

impl Literal<'_> {
    /// Returns true if every mantissa digit is zero, whatever the sign,
    /// fraction length, or exponent.
    pub fn is_zero(&self) -> bool {
        self.integer
            .bytes()
            .chain(self.fraction.bytes())
            .all(|digit| digit == b'0')
    }

    /// Returns true if the exponent magnitude is at most [`MAX_EXPONENT`].
    pub fn exponent_in_range(&self) -> bool {
        self.exponent.unsigned_abs() <= u64::from(MAX_EXPONENT)
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Splits literal text into its parts, or `None` if it is not a literal.
pub(crate) fn decompose(text: &str) -> Option<Literal<'_>> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (integer, rest) = split_digits(rest);
    if integer.is_empty() || (integer.len() > 1 && integer.starts_with('0')) {
        return None;
    }

    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after) => {
            let (fraction, rest) = split_digits(after);
            if fraction.is_empty() {
                return None;
            }
            (fraction, rest)
        }
        None => ("", rest),
    };

    let exponent = match rest.strip_prefix(['e', 'E']) {
        Some(after) => {
            let (exp_negative, digits) = match after.as_bytes().first() {
                Some(b'-') => (true, &after[1..]),
                Some(b'+') => (false, &after[1..]),
                _ => (false, after),
            };
            let (digits, trailing) = split_digits(digits);
            if digits.is_empty() || !trailing.is_empty() {
                return None;
            }
            // Saturate so absurdly long exponents still report as out of range.
            let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
            if exp_negative { -magnitude } else { magnitude }
        }
        None if rest.is_empty() => 0,
        None => return None,
    };

    Some(Literal {
        negative,
        integer,
        fraction,
        exponent,
    })
}

impl Number {
    /// Parses and validates number literal text.
    ///
    /// # Errors
    ///
    /// Returns [`tenet_foundation::ErrorKind::MalformedNumber`] if `text` does
    /// not follow the literal grammar, and
    /// [`tenet_foundation::ErrorKind::ExponentOutOfRange`] if its exponent
    /// magnitude exceeds [`MAX_EXPONENT`].
    pub fn parse(text: &str) -> Result<Self> {
        let literal = decompose(text).ok_or_else(|| Error::malformed_number(text))?;
        if !literal.exponent_in_range() {
            return Err(Error::exponent_out_of_range(text, MAX_EXPONENT));
        }
        Ok(Self(text.into()))
    }

    /// Wraps literal text that an upstream parser has already validated.
    ///
    /// Comparing a number built from malformed text, or from text whose
    /// exponent magnitude exceeds [`MAX_EXPONENT`], panics.
    #[must_use]
    pub fn from_trusted(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        debug_assert!(decompose(&text).is_some(), "malformed number literal {text:?}");
        Self(text)
    }

    /// Returns the canonical literal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value as an `i64` if the text is a plain integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Returns true if the literal denotes zero, e.g. `0`, `-0.0`, or `0e9`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        decompose(&self.0).is_some_and(|literal| literal.is_zero())
    }

    pub(crate) fn literal(&self) -> Option<Literal<'_>> {
        decompose(&self.0)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self(n.to_string().into())
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self(n.to_string().into())
    }
}

impl std::str::FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
