//! Boolean equality with fast paths for simple kinds.
//!
//! Scalars, variables, refs, and arrays answer directly without building an
//! [`Ordering`]; every other kind falls back to the dispatcher.

use std::cmp::Ordering;

use super::{compare_numbers, compare_values};
use crate::number::Number;
use crate::term::{Ref, Term, Value};

/// Returns true if two values are equal under the total order.
#[must_use]
pub fn value_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, _) => matches!(b, Value::Null),
        (Value::Boolean(x), _) => matches!(b, Value::Boolean(y) if x == y),
        (Value::Number(x), _) => matches!(b, Value::Number(y) if number_equal(x, y)),
        (Value::String(x), _) => matches!(b, Value::String(y) if x == y),
        (Value::Var(x), _) => matches!(b, Value::Var(y) if x == y),
        (Value::Ref(x), _) => matches!(b, Value::Ref(y) if ref_equal(x, y)),
        (Value::Array(x), _) => {
            matches!(b, Value::Array(y) if terms_equal(x.len(), x.iter(), y.len(), y.iter()))
        }
        _ => compare_values(a, b) == Ordering::Equal,
    }
}

/// Returns true if two terms carry equal values.
#[must_use]
pub fn term_value_equal(a: &Term, b: &Term) -> bool {
    value_equal(&a.value, &b.value)
}

/// Returns true if two reference paths are equal.
#[must_use]
pub fn ref_equal(a: &Ref, b: &Ref) -> bool {
    terms_equal(a.len(), a.iter(), b.len(), b.iter())
}

fn number_equal(a: &Number, b: &Number) -> bool {
    a.as_str() == b.as_str() || compare_numbers(a, b) == Ordering::Equal
}

fn terms_equal<'a>(
    len_a: usize,
    a: impl Iterator<Item = &'a Term>,
    len_b: usize,
    b: impl Iterator<Item = &'a Term>,
) -> bool {
    len_a == len_b && a.zip(b).all(|(x, y)| term_value_equal(x, y))
}
