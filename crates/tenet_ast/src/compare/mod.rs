//! Total ordering and equality over values and syntax-tree nodes.
//!
//! [`compare`] is the entry point. It unwraps terms, sorts absent terms below
//! everything, orders different kinds by [`rank`], and otherwise hands both
//! operands to the comparator for their kind. Composite comparators call
//! back into the dispatcher for nested terms, so recursion depth follows the
//! nesting depth of the inputs. [`Comparator`] bounds that depth for inputs
//! that are not trusted.
//!
//! Kinds of different rank are never equal. Within a kind:
//!
//! - Refs, arrays, calls, and args compare element by element; on a common
//!   prefix the shorter one is less.
//! - Objects are equal iff they hold the same (key, value) pairs; sets are
//!   equal iff their symmetric difference is empty. Other outcomes between
//!   collections are consistent but carry no meaning.
//! - Numbers compare by exact value.
//!
//! [`equal`] agrees with `compare(a, b) == Ordering::Equal` for every input.

mod bounded;
mod collection;
mod composite;
mod equality;
mod numeric;
mod ranking;
mod sequence;

use std::cmp::Ordering;

pub use bounded::{CompareConfig, Comparator, DEFAULT_MAX_DEPTH};
pub use collection::{compare_objects, compare_sets};
pub use equality::{ref_equal, term_value_equal, value_equal};
pub use numeric::{Numeric, compare_numbers};
pub use ranking::{Rank, rank, rank_of};
pub use sequence::{compare_node_sequences, compare_sequences, compare_term_sequences};

use crate::term::{Ref, Term, Value, Var};

/// Anything the dispatcher can compare: a value, a term, or a possibly
/// absent term.
pub trait AsValue {
    /// Returns the carried value, or `None` for an absent term.
    fn as_value(&self) -> Option<&Value>;
}

impl AsValue for Value {
    fn as_value(&self) -> Option<&Value> {
        Some(self)
    }
}

impl AsValue for Term {
    fn as_value(&self) -> Option<&Value> {
        Some(&self.value)
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Option<&Value> {
        self.as_ref().and_then(AsValue::as_value)
    }
}

/// Compares two values, terms, or possibly absent terms.
#[must_use]
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: AsValue + ?Sized,
    B: AsValue + ?Sized,
{
    compare_present_or_absent(a.as_value(), b.as_value())
}

/// Returns true if `compare(a, b)` would return `Ordering::Equal`.
#[must_use]
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: AsValue + ?Sized,
    B: AsValue + ?Sized,
{
    match (a.as_value(), b.as_value()) {
        (None, None) => true,
        (Some(a), Some(b)) => value_equal(a, b),
        _ => false,
    }
}

/// Compares two variables by name.
#[must_use]
pub fn compare_vars(a: &Var, b: &Var) -> Ordering {
    a.name().cmp(b.name())
}

/// Compares two reference paths.
#[must_use]
pub fn compare_refs(a: &Ref, b: &Ref) -> Ordering {
    compare_term_sequences(a.iter(), b.iter())
}

/// Compares the values carried by two terms.
#[must_use]
pub fn term_value_compare(a: &Term, b: &Term) -> Ordering {
    compare_terms(a, b)
}

pub(crate) fn compare_terms(a: &Term, b: &Term) -> Ordering {
    compare_values(&a.value, &b.value)
}

pub(crate) fn compare_optional_terms(a: Option<&Term>, b: Option<&Term>) -> Ordering {
    compare_present_or_absent(a.map(|t| &t.value), b.map(|t| &t.value))
}

fn compare_present_or_absent(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

/// Compares two present values.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Ordering {
    let (rank_a, rank_b) = (rank(a), rank(b));
    if rank_a != rank_b {
        return rank_a.cmp(&rank_b);
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Var(a), Value::Var(b)) => compare_vars(a, b),
        (Value::Ref(a), Value::Ref(b)) => compare_refs(a, b),
        (Value::Array(a), Value::Array(b)) => compare_term_sequences(a.iter(), b.iter()),
        (Value::Object(a), Value::Object(b)) => compare_objects(a, b),
        (Value::Set(a), Value::Set(b)) => compare_sets(a, b),
        (Value::ArrayComprehension(a), Value::ArrayComprehension(b)) => a.cmp(b),
        (Value::ObjectComprehension(a), Value::ObjectComprehension(b)) => a.cmp(b),
        (Value::SetComprehension(a), Value::SetComprehension(b)) => a.cmp(b),
        (Value::Call(a), Value::Call(b)) => compare_term_sequences(a.iter(), b.iter()),
        (Value::Args(a), Value::Args(b)) => compare_term_sequences(a.iter(), b.iter()),
        (Value::Expr(a), Value::Expr(b)) => a.cmp(b),
        (Value::SomeDecl(a), Value::SomeDecl(b)) => a.cmp(b),
        (Value::Every(a), Value::Every(b)) => a.cmp(b),
        (Value::With(a), Value::With(b)) => a.cmp(b),
        (Value::Body(a), Value::Body(b)) => a.cmp(b),
        (Value::Head(a), Value::Head(b)) => a.cmp(b),
        (Value::Rule(a), Value::Rule(b)) => a.cmp(b),
        (Value::Import(a), Value::Import(b)) => a.cmp(b),
        (Value::Package(a), Value::Package(b)) => a.cmp(b),
        (Value::Annotations(a), Value::Annotations(b)) => a.cmp(b),
        (Value::Module(a), Value::Module(b)) => a.cmp(b),
        _ => rank_collision(a, b),
    }
}

#[cold]
fn rank_collision(a: &Value, b: &Value) -> ! {
    tracing::error!(
        left = a.kind_name(),
        right = b.kind_name(),
        "two value kinds share a rank"
    );
    unreachable!(
        "value kinds {} and {} share a rank",
        a.kind_name(),
        b.kind_name()
    )
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_values(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        value_equal(self, other)
    }
}

impl Eq for Value {}

/// Terms order by value; locations are ignored.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(self, other)
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        term_value_equal(self, other)
    }
}

impl Eq for Term {}
