//! Object and set comparison.
//!
//! Both collections already hold their contents in canonical order, so the
//! comparators only walk what the collections hand them. Equality is the
//! only meaningful outcome; the order between unequal collections is merely
//! deterministic.

use std::cmp::Ordering;

use super::compare_terms;
use super::sequence::{compare_sequences, compare_term_sequences};
use crate::term::{Object, Set, Term};

/// Compares two objects through their canonical pair forms.
///
/// Objects are equal exactly when they hold the same (key, value) pairs.
#[must_use]
pub fn compare_objects(a: &Object, b: &Object) -> Ordering {
    compare_sequences(
        a.canonical_pairs(),
        b.canonical_pairs(),
        |(ka, va): (&Term, &Term), (kb, vb): (&Term, &Term)| {
            compare_terms(ka, kb).then_with(|| compare_terms(va, vb))
        },
    )
}

/// Compares two sets.
///
/// Sets are equal exactly when their symmetric difference is empty. Unequal
/// sets order by their canonical element sequences.
#[must_use]
pub fn compare_sets(a: &Set, b: &Set) -> Ordering {
    if a.len() == b.len() && a.symmetric_difference(b).next().is_none() {
        return Ordering::Equal;
    }
    compare_term_sequences(a.iter(), b.iter())
}
