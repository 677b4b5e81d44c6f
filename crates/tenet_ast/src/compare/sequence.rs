//! Lexicographic comparison of ordered sequences.

use std::cmp::Ordering;

use super::compare_terms;
use crate::term::Term;

/// Compares two sequences element by element.
///
/// The first non-equal pair decides. If one sequence is a prefix of the
/// other, the shorter one is less.
pub fn compare_sequences<A, B, T, F>(a: A, b: B, mut cmp: F) -> Ordering
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Ordering,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match cmp(x, y) {
                Ordering::Equal => {}
                order => return order,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Compares two sequences of terms by value.
pub fn compare_term_sequences<'a>(
    a: impl IntoIterator<Item = &'a Term>,
    b: impl IntoIterator<Item = &'a Term>,
) -> Ordering {
    compare_sequences(a, b, compare_terms)
}

/// Compares two sequences of nodes by their own ordering.
pub fn compare_node_sequences<'a, T: Ord + 'a>(
    a: impl IntoIterator<Item = &'a T>,
    b: impl IntoIterator<Item = &'a T>,
) -> Ordering {
    compare_sequences(a, b, Ord::cmp)
}
