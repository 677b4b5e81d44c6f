//! Integration tests for arrays, refs, objects, and sets
//!
//! Tests lexicographic sequence order and order-independent collection
//! equality.

use std::cmp::Ordering;

use tenet_ast::{Number, Term, compare, equal};

fn num(n: i64) -> Term {
    Term::number(n)
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn arrays_are_lexicographic() {
    let a = Term::array([num(1), num(2)]);
    let b = Term::array([num(1), num(3)]);
    let c = Term::array([num(1), num(2), num(0)]);
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&a, &c), Ordering::Less);
    assert_eq!(compare(&b, &c), Ordering::Greater);
    assert_eq!(compare(&Term::array([]), &Term::array([Term::null()])), Ordering::Less);
}

#[test]
fn array_elements_compare_across_kinds() {
    let a = Term::array([num(100)]);
    let b = Term::array([Term::string("")]);
    assert_eq!(compare(&a, &b), Ordering::Less);
}

#[test]
fn refs_compare_path_by_path() {
    let short = Term::reference([Term::var("data"), Term::string("a")]);
    let long = Term::reference([Term::var("data"), Term::string("a"), Term::var("i")]);
    let other = Term::reference([Term::var("input"), Term::string("a")]);
    assert_eq!(compare(&short, &long), Ordering::Less);
    assert_eq!(compare(&long, &other), Ordering::Less);
    assert!(equal(&short, &short.clone()));
}

#[test]
fn calls_compare_operator_then_arguments() {
    let plus = |x: i64, y: i64| {
        Term::call([Term::reference([Term::var("plus")]), num(x), num(y)])
    };
    assert_eq!(compare(&plus(1, 2), &plus(1, 3)), Ordering::Less);
    let minus = Term::call([Term::reference([Term::var("minus")]), num(0), num(0)]);
    assert_eq!(compare(&minus, &plus(9, 9)), Ordering::Less);
}

// =============================================================================
// Objects
// =============================================================================

#[test]
fn objects_ignore_insertion_order() {
    let a = Term::object([
        (Term::string("name"), Term::string("alice")),
        (Term::string("age"), num(30)),
    ]);
    let b = Term::object([
        (Term::string("age"), num(30)),
        (Term::string("name"), Term::string("alice")),
    ]);
    assert!(equal(&a, &b));
    assert_eq!(compare(&a, &b), Ordering::Equal);
}

#[test]
fn objects_with_different_pairs_differ() {
    let base = Term::object([(Term::string("a"), num(1))]);
    let other_value = Term::object([(Term::string("a"), num(2))]);
    let other_key = Term::object([(Term::string("b"), num(1))]);
    let bigger = Term::object([(Term::string("a"), num(1)), (Term::string("b"), num(1))]);
    for other in [&other_value, &other_key, &bigger] {
        assert!(!equal(&base, other));
        assert_eq!(compare(&base, other), compare(other, &base).reverse());
    }
}

#[test]
fn object_keys_unify_numerically() {
    let a = Term::object([(num(1), Term::string("x"))]);
    let b = Term::object([(Term::number(Number::parse("1.0").unwrap()), Term::string("x"))]);
    assert!(equal(&a, &b));
}

#[test]
fn nested_objects() {
    let inner = |v: i64| Term::object([(Term::string("v"), num(v))]);
    let a = Term::object([(Term::string("k"), inner(1))]);
    let b = Term::object([(Term::string("k"), inner(1))]);
    let c = Term::object([(Term::string("k"), inner(2))]);
    assert!(equal(&a, &b));
    assert!(!equal(&a, &c));
}

// =============================================================================
// Sets
// =============================================================================

#[test]
fn sets_ignore_order_and_duplicates() {
    let a = Term::set([num(1), num(2), num(3)]);
    let b = Term::set([num(3), num(1), num(2), num(1)]);
    assert!(equal(&a, &b));
}

#[test]
fn set_size_and_content_matter() {
    let a = Term::set([num(1), num(2)]);
    let b = Term::set([num(1), num(2), num(3)]);
    let c = Term::set([num(1), num(4)]);
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert!(!equal(&a, &c));
    assert_eq!(compare(&a, &c), compare(&c, &a).reverse());
}

#[test]
fn sets_of_collections() {
    let a = Term::set([Term::array([num(1)]), Term::set([num(2), num(3)])]);
    let b = Term::set([Term::set([num(3), num(2)]), Term::array([num(1)])]);
    assert!(equal(&a, &b));
}

#[test]
fn numerically_equal_elements_collapse() {
    let s = Term::set([num(1), Term::number(Number::parse("1.0").unwrap())]);
    assert!(equal(&s, &Term::set([num(1)])));
}
