//! Integration tests for number literals and the numeric comparator
//!
//! Tests literal validation, the integer fast path, exact rational
//! comparison, and zero handling.

use std::cmp::Ordering;

use tenet_ast::compare::{Numeric, compare_numbers};
use tenet_ast::{ErrorKind, MAX_EXPONENT, Number, Term, compare, equal};

fn n(text: &str) -> Number {
    Number::parse(text).unwrap()
}

fn t(text: &str) -> Term {
    Term::number(n(text))
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn accepts_literal_grammar() {
    for text in ["0", "-0", "7", "-12", "1.5", "0.001", "1e3", "1E3", "2.5e-3", "-1.0e+2"] {
        assert_eq!(Number::parse(text).unwrap().as_str(), text);
    }
}

#[test]
fn rejects_malformed_text() {
    for text in ["", "-", "01", "1.", ".5", "1e", "1e+", "+1", "1.2.3", "0x10", "1_000", " 1", "NaN"] {
        let err = Number::parse(text).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MalformedNumber { .. }),
            "{text:?} gave {err}"
        );
    }
}

#[test]
fn rejects_huge_exponents() {
    let text = format!("1e{}", u64::from(MAX_EXPONENT) + 1);
    let err = Number::parse(&text).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExponentOutOfRange { .. }));
    assert!(Number::parse(&format!("1e-{MAX_EXPONENT}")).is_ok());
}

#[test]
fn integer_conversions() {
    assert_eq!(Number::from(42_i64).as_i64(), Some(42));
    assert_eq!(n("1.0").as_i64(), None);
    assert_eq!(n("99999999999999999999").as_i64(), None);
    assert_eq!(Number::from(u64::MAX).as_str(), "18446744073709551615");
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn integer_fast_path() {
    assert!(matches!(Numeric::of(&n("42")), Numeric::Int(42)));
    assert_eq!(compare_numbers(&n("-5"), &n("3")), Ordering::Less);
    assert_eq!(
        compare_numbers(&Number::from(i64::MIN), &Number::from(i64::MAX)),
        Ordering::Less
    );
}

#[test]
fn beyond_i64_is_exact() {
    assert_eq!(
        compare(&t("9223372036854775807"), &t("9223372036854775808")),
        Ordering::Less
    );
    assert_eq!(
        compare(&t("-9223372036854775809"), &Term::number(i64::MIN)),
        Ordering::Less
    );
    assert!(matches!(
        Numeric::of(&n("9223372036854775808")),
        Numeric::Rational(_)
    ));
}

#[test]
fn decimals_are_not_rounded() {
    // Both sides round to the same f64.
    assert_eq!(
        compare(&t("0.10000000000000000001"), &t("0.1")),
        Ordering::Greater
    );
    assert_eq!(compare(&t("1"), &t("0.99999999999999999999")), Ordering::Greater);
}

#[test]
fn spellings_of_the_same_value_are_equal() {
    assert!(equal(&t("1"), &t("1.0")));
    assert!(equal(&t("1"), &t("1e0")));
    assert!(equal(&t("100"), &t("1e2")));
    assert!(equal(&t("0.25"), &t("25e-2")));
    assert!(equal(&t("-1.50"), &t("-1.5")));
}

#[test]
fn every_zero_spelling_is_zero() {
    let zeros = ["0", "-0", "0.0", "-0.000", "0e10", "0.0e-99999", "-0E+5"];
    for a in zeros {
        assert!(n(a).is_zero(), "{a}");
        for b in zeros {
            assert!(equal(&t(a), &t(b)), "{a} vs {b}");
        }
    }
}

#[test]
fn tiny_values_are_not_zero() {
    assert!(!n("1e-400").is_zero());
    assert_eq!(compare(&t("0"), &t("1e-400")), Ordering::Less);
    assert_eq!(compare(&t("-1e-400"), &t("0")), Ordering::Less);
    assert_eq!(compare(&t("1e-400"), &t("1e-401")), Ordering::Greater);
}

#[test]
fn negative_ordering() {
    let mut terms = vec![t("-1.5"), t("2"), t("-10"), t("0"), t("1e1")];
    terms.sort();
    let expected = vec![t("-10"), t("-1.5"), t("0"), t("2"), t("1e1")];
    assert_eq!(terms, expected);
}

#[test]
#[should_panic(expected = "malformed number literal")]
fn comparing_corrupt_text_panics() {
    let corrupt = Number::from_trusted("1.2.3");
    let _ = compare_numbers(&corrupt, &n("1"));
}

#[test]
#[should_panic(expected = "malformed number literal")]
fn comparing_trusted_text_with_huge_exponent_panics() {
    let huge = Term::number(Number::from_trusted("1e999999999999"));
    let _ = compare(&huge, &t("1.5"));
}

#[test]
fn compare_numbers_agrees_with_numeric() {
    for (a, b) in [("1", "1.0"), ("2.5", "3"), ("-7", "-7.5"), ("1e3", "999")] {
        assert_eq!(
            compare_numbers(&n(a), &n(b)),
            Numeric::of(&n(a)).cmp(&Numeric::of(&n(b))),
            "{a} vs {b}"
        );
    }
}
