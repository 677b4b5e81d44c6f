//! Integration tests for syntax-tree nodes
//!
//! Tests field-by-field ordering of comprehensions, expressions, rules, and
//! modules, and that nodes order identically whether compared directly or
//! wrapped in terms.

use std::cmp::Ordering;
use std::sync::Arc;

use tenet_ast::{
    AnnotationScope, Annotations, Args, ArrayComprehension, Body, Every, Expr, ExprTerms, Head,
    Import, Location, Module, Package, Ref, Rule, SetComprehension, SomeDecl, Term, Value, With,
    compare, equal,
};

fn eq(index: usize, lhs: Term, rhs: Term) -> Expr {
    Expr::call(index, [Term::reference([Term::var("eq")]), lhs, rhs])
}

fn input(field: &str) -> Term {
    Term::reference([Term::var("input"), Term::string(field)])
}

fn allow_rule(role: &str) -> Rule {
    Rule::new(
        Head::named("allow").with_value(Term::boolean(true)),
        Body::new([eq(0, input("role"), Term::string(role))]),
    )
}

fn module(rules: impl IntoIterator<Item = Rule>) -> Module {
    let pkg = Package::new(Ref::new([Term::var("data"), Term::string("authz")]));
    rules.into_iter().fold(Module::new(pkg), Module::with_rule)
}

// =============================================================================
// Comprehensions
// =============================================================================

#[test]
fn comprehensions_compare_head_then_body() {
    let body = |n: i64| Body::new([eq(0, Term::var("x"), Term::number(n))]);
    let a = ArrayComprehension::new(Term::var("x"), body(1));
    let b = ArrayComprehension::new(Term::var("x"), body(2));
    assert!(a < b);

    let wrapped_a = Value::ArrayComprehension(Arc::new(a.clone()));
    let wrapped_b = Value::ArrayComprehension(Arc::new(b));
    assert_eq!(compare(&wrapped_a, &wrapped_b), Ordering::Less);

    let set = SetComprehension::new(Term::var("x"), body(1));
    assert_eq!(
        compare(&wrapped_a, &Value::SetComprehension(Arc::new(set))),
        Ordering::Less
    );
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn expression_shapes() {
    let some = Expr::new(0, ExprTerms::SomeDecl(SomeDecl::new([Term::var("x")])));
    let term = Expr::term(0, Term::var("x"));
    let call = eq(0, Term::var("x"), Term::number(1));
    let every = Expr::new(
        0,
        ExprTerms::Every(Arc::new(Every::new(
            None,
            Term::var("x"),
            Term::var("xs"),
            Body::default(),
        ))),
    );
    let mut exprs = vec![every.clone(), call.clone(), term.clone(), some.clone()];
    exprs.sort();
    assert_eq!(exprs, vec![some, term, call, every]);
}

#[test]
fn negation_and_modifiers() {
    let base = eq(0, input("user"), Term::string("bob"));
    let negated = base.clone().negate();
    let mocked = base.clone().with_modifier(With::new(
        Term::reference([Term::var("input"), Term::string("user")]),
        Term::string("alice"),
    ));
    assert!(base < negated);
    assert!(base < mocked);
    assert!(!equal(
        &Value::Expr(Arc::new(base)),
        &Value::Expr(Arc::new(mocked))
    ));
}

#[test]
fn bodies_compare_expression_by_expression() {
    let short = Body::new([eq(0, input("a"), Term::number(1))]);
    let long = Body::new([
        eq(0, input("a"), Term::number(1)),
        eq(1, input("b"), Term::number(2)),
    ]);
    assert!(short < long);
    assert_eq!(
        compare(&Value::Body(short.clone()), &Value::Body(long)),
        Ordering::Less
    );
    assert!(equal(&Value::Body(short.clone()), &Value::Body(short)));
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn rules_compare_head_first() {
    let a = allow_rule("admin");
    let b = allow_rule("user");
    assert!(a < b);

    let deny = Rule::new(
        Head::named("deny").with_value(Term::boolean(true)),
        Body::default(),
    );
    // The head ref `deny` sorts above `allow` before bodies are looked at.
    assert!(b < deny);
}

#[test]
fn function_heads_compare_args() {
    let f = |arg: &str| {
        Head::named("f")
            .with_args(Args::new([Term::var(arg)]))
            .with_value(Term::var(arg))
    };
    assert!(f("a") < f("b"));
    assert_eq!(f("a").cmp(&f("a")), Ordering::Equal);
}

#[test]
fn partial_set_heads_compare_keys() {
    let a = Head::named("users").with_key(Term::string("alice"));
    let b = Head::named("users").with_key(Term::string("bob"));
    assert!(a < b);
    assert!(Head::named("users") < a);
}

#[test]
fn default_and_else() {
    let base = allow_rule("admin");
    assert!(base < base.clone().as_default());

    let fallback = Rule::new(
        Head::named("allow").with_value(Term::boolean(false)),
        Body::default(),
    );
    let chained = base.clone().with_else(fallback.clone());
    assert!(base < chained);
    assert_eq!(chained.else_chain().count(), 1);

    let other_chain = base.with_else(
        Rule::new(Head::named("allow").with_value(Term::boolean(true)), Body::default()),
    );
    assert!(chained < other_chain);
}

#[test]
fn rule_annotations() {
    let plain = allow_rule("admin");
    let annotated = plain
        .clone()
        .with_annotations(Annotations::new(AnnotationScope::Rule).with_title("Admins"));
    assert!(plain < annotated);
}

// =============================================================================
// Modules
// =============================================================================

#[test]
fn modules_compare_package_imports_annotations_rules() {
    let a = module([allow_rule("admin")]);
    let b = module([allow_rule("admin"), allow_rule("user")]);
    assert!(a < b);
    assert_eq!(a, module([allow_rule("admin")]));

    let imported = a.clone().with_import(Import::new(input("user")));
    assert!(imported > b, "imports compare before rules");

    let annotated = a
        .clone()
        .with_annotations(Annotations::new(AnnotationScope::Package).with_title("authz"));
    assert!(annotated > b, "annotations compare before rules");
}

#[test]
fn modules_in_terms() {
    let a = Value::Module(Arc::new(module([allow_rule("admin")])));
    let b = Value::Module(Arc::new(module([allow_rule("admin")])));
    assert!(equal(&a, &b));
    assert_eq!(compare(&a, &b), Ordering::Equal);
}

#[test]
fn annotation_fields() {
    let base = Annotations::new(AnnotationScope::Document);
    assert!(base < base.clone().with_title("t"));
    assert!(base < base.clone().with_author("Ann", "ann@example.com"));
    assert!(base < base.clone().as_entrypoint());
    assert!(base < base.clone().with_custom(Term::null()));
    assert!(Annotations::new(AnnotationScope::Package) < base);
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn locations_never_affect_nodes() {
    let at = |row| {
        Term::var("x").with_location(Location {
            file: Some("policy.rego".into()),
            row,
            col: 1,
        })
    };
    let a = Expr::term(0, at(1));
    let b = Expr::term(0, at(99));
    assert_eq!(a, b);
}
