//! Field-by-field ordering of syntax-tree nodes.
//!
//! Each node compares its fields in declaration order and stops at the first
//! difference. Nested terms go back through the dispatcher.

use std::cmp::Ordering;

use super::sequence::{compare_node_sequences, compare_term_sequences};
use super::{compare_optional_terms, compare_terms};
use crate::comprehension::{ArrayComprehension, ObjectComprehension, SetComprehension};
use crate::expr::{Body, Every, Expr, ExprTerms, SomeDecl, With};
use crate::module::{Annotations, Import, Module, Package, SchemaAnnotation};
use crate::rule::{Head, Rule};

macro_rules! ord_by_cmp {
    ($($ty:ty),* $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    )*};
}

ord_by_cmp!(
    ArrayComprehension,
    ObjectComprehension,
    SetComprehension,
    Expr,
    SomeDecl,
    Every,
    With,
    Body,
    Head,
    Rule,
    Import,
    Package,
    SchemaAnnotation,
    Annotations,
    Module,
);

impl Ord for ArrayComprehension {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(&self.term, &other.term).then_with(|| self.body.cmp(&other.body))
    }
}

impl Ord for ObjectComprehension {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(&self.key, &other.key)
            .then_with(|| compare_terms(&self.value, &other.value))
            .then_with(|| self.body.cmp(&other.body))
    }
}

impl Ord for SetComprehension {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(&self.term, &other.term).then_with(|| self.body.cmp(&other.body))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.terms
            .shape_rank()
            .cmp(&other.terms.shape_rank())
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.negated.cmp(&other.negated))
            .then_with(|| compare_expr_terms(&self.terms, &other.terms))
            .then_with(|| compare_node_sequences(&self.with, &other.with))
    }
}

fn compare_expr_terms(a: &ExprTerms, b: &ExprTerms) -> Ordering {
    match (a, b) {
        (ExprTerms::SomeDecl(a), ExprTerms::SomeDecl(b)) => a.cmp(b),
        (ExprTerms::Term(a), ExprTerms::Term(b)) => compare_terms(a, b),
        (ExprTerms::Call(a), ExprTerms::Call(b)) => compare_term_sequences(a.iter(), b.iter()),
        (ExprTerms::Every(a), ExprTerms::Every(b)) => a.cmp(b),
        _ => a.shape_rank().cmp(&b.shape_rank()),
    }
}

impl Ord for SomeDecl {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_term_sequences(&self.symbols, &other.symbols)
    }
}

impl Ord for Every {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_optional_terms(self.key.as_ref(), other.key.as_ref())
            .then_with(|| compare_terms(&self.value, &other.value))
            .then_with(|| compare_terms(&self.domain, &other.domain))
            .then_with(|| self.body.cmp(&other.body))
    }
}

impl Ord for With {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(&self.target, &other.target)
            .then_with(|| compare_terms(&self.value, &other.value))
    }
}

impl Ord for Body {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_node_sequences(self.iter(), other.iter())
    }
}

impl Ord for Head {
    fn cmp(&self, other: &Self) -> Ordering {
        self.assign
            .cmp(&other.assign)
            .then_with(|| compare_term_sequences(self.args.iter(), other.args.iter()))
            .then_with(|| compare_term_sequences(self.reference.iter(), other.reference.iter()))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| compare_optional_terms(self.key.as_ref(), other.key.as_ref()))
            .then_with(|| compare_optional_terms(self.value.as_ref(), other.value.as_ref()))
    }
}

impl Ord for Rule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head
            .cmp(&other.head)
            .then_with(|| self.default.cmp(&other.default))
            .then_with(|| self.body.cmp(&other.body))
            .then_with(|| compare_node_sequences(&self.annotations, &other.annotations))
            .then_with(|| self.else_rule.cmp(&other.else_rule))
    }
}

impl Ord for Import {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(&self.path, &other.path).then_with(|| self.alias.cmp(&other.alias))
    }
}

impl Ord for Package {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_term_sequences(self.path.iter(), other.path.iter())
    }
}

impl Ord for SchemaAnnotation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_term_sequences(self.path.iter(), other.path.iter()).then_with(|| {
            compare_optional_terms(self.definition.as_ref(), other.definition.as_ref())
        })
    }
}

impl Ord for Annotations {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scope
            .cmp(&other.scope)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.description.cmp(&other.description))
            .then_with(|| compare_node_sequences(&self.organizations, &other.organizations))
            .then_with(|| {
                compare_node_sequences(&self.related_resources, &other.related_resources)
            })
            .then_with(|| compare_node_sequences(&self.authors, &other.authors))
            .then_with(|| compare_node_sequences(&self.schemas, &other.schemas))
            .then_with(|| self.entrypoint.cmp(&other.entrypoint))
            .then_with(|| compare_optional_terms(self.custom.as_ref(), other.custom.as_ref()))
    }
}

impl Ord for Module {
    fn cmp(&self, other: &Self) -> Ordering {
        self.package
            .cmp(&other.package)
            .then_with(|| compare_node_sequences(&self.imports, &other.imports))
            .then_with(|| compare_node_sequences(&self.annotations, &other.annotations))
            .then_with(|| compare_node_sequences(&self.rules, &other.rules))
    }
}
