//! Value model and total ordering for the Tenet rule language.
//!
//! This crate provides:
//! - [`Term`] and [`Value`] - every value and syntax-tree node kind
//! - [`Number`] - arbitrary-precision number literals
//! - [`compare()`] and [`equal()`] - a total order over all values, absent
//!   terms included, with equality derived from it
//! - [`Comparator`] - the same order behind a nesting-depth limit
//!
//! `Value`, `Term`, and every node type implement [`Ord`] through the same
//! comparator, so they sort with the standard library and serve as keys of
//! the sorted collections in `tenet_foundation`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod comprehension;
mod display;
pub mod expr;
pub mod module;
pub mod number;
pub mod rule;
pub mod term;

pub use compare::{
    AsValue, CompareConfig, Comparator, DEFAULT_MAX_DEPTH, Rank, compare, compare_refs,
    compare_vars, equal, rank, ref_equal, term_value_compare, term_value_equal, value_equal,
};
pub use comprehension::{ArrayComprehension, ObjectComprehension, SetComprehension};
pub use expr::{Body, Every, Expr, ExprTerms, SomeDecl, With};
pub use module::{
    AnnotationScope, Annotations, Author, Import, Module, Package, RelatedResource,
    SchemaAnnotation,
};
pub use number::{MAX_EXPONENT, Number};
pub use rule::{Head, Rule};
pub use term::{Args, Array, Call, Location, Object, Ref, Set, Term, Value, Var};
pub use tenet_foundation::{Error, ErrorKind, Result};
