//! Terms and the value kinds they carry.

use std::fmt;
use std::sync::Arc;

use tenet_foundation::{LtMap, LtSet, LtVec};

use crate::comprehension::{ArrayComprehension, ObjectComprehension, SetComprehension};
use crate::expr::{Body, Every, Expr, SomeDecl, With};
use crate::module::{Annotations, Import, Module, Package};
use crate::number::Number;
use crate::rule::{Head, Rule};

/// Source position of a term.
///
/// Locations never take part in ordering or equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Source file, if known.
    pub file: Option<Arc<str>>,
    /// Line number (1-indexed).
    pub row: u32,
    /// Column number (1-indexed).
    pub col: u32,
}

/// A term owns exactly one [`Value`].
///
/// An absent term (`Option<&Term>::None`) is not the same as a term holding
/// [`Value::Null`]; absence sorts below every value.
#[derive(Clone, Debug)]
pub struct Term {
    /// The value carried by this term.
    pub value: Value,
    /// Where the term was written.
    pub location: Option<Location>,
}

/// Every value and syntax-tree node kind of the rule language.
///
/// Values are immutable and cheaply cloneable. Node kinds are shared behind
/// `Arc`; collections use persistent structures.
#[derive(Clone, Debug)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// A boolean literal.
    Boolean(bool),
    /// A number literal.
    Number(Number),
    /// A string literal.
    String(Arc<str>),
    /// A variable.
    Var(Var),
    /// A reference path such as `data.users[i].name`.
    Ref(Ref),
    /// An array.
    Array(Array),
    /// An object (key-value map).
    Object(Object),
    /// A set.
    Set(Set),
    /// `[term | body]`
    ArrayComprehension(Arc<ArrayComprehension>),
    /// `{key: value | body}`
    ObjectComprehension(Arc<ObjectComprehension>),
    /// `{term | body}`
    SetComprehension(Arc<SetComprehension>),
    /// A call: operator followed by its arguments.
    Call(Call),
    /// Function parameters.
    Args(Args),
    /// A single statement.
    Expr(Arc<Expr>),
    /// `some x, y`
    SomeDecl(Arc<SomeDecl>),
    /// `every k, v in domain { body }`
    Every(Arc<Every>),
    /// `with target as value`
    With(Arc<With>),
    /// A query: an ordered sequence of expressions.
    Body(Body),
    /// A rule head.
    Head(Arc<Head>),
    /// A rule.
    Rule(Arc<Rule>),
    /// An import declaration.
    Import(Arc<Import>),
    /// A package declaration.
    Package(Arc<Package>),
    /// A metadata annotation block.
    Annotations(Arc<Annotations>),
    /// A whole module.
    Module(Arc<Module>),
}

impl Value {
    /// Returns a short name for this value's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Var(_) => "var",
            Self::Ref(_) => "ref",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Set(_) => "set",
            Self::ArrayComprehension(_) => "arraycomprehension",
            Self::ObjectComprehension(_) => "objectcomprehension",
            Self::SetComprehension(_) => "setcomprehension",
            Self::Call(_) => "call",
            Self::Args(_) => "args",
            Self::Expr(_) => "expr",
            Self::SomeDecl(_) => "somedecl",
            Self::Every(_) => "every",
            Self::With(_) => "with",
            Self::Body(_) => "body",
            Self::Head(_) => "head",
            Self::Rule(_) => "rule",
            Self::Import(_) => "import",
            Self::Package(_) => "package",
            Self::Annotations(_) => "annotations",
            Self::Module(_) => "module",
        }
    }

    /// Returns true if this value is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Attempts to extract a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Term {
    /// Creates a term without a location.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            location: None,
        }
    }

    /// Attaches a source location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// `null`
    #[must_use]
    pub fn null() -> Self {
        Self::new(Value::Null)
    }

    /// A boolean term.
    #[must_use]
    pub fn boolean(b: bool) -> Self {
        Self::new(Value::Boolean(b))
    }

    /// A number term.
    #[must_use]
    pub fn number(n: impl Into<Number>) -> Self {
        Self::new(Value::Number(n.into()))
    }

    /// A string term.
    #[must_use]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::new(Value::String(s.into()))
    }

    /// A variable term.
    #[must_use]
    pub fn var(name: impl Into<Arc<str>>) -> Self {
        Self::new(Value::Var(Var::new(name)))
    }

    /// A reference term built from its path elements.
    #[must_use]
    pub fn reference(path: impl IntoIterator<Item = Term>) -> Self {
        Self::new(Value::Ref(path.into_iter().collect()))
    }

    /// An array term.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Term>) -> Self {
        Self::new(Value::Array(items.into_iter().collect()))
    }

    /// An object term; a repeated key keeps its last value.
    #[must_use]
    pub fn object(pairs: impl IntoIterator<Item = (Term, Term)>) -> Self {
        Self::new(Value::Object(pairs.into_iter().collect()))
    }

    /// A set term; duplicate elements collapse.
    #[must_use]
    pub fn set(items: impl IntoIterator<Item = Term>) -> Self {
        Self::new(Value::Set(items.into_iter().collect()))
    }

    /// A call term: operator followed by arguments.
    #[must_use]
    pub fn call(terms: impl IntoIterator<Item = Term>) -> Self {
        Self::new(Value::Call(terms.into_iter().collect()))
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Var> for Value {
    fn from(v: Var) -> Self {
        Self::Var(v)
    }
}

/// A variable name. Variables order by their text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(Arc<str>);

impl Var {
    /// Creates a variable.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! term_sequence {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name(LtVec<Term>);

        impl $name {
            /// Creates the sequence from terms in order.
            #[must_use]
            pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
                terms.into_iter().collect()
            }

            /// Returns the number of terms.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns true if there are no terms.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Gets a term by position.
            #[must_use]
            pub fn get(&self, index: usize) -> Option<&Term> {
                self.0.get(index)
            }

            /// Returns an iterator over the terms in order.
            pub fn iter(&self) -> impl ExactSizeIterator<Item = &Term> {
                self.0.iter()
            }

            /// Returns a new sequence with `term` appended.
            #[must_use]
            pub fn append(&self, term: Term) -> Self {
                Self(self.0.push_back(term))
            }
        }

        impl FromIterator<Term> for $name {
            fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
}

term_sequence!(
    /// A reference path. The first term is the head (usually a var).
    Ref
);
term_sequence!(
    /// An array of terms.
    Array
);
term_sequence!(
    /// A call: the operator term followed by argument terms.
    Call
);
term_sequence!(
    /// Function parameters.
    Args
);

impl Ref {
    /// Returns the head term of the path.
    #[must_use]
    pub fn head(&self) -> Option<&Term> {
        self.0.first()
    }
}

impl Call {
    /// Returns the operator term.
    #[must_use]
    pub fn operator(&self) -> Option<&Term> {
        self.0.first()
    }
}

/// An object. Keys are unique; iteration follows the canonical key order.
#[derive(Clone, Default)]
pub struct Object(LtMap<Term, Term>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(LtMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the object has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &Term) -> Option<&Term> {
        self.0.get(key)
    }

    /// Returns a new object with the entry inserted.
    #[must_use]
    pub fn insert(&self, key: Term, value: Term) -> Self {
        Self(self.0.insert(key, value))
    }

    /// Returns the key-value pairs in canonical key order.
    pub fn canonical_pairs(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.0.iter()
    }
}

impl FromIterator<(Term, Term)> for Object {
    fn from_iter<I: IntoIterator<Item = (Term, Term)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.0).finish()
    }
}

/// A set of unique terms.
#[derive(Clone, Default)]
pub struct Set(LtSet<Term>);

impl Set {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(LtSet::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if an equal element is present.
    #[must_use]
    pub fn contains(&self, term: &Term) -> bool {
        self.0.contains(term)
    }

    /// Returns a new set with `term` added.
    #[must_use]
    pub fn insert(&self, term: Term) -> Self {
        Self(self.0.insert(term))
    }

    /// Returns the elements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.0.iter()
    }

    /// Returns the elements present in exactly one of the two sets.
    pub fn symmetric_difference<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a Term> {
        self.0.symmetric_difference(&other.0)
    }
}

impl FromIterator<Term> for Set {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Set").field(&self.0).finish()
    }
}
