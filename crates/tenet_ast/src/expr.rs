//! Expressions, their modifiers, and query bodies.

use std::sync::Arc;

use tenet_foundation::LtVec;

use crate::term::{Call, Term};

/// The operand shape of an expression.
#[derive(Clone, Debug)]
pub enum ExprTerms {
    /// `some x, y`
    SomeDecl(SomeDecl),
    /// A single term, e.g. `x` or `true`.
    Term(Term),
    /// An operator applied to arguments, e.g. `eq(x, 1)`.
    Call(Call),
    /// `every k, v in domain { ... }`
    Every(Arc<Every>),
}

impl ExprTerms {
    /// Position of this shape when comparing expressions of different shapes.
    #[must_use]
    pub const fn shape_rank(&self) -> u8 {
        match self {
            Self::SomeDecl(_) => 0,
            Self::Term(_) => 1,
            Self::Call(_) => 2,
            Self::Every(_) => 3,
        }
    }
}

/// One statement of a query.
#[derive(Clone, Debug)]
pub struct Expr {
    /// Position of the expression within its body.
    pub index: usize,
    /// Whether the expression is prefixed with `not`.
    pub negated: bool,
    /// The operands.
    pub terms: ExprTerms,
    /// `with` modifiers, in written order.
    pub with: LtVec<With>,
}

impl Expr {
    /// Creates an expression at `index` with no modifiers.
    #[must_use]
    pub fn new(index: usize, terms: ExprTerms) -> Self {
        Self {
            index,
            negated: false,
            terms,
            with: LtVec::new(),
        }
    }

    /// Creates an expression from a single term.
    #[must_use]
    pub fn term(index: usize, term: Term) -> Self {
        Self::new(index, ExprTerms::Term(term))
    }

    /// Creates a call expression: operator followed by arguments.
    #[must_use]
    pub fn call(index: usize, terms: impl IntoIterator<Item = Term>) -> Self {
        Self::new(index, ExprTerms::Call(terms.into_iter().collect()))
    }

    /// Returns the negated expression.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Appends a `with` modifier.
    #[must_use]
    pub fn with_modifier(mut self, with: With) -> Self {
        self.with = self.with.push_back(with);
        self
    }
}

/// `some x, y` or `some x in xs`.
#[derive(Clone, Debug, Default)]
pub struct SomeDecl {
    /// Declared symbols, in written order.
    pub symbols: LtVec<Term>,
}

impl SomeDecl {
    /// Creates a declaration of the given symbols.
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = Term>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }
}

/// `every key, value in domain { body }`
#[derive(Clone, Debug)]
pub struct Every {
    /// Optional key variable.
    pub key: Option<Term>,
    /// Value variable.
    pub value: Term,
    /// The collection being iterated.
    pub domain: Term,
    /// The condition every element must satisfy.
    pub body: Body,
}

impl Every {
    /// Creates an `every` quantifier.
    #[must_use]
    pub fn new(key: Option<Term>, value: Term, domain: Term, body: Body) -> Self {
        Self {
            key,
            value,
            domain,
            body,
        }
    }
}

/// `with target as value`
#[derive(Clone, Debug)]
pub struct With {
    /// The replaced document or function.
    pub target: Term,
    /// The replacement.
    pub value: Term,
}

impl With {
    /// Creates a `with` modifier.
    #[must_use]
    pub fn new(target: Term, value: Term) -> Self {
        Self { target, value }
    }
}

/// A query: expressions evaluated in order.
#[derive(Clone, Debug, Default)]
pub struct Body(LtVec<Expr>);

impl Body {
    /// Creates a body from expressions in order.
    #[must_use]
    pub fn new(exprs: impl IntoIterator<Item = Expr>) -> Self {
        exprs.into_iter().collect()
    }

    /// Returns the number of expressions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the body has no expressions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the expressions in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Expr> {
        self.0.iter()
    }
}

impl FromIterator<Expr> for Body {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
