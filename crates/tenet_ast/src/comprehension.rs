//! Array, object, and set comprehensions.

use crate::expr::Body;
use crate::term::Term;

/// `[term | body]`
#[derive(Clone, Debug)]
pub struct ArrayComprehension {
    /// The term collected for every solution of the body.
    pub term: Term,
    /// The query producing solutions.
    pub body: Body,
}

/// `{key: value | body}`
#[derive(Clone, Debug)]
pub struct ObjectComprehension {
    /// Key term.
    pub key: Term,
    /// Value term.
    pub value: Term,
    /// The query producing solutions.
    pub body: Body,
}

/// `{term | body}`
#[derive(Clone, Debug)]
pub struct SetComprehension {
    /// The term collected for every solution of the body.
    pub term: Term,
    /// The query producing solutions.
    pub body: Body,
}

impl ArrayComprehension {
    /// Creates an array comprehension.
    #[must_use]
    pub fn new(term: Term, body: Body) -> Self {
        Self { term, body }
    }
}

impl ObjectComprehension {
    /// Creates an object comprehension.
    #[must_use]
    pub fn new(key: Term, value: Term, body: Body) -> Self {
        Self { key, value, body }
    }
}

impl SetComprehension {
    /// Creates a set comprehension.
    #[must_use]
    pub fn new(term: Term, body: Body) -> Self {
        Self { term, body }
    }
}
