//! Depth-bounded comparison for untrusted inputs.
//!
//! [`compare`](super::compare) recurses once per nesting level, so a deeply
//! nested input can exhaust the stack. [`Comparator`] measures both operands
//! first and refuses to compare anything nested deeper than its configured
//! limit. The measurement itself never descends past the limit.

use std::cmp::Ordering;

use tenet_foundation::{Error, Result};

use super::{AsValue, compare, equal};
use crate::comprehension::{ArrayComprehension, ObjectComprehension, SetComprehension};
use crate::expr::{Body, Every, Expr, ExprTerms, SomeDecl, With};
use crate::module::{Annotations, Import, Module, Package, SchemaAnnotation};
use crate::rule::{Head, Rule};
use crate::term::{Term, Value};

/// Nesting depth accepted by [`CompareConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

const STRICT_MAX_DEPTH: usize = 64;

/// Configuration for a [`Comparator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// Deepest nesting accepted, or `None` to accept any input.
    pub max_depth: Option<usize>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl CompareConfig {
    /// Accepts inputs of any depth. Only for trusted trees.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// A tight limit for inputs straight off the wire.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_depth: Some(STRICT_MAX_DEPTH),
        }
    }

    /// Builder method to set the depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Compares values after checking their nesting depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    /// Creates a comparator with the given configuration.
    #[must_use]
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compares two operands, or fails if either is nested too deeply.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DepthLimitExceeded`](tenet_foundation::ErrorKind::DepthLimitExceeded)
    /// if either operand nests deeper than `max_depth`.
    pub fn try_compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering>
    where
        A: AsValue + ?Sized,
        B: AsValue + ?Sized,
    {
        self.check(a.as_value(), b.as_value())?;
        Ok(compare(a, b))
    }

    /// Tests two operands for equality, or fails if either is nested too
    /// deeply.
    ///
    /// # Errors
    ///
    /// Same as [`Comparator::try_compare`].
    pub fn try_equal<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: AsValue + ?Sized,
        B: AsValue + ?Sized,
    {
        self.check(a.as_value(), b.as_value())?;
        Ok(equal(a, b))
    }

    fn check(&self, a: Option<&Value>, b: Option<&Value>) -> Result<()> {
        tracing::trace!(
            left = a.map_or("absent", crate::term::Value::kind_name),
            right = b.map_or("absent", crate::term::Value::kind_name),
            max_depth = ?self.config.max_depth,
            "bounded comparison"
        );
        let Some(limit) = self.config.max_depth else {
            return Ok(());
        };
        for (side, value) in [("left", a), ("right", b)] {
            if !value.is_none_or(|v| v.fits(limit)) {
                tracing::warn!(side, limit, "operand exceeds comparison depth limit");
                return Err(Error::depth_limit_exceeded(limit));
            }
        }
        Ok(())
    }
}

/// Nesting depth check that stops once the budget runs out.
///
/// Scalars have depth zero. Every collection or syntax node adds one level.
trait Fits {
    fn fits(&self, budget: usize) -> bool;
}

fn descend(budget: usize, inner: impl FnOnce(usize) -> bool) -> bool {
    budget.checked_sub(1).is_some_and(inner)
}

fn all_fit<'a, T: Fits + 'a>(items: impl IntoIterator<Item = &'a T>, budget: usize) -> bool {
    items.into_iter().all(|item| item.fits(budget))
}

fn optional_fits<T: Fits>(item: Option<&T>, budget: usize) -> bool {
    item.is_none_or(|item| item.fits(budget))
}

impl Fits for Term {
    fn fits(&self, budget: usize) -> bool {
        self.value.fits(budget)
    }
}

impl Fits for Value {
    fn fits(&self, budget: usize) -> bool {
        match self {
            Self::Null | Self::Boolean(_) | Self::Number(_) | Self::String(_) | Self::Var(_) => {
                true
            }
            Self::Ref(r) => descend(budget, |b| all_fit(r.iter(), b)),
            Self::Array(a) => descend(budget, |b| all_fit(a.iter(), b)),
            Self::Call(c) => descend(budget, |b| all_fit(c.iter(), b)),
            Self::Args(a) => descend(budget, |b| all_fit(a.iter(), b)),
            Self::Set(s) => descend(budget, |b| all_fit(s.iter(), b)),
            Self::Object(o) => descend(budget, |b| {
                o.canonical_pairs().all(|(k, v)| k.fits(b) && v.fits(b))
            }),
            Self::ArrayComprehension(c) => c.fits(budget),
            Self::ObjectComprehension(c) => c.fits(budget),
            Self::SetComprehension(c) => c.fits(budget),
            Self::Expr(e) => e.fits(budget),
            Self::SomeDecl(s) => s.fits(budget),
            Self::Every(e) => e.fits(budget),
            Self::With(w) => w.fits(budget),
            Self::Body(body) => body.fits(budget),
            Self::Head(h) => h.fits(budget),
            Self::Rule(r) => r.fits(budget),
            Self::Import(i) => i.fits(budget),
            Self::Package(p) => p.fits(budget),
            Self::Annotations(a) => a.fits(budget),
            Self::Module(m) => m.fits(budget),
        }
    }
}

impl Fits for ArrayComprehension {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| self.term.fits(b) && self.body.fits(b))
    }
}

impl Fits for ObjectComprehension {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            self.key.fits(b) && self.value.fits(b) && self.body.fits(b)
        })
    }
}

impl Fits for SetComprehension {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| self.term.fits(b) && self.body.fits(b))
    }
}

impl Fits for Body {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| all_fit(self.iter(), b))
    }
}

impl Fits for Expr {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            let terms = match &self.terms {
                ExprTerms::SomeDecl(decl) => decl.fits(b),
                ExprTerms::Term(term) => term.fits(b),
                ExprTerms::Call(call) => all_fit(call.iter(), b),
                ExprTerms::Every(every) => every.fits(b),
            };
            terms && all_fit(&self.with, b)
        })
    }
}

impl Fits for SomeDecl {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| all_fit(&self.symbols, b))
    }
}

impl Fits for Every {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            optional_fits(self.key.as_ref(), b)
                && self.value.fits(b)
                && self.domain.fits(b)
                && self.body.fits(b)
        })
    }
}

impl Fits for With {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| self.target.fits(b) && self.value.fits(b))
    }
}

impl Fits for Head {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            all_fit(self.args.iter(), b)
                && all_fit(self.reference.iter(), b)
                && optional_fits(self.key.as_ref(), b)
                && optional_fits(self.value.as_ref(), b)
        })
    }
}

impl Fits for Rule {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            self.head.fits(b)
                && self.body.fits(b)
                && all_fit(&self.annotations, b)
                && optional_fits(self.else_rule.as_deref(), b)
        })
    }
}

impl Fits for Import {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| self.path.fits(b))
    }
}

impl Fits for Package {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| all_fit(self.path.iter(), b))
    }
}

impl Fits for SchemaAnnotation {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            all_fit(self.path.iter(), b) && optional_fits(self.definition.as_ref(), b)
        })
    }
}

impl Fits for Annotations {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            all_fit(&self.schemas, b) && optional_fits(self.custom.as_ref(), b)
        })
    }
}

impl Fits for Module {
    fn fits(&self, budget: usize) -> bool {
        descend(budget, |b| {
            self.package.fits(b)
                && all_fit(&self.imports, b)
                && all_fit(&self.annotations, b)
                && all_fit(&self.rules, b)
        })
    }
}
