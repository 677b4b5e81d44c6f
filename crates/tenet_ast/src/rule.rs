//! Rule heads and rules.

use std::sync::Arc;

use tenet_foundation::LtVec;

use crate::expr::Body;
use crate::module::Annotations;
use crate::term::{Args, Ref, Term, Var};

/// The head of a rule: what the rule defines and what it produces.
///
/// Fields are listed in the order they are compared.
#[derive(Clone, Debug, Default)]
pub struct Head {
    /// Whether the value is bound with `:=`.
    pub assign: bool,
    /// Function parameters, empty for non-function rules.
    pub args: Args,
    /// The full reference the rule defines, e.g. `a.b[x]`.
    pub reference: Ref,
    /// The rule name.
    pub name: Option<Var>,
    /// The key term of a partial rule.
    pub key: Option<Term>,
    /// The produced value.
    pub value: Option<Term>,
}

impl Head {
    /// Creates a head defining `name` with no value.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        let name = Var::new(name);
        Self {
            reference: Ref::new([Term::new(name.clone().into())]),
            name: Some(name),
            ..Self::default()
        }
    }

    /// Sets the produced value.
    #[must_use]
    pub fn with_value(mut self, value: Term) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the partial-rule key.
    #[must_use]
    pub fn with_key(mut self, key: Term) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets function parameters.
    #[must_use]
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    /// Marks the value as bound with `:=`.
    #[must_use]
    pub fn assigned(mut self) -> Self {
        self.assign = true;
        self
    }
}

/// A rule, possibly followed by an `else` chain.
///
/// Fields are listed in the order they are compared.
#[derive(Clone, Debug)]
pub struct Rule {
    /// The rule head.
    pub head: Head,
    /// Whether this is a `default` rule.
    pub default: bool,
    /// The rule body.
    pub body: Body,
    /// Metadata attached to the rule.
    pub annotations: LtVec<Annotations>,
    /// The `else` branch.
    pub else_rule: Option<Arc<Rule>>,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub fn new(head: Head, body: Body) -> Self {
        Self {
            head,
            default: false,
            body,
            annotations: LtVec::new(),
            else_rule: None,
        }
    }

    /// Marks the rule as a `default` rule.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Attaches an `else` branch.
    #[must_use]
    pub fn with_else(mut self, else_rule: Rule) -> Self {
        self.else_rule = Some(Arc::new(else_rule));
        self
    }

    /// Attaches an annotation block.
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = self.annotations.push_back(annotations);
        self
    }

    /// Returns the rules of the `else` chain, starting after this one.
    pub fn else_chain(&self) -> impl Iterator<Item = &Rule> {
        std::iter::successors(self.else_rule.as_deref(), |rule| rule.else_rule.as_deref())
    }
}
