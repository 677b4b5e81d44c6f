//! Surface-syntax rendering of values and syntax-tree nodes.
//!
//! Output is for diagnostics and test failures. It is readable policy text
//! but not guaranteed to parse back.

use std::fmt;

use crate::comprehension::{ArrayComprehension, ObjectComprehension, SetComprehension};
use crate::expr::{Body, Every, Expr, ExprTerms, SomeDecl, With};
use crate::module::{Annotations, Import, Module, Package};
use crate::rule::{Head, Rule};
use crate::term::{Args, Array, Call, Object, Ref, Set, Term, Value};

fn join<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a T>,
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_path<'a>(
    f: &mut fmt::Formatter<'_>,
    mut terms: impl Iterator<Item = &'a Term>,
) -> fmt::Result {
    if let Some(head) = terms.next() {
        write!(f, "{head}")?;
    }
    for term in terms {
        match term.value.as_str() {
            Some(s) if is_identifier(s) => write!(f, ".{s}")?,
            _ => write!(f, "[{term}]")?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{:?}", &**s),
            Self::Var(v) => write!(f, "{v}"),
            Self::Ref(r) => write!(f, "{r}"),
            Self::Array(a) => write!(f, "{a}"),
            Self::Object(o) => write!(f, "{o}"),
            Self::Set(s) => write!(f, "{s}"),
            Self::ArrayComprehension(c) => write!(f, "{c}"),
            Self::ObjectComprehension(c) => write!(f, "{c}"),
            Self::SetComprehension(c) => write!(f, "{c}"),
            Self::Call(c) => write!(f, "{c}"),
            Self::Args(a) => write!(f, "{a}"),
            Self::Expr(e) => write!(f, "{e}"),
            Self::SomeDecl(s) => write!(f, "{s}"),
            Self::Every(e) => write!(f, "{e}"),
            Self::With(w) => write!(f, "{w}"),
            Self::Body(b) => write!(f, "{b}"),
            Self::Head(h) => write!(f, "{h}"),
            Self::Rule(r) => write!(f, "{r}"),
            Self::Import(i) => write!(f, "{i}"),
            Self::Package(p) => write!(f, "{p}"),
            Self::Annotations(a) => write!(f, "{a}"),
            Self::Module(m) => write!(f, "{m}"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_path(f, self.iter())
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        join(f, self.iter(), ", ")?;
        f.write_str("]")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.canonical_pairs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("set()");
        }
        f.write_str("{")?;
        join(f, self.iter(), ", ")?;
        f.write_str("}")
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.iter();
        if let Some(operator) = terms.next() {
            write!(f, "{operator}")?;
        }
        f.write_str("(")?;
        join(f, terms, ", ")?;
        f.write_str(")")
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        join(f, self.iter(), ", ")?;
        f.write_str(")")
    }
}

impl fmt::Display for ArrayComprehension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} | {}]", self.term, self.body)
    }
}

impl fmt::Display for ObjectComprehension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {} | {}}}", self.key, self.value, self.body)
    }
}

impl fmt::Display for SetComprehension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} | {}}}", self.term, self.body)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, self.iter(), "; ")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not ")?;
        }
        match &self.terms {
            ExprTerms::SomeDecl(decl) => write!(f, "{decl}")?,
            ExprTerms::Term(term) => write!(f, "{term}")?,
            ExprTerms::Call(call) => write!(f, "{call}")?,
            ExprTerms::Every(every) => write!(f, "{every}")?,
        }
        for with in &self.with {
            write!(f, " {with}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SomeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("some ")?;
        join(f, &self.symbols, ", ")
    }
}

impl fmt::Display for Every {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("every ")?;
        if let Some(key) = &self.key {
            write!(f, "{key}, ")?;
        }
        write!(f, "{} in {} {{ {} }}", self.value, self.domain, self.body)
    }
}

impl fmt::Display for With {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "with {} as {}", self.target, self.value)
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)?;
        if !self.args.is_empty() {
            write!(f, "{}", self.args)?;
        }
        if let Some(key) = &self.key {
            write!(f, " contains {key}")?;
        }
        if let Some(value) = &self.value {
            let op = if self.assign { ":=" } else { "=" };
            write!(f, " {op} {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.default {
            f.write_str("default ")?;
        }
        write!(f, "{}", self.head)?;
        if !self.body.is_empty() {
            write!(f, " {{ {} }}", self.body)?;
        }
        for alt in self.else_chain() {
            f.write_str(" else")?;
            if let Some(value) = &alt.head.value {
                write!(f, " = {value}")?;
            }
            write!(f, " {{ {} }}", alt.body)?;
        }
        Ok(())
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}", self.path)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        Ok(())
    }
}

/// Packages print without the implicit `data` root.
impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("package ")?;
        let mut terms = self.path.iter().skip(1);
        if let Some(first) = terms.next() {
            match first.value.as_str() {
                Some(s) => f.write_str(s)?,
                None => write!(f, "{first}")?,
            }
        }
        for term in terms {
            match term.value.as_str() {
                Some(s) if is_identifier(s) => write!(f, ".{s}")?,
                _ => write!(f, "[{term}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# METADATA scope: {}", self.scope.as_str())?;
        if !self.title.is_empty() {
            write!(f, ", title: {}", self.title)?;
        }
        if self.entrypoint {
            f.write_str(", entrypoint: true")?;
        }
        Ok(())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.package)?;
        for import in &self.imports {
            write!(f, "\n{import}")?;
        }
        for annotations in &self.annotations {
            write!(f, "\n{annotations}")?;
        }
        for rule in &self.rules {
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}
