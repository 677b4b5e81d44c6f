//! Module-level declarations: packages, imports, annotations, modules.

use std::sync::Arc;

use tenet_foundation::LtVec;

use crate::rule::Rule;
use crate::term::{Ref, Term, Var};

/// `package a.b.c`
#[derive(Clone, Debug)]
pub struct Package {
    /// The package path.
    pub path: Ref,
}

impl Package {
    /// Creates a package declaration.
    #[must_use]
    pub fn new(path: Ref) -> Self {
        Self { path }
    }
}

/// `import data.x as y`
#[derive(Clone, Debug)]
pub struct Import {
    /// The imported path, usually a ref term.
    pub path: Term,
    /// Optional alias.
    pub alias: Option<Var>,
}

impl Import {
    /// Creates an import without an alias.
    #[must_use]
    pub fn new(path: Term) -> Self {
        Self { path, alias: None }
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<Arc<str>>) -> Self {
        self.alias = Some(Var::new(alias));
        self
    }
}

/// What an annotation block applies to.
///
/// Variant order is comparison order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AnnotationScope {
    /// The enclosing package.
    Package,
    /// The package and every package below it.
    Subpackages,
    /// All rules sharing the same name.
    Document,
    /// The rule that follows the block.
    #[default]
    Rule,
}

impl AnnotationScope {
    /// Returns the scope keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Subpackages => "subpackages",
            Self::Document => "document",
            Self::Rule => "rule",
        }
    }
}

/// An author entry of an annotation block.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Author {
    /// Display name.
    pub name: Arc<str>,
    /// Contact address.
    pub email: Arc<str>,
}

/// A related resource entry of an annotation block.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RelatedResource {
    /// The resource URL.
    pub reference: Arc<str>,
    /// Human description.
    pub description: Arc<str>,
}

/// A schema binding: the document at `path` follows `definition`.
#[derive(Clone, Debug)]
pub struct SchemaAnnotation {
    /// The input or data path the schema applies to.
    pub path: Ref,
    /// Inline schema definition, if given.
    pub definition: Option<Term>,
}

/// A `METADATA` annotation block.
///
/// Fields are listed in the order they are compared.
#[derive(Clone, Debug, Default)]
pub struct Annotations {
    /// What the block applies to.
    pub scope: AnnotationScope,
    /// Title, empty if absent.
    pub title: Arc<str>,
    /// Description, empty if absent.
    pub description: Arc<str>,
    /// Organizations.
    pub organizations: LtVec<Arc<str>>,
    /// Related resources.
    pub related_resources: LtVec<RelatedResource>,
    /// Authors.
    pub authors: LtVec<Author>,
    /// Schema bindings.
    pub schemas: LtVec<SchemaAnnotation>,
    /// Whether the annotated rule or package is an entrypoint.
    pub entrypoint: bool,
    /// Arbitrary custom metadata, usually an object.
    pub custom: Option<Term>,
}

impl Annotations {
    /// Creates an empty block with the given scope.
    #[must_use]
    pub fn new(scope: AnnotationScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds an author.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<Arc<str>>, email: impl Into<Arc<str>>) -> Self {
        self.authors = self.authors.push_back(Author {
            name: name.into(),
            email: email.into(),
        });
        self
    }

    /// Marks the block as an entrypoint.
    #[must_use]
    pub fn as_entrypoint(mut self) -> Self {
        self.entrypoint = true;
        self
    }

    /// Sets the custom metadata.
    #[must_use]
    pub fn with_custom(mut self, custom: Term) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// A parsed policy file.
#[derive(Clone, Debug)]
pub struct Module {
    /// The package declaration.
    pub package: Package,
    /// Imports, in written order.
    pub imports: LtVec<Import>,
    /// Annotation blocks, in written order.
    pub annotations: LtVec<Annotations>,
    /// Rules, in written order.
    pub rules: LtVec<Rule>,
}

impl Module {
    /// Creates a module with no imports, annotations, or rules.
    #[must_use]
    pub fn new(package: Package) -> Self {
        Self {
            package,
            imports: LtVec::new(),
            annotations: LtVec::new(),
            rules: LtVec::new(),
        }
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports = self.imports.push_back(import);
        self
    }

    /// Appends an annotation block.
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = self.annotations.push_back(annotations);
        self
    }

    /// Appends a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules = self.rules.push_back(rule);
        self
    }
}
