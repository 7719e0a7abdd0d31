//! Syntax tree for model descriptions.
//!
//! The tree mirrors the text closely. Kinds, field names and references are
//! kept as written; checking them against the schema happens when the tree is
//! lowered into a [`SourceModel`](epbridge_model::SourceModel).

use std::ops::Deref;

use epbridge_shared::span::Span;

/// A syntax tree value together with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    span: Span,
    value: T,
}

impl<T> Node<T> {
    /// Creates a node covering `span`.
    #[must_use]
    pub const fn new(span: Span, value: T) -> Self {
        Self { span, value }
    }

    /// Returns the span of the node.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the value of the node.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns its value.
    #[must_use]
    pub fn take_value(self) -> T {
        self.value
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// An object declaration node.
pub type ObjectNode = Node<ObjectDecl>;

/// An object declaration such as `ThermalZone "Core" { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    kind: Node<String>,
    name: Option<Node<String>>,
    entries: Vec<Entry>,
}

impl ObjectDecl {
    /// Creates a new object declaration.
    #[must_use]
    pub const fn new(kind: Node<String>, name: Option<Node<String>>, entries: Vec<Entry>) -> Self {
        Self {
            kind,
            name,
            entries,
        }
    }

    /// Returns the kind keyword as written.
    #[must_use]
    pub const fn kind(&self) -> &Node<String> {
        &self.kind
    }

    /// Returns the name, if one was given.
    #[must_use]
    pub const fn name(&self) -> Option<&Node<String>> {
        self.name.as_ref()
    }

    /// Returns the fields and nested objects in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the field assignments.
    pub fn fields(&self) -> impl Iterator<Item = (&Node<String>, &Node<ValueLiteral>)> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Field { name, value } => Some((name, value)),
            Entry::Child(_) => None,
        })
    }

    /// Returns the nested objects.
    pub fn children(&self) -> impl Iterator<Item = &ObjectNode> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Child(child) => Some(child),
            Entry::Field { .. } => None,
        })
    }
}

/// An entry inside the braces of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// `name = value`
    Field {
        /// The field name
        name: Node<String>,
        /// The assigned value
        value: Node<ValueLiteral>,
    },
    /// A nested object, owned by the enclosing one
    Child(ObjectNode),
}

/// A literal field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueLiteral {
    /// A number such as `3.5` or `-1e3`
    Number(f64),
    /// A double-quoted string
    Text(String),
    /// `true` or `false`
    Boolean(bool),
    /// `autosize`
    Autosize,
    /// `@"Name"`, a reference to another object by name
    Reference(String),
}

impl ValueLiteral {
    /// Returns a short name for the kind of literal, for messages.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Autosize => "`autosize`",
            Self::Reference(_) => "reference",
        }
    }
}
