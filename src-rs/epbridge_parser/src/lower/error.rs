//! Errors raised while lowering a syntax tree into a source model.

use std::fmt;

use epbridge_model::{ModelError, ObjectKind};
use epbridge_shared::{
    error::{AsBridgeError, Context, ErrorLocation},
    span::Span,
};

/// A semantic error in a model description.
///
/// The text parsed, but it does not describe a valid source model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    /// The object kind is not one the engine knows.
    UnknownKind {
        /// The kind as written
        kind: String,
        /// Where the kind was written
        span: Span,
    },
    /// The model builder rejected an object, field or child.
    Model {
        /// The rejection
        error: ModelError,
        /// Where the offending declaration was written
        span: Span,
    },
    /// No object with the given name has a kind the reference accepts.
    UnresolvedReference {
        /// The kind of the referencing object
        kind: ObjectKind,
        /// The reference field
        field: &'static str,
        /// The name that was referenced
        target: String,
        /// The kinds the field accepts
        accepted: &'static [ObjectKind],
        /// Where the reference was written
        span: Span,
    },
    /// A scalar value was given for a reference field.
    ExpectedReference {
        /// The kind of the object
        kind: ObjectKind,
        /// The reference field
        field: &'static str,
        /// Where the value was written
        span: Span,
    },
    /// A reference was given for a scalar field.
    UnexpectedReference {
        /// The kind of the object
        kind: ObjectKind,
        /// The scalar field
        field: &'static str,
        /// Where the reference was written
        span: Span,
    },
}

impl LoweringError {
    /// Returns where the error was written.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::UnknownKind { span, .. }
            | Self::Model { span, .. }
            | Self::UnresolvedReference { span, .. }
            | Self::ExpectedReference { span, .. }
            | Self::UnexpectedReference { span, .. } => span,
        }
    }
}

impl fmt::Display for LoweringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind { kind, .. } => write!(f, "unknown object kind `{kind}`"),
            Self::Model { error, .. } => write!(f, "{error}"),
            Self::UnresolvedReference {
                kind,
                field,
                target,
                ..
            } => write!(
                f,
                "`{kind}.{field}` refers to \"{target}\", which does not exist"
            ),
            Self::ExpectedReference { kind, field, .. } => {
                write!(f, "field `{kind}.{field}` expects a reference")
            }
            Self::UnexpectedReference { kind, field, .. } => {
                write!(f, "field `{kind}.{field}` does not accept a reference")
            }
        }
    }
}

fn kind_list(kinds: &[ObjectKind]) -> String {
    kinds
        .iter()
        .map(|kind| format!("`{kind}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AsBridgeError for LoweringError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownKind { kind, .. } => {
                let suggestion = ObjectKind::ALL
                    .into_iter()
                    .find(|known| known.keyword().eq_ignore_ascii_case(kind));
                suggestion.map_or_else(Vec::new, |known| {
                    vec![Context::Help(format!("did you mean `{known}`?"))]
                })
            }
            Self::Model { error, .. } => error.context(),
            Self::UnresolvedReference { accepted, .. } => vec![Context::Note(format!(
                "the field accepts objects of kind {}",
                kind_list(accepted)
            ))],
            Self::ExpectedReference { .. } => vec![Context::Help(
                "references are written `@\"Name\"`".to_string(),
            )],
            Self::UnexpectedReference { .. } => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(ErrorLocation::from_source_and_span(source, self.span()))
    }
}
