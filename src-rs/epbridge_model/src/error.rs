//! Errors raised while building a source model.

use std::fmt;

use epbridge_shared::error::{AsBridgeError, Context};

use crate::{id::ObjectId, kind::ObjectKind};

/// An invalid operation on a [`SourceModelBuilder`](crate::SourceModelBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The object id does not belong to the model.
    UnknownObject {
        /// The unknown id
        id: ObjectId,
    },
    /// The kind has no field with the given name.
    UnknownField {
        /// The kind of the object
        kind: ObjectKind,
        /// The field that was asked for
        field: String,
    },
    /// The value does not match the type of the field.
    WrongValueType {
        /// The kind of the object
        kind: ObjectKind,
        /// The field being assigned
        field: &'static str,
        /// The expected type
        expected: &'static str,
        /// The type of the value that was given
        found: &'static str,
    },
    /// The field is not autosizable.
    AutosizeNotAllowed {
        /// The kind of the object
        kind: ObjectKind,
        /// The field being assigned
        field: &'static str,
    },
    /// The reference field does not accept objects of the target kind.
    InvalidReferenceTarget {
        /// The kind of the referencing object
        kind: ObjectKind,
        /// The reference field
        field: &'static str,
        /// The kind of the target
        target: ObjectKind,
        /// The kinds the field accepts
        accepted: &'static [ObjectKind],
    },
    /// The parent has no collection for children of this kind.
    ChildNotAllowed {
        /// The kind of the parent
        parent: ObjectKind,
        /// The kind of the child
        child: ObjectKind,
    },
    /// Another object of the same kind already has this name.
    DuplicateName {
        /// The kind of both objects
        kind: ObjectKind,
        /// The shared name
        name: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject { id } => write!(f, "object {id} does not exist"),
            Self::UnknownField { kind, field } => {
                write!(f, "`{kind}` has no field `{field}`")
            }
            Self::WrongValueType {
                kind,
                field,
                expected,
                found,
            } => write!(
                f,
                "field `{kind}.{field}` expects a {expected} value, found {found}"
            ),
            Self::AutosizeNotAllowed { kind, field } => {
                write!(f, "field `{kind}.{field}` cannot be autosized")
            }
            Self::InvalidReferenceTarget {
                kind,
                field,
                target,
                ..
            } => write!(
                f,
                "field `{kind}.{field}` cannot reference a `{target}` object"
            ),
            Self::ChildNotAllowed { parent, child } => {
                write!(f, "`{child}` objects cannot be placed inside `{parent}`")
            }
            Self::DuplicateName { kind, name } => {
                write!(f, "a `{kind}` named \"{name}\" already exists")
            }
        }
    }
}

impl AsBridgeError for ModelError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidReferenceTarget { accepted, .. } => {
                let accepted = accepted
                    .iter()
                    .map(|kind| format!("`{kind}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Context::Note(format!("the field accepts {accepted}"))]
            }
            Self::DuplicateName { .. } => vec![Context::Note(
                "names are compared without regard to case".to_string(),
            )],
            Self::UnknownObject { .. }
            | Self::UnknownField { .. }
            | Self::WrongValueType { .. }
            | Self::AutosizeNotAllowed { .. }
            | Self::ChildNotAllowed { .. } => vec![],
        }
    }
}
