//! Structural errors that abort a translation run.

use std::fmt;

use epbridge_model::{ObjectId, ObjectKind};
use epbridge_record::DuplicateRecordName;
use epbridge_shared::error::{AsBridgeError, Context};

use crate::diagnostics::Diagnostics;

/// A violation of the source model's structure.
///
/// Anything that can be corrected or left out is reported as a
/// [`Diagnostic`](crate::Diagnostic) instead. These errors mean the run
/// cannot produce a consistent set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// A collection meant to hold at most one child holds several.
    MultipleOwnedChildren {
        /// The owning object
        parent: ObjectId,
        /// A description of the owner, such as `ThermalZone 'Core'`
        parent_description: String,
        /// The collection holding the children
        collection: &'static str,
        /// How many children it holds
        count: usize,
    },
    /// The model holds more than one object of a kind that must be unique.
    MultipleUniqueObjects {
        /// The unique kind
        kind: ObjectKind,
        /// How many objects of that kind exist
        count: usize,
    },
    /// Two records would share a name in the same namespace.
    DuplicateRecordName(DuplicateRecordName),
    /// An object id does not belong to the model being translated.
    UnknownObject {
        /// The unknown id
        id: ObjectId,
    },
}

impl TranslationError {
    /// Returns the source object the error is about, if any.
    #[must_use]
    pub const fn object(&self) -> Option<ObjectId> {
        match self {
            Self::MultipleOwnedChildren { parent, .. } => Some(*parent),
            Self::MultipleUniqueObjects { .. }
            | Self::DuplicateRecordName(_)
            | Self::UnknownObject { .. } => None,
        }
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleOwnedChildren {
                parent_description,
                collection,
                count,
                ..
            } => write!(
                f,
                "{parent_description} has {count} objects in `{collection}`, but at most one is allowed"
            ),
            Self::MultipleUniqueObjects { kind, count } => write!(
                f,
                "the model has {count} `{kind}` objects, but at most one is allowed"
            ),
            Self::DuplicateRecordName(error) => write!(f, "{error}"),
            Self::UnknownObject { id } => write!(f, "object {id} is not part of the model"),
        }
    }
}

impl From<DuplicateRecordName> for TranslationError {
    fn from(error: DuplicateRecordName) -> Self {
        Self::DuplicateRecordName(error)
    }
}

impl AsBridgeError for TranslationError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::MultipleOwnedChildren { collection, .. } => vec![Context::Help(format!(
                "move all but one of the objects in `{collection}` to another owner"
            ))],
            Self::MultipleUniqueObjects { kind, .. } => {
                vec![Context::Help(format!("remove all but one `{kind}`"))]
            }
            Self::DuplicateRecordName(error) => error.context(),
            Self::UnknownObject { .. } => vec![],
        }
    }
}

/// A translation run that stopped on a structural error.
///
/// The diagnostics raised before the error are kept so that callers can
/// still report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationAborted {
    /// The error that stopped the run
    pub error: TranslationError,
    /// The diagnostics raised before the run stopped
    pub diagnostics: Diagnostics,
}

impl fmt::Display for TranslationAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation aborted: {}", self.error)
    }
}

impl AsBridgeError for TranslationAborted {
    fn message(&self) -> String {
        self.error.message()
    }

    fn context(&self) -> Vec<Context> {
        self.error.context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epbridge_record::RecordType;

    #[test]
    fn multiple_owned_children_message() {
        let error = TranslationError::MultipleOwnedChildren {
            parent: ObjectId::new(0),
            parent_description: "ThermalZone 'Core'".to_string(),
            collection: "spaces",
            count: 2,
        };

        assert_eq!(
            error.message(),
            "ThermalZone 'Core' has 2 objects in `spaces`, but at most one is allowed"
        );
        assert_eq!(error.object(), Some(ObjectId::new(0)));
    }

    #[test]
    fn duplicate_record_name_keeps_help() {
        let error = TranslationError::from(DuplicateRecordName {
            record_type: RecordType::Zone,
            name: "Core".to_string(),
        });

        assert_eq!(error.context().len(), 1);
        assert_eq!(error.object(), None);
    }
}
