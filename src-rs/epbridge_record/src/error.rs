use std::fmt;

use epbridge_shared::error::{AsBridgeError, Context};

use crate::record_type::RecordType;

/// A record name that is already taken in its namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRecordName {
    /// The type of the record that could not be added
    pub record_type: RecordType,
    /// The name it tried to use
    pub name: String,
}

impl fmt::Display for DuplicateRecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a record named \"{}\" already exists for `{}`",
            self.name, self.record_type
        )
    }
}

impl AsBridgeError for DuplicateRecordName {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        vec![Context::Help(
            "rename one of the objects so that generated record names do not collide".to_string(),
        )]
    }
}
