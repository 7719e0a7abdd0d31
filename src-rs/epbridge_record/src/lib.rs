//! Flat, name-referenced records for the simulation engine's input file
//!
//! A translation run produces a [`RecordCollection`]: an ordered list of
//! [`Record`]s, each with a [`RecordType`], a name that is unique within the
//! type's namespace, indexed [`FieldValue`] slots and repeatable groups.

pub mod collection;
pub mod error;
pub mod fields;
pub mod record;
pub mod record_type;
pub mod value;

pub use collection::{RecordCollection, RecordId};
pub use error::DuplicateRecordName;
pub use record::Record;
pub use record_type::RecordType;
pub use value::FieldValue;
