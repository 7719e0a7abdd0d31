//! The ordered output of a translation run.

use std::{collections::HashMap, fmt};

use indexmap::IndexMap;

use crate::{error::DuplicateRecordName, record::Record, record_type::RecordType};

/// A handle to a record in a [`RecordCollection`].
///
/// Ids are handed out in increasing order and never reused, even after a
/// record is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}", self.0)
    }
}

/// An insertion-ordered collection of records with unique names.
///
/// Names are unique within a [namespace](RecordType::namespace), ignoring
/// case. Removing a record keeps the order of the others.
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: IndexMap<RecordId, Record>,
    names: HashMap<(&'static str, String), RecordId>,
    next_id: usize,
}

impl RecordCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateRecordName`] if a record with the same name already
    /// exists in the record's namespace. The collection is left unchanged.
    pub fn add(&mut self, record: Record) -> Result<RecordId, DuplicateRecordName> {
        let key = name_key(record.record_type(), record.name());
        if self.names.contains_key(&key) {
            return Err(DuplicateRecordName {
                record_type: record.record_type(),
                name: record.name().to_string(),
            });
        }

        let id = RecordId(self.next_id);
        self.next_id += 1;

        self.names.insert(key, id);
        self.records.insert(id, record);

        Ok(id)
    }

    /// Removes a record, keeping the order of the remaining records.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let record = self.records.shift_remove(&id)?;
        self.names
            .remove(&name_key(record.record_type(), record.name()));
        Some(record)
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Returns the record with the given id for patching.
    #[must_use]
    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.get_mut(&id)
    }

    /// Finds the record of `record_type`'s namespace named `name`, ignoring
    /// case.
    #[must_use]
    pub fn find(&self, record_type: RecordType, name: &str) -> Option<RecordId> {
        self.names.get(&name_key(record_type, name)).copied()
    }

    /// Returns true if `name` is taken in `record_type`'s namespace.
    #[must_use]
    pub fn contains_name(&self, record_type: RecordType, name: &str) -> bool {
        self.find(record_type, name).is_some()
    }

    /// Returns every record, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Returns every record, in emission order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Returns every record of `record_type`, in emission order.
    pub fn of_type(&self, record_type: RecordType) -> impl Iterator<Item = &Record> {
        self.records
            .values()
            .filter(move |record| record.record_type() == record_type)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn name_key(record_type: RecordType, name: &str) -> (&'static str, String) {
    (record_type.namespace(), name.to_lowercase())
}
