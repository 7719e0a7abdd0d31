//! Output records.

use crate::{record_type::RecordType, value::FieldValue};

/// One flat, name-referenced output record.
///
/// Field slots are addressed by the indices in [`fields`](crate::fields).
/// Unset slots are left empty and are written as blanks. Repeatable groups
/// are tuples of strings whose members are named by
/// [`RecordType::group_field_names`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: RecordType,
    name: String,
    fields: Vec<Option<FieldValue>>,
    groups: Vec<Vec<String>>,
}

impl Record {
    /// Creates a record with every field slot empty.
    #[must_use]
    pub fn new(record_type: RecordType, name: impl Into<String>) -> Self {
        Self {
            record_type,
            name: name.into(),
            fields: vec![None; record_type.field_names().len()],
            groups: Vec::new(),
        }
    }

    /// Returns the record type.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Returns the record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value in slot `index`, if set.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index).and_then(Option::as_ref)
    }

    /// Returns the text in slot `index`, if it holds text or a reference.
    #[must_use]
    pub fn get_string(&self, index: usize) -> Option<&str> {
        if let Some(FieldValue::Text(text) | FieldValue::Reference(text)) = self.get(index) {
            Some(text)
        } else {
            None
        }
    }

    /// Sets slot `index`.
    pub fn set(&mut self, index: usize, value: FieldValue) {
        debug_assert!(
            index < self.fields.len(),
            "{} has no field slot {index}",
            self.record_type
        );
        if let Some(slot) = self.fields.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// Empties slot `index`.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.fields.get_mut(index) {
            *slot = None;
        }
    }

    /// Returns every field slot, in slot order.
    #[must_use]
    pub fn fields(&self) -> &[Option<FieldValue>] {
        &self.fields
    }

    /// Returns the field slots up to and including the last one that is set.
    #[must_use]
    pub fn trimmed_fields(&self) -> &[Option<FieldValue>] {
        let end = self
            .fields
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |index| index + 1);
        &self.fields[..end]
    }

    /// Appends a repeatable group.
    pub fn push_group<S: Into<String>>(&mut self, group: impl IntoIterator<Item = S>) {
        let group: Vec<String> = group.into_iter().map(Into::into).collect();
        debug_assert_eq!(
            group.len(),
            self.record_type.group_field_names().len(),
            "group does not match the group layout of {}",
            self.record_type
        );
        self.groups.push(group);
    }

    /// Returns the repeatable groups, in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Returns the names of every record this record refers to through its
    /// field slots.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter_map(|field| field.as_ref().and_then(FieldValue::as_reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{node_list, zone};

    #[test]
    fn new_record_has_one_empty_slot_per_field() {
        let record = Record::new(RecordType::Zone, "Core");

        assert_eq!(record.fields().len(), zone::NAMES.len());
        assert!(record.fields().iter().all(Option::is_none));
        assert!(record.trimmed_fields().is_empty());
    }

    #[test]
    fn trimmed_fields_stop_at_last_set_slot() {
        let mut record = Record::new(RecordType::Zone, "Core");
        record.set(zone::MULTIPLIER, FieldValue::Integer(2));

        assert_eq!(record.trimmed_fields().len(), zone::MULTIPLIER + 1);
    }

    #[test]
    fn clear_empties_a_slot() {
        let mut record = Record::new(RecordType::Zone, "Core");
        record.set(zone::VOLUME, FieldValue::Number(300.0));
        record.clear(zone::VOLUME);

        assert_eq!(record.get(zone::VOLUME), None);
    }

    #[test]
    fn references_only_lists_reference_slots() {
        let mut record = Record::new(RecordType::Space, "Office");
        record.set(0, FieldValue::reference("Core"));
        record.set(4, FieldValue::text("Office Type"));

        assert_eq!(record.references().collect::<Vec<_>>(), vec!["Core"]);
    }

    #[test]
    fn groups_keep_insertion_order() {
        let mut record = Record::new(RecordType::NodeList, "Core Inlet Node List");
        record.push_group(["B Outlet Node"]);
        record.push_group(["A Outlet Node"]);

        assert_eq!(record.groups()[0], vec!["B Outlet Node".to_string()]);
        assert_eq!(node_list::GROUP, &["Node Name"]);
    }
}
