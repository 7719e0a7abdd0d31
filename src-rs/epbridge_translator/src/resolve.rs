//! Per-field policies for copying scalar values into records.
//!
//! Which fields are written depends on the field, not on a global rule.
//! Each translator states a [`FieldPolicy`] for every scalar it copies.

use epbridge_model::{Scalar, SourceObject, Value};
use epbridge_record::{FieldValue, Record};

/// When a scalar is written to its record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Write the value whenever the field has one, explicit or default.
    Always,
    /// Write the value only when it was set explicitly.
    OmitDefaulted,
    /// Write the autosize sentinel when autosized, the value when set
    /// explicitly, and nothing otherwise.
    Autosize,
}

/// Resolves the value to write for a numeric field.
///
/// The autosize sentinel is only produced under [`FieldPolicy::Autosize`].
/// An autosized field under any other policy is left unset.
#[must_use]
pub fn number(object: &SourceObject, field: &str, policy: FieldPolicy) -> Option<FieldValue> {
    let scalar = admitted(object.scalar(field)?, policy)?;
    match scalar.value() {
        Value::Number(number) => Some(FieldValue::Number(*number)),
        Value::Autosize if policy == FieldPolicy::Autosize => Some(FieldValue::Autosize),
        Value::Autosize | Value::Text(_) | Value::Boolean(_) => None,
    }
}

/// Resolves the value to write for a numeric field the engine reads as an
/// integer.
#[must_use]
pub fn integer(object: &SourceObject, field: &str, policy: FieldPolicy) -> Option<FieldValue> {
    match number(object, field, policy)? {
        FieldValue::Number(number) => Some(FieldValue::Integer(round(number))),
        other @ (FieldValue::Autosize
        | FieldValue::Integer(_)
        | FieldValue::Text(_)
        | FieldValue::Reference(_)) => Some(other),
    }
}

/// Resolves the value to write for a text field.
#[must_use]
pub fn text(object: &SourceObject, field: &str, policy: FieldPolicy) -> Option<FieldValue> {
    let scalar = admitted(object.scalar(field)?, policy)?;
    if let Value::Text(text) = scalar.value() {
        Some(FieldValue::text(text.as_str()))
    } else {
        None
    }
}

/// Resolves the `Yes`/`No` value to write for a boolean field.
#[must_use]
pub fn yes_no(object: &SourceObject, field: &str, policy: FieldPolicy) -> Option<FieldValue> {
    let scalar = admitted(object.scalar(field)?, policy)?;
    if let Value::Boolean(boolean) = scalar.value() {
        Some(FieldValue::yes_no(*boolean))
    } else {
        None
    }
}

fn admitted(scalar: &Scalar, policy: FieldPolicy) -> Option<&Scalar> {
    match policy {
        FieldPolicy::Always | FieldPolicy::Autosize => Some(scalar),
        FieldPolicy::OmitDefaulted => (!scalar.is_defaulted()).then_some(scalar),
    }
}

/// Rounds a number to the nearest integer for an integer field.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "integer fields hold counts, days and multipliers far below the i64 range"
)]
pub fn round(number: f64) -> i64 {
    number.round() as i64
}

/// Copies scalars of one source object into one record.
///
/// ```ignore
/// let mut fields = FieldWriter::new(zone, &mut record);
/// fields.integer(zone::MULTIPLIER, "multiplier", FieldPolicy::OmitDefaulted);
/// fields.number(zone::VOLUME, "volume", FieldPolicy::Always);
/// ```
#[derive(Debug)]
pub struct FieldWriter<'a> {
    object: &'a SourceObject,
    record: &'a mut Record,
}

impl<'a> FieldWriter<'a> {
    /// Creates a writer copying from `object` into `record`.
    pub const fn new(object: &'a SourceObject, record: &'a mut Record) -> Self {
        Self { object, record }
    }

    /// Copies a numeric field.
    pub fn number(&mut self, slot: usize, field: &str, policy: FieldPolicy) -> &mut Self {
        let value = number(self.object, field, policy);
        self.write(slot, value)
    }

    /// Copies a numeric field as an integer.
    pub fn integer(&mut self, slot: usize, field: &str, policy: FieldPolicy) -> &mut Self {
        let value = integer(self.object, field, policy);
        self.write(slot, value)
    }

    /// Copies a text field.
    pub fn text(&mut self, slot: usize, field: &str, policy: FieldPolicy) -> &mut Self {
        let value = text(self.object, field, policy);
        self.write(slot, value)
    }

    /// Copies a boolean field as `Yes`/`No`.
    pub fn yes_no(&mut self, slot: usize, field: &str, policy: FieldPolicy) -> &mut Self {
        let value = yes_no(self.object, field, policy);
        self.write(slot, value)
    }

    fn write(&mut self, slot: usize, value: Option<FieldValue>) -> &mut Self {
        if let Some(value) = value {
            self.record.set(slot, value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epbridge_model::{ObjectKind, SourceModel, SourceModelBuilder};
    use epbridge_record::{RecordType, fields::coil_heating_electric};

    fn coil(capacity: Option<Value>) -> SourceModel {
        let mut builder = SourceModelBuilder::new();
        let coil = builder
            .add_object(ObjectKind::CoilHeatingElectric, Some("Coil"))
            .expect("coil is added");
        if let Some(capacity) = capacity {
            builder
                .set_scalar(coil, "nominal_capacity", capacity)
                .expect("capacity is set");
        }
        builder.build()
    }

    fn first(model: &SourceModel) -> &SourceObject {
        model.objects().next().expect("model has an object")
    }

    #[test]
    fn autosized_field_writes_sentinel_only_under_autosize_policy() {
        let model = coil(None);
        let coil = first(&model);

        assert_eq!(
            number(coil, "nominal_capacity", FieldPolicy::Autosize),
            Some(FieldValue::Autosize)
        );
        assert_eq!(number(coil, "nominal_capacity", FieldPolicy::Always), None);
    }

    #[test]
    fn explicit_value_replaces_autosize() {
        let model = coil(Some(Value::Number(1500.0)));
        let coil = first(&model);

        assert_eq!(
            number(coil, "nominal_capacity", FieldPolicy::Autosize),
            Some(FieldValue::Number(1500.0))
        );
    }

    #[test]
    fn defaulted_values_are_omitted_only_when_asked() {
        let model = coil(None);
        let coil = first(&model);

        assert_eq!(number(coil, "efficiency", FieldPolicy::OmitDefaulted), None);
        assert_eq!(
            number(coil, "efficiency", FieldPolicy::Always),
            Some(FieldValue::Number(1.0))
        );
    }

    #[test]
    fn integers_are_rounded() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, Some("Core"))
            .expect("zone is added");
        builder
            .set_scalar(zone, "multiplier", Value::Number(2.6))
            .expect("multiplier is set");
        let model = builder.build();

        assert_eq!(
            integer(first(&model), "multiplier", FieldPolicy::OmitDefaulted),
            Some(FieldValue::Integer(3))
        );
    }

    #[test]
    fn writer_leaves_unresolved_slots_empty() {
        let model = coil(None);
        let mut record = Record::new(RecordType::CoilHeatingElectric, "Coil");

        FieldWriter::new(first(&model), &mut record)
            .number(
                coil_heating_electric::EFFICIENCY,
                "efficiency",
                FieldPolicy::OmitDefaulted,
            )
            .number(
                coil_heating_electric::NOMINAL_CAPACITY,
                "nominal_capacity",
                FieldPolicy::Autosize,
            );

        assert_eq!(record.get(coil_heating_electric::EFFICIENCY), None);
        assert_eq!(
            record.get(coil_heating_electric::NOMINAL_CAPACITY),
            Some(&FieldValue::Autosize)
        );
    }
}
