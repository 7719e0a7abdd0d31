//! Incremental construction of a [`SourceModel`].

use std::collections::HashMap;

use epbridge_shared::span::Span;

use crate::{
    error::ModelError,
    id::ObjectId,
    kind::ObjectKind,
    model::{Owner, Referrer, SourceModel},
    object::SourceObject,
    schema::FieldType,
    value::Value,
};

/// Builds a [`SourceModel`] one object at a time.
///
/// Every mutation is checked against the kind's schema, and the owner and
/// referrer indexes are updated as children are added and references are
/// assigned. Names are unique within a kind, compared case-insensitively.
///
/// # Example
///
/// ```rust
/// use epbridge_model::{ObjectKind, SourceModelBuilder, Value};
///
/// let mut builder = SourceModelBuilder::new();
/// let zone = builder.add_object(ObjectKind::ThermalZone, Some("Core")).unwrap();
/// let space = builder.add_child(zone, ObjectKind::Space, Some("Office")).unwrap();
/// builder.set_scalar(space, "floor_area", Value::Number(100.0)).unwrap();
///
/// let model = builder.build();
/// assert_eq!(model.owner(space).map(|owner| owner.object), Some(zone));
/// ```
#[derive(Debug, Default)]
pub struct SourceModelBuilder {
    model: SourceModel,
    names: HashMap<(ObjectKind, String), ObjectId>,
}

impl SourceModelBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level object and returns its id.
    ///
    /// Scalar fields start at their schema defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if another object of the same
    /// kind already has this name.
    pub fn add_object(&mut self, kind: ObjectKind, name: Option<&str>) -> Result<ObjectId, ModelError> {
        let id = ObjectId::new(self.model.objects.len());

        if let Some(name) = name {
            let key = (kind, name.to_lowercase());
            if self.names.contains_key(&key) {
                return Err(ModelError::DuplicateName {
                    kind,
                    name: name.to_string(),
                });
            }
            self.names.insert(key, id);
        }

        let object = SourceObject::new(id, kind, name.map(str::to_string));
        self.model.objects.push(object);

        Ok(id)
    }

    /// Adds an object as a child of `parent` and returns its id.
    ///
    /// The child goes into the first collection of the parent that accepts
    /// its kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent does not exist, if it has no collection
    /// for `kind`, or if the name is already taken.
    pub fn add_child(
        &mut self,
        parent: ObjectId,
        kind: ObjectKind,
        name: Option<&str>,
    ) -> Result<ObjectId, ModelError> {
        let parent_kind = self.object(parent)?.kind();
        let collection = parent_kind
            .schema()
            .collection_for(kind)
            .ok_or(ModelError::ChildNotAllowed {
                parent: parent_kind,
                child: kind,
            })?;

        let child = self.add_object(kind, name)?;

        self.object_mut(parent)?.push_child(collection.name, child);
        self.model.owners.insert(
            child,
            Owner {
                object: parent,
                collection: collection.name,
            },
        );

        Ok(child)
    }

    /// Sets a scalar field explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist, if its kind has no such
    /// scalar, if the value has the wrong type, or if the autosize marker is
    /// given for a field that is not autosizable.
    pub fn set_scalar(&mut self, id: ObjectId, field: &str, value: Value) -> Result<(), ModelError> {
        let kind = self.object(id)?.kind();
        let spec = kind
            .schema()
            .scalar(field)
            .ok_or_else(|| ModelError::UnknownField {
                kind,
                field: field.to_string(),
            })?;

        if !value.matches(spec.field_type) {
            return Err(ModelError::WrongValueType {
                kind,
                field: spec.name,
                expected: type_name(spec.field_type),
                found: value.type_name(),
            });
        }

        if matches!(value, Value::Autosize) && !spec.autosizable {
            return Err(ModelError::AutosizeNotAllowed {
                kind,
                field: spec.name,
            });
        }

        self.object_mut(id)?.set_scalar(spec.name, value);
        Ok(())
    }

    /// Points the reference `field` of `id` at `target`.
    ///
    /// Reassigning a reference removes the object from the referrers of the
    /// previous target.
    ///
    /// # Errors
    ///
    /// Returns an error if either object does not exist, if the kind has no
    /// such reference, or if the field does not accept the target's kind.
    pub fn set_reference(&mut self, id: ObjectId, field: &str, target: ObjectId) -> Result<(), ModelError> {
        let kind = self.object(id)?.kind();
        let target_kind = self.object(target)?.kind();
        let spec = kind
            .schema()
            .reference(field)
            .ok_or_else(|| ModelError::UnknownField {
                kind,
                field: field.to_string(),
            })?;

        if !spec.targets.contains(&target_kind) {
            return Err(ModelError::InvalidReferenceTarget {
                kind,
                field: spec.name,
                target: target_kind,
                accepted: spec.targets,
            });
        }

        let referrer = Referrer {
            object: id,
            field: spec.name,
        };

        let previous = self.object_mut(id)?.set_reference(spec.name, target);
        if let Some(previous) = previous
            && let Some(referrers) = self.model.referrers.get_mut(&previous)
        {
            referrers.retain(|existing| *existing != referrer);
        }

        self.model.referrers.entry(target).or_default().push(referrer);
        Ok(())
    }

    /// Records where the object was declared.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownObject`] if the object does not exist.
    pub fn set_span(&mut self, id: ObjectId, span: Span) -> Result<(), ModelError> {
        self.object_mut(id)?.set_span(span);
        Ok(())
    }

    /// Finds an object by kind and name, ignoring case.
    #[must_use]
    pub fn find(&self, kind: ObjectKind, name: &str) -> Option<ObjectId> {
        self.names.get(&(kind, name.to_lowercase())).copied()
    }

    /// Returns the object with the given id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SourceObject> {
        self.model.get(id)
    }

    /// Finishes building and returns the model.
    #[must_use]
    pub fn build(self) -> SourceModel {
        self.model
    }

    fn object(&self, id: ObjectId) -> Result<&SourceObject, ModelError> {
        self.model
            .objects
            .get(id.index())
            .ok_or(ModelError::UnknownObject { id })
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SourceObject, ModelError> {
        self.model
            .objects
            .get_mut(id.index())
            .ok_or(ModelError::UnknownObject { id })
    }
}

const fn type_name(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Number => "number",
        FieldType::Text => "text",
        FieldType::Boolean => "boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_child_sets_owner_and_collection() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, Some("Core"))
            .expect("zone is added");
        let heater = builder
            .add_child(zone, ObjectKind::ZoneHVACUnitHeater, Some("UH"))
            .expect("unit heater is added");

        let model = builder.build();

        assert_eq!(
            model.owner(heater),
            Some(Owner {
                object: zone,
                collection: "equipment"
            })
        );
        let zone = model.get(zone).expect("zone exists");
        assert_eq!(zone.children("equipment"), &[heater]);
    }

    #[test]
    fn child_of_wrong_parent_is_rejected() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, Some("Core"))
            .expect("zone is added");

        let result = builder.add_child(zone, ObjectKind::People, Some("Occupants"));

        assert_eq!(
            result,
            Err(ModelError::ChildNotAllowed {
                parent: ObjectKind::ThermalZone,
                child: ObjectKind::People,
            })
        );
    }

    #[test]
    fn names_are_unique_per_kind_ignoring_case() {
        let mut builder = SourceModelBuilder::new();
        builder
            .add_object(ObjectKind::ThermalZone, Some("Core"))
            .expect("zone is added");

        let duplicate = builder.add_object(ObjectKind::ThermalZone, Some("CORE"));
        let other_kind = builder.add_object(ObjectKind::Space, Some("Core"));

        assert!(matches!(duplicate, Err(ModelError::DuplicateName { .. })));
        assert!(other_kind.is_ok());
    }

    #[test]
    fn set_scalar_checks_type() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, None)
            .expect("zone is added");

        let result = builder.set_scalar(zone, "multiplier", Value::Text("two".to_string()));

        assert_eq!(
            result,
            Err(ModelError::WrongValueType {
                kind: ObjectKind::ThermalZone,
                field: "multiplier",
                expected: "number",
                found: "text",
            })
        );
    }

    #[test]
    fn autosize_only_on_autosizable_fields() {
        let mut builder = SourceModelBuilder::new();
        let coil = builder
            .add_object(ObjectKind::CoilHeatingElectric, None)
            .expect("coil is added");

        let capacity = builder.set_scalar(coil, "nominal_capacity", Value::Autosize);
        let efficiency = builder.set_scalar(coil, "efficiency", Value::Autosize);

        assert_eq!(capacity, Ok(()));
        assert_eq!(
            efficiency,
            Err(ModelError::AutosizeNotAllowed {
                kind: ObjectKind::CoilHeatingElectric,
                field: "efficiency",
            })
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, None)
            .expect("zone is added");

        let result = builder.set_scalar(zone, "colour", Value::Text("red".to_string()));

        assert!(matches!(result, Err(ModelError::UnknownField { .. })));
    }

    #[test]
    fn reassigning_a_reference_moves_the_referrer() {
        let mut builder = SourceModelBuilder::new();
        let first = builder
            .add_object(ObjectKind::ScheduleConstant, Some("First"))
            .expect("schedule is added");
        let second = builder
            .add_object(ObjectKind::ScheduleConstant, Some("Second"))
            .expect("schedule is added");
        let fan = builder
            .add_object(ObjectKind::FanConstantVolume, Some("Fan"))
            .expect("fan is added");

        builder
            .set_reference(fan, "availability_schedule", first)
            .expect("reference is set");
        builder
            .set_reference(fan, "availability_schedule", second)
            .expect("reference is set");

        let model = builder.build();

        assert!(model.referrers(first).is_empty());
        assert_eq!(
            model.referrers(second),
            &[Referrer {
                object: fan,
                field: "availability_schedule"
            }]
        );
        assert_eq!(
            model.get(fan).and_then(|fan| fan.reference("availability_schedule")),
            Some(second)
        );
    }

    #[test]
    fn reference_to_wrong_kind_is_rejected() {
        let mut builder = SourceModelBuilder::new();
        let zone = builder
            .add_object(ObjectKind::ThermalZone, Some("Core"))
            .expect("zone is added");
        let fan = builder
            .add_object(ObjectKind::FanConstantVolume, Some("Fan"))
            .expect("fan is added");

        let result = builder.set_reference(zone, "thermostat", fan);

        assert!(matches!(
            result,
            Err(ModelError::InvalidReferenceTarget {
                target: ObjectKind::FanConstantVolume,
                ..
            })
        ));
    }

    #[test]
    fn find_ignores_case() {
        let mut builder = SourceModelBuilder::new();
        let schedule = builder
            .add_object(ObjectKind::ScheduleConstant, Some("Always On"))
            .expect("schedule is added");

        assert_eq!(
            builder.find(ObjectKind::ScheduleConstant, "always on"),
            Some(schedule)
        );
        assert_eq!(builder.find(ObjectKind::ScheduleFile, "always on"), None);
    }
}
