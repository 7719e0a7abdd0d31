//! State of one translation run.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use epbridge_model::{ObjectId, ObjectKind, SourceModel, SourceObject};
use epbridge_record::{
    FieldValue, Record, RecordCollection, RecordId, RecordType,
    fields::{schedule_constant, schedule_type_limits},
};

use crate::{
    diagnostics::{Diagnostic, Diagnostics, Severity},
    error::TranslationError,
    options::TranslatorOptions,
};

/// Name of the schedule used wherever a record needs one and the source
/// object does not provide it.
///
/// A numeric suffix is added when the model already has a schedule of this
/// name.
pub const ALWAYS_ON_SCHEDULE: &str = "Always On Discrete";

const ALWAYS_ON_LIMITS: &str = "Always On Discrete Limits";

/// The mutable state of a translation run.
///
/// A context owns the output records, the memo table that maps each source
/// object to the record it became, and the diagnostics. It is threaded
/// through every translator by mutable reference. The source model is only
/// borrowed and never changes.
#[derive(Debug)]
pub struct TranslationContext<'m> {
    model: &'m SourceModel,
    options: TranslatorOptions,
    records: RecordCollection,
    memo: IndexMap<ObjectId, Option<RecordId>>,
    pruned: HashSet<ObjectId>,
    generated_names: HashMap<ObjectId, String>,
    name_counters: HashMap<ObjectKind, usize>,
    always_on: Option<String>,
    reserved: HashSet<(&'static str, String)>,
    diagnostics: Diagnostics,
}

/// Returns the record type an object of `kind` becomes under its own name.
///
/// Kinds whose records take their name from another object, or that are
/// not translated, have none.
const fn own_record_type(kind: ObjectKind, options: &TranslatorOptions) -> Option<RecordType> {
    match kind {
        ObjectKind::Building => Some(RecordType::Building),
        ObjectKind::DesignDay => Some(RecordType::SizingPeriodDesignDay),
        ObjectKind::ScheduleTypeLimits => Some(RecordType::ScheduleTypeLimits),
        ObjectKind::ScheduleConstant => Some(RecordType::ScheduleConstant),
        ObjectKind::ThermalZone => Some(RecordType::Zone),
        ObjectKind::Space => Some(RecordType::Space),
        ObjectKind::SpaceType => Some(if options.exclude_space_translation() {
            RecordType::ZoneList
        } else {
            RecordType::SpaceList
        }),
        ObjectKind::People => Some(RecordType::People),
        ObjectKind::Lights => Some(RecordType::Lights),
        ObjectKind::DesignSpecificationOutdoorAir => Some(RecordType::DesignSpecificationOutdoorAir),
        ObjectKind::ThermostatSetpointDualSetpoint => {
            Some(RecordType::ThermostatSetpointDualSetpoint)
        }
        ObjectKind::DaylightingControl => Some(RecordType::DaylightingReferencePoint),
        ObjectKind::IlluminanceMap => Some(RecordType::OutputIlluminanceMap),
        ObjectKind::ZoneHVACBaseboardConvectiveElectric => {
            Some(RecordType::ZoneHVACBaseboardConvectiveElectric)
        }
        ObjectKind::ZoneHVACUnitHeater => Some(RecordType::ZoneHVACUnitHeater),
        ObjectKind::FanConstantVolume => Some(RecordType::FanConstantVolume),
        ObjectKind::CoilHeatingElectric => Some(RecordType::CoilHeatingElectric),
        ObjectKind::ZoneVentilationDesignFlowRate => {
            Some(RecordType::ZoneVentilationDesignFlowRate)
        }
        ObjectKind::SimulationControl
        | ObjectKind::Timestep
        | ObjectKind::ScheduleFile
        | ObjectKind::LifeCycleCost
        | ObjectKind::SizingZone => None,
    }
}

impl<'m> TranslationContext<'m> {
    /// Creates a fresh context for translating `model`.
    #[must_use]
    pub fn new(model: &'m SourceModel, options: TranslatorOptions) -> Self {
        let reserved = model
            .objects()
            .filter_map(|object| {
                let record_type = own_record_type(object.kind(), &options)?;
                let name = object.name()?;
                Some((record_type.namespace(), name.to_lowercase()))
            })
            .collect();

        Self {
            model,
            options,
            records: RecordCollection::new(),
            memo: IndexMap::new(),
            pruned: HashSet::new(),
            generated_names: HashMap::new(),
            name_counters: HashMap::new(),
            always_on: None,
            reserved,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the model being translated.
    #[must_use]
    pub const fn model(&self) -> &'m SourceModel {
        self.model
    }

    /// Returns the options of this run.
    #[must_use]
    pub const fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Returns the records emitted so far.
    #[must_use]
    pub const fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// Returns the diagnostics raised so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Looks up a source object.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::UnknownObject`] if the id is not part of
    /// the model.
    pub fn object(&self, id: ObjectId) -> Result<&'m SourceObject, TranslationError> {
        self.model
            .get(id)
            .ok_or(TranslationError::UnknownObject { id })
    }

    /// Returns the objects of `ids` ordered by name, ignoring case.
    ///
    /// Unnamed objects come last, in creation order.
    #[must_use]
    pub fn sorted(&self, ids: &[ObjectId]) -> Vec<&'m SourceObject> {
        let mut objects: Vec<_> = ids.iter().filter_map(|&id| self.model.get(id)).collect();
        objects.sort_by_cached_key(|object| {
            (
                object.name().is_none(),
                object.name().map(str::to_lowercase),
                object.id(),
            )
        });
        objects
    }

    /// Returns the objects of `kind` ordered by name, ignoring case.
    #[must_use]
    pub fn sorted_of_kind(&self, kind: ObjectKind) -> Vec<&'m SourceObject> {
        let ids: Vec<_> = self
            .model
            .objects_of_kind(kind)
            .map(SourceObject::id)
            .collect();
        self.sorted(&ids)
    }

    /// Returns the record name for `object`.
    ///
    /// Unnamed objects are named `"<Kind> <n>"`, counting per kind in the
    /// order they are first asked for. The same object always gets the same
    /// name.
    pub fn name_of(&mut self, object: &SourceObject) -> String {
        if let Some(name) = object.name() {
            return name.to_string();
        }

        if let Some(name) = self.generated_names.get(&object.id()) {
            return name.clone();
        }

        let kind = object.kind();
        let record_type = own_record_type(kind, &self.options);
        let name = loop {
            let counter = self.name_counters.entry(kind).or_insert(0);
            *counter += 1;
            let candidate = format!("{kind} {counter}");
            if record_type.is_none_or(|record_type| !self.is_taken(record_type, &candidate)) {
                break candidate;
            }
        };
        self.generated_names.insert(object.id(), name.clone());
        name
    }

    /// Returns `base`, or `base` with the lowest numeric suffix from 2 that
    /// no record of `record_type`'s namespace and no source object uses.
    ///
    /// Records that are not named after a source object take their name
    /// from here, so they never clash with a name the model chose.
    #[must_use]
    pub fn free_name(&self, record_type: RecordType, base: &str) -> String {
        if !self.is_taken(record_type, base) {
            return base.to_string();
        }
        (2_usize..)
            .map(|suffix| format!("{base} {suffix}"))
            .find(|candidate| !self.is_taken(record_type, candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn is_taken(&self, record_type: RecordType, name: &str) -> bool {
        self.records.contains_name(record_type, name)
            || self
                .reserved
                .contains(&(record_type.namespace(), name.to_lowercase()))
    }

    /// Returns the memoized result for `id`, if it was already translated.
    ///
    /// The outer option is `None` when the object has not been visited. The
    /// inner option is `None` when it was visited and produced no record.
    #[must_use]
    pub fn memoized(&self, id: ObjectId) -> Option<Option<RecordId>> {
        self.memo.get(&id).copied()
    }

    /// Records the result of translating `id`.
    pub fn memoize(&mut self, id: ObjectId, record: Option<RecordId>) {
        self.memo.insert(id, record);
    }

    /// Adds a record to the output, and memoizes it for `source` if given.
    ///
    /// Translators call this as soon as the record's name is known and
    /// before they translate anything the record refers to.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::DuplicateRecordName`] if the name is taken.
    pub fn register(
        &mut self,
        source: Option<ObjectId>,
        record: Record,
    ) -> Result<RecordId, TranslationError> {
        tracing::trace!(
            record_type = %record.record_type(),
            name = record.name(),
            "Emitting record"
        );
        let id = self.records.add(record)?;
        if let Some(source) = source {
            self.memoize(source, Some(id));
        }
        Ok(id)
    }

    /// Removes a record that could not be completed.
    ///
    /// `source` is memoized as producing no record so that it is not tried
    /// again.
    pub fn withdraw(&mut self, source: ObjectId, record: RecordId) {
        if let Some(record) = self.records.remove(record) {
            tracing::debug!(name = record.name(), "Withdrew record");
        }
        self.memoize(source, None);
    }

    /// Returns an emitted record.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    /// Returns the name of an emitted record.
    #[must_use]
    pub fn record_name(&self, id: RecordId) -> Option<String> {
        self.records.get(id).map(|record| record.name().to_string())
    }

    /// Changes an emitted record in place.
    ///
    /// Does nothing if the record was withdrawn.
    pub fn patch(&mut self, id: RecordId, patch: impl FnOnce(&mut Record)) {
        if let Some(record) = self.records.get_mut(id) {
            patch(record);
        }
    }

    /// Marks an object as left out of the run.
    pub fn prune(&mut self, id: ObjectId) {
        self.pruned.insert(id);
    }

    /// Returns true if the object was left out of the run.
    #[must_use]
    pub fn is_pruned(&self, id: ObjectId) -> bool {
        self.pruned.contains(&id)
    }

    /// Reports a finding about the model.
    ///
    /// The finding is also written to the log at the matching level.
    pub fn diagnose(
        &mut self,
        severity: Severity,
        object: Option<ObjectId>,
        message: impl Into<String>,
    ) {
        let message = message.into();
        let subject = object
            .and_then(|id| self.model.get(id))
            .map_or_else(|| "model".to_string(), SourceObject::brief_description);

        match severity {
            Severity::Info => tracing::info!(%subject, "{message}"),
            Severity::Warning => tracing::warn!(%subject, "{message}"),
            Severity::Error => tracing::error!(%subject, "{message}"),
        }

        self.diagnostics.push(Diagnostic {
            severity,
            message,
            object,
        });
    }

    /// Reports an informational finding about `object`.
    pub fn info(&mut self, object: ObjectId, message: impl Into<String>) {
        self.diagnose(Severity::Info, Some(object), message);
    }

    /// Reports that part of `object` was left out or corrected.
    pub fn warn(&mut self, object: ObjectId, message: impl Into<String>) {
        self.diagnose(Severity::Warning, Some(object), message);
    }

    /// Returns the name of the shared always-on schedule, emitting it and
    /// its type limits the first time it is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be registered.
    pub fn always_on_schedule(&mut self) -> Result<String, TranslationError> {
        if let Some(name) = &self.always_on {
            return Ok(name.clone());
        }

        let limits_name = self.free_name(RecordType::ScheduleTypeLimits, ALWAYS_ON_LIMITS);
        let mut limits = Record::new(RecordType::ScheduleTypeLimits, limits_name.as_str());
        limits.set(schedule_type_limits::LOWER_LIMIT_VALUE, FieldValue::Number(0.0));
        limits.set(schedule_type_limits::UPPER_LIMIT_VALUE, FieldValue::Number(1.0));
        limits.set(schedule_type_limits::NUMERIC_TYPE, FieldValue::text("DISCRETE"));
        limits.set(schedule_type_limits::UNIT_TYPE, FieldValue::text("Availability"));
        self.register(None, limits)?;

        let name = self.free_name(RecordType::ScheduleConstant, ALWAYS_ON_SCHEDULE);
        let mut schedule = Record::new(RecordType::ScheduleConstant, name.as_str());
        schedule.set(
            schedule_constant::SCHEDULE_TYPE_LIMITS_NAME,
            FieldValue::reference(limits_name),
        );
        schedule.set(schedule_constant::HOURLY_VALUE, FieldValue::Number(1.0));
        self.register(None, schedule)?;

        self.always_on = Some(name.clone());
        Ok(name)
    }

    /// Ends the run and hands out the records and diagnostics.
    #[must_use]
    pub fn finish(self) -> (RecordCollection, Diagnostics) {
        (self.records, self.diagnostics)
    }

    /// Ends the run and hands out only the diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epbridge_model::SourceModelBuilder;

    fn two_unnamed_zones() -> SourceModel {
        let mut builder = SourceModelBuilder::new();
        builder
            .add_object(ObjectKind::ThermalZone, None)
            .expect("zone is added");
        builder
            .add_object(ObjectKind::ThermalZone, None)
            .expect("zone is added");
        builder
            .add_object(ObjectKind::Space, None)
            .expect("space is added");
        builder.build()
    }

    #[test]
    fn unnamed_objects_are_numbered_per_kind() {
        let model = two_unnamed_zones();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());
        let objects: Vec<_> = model.objects().collect();

        assert_eq!(context.name_of(objects[1]), "ThermalZone 1");
        assert_eq!(context.name_of(objects[0]), "ThermalZone 2");
        assert_eq!(context.name_of(objects[2]), "Space 1");
        assert_eq!(context.name_of(objects[1]), "ThermalZone 1");
    }

    #[test]
    fn generated_names_skip_names_used_in_the_model() {
        let mut builder = SourceModelBuilder::new();
        builder
            .add_object(ObjectKind::ThermalZone, Some("thermalzone 1"))
            .expect("zone is added");
        let unnamed = builder
            .add_object(ObjectKind::ThermalZone, None)
            .expect("zone is added");
        let model = builder.build();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());
        let unnamed = model.get(unnamed).expect("zone exists");

        assert_eq!(context.name_of(unnamed), "ThermalZone 2");
    }

    #[test]
    fn free_name_adds_a_suffix_when_taken() {
        let mut builder = SourceModelBuilder::new();
        builder
            .add_object(ObjectKind::ScheduleConstant, Some("Core Thermostat Schedule"))
            .expect("schedule is added");
        let model = builder.build();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());

        assert_eq!(
            context.free_name(RecordType::ZoneList, "Core Thermostat Schedule"),
            "Core Thermostat Schedule"
        );
        assert_eq!(
            context.free_name(RecordType::ScheduleCompact, "Core Thermostat Schedule"),
            "Core Thermostat Schedule 2"
        );

        context
            .register(None, Record::new(RecordType::NodeList, "Core Inlet Nodes"))
            .expect("node list is registered");
        assert_eq!(
            context.free_name(RecordType::NodeList, "core inlet nodes"),
            "core inlet nodes 2"
        );
    }

    #[test]
    fn sorted_ignores_case_and_puts_unnamed_last() {
        let mut builder = SourceModelBuilder::new();
        let b = builder
            .add_object(ObjectKind::Space, Some("beta"))
            .expect("space is added");
        let unnamed = builder
            .add_object(ObjectKind::Space, None)
            .expect("space is added");
        let a = builder
            .add_object(ObjectKind::Space, Some("Alpha"))
            .expect("space is added");
        let model = builder.build();
        let context = TranslationContext::new(&model, TranslatorOptions::new());

        let order: Vec<_> = context
            .sorted(&[b, unnamed, a])
            .into_iter()
            .map(SourceObject::id)
            .collect();

        assert_eq!(order, vec![a, b, unnamed]);
    }

    #[test]
    fn always_on_schedule_is_emitted_once() {
        let model = SourceModel::default();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());

        let first = context.always_on_schedule().expect("schedule is created");
        let second = context.always_on_schedule().expect("schedule is reused");

        assert_eq!(first, second);
        assert_eq!(context.records().len(), 2);
        assert!(
            context
                .records()
                .find(RecordType::ScheduleConstant, ALWAYS_ON_SCHEDULE)
                .is_some()
        );
    }

    #[test]
    fn withdrawn_record_is_memoized_as_absent() {
        let model = two_unnamed_zones();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());
        let source = ObjectId::new(0);

        let record = context
            .register(Some(source), Record::new(RecordType::Zone, "Core"))
            .expect("record is added");
        assert_eq!(context.memoized(source), Some(Some(record)));

        context.withdraw(source, record);

        assert_eq!(context.memoized(source), Some(None));
        assert!(context.records().is_empty());
        assert!(context.records().find(RecordType::Zone, "Core").is_none());
    }

    #[test]
    fn diagnostics_name_their_object() {
        let model = two_unnamed_zones();
        let mut context = TranslationContext::new(&model, TranslatorOptions::new());

        context.warn(ObjectId::new(0), "has no space");

        let diagnostics = context.into_diagnostics();
        let collected: Vec<_> = diagnostics.iter().collect();
        let [diagnostic] = collected.as_slice() else {
            panic!("expected one diagnostic");
        };
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.object, Some(ObjectId::new(0)));
    }
}
