//! Dispatch from a source object to the translator for its kind.

use epbridge_model::{ObjectId, ObjectKind, SourceObject};
use epbridge_record::RecordId;

use crate::{
    context::TranslationContext,
    error::TranslationError,
    translator::{
        daylighting, equipment, load, outdoor_air, schedule, settings, space, thermostat,
        ventilation, zone,
    },
};

/// The result of translating one object: the record it became, if any.
pub type Translated = Result<Option<RecordId>, TranslationError>;

/// Translates a source object, at most once per run.
///
/// A second call for the same object returns the memoized record without
/// running the translator again. Objects that have no translator, or that
/// were left out of the run, produce no record.
///
/// # Errors
///
/// Returns an error if the object's structure prevents a consistent
/// translation.
pub fn translate(ctx: &mut TranslationContext<'_>, id: ObjectId) -> Translated {
    if let Some(memoized) = ctx.memoized(id) {
        return Ok(memoized);
    }

    if ctx.is_pruned(id) {
        return Ok(None);
    }

    let object = ctx.object(id)?;
    tracing::trace!(object = %object.brief_description(), "Translating");

    let record = match object.kind() {
        ObjectKind::Building => settings::translate_building(ctx, Some(object)),
        ObjectKind::SimulationControl => settings::translate_simulation_control(ctx, Some(object)),
        ObjectKind::Timestep => settings::translate_timestep(ctx, Some(object)),
        ObjectKind::DesignDay => settings::translate_design_day(ctx, object),
        ObjectKind::ScheduleTypeLimits => schedule::translate_schedule_type_limits(ctx, object),
        ObjectKind::ScheduleConstant => schedule::translate_schedule_constant(ctx, object),
        ObjectKind::ThermalZone => zone::translate_thermal_zone(ctx, object),
        ObjectKind::Space => space::translate_space(ctx, object),
        ObjectKind::SpaceType => space::translate_space_type(ctx, object),
        ObjectKind::People => load::translate_people(ctx, object),
        ObjectKind::Lights => load::translate_lights(ctx, object),
        ObjectKind::DesignSpecificationOutdoorAir => {
            outdoor_air::translate_design_specification_outdoor_air(ctx, object)
        }
        ObjectKind::ThermostatSetpointDualSetpoint => {
            thermostat::translate_dual_setpoint(ctx, object)
        }
        ObjectKind::ZoneHVACBaseboardConvectiveElectric => {
            equipment::translate_baseboard(ctx, object)
        }
        ObjectKind::ZoneHVACUnitHeater => equipment::translate_unit_heater(ctx, object),
        ObjectKind::FanConstantVolume => equipment::translate_fan(ctx, object),
        ObjectKind::CoilHeatingElectric => equipment::translate_coil(ctx, object),
        ObjectKind::ZoneVentilationDesignFlowRate => ventilation::translate_ventilation(ctx, object),
        ObjectKind::DaylightingControl => daylighting::translate_unclaimed_control(ctx, object),
        ObjectKind::IlluminanceMap | ObjectKind::SizingZone => component_only(ctx, object),
        ObjectKind::ScheduleFile | ObjectKind::LifeCycleCost => not_translated(ctx, object),
    }?;

    ctx.memoize(id, record);
    Ok(record)
}

/// Translates an object and returns the name of its record.
///
/// # Errors
///
/// Returns an error if translating the object fails.
pub fn translate_name(
    ctx: &mut TranslationContext<'_>,
    id: ObjectId,
) -> Result<Option<String>, TranslationError> {
    let record = translate(ctx, id)?;
    Ok(record.and_then(|record| ctx.record_name(record)))
}

/// Translates the target of a reference field and returns its record name.
///
/// Returns `None` when the field is unset or the target produced no record.
///
/// # Errors
///
/// Returns an error if translating the target fails.
pub fn translate_reference(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
    field: &str,
) -> Result<Option<String>, TranslationError> {
    match object.reference(field) {
        Some(target) => translate_name(ctx, target),
        None => Ok(None),
    }
}

/// Translates the target of a schedule reference, or falls back to the
/// shared always-on schedule.
///
/// # Errors
///
/// Returns an error if translating the schedule fails.
pub fn translate_schedule_or_always_on(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
    field: &str,
) -> Result<String, TranslationError> {
    match translate_reference(ctx, object, field)? {
        Some(name) => Ok(name),
        None => ctx.always_on_schedule(),
    }
}

fn not_translated(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    ctx.warn(
        object.id(),
        format!("{} is not translated", object.brief_description()),
    );
    Ok(None)
}

fn component_only(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    ctx.warn(
        object.id(),
        format!(
            "{} is only translated through the thermal zone that uses it",
            object.brief_description()
        ),
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::Severity, options::TranslatorOptions, test::ModelFixture};

    #[test]
    fn second_translation_hits_the_memo() {
        let mut fixture = ModelFixture::new();
        let limits = fixture.schedule_type_limits("Fraction");
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        let first = translate(&mut ctx, limits).expect("translation succeeds");
        let second = translate(&mut ctx, limits).expect("translation succeeds");

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(ctx.records().len(), 1);
    }

    #[test]
    fn unsupported_kind_reports_once() {
        let mut fixture = ModelFixture::new();
        let schedule = fixture.schedule_file("Occupancy File");
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        assert_eq!(translate(&mut ctx, schedule), Ok(None));
        assert_eq!(translate(&mut ctx, schedule), Ok(None));

        let warnings: Vec<_> = ctx
            .diagnostics()
            .with_severity(Severity::Warning)
            .map(|diagnostic| diagnostic.message.as_str())
            .collect();
        assert_eq!(
            warnings,
            vec!["ScheduleFile 'Occupancy File' is not translated"]
        );
    }

    #[test]
    fn unknown_object_is_fatal() {
        let model = ModelFixture::new().build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        assert_eq!(
            translate(&mut ctx, ObjectId::new(7)),
            Err(TranslationError::UnknownObject {
                id: ObjectId::new(7)
            })
        );
    }

    #[test]
    fn pruned_object_is_skipped_silently() {
        let mut fixture = ModelFixture::new();
        let limits = fixture.schedule_type_limits("Fraction");
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());
        ctx.prune(limits);

        assert_eq!(translate(&mut ctx, limits), Ok(None));
        assert!(ctx.records().is_empty());
        assert!(ctx.diagnostics().is_empty());
    }
}
