//! Translators for each source object kind, and the order of a run.

use epbridge_model::{ObjectId, ObjectKind};
use epbridge_record::RecordId;

use crate::{context::TranslationContext, dispatch, error::TranslationError};

pub mod daylighting;
pub mod equipment;
pub mod load;
pub mod outdoor_air;
mod prune;
pub mod schedule;
pub mod settings;
pub mod space;
pub mod thermostat;
pub mod ventilation;
pub mod zone;

/// Kinds visited after the schedules, in this order.
///
/// Fans, coils, daylighting controls, illuminance maps and sizing objects
/// are missing on purpose: they are translated through the object that
/// uses them.
const TRANSLATION_ORDER: [ObjectKind; 13] = [
    ObjectKind::DesignDay,
    ObjectKind::ThermalZone,
    ObjectKind::Space,
    ObjectKind::SpaceType,
    ObjectKind::DesignSpecificationOutdoorAir,
    ObjectKind::People,
    ObjectKind::Lights,
    ObjectKind::ThermostatSetpointDualSetpoint,
    ObjectKind::ZoneHVACBaseboardConvectiveElectric,
    ObjectKind::ZoneHVACUnitHeater,
    ObjectKind::ZoneVentilationDesignFlowRate,
    ObjectKind::LifeCycleCost,
    ObjectKind::ScheduleFile,
];

/// Translates the whole model into the context.
///
/// # Errors
///
/// Returns the first structural error found.
pub fn run(ctx: &mut TranslationContext<'_>) -> Result<(), TranslationError> {
    let model = ctx.model();

    for kind in ObjectKind::ALL.into_iter().filter(|kind| kind.is_unique()) {
        let count = model.objects_of_kind(kind).count();
        if count > 1 {
            return Err(TranslationError::MultipleUniqueObjects { kind, count });
        }
    }

    let unique = |kind| model.objects_of_kind(kind).next();

    settings::translate_version(ctx)?;
    settings::translate_timestep(ctx, unique(ObjectKind::Timestep))?;
    settings::translate_simulation_control(ctx, unique(ObjectKind::SimulationControl))?;
    settings::translate_building(ctx, unique(ObjectKind::Building))?;

    prune::prune_orphans(ctx);

    for kind in [ObjectKind::ScheduleTypeLimits, ObjectKind::ScheduleConstant] {
        translate_all(ctx, kind)?;
    }

    for kind in TRANSLATION_ORDER {
        translate_all(ctx, kind)?;
    }

    Ok(())
}

fn translate_all(ctx: &mut TranslationContext<'_>, kind: ObjectKind) -> Result<(), TranslationError> {
    let objects = ctx.sorted_of_kind(kind);
    tracing::debug!(%kind, count = objects.len(), "Translating kind");

    for object in objects {
        dispatch::translate(ctx, object.id())?;
    }
    Ok(())
}

/// Translates each object in `ids`, ordered by name, and returns the
/// records they became.
///
/// # Errors
///
/// Returns the first error raised while translating them.
pub fn translate_sorted(
    ctx: &mut TranslationContext<'_>,
    ids: &[ObjectId],
) -> Result<Vec<RecordId>, TranslationError> {
    let mut records = Vec::with_capacity(ids.len());
    for object in ctx.sorted(ids) {
        if let Some(record) = dispatch::translate(ctx, object.id())? {
            records.push(record);
        }
    }
    Ok(records)
}
