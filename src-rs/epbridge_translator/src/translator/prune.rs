//! Leaving out objects that nothing in the run would reach.
//!
//! Pruning only marks objects in the context. The model is never changed.

use epbridge_model::{ObjectId, ObjectKind, SourceModel, SourceObject};

use crate::context::TranslationContext;

/// Marks every orphaned object as left out of the run and reports it.
pub fn prune_orphans(ctx: &mut TranslationContext<'_>) {
    let model = ctx.model();

    for space in ctx.sorted_of_kind(ObjectKind::Space) {
        if model.owner(space.id()).is_none() {
            ctx.warn(
                space.id(),
                format!(
                    "{} is not part of a thermal zone and will not be translated",
                    space.brief_description()
                ),
            );
            prune_with_loads(ctx, space);
        }
    }

    for kind in [ObjectKind::People, ObjectKind::Lights] {
        for load in ctx.sorted_of_kind(kind) {
            if model.owner(load.id()).is_none() {
                ctx.warn(
                    load.id(),
                    format!(
                        "{} does not belong to a space or space type and will not be translated",
                        load.brief_description()
                    ),
                );
                ctx.prune(load.id());
            }
        }
    }

    for space_type in ctx.sorted_of_kind(ObjectKind::SpaceType) {
        if !is_referenced(model, space_type.id(), &[(ObjectKind::Space, "space_type")]) {
            ctx.info(
                space_type.id(),
                format!(
                    "{} is not used by any space and will not be translated",
                    space_type.brief_description()
                ),
            );
            prune_with_loads(ctx, space_type);
        }
    }

    let components = [
        (
            ObjectKind::FanConstantVolume,
            (ObjectKind::ZoneHVACUnitHeater, "supply_air_fan"),
        ),
        (
            ObjectKind::CoilHeatingElectric,
            (ObjectKind::ZoneHVACUnitHeater, "heating_coil"),
        ),
    ];
    for (kind, user) in components {
        for component in ctx.sorted_of_kind(kind) {
            if !is_referenced(model, component.id(), &[user]) {
                ctx.info(
                    component.id(),
                    format!(
                        "{} is not used by any unit heater and will not be translated",
                        component.brief_description()
                    ),
                );
                ctx.prune(component.id());
            }
        }
    }

    let zone_references = [
        (
            ObjectKind::ThermostatSetpointDualSetpoint,
            &[(ObjectKind::ThermalZone, "thermostat")][..],
        ),
        (
            ObjectKind::DaylightingControl,
            &[
                (ObjectKind::ThermalZone, "primary_daylighting_control"),
                (ObjectKind::ThermalZone, "secondary_daylighting_control"),
            ][..],
        ),
        (
            ObjectKind::IlluminanceMap,
            &[(ObjectKind::ThermalZone, "illuminance_map")][..],
        ),
    ];
    for (kind, users) in zone_references {
        for object in ctx.sorted_of_kind(kind) {
            if !is_referenced(model, object.id(), users) {
                ctx.warn(
                    object.id(),
                    format!(
                        "{} is not used by any thermal zone and will not be translated",
                        object.brief_description()
                    ),
                );
                ctx.prune(object.id());
            }
        }
    }

    let zone_children = [
        ObjectKind::ZoneHVACBaseboardConvectiveElectric,
        ObjectKind::ZoneHVACUnitHeater,
        ObjectKind::ZoneVentilationDesignFlowRate,
        ObjectKind::SizingZone,
    ];
    for kind in zone_children {
        for object in ctx.sorted_of_kind(kind) {
            if model.owner(object.id()).is_none() {
                ctx.warn(
                    object.id(),
                    format!(
                        "{} is not part of a thermal zone and will not be translated",
                        object.brief_description()
                    ),
                );
                ctx.prune(object.id());
            }
        }
    }
}

fn prune_with_loads(ctx: &mut TranslationContext<'_>, object: &SourceObject) {
    ctx.prune(object.id());
    for collection in ["people", "lights"] {
        for &load in object.children(collection) {
            ctx.prune(load);
        }
    }
}

/// Returns true if `target` is referenced through one of the given
/// (kind, field) pairs.
fn is_referenced(model: &SourceModel, target: ObjectId, users: &[(ObjectKind, &str)]) -> bool {
    model.referrers(target).iter().any(|referrer| {
        model.get(referrer.object).is_some_and(|object| {
            users
                .iter()
                .any(|&(kind, field)| object.kind() == kind && referrer.field == field)
        })
    })
}
