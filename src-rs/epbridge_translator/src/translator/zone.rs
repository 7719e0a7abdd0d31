//! Thermal zones.
//!
//! A zone is the hub of the translation: besides its own `Zone` record it
//! pulls in its space, daylighting, thermostat, equipment, sizing and
//! ventilation, each of which writes records named after the zone.

use epbridge_model::{ObjectKind, SourceObject};
use epbridge_record::{
    FieldValue, Record, RecordType,
    fields::{
        design_specification_outdoor_air as dsoa_fields, hvac_template_zone_ideal_loads_air_system,
        sizing_zone, zone,
    },
};

use crate::{
    context::TranslationContext,
    dispatch::{self, Translated, translate_name},
    error::TranslationError,
    resolve::{FieldPolicy, FieldWriter},
    synthesis::ventilation::synthesize_ventilation,
    translator::{daylighting, equipment, thermostat, translate_sorted},
};

/// Design supply air conditions used when a zone has no sizing object:
/// cooling and heating temperature, then cooling and heating humidity ratio.
const DEFAULT_SIZING: [(usize, &str, f64); 4] = [
    (
        sizing_zone::ZONE_COOLING_DESIGN_SUPPLY_AIR_TEMPERATURE,
        "cooling_design_supply_air_temperature",
        14.0,
    ),
    (
        sizing_zone::ZONE_HEATING_DESIGN_SUPPLY_AIR_TEMPERATURE,
        "heating_design_supply_air_temperature",
        40.0,
    ),
    (
        sizing_zone::ZONE_COOLING_DESIGN_SUPPLY_AIR_HUMIDITY_RATIO,
        "cooling_design_supply_air_humidity_ratio",
        0.0085,
    ),
    (
        sizing_zone::ZONE_HEATING_DESIGN_SUPPLY_AIR_HUMIDITY_RATIO,
        "heating_design_supply_air_humidity_ratio",
        0.008,
    ),
];

/// Emits `Zone` and everything the zone owns or configures.
///
/// # Errors
///
/// Returns an error if the zone has more than one space or more than one
/// sizing object, or if anything it pulls in fails.
pub fn translate_thermal_zone(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let space = single_child(ctx, object, "spaces")?;
    let sizing = single_child(ctx, object, "sizing")?;

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::Zone, name.as_str());
    FieldWriter::new(object, &mut record)
        .integer(zone::MULTIPLIER, "multiplier", FieldPolicy::OmitDefaulted)
        .number(zone::CEILING_HEIGHT, "ceiling_height", FieldPolicy::Always)
        .number(zone::VOLUME, "volume", FieldPolicy::Always)
        .number(zone::FLOOR_AREA, "floor_area", FieldPolicy::Always)
        .text(
            zone::ZONE_INSIDE_CONVECTION_ALGORITHM,
            "zone_inside_convection_algorithm",
            FieldPolicy::Always,
        )
        .text(
            zone::ZONE_OUTSIDE_CONVECTION_ALGORITHM,
            "zone_outside_convection_algorithm",
            FieldPolicy::Always,
        );

    match space {
        Some(space) => {
            FieldWriter::new(space, &mut record)
                .number(
                    zone::DIRECTION_OF_RELATIVE_NORTH,
                    "direction_of_relative_north",
                    FieldPolicy::OmitDefaulted,
                )
                .number(zone::X_ORIGIN, "x_origin", FieldPolicy::OmitDefaulted)
                .number(zone::Y_ORIGIN, "y_origin", FieldPolicy::OmitDefaulted)
                .number(zone::Z_ORIGIN, "z_origin", FieldPolicy::OmitDefaulted)
                .yes_no(
                    zone::PART_OF_TOTAL_FLOOR_AREA,
                    "part_of_total_floor_area",
                    FieldPolicy::OmitDefaulted,
                );
        }
        None => ctx.warn(
            object.id(),
            format!("{} does not have any geometry or loads", object.brief_description()),
        ),
    }

    let id = ctx.register(Some(object.id()), record)?;

    if let Some(space) = space {
        dispatch::translate(ctx, space.id())?;
    }

    translate_sorted(ctx, object.children("life_cycle_costs"))?;

    daylighting::translate_zone_daylighting(ctx, object, &name)?;

    translate_sorted(ctx, object.children("ventilation"))?;

    thermostat::translate_zone_thermostat(ctx, object, &name)?;

    let ideal_loads = object.boolean("use_ideal_air_loads").unwrap_or(false);
    if ideal_loads {
        let system_name = ctx.free_name(
            RecordType::HVACTemplateZoneIdealLoadsAirSystem,
            &format!("{name} Ideal Loads Air System"),
        );
        let mut system = Record::new(RecordType::HVACTemplateZoneIdealLoadsAirSystem, system_name);
        system.set(
            hvac_template_zone_ideal_loads_air_system::ZONE_NAME,
            FieldValue::reference(name.as_str()),
        );
        ctx.register(None, system)?;
    }

    let has_equipment = !object.children("equipment").is_empty();
    if has_equipment {
        equipment::connect_zone_equipment(ctx, object, &name)?;
    }

    if has_equipment || ideal_loads {
        translate_sizing(ctx, &name, space, sizing)?;
    } else if let Some(sizing) = sizing {
        ctx.info(
            sizing.id(),
            format!("ThermalZone '{name}' has no equipment or ideal loads, its sizing object is not translated"),
        );
        ctx.memoize(sizing.id(), None);
    }

    if !has_equipment {
        let specification = space
            .and_then(|space| space.reference("design_specification_outdoor_air"))
            .map(|id| ctx.object(id))
            .transpose()?;
        if let (Some(space), Some(specification)) = (space, specification) {
            synthesize_ventilation(ctx, object, &name, space, specification)?;
        }
    }

    Ok(Some(id))
}

/// Returns the only child in `collection`, if any.
fn single_child<'m>(
    ctx: &TranslationContext<'m>,
    parent: &SourceObject,
    collection: &'static str,
) -> Result<Option<&'m SourceObject>, TranslationError> {
    match parent.children(collection) {
        [] => Ok(None),
        [only] => ctx.object(*only).map(Some),
        children => Err(TranslationError::MultipleOwnedChildren {
            parent: parent.id(),
            parent_description: parent.brief_description(),
            collection,
            count: children.len(),
        }),
    }
}

/// Emits the zone's `Sizing:Zone` and its outdoor air specification.
fn translate_sizing(
    ctx: &mut TranslationContext<'_>,
    zone_name: &str,
    space: Option<&SourceObject>,
    sizing: Option<&SourceObject>,
) -> Result<(), TranslationError> {
    let specification = match space {
        Some(space) => match space.reference("design_specification_outdoor_air") {
            Some(target) => dispatch::translate_name(ctx, target)?
                .map(|name| (space, name)),
            None => None,
        },
        None => None,
    };

    if !ctx.model().contains_kind(ObjectKind::DesignDay) {
        if let Some(sizing) = sizing {
            ctx.info(
                sizing.id(),
                "the model has no design day, Sizing:Zone is not written",
            );
            ctx.memoize(sizing.id(), None);
        }
        return Ok(());
    }

    let outdoor_air = match specification {
        Some((_, specification)) if ctx.options().exclude_space_translation() => specification,
        Some((space, specification)) => outdoor_air_space_list(ctx, zone_name, space, specification)?,
        None => zero_air_specification(ctx, zone_name)?,
    };

    let mut record = Record::new(RecordType::SizingZone, format!("{zone_name} Sizing"));
    record.set(
        sizing_zone::ZONE_OR_ZONELIST_NAME,
        FieldValue::reference(zone_name),
    );
    match sizing {
        Some(sizing) => {
            let mut writer = FieldWriter::new(sizing, &mut record);
            for (slot, field, _) in DEFAULT_SIZING {
                writer.number(slot, field, FieldPolicy::Always);
            }
            writer
                .number(
                    sizing_zone::ZONE_HEATING_SIZING_FACTOR,
                    "heating_sizing_factor",
                    FieldPolicy::Always,
                )
                .number(
                    sizing_zone::ZONE_COOLING_SIZING_FACTOR,
                    "cooling_sizing_factor",
                    FieldPolicy::Always,
                );
        }
        None => {
            for (slot, _, value) in DEFAULT_SIZING {
                record.set(slot, FieldValue::Number(value));
            }
        }
    }
    record.set(
        sizing_zone::DESIGN_SPECIFICATION_OUTDOOR_AIR_OBJECT_NAME,
        FieldValue::reference(outdoor_air),
    );

    ctx.register(sizing.map(SourceObject::id), record)?;
    tracing::debug!(zone = zone_name, "Wrote zone sizing");
    Ok(())
}

/// Emits the space list that ties the zone's space to its outdoor air
/// specification, and returns its name.
fn outdoor_air_space_list(
    ctx: &mut TranslationContext<'_>,
    zone_name: &str,
    space: &SourceObject,
    specification: String,
) -> Result<String, TranslationError> {
    let Some(space_name) = translate_name(ctx, space.id())? else {
        return Ok(specification);
    };

    let name = ctx.free_name(
        RecordType::DesignSpecificationOutdoorAirSpaceList,
        &format!("{zone_name} DSOA Space List"),
    );
    let mut list = Record::new(RecordType::DesignSpecificationOutdoorAirSpaceList, name.as_str());
    list.push_group([space_name, specification]);
    ctx.register(None, list)?;
    Ok(name)
}

/// Emits a specification that asks for no outdoor air, and returns its
/// name.
fn zero_air_specification(
    ctx: &mut TranslationContext<'_>,
    zone_name: &str,
) -> Result<String, TranslationError> {
    let name = ctx.free_name(
        RecordType::DesignSpecificationOutdoorAir,
        &format!("{zone_name} Zero air DSOA"),
    );
    let mut record = Record::new(RecordType::DesignSpecificationOutdoorAir, name.as_str());
    record.set(dsoa_fields::OUTDOOR_AIR_METHOD, FieldValue::text("Sum"));
    for slot in [
        dsoa_fields::OUTDOOR_AIR_FLOW_PER_PERSON,
        dsoa_fields::OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA,
        dsoa_fields::OUTDOOR_AIR_FLOW_PER_ZONE,
        dsoa_fields::OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR,
    ] {
        record.set(slot, FieldValue::Number(0.0));
    }
    ctx.register(None, record)?;
    Ok(name)
}
