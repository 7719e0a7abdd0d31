//! Zone ventilation records derived from an outdoor air specification.
//!
//! A zone without HVAC equipment has nothing to deliver its outdoor air
//! requirement, so the requirement is written as ventilation records
//! instead: one per surviving coefficient whose flow is positive.

use epbridge_model::{SourceModel, SourceObject};
use epbridge_record::{
    FieldValue, Record, RecordType, fields::zone_ventilation_design_flow_rate as fields,
};

use crate::{
    context::TranslationContext,
    dispatch::translate_name,
    error::TranslationError,
    synthesis::apportion::{
        OutdoorAirCoefficients, OutdoorAirMethod, SpaceQuantities, apportion,
    },
};

/// Returns the occupancy definitions that apply to a space: its own, then
/// those of its space type.
#[must_use]
pub fn occupancy<'m>(model: &'m SourceModel, space: &SourceObject) -> Vec<&'m SourceObject> {
    let own = space.children("people").iter();
    let from_type = space
        .reference("space_type")
        .and_then(|space_type| model.get(space_type))
        .map(|space_type| space_type.children("people"))
        .unwrap_or_default()
        .iter();

    own.chain(from_type)
        .filter_map(|&id| model.get(id))
        .collect()
}

/// Returns the number of occupants of a space.
///
/// Each occupancy definition counts with the first of its number of
/// people, people per floor area and floor area per person that is set.
#[must_use]
pub fn occupant_count(model: &SourceModel, space: &SourceObject) -> f64 {
    let floor_area = space.number("floor_area").unwrap_or(0.0);

    occupancy(model, space)
        .into_iter()
        .map(|people| {
            if let Some(count) = people.number("number_of_people") {
                count
            } else if let Some(density) = people.number("people_per_floor_area") {
                density * floor_area
            } else if let Some(area) = people
                .number("floor_area_per_person")
                .filter(|area| *area > 0.0)
            {
                floor_area / area
            } else {
                0.0
            }
        })
        .sum()
}

/// Returns the quantities outdoor air flows are computed against.
///
/// The zone's own floor area and volume take precedence over the space's.
#[must_use]
pub fn zone_quantities(model: &SourceModel, zone: &SourceObject, space: &SourceObject) -> SpaceQuantities {
    SpaceQuantities {
        occupants: occupant_count(model, space),
        floor_area: zone
            .number("floor_area")
            .or_else(|| space.number("floor_area"))
            .unwrap_or(0.0),
        volume: zone
            .number("volume")
            .or_else(|| space.number("volume"))
            .unwrap_or(0.0),
    }
}

/// Reads the coefficients and method of an outdoor air specification.
#[must_use]
pub fn coefficients(specification: &SourceObject) -> (OutdoorAirCoefficients, OutdoorAirMethod) {
    let coefficients = OutdoorAirCoefficients {
        per_person: specification
            .number("outdoor_air_flow_per_person")
            .unwrap_or(0.0),
        per_floor_area: specification
            .number("outdoor_air_flow_per_floor_area")
            .unwrap_or(0.0),
        absolute: specification.number("outdoor_air_flow_rate").unwrap_or(0.0),
        air_changes_per_hour: specification
            .number("outdoor_air_flow_air_changes_per_hour")
            .unwrap_or(0.0),
    };
    let method = OutdoorAirMethod::parse(specification.text("outdoor_air_method").unwrap_or("Sum"));

    (coefficients, method)
}

/// Writes the ventilation records for a zone's outdoor air specification.
///
/// # Errors
///
/// Returns an error if a schedule fails to translate.
pub fn synthesize_ventilation(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
    space: &SourceObject,
    specification: &SourceObject,
) -> Result<(), TranslationError> {
    let model = ctx.model();
    let quantities = zone_quantities(model, zone, space);
    let (coefficients, method) = coefficients(specification);

    let kept = apportion(coefficients, method, quantities);
    let rates = kept.flow_rates(quantities);

    if rates.for_people > 0.0 {
        if let Some(schedule) = occupancy_schedule(ctx, zone, space)? {
            let mut record = ventilation_record(ctx, zone_name, "Ventilation per Person", "Flow/Person");
            record.set(fields::SCHEDULE_NAME, FieldValue::reference(schedule));
            record.set(fields::FLOW_RATE_PER_PERSON, FieldValue::Number(kept.per_person));
            ctx.register(None, record)?;
        }
    } else if kept.per_person > 0.0 {
        ctx.info(
            zone.id(),
            format!("no occupants found in ThermalZone '{zone_name}', outdoor air per person will not be added"),
        );
    }

    if rates.for_floor_area > 0.0 {
        let schedule = ctx.always_on_schedule()?;
        let mut record = ventilation_record(ctx, zone_name, "Ventilation per Floor Area", "Flow/Area");
        record.set(fields::SCHEDULE_NAME, FieldValue::reference(schedule));
        record.set(
            fields::FLOW_RATE_PER_FLOOR_AREA,
            FieldValue::Number(kept.per_floor_area),
        );
        ctx.register(None, record)?;
    }

    if rates.absolute > 0.0 {
        let schedule = ctx.always_on_schedule()?;
        let mut record = ventilation_record(ctx, zone_name, "Ventilation Rate", "Flow/Zone");
        record.set(fields::SCHEDULE_NAME, FieldValue::reference(schedule));
        record.set(fields::DESIGN_FLOW_RATE, FieldValue::Number(kept.absolute));
        ctx.register(None, record)?;
    }

    if rates.for_volume > 0.0 {
        let schedule = ctx.always_on_schedule()?;
        let mut record =
            ventilation_record(ctx, zone_name, "Ventilation Air Changes per Hour", "AirChanges/Hour");
        record.set(fields::SCHEDULE_NAME, FieldValue::reference(schedule));
        record.set(
            fields::AIR_CHANGES_PER_HOUR,
            FieldValue::Number(kept.air_changes_per_hour),
        );
        ctx.register(None, record)?;
    }

    Ok(())
}

fn ventilation_record(
    ctx: &TranslationContext<'_>,
    zone_name: &str,
    suffix: &str,
    method: &str,
) -> Record {
    let name = ctx.free_name(
        RecordType::ZoneVentilationDesignFlowRate,
        &format!("{zone_name} {suffix}"),
    );
    let mut record = Record::new(RecordType::ZoneVentilationDesignFlowRate, name);
    record.set(
        fields::ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME,
        FieldValue::reference(zone_name),
    );
    record.set(
        fields::DESIGN_FLOW_RATE_CALCULATION_METHOD,
        FieldValue::text(method),
    );
    record
}

/// Finds the schedule of the first occupancy definition that has one,
/// looking at the space's own definitions before its space type's.
fn occupancy_schedule(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    space: &SourceObject,
) -> Result<Option<String>, TranslationError> {
    let model = ctx.model();

    let own = ctx.sorted(space.children("people"));
    let from_type = space
        .reference("space_type")
        .and_then(|space_type| model.get(space_type))
        .map(|space_type| ctx.sorted(space_type.children("people")))
        .unwrap_or_default();

    let schedule = own
        .into_iter()
        .chain(from_type)
        .find_map(|people| people.reference("number_of_people_schedule"));

    let Some(schedule) = schedule else {
        let zone_name = ctx.name_of(zone);
        ctx.warn(
            zone.id(),
            format!(
                "no occupancy schedule found for ThermalZone '{zone_name}', outdoor air per person will not be added"
            ),
        );
        return Ok(None);
    };

    let name = translate_name(ctx, schedule)?;
    if name.is_none() {
        ctx.warn(
            zone.id(),
            "the occupancy schedule was not translated, outdoor air per person will not be added",
        );
    }
    Ok(name)
}
