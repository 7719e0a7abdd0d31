//! Thermostats.
//!
//! A dual setpoint thermostat becomes a `ThermostatSetpoint:DualSetpoint`.
//! The zone that uses it also gets a `ZoneControl:Thermostat` with a
//! control type schedule that always selects dual setpoint control.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordType,
    fields::{
        schedule_compact, schedule_type_limits, thermostat_setpoint_dual_setpoint,
        zone_control_thermostat,
    },
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_name, translate_reference},
    error::TranslationError,
};

/// The control type value that selects dual setpoint control.
const DUAL_SETPOINT_CONTROL_TYPE: &str = "4";

/// Emits `ThermostatSetpoint:DualSetpoint`.
pub fn translate_dual_setpoint(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let name = ctx.name_of(object);
    let record = Record::new(RecordType::ThermostatSetpointDualSetpoint, name);
    let id = ctx.register(Some(object.id()), record)?;

    let schedules = [
        (
            thermostat_setpoint_dual_setpoint::HEATING_SETPOINT_TEMPERATURE_SCHEDULE_NAME,
            "heating_setpoint_schedule",
        ),
        (
            thermostat_setpoint_dual_setpoint::COOLING_SETPOINT_TEMPERATURE_SCHEDULE_NAME,
            "cooling_setpoint_schedule",
        ),
    ];
    for (slot, field) in schedules {
        if let Some(schedule) = translate_reference(ctx, object, field)? {
            ctx.patch(id, |record| record.set(slot, FieldValue::reference(schedule)));
        }
    }

    Ok(Some(id))
}

/// Emits the zone's thermostat control when the zone has a thermostat.
///
/// Nothing is emitted when the thermostat itself produces no record.
///
/// # Errors
///
/// Returns an error if the thermostat fails to translate.
pub fn translate_zone_thermostat(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
) -> Result<(), TranslationError> {
    let Some(thermostat) = zone.reference("thermostat") else {
        return Ok(());
    };

    let Some(setpoint) = translate_name(ctx, thermostat)? else {
        ctx.warn(
            zone.id(),
            format!("the thermostat of ThermalZone '{zone_name}' was not translated, the zone has no setpoints"),
        );
        return Ok(());
    };

    let limits_name = ctx.free_name(
        RecordType::ScheduleTypeLimits,
        &format!("{zone_name} Thermostat Schedule Type Limits"),
    );
    let mut limits = Record::new(RecordType::ScheduleTypeLimits, limits_name.as_str());
    limits.set(schedule_type_limits::LOWER_LIMIT_VALUE, FieldValue::Number(0.0));
    limits.set(schedule_type_limits::UPPER_LIMIT_VALUE, FieldValue::Number(4.0));
    limits.set(schedule_type_limits::NUMERIC_TYPE, FieldValue::text("DISCRETE"));
    ctx.register(None, limits)?;

    let schedule_name = ctx.free_name(
        RecordType::ScheduleCompact,
        &format!("{zone_name} Thermostat Schedule"),
    );
    let mut schedule = Record::new(RecordType::ScheduleCompact, schedule_name.as_str());
    schedule.set(
        schedule_compact::SCHEDULE_TYPE_LIMITS_NAME,
        FieldValue::reference(limits_name),
    );
    for field in [
        "Through: 12/31",
        "For: AllDays",
        "Until: 24:00",
        DUAL_SETPOINT_CONTROL_TYPE,
    ] {
        schedule.push_group([field]);
    }
    ctx.register(None, schedule)?;

    let control_name = ctx.free_name(
        RecordType::ZoneControlThermostat,
        &format!("{zone_name} Thermostat"),
    );
    let mut control = Record::new(RecordType::ZoneControlThermostat, control_name);
    control.set(
        zone_control_thermostat::ZONE_OR_ZONELIST_NAME,
        FieldValue::reference(zone_name),
    );
    control.set(
        zone_control_thermostat::CONTROL_TYPE_SCHEDULE_NAME,
        FieldValue::reference(schedule_name),
    );
    control.push_group([
        RecordType::ThermostatSetpointDualSetpoint.idd_name().to_string(),
        setpoint,
    ]);
    ctx.register(None, control)?;

    Ok(())
}
