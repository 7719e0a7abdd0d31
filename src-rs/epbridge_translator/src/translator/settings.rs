//! Run-wide settings records.

use epbridge_model::{ObjectKind, SourceObject, schema::DefaultValue};
use epbridge_record::{
    FieldValue, Record, RecordType,
    fields::{building, simulation_control, sizing_period_design_day, timestep, version},
};

use crate::{
    context::TranslationContext,
    dispatch::Translated,
    resolve::{self, FieldPolicy, FieldWriter},
};

/// Engine version the records are written for.
pub const ENGINE_VERSION: &str = "23.2";

/// Emits the `Version` record.
pub fn translate_version(ctx: &mut TranslationContext<'_>) -> Translated {
    let mut record = Record::new(RecordType::Version, "Version");
    record.set(version::VERSION_IDENTIFIER, FieldValue::text(ENGINE_VERSION));
    ctx.register(None, record).map(Some)
}

/// Emits `SimulationControl` from the model's object, or from the defaults
/// when the model has none.
pub fn translate_simulation_control(
    ctx: &mut TranslationContext<'_>,
    object: Option<&SourceObject>,
) -> Translated {
    const FLAGS: [(usize, &str); 5] = [
        (simulation_control::DO_ZONE_SIZING_CALCULATION, "do_zone_sizing"),
        (simulation_control::DO_SYSTEM_SIZING_CALCULATION, "do_system_sizing"),
        (simulation_control::DO_PLANT_SIZING_CALCULATION, "do_plant_sizing"),
        (
            simulation_control::RUN_SIMULATION_FOR_SIZING_PERIODS,
            "run_for_sizing_periods",
        ),
        (
            simulation_control::RUN_SIMULATION_FOR_WEATHER_FILE_RUN_PERIODS,
            "run_for_weather_file",
        ),
    ];

    let mut record = Record::new(RecordType::SimulationControl, "SimulationControl");
    for (slot, field) in FLAGS {
        let value = match object {
            Some(object) => resolve::yes_no(object, field, FieldPolicy::Always),
            None => default_flag(ObjectKind::SimulationControl, field).map(FieldValue::yes_no),
        };
        if let Some(value) = value {
            record.set(slot, value);
        }
    }

    ctx.register(object.map(SourceObject::id), record).map(Some)
}

/// Emits `Timestep` from the model's object, or from the default when the
/// model has none.
pub fn translate_timestep(
    ctx: &mut TranslationContext<'_>,
    object: Option<&SourceObject>,
) -> Translated {
    const FIELD: &str = "number_of_timesteps_per_hour";

    let mut record = Record::new(RecordType::Timestep, "Timestep");
    let value = match object {
        Some(object) => resolve::integer(object, FIELD, FieldPolicy::Always),
        None => default_number(ObjectKind::Timestep, FIELD)
            .map(|number| FieldValue::Integer(resolve::round(number))),
    };
    if let Some(value) = value {
        record.set(timestep::NUMBER_OF_TIMESTEPS_PER_HOUR, value);
    }

    ctx.register(object.map(SourceObject::id), record).map(Some)
}

/// Emits `Building` from the model's object, or an empty one when the model
/// has none.
///
/// Every field is only written when set explicitly.
pub fn translate_building(
    ctx: &mut TranslationContext<'_>,
    object: Option<&SourceObject>,
) -> Translated {
    let Some(object) = object else {
        let record = Record::new(RecordType::Building, "Building");
        return ctx.register(None, record).map(Some);
    };

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::Building, name);
    FieldWriter::new(object, &mut record)
        .number(building::NORTH_AXIS, "north_axis", FieldPolicy::OmitDefaulted)
        .text(building::TERRAIN, "terrain", FieldPolicy::OmitDefaulted)
        .number(
            building::LOADS_CONVERGENCE_TOLERANCE_VALUE,
            "loads_convergence_tolerance",
            FieldPolicy::OmitDefaulted,
        )
        .number(
            building::TEMPERATURE_CONVERGENCE_TOLERANCE_VALUE,
            "temperature_convergence_tolerance",
            FieldPolicy::OmitDefaulted,
        )
        .text(
            building::SOLAR_DISTRIBUTION,
            "solar_distribution",
            FieldPolicy::OmitDefaulted,
        )
        .integer(
            building::MAXIMUM_NUMBER_OF_WARMUP_DAYS,
            "maximum_number_of_warmup_days",
            FieldPolicy::OmitDefaulted,
        )
        .integer(
            building::MINIMUM_NUMBER_OF_WARMUP_DAYS,
            "minimum_number_of_warmup_days",
            FieldPolicy::OmitDefaulted,
        );

    ctx.register(Some(object.id()), record).map(Some)
}

/// Emits `SizingPeriod:DesignDay`.
pub fn translate_design_day(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::SizingPeriodDesignDay, name);
    FieldWriter::new(object, &mut record)
        .integer(sizing_period_design_day::MONTH, "month", FieldPolicy::Always)
        .integer(
            sizing_period_design_day::DAY_OF_MONTH,
            "day_of_month",
            FieldPolicy::Always,
        )
        .text(sizing_period_design_day::DAY_TYPE, "day_type", FieldPolicy::Always)
        .number(
            sizing_period_design_day::MAXIMUM_DRY_BULB_TEMPERATURE,
            "maximum_dry_bulb_temperature",
            FieldPolicy::Always,
        )
        .number(
            sizing_period_design_day::DAILY_DRY_BULB_TEMPERATURE_RANGE,
            "daily_dry_bulb_temperature_range",
            FieldPolicy::Always,
        )
        .number(
            sizing_period_design_day::BAROMETRIC_PRESSURE,
            "barometric_pressure",
            FieldPolicy::Always,
        )
        .number(
            sizing_period_design_day::WIND_SPEED,
            "wind_speed",
            FieldPolicy::Always,
        );

    ctx.register(Some(object.id()), record).map(Some)
}

fn default_flag(kind: ObjectKind, field: &str) -> Option<bool> {
    match kind.schema().scalar(field)?.default {
        DefaultValue::Boolean(flag) => Some(flag),
        DefaultValue::Number(_) | DefaultValue::Text(_) | DefaultValue::Autosize | DefaultValue::None => {
            None
        }
    }
}

fn default_number(kind: ObjectKind, field: &str) -> Option<f64> {
    match kind.schema().scalar(field)?.default {
        DefaultValue::Number(number) => Some(number),
        DefaultValue::Boolean(_) | DefaultValue::Text(_) | DefaultValue::Autosize | DefaultValue::None => {
            None
        }
    }
}
