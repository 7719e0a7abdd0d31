//! Schedules and their type limits.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordType,
    fields::{schedule_constant, schedule_type_limits},
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_reference},
    resolve::{FieldPolicy, FieldWriter},
};

/// Emits `ScheduleTypeLimits`.
pub fn translate_schedule_type_limits(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::ScheduleTypeLimits, name);
    FieldWriter::new(object, &mut record)
        .number(
            schedule_type_limits::LOWER_LIMIT_VALUE,
            "lower_limit",
            FieldPolicy::Always,
        )
        .number(
            schedule_type_limits::UPPER_LIMIT_VALUE,
            "upper_limit",
            FieldPolicy::Always,
        )
        .text(
            schedule_type_limits::NUMERIC_TYPE,
            "numeric_type",
            FieldPolicy::Always,
        )
        .text(
            schedule_type_limits::UNIT_TYPE,
            "unit_type",
            FieldPolicy::OmitDefaulted,
        );

    ctx.register(Some(object.id()), record).map(Some)
}

/// Emits `Schedule:Constant`.
pub fn translate_schedule_constant(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::ScheduleConstant, name);
    FieldWriter::new(object, &mut record).number(
        schedule_constant::HOURLY_VALUE,
        "value",
        FieldPolicy::Always,
    );
    let id = ctx.register(Some(object.id()), record)?;

    if let Some(limits) = translate_reference(ctx, object, "schedule_type_limits")? {
        ctx.patch(id, |record| {
            record.set(
                schedule_constant::SCHEDULE_TYPE_LIMITS_NAME,
                FieldValue::reference(limits),
            );
        });
    }

    Ok(Some(id))
}
