//! User-defined zone ventilation.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordType, fields::zone_ventilation_design_flow_rate as fields,
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_name, translate_schedule_or_always_on},
    resolve::{FieldPolicy, FieldWriter},
};

/// Emits `ZoneVentilation:DesignFlowRate` for the zone that owns the
/// object.
pub fn translate_ventilation(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::ZoneVentilationDesignFlowRate, name);
    FieldWriter::new(object, &mut record)
        .text(
            fields::DESIGN_FLOW_RATE_CALCULATION_METHOD,
            "design_flow_rate_calculation_method",
            FieldPolicy::Always,
        )
        .number(fields::DESIGN_FLOW_RATE, "design_flow_rate", FieldPolicy::Always)
        .number(
            fields::FLOW_RATE_PER_FLOOR_AREA,
            "flow_rate_per_floor_area",
            FieldPolicy::Always,
        )
        .number(
            fields::FLOW_RATE_PER_PERSON,
            "flow_rate_per_person",
            FieldPolicy::Always,
        )
        .number(
            fields::AIR_CHANGES_PER_HOUR,
            "air_changes_per_hour",
            FieldPolicy::Always,
        )
        .text(fields::VENTILATION_TYPE, "ventilation_type", FieldPolicy::Always);
    let id = ctx.register(Some(object.id()), record)?;

    let zone = match ctx.model().owner(object.id()) {
        Some(owner) => translate_name(ctx, owner.object)?,
        None => None,
    };
    let Some(zone) = zone else {
        ctx.withdraw(object.id(), id);
        ctx.warn(
            object.id(),
            format!(
                "{} is not part of a thermal zone and will not be translated",
                object.brief_description()
            ),
        );
        return Ok(None);
    };

    let schedule = translate_schedule_or_always_on(ctx, object, "schedule")?;
    ctx.patch(id, |record| {
        record.set(
            fields::ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME,
            FieldValue::reference(zone),
        );
        record.set(fields::SCHEDULE_NAME, FieldValue::reference(schedule));
    });

    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch::translate, options::TranslatorOptions, test::ModelFixture};
    use epbridge_model::{ObjectKind, Value};

    #[test]
    fn ventilation_refers_to_owning_zone() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let ventilation = fixture.child(zone, ObjectKind::ZoneVentilationDesignFlowRate, Some("Night Flush"));
        fixture.set(ventilation, "design_flow_rate", Value::Number(0.3));
        let schedule = fixture.schedule_constant("Night", 1.0);
        fixture.refer(ventilation, "schedule", schedule);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let record = ctx
            .records()
            .of_type(RecordType::ZoneVentilationDesignFlowRate)
            .next()
            .expect("ventilation is written");
        assert_eq!(record.name(), "Night Flush");
        assert_eq!(
            record.get_string(fields::ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME),
            Some("Core")
        );
        assert_eq!(record.get_string(fields::SCHEDULE_NAME), Some("Night"));
        assert_eq!(
            record.get_string(fields::DESIGN_FLOW_RATE_CALCULATION_METHOD),
            Some("Flow/Zone")
        );
        assert_eq!(record.get(fields::DESIGN_FLOW_RATE), Some(&FieldValue::Number(0.3)));
        assert_eq!(record.get_string(fields::VENTILATION_TYPE), Some("Natural"));
    }
}
