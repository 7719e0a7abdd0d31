//! Outdoor air specifications.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordType, fields::design_specification_outdoor_air as fields,
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_reference},
    resolve::{FieldPolicy, FieldWriter},
};

/// Outdoor air methods the engine accepts, spelled the way it expects.
const ENGINE_METHODS: [&str; 10] = [
    "Flow/Person",
    "Flow/Area",
    "Flow/Zone",
    "AirChanges/Hour",
    "Sum",
    "Maximum",
    "IndoorAirQualityProcedure",
    "ProportionalControlBasedOnDesignOccupancy",
    "ProportionalControlBasedOnOccupancySchedule",
    "ProportionalControlBasedOnDesignOARate",
];

/// Maps a method as written in the model to the engine's spelling.
///
/// `Max` is accepted as a short form of `Maximum`. Returns `None` for
/// anything else the engine does not know.
#[must_use]
pub fn normalize_method(method: &str) -> Option<&'static str> {
    if method.eq_ignore_ascii_case("max") {
        return Some("Maximum");
    }
    ENGINE_METHODS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(method))
}

/// Emits `DesignSpecification:OutdoorAir`.
pub fn translate_design_specification_outdoor_air(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::DesignSpecificationOutdoorAir, name.as_str());

    let written = object.text("outdoor_air_method").unwrap_or("Sum");
    let method = normalize_method(written).unwrap_or_else(|| {
        ctx.warn(
            object.id(),
            format!("unknown outdoor air method '{written}' in '{name}', using Sum"),
        );
        "Sum"
    });
    record.set(fields::OUTDOOR_AIR_METHOD, FieldValue::text(method));

    FieldWriter::new(object, &mut record)
        .number(
            fields::OUTDOOR_AIR_FLOW_PER_PERSON,
            "outdoor_air_flow_per_person",
            FieldPolicy::Always,
        )
        .number(
            fields::OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA,
            "outdoor_air_flow_per_floor_area",
            FieldPolicy::Always,
        )
        .number(
            fields::OUTDOOR_AIR_FLOW_PER_ZONE,
            "outdoor_air_flow_rate",
            FieldPolicy::Always,
        )
        .number(
            fields::OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR,
            "outdoor_air_flow_air_changes_per_hour",
            FieldPolicy::Always,
        );

    let id = ctx.register(Some(object.id()), record)?;

    if let Some(schedule) = translate_reference(ctx, object, "outdoor_air_flow_rate_schedule")? {
        ctx.patch(id, |record| {
            record.set(fields::OUTDOOR_AIR_SCHEDULE_NAME, FieldValue::reference(schedule));
        });
    }

    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch::translate, options::TranslatorOptions, test::ModelFixture};
    use epbridge_model::Value;

    #[test]
    fn method_spellings() {
        assert_eq!(normalize_method("Max"), Some("Maximum"));
        assert_eq!(normalize_method("MAXIMUM"), Some("Maximum"));
        assert_eq!(normalize_method("flow/person"), Some("Flow/Person"));
        assert_eq!(normalize_method("BadValue"), None);
    }

    #[test]
    fn unknown_method_becomes_sum() {
        let mut fixture = ModelFixture::new();
        let dsoa = fixture.outdoor_air("Office OA");
        fixture.set(dsoa, "outdoor_air_method", Value::Text("BadValue".to_string()));
        let schedule = fixture.schedule_constant("OA Schedule", 1.0);
        fixture.refer(dsoa, "outdoor_air_flow_rate_schedule", schedule);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        let record = translate(&mut ctx, dsoa)
            .expect("translation succeeds")
            .expect("specification is written");

        let record = ctx.record(record).expect("record exists");
        assert_eq!(record.get_string(fields::OUTDOOR_AIR_METHOD), Some("Sum"));
        assert_eq!(
            record.get(fields::OUTDOOR_AIR_FLOW_PER_PERSON),
            Some(&FieldValue::Number(0.009_44))
        );
        assert_eq!(
            record.get_string(fields::OUTDOOR_AIR_SCHEDULE_NAME),
            Some("OA Schedule")
        );
        assert_eq!(ctx.diagnostics().about(dsoa).count(), 1);
    }
}
