//! Occupancy and lighting loads.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordId, RecordType,
    fields::{lights, people},
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_name, translate_reference, translate_schedule_or_always_on},
    error::TranslationError,
    resolve::{self, FieldPolicy, FieldWriter},
};

/// Emits `People`.
///
/// The calculation method follows the first of number of people, people
/// per floor area and floor area per person that is set.
pub fn translate_people(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    const METHODS: [(&str, &str, usize); 3] = [
        ("number_of_people", "People", people::NUMBER_OF_PEOPLE),
        ("people_per_floor_area", "People/Area", people::PEOPLE_PER_FLOOR_AREA),
        ("floor_area_per_person", "Area/Person", people::FLOOR_AREA_PER_PERSON),
    ];

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::People, name.as_str());

    let method = METHODS
        .into_iter()
        .find_map(|(field, method, slot)| {
            resolve::number(object, field, FieldPolicy::Always).map(|value| (method, slot, value))
        });
    let (method, slot, value) = method.unwrap_or_else(|| {
        ctx.warn(
            object.id(),
            format!("People '{name}' does not say how many people there are, assuming none"),
        );
        ("People", people::NUMBER_OF_PEOPLE, FieldValue::Number(0.0))
    });
    record.set(people::NUMBER_OF_PEOPLE_CALCULATION_METHOD, FieldValue::text(method));
    record.set(slot, value);

    FieldWriter::new(object, &mut record).number(
        people::FRACTION_RADIANT,
        "fraction_radiant",
        FieldPolicy::Always,
    );

    let id = ctx.register(Some(object.id()), record)?;
    if !attach_to_owner(ctx, object, id, people::ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME)? {
        return Ok(None);
    }

    if let Some(schedule) = translate_reference(ctx, object, "number_of_people_schedule")? {
        ctx.patch(id, |record| {
            record.set(
                people::NUMBER_OF_PEOPLE_SCHEDULE_NAME,
                FieldValue::reference(schedule),
            );
        });
    }
    if let Some(schedule) = translate_reference(ctx, object, "activity_level_schedule")? {
        ctx.patch(id, |record| {
            record.set(
                people::ACTIVITY_LEVEL_SCHEDULE_NAME,
                FieldValue::reference(schedule),
            );
        });
    }

    Ok(Some(id))
}

/// Emits `Lights`.
///
/// The engine needs a schedule for every lighting load, so the shared
/// always-on schedule stands in when none is given.
pub fn translate_lights(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::Lights, name.as_str());

    if let Some(level) = resolve::number(object, "lighting_level", FieldPolicy::Always) {
        record.set(lights::DESIGN_LEVEL_CALCULATION_METHOD, FieldValue::text("LightingLevel"));
        record.set(lights::LIGHTING_LEVEL, level);
    } else if let Some(density) = resolve::number(object, "watts_per_floor_area", FieldPolicy::Always) {
        record.set(lights::DESIGN_LEVEL_CALCULATION_METHOD, FieldValue::text("Watts/Area"));
        record.set(lights::WATTS_PER_FLOOR_AREA, density);
    } else {
        ctx.warn(
            object.id(),
            format!("Lights '{name}' has no lighting level, assuming none"),
        );
        record.set(lights::DESIGN_LEVEL_CALCULATION_METHOD, FieldValue::text("LightingLevel"));
        record.set(lights::LIGHTING_LEVEL, FieldValue::Number(0.0));
    }

    FieldWriter::new(object, &mut record)
        .number(
            lights::RETURN_AIR_FRACTION,
            "return_air_fraction",
            FieldPolicy::Always,
        )
        .number(lights::FRACTION_RADIANT, "fraction_radiant", FieldPolicy::Always)
        .number(lights::FRACTION_VISIBLE, "fraction_visible", FieldPolicy::Always);

    let id = ctx.register(Some(object.id()), record)?;
    if !attach_to_owner(ctx, object, id, lights::ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME)? {
        return Ok(None);
    }

    let schedule = translate_schedule_or_always_on(ctx, object, "schedule")?;
    ctx.patch(id, |record| {
        record.set(lights::SCHEDULE_NAME, FieldValue::reference(schedule));
    });

    Ok(Some(id))
}

/// Points a load record at the record of the space or space type that owns
/// the load.
///
/// Returns false, after withdrawing the record, if the owner produced no
/// record.
fn attach_to_owner(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
    record: RecordId,
    slot: usize,
) -> Result<bool, TranslationError> {
    let owner = match ctx.model().owner(object.id()) {
        Some(owner) => translate_name(ctx, owner.object)?,
        None => None,
    };

    let Some(owner) = owner else {
        ctx.withdraw(object.id(), record);
        ctx.warn(
            object.id(),
            format!(
                "{} has no space or space type to apply to and will not be translated",
                object.brief_description()
            ),
        );
        return Ok(false);
    };

    ctx.patch(record, |record| record.set(slot, FieldValue::reference(owner)));
    Ok(true)
}
