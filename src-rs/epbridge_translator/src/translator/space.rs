//! Spaces and space types.
//!
//! With space translation excluded, a space has no record of its own: it is
//! memoized as its zone's record, so every load that names its space ends
//! up naming the zone, and space types collect zones instead of spaces.

use epbridge_model::SourceObject;
use epbridge_record::{FieldValue, Record, RecordType, fields::space};

use crate::{
    context::TranslationContext,
    dispatch::{self, Translated, translate_name},
    error::TranslationError,
    resolve::{FieldPolicy, FieldWriter},
    translator::translate_sorted,
};

/// Emits `Space`, adds it to its space type's list, then translates its
/// loads.
pub fn translate_space(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let zone = ctx.model().owner_object(object.id());

    if ctx.options().exclude_space_translation() {
        let record = match zone {
            Some(zone) => dispatch::translate(ctx, zone.id())?,
            None => None,
        };
        ctx.memoize(object.id(), record);

        if let Some(record) = record {
            let zone_name = ctx.record_name(record);
            join_space_type(ctx, object, zone_name)?;
            translate_loads(ctx, object)?;
        }
        return Ok(record);
    }

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::Space, name.as_str());
    FieldWriter::new(object, &mut record)
        .number(space::CEILING_HEIGHT, "ceiling_height", FieldPolicy::Always)
        .number(space::VOLUME, "volume", FieldPolicy::OmitDefaulted)
        .number(space::FLOOR_AREA, "floor_area", FieldPolicy::OmitDefaulted);
    let space_type = object
        .reference("space_type")
        .and_then(|id| ctx.model().get(id));
    if let Some(space_type) = space_type {
        record.set(space::SPACE_TYPE, FieldValue::text(ctx.name_of(space_type)));
    }
    let id = ctx.register(Some(object.id()), record)?;

    let zone_name = match zone {
        Some(zone) => translate_name(ctx, zone.id())?,
        None => None,
    };
    if let Some(zone_name) = zone_name {
        ctx.patch(id, |record| {
            record.set(space::ZONE_NAME, FieldValue::reference(zone_name));
        });
    }

    join_space_type(ctx, object, Some(name))?;
    translate_loads(ctx, object)?;

    Ok(Some(id))
}

/// Emits the `SpaceList` (or `ZoneList`) named after a space type, then
/// translates the space type's loads.
///
/// The list starts empty. Spaces add themselves as they are translated.
pub fn translate_space_type(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    let record_type = if ctx.options().exclude_space_translation() {
        RecordType::ZoneList
    } else {
        RecordType::SpaceList
    };

    let name = ctx.name_of(object);
    let id = ctx.register(Some(object.id()), Record::new(record_type, name))?;

    translate_loads(ctx, object)?;

    Ok(Some(id))
}

/// Adds `member` to the list of the space's space type.
fn join_space_type(
    ctx: &mut TranslationContext<'_>,
    space: &SourceObject,
    member: Option<String>,
) -> Result<(), TranslationError> {
    let (Some(space_type), Some(member)) = (space.reference("space_type"), member) else {
        return Ok(());
    };

    if let Some(list) = dispatch::translate(ctx, space_type)? {
        ctx.patch(list, |list| {
            if !list.groups().iter().any(|group| group.first() == Some(&member)) {
                list.push_group([member]);
            }
        });
    }
    Ok(())
}

fn translate_loads(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
) -> Result<(), TranslationError> {
    translate_sorted(ctx, object.children("people"))?;
    translate_sorted(ctx, object.children("lights"))?;
    Ok(())
}
