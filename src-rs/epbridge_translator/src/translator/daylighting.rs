//! Daylighting controls, reference points and illuminance maps.
//!
//! A zone names up to two daylighting controls. Each control becomes a
//! reference point, and the zone gets one `Daylighting:Controls` record
//! that splits its lighting between the points.

use epbridge_model::SourceObject;
use epbridge_record::{
    FieldValue, Record, RecordType,
    fields::{daylighting_controls, daylighting_reference_point, output_illuminance_map},
};

use crate::{
    context::TranslationContext,
    dispatch::{Translated, translate_name, translate_reference},
    error::TranslationError,
    resolve::{FieldPolicy, FieldWriter},
};

/// Maps a lighting control type to the engine's spelling.
#[must_use]
pub fn normalize_control_type(control_type: &str) -> Option<&'static str> {
    ["Continuous", "Stepped", "ContinuousOff"]
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(control_type))
        .or_else(|| {
            control_type
                .eq_ignore_ascii_case("Continuous/Off")
                .then_some("ContinuousOff")
        })
}

/// Returns the glare view azimuth for a rotation about the vertical axis,
/// in degrees within `[0, 360)`.
#[must_use]
pub fn glare_azimuth(phi: f64) -> f64 {
    // adding zero turns -0.0 into 0.0
    let azimuth = (-phi).rem_euclid(360.0) + 0.0;
    if azimuth < 360.0 { azimuth } else { 0.0 }
}

fn is_switched_off(control: &SourceObject) -> bool {
    control
        .text("lighting_control_type")
        .is_some_and(|control_type| control_type.eq_ignore_ascii_case("None"))
}

/// Emits the zone's daylighting records and illuminance map.
///
/// # Errors
///
/// Returns an error if a record name is taken or a referenced object fails
/// to translate.
pub fn translate_zone_daylighting(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
) -> Result<(), TranslationError> {
    let primary = zone
        .reference("primary_daylighting_control")
        .map(|id| ctx.object(id))
        .transpose()?;
    let secondary = zone
        .reference("secondary_daylighting_control")
        .map(|id| ctx.object(id))
        .transpose()?;
    let map = zone
        .reference("illuminance_map")
        .map(|id| ctx.object(id))
        .transpose()?;

    let Some(primary) = primary else {
        if let Some(secondary) = secondary {
            ctx.warn(
                zone.id(),
                format!(
                    "ThermalZone '{zone_name}' has a secondary daylighting control but no primary one, the secondary control is ignored"
                ),
            );
            ctx.memoize(secondary.id(), None);
        }
        if let Some(map) = map {
            translate_illuminance_map(ctx, zone, zone_name, map, None)?;
        }
        return Ok(());
    };

    let primary_point = translate_reference_point(ctx, zone, zone_name, primary)?;
    let secondary_point = match secondary {
        Some(secondary) => Some(translate_reference_point(ctx, zone, zone_name, secondary)?),
        None => None,
    };

    let mut primary_fraction = zone
        .number("fraction_controlled_by_primary_daylighting")
        .unwrap_or(1.0);
    let mut secondary_fraction = zone
        .number("fraction_controlled_by_secondary_daylighting")
        .unwrap_or(0.0);

    if is_switched_off(primary) && primary_fraction > 0.0 {
        ctx.warn(
            zone.id(),
            format!("the primary daylighting control of ThermalZone '{zone_name}' has no lighting control, its fraction is set to 0"),
        );
        primary_fraction = 0.0;
    }
    if let Some(secondary) = secondary
        && is_switched_off(secondary)
        && secondary_fraction > 0.0
    {
        ctx.warn(
            zone.id(),
            format!("the secondary daylighting control of ThermalZone '{zone_name}' has no lighting control, its fraction is set to 0"),
        );
        secondary_fraction = 0.0;
    }
    if primary_fraction + secondary_fraction > 1.0 {
        secondary_fraction = (1.0 - primary_fraction).max(0.0);
        ctx.warn(
            zone.id(),
            format!(
                "daylighting fractions of ThermalZone '{zone_name}' add up to more than 1, the secondary fraction is set to {secondary_fraction}"
            ),
        );
    }

    let controls_name = ctx.free_name(
        RecordType::DaylightingControls,
        &format!("{zone_name} DaylightingControls"),
    );
    let mut record = Record::new(RecordType::DaylightingControls, controls_name);
    record.set(
        daylighting_controls::ZONE_OR_SPACE_NAME,
        FieldValue::reference(zone_name),
    );
    record.set(
        daylighting_controls::DAYLIGHTING_METHOD,
        FieldValue::text("SplitFlux"),
    );

    let leading = match secondary {
        Some(secondary) if is_switched_off(primary) => secondary,
        Some(_) | None => primary,
    };
    let written_type = leading.text("lighting_control_type").unwrap_or("");
    match normalize_control_type(written_type) {
        Some(control_type) => record.set(
            daylighting_controls::LIGHTING_CONTROL_TYPE,
            FieldValue::text(control_type),
        ),
        None => ctx.warn(
            leading.id(),
            format!("unknown lighting control type '{written_type}', the field is left unset"),
        ),
    }

    for control in std::iter::once(primary).chain(secondary) {
        let psi = control.number("psi_rotation_around_x_axis").unwrap_or(0.0);
        let theta = control.number("theta_rotation_around_y_axis").unwrap_or(0.0);
        if psi != 0.0 || theta != 0.0 {
            ctx.warn(
                control.id(),
                "rotations around the x and y axes are not supported and are ignored",
            );
        }
    }

    let phi = primary.number("phi_rotation_around_z_axis").unwrap_or(0.0);
    record.set(
        daylighting_controls::GLARE_CALCULATION_AZIMUTH_ANGLE_OF_VIEW_DIRECTION,
        FieldValue::Number(glare_azimuth(phi)),
    );
    record.set(
        daylighting_controls::GLARE_CALCULATION_DAYLIGHTING_REFERENCE_POINT_NAME,
        FieldValue::reference(primary_point.as_str()),
    );
    FieldWriter::new(primary, &mut record)
        .number(
            daylighting_controls::MINIMUM_INPUT_POWER_FRACTION,
            "minimum_input_power_fraction",
            FieldPolicy::Always,
        )
        .number(
            daylighting_controls::MINIMUM_LIGHT_OUTPUT_FRACTION,
            "minimum_light_output_fraction",
            FieldPolicy::Always,
        )
        .integer(
            daylighting_controls::NUMBER_OF_STEPPED_CONTROL_STEPS,
            "number_of_stepped_control_steps",
            FieldPolicy::Always,
        )
        .number(
            daylighting_controls::PROBABILITY_LIGHTING_WILL_BE_RESET,
            "probability_lighting_reset",
            FieldPolicy::Always,
        )
        .number(
            daylighting_controls::MAXIMUM_ALLOWABLE_DISCOMFORT_GLARE_INDEX,
            "maximum_allowable_discomfort_glare_index",
            FieldPolicy::Always,
        );

    record.push_group([
        primary_point.clone(),
        FieldValue::Number(primary_fraction).to_string(),
        setpoint(primary),
    ]);
    if let (Some(secondary), Some(point)) = (secondary, secondary_point) {
        record.push_group([
            point,
            FieldValue::Number(secondary_fraction).to_string(),
            setpoint(secondary),
        ]);
    }

    let id = ctx.register(None, record)?;

    if let Some(schedule) = translate_reference(ctx, zone, "daylighting_availability_schedule")? {
        ctx.patch(id, |record| {
            record.set(
                daylighting_controls::AVAILABILITY_SCHEDULE_NAME,
                FieldValue::reference(schedule),
            );
        });
    }

    if let Some(map) = map {
        translate_illuminance_map(ctx, zone, zone_name, map, Some(&primary_point))?;
    }

    Ok(())
}

fn setpoint(control: &SourceObject) -> String {
    control
        .number("illuminance_setpoint")
        .map(|value| FieldValue::Number(value).to_string())
        .unwrap_or_default()
}

/// Emits the reference point of a daylighting control and returns its
/// name.
///
/// The point belongs to the zone of the space that holds the control. A
/// control without a space is placed in the zone that uses it.
fn translate_reference_point(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
    control: &SourceObject,
) -> Result<String, TranslationError> {
    if let Some(Some(record)) = ctx.memoized(control.id())
        && let Some(name) = ctx.record_name(record)
    {
        return Ok(name);
    }

    let model = ctx.model();
    let home = model
        .owner_object(control.id())
        .and_then(|space| model.owner_object(space.id()));

    let name = ctx.name_of(control);
    let mut record = Record::new(RecordType::DaylightingReferencePoint, name.as_str());
    FieldWriter::new(control, &mut record)
        .number(
            daylighting_reference_point::X_COORDINATE,
            "position_x",
            FieldPolicy::Always,
        )
        .number(
            daylighting_reference_point::Y_COORDINATE,
            "position_y",
            FieldPolicy::Always,
        )
        .number(
            daylighting_reference_point::Z_COORDINATE,
            "position_z",
            FieldPolicy::Always,
        );
    let id = ctx.register(Some(control.id()), record)?;

    let home_name = match home {
        Some(home) if home.id() != zone.id() => {
            ctx.warn(
                control.id(),
                format!(
                    "{} is used by ThermalZone '{zone_name}' but sits in {}",
                    control.brief_description(),
                    home.brief_description()
                ),
            );
            translate_name(ctx, home.id())?
        }
        Some(_) | None => None,
    };
    let home_name = home_name.unwrap_or_else(|| zone_name.to_string());
    ctx.patch(id, |record| {
        record.set(
            daylighting_reference_point::ZONE_OR_SPACE_NAME,
            FieldValue::reference(home_name),
        );
    });

    Ok(name)
}

/// Emits `Output:IlluminanceMap` for the zone.
///
/// Without a primary reference point, the zone gets a point at the centre
/// of the map and a daylighting control that does not dim anything, since
/// the engine only computes maps for zones with daylighting controls.
fn translate_illuminance_map(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
    map: &SourceObject,
    primary_point: Option<&str>,
) -> Result<(), TranslationError> {
    if ctx.memoized(map.id()).is_some() {
        return Ok(());
    }

    let origin_x = map.number("origin_x").unwrap_or(0.0);
    let origin_y = map.number("origin_y").unwrap_or(0.0);
    let origin_z = map.number("origin_z").unwrap_or(0.0);
    let x_length = map.number("x_length").unwrap_or(0.0);
    let y_length = map.number("y_length").unwrap_or(0.0);

    let name = ctx.name_of(map);
    let mut record = Record::new(RecordType::OutputIlluminanceMap, name);
    record.set(
        output_illuminance_map::ZONE_OR_SPACE_NAME,
        FieldValue::reference(zone_name),
    );
    record.set(output_illuminance_map::Z_HEIGHT, FieldValue::Number(origin_z));
    record.set(
        output_illuminance_map::X_MINIMUM_COORDINATE,
        FieldValue::Number(origin_x),
    );
    record.set(
        output_illuminance_map::X_MAXIMUM_COORDINATE,
        FieldValue::Number(origin_x + x_length),
    );
    record.set(
        output_illuminance_map::Y_MINIMUM_COORDINATE,
        FieldValue::Number(origin_y),
    );
    record.set(
        output_illuminance_map::Y_MAXIMUM_COORDINATE,
        FieldValue::Number(origin_y + y_length),
    );
    FieldWriter::new(map, &mut record)
        .integer(
            output_illuminance_map::NUMBER_OF_X_GRID_POINTS,
            "number_of_x_grid_points",
            FieldPolicy::Always,
        )
        .integer(
            output_illuminance_map::NUMBER_OF_Y_GRID_POINTS,
            "number_of_y_grid_points",
            FieldPolicy::Always,
        );

    let rotated = [
        "psi_rotation_around_x_axis",
        "theta_rotation_around_y_axis",
        "phi_rotation_around_z_axis",
    ]
    .into_iter()
    .any(|field| map.number(field).is_some_and(|angle| angle != 0.0));
    if rotated {
        ctx.warn(
            map.id(),
            "illuminance map rotations are not supported and are ignored",
        );
    }

    ctx.register(Some(map.id()), record)?;

    if primary_point.is_none() {
        ctx.warn(
            zone.id(),
            format!(
                "ThermalZone '{zone_name}' has an illuminance map but no daylighting control, a reference point is added at the centre of the map"
            ),
        );

        let point_name = ctx.free_name(
            RecordType::DaylightingReferencePoint,
            &format!("{zone_name} Daylighting Reference Point"),
        );
        let mut point = Record::new(RecordType::DaylightingReferencePoint, point_name.as_str());
        point.set(
            daylighting_reference_point::ZONE_OR_SPACE_NAME,
            FieldValue::reference(zone_name),
        );
        point.set(
            daylighting_reference_point::X_COORDINATE,
            FieldValue::Number(x_length.mul_add(0.5, origin_x)),
        );
        point.set(
            daylighting_reference_point::Y_COORDINATE,
            FieldValue::Number(y_length.mul_add(0.5, origin_y)),
        );
        point.set(
            daylighting_reference_point::Z_COORDINATE,
            FieldValue::Number(origin_z),
        );
        ctx.register(None, point)?;

        let controls_name = ctx.free_name(
            RecordType::DaylightingControls,
            &format!("{zone_name} DaylightingControls"),
        );
        let mut controls = Record::new(RecordType::DaylightingControls, controls_name);
        controls.set(
            daylighting_controls::ZONE_OR_SPACE_NAME,
            FieldValue::reference(zone_name),
        );
        controls.set(
            daylighting_controls::DAYLIGHTING_METHOD,
            FieldValue::text("SplitFlux"),
        );
        controls.push_group([point_name, "0".to_string(), String::new()]);
        ctx.register(None, controls)?;
    }

    Ok(())
}

/// Reports a daylighting control reached outside of a thermal zone.
///
/// Controls only make sense as part of a zone's daylighting, so nothing is
/// written for them on their own.
pub fn translate_unclaimed_control(
    ctx: &mut TranslationContext<'_>,
    object: &SourceObject,
) -> Translated {
    ctx.warn(
        object.id(),
        format!(
            "{} is only translated as the daylighting control of a thermal zone",
            object.brief_description()
        ),
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch::translate, options::TranslatorOptions, test::ModelFixture};
    use epbridge_model::{ObjectKind, Value};

    #[test]
    fn control_type_spellings() {
        assert_eq!(normalize_control_type("continuous"), Some("Continuous"));
        assert_eq!(normalize_control_type("Continuous/Off"), Some("ContinuousOff"));
        assert_eq!(normalize_control_type("Dimmed"), None);
    }

    #[test]
    fn azimuth_is_normalized() {
        assert_eq!(glare_azimuth(0.0), 0.0);
        assert_eq!(glare_azimuth(90.0), 270.0);
        assert_eq!(glare_azimuth(-45.0), 45.0);
        assert_eq!(glare_azimuth(720.0), 0.0);
    }

    #[test]
    fn fractions_are_clamped() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let office = fixture.space(zone, "Office");
        let primary = fixture.child(office, ObjectKind::DaylightingControl, Some("Sensor A"));
        let secondary = fixture.child(office, ObjectKind::DaylightingControl, Some("Sensor B"));
        fixture.set(secondary, "illuminance_setpoint", Value::Number(300.0));
        fixture.refer(zone, "primary_daylighting_control", primary);
        fixture.refer(zone, "secondary_daylighting_control", secondary);
        fixture.set(zone, "fraction_controlled_by_primary_daylighting", Value::Number(0.7));
        fixture.set(zone, "fraction_controlled_by_secondary_daylighting", Value::Number(0.6));
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let records = ctx.records();
        let controls = records
            .of_type(RecordType::DaylightingControls)
            .next()
            .expect("controls are written");
        let fractions: Vec<f64> = controls
            .groups()
            .iter()
            .map(|group| group[1].parse().expect("fraction is a number"))
            .collect();
        assert_eq!(fractions.len(), 2);
        assert!((fractions[0] - 0.7).abs() < 1e-9);
        assert!((fractions[1] - 0.3).abs() < 1e-9);
        assert_eq!(controls.groups()[1][2], "300");
        assert_eq!(
            controls.get_string(daylighting_controls::LIGHTING_CONTROL_TYPE),
            Some("Continuous")
        );
        assert_eq!(
            controls.get_string(
                daylighting_controls::GLARE_CALCULATION_DAYLIGHTING_REFERENCE_POINT_NAME
            ),
            Some("Sensor A")
        );
        assert_eq!(records.of_type(RecordType::DaylightingReferencePoint).count(), 2);
        assert!(
            ctx.diagnostics()
                .about(zone)
                .any(|diagnostic| diagnostic.message.contains("add up to more than 1"))
        );
    }

    #[test]
    fn switched_off_primary_gets_no_share() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let office = fixture.space(zone, "Office");
        let primary = fixture.child(office, ObjectKind::DaylightingControl, Some("Sensor"));
        fixture.set(primary, "lighting_control_type", Value::Text("None".to_string()));
        fixture.refer(zone, "primary_daylighting_control", primary);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let controls = ctx
            .records()
            .of_type(RecordType::DaylightingControls)
            .next()
            .expect("controls are written");
        assert_eq!(controls.groups()[0][1], "0");
        assert_eq!(controls.get(daylighting_controls::LIGHTING_CONTROL_TYPE), None);
    }

    #[test]
    fn map_without_control_adds_centre_point() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let office = fixture.space(zone, "Office");
        let map = fixture.child(office, ObjectKind::IlluminanceMap, Some("Grid"));
        fixture.set(map, "x_length", Value::Number(4.0));
        fixture.set(map, "y_length", Value::Number(6.0));
        fixture.set(map, "origin_z", Value::Number(0.8));
        fixture.refer(zone, "illuminance_map", map);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let records = ctx.records();
        let output = records
            .of_type(RecordType::OutputIlluminanceMap)
            .next()
            .expect("map is written");
        assert_eq!(
            output.get(output_illuminance_map::Y_MAXIMUM_COORDINATE),
            Some(&FieldValue::Number(6.0))
        );
        assert_eq!(
            output.get(output_illuminance_map::NUMBER_OF_X_GRID_POINTS),
            Some(&FieldValue::Integer(2))
        );

        let point = records
            .of_type(RecordType::DaylightingReferencePoint)
            .next()
            .expect("point is written");
        assert_eq!(point.name(), "Core Daylighting Reference Point");
        assert_eq!(
            point.get(daylighting_reference_point::X_COORDINATE),
            Some(&FieldValue::Number(2.0))
        );
        assert_eq!(
            point.get(daylighting_reference_point::Y_COORDINATE),
            Some(&FieldValue::Number(3.0))
        );

        let controls = records
            .of_type(RecordType::DaylightingControls)
            .next()
            .expect("controls are written");
        assert_eq!(
            controls.groups(),
            &[vec![
                "Core Daylighting Reference Point".to_string(),
                "0".to_string(),
                String::new()
            ]]
        );
    }

    #[test]
    fn unclaimed_control_is_warned() {
        let mut fixture = ModelFixture::new();
        let control = fixture.object(ObjectKind::DaylightingControl, Some("Spare"));
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        assert_eq!(translate(&mut ctx, control), Ok(None));
        assert_eq!(ctx.diagnostics().about(control).count(), 1);
    }
}
