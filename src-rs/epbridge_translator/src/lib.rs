//! Forward translation of epbridge source models into flat records.
//!
//! [`translate_model`] walks a [`SourceModel`] and produces a
//! [`RecordCollection`] for the simulation engine, along with the
//! diagnostics raised on the way. Each source object is translated at most
//! once. References are resolved by translating their target first, and
//! records that no single object asks for (ventilation, equipment lists,
//! node lists, the always-on schedule) are synthesized along the way.
//!
//! ```ignore
//! let translation = translate_model(&model, TranslatorOptions::new())?;
//! for record in translation.records.records() {
//!     println!("{}: {}", record.record_type(), record.name());
//! }
//! ```

use epbridge_model::SourceModel;
use epbridge_record::RecordCollection;

mod context;
mod diagnostics;
mod dispatch;
mod error;
mod options;
mod resolve;
mod synthesis;
mod translator;

#[cfg(test)]
mod test;

pub use context::ALWAYS_ON_SCHEDULE;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{TranslationAborted, TranslationError};
pub use options::TranslatorOptions;
pub use synthesis::apportion::{
    FlowRates, OutdoorAirCoefficients, OutdoorAirMethod, SpaceQuantities, apportion,
};

use context::TranslationContext;

/// The outcome of a completed translation run.
#[derive(Debug, Clone)]
pub struct Translation {
    /// The emitted records, in emission order
    pub records: RecordCollection,
    /// Everything reported about the source model during the run
    pub diagnostics: Diagnostics,
}

/// Translates a source model into records.
///
/// # Errors
///
/// Returns [`TranslationAborted`] if the model violates a structural
/// invariant, such as a thermal zone with two spaces or two `Building`
/// objects. The diagnostics raised before the error are part of it.
pub fn translate_model(
    model: &SourceModel,
    options: TranslatorOptions,
) -> Result<Translation, TranslationAborted> {
    tracing::debug!(
        objects = model.len(),
        exclude_space_translation = options.exclude_space_translation(),
        "Starting translation"
    );

    let mut ctx = TranslationContext::new(model, options);

    match translator::run(&mut ctx) {
        Ok(()) => {
            let (records, diagnostics) = ctx.finish();
            tracing::debug!(
                records = records.len(),
                diagnostics = diagnostics.len(),
                "Finished translation"
            );
            Ok(Translation {
                records,
                diagnostics,
            })
        }
        Err(error) => {
            tracing::error!(%error, "Translation aborted");
            Err(TranslationAborted {
                error,
                diagnostics: ctx.into_diagnostics(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_references_resolve;
    use epbridge_model::ObjectKind;
    use epbridge_parser::parse_model;
    use epbridge_record::{
        FieldValue, Record, RecordType,
        fields::{
            daylighting_controls, people, zone_control_thermostat,
            zone_hvac_baseboard_convective_electric, zone_ventilation_design_flow_rate,
        },
    };

    const OFFICE: &str = r#"
        Building "HQ" { north_axis = 15 }
        Timestep { number_of_timesteps_per_hour = 6 }
        DesignDay "Winter" { }

        ScheduleTypeLimits "Fraction" { lower_limit = 0 upper_limit = 1 }
        ScheduleConstant "Occupancy" {
            value = 1
            schedule_type_limits = @"Fraction"
        }
        ScheduleConstant "Heating Setpoint" { value = 20 }
        ScheduleConstant "Cooling Setpoint" { value = 26 }

        ThermostatSetpointDualSetpoint "Office Thermostat" {
            heating_setpoint_schedule = @"Heating Setpoint"
            cooling_setpoint_schedule = @"Cooling Setpoint"
        }

        DesignSpecificationOutdoorAir "Office OA" {
            outdoor_air_method = "Sum"
            outdoor_air_flow_per_person = 0.008
            outdoor_air_flow_per_floor_area = 0.0003
        }

        SpaceType "Open Office" {
            People "Office Occupants" {
                people_per_floor_area = 0.05
                number_of_people_schedule = @"Occupancy"
            }
            Lights "Office Lights" { watts_per_floor_area = 9 }
        }

        ThermalZone "Core" {
            thermostat = @"Office Thermostat"
            primary_daylighting_control = @"Core Sensor"
            Space "Core Office" {
                floor_area = 200
                space_type = @"Open Office"
                design_specification_outdoor_air = @"Office OA"
                DaylightingControl "Core Sensor" { position_x = 5 position_y = 5 position_z = 0.8 }
            }
            ZoneHVACBaseboardConvectiveElectric "Core Baseboard" { }
            ZoneHVACUnitHeater "Core Heater" {
                supply_air_fan = @"Core Heater Fan"
                heating_coil = @"Core Heater Coil"
            }
        }

        ThermalZone "Perimeter" {
            use_ideal_air_loads = true
            Space "Perimeter Office" {
                floor_area = 80
                space_type = @"Open Office"
                design_specification_outdoor_air = @"Office OA"
            }
        }

        FanConstantVolume "Core Heater Fan" { }
        CoilHeatingElectric "Core Heater Coil" { }
    "#;

    fn translate_text(text: &str) -> Result<Translation, TranslationAborted> {
        let model = parse_model(text, None).expect("model description is valid");
        translate_model(&model, TranslatorOptions::new())
    }

    fn summary(records: &RecordCollection) -> Vec<(String, String, Record)> {
        records
            .records()
            .map(|record| {
                (
                    record.record_type().idd_name().to_string(),
                    record.name().to_string(),
                    record.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn office_translates_without_dangling_references() {
        let translation = translate_text(OFFICE).expect("translation completes");

        assert_references_resolve(&translation.records);
        assert!(
            translation
                .diagnostics
                .with_severity(Severity::Warning)
                .next()
                .is_none(),
            "unexpected warnings: {:?}",
            translation.diagnostics
        );
        assert_eq!(
            translation.records.of_type(RecordType::Zone).count(),
            2
        );
        assert_eq!(
            translation
                .records
                .of_type(RecordType::ZoneHVACEquipmentList)
                .count(),
            1
        );
    }

    #[test]
    fn translation_is_idempotent() {
        let model = parse_model(OFFICE, None).expect("model description is valid");

        let first = translate_model(&model, TranslatorOptions::new()).expect("translation completes");
        let second = translate_model(&model, TranslatorOptions::new()).expect("translation completes");

        assert_eq!(summary(&first.records), summary(&second.records));
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn declaration_order_does_not_change_output() {
        let forward = r#"
            ThermalZone "Core" {
                Space "Office" { floor_area = 50 }
                ZoneHVACBaseboardConvectiveElectric "B Heater" { }
                ZoneHVACBaseboardConvectiveElectric "A Heater" { }
            }
            ThermalZone "Annex" { Space "Store" { floor_area = 10 } }
            ScheduleConstant "Z" { value = 1 }
            ScheduleConstant "Y" { value = 0 }
        "#;
        let backward = r#"
            ScheduleConstant "Y" { value = 0 }
            ScheduleConstant "Z" { value = 1 }
            ThermalZone "Annex" { Space "Store" { floor_area = 10 } }
            ThermalZone "Core" {
                ZoneHVACBaseboardConvectiveElectric "A Heater" { }
                ZoneHVACBaseboardConvectiveElectric "B Heater" { }
                Space "Office" { floor_area = 50 }
            }
        "#;

        let forward = translate_text(forward).expect("translation completes");
        let backward = translate_text(backward).expect("translation completes");

        assert_eq!(summary(&forward.records), summary(&backward.records));
    }

    #[test]
    fn autosize_sentinel_only_when_autosized() {
        let translation = translate_text(
            r#"
            ThermalZone "Core" {
                ZoneHVACBaseboardConvectiveElectric "Sized" { heating_design_capacity = 1500 }
                ZoneHVACBaseboardConvectiveElectric "Unsized" { }
                ZoneHVACBaseboardConvectiveElectric "Marked" { heating_design_capacity = autosize }
            }
            "#,
        )
        .expect("translation completes");

        let capacity = |name: &str| {
            translation
                .records
                .find(RecordType::ZoneHVACBaseboardConvectiveElectric, name)
                .and_then(|id| translation.records.get(id))
                .and_then(|record| {
                    record
                        .get(zone_hvac_baseboard_convective_electric::HEATING_DESIGN_CAPACITY)
                        .cloned()
                })
        };

        assert_eq!(capacity("Sized"), Some(FieldValue::Number(1500.0)));
        assert_eq!(capacity("Unsized"), Some(FieldValue::Autosize));
        assert_eq!(capacity("Marked"), Some(FieldValue::Autosize));
    }

    #[test]
    fn ventilation_per_person_follows_occupancy_schedule() {
        let translation = translate_text(
            r#"
            ScheduleConstant "S" { value = 1 }
            DesignSpecificationOutdoorAir "OA" {
                outdoor_air_method = "Max"
                outdoor_air_flow_per_person = 0.01
            }
            ThermalZone "Zone 1" {
                Space "Room" {
                    floor_area = 30
                    design_specification_outdoor_air = @"OA"
                    People "Occupants" {
                        number_of_people = 3
                        number_of_people_schedule = @"S"
                    }
                }
            }
            "#,
        )
        .expect("translation completes");

        let ventilation: Vec<_> = translation
            .records
            .of_type(RecordType::ZoneVentilationDesignFlowRate)
            .collect();
        let [only] = ventilation.as_slice() else {
            panic!("expected one ventilation record, found {}", ventilation.len());
        };
        assert_eq!(only.name(), "Zone 1 Ventilation per Person");
        assert_eq!(
            only.get_string(zone_ventilation_design_flow_rate::SCHEDULE_NAME),
            Some("S")
        );
        assert_eq!(
            only.get(zone_ventilation_design_flow_rate::FLOW_RATE_PER_PERSON),
            Some(&FieldValue::Number(0.01))
        );
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn unsupported_schedule_falls_back_to_always_on() {
        let translation = translate_text(
            r#"
            ScheduleFile "Occupancy File" { file_path = "occupancy.csv" }
            ThermalZone "Core" {
                ZoneHVACBaseboardConvectiveElectric "Heater" {
                    availability_schedule = @"Occupancy File"
                }
            }
            "#,
        )
        .expect("translation completes");

        let heater = translation
            .records
            .of_type(RecordType::ZoneHVACBaseboardConvectiveElectric)
            .next()
            .expect("baseboard is written");
        assert_eq!(
            heater.get_string(zone_hvac_baseboard_convective_electric::AVAILABILITY_SCHEDULE_NAME),
            Some(ALWAYS_ON_SCHEDULE)
        );
        let mentions: Vec<_> = translation
            .diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.message.contains("Occupancy File"))
            .collect();
        assert_eq!(mentions.len(), 1);
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn unsupported_reference_target_is_left_out() {
        let translation = translate_text(
            r#"
            ScheduleFile "F" { file_path = "occupancy.csv" }
            ThermalZone "Core" {
                Space "Office" {
                    floor_area = 20
                    People "Staff" {
                        number_of_people = 2
                        number_of_people_schedule = @"F"
                    }
                }
            }
            "#,
        )
        .expect("translation completes");

        let staff = translation
            .records
            .find(RecordType::People, "Staff")
            .and_then(|id| translation.records.get(id))
            .expect("people are written");
        assert_eq!(staff.get(people::NUMBER_OF_PEOPLE_SCHEDULE_NAME), None);
        let messages: Vec<_> = translation
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.message.as_str())
            .collect();
        assert_eq!(messages, vec!["ScheduleFile 'F' is not translated"]);
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn always_on_schedule_avoids_model_names() {
        let translation = translate_text(
            r#"
            ScheduleConstant "Always On Discrete" { value = 1 }
            ThermalZone "Core" {
                Space "Office" { floor_area = 20 }
                ZoneHVACBaseboardConvectiveElectric "Heater" { }
            }
            "#,
        )
        .expect("translation completes");

        let heater = translation
            .records
            .of_type(RecordType::ZoneHVACBaseboardConvectiveElectric)
            .next()
            .expect("baseboard is written");
        assert_eq!(
            heater.get_string(zone_hvac_baseboard_convective_electric::AVAILABILITY_SCHEDULE_NAME),
            Some("Always On Discrete 2")
        );
        assert!(
            translation
                .records
                .find(RecordType::ScheduleConstant, "Always On Discrete")
                .is_some()
        );
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn unnamed_zone_skips_names_already_in_the_model() {
        let translation = translate_text(
            r#"
            ThermalZone "ThermalZone 1" { Space "Office" { floor_area = 20 } }
            ThermalZone { Space "Store" { floor_area = 10 } }
            "#,
        )
        .expect("translation completes");

        let mut zones: Vec<_> = translation
            .records
            .of_type(RecordType::Zone)
            .map(Record::name)
            .collect();
        zones.sort_unstable();
        assert_eq!(zones, vec!["ThermalZone 1", "ThermalZone 2"]);
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn thermostat_schedule_avoids_model_names() {
        let translation = translate_text(
            r#"
            ScheduleConstant "Core Thermostat Schedule" { value = 1 }
            ThermostatSetpointDualSetpoint "T" { }
            ThermalZone "Core" {
                thermostat = @"T"
                Space "Office" { floor_area = 20 }
            }
            "#,
        )
        .expect("translation completes");

        let control = translation
            .records
            .of_type(RecordType::ZoneControlThermostat)
            .next()
            .expect("thermostat control is written");
        assert_eq!(
            control.get_string(zone_control_thermostat::CONTROL_TYPE_SCHEDULE_NAME),
            Some("Core Thermostat Schedule 2")
        );
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn excessive_daylighting_fractions_are_corrected() {
        let translation = translate_text(
            r#"
            ThermalZone "Core" {
                primary_daylighting_control = @"North Sensor"
                secondary_daylighting_control = @"South Sensor"
                fraction_controlled_by_primary_daylighting = 0.8
                fraction_controlled_by_secondary_daylighting = 0.5
                Space "Office" {
                    DaylightingControl "North Sensor" { }
                    DaylightingControl "South Sensor" { }
                }
            }
            "#,
        )
        .expect("translation completes");

        let controls = translation
            .records
            .of_type(RecordType::DaylightingControls)
            .next()
            .expect("controls are written");
        let fractions: Vec<f64> = controls
            .groups()
            .iter()
            .map(|group| group[1].parse().expect("fraction is a number"))
            .collect();
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert_eq!(
            controls.get_string(daylighting_controls::ZONE_OR_SPACE_NAME),
            Some("Core")
        );
        assert_eq!(
            translation.diagnostics.with_severity(Severity::Warning).count(),
            1
        );
    }

    #[test]
    fn unit_heater_without_coil_is_dropped() {
        let translation = translate_text(
            r#"
            FanConstantVolume "Fan" { }
            ThermalZone "Core" {
                ZoneHVACUnitHeater "Heater" { supply_air_fan = @"Fan" }
            }
            "#,
        )
        .expect("translation completes");

        assert_eq!(
            translation
                .records
                .of_type(RecordType::ZoneHVACUnitHeater)
                .count(),
            0
        );
        assert_references_resolve(&translation.records);
    }

    #[test]
    fn zone_with_two_spaces_aborts() {
        let aborted = translate_text(
            r#"
            ThermalZone "Core" {
                Space "A" { }
                Space "B" { }
            }
            "#,
        )
        .expect_err("translation aborts");

        assert!(matches!(
            aborted.error,
            TranslationError::MultipleOwnedChildren {
                collection: "spaces",
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn second_building_aborts() {
        let aborted = translate_text(r#"Building "A" { } Building "B" { }"#)
            .expect_err("translation aborts");

        assert_eq!(
            aborted.error,
            TranslationError::MultipleUniqueObjects {
                kind: ObjectKind::Building,
                count: 2
            }
        );
    }

    #[test]
    fn exclude_space_translation_writes_zone_lists() {
        let model = parse_model(OFFICE, None).expect("model description is valid");
        let options = TranslatorOptions::new().with_exclude_space_translation(true);

        let translation = translate_model(&model, options).expect("translation completes");

        assert_eq!(translation.records.of_type(RecordType::Space).count(), 0);
        assert_eq!(translation.records.of_type(RecordType::SpaceList).count(), 0);
        let list = translation
            .records
            .find(RecordType::ZoneList, "Open Office")
            .and_then(|id| translation.records.get(id))
            .expect("space type becomes a zone list");
        assert_eq!(
            list.groups(),
            &[vec!["Core".to_string()], vec!["Perimeter".to_string()]]
        );
        assert_references_resolve(&translation.records);
    }
}
