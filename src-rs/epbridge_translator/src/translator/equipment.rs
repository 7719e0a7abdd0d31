//! Zone HVAC equipment and its components.
//!
//! Equipment is translated through the zone that owns it. The zone appends
//! each piece to its equipment list in name order, so the position in the
//! list is the default cooling and heating sequence.

use epbridge_model::{ObjectId, SourceObject};
use epbridge_record::{
    FieldValue, Record, RecordId, RecordType,
    fields::{
        coil_heating_electric, fan_constant_volume, zone_hvac_baseboard_convective_electric,
        zone_hvac_unit_heater,
    },
};

use crate::{
    context::TranslationContext,
    dispatch::{self, Translated, translate_schedule_or_always_on},
    error::TranslationError,
    resolve::{self, FieldPolicy, FieldWriter},
    synthesis::connections::{EquipmentEntry, ZoneConnections},
};

/// Emits the zone's equipment connections and translates its equipment
/// into them.
///
/// # Errors
///
/// Returns an error if a piece of equipment fails to translate.
pub fn connect_zone_equipment(
    ctx: &mut TranslationContext<'_>,
    zone: &SourceObject,
    zone_name: &str,
) -> Result<(), TranslationError> {
    let connections = ZoneConnections::create(ctx, zone_name)?;

    for equipment in ctx.sorted(zone.children("equipment")) {
        let Some(record) = dispatch::translate(ctx, equipment.id())? else {
            continue;
        };
        let Some(record) = ctx.record(record) else {
            continue;
        };

        let record_type = record.record_type();
        let name = record.name().to_string();
        let nodes = (record_type == RecordType::ZoneHVACUnitHeater).then(|| {
            (
                record
                    .get_string(zone_hvac_unit_heater::AIR_INLET_NODE_NAME)
                    .map(str::to_string),
                record
                    .get_string(zone_hvac_unit_heater::AIR_OUTLET_NODE_NAME)
                    .map(str::to_string),
            )
        });

        let position = i64::try_from(connections.equipment_count(ctx)).map_or(i64::MAX, |count| count + 1);
        let priority = |field| {
            resolve::integer(equipment, field, FieldPolicy::Always)
                .and_then(|value| match value {
                    FieldValue::Integer(priority) => Some(priority),
                    FieldValue::Number(_)
                    | FieldValue::Text(_)
                    | FieldValue::Reference(_)
                    | FieldValue::Autosize => None,
                })
                .unwrap_or(position)
        };

        connections.add_equipment(
            ctx,
            EquipmentEntry {
                record_type,
                name,
                cooling_sequence: priority("cooling_priority"),
                heating_sequence: priority("heating_priority"),
            },
        );

        if let Some((inlet, outlet)) = nodes {
            if let Some(inlet) = inlet {
                connections.add_exhaust_node(ctx, &inlet);
            }
            if let Some(outlet) = outlet {
                connections.add_inlet_node(ctx, &outlet);
            }
        }
    }

    Ok(())
}

/// Emits `ZoneHVAC:Baseboard:Convective:Electric`.
pub fn translate_baseboard(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    use zone_hvac_baseboard_convective_electric as fields;

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::ZoneHVACBaseboardConvectiveElectric, name);
    record.set(
        fields::HEATING_DESIGN_CAPACITY_METHOD,
        FieldValue::text("HeatingDesignCapacity"),
    );
    FieldWriter::new(object, &mut record)
        .number(
            fields::HEATING_DESIGN_CAPACITY,
            "heating_design_capacity",
            FieldPolicy::Autosize,
        )
        .number(fields::EFFICIENCY, "efficiency", FieldPolicy::Always);
    let id = ctx.register(Some(object.id()), record)?;

    let schedule = translate_schedule_or_always_on(ctx, object, "availability_schedule")?;
    ctx.patch(id, |record| {
        record.set(fields::AVAILABILITY_SCHEDULE_NAME, FieldValue::reference(schedule));
    });

    Ok(Some(id))
}

/// Emits `ZoneHVAC:UnitHeater` and wires its fan and coil in series.
///
/// The fan and the coil are mandatory and belong to one unit heater. Without
/// both, or when an earlier unit heater already wired one of them, the unit
/// heater is withdrawn and the zone does not list it.
pub fn translate_unit_heater(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    use zone_hvac_unit_heater as fields;

    let name = ctx.name_of(object);
    let inlet_node = format!("{name} Inlet Node");
    let outlet_node = format!("{name} Outlet Node");
    let fan_outlet_node = format!("{name} Fan Outlet Node");

    let mut record = Record::new(RecordType::ZoneHVACUnitHeater, name.as_str());
    record.set(fields::AIR_INLET_NODE_NAME, FieldValue::text(inlet_node.as_str()));
    record.set(fields::AIR_OUTLET_NODE_NAME, FieldValue::text(outlet_node.as_str()));
    record.set(
        fields::SUPPLY_AIR_FAN_OBJECT_TYPE,
        FieldValue::text(RecordType::FanConstantVolume.idd_name()),
    );
    record.set(
        fields::HEATING_COIL_OBJECT_TYPE,
        FieldValue::text(RecordType::CoilHeatingElectric.idd_name()),
    );
    FieldWriter::new(object, &mut record)
        .number(
            fields::MAXIMUM_SUPPLY_AIR_FLOW_RATE,
            "maximum_supply_air_flow_rate",
            FieldPolicy::Autosize,
        )
        .text(fields::FAN_CONTROL_TYPE, "fan_control_type", FieldPolicy::Always);
    let id = ctx.register(Some(object.id()), record)?;

    let fan = component(ctx, object.reference("supply_air_fan"))?;
    let coil = component(ctx, object.reference("heating_coil"))?;
    let (Some((fan, fan_name)), Some((coil, coil_name))) = (fan, coil) else {
        ctx.withdraw(object.id(), id);
        ctx.warn(
            object.id(),
            format!(
                "{} needs a supply air fan and a heating coil and will not be translated",
                object.brief_description()
            ),
        );
        return Ok(None);
    };

    let wired = [
        (fan, fan_constant_volume::AIR_INLET_NODE_NAME),
        (coil, coil_heating_electric::AIR_INLET_NODE_NAME),
    ]
    .into_iter()
    .any(|(component, slot)| ctx.record(component).is_some_and(|record| record.get(slot).is_some()));
    if wired {
        ctx.withdraw(object.id(), id);
        ctx.warn(
            object.id(),
            format!(
                "{} shares its fan or heating coil with another unit heater and will not be translated",
                object.brief_description()
            ),
        );
        return Ok(None);
    }

    let schedule = translate_schedule_or_always_on(ctx, object, "availability_schedule")?;
    ctx.patch(id, |record| {
        record.set(fields::AVAILABILITY_SCHEDULE_NAME, FieldValue::reference(schedule));
        record.set(fields::SUPPLY_AIR_FAN_NAME, FieldValue::reference(fan_name));
        record.set(fields::HEATING_COIL_NAME, FieldValue::reference(coil_name));
    });

    ctx.patch(fan, |fan| {
        fan.set(fan_constant_volume::AIR_INLET_NODE_NAME, FieldValue::text(inlet_node));
        fan.set(
            fan_constant_volume::AIR_OUTLET_NODE_NAME,
            FieldValue::text(fan_outlet_node.as_str()),
        );
    });
    ctx.patch(coil, |coil| {
        coil.set(coil_heating_electric::AIR_INLET_NODE_NAME, FieldValue::text(fan_outlet_node));
        coil.set(coil_heating_electric::AIR_OUTLET_NODE_NAME, FieldValue::text(outlet_node));
    });

    Ok(Some(id))
}

fn component(
    ctx: &mut TranslationContext<'_>,
    target: Option<ObjectId>,
) -> Result<Option<(RecordId, String)>, TranslationError> {
    let Some(target) = target else {
        return Ok(None);
    };
    let record = dispatch::translate(ctx, target)?;
    Ok(record.and_then(|record| Some((record, ctx.record_name(record)?))))
}

/// Emits `Fan:ConstantVolume`. Its nodes are set by the unit heater that
/// uses it.
pub fn translate_fan(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    use fan_constant_volume as fields;

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::FanConstantVolume, name);
    FieldWriter::new(object, &mut record)
        .number(
            fields::FAN_TOTAL_EFFICIENCY,
            "fan_total_efficiency",
            FieldPolicy::Always,
        )
        .number(fields::PRESSURE_RISE, "pressure_rise", FieldPolicy::Always)
        .number(
            fields::MAXIMUM_FLOW_RATE,
            "maximum_flow_rate",
            FieldPolicy::Autosize,
        )
        .number(fields::MOTOR_EFFICIENCY, "motor_efficiency", FieldPolicy::Always)
        .number(
            fields::MOTOR_IN_AIRSTREAM_FRACTION,
            "motor_in_airstream_fraction",
            FieldPolicy::Always,
        );
    let id = ctx.register(Some(object.id()), record)?;

    let schedule = translate_schedule_or_always_on(ctx, object, "availability_schedule")?;
    ctx.patch(id, |record| {
        record.set(fields::AVAILABILITY_SCHEDULE_NAME, FieldValue::reference(schedule));
    });

    Ok(Some(id))
}

/// Emits `Coil:Heating:Electric`. Its nodes are set by the unit heater
/// that uses it.
pub fn translate_coil(ctx: &mut TranslationContext<'_>, object: &SourceObject) -> Translated {
    use coil_heating_electric as fields;

    let name = ctx.name_of(object);
    let mut record = Record::new(RecordType::CoilHeatingElectric, name);
    FieldWriter::new(object, &mut record)
        .number(fields::EFFICIENCY, "efficiency", FieldPolicy::Always)
        .number(
            fields::NOMINAL_CAPACITY,
            "nominal_capacity",
            FieldPolicy::Autosize,
        );
    let id = ctx.register(Some(object.id()), record)?;

    let schedule = translate_schedule_or_always_on(ctx, object, "availability_schedule")?;
    ctx.patch(id, |record| {
        record.set(fields::AVAILABILITY_SCHEDULE_NAME, FieldValue::reference(schedule));
    });

    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::ALWAYS_ON_SCHEDULE, dispatch::translate, options::TranslatorOptions,
        test::ModelFixture,
    };
    use epbridge_model::{ObjectKind, Value};
    use epbridge_record::fields::zone_hvac_equipment_list;

    #[test]
    fn baseboard_autosizes_capacity() {
        use zone_hvac_baseboard_convective_electric as fields;

        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let baseboard = fixture.baseboard(zone, "Baseboard");
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        let record = translate(&mut ctx, baseboard)
            .expect("translation succeeds")
            .expect("baseboard is written");

        let record = ctx.record(record).expect("record exists");
        assert_eq!(
            record.get(fields::HEATING_DESIGN_CAPACITY),
            Some(&FieldValue::Autosize)
        );
        assert_eq!(
            record.get_string(fields::AVAILABILITY_SCHEDULE_NAME),
            Some(ALWAYS_ON_SCHEDULE)
        );
        assert_eq!(record.get(fields::EFFICIENCY), Some(&FieldValue::Number(1.0)));
    }

    #[test]
    fn unit_heater_wires_fan_and_coil() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let (heater, _, _) = fixture.unit_heater(zone, "UH");
        fixture.set(heater, "maximum_supply_air_flow_rate", Value::Number(0.5));
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let records = ctx.records();
        let heater = records
            .of_type(RecordType::ZoneHVACUnitHeater)
            .next()
            .expect("unit heater is written");
        assert_eq!(
            heater.get(zone_hvac_unit_heater::MAXIMUM_SUPPLY_AIR_FLOW_RATE),
            Some(&FieldValue::Number(0.5))
        );
        assert_eq!(
            heater.get_string(zone_hvac_unit_heater::SUPPLY_AIR_FAN_NAME),
            Some("UH Fan")
        );

        let fan = records
            .of_type(RecordType::FanConstantVolume)
            .next()
            .expect("fan is written");
        let coil = records
            .of_type(RecordType::CoilHeatingElectric)
            .next()
            .expect("coil is written");
        assert_eq!(
            fan.get_string(fan_constant_volume::AIR_INLET_NODE_NAME),
            Some("UH Inlet Node")
        );
        assert_eq!(
            fan.get_string(fan_constant_volume::AIR_OUTLET_NODE_NAME),
            coil.get_string(coil_heating_electric::AIR_INLET_NODE_NAME)
        );
        assert_eq!(
            coil.get_string(coil_heating_electric::AIR_OUTLET_NODE_NAME),
            Some("UH Outlet Node")
        );

        let inlets = records
            .find(RecordType::NodeList, "Core Inlet Node List")
            .and_then(|id| records.get(id))
            .expect("inlet node list is written");
        assert_eq!(inlets.groups(), &[vec!["UH Outlet Node".to_string()]]);
        let exhausts = records
            .find(RecordType::NodeList, "Core Exhaust Node List")
            .and_then(|id| records.get(id))
            .expect("exhaust node list is written");
        assert_eq!(exhausts.groups(), &[vec!["UH Inlet Node".to_string()]]);
    }

    #[test]
    fn unit_heater_without_coil_is_withdrawn() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let heater = fixture.child(zone, ObjectKind::ZoneHVACUnitHeater, Some("UH"));
        let fan = fixture.object(ObjectKind::FanConstantVolume, Some("UH Fan"));
        fixture.refer(heater, "supply_air_fan", fan);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let records = ctx.records();
        assert_eq!(records.of_type(RecordType::ZoneHVACUnitHeater).count(), 0);
        let list = records
            .of_type(RecordType::ZoneHVACEquipmentList)
            .next()
            .expect("equipment list is still written");
        assert!(list.groups().is_empty());
        assert_eq!(ctx.memoized(heater), Some(None));
        assert_eq!(ctx.diagnostics().about(heater).count(), 1);
    }

    #[test]
    fn fan_of_another_unit_heater_is_not_rewired() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let (_, fan, _) = fixture.unit_heater(zone, "H1");
        let second = fixture.child(zone, ObjectKind::ZoneHVACUnitHeater, Some("H2"));
        let coil = fixture.object(ObjectKind::CoilHeatingElectric, Some("H2 Coil"));
        fixture.refer(second, "supply_air_fan", fan);
        fixture.refer(second, "heating_coil", coil);
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let records = ctx.records();
        let heaters: Vec<_> = records
            .of_type(RecordType::ZoneHVACUnitHeater)
            .map(Record::name)
            .collect();
        assert_eq!(heaters, vec!["H1"]);

        let fan = records
            .of_type(RecordType::FanConstantVolume)
            .next()
            .expect("fan is written");
        assert_eq!(
            fan.get_string(fan_constant_volume::AIR_INLET_NODE_NAME),
            Some("H1 Inlet Node")
        );
        assert_eq!(
            fan.get_string(fan_constant_volume::AIR_OUTLET_NODE_NAME),
            Some("H1 Fan Outlet Node")
        );

        let list = records
            .of_type(RecordType::ZoneHVACEquipmentList)
            .next()
            .expect("equipment list is written");
        assert_eq!(list.groups().len(), 1);
        assert_eq!(ctx.memoized(second), Some(None));
        let messages: Vec<_> = ctx
            .diagnostics()
            .about(second)
            .map(|diagnostic| diagnostic.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "ZoneHVACUnitHeater 'H2' shares its fan or heating coil with another unit heater and will not be translated"
            ]
        );
    }

    #[test]
    fn sequences_follow_name_order_unless_prioritized() {
        let mut fixture = ModelFixture::new();
        let zone = fixture.zone("Core");
        let late = fixture.baseboard(zone, "b Baseboard");
        fixture.baseboard(zone, "A Baseboard");
        fixture.set(late, "heating_priority", Value::Number(7.0));
        let model = fixture.build();
        let mut ctx = TranslationContext::new(&model, TranslatorOptions::new());

        translate(&mut ctx, zone).expect("translation succeeds");

        let list = ctx
            .records()
            .of_type(RecordType::ZoneHVACEquipmentList)
            .next()
            .expect("equipment list is written");
        assert_eq!(
            list.get_string(zone_hvac_equipment_list::LOAD_DISTRIBUTION_SCHEME),
            Some("SequentialLoad")
        );
        let entries: Vec<_> = list
            .groups()
            .iter()
            .map(|group| (group[1].as_str(), group[2].as_str(), group[3].as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("A Baseboard", "1", "1"), ("b Baseboard", "2", "7")]
        );
    }
}
