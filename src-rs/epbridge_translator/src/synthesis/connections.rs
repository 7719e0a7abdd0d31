//! Equipment connections of a thermal zone.
//!
//! A zone with equipment gets an equipment list and two node lists. They
//! are emitted before any equipment is translated, and each piece of
//! equipment is appended as it is translated.

use epbridge_record::{
    FieldValue, Record, RecordId, RecordType,
    fields::{zone_hvac_equipment_connections, zone_hvac_equipment_list},
};

use crate::{context::TranslationContext, error::TranslationError};

/// One entry of a zone's equipment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentEntry {
    /// The record type of the equipment
    pub record_type: RecordType,
    /// The record name of the equipment
    pub name: String,
    /// The order in which the equipment meets cooling loads
    pub cooling_sequence: i64,
    /// The order in which the equipment meets heating and no-load
    pub heating_sequence: i64,
}

/// The aggregate records of one zone's equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneConnections {
    equipment_list: RecordId,
    inlet_nodes: RecordId,
    exhaust_nodes: RecordId,
}

impl ZoneConnections {
    /// Emits the equipment list, the node lists and the connections record
    /// for `zone_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be registered.
    pub fn create(
        ctx: &mut TranslationContext<'_>,
        zone_name: &str,
    ) -> Result<Self, TranslationError> {
        let list_name = ctx.free_name(
            RecordType::ZoneHVACEquipmentList,
            &format!("{zone_name} Equipment List"),
        );
        let mut list = Record::new(RecordType::ZoneHVACEquipmentList, list_name.as_str());
        list.set(
            zone_hvac_equipment_list::LOAD_DISTRIBUTION_SCHEME,
            FieldValue::text("SequentialLoad"),
        );
        let equipment_list = ctx.register(None, list)?;

        let inlet_name = ctx.free_name(RecordType::NodeList, &format!("{zone_name} Inlet Node List"));
        let inlet_nodes = ctx.register(None, Record::new(RecordType::NodeList, inlet_name.as_str()))?;

        let exhaust_name =
            ctx.free_name(RecordType::NodeList, &format!("{zone_name} Exhaust Node List"));
        let exhaust_nodes =
            ctx.register(None, Record::new(RecordType::NodeList, exhaust_name.as_str()))?;

        let connections_name = ctx.free_name(
            RecordType::ZoneHVACEquipmentConnections,
            &format!("{zone_name} Equipment Connections"),
        );
        let mut connections = Record::new(RecordType::ZoneHVACEquipmentConnections, connections_name);
        connections.set(
            zone_hvac_equipment_connections::ZONE_NAME,
            FieldValue::reference(zone_name),
        );
        connections.set(
            zone_hvac_equipment_connections::ZONE_CONDITIONING_EQUIPMENT_LIST_NAME,
            FieldValue::reference(list_name),
        );
        connections.set(
            zone_hvac_equipment_connections::ZONE_AIR_INLET_NODE_OR_NODELIST_NAME,
            FieldValue::reference(inlet_name),
        );
        connections.set(
            zone_hvac_equipment_connections::ZONE_AIR_EXHAUST_NODE_OR_NODELIST_NAME,
            FieldValue::reference(exhaust_name),
        );
        connections.set(
            zone_hvac_equipment_connections::ZONE_AIR_NODE_NAME,
            FieldValue::text(format!("{zone_name} Zone Air Node")),
        );
        connections.set(
            zone_hvac_equipment_connections::ZONE_RETURN_AIR_NODE_OR_NODELIST_NAME,
            FieldValue::text(format!("{zone_name} Return Air Node")),
        );
        ctx.register(None, connections)?;

        Ok(Self {
            equipment_list,
            inlet_nodes,
            exhaust_nodes,
        })
    }

    /// Returns how many pieces of equipment are listed so far.
    #[must_use]
    pub fn equipment_count(&self, ctx: &TranslationContext<'_>) -> usize {
        ctx.record(self.equipment_list)
            .map_or(0, |list| list.groups().len())
    }

    /// Appends a piece of equipment to the equipment list.
    pub fn add_equipment(&self, ctx: &mut TranslationContext<'_>, entry: EquipmentEntry) {
        ctx.patch(self.equipment_list, |list| {
            list.push_group([
                entry.record_type.idd_name().to_string(),
                entry.name,
                entry.cooling_sequence.to_string(),
                entry.heating_sequence.to_string(),
            ]);
        });
    }

    /// Appends a node that supplies air to the zone.
    pub fn add_inlet_node(&self, ctx: &mut TranslationContext<'_>, node: &str) {
        ctx.patch(self.inlet_nodes, |list| list.push_group([node]));
    }

    /// Appends a node that draws air from the zone.
    pub fn add_exhaust_node(&self, ctx: &mut TranslationContext<'_>, node: &str) {
        ctx.patch(self.exhaust_nodes, |list| list.push_group([node]));
    }
}
