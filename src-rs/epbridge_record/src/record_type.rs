//! Record type tags.

use std::fmt;

use crate::fields;

/// The type of an output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(
    missing_docs,
    reason = "variants are named after the object types they stand for"
)]
pub enum RecordType {
    Version,
    SimulationControl,
    Timestep,
    Building,
    SizingPeriodDesignDay,
    ScheduleTypeLimits,
    ScheduleConstant,
    ScheduleCompact,
    Zone,
    Space,
    SpaceList,
    ZoneList,
    People,
    Lights,
    DesignSpecificationOutdoorAir,
    DesignSpecificationOutdoorAirSpaceList,
    SizingZone,
    ZoneControlThermostat,
    ThermostatSetpointDualSetpoint,
    DaylightingControls,
    DaylightingReferencePoint,
    OutputIlluminanceMap,
    ZoneVentilationDesignFlowRate,
    HVACTemplateZoneIdealLoadsAirSystem,
    ZoneHVACEquipmentConnections,
    ZoneHVACEquipmentList,
    NodeList,
    ZoneHVACBaseboardConvectiveElectric,
    ZoneHVACUnitHeater,
    FanConstantVolume,
    CoilHeatingElectric,
}

impl RecordType {
    /// Returns the object type name as the simulation engine spells it.
    #[must_use]
    pub const fn idd_name(self) -> &'static str {
        match self {
            Self::Version => "Version",
            Self::SimulationControl => "SimulationControl",
            Self::Timestep => "Timestep",
            Self::Building => "Building",
            Self::SizingPeriodDesignDay => "SizingPeriod:DesignDay",
            Self::ScheduleTypeLimits => "ScheduleTypeLimits",
            Self::ScheduleConstant => "Schedule:Constant",
            Self::ScheduleCompact => "Schedule:Compact",
            Self::Zone => "Zone",
            Self::Space => "Space",
            Self::SpaceList => "SpaceList",
            Self::ZoneList => "ZoneList",
            Self::People => "People",
            Self::Lights => "Lights",
            Self::DesignSpecificationOutdoorAir => "DesignSpecification:OutdoorAir",
            Self::DesignSpecificationOutdoorAirSpaceList => {
                "DesignSpecification:OutdoorAir:SpaceList"
            }
            Self::SizingZone => "Sizing:Zone",
            Self::ZoneControlThermostat => "ZoneControl:Thermostat",
            Self::ThermostatSetpointDualSetpoint => "ThermostatSetpoint:DualSetpoint",
            Self::DaylightingControls => "Daylighting:Controls",
            Self::DaylightingReferencePoint => "Daylighting:ReferencePoint",
            Self::OutputIlluminanceMap => "Output:IlluminanceMap",
            Self::ZoneVentilationDesignFlowRate => "ZoneVentilation:DesignFlowRate",
            Self::HVACTemplateZoneIdealLoadsAirSystem => "HVACTemplate:Zone:IdealLoadsAirSystem",
            Self::ZoneHVACEquipmentConnections => "ZoneHVAC:EquipmentConnections",
            Self::ZoneHVACEquipmentList => "ZoneHVAC:EquipmentList",
            Self::NodeList => "NodeList",
            Self::ZoneHVACBaseboardConvectiveElectric => "ZoneHVAC:Baseboard:Convective:Electric",
            Self::ZoneHVACUnitHeater => "ZoneHVAC:UnitHeater",
            Self::FanConstantVolume => "Fan:ConstantVolume",
            Self::CoilHeatingElectric => "Coil:Heating:Electric",
        }
    }

    /// Returns the display names of the field slots, in slot order.
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Version => fields::version::NAMES,
            Self::SimulationControl => fields::simulation_control::NAMES,
            Self::Timestep => fields::timestep::NAMES,
            Self::Building => fields::building::NAMES,
            Self::SizingPeriodDesignDay => fields::sizing_period_design_day::NAMES,
            Self::ScheduleTypeLimits => fields::schedule_type_limits::NAMES,
            Self::ScheduleConstant => fields::schedule_constant::NAMES,
            Self::ScheduleCompact => fields::schedule_compact::NAMES,
            Self::Zone => fields::zone::NAMES,
            Self::Space => fields::space::NAMES,
            Self::SpaceList => fields::space_list::NAMES,
            Self::ZoneList => fields::zone_list::NAMES,
            Self::People => fields::people::NAMES,
            Self::Lights => fields::lights::NAMES,
            Self::DesignSpecificationOutdoorAir => fields::design_specification_outdoor_air::NAMES,
            Self::DesignSpecificationOutdoorAirSpaceList => {
                fields::design_specification_outdoor_air_space_list::NAMES
            }
            Self::SizingZone => fields::sizing_zone::NAMES,
            Self::ZoneControlThermostat => fields::zone_control_thermostat::NAMES,
            Self::ThermostatSetpointDualSetpoint => {
                fields::thermostat_setpoint_dual_setpoint::NAMES
            }
            Self::DaylightingControls => fields::daylighting_controls::NAMES,
            Self::DaylightingReferencePoint => fields::daylighting_reference_point::NAMES,
            Self::OutputIlluminanceMap => fields::output_illuminance_map::NAMES,
            Self::ZoneVentilationDesignFlowRate => {
                fields::zone_ventilation_design_flow_rate::NAMES
            }
            Self::HVACTemplateZoneIdealLoadsAirSystem => {
                fields::hvac_template_zone_ideal_loads_air_system::NAMES
            }
            Self::ZoneHVACEquipmentConnections => fields::zone_hvac_equipment_connections::NAMES,
            Self::ZoneHVACEquipmentList => fields::zone_hvac_equipment_list::NAMES,
            Self::NodeList => fields::node_list::NAMES,
            Self::ZoneHVACBaseboardConvectiveElectric => {
                fields::zone_hvac_baseboard_convective_electric::NAMES
            }
            Self::ZoneHVACUnitHeater => fields::zone_hvac_unit_heater::NAMES,
            Self::FanConstantVolume => fields::fan_constant_volume::NAMES,
            Self::CoilHeatingElectric => fields::coil_heating_electric::NAMES,
        }
    }

    /// Returns the member names of the repeatable group, or an empty slice
    /// if the type has no groups.
    #[must_use]
    pub const fn group_field_names(self) -> &'static [&'static str] {
        match self {
            Self::ScheduleCompact => fields::schedule_compact::GROUP,
            Self::SpaceList => fields::space_list::GROUP,
            Self::ZoneList => fields::zone_list::GROUP,
            Self::DesignSpecificationOutdoorAirSpaceList => {
                fields::design_specification_outdoor_air_space_list::GROUP
            }
            Self::ZoneControlThermostat => fields::zone_control_thermostat::GROUP,
            Self::DaylightingControls => fields::daylighting_controls::GROUP,
            Self::ZoneHVACEquipmentList => fields::zone_hvac_equipment_list::GROUP,
            Self::NodeList => fields::node_list::GROUP,
            Self::Version
            | Self::SimulationControl
            | Self::Timestep
            | Self::Building
            | Self::SizingPeriodDesignDay
            | Self::ScheduleTypeLimits
            | Self::ScheduleConstant
            | Self::Zone
            | Self::Space
            | Self::People
            | Self::Lights
            | Self::DesignSpecificationOutdoorAir
            | Self::SizingZone
            | Self::ThermostatSetpointDualSetpoint
            | Self::DaylightingReferencePoint
            | Self::OutputIlluminanceMap
            | Self::ZoneVentilationDesignFlowRate
            | Self::HVACTemplateZoneIdealLoadsAirSystem
            | Self::ZoneHVACEquipmentConnections
            | Self::ZoneHVACBaseboardConvectiveElectric
            | Self::ZoneHVACUnitHeater
            | Self::FanConstantVolume
            | Self::CoilHeatingElectric => &[],
        }
    }

    /// Returns false for types whose records carry no name of their own.
    ///
    /// These are either unique in a file or keyed by the zone they describe.
    /// Their record name is still used for uniqueness but is not written as
    /// a field.
    #[must_use]
    pub const fn has_name_field(self) -> bool {
        !matches!(
            self,
            Self::Version
                | Self::SimulationControl
                | Self::Timestep
                | Self::SizingZone
                | Self::HVACTemplateZoneIdealLoadsAirSystem
                | Self::ZoneHVACEquipmentConnections
        )
    }

    /// Returns the namespace that record names of this type must be unique
    /// within.
    ///
    /// Schedules of every type share one namespace since any schedule field
    /// may refer to any of them.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        if matches!(self, Self::ScheduleConstant | Self::ScheduleCompact) {
            "Schedules"
        } else {
            self.idd_name()
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.idd_name())
    }
}
