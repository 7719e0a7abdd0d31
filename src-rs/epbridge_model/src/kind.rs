//! The closed set of source object kinds.

use std::fmt;

/// The type tag of a source object.
///
/// The set is closed: adding a kind means adding a schema entry and a
/// dispatch arm in the translator, and the compiler points at every match
/// that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    /// Building-wide settings (unique)
    Building,
    /// Simulation run switches (unique)
    SimulationControl,
    /// Number of timesteps per hour (unique)
    Timestep,
    /// A design day sizing period
    DesignDay,
    /// Limits shared by schedules
    ScheduleTypeLimits,
    /// A schedule with a single value all year
    ScheduleConstant,
    /// A schedule read from an external file
    ScheduleFile,
    /// A cost entry for life cycle costing
    LifeCycleCost,
    /// A thermal zone
    ThermalZone,
    /// A space inside a thermal zone
    Space,
    /// A reusable bundle of loads applied to spaces
    SpaceType,
    /// An occupancy definition
    People,
    /// A lighting load definition
    Lights,
    /// Outdoor air requirements for a space
    DesignSpecificationOutdoorAir,
    /// A thermostat with heating and cooling setpoint schedules
    ThermostatSetpointDualSetpoint,
    /// A daylighting sensor and its control settings
    DaylightingControl,
    /// A grid of illuminance reporting points
    IlluminanceMap,
    /// Zone sizing settings
    SizingZone,
    /// An electric convective baseboard heater
    ZoneHVACBaseboardConvectiveElectric,
    /// A unit heater made of a fan and a heating coil
    ZoneHVACUnitHeater,
    /// A constant volume fan
    FanConstantVolume,
    /// An electric heating coil
    CoilHeatingElectric,
    /// A user-defined zone ventilation object
    ZoneVentilationDesignFlowRate,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::Building,
        Self::SimulationControl,
        Self::Timestep,
        Self::DesignDay,
        Self::ScheduleTypeLimits,
        Self::ScheduleConstant,
        Self::ScheduleFile,
        Self::LifeCycleCost,
        Self::ThermalZone,
        Self::Space,
        Self::SpaceType,
        Self::People,
        Self::Lights,
        Self::DesignSpecificationOutdoorAir,
        Self::ThermostatSetpointDualSetpoint,
        Self::DaylightingControl,
        Self::IlluminanceMap,
        Self::SizingZone,
        Self::ZoneHVACBaseboardConvectiveElectric,
        Self::ZoneHVACUnitHeater,
        Self::FanConstantVolume,
        Self::CoilHeatingElectric,
        Self::ZoneVentilationDesignFlowRate,
    ];

    /// Returns the keyword used for this kind in model descriptions and
    /// messages.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::SimulationControl => "SimulationControl",
            Self::Timestep => "Timestep",
            Self::DesignDay => "DesignDay",
            Self::ScheduleTypeLimits => "ScheduleTypeLimits",
            Self::ScheduleConstant => "ScheduleConstant",
            Self::ScheduleFile => "ScheduleFile",
            Self::LifeCycleCost => "LifeCycleCost",
            Self::ThermalZone => "ThermalZone",
            Self::Space => "Space",
            Self::SpaceType => "SpaceType",
            Self::People => "People",
            Self::Lights => "Lights",
            Self::DesignSpecificationOutdoorAir => "DesignSpecificationOutdoorAir",
            Self::ThermostatSetpointDualSetpoint => "ThermostatSetpointDualSetpoint",
            Self::DaylightingControl => "DaylightingControl",
            Self::IlluminanceMap => "IlluminanceMap",
            Self::SizingZone => "SizingZone",
            Self::ZoneHVACBaseboardConvectiveElectric => "ZoneHVACBaseboardConvectiveElectric",
            Self::ZoneHVACUnitHeater => "ZoneHVACUnitHeater",
            Self::FanConstantVolume => "FanConstantVolume",
            Self::CoilHeatingElectric => "CoilHeatingElectric",
            Self::ZoneVentilationDesignFlowRate => "ZoneVentilationDesignFlowRate",
        }
    }

    /// Looks a kind up by its keyword.
    ///
    /// # Example
    ///
    /// ```rust
    /// use epbridge_model::ObjectKind;
    ///
    /// assert_eq!(ObjectKind::from_keyword("Space"), Some(ObjectKind::Space));
    /// assert_eq!(ObjectKind::from_keyword("Spaceship"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Returns true if a model may hold at most one object of this kind.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Building | Self::SimulationControl | Self::Timestep)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_for_every_kind() {
        for kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn only_settings_kinds_are_unique() {
        let unique: Vec<_> = ObjectKind::ALL
            .into_iter()
            .filter(|kind| kind.is_unique())
            .collect();

        assert_eq!(
            unique,
            vec![
                ObjectKind::Building,
                ObjectKind::SimulationControl,
                ObjectKind::Timestep
            ]
        );
    }
}
