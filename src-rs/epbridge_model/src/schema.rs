//! Field schema for every source object kind.
//!
//! The schema is static data. The builder uses it to fill in defaults and to
//! type-check assignments, the parser uses it to resolve references, and the
//! translator relies on it to know that a field it asks for exists.

use crate::kind::ObjectKind;

/// The type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A floating point number
    Number,
    /// A string
    Text,
    /// A boolean
    Boolean,
}

/// The value a scalar field takes when it is not set explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// A numeric default
    Number(f64),
    /// A text default
    Text(&'static str),
    /// A boolean default
    Boolean(bool),
    /// The field is autosized unless set
    Autosize,
    /// The field is absent unless set
    None,
}

/// Describes one scalar field of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarSpec {
    /// The field name
    pub name: &'static str,
    /// The field type
    pub field_type: FieldType,
    /// The default value
    pub default: DefaultValue,
    /// Whether the field accepts the autosize marker
    pub autosizable: bool,
}

/// Describes one single-valued reference field of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSpec {
    /// The field name
    pub name: &'static str,
    /// The kinds the reference may point to
    pub targets: &'static [ObjectKind],
}

/// Describes one ordered child collection of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    /// The collection name
    pub name: &'static str,
    /// The kinds that may be added to the collection
    pub kinds: &'static [ObjectKind],
    /// Whether the collection is meant to hold at most one child
    ///
    /// The model does not enforce this. More than one child in a single
    /// collection is a structural error reported by the translator.
    pub single: bool,
}

/// The complete field layout of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSchema {
    /// Scalar fields in declaration order
    pub scalars: &'static [ScalarSpec],
    /// Reference fields in declaration order
    pub references: &'static [ReferenceSpec],
    /// Child collections in declaration order
    pub collections: &'static [CollectionSpec],
}

impl KindSchema {
    /// Looks up a scalar field by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&'static ScalarSpec> {
        self.scalars.iter().find(|spec| spec.name == name)
    }

    /// Looks up a reference field by name.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<&'static ReferenceSpec> {
        self.references.iter().find(|spec| spec.name == name)
    }

    /// Looks up a child collection by name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&'static CollectionSpec> {
        self.collections.iter().find(|spec| spec.name == name)
    }

    /// Returns the first collection that accepts children of `kind`.
    #[must_use]
    pub fn collection_for(&self, kind: ObjectKind) -> Option<&'static CollectionSpec> {
        self.collections
            .iter()
            .find(|spec| spec.kinds.contains(&kind))
    }
}

const fn number(name: &'static str, default: f64) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Number,
        default: DefaultValue::Number(default),
        autosizable: false,
    }
}

const fn optional_number(name: &'static str) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Number,
        default: DefaultValue::None,
        autosizable: false,
    }
}

const fn autosizable(name: &'static str) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Number,
        default: DefaultValue::Autosize,
        autosizable: true,
    }
}

const fn text(name: &'static str, default: &'static str) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Text,
        default: DefaultValue::Text(default),
        autosizable: false,
    }
}

const fn optional_text(name: &'static str) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Text,
        default: DefaultValue::None,
        autosizable: false,
    }
}

const fn boolean(name: &'static str, default: bool) -> ScalarSpec {
    ScalarSpec {
        name,
        field_type: FieldType::Boolean,
        default: DefaultValue::Boolean(default),
        autosizable: false,
    }
}

const fn reference(name: &'static str, targets: &'static [ObjectKind]) -> ReferenceSpec {
    ReferenceSpec { name, targets }
}

const fn many(name: &'static str, kinds: &'static [ObjectKind]) -> CollectionSpec {
    CollectionSpec {
        name,
        kinds,
        single: false,
    }
}

const fn single(name: &'static str, kinds: &'static [ObjectKind]) -> CollectionSpec {
    CollectionSpec {
        name,
        kinds,
        single: true,
    }
}

const NO_SCALARS: &[ScalarSpec] = &[];
const NO_REFERENCES: &[ReferenceSpec] = &[];
const NO_COLLECTIONS: &[CollectionSpec] = &[];

const SCHEDULES: &[ObjectKind] = &[ObjectKind::ScheduleConstant, ObjectKind::ScheduleFile];

const LOADS: &[ObjectKind] = &[ObjectKind::People, ObjectKind::Lights];

const BUILDING: KindSchema = KindSchema {
    scalars: &[
        number("north_axis", 0.0),
        text("terrain", "Suburbs"),
        number("loads_convergence_tolerance", 0.04),
        number("temperature_convergence_tolerance", 0.4),
        text("solar_distribution", "FullExterior"),
        number("maximum_number_of_warmup_days", 25.0),
        number("minimum_number_of_warmup_days", 6.0),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const SIMULATION_CONTROL: KindSchema = KindSchema {
    scalars: &[
        boolean("do_zone_sizing", false),
        boolean("do_system_sizing", false),
        boolean("do_plant_sizing", false),
        boolean("run_for_sizing_periods", true),
        boolean("run_for_weather_file", true),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const TIMESTEP: KindSchema = KindSchema {
    scalars: &[number("number_of_timesteps_per_hour", 6.0)],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const DESIGN_DAY: KindSchema = KindSchema {
    scalars: &[
        optional_number("month"),
        optional_number("day_of_month"),
        text("day_type", "SummerDesignDay"),
        number("maximum_dry_bulb_temperature", 23.0),
        number("daily_dry_bulb_temperature_range", 0.0),
        number("barometric_pressure", 101_325.0),
        number("wind_speed", 0.0),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const SCHEDULE_TYPE_LIMITS: KindSchema = KindSchema {
    scalars: &[
        optional_number("lower_limit"),
        optional_number("upper_limit"),
        optional_text("numeric_type"),
        text("unit_type", "Dimensionless"),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const SCHEDULE_CONSTANT: KindSchema = KindSchema {
    scalars: &[number("value", 0.0)],
    references: &[reference(
        "schedule_type_limits",
        &[ObjectKind::ScheduleTypeLimits],
    )],
    collections: NO_COLLECTIONS,
};

const SCHEDULE_FILE: KindSchema = KindSchema {
    scalars: &[optional_text("file_path")],
    references: &[reference(
        "schedule_type_limits",
        &[ObjectKind::ScheduleTypeLimits],
    )],
    collections: NO_COLLECTIONS,
};

const LIFE_CYCLE_COST: KindSchema = KindSchema {
    scalars: &[number("cost", 0.0)],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const THERMAL_ZONE: KindSchema = KindSchema {
    scalars: &[
        number("multiplier", 1.0),
        optional_number("ceiling_height"),
        optional_number("volume"),
        optional_number("floor_area"),
        optional_text("zone_inside_convection_algorithm"),
        optional_text("zone_outside_convection_algorithm"),
        boolean("use_ideal_air_loads", false),
        number("fraction_controlled_by_primary_daylighting", 1.0),
        number("fraction_controlled_by_secondary_daylighting", 0.0),
    ],
    references: &[
        reference(
            "thermostat",
            &[ObjectKind::ThermostatSetpointDualSetpoint],
        ),
        reference(
            "primary_daylighting_control",
            &[ObjectKind::DaylightingControl],
        ),
        reference(
            "secondary_daylighting_control",
            &[ObjectKind::DaylightingControl],
        ),
        reference("illuminance_map", &[ObjectKind::IlluminanceMap]),
        reference("daylighting_availability_schedule", SCHEDULES),
    ],
    collections: &[
        single("spaces", &[ObjectKind::Space]),
        many(
            "equipment",
            &[
                ObjectKind::ZoneHVACBaseboardConvectiveElectric,
                ObjectKind::ZoneHVACUnitHeater,
            ],
        ),
        many("ventilation", &[ObjectKind::ZoneVentilationDesignFlowRate]),
        single("sizing", &[ObjectKind::SizingZone]),
        many("life_cycle_costs", &[ObjectKind::LifeCycleCost]),
    ],
};

const SPACE: KindSchema = KindSchema {
    scalars: &[
        number("floor_area", 0.0),
        number("volume", 0.0),
        optional_number("ceiling_height"),
        number("direction_of_relative_north", 0.0),
        number("x_origin", 0.0),
        number("y_origin", 0.0),
        number("z_origin", 0.0),
        boolean("part_of_total_floor_area", true),
    ],
    references: &[
        reference("space_type", &[ObjectKind::SpaceType]),
        reference(
            "design_specification_outdoor_air",
            &[ObjectKind::DesignSpecificationOutdoorAir],
        ),
    ],
    collections: &[
        many("people", &[ObjectKind::People]),
        many("lights", &[ObjectKind::Lights]),
        many("daylighting_controls", &[ObjectKind::DaylightingControl]),
        many("illuminance_maps", &[ObjectKind::IlluminanceMap]),
    ],
};

const SPACE_TYPE: KindSchema = KindSchema {
    scalars: NO_SCALARS,
    references: NO_REFERENCES,
    collections: &[
        many("people", &[ObjectKind::People]),
        many("lights", &[ObjectKind::Lights]),
    ],
};

const PEOPLE: KindSchema = KindSchema {
    scalars: &[
        optional_number("number_of_people"),
        optional_number("people_per_floor_area"),
        optional_number("floor_area_per_person"),
        number("fraction_radiant", 0.3),
    ],
    references: &[
        reference("number_of_people_schedule", SCHEDULES),
        reference("activity_level_schedule", SCHEDULES),
    ],
    collections: NO_COLLECTIONS,
};

const LIGHTS: KindSchema = KindSchema {
    scalars: &[
        optional_number("lighting_level"),
        optional_number("watts_per_floor_area"),
        number("return_air_fraction", 0.0),
        number("fraction_radiant", 0.7),
        number("fraction_visible", 0.2),
    ],
    references: &[reference("schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

const DESIGN_SPECIFICATION_OUTDOOR_AIR: KindSchema = KindSchema {
    scalars: &[
        text("outdoor_air_method", "Sum"),
        number("outdoor_air_flow_per_person", 0.009_44),
        number("outdoor_air_flow_per_floor_area", 0.0),
        number("outdoor_air_flow_rate", 0.0),
        number("outdoor_air_flow_air_changes_per_hour", 0.0),
    ],
    references: &[reference("outdoor_air_flow_rate_schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

const THERMOSTAT_SETPOINT_DUAL_SETPOINT: KindSchema = KindSchema {
    scalars: NO_SCALARS,
    references: &[
        reference("heating_setpoint_schedule", SCHEDULES),
        reference("cooling_setpoint_schedule", SCHEDULES),
    ],
    collections: NO_COLLECTIONS,
};

const DAYLIGHTING_CONTROL: KindSchema = KindSchema {
    scalars: &[
        number("position_x", 0.0),
        number("position_y", 0.0),
        number("position_z", 0.0),
        number("psi_rotation_around_x_axis", 0.0),
        number("theta_rotation_around_y_axis", 0.0),
        number("phi_rotation_around_z_axis", 0.0),
        number("illuminance_setpoint", 500.0),
        text("lighting_control_type", "Continuous"),
        number("minimum_input_power_fraction", 0.3),
        number("minimum_light_output_fraction", 0.2),
        number("number_of_stepped_control_steps", 1.0),
        number("probability_lighting_reset", 1.0),
        optional_number("maximum_allowable_discomfort_glare_index"),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const ILLUMINANCE_MAP: KindSchema = KindSchema {
    scalars: &[
        number("origin_x", 0.0),
        number("origin_y", 0.0),
        number("origin_z", 0.0),
        number("x_length", 1.0),
        number("y_length", 1.0),
        number("number_of_x_grid_points", 2.0),
        number("number_of_y_grid_points", 2.0),
        number("psi_rotation_around_x_axis", 0.0),
        number("theta_rotation_around_y_axis", 0.0),
        number("phi_rotation_around_z_axis", 0.0),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const SIZING_ZONE: KindSchema = KindSchema {
    scalars: &[
        number("cooling_design_supply_air_temperature", 14.0),
        number("heating_design_supply_air_temperature", 40.0),
        number("cooling_design_supply_air_humidity_ratio", 0.0085),
        number("heating_design_supply_air_humidity_ratio", 0.008),
        optional_number("heating_sizing_factor"),
        optional_number("cooling_sizing_factor"),
    ],
    references: NO_REFERENCES,
    collections: NO_COLLECTIONS,
};

const BASEBOARD_CONVECTIVE_ELECTRIC: KindSchema = KindSchema {
    scalars: &[
        autosizable("heating_design_capacity"),
        number("efficiency", 1.0),
        optional_number("heating_priority"),
        optional_number("cooling_priority"),
    ],
    references: &[reference("availability_schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

const UNIT_HEATER: KindSchema = KindSchema {
    scalars: &[
        autosizable("maximum_supply_air_flow_rate"),
        text("fan_control_type", "OnOff"),
        optional_number("heating_priority"),
        optional_number("cooling_priority"),
    ],
    references: &[
        reference("availability_schedule", SCHEDULES),
        reference("supply_air_fan", &[ObjectKind::FanConstantVolume]),
        reference("heating_coil", &[ObjectKind::CoilHeatingElectric]),
    ],
    collections: NO_COLLECTIONS,
};

const FAN_CONSTANT_VOLUME: KindSchema = KindSchema {
    scalars: &[
        number("fan_total_efficiency", 0.7),
        number("pressure_rise", 250.0),
        autosizable("maximum_flow_rate"),
        number("motor_efficiency", 0.9),
        number("motor_in_airstream_fraction", 1.0),
    ],
    references: &[reference("availability_schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

const COIL_HEATING_ELECTRIC: KindSchema = KindSchema {
    scalars: &[number("efficiency", 1.0), autosizable("nominal_capacity")],
    references: &[reference("availability_schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

const ZONE_VENTILATION_DESIGN_FLOW_RATE: KindSchema = KindSchema {
    scalars: &[
        text("design_flow_rate_calculation_method", "Flow/Zone"),
        number("design_flow_rate", 0.0),
        number("flow_rate_per_floor_area", 0.0),
        number("flow_rate_per_person", 0.0),
        number("air_changes_per_hour", 0.0),
        text("ventilation_type", "Natural"),
    ],
    references: &[reference("schedule", SCHEDULES)],
    collections: NO_COLLECTIONS,
};

impl ObjectKind {
    /// Returns the field schema for this kind.
    #[must_use]
    pub const fn schema(self) -> &'static KindSchema {
        match self {
            Self::Building => &BUILDING,
            Self::SimulationControl => &SIMULATION_CONTROL,
            Self::Timestep => &TIMESTEP,
            Self::DesignDay => &DESIGN_DAY,
            Self::ScheduleTypeLimits => &SCHEDULE_TYPE_LIMITS,
            Self::ScheduleConstant => &SCHEDULE_CONSTANT,
            Self::ScheduleFile => &SCHEDULE_FILE,
            Self::LifeCycleCost => &LIFE_CYCLE_COST,
            Self::ThermalZone => &THERMAL_ZONE,
            Self::Space => &SPACE,
            Self::SpaceType => &SPACE_TYPE,
            Self::People => &PEOPLE,
            Self::Lights => &LIGHTS,
            Self::DesignSpecificationOutdoorAir => &DESIGN_SPECIFICATION_OUTDOOR_AIR,
            Self::ThermostatSetpointDualSetpoint => &THERMOSTAT_SETPOINT_DUAL_SETPOINT,
            Self::DaylightingControl => &DAYLIGHTING_CONTROL,
            Self::IlluminanceMap => &ILLUMINANCE_MAP,
            Self::SizingZone => &SIZING_ZONE,
            Self::ZoneHVACBaseboardConvectiveElectric => &BASEBOARD_CONVECTIVE_ELECTRIC,
            Self::ZoneHVACUnitHeater => &UNIT_HEATER,
            Self::FanConstantVolume => &FAN_CONSTANT_VOLUME,
            Self::CoilHeatingElectric => &COIL_HEATING_ELECTRIC,
            Self::ZoneVentilationDesignFlowRate => &ZONE_VENTILATION_DESIGN_FLOW_RATE,
        }
    }

    /// Returns true if objects of this kind may be owned by `parent`.
    #[must_use]
    pub fn can_be_child_of(self, parent: Self) -> bool {
        parent.schema().collection_for(self).is_some()
    }
}
