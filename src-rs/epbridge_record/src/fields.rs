//! Field index tables for every record type.
//!
//! Each module lists the field slots of one record type in the order the
//! simulation engine expects them. The record name is stored separately and
//! is not part of these tables. Constants are the slot indices and `NAMES`
//! holds the display names used when printing records. Types with
//! repeatable groups also have a `GROUP` table naming the tuple members.

#![expect(
    missing_docs,
    reason = "slot constants are named after the field they index"
)]

/// Fields of `Version`.
pub mod version {
    pub const VERSION_IDENTIFIER: usize = 0;

    pub const NAMES: &[&str] = &["Version Identifier"];
}

/// Fields of `SimulationControl`.
pub mod simulation_control {
    pub const DO_ZONE_SIZING_CALCULATION: usize = 0;
    pub const DO_SYSTEM_SIZING_CALCULATION: usize = 1;
    pub const DO_PLANT_SIZING_CALCULATION: usize = 2;
    pub const RUN_SIMULATION_FOR_SIZING_PERIODS: usize = 3;
    pub const RUN_SIMULATION_FOR_WEATHER_FILE_RUN_PERIODS: usize = 4;

    pub const NAMES: &[&str] = &[
        "Do Zone Sizing Calculation",
        "Do System Sizing Calculation",
        "Do Plant Sizing Calculation",
        "Run Simulation for Sizing Periods",
        "Run Simulation for Weather File Run Periods",
    ];
}

/// Fields of `Timestep`.
pub mod timestep {
    pub const NUMBER_OF_TIMESTEPS_PER_HOUR: usize = 0;

    pub const NAMES: &[&str] = &["Number of Timesteps per Hour"];
}

/// Fields of `Building`.
pub mod building {
    pub const NORTH_AXIS: usize = 0;
    pub const TERRAIN: usize = 1;
    pub const LOADS_CONVERGENCE_TOLERANCE_VALUE: usize = 2;
    pub const TEMPERATURE_CONVERGENCE_TOLERANCE_VALUE: usize = 3;
    pub const SOLAR_DISTRIBUTION: usize = 4;
    pub const MAXIMUM_NUMBER_OF_WARMUP_DAYS: usize = 5;
    pub const MINIMUM_NUMBER_OF_WARMUP_DAYS: usize = 6;

    pub const NAMES: &[&str] = &[
        "North Axis",
        "Terrain",
        "Loads Convergence Tolerance Value",
        "Temperature Convergence Tolerance Value",
        "Solar Distribution",
        "Maximum Number of Warmup Days",
        "Minimum Number of Warmup Days",
    ];
}

/// Fields of `SizingPeriod:DesignDay`.
pub mod sizing_period_design_day {
    pub const MONTH: usize = 0;
    pub const DAY_OF_MONTH: usize = 1;
    pub const DAY_TYPE: usize = 2;
    pub const MAXIMUM_DRY_BULB_TEMPERATURE: usize = 3;
    pub const DAILY_DRY_BULB_TEMPERATURE_RANGE: usize = 4;
    pub const BAROMETRIC_PRESSURE: usize = 5;
    pub const WIND_SPEED: usize = 6;

    pub const NAMES: &[&str] = &[
        "Month",
        "Day of Month",
        "Day Type",
        "Maximum Dry-Bulb Temperature",
        "Daily Dry-Bulb Temperature Range",
        "Barometric Pressure",
        "Wind Speed",
    ];
}

/// Fields of `ScheduleTypeLimits`.
pub mod schedule_type_limits {
    pub const LOWER_LIMIT_VALUE: usize = 0;
    pub const UPPER_LIMIT_VALUE: usize = 1;
    pub const NUMERIC_TYPE: usize = 2;
    pub const UNIT_TYPE: usize = 3;

    pub const NAMES: &[&str] = &[
        "Lower Limit Value",
        "Upper Limit Value",
        "Numeric Type",
        "Unit Type",
    ];
}

/// Fields of `Schedule:Constant`.
pub mod schedule_constant {
    pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 0;
    pub const HOURLY_VALUE: usize = 1;

    pub const NAMES: &[&str] = &["Schedule Type Limits Name", "Hourly Value"];
}

/// Fields of `Schedule:Compact`.
pub mod schedule_compact {
    pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 0;

    pub const NAMES: &[&str] = &["Schedule Type Limits Name"];

    pub const GROUP: &[&str] = &["Field"];
}

/// Fields of `Zone`.
pub mod zone {
    pub const DIRECTION_OF_RELATIVE_NORTH: usize = 0;
    pub const X_ORIGIN: usize = 1;
    pub const Y_ORIGIN: usize = 2;
    pub const Z_ORIGIN: usize = 3;
    pub const TYPE: usize = 4;
    pub const MULTIPLIER: usize = 5;
    pub const CEILING_HEIGHT: usize = 6;
    pub const VOLUME: usize = 7;
    pub const FLOOR_AREA: usize = 8;
    pub const ZONE_INSIDE_CONVECTION_ALGORITHM: usize = 9;
    pub const ZONE_OUTSIDE_CONVECTION_ALGORITHM: usize = 10;
    pub const PART_OF_TOTAL_FLOOR_AREA: usize = 11;

    pub const NAMES: &[&str] = &[
        "Direction of Relative North",
        "X Origin",
        "Y Origin",
        "Z Origin",
        "Type",
        "Multiplier",
        "Ceiling Height",
        "Volume",
        "Floor Area",
        "Zone Inside Convection Algorithm",
        "Zone Outside Convection Algorithm",
        "Part of Total Floor Area",
    ];
}

/// Fields of `Space`.
pub mod space {
    pub const ZONE_NAME: usize = 0;
    pub const CEILING_HEIGHT: usize = 1;
    pub const VOLUME: usize = 2;
    pub const FLOOR_AREA: usize = 3;
    pub const SPACE_TYPE: usize = 4;

    pub const NAMES: &[&str] = &[
        "Zone Name",
        "Ceiling Height",
        "Volume",
        "Floor Area",
        "Space Type",
    ];
}

/// Fields of `SpaceList`.
pub mod space_list {
    pub const NAMES: &[&str] = &[];

    pub const GROUP: &[&str] = &["Space Name"];
}

/// Fields of `ZoneList`.
pub mod zone_list {
    pub const NAMES: &[&str] = &[];

    pub const GROUP: &[&str] = &["Zone Name"];
}

/// Fields of `People`.
pub mod people {
    pub const ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME: usize = 0;
    pub const NUMBER_OF_PEOPLE_SCHEDULE_NAME: usize = 1;
    pub const NUMBER_OF_PEOPLE_CALCULATION_METHOD: usize = 2;
    pub const NUMBER_OF_PEOPLE: usize = 3;
    pub const PEOPLE_PER_FLOOR_AREA: usize = 4;
    pub const FLOOR_AREA_PER_PERSON: usize = 5;
    pub const FRACTION_RADIANT: usize = 6;
    pub const ACTIVITY_LEVEL_SCHEDULE_NAME: usize = 7;

    pub const NAMES: &[&str] = &[
        "Zone or ZoneList or Space or SpaceList Name",
        "Number of People Schedule Name",
        "Number of People Calculation Method",
        "Number of People",
        "People per Floor Area",
        "Floor Area per Person",
        "Fraction Radiant",
        "Activity Level Schedule Name",
    ];
}

/// Fields of `Lights`.
pub mod lights {
    pub const ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME: usize = 0;
    pub const SCHEDULE_NAME: usize = 1;
    pub const DESIGN_LEVEL_CALCULATION_METHOD: usize = 2;
    pub const LIGHTING_LEVEL: usize = 3;
    pub const WATTS_PER_FLOOR_AREA: usize = 4;
    pub const RETURN_AIR_FRACTION: usize = 5;
    pub const FRACTION_RADIANT: usize = 6;
    pub const FRACTION_VISIBLE: usize = 7;

    pub const NAMES: &[&str] = &[
        "Zone or ZoneList or Space or SpaceList Name",
        "Schedule Name",
        "Design Level Calculation Method",
        "Lighting Level",
        "Watts per Floor Area",
        "Return Air Fraction",
        "Fraction Radiant",
        "Fraction Visible",
    ];
}

/// Fields of `DesignSpecification:OutdoorAir`.
pub mod design_specification_outdoor_air {
    pub const OUTDOOR_AIR_METHOD: usize = 0;
    pub const OUTDOOR_AIR_FLOW_PER_PERSON: usize = 1;
    pub const OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA: usize = 2;
    pub const OUTDOOR_AIR_FLOW_PER_ZONE: usize = 3;
    pub const OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR: usize = 4;
    pub const OUTDOOR_AIR_SCHEDULE_NAME: usize = 5;

    pub const NAMES: &[&str] = &[
        "Outdoor Air Method",
        "Outdoor Air Flow per Person",
        "Outdoor Air Flow per Zone Floor Area",
        "Outdoor Air Flow per Zone",
        "Outdoor Air Flow Air Changes per Hour",
        "Outdoor Air Schedule Name",
    ];
}

/// Fields of `DesignSpecification:OutdoorAir:SpaceList`.
pub mod design_specification_outdoor_air_space_list {
    pub const NAMES: &[&str] = &[];

    pub const GROUP: &[&str] = &[
        "Space Name",
        "Space Design Specification Outdoor Air Object Name",
    ];
}

/// Fields of `Sizing:Zone`.
pub mod sizing_zone {
    pub const ZONE_OR_ZONELIST_NAME: usize = 0;
    pub const ZONE_COOLING_DESIGN_SUPPLY_AIR_TEMPERATURE: usize = 1;
    pub const ZONE_HEATING_DESIGN_SUPPLY_AIR_TEMPERATURE: usize = 2;
    pub const ZONE_COOLING_DESIGN_SUPPLY_AIR_HUMIDITY_RATIO: usize = 3;
    pub const ZONE_HEATING_DESIGN_SUPPLY_AIR_HUMIDITY_RATIO: usize = 4;
    pub const DESIGN_SPECIFICATION_OUTDOOR_AIR_OBJECT_NAME: usize = 5;
    pub const ZONE_HEATING_SIZING_FACTOR: usize = 6;
    pub const ZONE_COOLING_SIZING_FACTOR: usize = 7;

    pub const NAMES: &[&str] = &[
        "Zone or ZoneList Name",
        "Zone Cooling Design Supply Air Temperature",
        "Zone Heating Design Supply Air Temperature",
        "Zone Cooling Design Supply Air Humidity Ratio",
        "Zone Heating Design Supply Air Humidity Ratio",
        "Design Specification Outdoor Air Object Name",
        "Zone Heating Sizing Factor",
        "Zone Cooling Sizing Factor",
    ];
}

/// Fields of `ZoneControl:Thermostat`.
pub mod zone_control_thermostat {
    pub const ZONE_OR_ZONELIST_NAME: usize = 0;
    pub const CONTROL_TYPE_SCHEDULE_NAME: usize = 1;

    pub const NAMES: &[&str] = &["Zone or ZoneList Name", "Control Type Schedule Name"];

    pub const GROUP: &[&str] = &["Control Object Type", "Control Name"];
}

/// Fields of `ThermostatSetpoint:DualSetpoint`.
pub mod thermostat_setpoint_dual_setpoint {
    pub const HEATING_SETPOINT_TEMPERATURE_SCHEDULE_NAME: usize = 0;
    pub const COOLING_SETPOINT_TEMPERATURE_SCHEDULE_NAME: usize = 1;

    pub const NAMES: &[&str] = &[
        "Heating Setpoint Temperature Schedule Name",
        "Cooling Setpoint Temperature Schedule Name",
    ];
}

/// Fields of `Daylighting:Controls`.
pub mod daylighting_controls {
    pub const ZONE_OR_SPACE_NAME: usize = 0;
    pub const DAYLIGHTING_METHOD: usize = 1;
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 2;
    pub const LIGHTING_CONTROL_TYPE: usize = 3;
    pub const MINIMUM_INPUT_POWER_FRACTION: usize = 4;
    pub const MINIMUM_LIGHT_OUTPUT_FRACTION: usize = 5;
    pub const NUMBER_OF_STEPPED_CONTROL_STEPS: usize = 6;
    pub const PROBABILITY_LIGHTING_WILL_BE_RESET: usize = 7;
    pub const GLARE_CALCULATION_DAYLIGHTING_REFERENCE_POINT_NAME: usize = 8;
    pub const GLARE_CALCULATION_AZIMUTH_ANGLE_OF_VIEW_DIRECTION: usize = 9;
    pub const MAXIMUM_ALLOWABLE_DISCOMFORT_GLARE_INDEX: usize = 10;

    pub const NAMES: &[&str] = &[
        "Zone or Space Name",
        "Daylighting Method",
        "Availability Schedule Name",
        "Lighting Control Type",
        "Minimum Input Power Fraction",
        "Minimum Light Output Fraction",
        "Number of Stepped Control Steps",
        "Probability Lighting will be Reset",
        "Glare Calculation Daylighting Reference Point Name",
        "Glare Calculation Azimuth Angle of View Direction",
        "Maximum Allowable Discomfort Glare Index",
    ];

    pub const GROUP: &[&str] = &[
        "Daylighting Reference Point Name",
        "Fraction of Lights Controlled by Reference Point",
        "Illuminance Setpoint at Reference Point",
    ];
}

/// Fields of `Daylighting:ReferencePoint`.
pub mod daylighting_reference_point {
    pub const ZONE_OR_SPACE_NAME: usize = 0;
    pub const X_COORDINATE: usize = 1;
    pub const Y_COORDINATE: usize = 2;
    pub const Z_COORDINATE: usize = 3;

    pub const NAMES: &[&str] = &[
        "Zone or Space Name",
        "X Coordinate",
        "Y Coordinate",
        "Z Coordinate",
    ];
}

/// Fields of `Output:IlluminanceMap`.
pub mod output_illuminance_map {
    pub const ZONE_OR_SPACE_NAME: usize = 0;
    pub const Z_HEIGHT: usize = 1;
    pub const X_MINIMUM_COORDINATE: usize = 2;
    pub const X_MAXIMUM_COORDINATE: usize = 3;
    pub const NUMBER_OF_X_GRID_POINTS: usize = 4;
    pub const Y_MINIMUM_COORDINATE: usize = 5;
    pub const Y_MAXIMUM_COORDINATE: usize = 6;
    pub const NUMBER_OF_Y_GRID_POINTS: usize = 7;

    pub const NAMES: &[&str] = &[
        "Zone or Space Name",
        "Z Height",
        "X Minimum Coordinate",
        "X Maximum Coordinate",
        "Number of X Grid Points",
        "Y Minimum Coordinate",
        "Y Maximum Coordinate",
        "Number of Y Grid Points",
    ];
}

/// Fields of `ZoneVentilation:DesignFlowRate`.
pub mod zone_ventilation_design_flow_rate {
    pub const ZONE_OR_ZONELIST_OR_SPACE_OR_SPACELIST_NAME: usize = 0;
    pub const SCHEDULE_NAME: usize = 1;
    pub const DESIGN_FLOW_RATE_CALCULATION_METHOD: usize = 2;
    pub const DESIGN_FLOW_RATE: usize = 3;
    pub const FLOW_RATE_PER_FLOOR_AREA: usize = 4;
    pub const FLOW_RATE_PER_PERSON: usize = 5;
    pub const AIR_CHANGES_PER_HOUR: usize = 6;
    pub const VENTILATION_TYPE: usize = 7;

    pub const NAMES: &[&str] = &[
        "Zone or ZoneList or Space or SpaceList Name",
        "Schedule Name",
        "Design Flow Rate Calculation Method",
        "Design Flow Rate",
        "Flow Rate per Floor Area",
        "Flow Rate per Person",
        "Air Changes per Hour",
        "Ventilation Type",
    ];
}

/// Fields of `HVACTemplate:Zone:IdealLoadsAirSystem`.
pub mod hvac_template_zone_ideal_loads_air_system {
    pub const ZONE_NAME: usize = 0;
    pub const SYSTEM_AVAILABILITY_SCHEDULE_NAME: usize = 1;

    pub const NAMES: &[&str] = &["Zone Name", "System Availability Schedule Name"];
}

/// Fields of `ZoneHVAC:EquipmentConnections`.
pub mod zone_hvac_equipment_connections {
    pub const ZONE_NAME: usize = 0;
    pub const ZONE_CONDITIONING_EQUIPMENT_LIST_NAME: usize = 1;
    pub const ZONE_AIR_INLET_NODE_OR_NODELIST_NAME: usize = 2;
    pub const ZONE_AIR_EXHAUST_NODE_OR_NODELIST_NAME: usize = 3;
    pub const ZONE_AIR_NODE_NAME: usize = 4;
    pub const ZONE_RETURN_AIR_NODE_OR_NODELIST_NAME: usize = 5;

    pub const NAMES: &[&str] = &[
        "Zone Name",
        "Zone Conditioning Equipment List Name",
        "Zone Air Inlet Node or NodeList Name",
        "Zone Air Exhaust Node or NodeList Name",
        "Zone Air Node Name",
        "Zone Return Air Node or NodeList Name",
    ];
}

/// Fields of `ZoneHVAC:EquipmentList`.
pub mod zone_hvac_equipment_list {
    pub const LOAD_DISTRIBUTION_SCHEME: usize = 0;

    pub const NAMES: &[&str] = &["Load Distribution Scheme"];

    pub const GROUP: &[&str] = &[
        "Zone Equipment Object Type",
        "Zone Equipment Name",
        "Zone Equipment Cooling Sequence",
        "Zone Equipment Heating or No-Load Sequence",
    ];
}

/// Fields of `NodeList`.
pub mod node_list {
    pub const NAMES: &[&str] = &[];

    pub const GROUP: &[&str] = &["Node Name"];
}

/// Fields of `ZoneHVAC:Baseboard:Convective:Electric`.
pub mod zone_hvac_baseboard_convective_electric {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 0;
    pub const HEATING_DESIGN_CAPACITY_METHOD: usize = 1;
    pub const HEATING_DESIGN_CAPACITY: usize = 2;
    pub const EFFICIENCY: usize = 3;

    pub const NAMES: &[&str] = &[
        "Availability Schedule Name",
        "Heating Design Capacity Method",
        "Heating Design Capacity",
        "Efficiency",
    ];
}

/// Fields of `ZoneHVAC:UnitHeater`.
pub mod zone_hvac_unit_heater {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 0;
    pub const AIR_INLET_NODE_NAME: usize = 1;
    pub const AIR_OUTLET_NODE_NAME: usize = 2;
    pub const SUPPLY_AIR_FAN_OBJECT_TYPE: usize = 3;
    pub const SUPPLY_AIR_FAN_NAME: usize = 4;
    pub const MAXIMUM_SUPPLY_AIR_FLOW_RATE: usize = 5;
    pub const HEATING_COIL_OBJECT_TYPE: usize = 6;
    pub const HEATING_COIL_NAME: usize = 7;
    pub const FAN_CONTROL_TYPE: usize = 8;

    pub const NAMES: &[&str] = &[
        "Availability Schedule Name",
        "Air Inlet Node Name",
        "Air Outlet Node Name",
        "Supply Air Fan Object Type",
        "Supply Air Fan Name",
        "Maximum Supply Air Flow Rate",
        "Heating Coil Object Type",
        "Heating Coil Name",
        "Fan Control Type",
    ];
}

/// Fields of `Fan:ConstantVolume`.
pub mod fan_constant_volume {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 0;
    pub const FAN_TOTAL_EFFICIENCY: usize = 1;
    pub const PRESSURE_RISE: usize = 2;
    pub const MAXIMUM_FLOW_RATE: usize = 3;
    pub const MOTOR_EFFICIENCY: usize = 4;
    pub const MOTOR_IN_AIRSTREAM_FRACTION: usize = 5;
    pub const AIR_INLET_NODE_NAME: usize = 6;
    pub const AIR_OUTLET_NODE_NAME: usize = 7;

    pub const NAMES: &[&str] = &[
        "Availability Schedule Name",
        "Fan Total Efficiency",
        "Pressure Rise",
        "Maximum Flow Rate",
        "Motor Efficiency",
        "Motor In Airstream Fraction",
        "Air Inlet Node Name",
        "Air Outlet Node Name",
    ];
}

/// Fields of `Coil:Heating:Electric`.
pub mod coil_heating_electric {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 0;
    pub const EFFICIENCY: usize = 1;
    pub const NOMINAL_CAPACITY: usize = 2;
    pub const AIR_INLET_NODE_NAME: usize = 3;
    pub const AIR_OUTLET_NODE_NAME: usize = 4;

    pub const NAMES: &[&str] = &[
        "Availability Schedule Name",
        "Efficiency",
        "Nominal Capacity",
        "Air Inlet Node Name",
        "Air Outlet Node Name",
    ];
}
