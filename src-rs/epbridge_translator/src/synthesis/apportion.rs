//! Apportionment of outdoor air requirements.
//!
//! An outdoor air specification gives four coefficients: per person, per
//! floor area, an absolute rate and air changes per hour. Under the
//! `Maximum` method only the coefficient giving the largest flow is kept.
//! Under `Sum` all four are kept.

/// The outdoor air coefficients of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutdoorAirCoefficients {
    /// Flow per person, in m3/s per person
    pub per_person: f64,
    /// Flow per floor area, in m3/s per m2
    pub per_floor_area: f64,
    /// Absolute flow, in m3/s
    pub absolute: f64,
    /// Air changes per hour
    pub air_changes_per_hour: f64,
}

/// How the coefficients of a specification combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutdoorAirMethod {
    /// Only the largest flow applies.
    Maximum,
    /// All flows add up.
    Sum,
}

impl OutdoorAirMethod {
    /// Reads a method name.
    ///
    /// `Max` and `Maximum` in any case select [`Self::Maximum`]. Every other
    /// name selects [`Self::Sum`].
    #[must_use]
    pub fn parse(method: &str) -> Self {
        if method.eq_ignore_ascii_case("max") || method.eq_ignore_ascii_case("maximum") {
            Self::Maximum
        } else {
            Self::Sum
        }
    }
}

/// The size of the space the air is supplied to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpaceQuantities {
    /// Number of occupants
    pub occupants: f64,
    /// Floor area, in m2
    pub floor_area: f64,
    /// Volume, in m3
    pub volume: f64,
}

/// Absolute flow rates, all in m3/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowRates {
    /// Flow for the occupants
    pub for_people: f64,
    /// Flow for the floor area
    pub for_floor_area: f64,
    /// The absolute flow
    pub absolute: f64,
    /// Flow for the air changes of the volume
    pub for_volume: f64,
}

impl OutdoorAirCoefficients {
    /// Converts the coefficients to absolute flow rates for a space.
    #[must_use]
    pub fn flow_rates(&self, space: SpaceQuantities) -> FlowRates {
        FlowRates {
            for_people: self.per_person * space.occupants,
            for_floor_area: self.per_floor_area * space.floor_area,
            absolute: self.absolute,
            for_volume: space.volume * self.air_changes_per_hour / 3600.0,
        }
    }
}

/// Returns the coefficients that survive `method`.
///
/// Under [`OutdoorAirMethod::Maximum`] the coefficient with the largest flow
/// keeps its value and the others become zero. Ties go to the first of
/// person, floor area, absolute and volume.
#[must_use]
pub fn apportion(
    coefficients: OutdoorAirCoefficients,
    method: OutdoorAirMethod,
    space: SpaceQuantities,
) -> OutdoorAirCoefficients {
    if method == OutdoorAirMethod::Sum {
        return coefficients;
    }

    let rates = coefficients.flow_rates(space);
    let candidates = [
        rates.for_people,
        rates.for_floor_area,
        rates.absolute,
        rates.for_volume,
    ];

    let winner = candidates
        .iter()
        .enumerate()
        .fold(0, |best, (index, rate)| {
            if *rate > candidates[best] { index } else { best }
        });

    OutdoorAirCoefficients {
        per_person: if winner == 0 { coefficients.per_person } else { 0.0 },
        per_floor_area: if winner == 1 { coefficients.per_floor_area } else { 0.0 },
        absolute: if winner == 2 { coefficients.absolute } else { 0.0 },
        air_changes_per_hour: if winner == 3 {
            coefficients.air_changes_per_hour
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // one person, one square metre and an hour's worth of volume make each
    // coefficient equal to its flow
    const UNIT_SPACE: SpaceQuantities = SpaceQuantities {
        occupants: 1.0,
        floor_area: 1.0,
        volume: 3600.0,
    };

    const COEFFICIENTS: OutdoorAirCoefficients = OutdoorAirCoefficients {
        per_person: 10.0,
        per_floor_area: 4.0,
        absolute: 2.0,
        air_changes_per_hour: 1.0,
    };

    #[test]
    fn maximum_keeps_only_the_largest_flow() {
        let result = apportion(COEFFICIENTS, OutdoorAirMethod::Maximum, UNIT_SPACE);

        assert_eq!(
            result,
            OutdoorAirCoefficients {
                per_person: 10.0,
                ..OutdoorAirCoefficients::default()
            }
        );
    }

    #[test]
    fn sum_keeps_every_coefficient() {
        let result = apportion(COEFFICIENTS, OutdoorAirMethod::Sum, UNIT_SPACE);
        assert_eq!(result, COEFFICIENTS);
    }

    #[test]
    fn unknown_method_is_treated_as_sum() {
        let method = OutdoorAirMethod::parse("BadValue");
        assert_eq!(method, OutdoorAirMethod::Sum);
        assert_eq!(apportion(COEFFICIENTS, method, UNIT_SPACE), COEFFICIENTS);
    }

    #[test]
    fn method_names_ignore_case() {
        assert_eq!(OutdoorAirMethod::parse("max"), OutdoorAirMethod::Maximum);
        assert_eq!(OutdoorAirMethod::parse("MAXIMUM"), OutdoorAirMethod::Maximum);
        assert_eq!(OutdoorAirMethod::parse("Sum"), OutdoorAirMethod::Sum);
    }

    #[test]
    fn winner_keeps_its_coefficient_not_its_flow() {
        let space = SpaceQuantities {
            occupants: 0.0,
            floor_area: 200.0,
            volume: 600.0,
        };

        let result = apportion(COEFFICIENTS, OutdoorAirMethod::Maximum, space);

        assert_eq!(result.per_floor_area, 4.0);
        assert_eq!(result.per_person, 0.0);
        assert_eq!(result.absolute, 0.0);
        assert_eq!(result.air_changes_per_hour, 0.0);
    }

    #[test]
    fn ties_prefer_people_then_area_then_absolute() {
        let coefficients = OutdoorAirCoefficients {
            per_person: 0.0,
            per_floor_area: 2.0,
            absolute: 2.0,
            air_changes_per_hour: 2.0,
        };

        let result = apportion(coefficients, OutdoorAirMethod::Maximum, UNIT_SPACE);

        assert_eq!(
            result,
            OutdoorAirCoefficients {
                per_floor_area: 2.0,
                ..OutdoorAirCoefficients::default()
            }
        );
    }

    #[test]
    fn ach_flow_is_per_second() {
        let coefficients = OutdoorAirCoefficients {
            air_changes_per_hour: 2.0,
            ..OutdoorAirCoefficients::default()
        };
        let space = SpaceQuantities {
            volume: 1800.0,
            ..SpaceQuantities::default()
        };

        assert_eq!(coefficients.flow_rates(space).for_volume, 1.0);
    }
}
