use std::collections::HashSet;

use epbridge_record::{RecordCollection, RecordType};

/// Columns of each record type's groups that hold record names.
#[expect(
    clippy::wildcard_enum_match_arm,
    reason = "most record types have no named groups"
)]
fn name_columns(record_type: RecordType) -> &'static [usize] {
    match record_type {
        RecordType::SpaceList | RecordType::ZoneList | RecordType::DaylightingControls => &[0],
        RecordType::DesignSpecificationOutdoorAirSpaceList => &[0, 1],
        RecordType::ZoneHVACEquipmentList | RecordType::ZoneControlThermostat => &[1],
        _ => &[],
    }
}

/// Asserts that every name a record refers to is the name of a record in
/// the collection.
#[track_caller]
pub fn assert_references_resolve(records: &RecordCollection) {
    let names: HashSet<&str> = records.records().map(|record| record.name()).collect();

    for record in records.records() {
        let referenced = record.references().chain(record.groups().iter().flat_map(|group| {
            name_columns(record.record_type())
                .iter()
                .filter_map(|&column| group.get(column).map(String::as_str))
        }));

        for name in referenced {
            assert!(
                names.contains(name),
                "{} '{}' refers to '{name}', which is not a record",
                record.record_type(),
                record.name()
            );
        }
    }
}
