//! Printing records in the simulation engine's flat layout
//!
//! ```text
//! Zone,
//!   Core,                     !- Name
//!   0,                        !- Direction of Relative North
//!   3;                        !- Multiplier
//! ```

use anstream::println;
use epbridge_record::{Record, RecordCollection};

use crate::stylesheet;

const VALUE_WIDTH: usize = 26;

#[expect(clippy::use_debug, reason = "debug output is one of the print modes")]
pub fn print(records: &RecordCollection, print_debug: bool) {
    if print_debug {
        for record in records.records() {
            println!("{record:?}");
        }
        return;
    }

    for record in records.records() {
        println!("{}\n", record_to_string(record));
    }
}

/// Returns the values of a record in slot order, each with its field label.
fn labelled_values(record: &Record) -> Vec<(String, String)> {
    let record_type = record.record_type();
    let mut values = Vec::new();

    if record_type.has_name_field() {
        values.push((record.name().to_string(), "Name".to_string()));
    }

    let field_names = record_type.field_names();
    for (index, value) in record.trimmed_fields().iter().enumerate() {
        let label = field_names.get(index).copied().unwrap_or("Field");
        let value = value.as_ref().map(ToString::to_string).unwrap_or_default();
        values.push((value, label.to_string()));
    }

    let group_names = record_type.group_field_names();
    for (number, group) in record.groups().iter().enumerate() {
        for (value, label) in group.iter().zip(group_names) {
            values.push((value.clone(), format!("{label} {}", number + 1)));
        }
    }

    values
}

fn record_to_string(record: &Record) -> String {
    let header = stylesheet::RECORD_TYPE.style(record.record_type().idd_name());
    let values = labelled_values(record);

    if values.is_empty() {
        return format!("{header};");
    }

    let last = values.len() - 1;
    let mut lines = vec![format!("{header},")];
    lines.extend(values.into_iter().enumerate().map(|(index, (value, label))| {
        let separator = if index == last { ';' } else { ',' };
        let value = format!("{value}{separator}");
        let comment = stylesheet::FIELD_COMMENT.style(format!("!- {label}"));
        format!("  {value:<VALUE_WIDTH$}{comment}")
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use epbridge_record::{
        FieldValue, RecordType,
        fields::{space_list, zone},
    };

    #[test]
    fn zone_record_layout() {
        let mut record = Record::new(RecordType::Zone, "Core");
        record.set(zone::MULTIPLIER, FieldValue::Integer(3));
        record.set(zone::X_ORIGIN, FieldValue::Number(1.5));

        let text = stylesheet::strip_styles(&record_to_string(&record));
        let lines: Vec<_> = text.lines().map(str::trim_end).collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Zone,");
        assert_eq!(lines[1], format!("  {:<26}!- Name", "Core,"));
        assert_eq!(
            lines[2],
            format!("  {:<26}!- Direction of Relative North", ",")
        );
        assert_eq!(lines[3], format!("  {:<26}!- X Origin", "1.5,"));
        assert_eq!(lines[7], format!("  {:<26}!- Multiplier", "3;"));
    }

    #[test]
    fn groups_are_numbered() {
        let mut record = Record::new(RecordType::SpaceList, "Open Office");
        record.push_group(["Office A"]);
        record.push_group(["Office B"]);

        let text = stylesheet::strip_styles(&record_to_string(&record));

        assert_eq!(
            text,
            format!(
                "SpaceList,\n  {:<26}!- Name\n  {:<26}!- {} 1\n  {:<26}!- {} 2",
                "Open Office,",
                "Office A,",
                space_list::GROUP[0],
                "Office B;",
                space_list::GROUP[0],
            )
        );
    }
}
