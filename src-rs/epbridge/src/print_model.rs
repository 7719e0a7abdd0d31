//! Printing a source model as a tree
//!
//! ```text
//! ThermalZone 'Core'
//! ├── multiplier = 2
//! ├── thermostat = @ThermostatSetpointDualSetpoint 'Office'
//! └── spaces
//!     └── Space 'Office'
//!         └── floor_area = 120
//! ```
//!
//! Objects owned by another object are printed under their owner. Values
//! that come from the schema default are dimmed.

use anstream::println;
use epbridge_model::{ObjectId, Scalar, SourceModel, SourceObject};

use crate::stylesheet;

#[expect(clippy::use_debug, reason = "debug output is one of the print modes")]
pub fn print(model: &SourceModel, print_debug: bool) {
    if print_debug {
        println!("{model:#?}");
        return;
    }

    for line in model_to_lines(model) {
        println!("{line}");
    }
}

enum Entry<'a> {
    Scalar(&'static str, &'a Scalar),
    Reference(&'static str, ObjectId),
    Collection(&'static str, &'a [ObjectId]),
}

fn model_to_lines(model: &SourceModel) -> Vec<String> {
    let mut lines = Vec::new();
    for object in model.objects().filter(|object| model.owner(object.id()).is_none()) {
        push_object(model, object, "", &mut lines);
    }
    lines
}

fn object_label(object: &SourceObject) -> String {
    let kind = stylesheet::OBJECT_KIND.style(object.kind().keyword());
    match object.name() {
        Some(name) => format!("{kind} {}", stylesheet::OBJECT_NAME.style(format!("'{name}'"))),
        None => format!("{kind} {}", object.id()),
    }
}

/// Pushes the object's own line, then its entries indented by `indent`.
fn push_object(model: &SourceModel, object: &SourceObject, indent: &str, lines: &mut Vec<String>) {
    if indent.is_empty() {
        lines.push(object_label(object));
    }

    let entries: Vec<Entry<'_>> = object
        .scalars()
        .map(|(field, scalar)| Entry::Scalar(field, scalar))
        .chain(
            object
                .references()
                .map(|(field, target)| Entry::Reference(field, target)),
        )
        .chain(
            object
                .collections()
                .filter(|(_, children)| !children.is_empty())
                .map(|(name, children)| Entry::Collection(name, children)),
        )
        .collect();

    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.into_iter().enumerate() {
        let (branch, continuation) = if index == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let branch = format!("{indent}{}", stylesheet::TREE_BRANCH.style(branch));
        let child_indent = format!("{indent}{continuation}");

        match entry {
            Entry::Scalar(field, scalar) => {
                let field = stylesheet::FIELD_NAME.style(field);
                let value = if scalar.is_defaulted() {
                    stylesheet::DEFAULTED_VALUE.style(scalar.value()).to_string()
                } else {
                    scalar.value().to_string()
                };
                lines.push(format!("{branch}{field} = {value}"));
            }
            Entry::Reference(field, target) => {
                let field = stylesheet::FIELD_NAME.style(field);
                let target = model
                    .get(target)
                    .map_or_else(|| target.to_string(), object_label);
                lines.push(format!("{branch}{field} = @{target}"));
            }
            Entry::Collection(name, children) => {
                lines.push(format!("{branch}{}", stylesheet::FIELD_NAME.style(name)));
                let last_child = children.len().saturating_sub(1);
                for (position, child) in children.iter().filter_map(|&id| model.get(id)).enumerate() {
                    let (child_branch, grandchild_indent) = if position == last_child {
                        ("└── ", "    ")
                    } else {
                        ("├── ", "│   ")
                    };
                    lines.push(format!(
                        "{child_indent}{}{}",
                        stylesheet::TREE_BRANCH.style(child_branch),
                        object_label(child)
                    ));
                    push_object(model, child, &format!("{child_indent}{grandchild_indent}"), lines);
                }
            }
        }
    }
}
