//! Lowering a syntax tree into a [`SourceModel`].
//!
//! Lowering runs in two passes. The first creates every object, places
//! children in their parent's collections and sets scalar fields. The
//! second resolves references by name, which lets an object refer to one
//! declared further down the file.

use epbridge_model::{ModelError, ObjectId, ObjectKind, SourceModel, SourceModelBuilder, Value};
use epbridge_shared::span::Span;

use crate::ast::{Node, ObjectNode, ValueLiteral};

mod error;
pub use error::LoweringError;

struct PendingReference {
    object: ObjectId,
    kind: ObjectKind,
    field: &'static str,
    target: String,
    span: Span,
}

#[derive(Default)]
struct Lowering {
    builder: SourceModelBuilder,
    pending: Vec<PendingReference>,
    errors: Vec<LoweringError>,
}

/// Lowers parsed objects into a source model.
///
/// # Errors
///
/// Returns every semantic error found: unknown kinds, fields the schema does
/// not define, values of the wrong type, duplicate names and references that
/// do not resolve.
pub fn lower(objects: &[ObjectNode]) -> Result<SourceModel, Vec<LoweringError>> {
    let mut lowering = Lowering::default();

    for object in objects {
        lowering.declare(None, object);
    }

    lowering.resolve_references();

    if lowering.errors.is_empty() {
        Ok(lowering.builder.build())
    } else {
        Err(lowering.errors)
    }
}

impl Lowering {
    fn declare(&mut self, parent: Option<ObjectId>, object: &ObjectNode) {
        let kind_node = object.kind();
        let Some(kind) = ObjectKind::from_keyword(kind_node.value()) else {
            self.errors.push(LoweringError::UnknownKind {
                kind: kind_node.value().clone(),
                span: *kind_node.span(),
            });
            return;
        };

        let name = object.name().map(|name| name.value().as_str());
        let added = match parent {
            Some(parent) => self.builder.add_child(parent, kind, name),
            None => self.builder.add_object(kind, name),
        };

        let id = match added {
            Ok(id) => id,
            Err(error) => {
                let span = object.name().map_or(*kind_node.span(), |name| *name.span());
                self.errors.push(LoweringError::Model { error, span });
                return;
            }
        };

        if let Err(error) = self.builder.set_span(id, *object.span()) {
            self.errors.push(LoweringError::Model {
                error,
                span: *object.span(),
            });
        }

        for (field, value) in object.fields() {
            self.assign(id, kind, field, value);
        }

        for child in object.children() {
            self.declare(Some(id), child);
        }
    }

    fn assign(
        &mut self,
        id: ObjectId,
        kind: ObjectKind,
        field: &Node<String>,
        value: &Node<ValueLiteral>,
    ) {
        let schema = kind.schema();
        let reference = schema.reference(field.value());

        let scalar = match (value.value(), reference) {
            (ValueLiteral::Reference(target), Some(spec)) => {
                self.pending.push(PendingReference {
                    object: id,
                    kind,
                    field: spec.name,
                    target: target.clone(),
                    span: *value.span(),
                });
                return;
            }
            (ValueLiteral::Reference(_), None) => {
                let error = schema.scalar(field.value()).map_or_else(
                    || LoweringError::Model {
                        error: ModelError::UnknownField {
                            kind,
                            field: field.value().clone(),
                        },
                        span: *field.span(),
                    },
                    |spec| LoweringError::UnexpectedReference {
                        kind,
                        field: spec.name,
                        span: *value.span(),
                    },
                );
                self.errors.push(error);
                return;
            }
            (_, Some(spec)) => {
                self.errors.push(LoweringError::ExpectedReference {
                    kind,
                    field: spec.name,
                    span: *value.span(),
                });
                return;
            }
            (ValueLiteral::Number(number), None) => Value::Number(*number),
            (ValueLiteral::Text(text), None) => Value::Text(text.clone()),
            (ValueLiteral::Boolean(boolean), None) => Value::Boolean(*boolean),
            (ValueLiteral::Autosize, None) => Value::Autosize,
        };

        if let Err(error) = self.builder.set_scalar(id, field.value(), scalar) {
            let span = if matches!(error, ModelError::UnknownField { .. }) {
                *field.span()
            } else {
                *value.span()
            };
            self.errors.push(LoweringError::Model { error, span });
        }
    }

    fn resolve_references(&mut self) {
        for pending in std::mem::take(&mut self.pending) {
            let Some(spec) = pending.kind.schema().reference(pending.field) else {
                continue;
            };

            let target = spec
                .targets
                .iter()
                .find_map(|&kind| self.builder.find(kind, &pending.target));

            let Some(target) = target else {
                self.errors.push(LoweringError::UnresolvedReference {
                    kind: pending.kind,
                    field: spec.name,
                    target: pending.target,
                    accepted: spec.targets,
                    span: pending.span,
                });
                continue;
            };

            if let Err(error) = self.builder.set_reference(pending.object, spec.name, target) {
                self.errors.push(LoweringError::Model {
                    error,
                    span: pending.span,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_objects;
    use epbridge_shared::error::{AsBridgeError, Context};

    fn lower_text(text: &str) -> Result<SourceModel, Vec<LoweringError>> {
        let objects = parse_objects(text, None).expect("text should parse");
        lower(&objects)
    }

    #[test]
    fn references_resolve_forward() {
        let model = lower_text(
            r#"
            Space "Office" {
                floor_area = 50
                design_specification_outdoor_air = @"Office OA"
            }
            DesignSpecificationOutdoorAir "Office OA" {
                outdoor_air_method = "Max"
            }
            "#,
        )
        .expect("model should lower");

        let space = model
            .objects_of_kind(ObjectKind::Space)
            .next()
            .expect("space exists");
        let target = space
            .reference("design_specification_outdoor_air")
            .expect("reference is set");

        let dsoa = model.get(target).expect("target exists");
        assert_eq!(dsoa.name(), Some("Office OA"));
        assert_eq!(model.referrers(target).len(), 1);
        assert_eq!(space.number("floor_area"), Some(50.0));
        assert!(!space.is_defaulted("floor_area"));
        assert!(space.is_defaulted("volume"));
    }

    #[test]
    fn reference_tries_each_accepted_kind() {
        let model = lower_text(
            r#"
            ScheduleConstant "Always On" { value = 1 }
            ZoneHVACBaseboardConvectiveElectric "Heater" {
                availability_schedule = @"Always On"
            }
            "#,
        )
        .expect("model should lower");

        let heater = model
            .objects_of_kind(ObjectKind::ZoneHVACBaseboardConvectiveElectric)
            .next()
            .expect("heater exists");
        assert!(heater.reference("availability_schedule").is_some());
    }

    #[test]
    fn children_are_owned() {
        let model = lower_text(
            r#"
            ThermalZone "Core" {
                Space "Office" { }
            }
            "#,
        )
        .expect("model should lower");

        let zone = model
            .objects_of_kind(ObjectKind::ThermalZone)
            .next()
            .expect("zone exists");
        let spaces = zone.children("spaces");
        assert_eq!(spaces.len(), 1);
        assert_eq!(
            model.owner_object(spaces[0]).map(|owner| owner.id()),
            Some(zone.id())
        );
    }

    #[test]
    fn all_errors_are_collected() {
        let errors = lower_text(
            r#"
            Spaceship "Enterprise" { }
            Space "Office" {
                floor_area = "large"
                design_specification_outdoor_air = @"Missing"
                colour = 3
            }
            "#,
        )
        .expect_err("model should not lower");

        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], LoweringError::UnknownKind { .. }));
        assert!(matches!(
            errors[1],
            LoweringError::Model {
                error: ModelError::WrongValueType { .. },
                ..
            }
        ));
        assert!(matches!(
            errors[2],
            LoweringError::Model {
                error: ModelError::UnknownField { .. },
                ..
            }
        ));
        assert!(matches!(
            errors[3],
            LoweringError::UnresolvedReference { .. }
        ));
    }

    #[test]
    fn scalar_given_for_reference() {
        let errors = lower_text(r#"Space "Office" { space_type = "Open Office" }"#)
            .expect_err("model should not lower");

        assert!(matches!(
            errors.as_slice(),
            [LoweringError::ExpectedReference {
                field: "space_type",
                ..
            }]
        ));
    }

    #[test]
    fn child_kind_not_allowed() {
        let errors = lower_text(r#"Space "Office" { ThermalZone "Core" { } }"#)
            .expect_err("model should not lower");

        assert!(matches!(
            errors.as_slice(),
            [LoweringError::Model {
                error: ModelError::ChildNotAllowed { .. },
                ..
            }]
        ));
    }

    #[test]
    fn unknown_kind_suggests_spelling() {
        let errors = lower_text(r#"thermalzone "Core" { }"#).expect_err("model should not lower");

        assert_eq!(
            errors[0].context(),
            vec![Context::Help("did you mean `ThermalZone`?".to_string())]
        );
    }
}
