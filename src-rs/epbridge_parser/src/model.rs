//! Parser for a complete model description.
//!
//! A model description is a sequence of object declarations. When an object
//! fails to parse, the error is recorded and the parser skips past the
//! object so that the objects after it are still checked.

use nom::{Input as _, Parser as _};

use crate::{
    ast::ObjectNode,
    error::{ErrorHandlingParser, ParserError, partial::ErrorsWithPartialResult},
    object,
    token::layout,
    util::{InputSpan, Result},
};

/// Parses a model description, consuming the complete input.
pub fn parse_complete(
    input: InputSpan<'_>,
) -> Result<'_, Vec<ObjectNode>, ErrorsWithPartialResult<Vec<ObjectNode>, ParserError>> {
    let (mut rest, _) = layout.convert_errors().parse(input)?;

    let mut objects = Vec::new();
    let mut errors = Vec::new();

    while !rest.fragment().is_empty() {
        match object::parse(rest) {
            Ok((next, object)) => {
                objects.push(object);
                rest = next;
            }
            Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
                errors.push(error);
                rest = skip_object(rest);
            }
            Err(nom::Err::Incomplete(_)) => {
                errors.push(ParserError::unexpected_token(rest.location_offset()));
                break;
            }
        }
    }

    if errors.is_empty() {
        Ok((rest, objects))
    } else {
        Err(nom::Err::Failure(ErrorsWithPartialResult::new(
            objects, errors,
        )))
    }
}

/// Skips the object starting at `input`, along with the layout after it.
///
/// Braces are balanced so that nested objects are skipped with their
/// parent. If the text has no brace before the end of its line, only that
/// line is skipped. At least one character is always consumed.
fn skip_object(input: InputSpan<'_>) -> InputSpan<'_> {
    let skipped = object_extent(input.fragment());
    let (rest, _) = input.take_split(skipped);

    layout(rest).map_or(rest, |(rest, _)| rest)
}

fn object_extent(text: &str) -> usize {
    let mut depth = 0_usize;
    let mut seen_brace = false;
    let mut in_string = false;

    for (index, c) in text.char_indices() {
        let end = index + c.len_utf8();

        if in_string {
            if c == '"' || c == '\n' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => {
                depth += 1;
                seen_brace = true;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return end;
                }
            }
            '\n' if !seen_brace => return end,
            _ => {}
        }
    }

    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, ast::Entry, error::reason::ParserErrorReason};

    fn parse_text(text: &str) -> std::result::Result<Vec<ObjectNode>, ErrorsWithPartialResult<Vec<ObjectNode>, ParserError>> {
        let input = InputSpan::new_extra(text, Config::default());
        match parse_complete(input) {
            Ok((_, objects)) => Ok(objects),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
            Err(nom::Err::Incomplete(_)) => panic!("complete parsers never ask for more input"),
        }
    }

    #[test]
    fn empty_description() {
        let objects = parse_text("  # nothing here\n").expect("should parse");
        assert!(objects.is_empty());
    }

    #[test]
    fn nested_objects_and_fields() {
        let text = r#"
            ThermalZone "Core" {
                multiplier = 2
                thermostat = @"Dual"
                Space "Office" {
                    floor_area = 100.5;
                    People "Workers" { number_of_people = 10 }
                }
            }
        "#;

        let objects = parse_text(text).expect("should parse");
        assert_eq!(objects.len(), 1);

        let zone = &objects[0];
        assert_eq!(zone.kind().value(), "ThermalZone");
        assert_eq!(zone.name().map(|name| name.value().as_str()), Some("Core"));
        assert_eq!(zone.fields().count(), 2);

        let space = zone.children().next().expect("zone has a space");
        assert_eq!(space.kind().value(), "Space");
        assert_eq!(space.children().count(), 1);
        assert!(matches!(space.entries()[0], Entry::Field { .. }));
    }

    #[test]
    fn recovers_after_broken_object() {
        let text = r#"
            Space "A" { floor_area = }
            Space "B" { floor_area = 3 }
            Space "C" { volume = 2e }
        "#;

        let error = parse_text(text).expect_err("should fail");

        assert_eq!(error.errors.len(), 2);
        assert!(matches!(
            error.errors[0].reason,
            ParserErrorReason::ExpectValue { .. }
        ));
        assert_eq!(error.partial_result.len(), 1);
        assert_eq!(
            error.partial_result[0].name().map(|name| name.value().as_str()),
            Some("B")
        );
    }

    #[test]
    fn stray_line_is_skipped() {
        let text = "42 garbage\nBuilding \"B\" { }\n";

        let error = parse_text(text).expect_err("should fail");

        assert_eq!(error.errors.len(), 1);
        assert!(matches!(
            error.errors[0].reason,
            ParserErrorReason::ExpectObject
        ));
        assert_eq!(error.partial_result.len(), 1);
    }

    #[test]
    fn unclosed_object_reports_opening_brace() {
        let text = "ThermalZone \"Core\" {\n  multiplier = 1\n";

        let error = parse_text(text).expect_err("should fail");

        let [only] = error.errors.as_slice() else {
            panic!("expected exactly one error");
        };
        let ParserErrorReason::UnclosedObject { open_brace_span } = only.reason else {
            panic!("expected an unclosed object error");
        };
        assert_eq!(open_brace_span.start().offset, 19);
        assert_eq!(only.error_offset, text.len());
    }

    #[test]
    fn unnamed_objects_can_be_rejected() {
        let config = Config::new().with_allow_unnamed_objects(false);
        let input = InputSpan::new_extra("Timestep { }", config);

        let Err(nom::Err::Failure(error)) = parse_complete(input) else {
            panic!("expected a failure");
        };

        assert!(matches!(
            error.errors[0].reason,
            ParserErrorReason::UnnamedObject { .. }
        ));
    }

    #[test]
    fn object_extent_balances_braces() {
        let text = "A { B { } c = \"}\" } D { }";
        assert_eq!(object_extent(text), 19);
    }
}
