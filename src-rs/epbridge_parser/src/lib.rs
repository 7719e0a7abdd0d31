//! Parser for epbridge model descriptions
//!
//! A model description is a text file listing the objects of a source
//! model:
//!
//! ```text
//! # a zone with one office space
//! ThermalZone "Core" {
//!     use_ideal_air_loads = true
//!     Space "Office" {
//!         floor_area = 120
//!         design_specification_outdoor_air = @"Office OA"
//!     }
//! }
//!
//! DesignSpecificationOutdoorAir "Office OA" {
//!     outdoor_air_method = "Maximum"
//! }
//! ```
//!
//! Nested objects are owned by the enclosing object. `@"Name"` refers to
//! another object by name.

use std::fmt;

use epbridge_model::SourceModel;
use epbridge_shared::error::{AsBridgeError, Context, ErrorLocation};

pub mod ast;
mod config;
pub mod error;
mod lower;
mod model;
mod object;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

pub use config::Config;
pub use lower::{LoweringError, lower};

use ast::ObjectNode;
use error::{ErrorsWithPartialResult, ParserError};

/// Parses a model description into a syntax tree.
///
/// # Errors
///
/// Returns every syntax error in the input together with the objects that
/// parsed cleanly.
pub fn parse_objects(
    input: &str,
    config: Option<Config>,
) -> Result<Vec<ObjectNode>, ErrorsWithPartialResult<Vec<ObjectNode>, ParserError>> {
    parse(input, config, model::parse_complete)
}

/// Parses a single object declaration.
///
/// # Errors
///
/// Returns an error if the input is not exactly one valid object.
pub fn parse_object(input: &str, config: Option<Config>) -> Result<ObjectNode, ParserError> {
    parse(input, config, object::parse_complete)
}

/// An error from [`parse_model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseModelError {
    /// The text is not well formed
    Syntax(ParserError),
    /// The text is well formed but does not describe a valid model
    Lowering(LoweringError),
}

impl fmt::Display for ParseModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(error) => write!(f, "{error}"),
            Self::Lowering(error) => write!(f, "{error}"),
        }
    }
}

impl AsBridgeError for ParseModelError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Syntax(error) => error.context(),
            Self::Lowering(error) => error.context(),
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Syntax(error) => error.error_location(source),
            Self::Lowering(error) => error.error_location(source),
        }
    }
}

/// Parses a model description and lowers it into a [`SourceModel`].
///
/// Lowering only happens when the text has no syntax errors.
///
/// # Errors
///
/// Returns every syntax error, or every lowering error if the syntax was
/// valid.
pub fn parse_model(input: &str, config: Option<Config>) -> Result<SourceModel, Vec<ParseModelError>> {
    let objects = parse_objects(input, config).map_err(|error| {
        error
            .errors
            .into_iter()
            .map(ParseModelError::Syntax)
            .collect::<Vec<_>>()
    })?;

    lower(&objects).map_err(|errors| {
        errors
            .into_iter()
            .map(ParseModelError::Lowering)
            .collect()
    })
}

fn parse<T, E>(
    input: &str,
    config: Option<Config>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, E>,
) -> Result<T, E> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);
    let result = parser(input);

    match result {
        Ok((_rest, ast)) => Ok(ast),
        Err(nom::Err::Incomplete(_needed)) => unreachable!(
            "only `complete` combinators are used, which never report incomplete input"
        ),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epbridge_model::ObjectKind;

    #[test]
    fn parse_model_builds_source_model() {
        let model = parse_model(
            r#"
            Timestep { number_of_timesteps_per_hour = 4 }
            ThermalZone "Core" {
                Space "Office" { floor_area = 120 }
            }
            "#,
            None,
        )
        .expect("model should parse");

        assert_eq!(model.len(), 3);
        assert!(model.contains_kind(ObjectKind::Timestep));
        let timestep = model
            .objects_of_kind(ObjectKind::Timestep)
            .next()
            .expect("timestep exists");
        assert_eq!(timestep.name(), None);
        assert_eq!(timestep.number("number_of_timesteps_per_hour"), Some(4.0));
    }

    #[test]
    fn syntax_errors_stop_before_lowering() {
        let errors = parse_model("Spaceship \"A\" { speed = }", None).expect_err("should fail");

        assert!(matches!(errors.as_slice(), [ParseModelError::Syntax(_)]));
    }

    #[test]
    fn lowering_errors_have_locations() {
        let source = "Space \"A\" {\n  space_type = @\"Nowhere\"\n}\n";
        let errors = parse_model(source, None).expect_err("should fail");

        let [error] = errors.as_slice() else {
            panic!("expected one error");
        };
        let location = error
            .error_location(source)
            .expect("lowering errors have locations");
        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 16);
    }

    #[test]
    fn single_object() {
        let object = parse_object("  Lights \"L\" { lighting_level = 200 }  ", None)
            .expect("object should parse");
        assert_eq!(object.kind().value(), "Lights");
    }

    #[test]
    fn single_object_rejects_trailing_input() {
        let error = parse_object("Lights \"L\" { } }", None).expect_err("should fail");
        assert_eq!(error.error_offset, 15);
    }
}
