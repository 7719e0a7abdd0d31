//! Errors raised while parsing a model description.

use std::fmt;

use epbridge_shared::{
    error::{AsBridgeError, Context, ErrorLocation},
    span::Span,
};

use crate::{
    InputSpan,
    token::{
        Token,
        error::{IncompleteKind, TokenError, TokenErrorKind},
    },
};

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

pub mod partial;
pub use partial::ErrorsWithPartialResult;

pub mod reason;
use reason::ParserErrorReason;

/// A syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    /// The offset in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    const fn new(error_offset: usize, reason: ParserErrorReason) -> Self {
        Self {
            error_offset,
            reason,
        }
    }

    const fn from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self::new(error.offset, reason)
    }

    /// An object was expected at the top level
    pub(crate) const fn expect_object(error: TokenError) -> Self {
        Self::from_token_error(error, ParserErrorReason::ExpectObject)
    }

    /// No value follows the `=` of a field
    pub(crate) fn expect_value(equals: &Token<'_>) -> impl Fn(Self) -> Self {
        let equals_span = equals.lexeme_span;
        move |error| Self::new(error.error_offset, ParserErrorReason::ExpectValue { equals_span })
    }

    /// No `{` follows an object kind
    pub(crate) fn missing_open_brace(kind: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let kind_span = kind.lexeme_span;
        move |error| Self::from_token_error(error, ParserErrorReason::MissingOpenBrace { kind_span })
    }

    /// An identifier inside an object is followed by neither `=` nor `{`
    pub(crate) fn missing_equals_or_brace(ident: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let ident_span = ident.lexeme_span;
        move |error| {
            Self::from_token_error(error, ParserErrorReason::MissingEqualsOrBrace { ident_span })
        }
    }

    /// No quoted name follows `@`
    pub(crate) fn missing_reference_name(at: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let at_span = at.lexeme_span;
        move |error| {
            Self::from_token_error(error, ParserErrorReason::MissingReferenceName { at_span })
        }
    }

    /// An object body is never closed
    pub(crate) fn unclosed_object(open_brace: &Token<'_>) -> impl Fn(Self) -> Self {
        let open_brace_span = open_brace.lexeme_span;
        move |error| {
            Self::new(
                error.error_offset,
                ParserErrorReason::UnclosedObject { open_brace_span },
            )
        }
    }

    /// An object has no name while names are required
    pub(crate) const fn unnamed_object(kind: &Token<'_>) -> Self {
        let kind_span = kind.lexeme_span;
        Self::new(
            kind_span.start().offset,
            ParserErrorReason::UnnamedObject { kind_span },
        )
    }

    /// A number lexeme could not be converted
    pub(crate) const fn invalid_number(number: &Token<'_>) -> Self {
        let number_span = number.lexeme_span;
        Self::new(
            number_span.start().offset,
            ParserErrorReason::InvalidNumber { number_span },
        )
    }

    /// Input remains after the last object
    pub(crate) const fn unexpected_token(offset: usize) -> Self {
        Self::new(offset, ParserErrorReason::UnexpectedToken)
    }

    /// Returns true if the error was raised by the token layer and only
    /// says which token was expected.
    #[must_use]
    pub const fn is_expect_error(&self) -> bool {
        matches!(
            self.reason,
            ParserErrorReason::TokenError(TokenErrorKind::Expect(_))
        )
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "only the end of input error kind has its own reason"
        )]
        let reason = match kind {
            nom::error::ErrorKind::Eof => ParserErrorReason::UnexpectedToken,
            _ => ParserErrorReason::NomError(kind),
        };

        Self::new(input.location_offset(), reason)
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self::new(e.offset, ParserErrorReason::TokenError(e.kind))
    }
}

fn describe_line(span: &Span) -> String {
    format!("line {}", span.start().line)
}

impl AsBridgeError for ParserError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self.reason {
            ParserErrorReason::ExpectObject => vec![Context::Help(
                "a model description is a list of objects such as `ThermalZone \"Core\" { }`"
                    .to_string(),
            )],
            ParserErrorReason::ExpectValue { .. } => vec![Context::Help(
                "values are numbers, quoted strings, `true`, `false`, `autosize` or `@\"Name\"`"
                    .to_string(),
            )],
            ParserErrorReason::MissingOpenBrace { kind_span } => vec![Context::Note(format!(
                "the object starts on {}",
                describe_line(&kind_span)
            ))],
            ParserErrorReason::MissingEqualsOrBrace { .. } => vec![Context::Help(
                "fields are written `name = value` and nested objects `Kind \"Name\" { }`"
                    .to_string(),
            )],
            ParserErrorReason::MissingReferenceName { .. } => vec![Context::Help(
                "references are written `@\"Name\"`".to_string(),
            )],
            ParserErrorReason::UnclosedObject { open_brace_span } => vec![Context::Note(format!(
                "the `{{` on {} is never closed",
                describe_line(&open_brace_span)
            ))],
            ParserErrorReason::UnnamedObject { .. } => vec![Context::Help(
                "give the object a quoted name after its kind".to_string(),
            )],
            ParserErrorReason::TokenError(TokenErrorKind::Incomplete(
                IncompleteKind::UnclosedString { .. },
            )) => vec![Context::Note(
                "strings must end on the line they start on".to_string(),
            )],
            ParserErrorReason::UnexpectedToken
            | ParserErrorReason::InvalidNumber { .. }
            | ParserErrorReason::TokenError(
                TokenErrorKind::Expect(_)
                | TokenErrorKind::NomError(_)
                | TokenErrorKind::Incomplete(
                    IncompleteKind::InvalidDecimalPart { .. }
                    | IncompleteKind::InvalidExponentPart { .. },
                ),
            )
            | ParserErrorReason::NomError(_) => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(ErrorLocation::from_source_and_offset(
            source,
            self.error_offset,
        ))
    }
}
