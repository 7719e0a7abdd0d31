use epbridge_shared::span::{SourceLocation, Span};
use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

use super::config::Config;

/// A span of text in the input string.
///
/// Besides the text, the span carries the parser configuration.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A parser over [`InputSpan`]s.
///
/// Implemented for every nom parser with the matching input type.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}

pub fn source_location_from(input_span: InputSpan<'_>) -> SourceLocation {
    SourceLocation {
        offset: input_span.location_offset(),
        line: usize::try_from(input_span.location_line()).unwrap_or(usize::MAX),
        column: input_span.get_column(),
    }
}

pub fn span_from(start_input_span: InputSpan<'_>, end_input_span: InputSpan<'_>) -> Span {
    Span::new(
        source_location_from(start_input_span),
        source_location_from(end_input_span),
    )
}

/// Returns a span running from the start of `start` to the end of `end`.
pub fn join_spans(start: &Span, end: &Span) -> Span {
    Span::new(*start.start(), *end.end())
}
