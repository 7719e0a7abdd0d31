//! Errors that come with whatever could still be parsed.

use nom::error::ParseError;

use crate::error::ParserError;

/// A parse that failed, together with the part of the result that did
/// parse.
///
/// The model parser recovers from a broken object by skipping it, so one run
/// can report every syntax error in a file. The objects that parsed cleanly
/// are kept in `partial_result`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorsWithPartialResult<T, E> {
    /// The part of the result that parsed
    pub partial_result: T,
    /// Every error encountered, in source order
    pub errors: Vec<E>,
}

impl<T, E> ErrorsWithPartialResult<T, E> {
    /// Creates a new `ErrorsWithPartialResult`.
    #[must_use]
    pub const fn new(partial_result: T, errors: Vec<E>) -> Self {
        Self {
            partial_result,
            errors,
        }
    }
}

impl<I, T, E> ParseError<I> for ErrorsWithPartialResult<Vec<T>, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: nom::error::ErrorKind) -> Self {
        Self::new(Vec::new(), vec![E::from_error_kind(input, kind)])
    }

    fn append(_input: I, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<T, E> From<E> for ErrorsWithPartialResult<Vec<T>, ParserError>
where
    E: Into<ParserError>,
{
    fn from(e: E) -> Self {
        Self::new(Vec::new(), vec![e.into()])
    }
}
