use nom::{Parser, error::ParseError};

/// Error conversion helpers for nom parsers.
///
/// Token parsers produce [`TokenError`](crate::token::error::TokenError)s and
/// grammar rules produce [`ParserError`](super::ParserError)s. These methods
/// convert between the two while keeping nom's distinction between a
/// recoverable `Error` (try the next alternative) and an unrecoverable
/// `Failure` (stop and report).
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts recoverable errors with `convert_error` and unrecoverable
    /// errors with `From`.
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Turns recoverable errors into failures built by `convert_error`.
    ///
    /// Used once a rule has committed, for example after the opening brace
    /// of an object, where trying another alternative would only hide the
    /// real problem.
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Failure(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Converts both kinds of error with `From`.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(e.into()),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
