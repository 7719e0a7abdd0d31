//! Number and string literals.

use nom::{
    Parser as _,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, one_of},
    combinator::opt,
};

use crate::{
    token::{
        Token,
        error::{ErrorHandlingParser, TokenError},
        token,
    },
    util::{InputSpan, Result},
};

/// Parses a number with an optional sign, decimal part and exponent.
///
/// Every lexeme accepted here is also accepted by `str::parse::<f64>`.
///
/// - Integers: `42`, `-17`, `+123`
/// - Decimals: `0.009`, `-2.5`
/// - Exponents: `1e5`, `9.44E-3`
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let opt_sign = opt(one_of("+-"));

    let opt_decimal = opt(|input| -> Result<'_, (), TokenError> {
        let (rest, decimal_point) = tag(".").parse(input)?;
        let (rest, _) = digit1
            .or_fail_with(TokenError::invalid_decimal_part(decimal_point))
            .parse(rest)?;
        Ok((rest, ()))
    });

    let opt_exponent = opt(|input| -> Result<'_, (), TokenError> {
        let (rest, e) = tag("e").or(tag("E")).parse(input)?;
        let (rest, _) = opt(one_of("+-")).parse(rest)?;
        let (rest, _) = digit1
            .or_fail_with(TokenError::invalid_exponent_part(e))
            .parse(rest)?;
        Ok((rest, ()))
    });

    token(
        (opt_sign, digit1, opt_decimal, opt_exponent),
        TokenError::expected_number,
    )
    .parse(input)
}

/// Parses a double-quoted string that ends on the same line.
///
/// The returned lexeme includes the quotes. There are no escape sequences.
pub fn string(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| -> Result<'_, (), TokenError> {
            let (rest, open_quote) = tag("\"").parse(input)?;
            let (rest, _) = take_while(|c: char| c != '"' && c != '\n' && c != '\r').parse(rest)?;
            let (rest, _) = char('"')
                .or_fail_with(TokenError::unclosed_string(open_quote))
                .parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_string,
    )
    .parse(input)
}

/// Returns the contents of a string lexeme without its quotes.
#[must_use]
pub fn string_contents(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme)
}
