//! Value keywords.

use nom::{
    Parser as _,
    bytes::complete::tag,
    character::complete::satisfy,
    combinator::not,
};

use crate::{
    token::{Token, error::TokenError, naming::is_identifier_char, token},
    util::{InputSpan, Result},
};

fn keyword<'a>(
    word: &'static str,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl FnMut(InputSpan<'a>) -> Result<'a, Token<'a>, TokenError> {
    let mut parser = token((tag(word), not(satisfy(is_identifier_char))), convert_error);
    move |input| parser.parse(input)
}

/// Parses `true`.
pub fn true_(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("true", TokenError::expected_keyword_true)(input)
}

/// Parses `false`.
pub fn false_(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("false", TokenError::expected_keyword_false)(input)
}

/// Parses `autosize`.
pub fn autosize(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("autosize", TokenError::expected_keyword_autosize)(input)
}
