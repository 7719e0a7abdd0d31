//! Punctuation.

use nom::{Parser as _, bytes::complete::tag};

use crate::{
    token::{Token, error::TokenError, token},
    util::{InputSpan, Result},
};

/// Parses `@`, which starts a reference to another object.
pub fn at(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag("@"), TokenError::expected_symbol_at).parse(input)
}

/// Parses `{`.
pub fn brace_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag("{"), TokenError::expected_symbol_brace_left).parse(input)
}

/// Parses `}`.
pub fn brace_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag("}"), TokenError::expected_symbol_brace_right).parse(input)
}

/// Parses `=`.
pub fn equals(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag("="), TokenError::expected_symbol_equals).parse(input)
}

/// Parses `;`, which may end a field assignment.
pub fn semicolon(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag(";"), TokenError::expected_symbol_semicolon).parse(input)
}
