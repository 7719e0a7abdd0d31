//! Identifiers.

use nom::{
    Parser as _,
    bytes::complete::take_while,
    character::complete::satisfy,
};

use crate::{
    token::{Token, error::TokenError, token},
    util::{InputSpan, Result},
};

/// Returns true for characters that may continue an identifier.
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parses an identifier: a letter or `_` followed by letters, digits or `_`.
///
/// Object kinds and field names are identifiers.
pub fn identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (
            satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(is_identifier_char),
        ),
        TokenError::expected_identifier,
    )
    .parse(input)
}
