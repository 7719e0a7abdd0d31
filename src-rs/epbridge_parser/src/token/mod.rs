//! Token parsers for the model description format.
//!
//! The format is free-form: whitespace, line breaks and `#` comments may
//! appear between any two tokens. Every token parser consumes the layout
//! that follows its lexeme, so the grammar rules in the parent module never
//! deal with it.
//!
//! - `keyword`: `true`, `false` and `autosize`
//! - `literal`: numbers and double-quoted strings
//! - `naming`: identifiers for object kinds and fields
//! - `symbol`: braces, `=`, `@` and `;`

use epbridge_shared::span::Span;
use nom::{
    Parser as _,
    branch::alt,
    character::complete::{char, multispace1, not_line_ending},
    combinator::recognize,
    multi::many0,
};

use crate::util::{InputSpan, Parser, Result, span_from};

pub mod error;
pub mod keyword;
pub mod literal;
pub mod naming;
pub mod symbol;

use error::{ErrorHandlingParser, TokenError};

/// A lexeme together with the layout that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The text of the lexeme
    pub lexeme_str: &'a str,
    /// Where the lexeme is
    pub lexeme_span: Span,
    /// Where the layout after the lexeme is
    pub whitespace_span: Span,
}

fn comment(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((char('#'), not_line_ending)).parse(input)
}

/// Consumes whitespace, line breaks and comments. Always succeeds.
pub fn layout(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize(many0(alt((multispace1, comment)))).parse(input)
}

/// Wraps `f` so that it returns a [`Token`] and consumes trailing layout.
///
/// Recoverable errors from `f` are passed through `convert_error` so that
/// they say which token was expected.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input| {
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;
        let lexeme_span = span_from(lexeme, rest);

        let (after_layout, _) = layout.parse(rest)?;
        let whitespace_span = span_from(rest, after_layout);

        let token = Token {
            lexeme_str: lexeme.fragment(),
            lexeme_span,
            whitespace_span,
        };

        Ok((after_layout, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use nom::bytes::complete::tag;

    #[test]
    fn layout_skips_comments_and_blank_lines() {
        let input = InputSpan::new_extra("  # a comment\n\n\t Zone", Config::default());
        let (rest, _) = layout(input).expect("layout always succeeds");
        assert_eq!(rest.fragment(), &"Zone");
    }

    #[test]
    fn layout_accepts_empty_input() {
        let input = InputSpan::new_extra("", Config::default());
        let (rest, skipped) = layout(input).expect("layout always succeeds");
        assert_eq!(rest.fragment(), &"");
        assert_eq!(skipped.fragment(), &"");
    }

    #[test]
    fn token_consumes_trailing_layout() {
        let mut parser = token(tag("Zone"), TokenError::expected_identifier);
        let input = InputSpan::new_extra("Zone  # trailing\n  \"Core\"", Config::default());

        let (rest, matched) = parser.parse(input).expect("token should match");

        assert_eq!(matched.lexeme_str, "Zone");
        assert_eq!(matched.lexeme_span.start().offset, 0);
        assert_eq!(matched.lexeme_span.end().offset, 4);
        assert_eq!(rest.fragment(), &"\"Core\"");
    }

    #[test]
    fn token_reports_converted_error() {
        let mut parser = token(tag("Zone"), TokenError::expected_identifier);
        let input = InputSpan::new_extra("Space", Config::default());

        let Err(nom::Err::Error(err)) = parser.parse(input) else {
            panic!("expected a recoverable error");
        };

        assert_eq!(
            err.kind,
            error::TokenErrorKind::Expect(error::ExpectKind::Identifier)
        );
        assert_eq!(err.offset, 0);
    }
}
