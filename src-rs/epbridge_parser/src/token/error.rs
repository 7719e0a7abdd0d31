//! Errors raised by token parsers.

use nom::error::{ErrorKind, ParseError};

use crate::util::InputSpan;

pub use crate::error::ErrorHandlingParser;

/// An error that occurred while reading a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// What went wrong
    pub kind: TokenErrorKind,
    /// The offset in the source where it went wrong
    pub offset: usize,
}

/// The different kinds of token errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// A specific token was expected
    Expect(ExpectKind),
    /// A token was started but not finished
    Incomplete(IncompleteKind),
    /// A low-level nom error
    NomError(ErrorKind),
}

/// The tokens that can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// An identifier
    Identifier,
    /// A number
    Number,
    /// A double-quoted string
    String,
    /// A keyword
    Keyword(ExpectKeyword),
    /// A symbol
    Symbol(ExpectSymbol),
}

/// The keywords that can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKeyword {
    /// `autosize`
    Autosize,
    /// `false`
    False,
    /// `true`
    True,
}

/// The symbols that can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// `@`
    At,
    /// `{`
    BraceLeft,
    /// `}`
    BraceRight,
    /// `=`
    Equals,
    /// `;`
    Semicolon,
}

/// Tokens that were started but not finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// A string without a closing quote on the same line
    UnclosedString {
        /// The offset of the opening quote
        open_quote_offset: usize,
    },
    /// A decimal point without digits after it
    InvalidDecimalPart {
        /// The offset of the decimal point
        decimal_point_offset: usize,
    },
    /// An exponent marker without digits after it
    InvalidExponentPart {
        /// The offset of the `e`
        e_offset: usize,
    },
}

impl TokenError {
    const fn new(kind: TokenErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    const fn with_kind(self, kind: TokenErrorKind) -> Self {
        Self { kind, ..self }
    }

    const fn expected(self, kind: ExpectKind) -> Self {
        self.with_kind(TokenErrorKind::Expect(kind))
    }

    /// An identifier was expected
    #[must_use]
    pub const fn expected_identifier(error: Self) -> Self {
        error.expected(ExpectKind::Identifier)
    }

    /// A number was expected
    #[must_use]
    pub const fn expected_number(error: Self) -> Self {
        error.expected(ExpectKind::Number)
    }

    /// A string was expected
    #[must_use]
    pub const fn expected_string(error: Self) -> Self {
        error.expected(ExpectKind::String)
    }

    /// `autosize` was expected
    #[must_use]
    pub const fn expected_keyword_autosize(error: Self) -> Self {
        error.expected(ExpectKind::Keyword(ExpectKeyword::Autosize))
    }

    /// `false` was expected
    #[must_use]
    pub const fn expected_keyword_false(error: Self) -> Self {
        error.expected(ExpectKind::Keyword(ExpectKeyword::False))
    }

    /// `true` was expected
    #[must_use]
    pub const fn expected_keyword_true(error: Self) -> Self {
        error.expected(ExpectKind::Keyword(ExpectKeyword::True))
    }

    /// `@` was expected
    #[must_use]
    pub const fn expected_symbol_at(error: Self) -> Self {
        error.expected(ExpectKind::Symbol(ExpectSymbol::At))
    }

    /// `{` was expected
    #[must_use]
    pub const fn expected_symbol_brace_left(error: Self) -> Self {
        error.expected(ExpectKind::Symbol(ExpectSymbol::BraceLeft))
    }

    /// `}` was expected
    #[must_use]
    pub const fn expected_symbol_brace_right(error: Self) -> Self {
        error.expected(ExpectKind::Symbol(ExpectSymbol::BraceRight))
    }

    /// `=` was expected
    #[must_use]
    pub const fn expected_symbol_equals(error: Self) -> Self {
        error.expected(ExpectKind::Symbol(ExpectSymbol::Equals))
    }

    /// `;` was expected
    #[must_use]
    pub const fn expected_symbol_semicolon(error: Self) -> Self {
        error.expected(ExpectKind::Symbol(ExpectSymbol::Semicolon))
    }

    /// The string opened at `open_quote` is never closed
    pub fn unclosed_string(open_quote: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let open_quote_offset = open_quote.location_offset();
        move |error| {
            error.with_kind(TokenErrorKind::Incomplete(IncompleteKind::UnclosedString {
                open_quote_offset,
            }))
        }
    }

    /// The decimal point at `decimal_point` has no digits after it
    pub fn invalid_decimal_part(decimal_point: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let decimal_point_offset = decimal_point.location_offset();
        move |error| {
            error.with_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidDecimalPart {
                    decimal_point_offset,
                },
            ))
        }
    }

    /// The exponent marker at `e` has no digits after it
    pub fn invalid_exponent_part(e: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let e_offset = e.location_offset();
        move |error| {
            error.with_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { e_offset },
            ))
        }
    }
}

impl<'a> ParseError<InputSpan<'a>> for TokenError {
    fn from_error_kind(input: InputSpan<'a>, kind: ErrorKind) -> Self {
        Self::new(TokenErrorKind::NomError(kind), input.location_offset())
    }

    fn append(_input: InputSpan<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
