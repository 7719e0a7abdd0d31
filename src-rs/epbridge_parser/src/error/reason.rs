//! Why a parse failed.

use std::fmt;

use epbridge_shared::span::Span;
use nom::error::ErrorKind;

use crate::token::error::{
    ExpectKeyword, ExpectKind as TokenExpectKind, ExpectSymbol, IncompleteKind as TokenIncompleteKind,
    TokenErrorKind,
};

/// The reason a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// An object declaration was expected at the top level
    ExpectObject,
    /// A value was expected after `=`
    ExpectValue {
        /// The span of the `=`
        equals_span: Span,
    },
    /// An object kind was not followed by `{`
    MissingOpenBrace {
        /// The span of the kind keyword
        kind_span: Span,
    },
    /// An identifier inside an object was followed by neither `=` nor `{`
    MissingEqualsOrBrace {
        /// The span of the identifier
        ident_span: Span,
    },
    /// `@` was not followed by the name of an object
    MissingReferenceName {
        /// The span of the `@`
        at_span: Span,
    },
    /// An object body was not closed
    UnclosedObject {
        /// The span of the `{`
        open_brace_span: Span,
    },
    /// An object was declared without a name while names are required
    UnnamedObject {
        /// The span of the kind keyword
        kind_span: Span,
    },
    /// A number that could not be read as a float
    InvalidNumber {
        /// The span of the number
        number_span: Span,
    },
    /// Something other than an object followed the last object
    UnexpectedToken,
    /// A token error
    TokenError(TokenErrorKind),
    /// A low-level nom error
    NomError(ErrorKind),
}

impl ParserErrorReason {
    /// Returns the span the error refers back to, if any.
    #[must_use]
    pub const fn related_span(&self) -> Option<&Span> {
        match self {
            Self::ExpectValue { equals_span: span }
            | Self::MissingOpenBrace { kind_span: span }
            | Self::MissingEqualsOrBrace { ident_span: span }
            | Self::MissingReferenceName { at_span: span }
            | Self::UnclosedObject {
                open_brace_span: span,
            }
            | Self::UnnamedObject { kind_span: span }
            | Self::InvalidNumber { number_span: span } => Some(span),
            Self::ExpectObject | Self::UnexpectedToken | Self::TokenError(_) | Self::NomError(_) => {
                None
            }
        }
    }
}

fn expected_token(kind: TokenExpectKind) -> &'static str {
    match kind {
        TokenExpectKind::Identifier => "expected identifier",
        TokenExpectKind::Number => "expected number",
        TokenExpectKind::String => "expected string",
        TokenExpectKind::Keyword(keyword) => match keyword {
            ExpectKeyword::Autosize => "expected `autosize`",
            ExpectKeyword::False => "expected `false`",
            ExpectKeyword::True => "expected `true`",
        },
        TokenExpectKind::Symbol(symbol) => match symbol {
            ExpectSymbol::At => "expected `@`",
            ExpectSymbol::BraceLeft => "expected `{`",
            ExpectSymbol::BraceRight => "expected `}`",
            ExpectSymbol::Equals => "expected `=`",
            ExpectSymbol::Semicolon => "expected `;`",
        },
    }
}

impl fmt::Display for ParserErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectObject => write!(f, "expected object declaration"),
            Self::ExpectValue { .. } => write!(f, "expected value after `=`"),
            Self::MissingOpenBrace { .. } => write!(f, "expected `{{` after object kind"),
            Self::MissingEqualsOrBrace { .. } => write!(f, "expected `=` or `{{`"),
            Self::MissingReferenceName { .. } => {
                write!(f, "expected quoted object name after `@`")
            }
            Self::UnclosedObject { .. } => write!(f, "expected field, object or `}}`"),
            Self::UnnamedObject { .. } => write!(f, "object has no name"),
            Self::InvalidNumber { .. } => write!(f, "invalid number"),
            Self::UnexpectedToken => write!(f, "unexpected character"),
            Self::TokenError(kind) => match kind {
                TokenErrorKind::Expect(expect) => write!(f, "{}", expected_token(*expect)),
                TokenErrorKind::Incomplete(incomplete) => match incomplete {
                    TokenIncompleteKind::UnclosedString { .. } => {
                        write!(f, "unclosed string")
                    }
                    TokenIncompleteKind::InvalidDecimalPart { .. } => {
                        write!(f, "expected digits after decimal point")
                    }
                    TokenIncompleteKind::InvalidExponentPart { .. } => {
                        write!(f, "expected digits in exponent")
                    }
                },
                TokenErrorKind::NomError(kind) => {
                    write!(f, "unexpected input ({})", kind.description())
                }
            },
            Self::NomError(kind) => write!(f, "unexpected input ({})", kind.description()),
        }
    }
}
