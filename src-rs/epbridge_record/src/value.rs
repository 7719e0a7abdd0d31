use std::fmt;

/// The value of one record field slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text or a choice keyword
    Text(String),
    /// A real number
    Number(f64),
    /// An integer
    Integer(i64),
    /// The name of another record
    Reference(String),
    /// The autosize sentinel
    Autosize,
}

impl FieldValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a reference to the record named `name`.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Creates the `Yes`/`No` text value the engine uses for booleans.
    #[must_use]
    pub fn yes_no(value: bool) -> Self {
        Self::text(if value { "Yes" } else { "No" })
    }

    /// Returns the referenced record name, if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        if let Self::Reference(name) = self {
            Some(name)
        } else {
            None
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(text) = self {
            Some(text)
        } else {
            None
        }
    }

    /// Returns the number, if this is a real or integer value.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer fields hold small counts and indices"
    )]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Integer(integer) => Some(*integer as f64),
            Self::Text(_) | Self::Reference(_) | Self::Autosize => None,
        }
    }

    /// Returns true if this is the autosize sentinel.
    #[must_use]
    pub const fn is_autosize(&self) -> bool {
        matches!(self, Self::Autosize)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Reference(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Autosize => f.write_str("Autosize"),
        }
    }
}
