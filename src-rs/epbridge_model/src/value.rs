//! Scalar values held by source objects.

use std::fmt;

use crate::schema::{DefaultValue, FieldType};

/// A scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number
    Number(f64),
    /// A string
    Text(String),
    /// A boolean
    Boolean(bool),
    /// The autosize marker, only valid for autosizable numeric fields
    Autosize,
}

impl Value {
    /// Returns true if this value can be stored in a field of `field_type`.
    ///
    /// The autosize marker is a numeric value. Whether the field accepts it
    /// is decided separately by the schema.
    #[must_use]
    pub const fn matches(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (Self::Number(_) | Self::Autosize, FieldType::Number)
                | (Self::Text(_), FieldType::Text)
                | (Self::Boolean(_), FieldType::Boolean)
        )
    }

    /// Returns a short name for the type of this value, for messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Autosize => "autosize",
        }
    }

    pub(crate) fn from_default(default: DefaultValue) -> Option<Self> {
        match default {
            DefaultValue::Number(number) => Some(Self::Number(number)),
            DefaultValue::Text(text) => Some(Self::Text(text.to_string())),
            DefaultValue::Boolean(boolean) => Some(Self::Boolean(boolean)),
            DefaultValue::Autosize => Some(Self::Autosize),
            DefaultValue::None => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
            Self::Autosize => f.write_str("autosize"),
        }
    }
}

/// A scalar value together with whether it came from the schema default.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    value: Value,
    defaulted: bool,
}

impl Scalar {
    /// Creates an explicitly set scalar.
    #[must_use]
    pub const fn explicit(value: Value) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    /// Creates a scalar holding a schema default.
    #[must_use]
    pub const fn defaulted(value: Value) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns true if the value was filled in from the schema default.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        self.defaulted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autosize_is_a_number() {
        assert!(Value::Autosize.matches(FieldType::Number));
        assert!(!Value::Autosize.matches(FieldType::Text));
    }

    #[test]
    fn values_only_match_their_own_type() {
        assert!(Value::Number(1.0).matches(FieldType::Number));
        assert!(!Value::Number(1.0).matches(FieldType::Boolean));
        assert!(Value::Text("Max".to_string()).matches(FieldType::Text));
        assert!(!Value::Boolean(true).matches(FieldType::Text));
    }

    #[test]
    fn absent_default_has_no_value() {
        assert_eq!(Value::from_default(DefaultValue::None), None);
        assert_eq!(
            Value::from_default(DefaultValue::Text("Sum")),
            Some(Value::Text("Sum".to_string()))
        );
    }
}
