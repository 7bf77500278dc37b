//! Attribute values and instances.

use std::fmt;

/// A single attribute value, resolved to its kind at load time.
///
/// Distance treats the two kinds differently: nominal values compare by
/// equality (match = 0, mismatch = 1), numeric values by arithmetic
/// difference.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Categorical (textual) attribute.
    Nominal(String),
    /// Real-valued attribute.
    Numeric(f64),
}

impl Value {
    /// Creates a nominal value.
    pub fn nominal<T: Into<String>>(name: T) -> Self {
        Value::Nominal(name.into())
    }

    /// Creates a numeric value.
    pub fn numeric(v: f64) -> Self {
        Value::Numeric(v)
    }

    /// Returns true if this is a nominal value.
    pub fn is_nominal(&self) -> bool {
        matches!(self, Value::Nominal(_))
    }

    /// Returns true if this is a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric(_))
    }

    /// Returns the numeric payload, if any.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(v) => Some(*v),
            Value::Nominal(_) => None,
        }
    }

    /// Returns true if both values are of the same kind.
    pub(crate) fn same_kind(&self, other: &Value) -> bool {
        matches!(
            (self, other),
            (Value::Nominal(_), Value::Nominal(_)) | (Value::Numeric(_), Value::Numeric(_))
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nominal(name) => f.write_str(name),
            Value::Numeric(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::Nominal(name.to_string())
    }
}

impl From<String> for Value {
    fn from(name: String) -> Self {
        Value::Nominal(name)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Numeric(v)
    }
}

/// One data row: an ordered sequence of attribute values of fixed length,
/// with the class label held at the configured class index.
pub type Instance = Vec<Value>;
