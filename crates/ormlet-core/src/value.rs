//! Scalar values exchanged with the database.
//!
//! Every value that crosses the executor boundary, in either direction, is
//! one of these variants. Temporal and decimal values are carried as text:
//! the engine never does arithmetic on them, it only moves them between
//! instances and statements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar database value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Signed integer (`INT`, `SERIAL`).
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Fixed-point decimal, kept as text to avoid rounding.
    Decimal(String),
    /// Character data (`VARCHAR`).
    Text(String),
    /// Calendar date as ISO-8601 text (`YYYY-MM-DD`).
    Date(String),
    /// Timestamp as ISO-8601 text.
    Timestamp(String),
}

impl Value {
    /// Check whether this value is SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
        }
    }

    /// Get the integer payload, if this is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the textual payload for any string-backed variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Decimal(s) | Value::Text(s) | Value::Date(s) | Value::Timestamp(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Decimal(s) | Value::Text(s) | Value::Date(s) | Value::Timestamp(s) => {
                write!(f, "{s}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
