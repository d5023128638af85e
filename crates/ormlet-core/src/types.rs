//! SQL type tags and enum normalization.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;

/// The SQL types a field can be declared with.
///
/// Each tag maps to exactly one PostgreSQL type name. `VarChar` widens to
/// `VARCHAR(n)` when the field declares a maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// 32-bit integer column.
    Int,
    /// Auto-incrementing integer, generated by the database.
    Serial,
    /// Variable-length character data.
    VarChar,
    /// Calendar date.
    Date,
    /// Date and time, stored as `TIMESTAMP`.
    DateTime,
    /// Fixed-point decimal, stored as `DECIMAL(10,2)`.
    Decimal,
}

impl FieldType {
    /// The SQL rendering of this type.
    #[must_use]
    pub const fn sql_name(&self) -> &'static str {
        match self {
            FieldType::Int => "INT",
            FieldType::Serial => "SERIAL",
            FieldType::VarChar => "VARCHAR",
            FieldType::Date => "DATE",
            FieldType::DateTime => "TIMESTAMP",
            FieldType::Decimal => "DECIMAL(10,2)",
        }
    }

    /// Parse a textual type tag (case-insensitive).
    ///
    /// Accepts the declaration tags (`INT`, `SERIAL`, `VARCHAR`, `DATE`,
    /// `DATETIME`, `DECIMAL`) plus the SQL spellings they render to.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_uppercase().as_str() {
            "INT" | "INTEGER" => Ok(FieldType::Int),
            "SERIAL" => Ok(FieldType::Serial),
            "VARCHAR" => Ok(FieldType::VarChar),
            "DATE" => Ok(FieldType::Date),
            "DATETIME" | "TIMESTAMP" => Ok(FieldType::DateTime),
            "DECIMAL" | "DECIMAL(10,2)" => Ok(FieldType::Decimal),
            _ => Err(Error::InvalidFieldType {
                tag: tag.to_string(),
            }),
        }
    }

    /// Whether the database generates values for this type on insert.
    #[must_use]
    pub const fn is_auto_generated(&self) -> bool {
        matches!(self, FieldType::Serial)
    }
}

/// Enum types that can stand in for a field value.
///
/// Implementors map each variant to the scalar actually sent to the
/// database; the engine stores only the scalar.
pub trait SqlEnum {
    /// The scalar transmitted in place of the enum.
    fn to_value(&self) -> Value;
}
