//! Field descriptors for entity declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FieldType;

/// A foreign key target: the referenced table and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// Referenced table name.
    pub table: String,
    /// Referenced column name.
    pub column: String,
}

impl ForeignKeyRef {
    /// Create a new foreign key reference.
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ForeignKeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.table, self.column)
    }
}

/// Metadata about one declared field.
///
/// Built with a chained builder and validated when the owning entity is
/// built; see `EntityBuilder::build` for the rules.
///
/// `min_value`/`max_value` are advisory bounds: they are carried as
/// metadata for callers to inspect but never enforced before a statement
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name.
    pub name: String,
    /// Declared SQL type.
    pub field_type: FieldType,
    /// Whether this column is the primary key.
    pub primary_key: bool,
    /// Foreign key target, if any.
    pub foreign_key: Option<ForeignKeyRef>,
    /// Maximum length, VARCHAR only.
    pub max_length: Option<u32>,
    /// Advisory lower bound for numeric fields.
    pub min_value: Option<i64>,
    /// Advisory upper bound for numeric fields.
    pub max_value: Option<i64>,
    /// Whether this field declares a many-to-many link to the foreign
    /// key's table.
    pub many_to_many: bool,
}

impl FieldDef {
    /// Create a field with the required name and type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            primary_key: false,
            foreign_key: None,
            max_length: None,
            min_value: None,
            max_value: None,
            many_to_many: false,
        }
    }

    /// Set the primary key flag.
    #[must_use]
    pub fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = value;
        self
    }

    /// Set the foreign key target.
    #[must_use]
    pub fn foreign_key(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_key = Some(ForeignKeyRef::new(table, column));
        self
    }

    /// Set the maximum length (VARCHAR only).
    #[must_use]
    pub fn max_length(mut self, value: u32) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Set the advisory lower bound.
    #[must_use]
    pub fn min_value(mut self, value: i64) -> Self {
        self.min_value = Some(value);
        self
    }

    /// Set the advisory upper bound.
    #[must_use]
    pub fn max_value(mut self, value: i64) -> Self {
        self.max_value = Some(value);
        self
    }

    /// Mark this field as a many-to-many link.
    #[must_use]
    pub fn many_to_many(mut self, value: bool) -> Self {
        self.many_to_many = value;
        self
    }

    /// The SQL type for DDL, widening VARCHAR with a declared length.
    #[must_use]
    pub fn sql_type(&self) -> String {
        match (self.field_type, self.max_length) {
            (FieldType::VarChar, Some(n)) => format!("VARCHAR({n})"),
            _ => self.field_type.sql_name().to_string(),
        }
    }
}
