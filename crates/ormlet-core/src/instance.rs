//! Runtime value bags bound to an entity definition.
//!
//! An [`Instance`] is one in-memory table row: a shared handle on its
//! [`EntityDef`] plus a value per declared field. Fields the caller never
//! set hold [`Value::Null`]. The session mutates instances when the
//! database reports generated or refreshed values back.

use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::EntityDef;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;

/// A runtime row value for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    def: Arc<EntityDef>,
    values: HashMap<String, Value>,
}

impl Instance {
    /// Create an instance with every field unset (null).
    #[must_use]
    pub fn new(def: Arc<EntityDef>) -> Self {
        let values = def
            .fields()
            .iter()
            .map(|f| (f.name.clone(), Value::Null))
            .collect();
        Self { def, values }
    }

    /// Create an instance from (field, value) pairs.
    ///
    /// Unnamed fields stay null. A pair naming an undeclared field fails
    /// with [`Error::UnknownField`].
    pub fn with_values<I, K, V>(def: Arc<EntityDef>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut instance = Self::new(def);
        for (field, value) in pairs {
            instance.set(field.as_ref(), value)?;
        }
        Ok(instance)
    }

    /// Build an instance directly from a result row.
    #[must_use]
    pub fn from_row(def: Arc<EntityDef>, row: &Row) -> Self {
        let mut instance = Self::new(def);
        instance.apply_row(row);
        instance
    }

    /// The entity this instance belongs to.
    #[must_use]
    pub fn entity(&self) -> &Arc<EntityDef> {
        &self.def
    }

    /// Get a field's current value. `None` means the field is undeclared.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Set a declared field's value.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(Error::UnknownField {
                entity: self.def.name().to_string(),
                field: field.to_string(),
            }),
        }
    }

    /// The current value of the primary key field, if one is declared.
    #[must_use]
    pub fn primary_key_value(&self) -> Option<&Value> {
        self.def
            .primary_key()
            .and_then(|pk| self.values.get(&pk.name))
    }

    /// Ordered (columns, values) for INSERT.
    ///
    /// Walks fields in declaration order and keeps only non-null values,
    /// so unset SERIAL keys never appear in the column list and the
    /// database is free to generate them.
    #[must_use]
    pub fn to_insert_pairs(&self) -> (Vec<String>, Vec<Value>) {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        for field in self.def.fields() {
            if let Some(value) = self.values.get(&field.name) {
                if value.is_null() {
                    continue;
                }
                columns.push(field.name.clone());
                values.push(value.clone());
            }
        }
        (columns, values)
    }

    /// Write database-returned values back onto this instance.
    ///
    /// Every returned column that names a declared field is copied in;
    /// anything else in the row is ignored.
    pub fn apply_row(&mut self, row: &Row) {
        for (column, value) in row.iter() {
            if let Some(slot) = self.values.get_mut(column) {
                *slot = value.clone();
            }
        }
    }
}
