//! Entity definitions and the builder that validates them.
//!
//! An [`EntityDef`] is the declared schema of one table: a name and an
//! ordered list of [`FieldDef`]s. Definitions are built once through
//! [`EntityDef::builder`] during application bootstrap and are immutable
//! afterwards; declaration order is the column order in DDL and the
//! positional order used when mapping result rows back onto instances.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::FieldDef;
use crate::types::FieldType;

/// A named, ordered, validated set of field declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    name: String,
    fields: Vec<FieldDef>,
    primary_key: Option<usize>,
}

impl EntityDef {
    /// Start building an entity. The name doubles as the table name.
    pub fn builder(name: impl Into<String>) -> EntityBuilder {
        EntityBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The entity (and table) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether a field is declared.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// The primary key field, if one is declared.
    #[must_use]
    pub fn primary_key(&self) -> Option<&FieldDef> {
        self.primary_key.map(|i| &self.fields[i])
    }

    /// Fields declaring many-to-many links, in declaration order.
    pub fn link_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.many_to_many)
    }
}

/// Accumulates field declarations and validates them on `build`.
#[derive(Debug)]
pub struct EntityBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl EntityBuilder {
    /// Append a field declaration.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate the declaration and produce the immutable definition.
    ///
    /// Rejected declarations:
    /// - no fields at all;
    /// - two fields with the same name;
    /// - more than one primary key;
    /// - `max_length` on a non-VARCHAR field;
    /// - a primary key that is also a many-to-many link;
    /// - a many-to-many link without a foreign key target.
    pub fn build(self) -> Result<EntityDef> {
        if self.fields.is_empty() {
            return Err(self.definition_error("fields", "an entity needs at least one field"));
        }

        let mut primary_key = None;
        for (index, field) in self.fields.iter().enumerate() {
            if self.fields[..index].iter().any(|f| f.name == field.name) {
                return Err(self.definition_error(&field.name, "field declared more than once"));
            }
            if field.max_length.is_some() && field.field_type != FieldType::VarChar {
                return Err(
                    self.definition_error(&field.name, "max_length is only valid on VARCHAR fields")
                );
            }
            if field.primary_key && field.many_to_many {
                return Err(self.definition_error(
                    &field.name,
                    "a primary key cannot also be a many-to-many link",
                ));
            }
            if field.many_to_many && field.foreign_key.is_none() {
                return Err(self.definition_error(
                    &field.name,
                    "a many-to-many link needs a foreign key target",
                ));
            }
            if field.primary_key {
                if primary_key.is_some() {
                    return Err(self.definition_error(
                        &field.name,
                        "entity already declares a primary key",
                    ));
                }
                primary_key = Some(index);
            }
        }

        Ok(EntityDef {
            name: self.name,
            fields: self.fields,
            primary_key,
        })
    }

    fn definition_error(&self, clause: &str, message: &str) -> Error {
        Error::SchemaDefinition {
            entity: self.name.clone(),
            clause: clause.to_string(),
            message: message.to_string(),
        }
    }
}
