//! The schema catalog: every declared entity, in one place.
//!
//! A [`SchemaCatalog`] is constructed once during bootstrap and passed by
//! reference into schema and CRUD calls. It owns three things: the
//! registered entity definitions, the table-to-primary-key map that table
//! creation populates, and the ordered list of pending many-to-many links
//! waiting to become junction tables. There is no global state; two
//! catalogs are fully independent.

use std::collections::HashMap;
use std::sync::Arc;

use ormlet_core::{EntityDef, Error, Result};

/// A many-to-many link recorded while creating the owning table.
///
/// The junction table itself is synthesized later, once both partners
/// have registered primary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLink {
    /// Table whose declaration owns the link field.
    pub table: String,
    /// The declaring field's name.
    pub field: String,
    /// Partner table, taken from the field's foreign key.
    pub target_table: String,
}

/// Registry of entity definitions and relationship bookkeeping.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    entities: Vec<Arc<EntityDef>>,
    primary_keys: HashMap<String, String>,
    links: Vec<PendingLink>,
}

impl SchemaCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition.
    ///
    /// Registering a name twice is fatal: the caller gets
    /// [`Error::DuplicateEntity`] and the catalog keeps the first
    /// definition.
    pub fn register(&mut self, def: EntityDef) -> Result<Arc<EntityDef>> {
        if self.entity(def.name()).is_some() {
            return Err(Error::DuplicateEntity {
                entity: def.name().to_string(),
            });
        }
        let def = Arc::new(def);
        self.entities.push(Arc::clone(&def));
        Ok(def)
    }

    /// Look up a registered entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Arc<EntityDef>> {
        self.entities.iter().find(|e| e.name() == name)
    }

    /// Registered entities, in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &Arc<EntityDef>> {
        self.entities.iter()
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether no entities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The primary key column recorded for a table, if its table has
    /// been created.
    #[must_use]
    pub fn primary_key(&self, table: &str) -> Option<&str> {
        self.primary_keys.get(table).map(String::as_str)
    }

    /// Record a table's primary key column. Called during table creation.
    pub fn record_primary_key(&mut self, table: impl Into<String>, column: impl Into<String>) {
        self.primary_keys.insert(table.into(), column.into());
    }

    /// Record a pending many-to-many link. Called during table creation.
    pub fn record_link(&mut self, link: PendingLink) {
        self.links.push(link);
    }

    /// Pending links, in the order they were recorded.
    #[must_use]
    pub fn links(&self) -> &[PendingLink] {
        &self.links
    }
}
