//! The CRUD session engine for ormlet.
//!
//! A [`Session`] owns a [`SqlExecutor`] and runs every statement the engine
//! generates: table and junction DDL, inserts, lookups, updates, deletes.
//! The session is the policy layer. It validates field names against the
//! entity before building statements, runs each mutating statement as its
//! own commit/rollback unit, and maps returned rows back onto instances.
//!
//! # Transaction discipline
//!
//! - Mutating statements (DDL, INSERT, UPDATE, DELETE) commit on success
//!   and roll back on failure before the error propagates.
//! - Reads (SELECT) run outside any commit. The refresh SELECT after an
//!   `update` is advisory: a crash between the committed UPDATE and the
//!   refresh leaves the database correct and the in-memory instance stale.
//!
//! # Example
//!
//! ```ignore
//! let mut session = Session::new(executor);
//! let mut catalog = SchemaCatalog::new();
//! let users = catalog.register(users_def)?;
//!
//! session.create_table(&mut catalog, &users)?;
//! session.create_link_tables(&catalog)?;
//!
//! let mut ada = Instance::with_values(users, [("email", "ada@example.com")])?;
//! session.save(&mut ada)?;                       // pk written back
//! session.update(&catalog, &mut ada, [("email", "ada@new.example")])?;
//! session.delete(&catalog, ada)?;                // consumes the instance
//! ```

use std::sync::Arc;

use ormlet_core::{EntityDef, Error, Instance, QueryOutput, Result, SqlExecutor, Value};
use ormlet_query::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
use ormlet_schema::{SchemaCatalog, create_table_sql, junction_table_name, link_table_sql};

/// Owns the executor and runs generated statements against it.
///
/// The session holds no entity state of its own; the catalog and the
/// instances passed into each call carry all schema and row data.
#[derive(Debug)]
pub struct Session<E: SqlExecutor> {
    executor: E,
}

impl<E: SqlExecutor> Session<E> {
    /// Create a session around an executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Borrow the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Consume the session and return the executor.
    pub fn into_inner(self) -> E {
        self.executor
    }

    // ========================================================================
    // DDL
    // ========================================================================

    /// Create the entity's table.
    ///
    /// Records the entity's primary key and queues its many-to-many links
    /// in the catalog as a side effect of generation. Must run before
    /// [`create_link_tables`](Self::create_link_tables) and before any
    /// `update`/`delete` on the entity, both of which look the primary key
    /// up in the catalog.
    pub fn create_table(&mut self, catalog: &mut SchemaCatalog, entity: &EntityDef) -> Result<()> {
        let sql = create_table_sql(catalog, entity);
        self.run_mutating(entity.name(), &sql, &[])?;
        tracing::info!(table = entity.name(), "table created");
        Ok(())
    }

    /// Create one junction table per pending many-to-many link.
    ///
    /// Fails with [`Error::UnresolvedRelationship`] if a link partner's
    /// table has not been created yet; links already materialized are
    /// harmless to replay because the DDL is `IF NOT EXISTS`.
    pub fn create_link_tables(&mut self, catalog: &SchemaCatalog) -> Result<()> {
        let statements = link_table_sql(catalog)?;
        for (link, sql) in catalog.links().iter().zip(&statements) {
            let table = junction_table_name(&link.table, &link.target_table);
            self.run_mutating(&table, sql, &[])?;
            tracing::info!(table = %table, "junction table created");
        }
        Ok(())
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Insert the instance's non-null fields and refresh it from the row
    /// the database reports back.
    ///
    /// The statement carries `RETURNING *`, so generated values (SERIAL
    /// keys in particular) land back on the instance. An instance with
    /// every field null is rejected with [`Error::NoFieldsToInsert`]
    /// before anything executes.
    pub fn save(&mut self, instance: &mut Instance) -> Result<()> {
        let entity = Arc::clone(instance.entity());
        let (sql, params) = InsertBuilder::new(instance).returning().build();
        if params.is_empty() {
            return Err(Error::NoFieldsToInsert {
                entity: entity.name().to_string(),
            });
        }

        let output = self.run_mutating(entity.name(), &sql, &params)?;
        if let Some(row) = output.first() {
            instance.apply_row(row);
        }
        tracing::info!(table = entity.name(), "instance saved");
        Ok(())
    }

    /// Load every row of the entity's table.
    pub fn get_all(&mut self, entity: &Arc<EntityDef>) -> Result<Vec<Instance>> {
        let (sql, params) = SelectBuilder::new(entity.name()).build();
        let output = self.run_query(entity.name(), &sql, &params)?;
        Ok(Self::map_rows(entity, &output))
    }

    /// Load the rows matching every given equality condition.
    ///
    /// Conditions are AND-ed in the order given. A condition naming a
    /// field the entity does not declare fails with
    /// [`Error::UnknownField`] before any SQL runs. An empty condition
    /// set degrades to [`get_all`](Self::get_all).
    pub fn filter<K, V>(
        &mut self,
        entity: &Arc<EntityDef>,
        conditions: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Vec<Instance>>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut builder = SelectBuilder::new(entity.name());
        for (column, value) in conditions {
            let column = column.as_ref();
            if !entity.has_field(column) {
                return Err(Error::UnknownField {
                    entity: entity.name().to_string(),
                    field: column.to_string(),
                });
            }
            builder = builder.filter(column, value);
        }

        let (sql, params) = builder.build();
        let output = self.run_query(entity.name(), &sql, &params)?;
        Ok(Self::map_rows(entity, &output))
    }

    /// Apply the given assignments to the instance's row, keyed by its
    /// current primary key value, then refresh the instance.
    ///
    /// The UPDATE commits first; the refresh SELECT runs afterwards as a
    /// separate read. Fails with [`Error::MissingPrimaryKey`] when the
    /// entity's table was never created or the instance's key is null,
    /// and with [`Error::UnknownField`] when an assignment names an
    /// undeclared field.
    pub fn update<K, V>(
        &mut self,
        catalog: &SchemaCatalog,
        instance: &mut Instance,
        changes: impl IntoIterator<Item = (K, V)>,
    ) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let entity = Arc::clone(instance.entity());
        let (key_column, key_value) = Self::primary_key_of(catalog, &entity, instance)?;

        let mut builder = UpdateBuilder::new(entity.name(), key_column.as_str(), key_value.clone());
        for (column, value) in changes {
            let column = column.as_ref();
            if !entity.has_field(column) {
                return Err(Error::UnknownField {
                    entity: entity.name().to_string(),
                    field: column.to_string(),
                });
            }
            builder = builder.set(column, value);
        }

        let (sql, params) = builder.build();
        self.run_mutating(entity.name(), &sql, &params)?;
        tracing::info!(table = entity.name(), "instance updated");

        let (sql, params) = SelectBuilder::new(entity.name())
            .filter(key_column.as_str(), key_value)
            .build();
        let output = self.run_query(entity.name(), &sql, &params)?;
        if let Some(row) = output.first() {
            instance.apply_row(row);
        }
        Ok(())
    }

    /// Delete the instance's row, keyed by its primary key value.
    ///
    /// Consumes the instance, so a deleted row cannot be saved or updated
    /// again by accident. Does not verify that the row existed. The
    /// [`Error::MissingPrimaryKey`] rules match [`update`](Self::update).
    pub fn delete(&mut self, catalog: &SchemaCatalog, instance: Instance) -> Result<()> {
        let entity = Arc::clone(instance.entity());
        let (key_column, key_value) = Self::primary_key_of(catalog, &entity, &instance)?;

        let (sql, params) = DeleteBuilder::new(entity.name(), key_column, key_value).build();
        self.run_mutating(entity.name(), &sql, &params)?;
        tracing::info!(table = entity.name(), "instance deleted");
        Ok(())
    }

    // ========================================================================
    // Statement execution
    // ========================================================================

    /// Execute a mutating statement as its own commit/rollback unit.
    fn run_mutating(&mut self, entity: &str, sql: &str, params: &[Value]) -> Result<QueryOutput> {
        tracing::debug!(entity, sql, "executing statement");
        let outcome = self
            .executor
            .execute(sql, params)
            .and_then(|output| self.executor.commit().map(|()| output));

        match outcome {
            Ok(output) => Ok(output),
            Err(source) => {
                if let Err(rollback) = self.executor.rollback() {
                    tracing::warn!(error = %rollback, "rollback failed after statement error");
                }
                Err(Error::StatementExecution {
                    entity: entity.to_string(),
                    sql: sql.to_string(),
                    source,
                })
            }
        }
    }

    /// Execute a read. No commit; failure propagates without rollback.
    fn run_query(&mut self, entity: &str, sql: &str, params: &[Value]) -> Result<QueryOutput> {
        tracing::debug!(entity, sql, "executing query");
        self.executor
            .execute(sql, params)
            .map_err(|source| Error::StatementExecution {
                entity: entity.to_string(),
                sql: sql.to_string(),
                source,
            })
    }

    fn map_rows(entity: &Arc<EntityDef>, output: &QueryOutput) -> Vec<Instance> {
        output
            .rows
            .iter()
            .map(|row| Instance::from_row(Arc::clone(entity), row))
            .collect()
    }

    /// The entity's registered key column and the instance's non-null
    /// value for it.
    fn primary_key_of(
        catalog: &SchemaCatalog,
        entity: &Arc<EntityDef>,
        instance: &Instance,
    ) -> Result<(String, Value)> {
        let missing = || Error::MissingPrimaryKey {
            entity: entity.name().to_string(),
        };
        let column = catalog.primary_key(entity.name()).ok_or_else(missing)?;
        let value = instance
            .get(column)
            .filter(|value| !value.is_null())
            .cloned()
            .ok_or_else(missing)?;
        Ok((column.to_string(), value))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
