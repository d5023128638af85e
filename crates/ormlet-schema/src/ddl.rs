//! DDL generation for entity tables and many-to-many junctions.
//!
//! All statements use `CREATE TABLE IF NOT EXISTS`, so table creation is
//! idempotent. Generation has catalog side effects: emitting an entity's
//! `CREATE TABLE` records its primary key column and queues its pending
//! links, which is what makes junction synthesis possible afterwards.

use ormlet_core::{EntityDef, Error, Result};

use crate::catalog::{PendingLink, SchemaCatalog};

/// Render `CREATE TABLE IF NOT EXISTS` for an entity.
///
/// Columns appear in declaration order as
/// `name TYPE [PRIMARY KEY] [REFERENCES table(column)]`. As a side effect
/// the entity's primary key is recorded in the catalog and one
/// [`PendingLink`] is queued per many-to-many field. Must run for both
/// partners before their junction table can be generated.
pub fn create_table_sql(catalog: &mut SchemaCatalog, entity: &EntityDef) -> String {
    tracing::debug!(table = entity.name(), "generating CREATE TABLE");

    let mut columns = Vec::new();
    for field in entity.fields() {
        let mut column = format!("{} {}", field.name, field.sql_type());
        if field.primary_key {
            column.push_str(" PRIMARY KEY");
            catalog.record_primary_key(entity.name(), &field.name);
        }
        if let Some(fk) = &field.foreign_key {
            column.push_str(&format!(" REFERENCES {}({})", fk.table, fk.column));
        }
        columns.push(column);

        if field.many_to_many {
            if let Some(fk) = &field.foreign_key {
                catalog.record_link(PendingLink {
                    table: entity.name().to_string(),
                    field: field.name.clone(),
                    target_table: fk.table.clone(),
                });
            }
        }
    }

    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        entity.name(),
        columns.join(", ")
    );
    tracing::trace!(sql = %sql, "generated DDL statement");
    sql
}

/// The name of the junction table between two partner tables.
#[must_use]
pub fn junction_table_name(table: &str, target_table: &str) -> String {
    format!("{table}_{target_table}")
}

/// Render junction `CREATE TABLE` statements for every pending link.
///
/// Each junction holds the two partners' primary key columns as
/// `INT REFERENCES partner(pk)` and a composite primary key over both.
/// Fails with [`Error::UnresolvedRelationship`] when either partner's
/// table has not been created yet.
pub fn link_table_sql(catalog: &SchemaCatalog) -> Result<Vec<String>> {
    let mut statements = Vec::new();
    for link in catalog.links() {
        let table_name = junction_table_name(&link.table, &link.target_table);
        tracing::debug!(table = %table_name, "generating junction CREATE TABLE");

        let left_pk = catalog.primary_key(&link.table).ok_or_else(|| {
            Error::UnresolvedRelationship {
                table: table_name.clone(),
                missing: link.table.clone(),
            }
        })?;
        let right_pk = catalog.primary_key(&link.target_table).ok_or_else(|| {
            Error::UnresolvedRelationship {
                table: table_name.clone(),
                missing: link.target_table.clone(),
            }
        })?;

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {table_name} (\
             {left_pk} INT REFERENCES {}({left_pk}), \
             {right_pk} INT REFERENCES {}({right_pk}), \
             PRIMARY KEY ({left_pk}, {right_pk}))",
            link.table, link.target_table
        );
        tracing::trace!(sql = %sql, "generated DDL statement");
        statements.push(sql);
    }
    Ok(statements)
}
