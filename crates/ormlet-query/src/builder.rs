//! Statement builders for INSERT, SELECT, UPDATE, and DELETE.
//!
//! Each builder produces a `(String, Vec<Value>)` pair: PostgreSQL-flavored
//! SQL with `$n` placeholders and the positional parameters to bind. The
//! builders do not validate field names against the entity; the session
//! does that before it constructs them.

use ormlet_core::{Instance, Value};

fn placeholder(index: usize) -> String {
    format!("${index}")
}

/// INSERT builder driven by an instance's non-null fields.
///
/// # Example
///
/// ```ignore
/// let (sql, params) = InsertBuilder::new(&instance).returning().build();
/// // INSERT INTO users (email) VALUES ($1) RETURNING *
/// ```
#[derive(Debug)]
pub struct InsertBuilder<'a> {
    instance: &'a Instance,
    returning: bool,
}

impl<'a> InsertBuilder<'a> {
    /// Create an INSERT builder for the given instance.
    #[must_use]
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            returning: false,
        }
    }

    /// Add `RETURNING *` so the database reports the stored row back.
    #[must_use]
    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }

    /// Build the INSERT SQL and parameters.
    ///
    /// Columns come from the instance's non-null fields in declaration
    /// order; an instance with every field null yields an empty parameter
    /// list, which the session rejects before executing.
    #[must_use]
    pub fn build(&self) -> (String, Vec<Value>) {
        let (columns, values) = self.instance.to_insert_pairs();
        let placeholders: Vec<_> = (1..=values.len()).map(placeholder).collect();

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.instance.entity().name(),
            columns.join(", "),
            placeholders.join(", ")
        );
        if self.returning {
            sql.push_str(" RETURNING *");
        }
        (sql, values)
    }
}

/// SELECT builder with AND-ed equality conditions.
///
/// With no conditions it degrades to a full `SELECT *` scan.
#[derive(Debug)]
pub struct SelectBuilder {
    table: String,
    conditions: Vec<(String, Value)>,
}

impl SelectBuilder {
    /// Create a SELECT builder for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conditions: Vec::new(),
        }
    }

    /// Add an equality condition. Conditions are AND-ed in call order.
    #[must_use]
    pub fn filter(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    /// Build the SELECT SQL and parameters.
    #[must_use]
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = format!("SELECT * FROM {}", self.table);
        if !self.conditions.is_empty() {
            let predicates: Vec<_> = self
                .conditions
                .iter()
                .enumerate()
                .map(|(i, (column, _))| format!("{column} = {}", placeholder(i + 1)))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }
        let params = self.conditions.iter().map(|(_, v)| v.clone()).collect();
        (sql, params)
    }
}

/// UPDATE builder keyed by a single primary key condition.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: String,
    assignments: Vec<(String, Value)>,
    key_column: String,
    key_value: Value,
}

impl UpdateBuilder {
    /// Create an UPDATE builder keyed on `key_column = key_value`.
    pub fn new(
        table: impl Into<String>,
        key_column: impl Into<String>,
        key_value: impl Into<Value>,
    ) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            key_column: key_column.into(),
            key_value: key_value.into(),
        }
    }

    /// Add a `SET column = value` assignment.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments.push((column.into(), value.into()));
        self
    }

    /// Build the UPDATE SQL and parameters. The key parameter binds last.
    #[must_use]
    pub fn build(&self) -> (String, Vec<Value>) {
        let assignments: Vec<_> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = {}", placeholder(i + 1)))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.table,
            assignments.join(", "),
            self.key_column,
            placeholder(self.assignments.len() + 1)
        );
        let mut params: Vec<_> = self.assignments.iter().map(|(_, v)| v.clone()).collect();
        params.push(self.key_value.clone());
        (sql, params)
    }
}

/// DELETE builder keyed by a single primary key condition.
#[derive(Debug)]
pub struct DeleteBuilder {
    table: String,
    key_column: String,
    key_value: Value,
}

impl DeleteBuilder {
    /// Create a DELETE builder keyed on `key_column = key_value`.
    pub fn new(
        table: impl Into<String>,
        key_column: impl Into<String>,
        key_value: impl Into<Value>,
    ) -> Self {
        Self {
            table: table.into(),
            key_column: key_column.into(),
            key_value: key_value.into(),
        }
    }

    /// Build the DELETE SQL and parameters.
    #[must_use]
    pub fn build(&self) -> (String, Vec<Value>) {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1",
            self.table, self.key_column
        );
        (sql, vec![self.key_value.clone()])
    }
}
