//! The seam between the mapping engine and a database driver.
//!
//! The engine never opens connections itself. Callers hand it anything that
//! implements [`SqlExecutor`]: a real PostgreSQL connection in production,
//! a scripted mock in tests. The contract is synchronous and blocking,
//! matching the engine's single-threaded execution model.

use std::fmt;

use crate::row::Row;
use crate::value::Value;

/// Driver-side failure while executing a statement or ending a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteError {
    /// Human-readable driver message.
    pub message: String,
    /// Five-character SQLSTATE code, when the driver supplies one.
    pub sqlstate: Option<String>,
}

impl ExecuteError {
    /// Create an error with a message and no SQLSTATE.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sqlstate: None,
        }
    }

    /// Attach a SQLSTATE code.
    #[must_use]
    pub fn with_sqlstate(mut self, sqlstate: impl Into<String>) -> Self {
        self.sqlstate = Some(sqlstate.into());
        self
    }
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sqlstate {
            Some(state) => write!(f, "{} (SQLSTATE {state})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ExecuteError {}

/// The result set of one executed statement.
///
/// Statements that return no rows (DDL, plain DELETE) produce an output
/// with empty columns and rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutput {
    /// Column names, in the order the database returned them.
    pub columns: Vec<String>,
    /// Result rows, each carrying the same columns.
    pub rows: Vec<Row>,
}

impl QueryOutput {
    /// Output with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an output from column names and raw value rows.
    #[must_use]
    pub fn new(columns: Vec<String>, value_rows: Vec<Vec<Value>>) -> Self {
        let rows = value_rows
            .into_iter()
            .map(|values| Row::new(columns.clone(), values))
            .collect();
        Self { columns, rows }
    }

    /// The first row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Number of rows in the output.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Capability to run SQL against a database.
///
/// Implementations take parameterized statements with `$n` placeholders and
/// positional parameters. The engine drives the transaction boundary itself:
/// it calls [`commit`](SqlExecutor::commit) after each successful mutating
/// statement and [`rollback`](SqlExecutor::rollback) after a failed one.
pub trait SqlExecutor {
    /// Execute one statement and return its result set.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<QueryOutput, ExecuteError>;

    /// Commit the current transaction.
    fn commit(&mut self) -> Result<(), ExecuteError>;

    /// Roll back the current transaction.
    fn rollback(&mut self) -> Result<(), ExecuteError>;
}
