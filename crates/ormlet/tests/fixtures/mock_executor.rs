//! Mock SQL executor for integration tests.

use ormlet::{ExecuteError, QueryOutput, SqlExecutor, Value};

/// Executor double that records every statement and replays stubbed
/// result sets.
///
/// Stubs are matched by SQL prefix and consumed on use, so two saves
/// against the same table can return different rows. Statements without
/// a matching stub succeed with an empty result set, which keeps DDL
/// setup out of the scripts.
pub struct MockExecutor {
    stubs: Vec<(String, Result<QueryOutput, ExecuteError>)>,
    pub statements: Vec<(String, Vec<Value>)>,
    pub commits: usize,
    pub rollbacks: usize,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            stubs: Vec::new(),
            statements: Vec::new(),
            commits: 0,
            rollbacks: 0,
        }
    }

    /// Stub the next statement starting with `sql_prefix` to return rows.
    #[must_use]
    pub fn stub(mut self, sql_prefix: impl Into<String>, output: QueryOutput) -> Self {
        self.stubs.push((sql_prefix.into(), Ok(output)));
        self
    }

    /// Stub the next statement starting with `sql_prefix` to fail.
    #[must_use]
    pub fn stub_error(mut self, sql_prefix: impl Into<String>, error: ExecuteError) -> Self {
        self.stubs.push((sql_prefix.into(), Err(error)));
        self
    }

    /// Every executed statement whose SQL starts with the prefix.
    pub fn statements_matching(&self, sql_prefix: &str) -> Vec<&(String, Vec<Value>)> {
        self.statements
            .iter()
            .filter(|(sql, _)| sql.starts_with(sql_prefix))
            .collect()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlExecutor for MockExecutor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<QueryOutput, ExecuteError> {
        self.statements.push((sql.to_string(), params.to_vec()));
        match self.stubs.iter().position(|(prefix, _)| sql.starts_with(prefix.as_str())) {
            Some(index) => self.stubs.remove(index).1,
            None => Ok(QueryOutput::empty()),
        }
    }

    fn commit(&mut self) -> Result<(), ExecuteError> {
        self.commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), ExecuteError> {
        self.rollbacks += 1;
        Ok(())
    }
}
