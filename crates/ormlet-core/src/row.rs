//! Result rows returned by the SQL executor.

use crate::value::Value;

/// One row of query output: column names paired with values.
///
/// Columns keep the order the database returned them in, which for
/// `SELECT *` and `RETURNING *` is the table's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Create a row from parallel column and value lists.
    ///
    /// The two lists must have the same length.
    #[must_use]
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Create a row from (column, value) pairs.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        let (columns, values) = pairs.into_iter().unzip();
        Self { columns, values }
    }

    /// Look up a value by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Column names in result order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in result order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over (column, value) pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
