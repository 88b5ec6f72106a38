//! Name-addressable result rows.

use super::DbError;

/// One result row: column names paired with their text-rendered values.
///
/// Columns keep the order the server returned them in. SQL `NULL` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for assembling rows by hand.
    pub fn with(mut self, column: impl Into<String>, value: Option<&str>) -> Self {
        self.push(column, value.map(str::to_string));
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.columns.push((column.into(), value));
    }

    /// Look up a column by name.
    ///
    /// Returns `MissingColumn` if the row has no such column. A present column
    /// holding `NULL` yields `Ok(None)`.
    pub fn get(&self, column: &str) -> Result<Option<&str>, DbError> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_deref())
            .ok_or_else(|| DbError::MissingColumn {
                name: column.to_string(),
            })
    }

    /// Like `get`, but treats `NULL` as an empty string.
    pub fn get_string(&self, column: &str) -> Result<String, DbError> {
        Ok(self.get(column)?.unwrap_or_default().to_string())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
