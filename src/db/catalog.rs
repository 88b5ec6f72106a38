//! Fixed catalog queries and result mapping.
//!
//! All statements are read-only and restricted to the `public` schema. The
//! only caller-supplied value, the table name, is bound as `$1` and never
//! spliced into SQL text.
//!
//! `information_schema` exposes its columns as `sql_identifier` and
//! `character_data` domains; they are cast to `text` so they map to `String`.

use serde::Serialize;

use super::{DbError, Record};

/// Schema that enumeration is restricted to.
pub const PUBLIC_SCHEMA: &str = "public";

/// Trivial liveness probe. Returns exactly one row.
pub const LIVENESS_QUERY: &str = "SELECT 1";

/// Table names in the public schema, in catalog order.
pub const TABLES_QUERY: &str = "\
SELECT table_name::text AS table_name
FROM information_schema.tables
WHERE table_schema = 'public'";

/// Columns of one public table (`$1`), in declaration order.
pub const COLUMNS_QUERY: &str = "\
SELECT column_name::text AS column_name,
       data_type::text AS data_type,
       is_nullable::text AS is_nullable
FROM information_schema.columns
WHERE table_name = $1 AND table_schema = 'public'
ORDER BY ordinal_position";

/// One column of a table as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    /// `"YES"` or `"NO"`, verbatim from the catalog.
    pub is_nullable: String,
}

impl ColumnInfo {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        is_nullable: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable: is_nullable.into(),
        }
    }

    pub fn nullable(&self) -> bool {
        self.is_nullable.eq_ignore_ascii_case("YES")
    }

    fn from_record(record: &Record) -> Result<Self, DbError> {
        Ok(Self {
            name: record.get_string("column_name")?,
            data_type: record.get_string("data_type")?,
            is_nullable: record.get_string("is_nullable")?,
        })
    }
}

/// Require the probe to have produced exactly one row and return it.
pub fn expect_single_row(mut records: Vec<Record>) -> Result<Record, DbError> {
    if records.len() != 1 {
        return Err(DbError::UnexpectedRowCount {
            expected: 1,
            actual: records.len(),
        });
    }
    records.pop().ok_or(DbError::UnexpectedRowCount {
        expected: 1,
        actual: 0,
    })
}

/// Project `table_name` out of each row, keeping order.
pub fn table_names(records: &[Record]) -> Result<Vec<String>, DbError> {
    records
        .iter()
        .map(|record| record.get_string("table_name"))
        .collect()
}

/// Map column rows to descriptors, keeping order.
pub fn column_infos(records: &[Record]) -> Result<Vec<ColumnInfo>, DbError> {
    records.iter().map(ColumnInfo::from_record).collect()
}
