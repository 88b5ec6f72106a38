//! Type conversion utilities for the PostgreSQL backend.
//!
//! Handles conversion of `postgres::Row` cells into the text values carried
//! by `Record`. Only the types the catalog queries can produce are rendered.

use ::postgres::Row;

use crate::db::{DbError, Record};

/// How a column's values are read off the wire before being rendered to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Int2,
    Int4,
    Int8,
    Oid,
    Bool,
}

impl ValueKind {
    /// Map a PostgreSQL type name to the reader for it.
    ///
    /// Returns `None` for anything the record mapper does not handle.
    pub fn for_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "text" | "varchar" | "bpchar" | "name" | "unknown" => Some(Self::Text),
            "int2" => Some(Self::Int2),
            "int4" => Some(Self::Int4),
            "int8" => Some(Self::Int8),
            "oid" => Some(Self::Oid),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }
}

/// Convert one result row into a `Record`, preserving column order.
pub fn row_to_record(row: &Row) -> Result<Record, DbError> {
    let mut record = Record::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let type_name = column.type_().name();
        let kind = ValueKind::for_type_name(type_name).ok_or_else(|| DbError::UnsupportedType {
            column: column.name().to_string(),
            type_name: type_name.to_string(),
        })?;

        let value = read_value(row, idx, kind).map_err(|e| DbError::QueryFailed {
            message: format!("Failed to read column '{}': {}", column.name(), e),
        })?;

        record.push(column.name(), value);
    }

    Ok(record)
}

fn read_value(row: &Row, idx: usize, kind: ValueKind) -> Result<Option<String>, ::postgres::Error> {
    let value = match kind {
        ValueKind::Text => row.try_get::<_, Option<String>>(idx)?,
        ValueKind::Int2 => row.try_get::<_, Option<i16>>(idx)?.map(|v| v.to_string()),
        ValueKind::Int4 => row.try_get::<_, Option<i32>>(idx)?.map(|v| v.to_string()),
        ValueKind::Int8 => row.try_get::<_, Option<i64>>(idx)?.map(|v| v.to_string()),
        ValueKind::Oid => row.try_get::<_, Option<u32>>(idx)?.map(|v| v.to_string()),
        ValueKind::Bool => row.try_get::<_, Option<bool>>(idx)?.map(|v| v.to_string()),
    };
    Ok(value)
}
