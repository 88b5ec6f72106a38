//! schema_probe library - PostgreSQL schema introspection
//!
//! Provides the database access facade (connectivity probe, table and column
//! enumeration over `information_schema`), plus the command execution and
//! output formatting used by the `schema_probe` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;

pub use db::{ColumnInfo, DatabaseConfig, DatabaseDriver, DbError};
