//! Database access layer for PostgreSQL schema introspection.
//!
//! This module provides everything the facade needs to talk to the server:
//! - Connection descriptor resolution (`config`)
//! - Scoped connection lifecycle with guaranteed release (`connection`)
//! - The PostgreSQL client and row conversion (`postgres`)
//! - Name-addressable result rows (`record`)
//! - Fixed catalog queries and their mapping (`catalog`)
//! - The facade itself (`driver`)
//!
//! # Architecture
//!
//! Every facade operation opens its own connection, runs one fixed statement,
//! collects the whole result set into `Record`s, and drops the connection
//! before returning. Nothing is cached or pooled between calls.
//!
//! # Type Decisions
//!
//! **Why are all record values `Option<String>`?**
//! The catalog views only expose text-like columns (identifiers, type names,
//! `YES`/`NO` flags). Rendering to text at the session boundary keeps the
//! `Session` trait object-free of `postgres` types, so tests can script rows
//! without a server.
//!
//! **Why `String` for `is_nullable` instead of `bool`?**
//! It is reported verbatim from `information_schema.columns`. Use
//! `ColumnInfo::nullable()` for the boolean reading.

pub mod catalog;
pub mod config;
pub mod connection;
pub mod driver;
pub mod postgres;
pub mod record;

pub use catalog::ColumnInfo;
pub use config::{DatabaseConfig, DATABASE_URL_ENV, DEFAULT_CONNECT_TIMEOUT};
pub use connection::{Connector, ScopedConnection, Session};
pub use driver::{DatabaseDriver, CONNECTION_SUCCESSFUL};
pub use self::postgres::PostgresConnector;
pub use record::Record;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("No connection string configured (set DATABASE_URL)")]
    MissingConnectionString,

    #[error("Invalid database configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Database connection error: {message}")]
    ConnectFailed { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Missing column '{name}' in query result")]
    MissingColumn { name: String },

    #[error("Column '{column}' has unsupported type '{type_name}'")]
    UnsupportedType { column: String, type_name: String },

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },
}

impl DbError {
    /// True for failures that happened before a session existed.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::MissingConnectionString | Self::InvalidConfig { .. } | Self::ConnectFailed { .. }
        )
    }
}
