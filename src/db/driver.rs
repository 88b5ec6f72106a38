//! Database access facade.
//!
//! `DatabaseDriver` offers a connectivity probe and two introspection
//! operations. Each call opens its own connection, runs one fixed statement,
//! and closes the connection before returning. The descriptor is the only
//! state, and it is never mutated after construction.
//!
//! Two flavours of the introspection operations exist:
//! - `get_table_info` / `get_column_info` never fail. Errors are logged and
//!   reported as an empty `Vec`, so "no data" and "error" look the same.
//! - `fetch_tables` / `fetch_columns` return `Result` for callers that need to
//!   tell the two apart.

use tracing::{debug, error};

use super::catalog::{self, ColumnInfo, COLUMNS_QUERY, LIVENESS_QUERY, TABLES_QUERY};
use super::connection::{Connector, ScopedConnection};
use super::postgres::PostgresConnector;
use super::{DatabaseConfig, DbError};

/// Message returned by a successful `test_connection`.
pub const CONNECTION_SUCCESSFUL: &str = "Connection successful";

/// Facade over a single database described by a `DatabaseConfig`.
#[derive(Debug, Clone)]
pub struct DatabaseDriver<C = PostgresConnector> {
    config: DatabaseConfig,
    connector: C,
}

impl DatabaseDriver<PostgresConnector> {
    /// Create a driver for PostgreSQL. Does not connect.
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_connector(config, PostgresConnector)
    }

    /// Create a driver from `DATABASE_URL`.
    ///
    /// Never fails. If the variable is unset every operation reports a
    /// connection error.
    pub fn from_env() -> Self {
        Self::new(DatabaseConfig::from_env())
    }
}

impl<C: Connector> DatabaseDriver<C> {
    pub fn with_connector(config: DatabaseConfig, connector: C) -> Self {
        Self { config, connector }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Probe connectivity.
    ///
    /// Returns `(true, "Connection successful")` or `(false, <error text>)`.
    pub fn test_connection(&self) -> (bool, String) {
        match self.ping() {
            Ok(()) => (true, CONNECTION_SUCCESSFUL.to_string()),
            Err(e) => (false, e.to_string()),
        }
    }

    /// Probe connectivity, keeping the typed error.
    pub fn ping(&self) -> Result<(), DbError> {
        self.with_connection(|conn| {
            let rows = conn.query(LIVENESS_QUERY, &[])?;
            catalog::expect_single_row(rows)?;
            Ok(())
        })
    }

    /// Names of all tables in the public schema, in catalog order.
    ///
    /// Returns an empty list on any error; the error is logged.
    pub fn get_table_info(&self) -> Vec<String> {
        self.fetch_tables().unwrap_or_else(|e| {
            error!(error = %e, "Error getting table info");
            Vec::new()
        })
    }

    /// Columns of `table_name` in ordinal order.
    ///
    /// Returns an empty list on any error, and also for tables that don't
    /// exist; the error is logged.
    pub fn get_column_info(&self, table_name: &str) -> Vec<ColumnInfo> {
        self.fetch_columns(table_name).unwrap_or_else(|e| {
            error!(table = %table_name, error = %e, "Error getting column info");
            Vec::new()
        })
    }

    /// Like `get_table_info`, but failures are returned.
    pub fn fetch_tables(&self) -> Result<Vec<String>, DbError> {
        self.with_connection(|conn| {
            let rows = conn.query(TABLES_QUERY, &[])?;
            catalog::table_names(&rows)
        })
    }

    /// Like `get_column_info`, but failures are returned.
    pub fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnInfo>, DbError> {
        self.with_connection(|conn| {
            let rows = conn.query(COLUMNS_QUERY, &[table_name])?;
            catalog::column_infos(&rows)
        })
    }

    /// Acquire a connection, run `op`, release the connection.
    ///
    /// The guard is dropped before this returns, on success and on error.
    fn with_connection<T>(
        &self,
        op: impl FnOnce(&mut ScopedConnection<C::Session>) -> Result<T, DbError>,
    ) -> Result<T, DbError> {
        let mut conn = ScopedConnection::open(&self.connector, &self.config)?;
        let result = op(&mut conn);
        drop(conn);

        if let Err(e) = &result {
            debug!(error = %e, "Database operation failed");
        }
        result
    }
}
