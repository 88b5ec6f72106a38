//! Shared test utilities for driver and command tests.
//!
//! `FakeConnector` stands in for PostgreSQL: it answers the fixed catalog
//! queries from an in-memory table list and records every open, close and
//! query so tests can assert on the connection lifecycle.

use std::sync::{Arc, Mutex};

use crate::db::catalog::{COLUMNS_QUERY, LIVENESS_QUERY, PUBLIC_SCHEMA, TABLES_QUERY};
use crate::db::{Connector, DatabaseConfig, DatabaseDriver, DbError, Record, Session};

/// Snapshot of what a `FakeConnector` has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeStats {
    pub opened: usize,
    pub closed: usize,
    /// Sessions dropped without `close()` being called.
    pub leaked: usize,
    pub queries: Vec<String>,
    pub params: Vec<Vec<String>>,
    pub max_queries_per_session: usize,
}

#[derive(Debug, Clone)]
struct FakeTable {
    schema: String,
    name: String,
    columns: Vec<(String, String, String)>,
}

/// Scripted stand-in for a database server.
#[derive(Debug, Clone)]
pub struct FakeConnector {
    tables: Vec<FakeTable>,
    unreachable: bool,
    failing_queries: bool,
    failing_close: bool,
    probe_rows: usize,
    stats: Arc<Mutex<FakeStats>>,
}

impl Default for FakeConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            unreachable: false,
            failing_queries: false,
            failing_close: false,
            probe_rows: 1,
            stats: Arc::new(Mutex::new(FakeStats::default())),
        }
    }

    /// Add a table to the public schema. Columns are `(name, data_type, is_nullable)`.
    pub fn with_table(self, name: &str, columns: &[(&str, &str, &str)]) -> Self {
        self.with_table_in_schema(PUBLIC_SCHEMA, name, columns)
    }

    pub fn with_table_in_schema(mut self, schema: &str, name: &str, columns: &[(&str, &str, &str)]) -> Self {
        self.tables.push(FakeTable {
            schema: schema.to_string(),
            name: name.to_string(),
            columns: columns
                .iter()
                .map(|(n, t, null)| (n.to_string(), t.to_string(), null.to_string()))
                .collect(),
        });
        self
    }

    /// Every connect attempt fails.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Connects succeed, every query fails.
    pub fn failing_queries(mut self) -> Self {
        self.failing_queries = true;
        self
    }

    /// Closing a session reports an error (it is still counted as closed).
    pub fn failing_close(mut self) -> Self {
        self.failing_close = true;
        self
    }

    /// Number of rows the liveness query returns.
    pub fn with_probe_rows(mut self, rows: usize) -> Self {
        self.probe_rows = rows;
        self
    }

    pub fn stats(&self) -> FakeStats {
        self.stats.lock().unwrap().clone()
    }
}

impl Connector for FakeConnector {
    type Session = FakeSession;

    fn connect(&self, config: &DatabaseConfig) -> Result<FakeSession, DbError> {
        config.connection_string()?;

        if self.unreachable {
            return Err(DbError::ConnectFailed {
                message: "could not connect to server: Connection refused".to_string(),
            });
        }

        self.stats.lock().unwrap().opened += 1;

        Ok(FakeSession {
            connector: self.clone(),
            queries_run: 0,
            closed: false,
        })
    }
}

/// Session handed out by `FakeConnector`.
pub struct FakeSession {
    connector: FakeConnector,
    queries_run: usize,
    closed: bool,
}

impl FakeSession {
    fn public_tables(&self) -> impl Iterator<Item = &FakeTable> {
        self.connector
            .tables
            .iter()
            .filter(|t| t.schema == PUBLIC_SCHEMA)
    }
}

impl Session for FakeSession {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Record>, DbError> {
        self.queries_run += 1;
        {
            let mut stats = self.connector.stats.lock().unwrap();
            stats.queries.push(sql.to_string());
            stats.params.push(params.iter().map(|p| p.to_string()).collect());
            stats.max_queries_per_session = stats.max_queries_per_session.max(self.queries_run);
        }

        if self.connector.failing_queries {
            return Err(DbError::QueryFailed {
                message: "permission denied for schema information_schema".to_string(),
            });
        }

        if sql == LIVENESS_QUERY {
            return Ok((0..self.connector.probe_rows)
                .map(|_| Record::new().with("?column?", Some("1")))
                .collect());
        }

        if sql == TABLES_QUERY {
            return Ok(self
                .public_tables()
                .map(|t| Record::new().with("table_name", Some(t.name.as_str())))
                .collect());
        }

        if sql == COLUMNS_QUERY {
            let table_name = params.first().copied().unwrap_or_default();
            return Ok(self
                .public_tables()
                .filter(|t| t.name == table_name)
                .flat_map(|t| t.columns.iter())
                .map(|(name, data_type, nullable)| {
                    Record::new()
                        .with("column_name", Some(name.as_str()))
                        .with("data_type", Some(data_type.as_str()))
                        .with("is_nullable", Some(nullable.as_str()))
                })
                .collect());
        }

        Err(DbError::QueryFailed {
            message: format!("unexpected statement: {}", sql),
        })
    }

    fn close(mut self) -> Result<(), DbError> {
        self.closed = true;
        self.connector.stats.lock().unwrap().closed += 1;

        if self.connector.failing_close {
            return Err(DbError::QueryFailed {
                message: "server closed the connection unexpectedly".to_string(),
            });
        }
        Ok(())
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        if !self.closed {
            if let Ok(mut stats) = self.connector.stats.lock() {
                stats.leaked += 1;
            }
        }
    }
}

/// Driver over the standard `users`/`orders` fixture schema.
pub fn fixture_driver() -> DatabaseDriver<FakeConnector> {
    DatabaseDriver::with_connector(
        DatabaseConfig::new("host=fake"),
        FakeConnector::new()
            .with_table("users", &[("id", "integer", "NO"), ("name", "text", "YES")])
            .with_table("orders", &[("id", "integer", "NO"), ("user_id", "integer", "YES")]),
    )
}

/// Driver whose every connection attempt fails.
pub fn unreachable_driver() -> DatabaseDriver<FakeConnector> {
    DatabaseDriver::with_connector(DatabaseConfig::new("host=fake"), FakeConnector::new().unreachable())
}
