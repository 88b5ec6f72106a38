//! PostgreSQL session implementation.
//!
//! This module connects through the synchronous `postgres` client. Every
//! connection negotiates TLS (`sslmode=require`) using `native-tls`; a server
//! that refuses TLS fails the connection rather than falling back to plaintext.

mod conversion;

use ::postgres::types::ToSql;
use ::postgres::Client;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;

use super::connection::{Connector, Session};
use super::{DatabaseConfig, DbError, Record};

pub use conversion::{row_to_record, ValueKind};

/// Opens a fresh `postgres::Client` per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConnector;

impl PostgresConnector {
    fn tls_connector(config: &DatabaseConfig) -> Result<MakeTlsConnector, DbError> {
        let connector = TlsConnector::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .danger_accept_invalid_hostnames(!config.verify_tls)
            .build()
            .map_err(|e| DbError::ConnectFailed {
                message: format!("Failed to initialise TLS: {}", e),
            })?;

        Ok(MakeTlsConnector::new(connector))
    }
}

impl Connector for PostgresConnector {
    type Session = PostgresSession;

    fn connect(&self, config: &DatabaseConfig) -> Result<PostgresSession, DbError> {
        let pg_config = config.to_pg_config()?;
        let tls = Self::tls_connector(config)?;

        let client = pg_config.connect(tls).map_err(|e| DbError::ConnectFailed {
            message: e.to_string(),
        })?;

        Ok(PostgresSession { client })
    }
}

/// A single live `postgres::Client`.
pub struct PostgresSession {
    client: Client,
}

impl Session for PostgresSession {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Record>, DbError> {
        let params: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(sql, &params)
            .map_err(|e| DbError::QueryFailed {
                message: e.to_string(),
            })?;

        rows.iter().map(row_to_record).collect()
    }

    fn close(self) -> Result<(), DbError> {
        self.client.close().map_err(|e| DbError::QueryFailed {
            message: format!("Failed to close connection: {}", e),
        })
    }
}
