//! Scoped connection lifecycle.
//!
//! A `ScopedConnection` owns exactly one live `Session` for the duration of a
//! single facade operation. The session is closed once, either explicitly via
//! `close()` or when the guard is dropped, whichever comes first. This holds
//! on every exit path, including early `?` returns and panics that unwind.

use tracing::{error, info, warn};

use super::{DatabaseConfig, DbError, Record};

/// A live session to the database server.
pub trait Session {
    /// Run one statement with positional text parameters (`$1`, `$2`, ...)
    /// and collect the full result set.
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Record>, DbError>;

    /// Terminate the session.
    fn close(self) -> Result<(), DbError>
    where
        Self: Sized;
}

/// Factory for sessions.
///
/// Called once per facade operation; implementations must not hand out a
/// session they have already handed out before.
pub trait Connector {
    type Session: Session;

    fn connect(&self, config: &DatabaseConfig) -> Result<Self::Session, DbError>;
}

/// RAII guard around a single session.
pub struct ScopedConnection<S: Session> {
    session: Option<S>,
}

impl<S: Session> ScopedConnection<S> {
    /// Open a new session through `connector`.
    ///
    /// Connection failures are logged here and returned; nothing needs closing
    /// in that case.
    pub fn open<C>(connector: &C, config: &DatabaseConfig) -> Result<Self, DbError>
    where
        C: Connector<Session = S>,
    {
        info!("Establishing database connection...");

        match connector.connect(config) {
            Ok(session) => {
                info!("Database connection established successfully");
                Ok(Self {
                    session: Some(session),
                })
            }
            Err(e) => {
                error!(error = %e, "Database connection error");
                Err(e)
            }
        }
    }

    pub fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Record>, DbError> {
        match self.session.as_mut() {
            Some(session) => session.query(sql, params),
            None => Err(DbError::QueryFailed {
                message: "connection already closed".to_string(),
            }),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Close now and report the outcome instead of only logging it.
    pub fn close(mut self) -> Result<(), DbError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), DbError> {
        match self.session.take() {
            Some(session) => {
                let result = session.close();
                info!("Database connection closed");
                result
            }
            None => Ok(()),
        }
    }
}

impl<S: Session> Drop for ScopedConnection<S> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!(error = %e, "Error while closing database connection");
        }
    }
}
