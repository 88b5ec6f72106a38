use std::error::Error;

use serde::Serialize;

use super::TablesCmd;
use crate::commands::Execute;
use crate::db::catalog::PUBLIC_SCHEMA;
use crate::db::{Connector, DatabaseDriver};

/// Result of the tables command execution
#[derive(Debug, Clone, Serialize)]
pub struct TablesResult {
    pub schema: String,
    pub tables: Vec<String>,
}

impl Execute for TablesCmd {
    type Output = TablesResult;

    fn execute<C: Connector>(self, driver: &DatabaseDriver<C>) -> Result<Self::Output, Box<dyn Error>> {
        let tables = driver.fetch_tables()?;
        Ok(TablesResult {
            schema: PUBLIC_SCHEMA.to_string(),
            tables,
        })
    }
}
