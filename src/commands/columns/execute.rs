use std::error::Error;

use serde::Serialize;

use super::ColumnsCmd;
use crate::commands::Execute;
use crate::db::{ColumnInfo, Connector, DatabaseDriver};

/// Result of the columns command execution
#[derive(Debug, Clone, Serialize)]
pub struct ColumnsResult {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
}

impl Execute for ColumnsCmd {
    type Output = ColumnsResult;

    fn execute<C: Connector>(self, driver: &DatabaseDriver<C>) -> Result<Self::Output, Box<dyn Error>> {
        let columns = driver.fetch_columns(&self.table)?;
        Ok(ColumnsResult {
            table: self.table,
            columns,
        })
    }
}
