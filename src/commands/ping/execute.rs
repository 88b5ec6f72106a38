use std::error::Error;

use serde::Serialize;

use super::PingCmd;
use crate::commands::Execute;
use crate::db::{Connector, DatabaseDriver};

/// Result of the ping command execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResult {
    pub success: bool,
    pub message: String,
}

impl Execute for PingCmd {
    type Output = PingResult;

    fn execute<C: Connector>(self, driver: &DatabaseDriver<C>) -> Result<Self::Output, Box<dyn Error>> {
        let (success, message) = driver.test_connection();
        Ok(PingResult { success, message })
    }
}
