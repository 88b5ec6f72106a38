//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `execute` step that calls the driver and builds a serializable result
//! - An `Outputable` impl that renders that result

mod columns;
mod ping;
mod tables;

pub use columns::ColumnsCmd;
pub use ping::PingCmd;
pub use tables::TablesCmd;

use clap::Subcommand;
use std::error::Error;

use crate::db::{Connector, DatabaseDriver};
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute<C: Connector>(self, driver: &DatabaseDriver<C>) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the database is reachable
    Ping(PingCmd),

    /// List tables in the public schema
    Tables(TablesCmd),

    /// List the columns of a table in the public schema
    Columns(ColumnsCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run<C: Connector>(
        self,
        driver: &DatabaseDriver<C>,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Ping(cmd) => {
                let result = cmd.execute(driver)?;
                if !result.success {
                    return Err(format!("Connection failed: {}", result.message).into());
                }
                Ok(result.format(format))
            }
            Command::Tables(cmd) => {
                let result = cmd.execute(driver)?;
                Ok(result.format(format))
            }
            Command::Columns(cmd) => {
                let result = cmd.execute(driver)?;
                Ok(result.format(format))
            }
        }
    }
}
