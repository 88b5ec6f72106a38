//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::error::Error;
use std::time::Duration;

use crate::commands::Command;
use crate::db::DatabaseConfig;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect tables and columns of a PostgreSQL database", long_about = None)]
pub struct Args {
    /// Connection string (overrides .schema_probe.json and DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Resolve the connection descriptor, then apply command-line overrides.
    pub fn database_config(&self) -> Result<DatabaseConfig, Box<dyn Error>> {
        let mut config = DatabaseConfig::resolve()?;

        if let Some(url) = &self.database_url {
            config.connection_string = Some(url.clone());
        }
        if let Some(secs) = self.connect_timeout {
            config.connect_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
