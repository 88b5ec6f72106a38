//! Configuration file handling for database connections.
//!
//! This module provides loading and parsing of `.schema_probe.json` configuration files.
//! Every field is optional; anything left out falls back to the environment or
//! to `DatabaseConfig::default()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::DatabaseConfig;

/// File looked up in the current directory by `ConfigFile::load`.
pub const CONFIG_FILE_NAME: &str = ".schema_probe.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfigFile,
}

/// Database section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfigFile {
    /// Full connection string; `DATABASE_URL` is used when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    /// Connection establishment timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Verify the server's TLS certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_tls: Option<bool>,
}

impl ConfigFile {
    /// Load `.schema_probe.json` from the current directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load() -> Result<Option<Self>, Box<dyn Error>> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        Self::load_from(&config_path).map(Some)
    }

    /// Load a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path).map_err(|e| {
            format!("Failed to read {}: {}", path.display(), e)
        })?;

        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            format!("Invalid JSON in {}: {}", path.display(), e)
        })?;

        Ok(config)
    }
}

impl DatabaseConfigFile {
    /// Convert this section to a `DatabaseConfig`, filling gaps from the environment.
    pub fn to_database_config(&self) -> DatabaseConfig {
        let mut config = match &self.connection_string {
            Some(url) => DatabaseConfig::new(url.clone()),
            None => DatabaseConfig::from_env(),
        };

        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(verify) = self.verify_tls {
            config.verify_tls = verify;
        }

        config
    }
}
