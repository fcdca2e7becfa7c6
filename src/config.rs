//! Configuration management for Libris

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the snapshot file holding the persisted catalog.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with the default configuration file, when present
            .add_source(File::with_name("config/default").required(false))
            // Add environment variables (with prefix LIBRIS_)
            .add_source(
                Environment::with_prefix("LIBRIS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override snapshot path from LIBRIS_DATA_FILE env var if present
            .set_override_option("storage.path", env::var("LIBRIS_DATA_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "library.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
