//! Configuration management for Shelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Snapshot file; persistence is off when unset
    pub snapshot_path: Option<String>,
    pub load_on_startup: bool,
    /// Save after every successful change and on shutdown
    pub autosave: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedBook {
    pub title: String,
    pub author: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Catalog used when no snapshot was loaded
    pub seed_books: Vec<SeedBook>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables, e.g. SHELF_STORAGE__SNAPSHOT_PATH
            .add_source(
                Environment::with_prefix("SHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
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

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            load_on_startup: true,
            autosave: false,
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            seed_books: vec![
                SeedBook {
                    title: "1984".to_string(),
                    author: "George Orwell".to_string(),
                    quantity: 3,
                },
                SeedBook {
                    title: "To Kill a Mockingbird".to_string(),
                    author: "Harper Lee".to_string(),
                    quantity: 2,
                },
            ],
        }
    }
}
