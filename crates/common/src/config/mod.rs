//! Configuration management for the student registry
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default, config/{env}, config/local)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Hosted data backend configuration
    pub store: StoreConfig,

    /// School identity used in reports
    pub school: SchoolConfig,

    /// Import/export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the hosted backend (e.g. https://data.example.school)
    pub base_url: String,

    /// API key sent as both `apikey` and bearer token
    pub api_key: String,

    /// Table holding student records
    #[serde(default = "default_table")]
    pub table: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchoolConfig {
    /// School name shown in report headers
    pub name: String,

    /// Report title line
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Prefix for exported backup files: `<prefix>_<ISO-date>.json`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logging: bool,
}

// Default value functions
fn default_table() -> String {
    "students".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_report_title() -> String {
    "Registered students report".to_string()
}
fn default_file_prefix() -> String {
    "students_backup".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        // Pull in .env before reading APP_ENV or APP__ overrides
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))
            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Load local overrides
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables with APP__ prefix
            // e.g., APP__STORE__BASE_URL=https://data.example.school
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get the store request timeout as Duration
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store.timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                base_url: "http://localhost:54321".to_string(),
                api_key: String::new(),
                table: default_table(),
                timeout_secs: default_timeout(),
            },
            school: SchoolConfig {
                name: "Industrial Secondary School".to_string(),
                report_title: default_report_title(),
            },
            export: ExportConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}
