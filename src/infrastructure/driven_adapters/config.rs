//! Application Configuration
//!
//! Loads ambient settings from optional files and environment variables.
//! The registry data itself is hardcoded and never configurable.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Prefix for environment overrides (e.g., `NETWORK_REGISTRY__LOG__LEVEL`)
const ENV_PREFIX: &str = "NETWORK_REGISTRY";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present config file cannot be parsed or a value
    /// does not deserialize (e.g., an unknown log format).
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::defaults()?
            // Merge base and environment-specific config if present
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., NETWORK_REGISTRY__LOG__FORMAT)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an inline TOML document layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is not valid TOML or a value does not deserialize.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")
    }
}
