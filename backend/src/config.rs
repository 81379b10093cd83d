//! Configuration file and environment support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables. Every field has a default, so running without any file works.
//!
//! ```toml
//! [source]
//! type = "http"
//! base_url = "https://opendata.rijksoverheid.nl/v1/sources/rijksoverheid/infotypes/schoolholidays/schoolyear"
//! timeout_secs = 20
//! probe_concurrency = 4
//!
//! [regions]
//! whole_country = ["heel"]
//! north = ["noord"]
//!
//! [server]
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::RegionLabels;
use crate::source::SourceType;

/// Government open-data endpoint serving one document per school year.
pub const DEFAULT_BASE_URL: &str =
    "https://opendata.rijksoverheid.nl/v1/sources/rijksoverheid/infotypes/schoolholidays/schoolyear";

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid setting {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidaysConfig {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub regions: RegionLabels,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where school-holiday documents come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type", default = "default_source_type")]
    pub source_type: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Upper bound on simultaneous requests while probing school years
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_source_type() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_probe_concurrency() -> usize {
    4
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            source_type: default_source_type(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl SourceSettings {
    pub fn source_type(&self) -> Result<SourceType, ConfigError> {
        self.source_type
            .parse()
            .map_err(|e: String| ConfigError::invalid("source.type", e))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl HolidaysConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(HolidaysConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: HolidaysConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the first `holidays.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(HolidaysConfig))` if found and parsed successfully
    /// * `Ok(None)` if no file exists in any of the locations
    /// * `Err(ConfigError)` on a read or parse error
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("holidays.toml"),
            PathBuf::from("backend/holidays.toml"),
            PathBuf::from("../holidays.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// File configuration (or defaults) with environment overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_default_location()?.unwrap_or_default();
        config.with_env_overrides()
    }

    /// Apply environment overrides.
    ///
    /// # Environment Variables
    /// - `HOLIDAYS_SOURCE`: `http` | `local`
    /// - `HOLIDAYS_BASE_URL`: source endpoint
    /// - `HOLIDAYS_TIMEOUT_SECS`: per-request timeout
    /// - `HOLIDAYS_PROBE_CONCURRENCY`: simultaneous probe requests
    /// - `HOST`, `PORT`: server bind address
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = env::var("HOLIDAYS_SOURCE") {
            self.source.source_type = value;
        }
        if let Ok(value) = env::var("HOLIDAYS_BASE_URL") {
            self.source.base_url = value;
        }
        if let Ok(value) = env::var("HOLIDAYS_TIMEOUT_SECS") {
            self.source.timeout_secs = value
                .parse()
                .map_err(|_| ConfigError::invalid("HOLIDAYS_TIMEOUT_SECS", "must be a whole number of seconds"))?;
        }
        if let Ok(value) = env::var("HOLIDAYS_PROBE_CONCURRENCY") {
            self.source.probe_concurrency = value
                .parse()
                .map_err(|_| ConfigError::invalid("HOLIDAYS_PROBE_CONCURRENCY", "must be a positive integer"))?;
        }
        if let Ok(value) = env::var("HOST") {
            self.server.host = value;
        }
        if let Ok(value) = env::var("PORT") {
            self.server.port = value
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", "must be a valid port number"))?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.source.source_type()?;

        if self.source.probe_concurrency == 0 {
            return Err(ConfigError::invalid("source.probe_concurrency", "must be at least 1"));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::invalid("source.timeout_secs", "must be at least 1"));
        }
        if self.regions.whole_country.is_empty() {
            log::warn!("No whole-country region labels configured; nationwide vacations will be dropped");
        }

        Ok(())
    }
}
