//! # Configuration for nullmap
//!
//! This crate provides the configuration structures shared by the nullmap
//! crates: how the protobuf timestamp bridge treats the zero instant, and
//! the upper bound accepted for serial identifiers.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, SerialConfig, TimestampConfig, ZeroInstant};
//!
//! let config = AppConfig::new(
//!     TimestampConfig::new().with_zero_instant(ZeroInstant::UnixEpoch),
//!     SerialConfig::new(i32::MAX as u64),
//! );
//! assert!(config.validate().is_ok());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [timestamp]
//! zero_instant = "year_one"   # or "unix_epoch"
//! zero_as_absent = true
//!
//! [serial]
//! max_value = 9223372036854775807
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from NULLMAP_CONFIG or ./nullmap.toml, falling back to defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./nullmap.toml";
const CONFIG_PATH_VAR: &str = "NULLMAP_CONFIG";

#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timestamp: TimestampConfig,
    #[serde(default)]
    pub serial: SerialConfig,
}

/// Which instant counts as "zero" when bridging to protobuf timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroInstant {
    /// 0001-01-01T00:00:00Z, the sentinel NULL times unwrap to
    #[default]
    YearOne,
    /// 1970-01-01T00:00:00Z, for peers that use the epoch as "unset".
    /// A stored epoch then converts to no message.
    UnixEpoch,
}

/// Protobuf timestamp bridge configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    pub zero_instant: ZeroInstant,
    /// Map the zero instant to "no message" when converting to protobuf
    pub zero_as_absent: bool,
}

/// Serial identifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Largest identifier accepted. `i32::MAX` for `serial`, `i64::MAX` for `bigserial`.
    pub max_value: u64,
}

impl AppConfig {
    pub fn new(timestamp: TimestampConfig, serial: SerialConfig) -> Self {
        Self { timestamp, serial }
    }

    /// Load configuration from the TOML file named in the environment (or .env),
    /// then from the default path, then fall back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            debug_log!("Loading config from {}={}", CONFIG_PATH_VAR, config_path);
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            debug_log!("Loading config from {}", DEFAULT_CONFIG_PATH);
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            debug_log!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.max_value == 0 {
            return Err(ConfigError::Invalid(
                "Serial max_value must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl TimestampConfig {
    /// Create a timestamp configuration with the defaults
    pub fn new() -> Self {
        Self {
            zero_instant: ZeroInstant::YearOne,
            zero_as_absent: true,
        }
    }

    pub fn with_zero_instant(mut self, zero_instant: ZeroInstant) -> Self {
        self.zero_instant = zero_instant;
        self
    }

    pub fn with_zero_as_absent(mut self, zero_as_absent: bool) -> Self {
        self.zero_as_absent = zero_as_absent;
        self
    }
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialConfig {
    /// Create a serial configuration
    pub fn new(max_value: u64) -> Self {
        Self { max_value }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            max_value: u64::MAX,
        }
    }
}
