//! Core nullmap functionality
//!
//! This module contains the `NullMap` struct, which applies an `AppConfig`
//! to the operations that have configurable behavior.

use chrono::{DateTime, Utc};
use config::AppConfig;
use nullable_types::{debug_log, parse_serial_bounded, NullTime};
use proto_bridge::TimestampBridge;
use prost_types::Timestamp;

use crate::errors::NullMapError;

/// Configured entry point for serial parsing and the timestamp bridge
#[derive(Debug, Clone)]
pub struct NullMap {
    config: AppConfig,
    bridge: TimestampBridge,
}

impl NullMap {
    /// Create a new NullMap from a validated configuration
    pub fn new(config: AppConfig) -> Result<Self, NullMapError> {
        config.validate()?;
        let bridge = TimestampBridge::new(&config.timestamp);

        debug_log!(
            "NullMap ready: zero_instant={:?} zero_as_absent={} serial_max={}",
            config.timestamp.zero_instant,
            config.timestamp.zero_as_absent,
            config.serial.max_value
        );

        Ok(Self { config, bridge })
    }

    /// Create a NullMap from `NULLMAP_CONFIG`, `./nullmap.toml`, or defaults
    pub fn from_env() -> Result<Self, NullMapError> {
        Self::new(AppConfig::load()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a serial identifier, bounded by `serial.max_value`
    pub fn parse_serial(&self, input: &str) -> Result<u64, NullMapError> {
        Ok(parse_serial_bounded(input, self.config.serial.max_value)?)
    }

    pub fn to_proto_timestamp(&self, t: &NullTime) -> Option<Timestamp> {
        self.bridge.to_proto(t)
    }

    pub fn from_proto_timestamp(&self, ts: Option<&Timestamp>) -> NullTime {
        self.bridge.from_proto(ts)
    }

    /// Whether `t` is the configured zero instant
    pub fn is_zero_instant(&self, t: &DateTime<Utc>) -> bool {
        self.bridge.is_zero(t)
    }
}

impl Default for NullMap {
    fn default() -> Self {
        let config = AppConfig::default();
        let bridge = TimestampBridge::new(&config.timestamp);
        Self { config, bridge }
    }
}
