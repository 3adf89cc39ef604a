//! Error types for the nullmap crate
//!
//! This module contains all error types that can be returned by `NullMap` operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NullMapError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] nullable_types::NullableError),
}
