//! Error types for nullable value conversion
//!
//! Wrapping and unwrapping are total; only serial parsing can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NullableError {
    #[error("failed to parse '{input}' as unsigned int")]
    InvalidSerial { input: String },

    #[error("failed to parse '{input}' as unsigned int: exceeds maximum {max}")]
    SerialOutOfRange { input: String, max: u64 },
}

impl NullableError {
    /// The literal text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            NullableError::InvalidSerial { input } | NullableError::SerialOutOfRange { input, .. } => {
                input
            }
        }
    }
}
