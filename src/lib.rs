//! # nullmap
//!
//! Conversions between `Option<T>` domain fields and the nullable column
//! values a SQL driver binds and scans, plus a bridge to protobuf
//! timestamps for services that expose the same rows over RPC.
//!
//! ## Quick Start
//!
//! ```rust
//! use nullmap::prelude::*;
//!
//! // Optional fields to column values
//! let nickname = to_null_string(None);
//! let owner = to_null_uuid(Some(Uuid::new_v4()));
//! assert_eq!(SqlValue::from(nickname), SqlValue::Null);
//! assert!(owner.is_valid());
//!
//! // Column values back to optional fields
//! let deleted_at = unwrap_time_opt(NullTime::null());
//! assert_eq!(deleted_at, None);
//!
//! // Serial identifiers read back as text
//! assert_eq!(parse_serial("42").unwrap(), 42);
//!
//! // Timestamps for RPC responses
//! let nullmap = NullMap::new(AppConfig::default())?;
//! let created_at = nullmap.to_proto_timestamp(&NullTime::new(Utc::now()));
//! assert!(created_at.is_some());
//! # Ok::<(), NullMapError>(())
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::NullMap;
pub use errors::NullMapError;

// Re-export centralized config
pub use config::{AppConfig, SerialConfig, TimestampConfig, ZeroInstant};

// Re-export member crates
pub use config;
pub use nullable_types;
pub use proto_bridge;

// Re-export external dependencies used in public API
pub use chrono;
pub use prost_types;
pub use uuid;
