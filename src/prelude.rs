//! Convenience re-exports for common nullmap usage
//!
//! ```rust
//! use nullmap::prelude::*;
//!
//! let email = to_null_string(Some("a@example.com".to_string()));
//! assert_eq!(unwrap_string(email).as_deref(), Some("a@example.com"));
//! ```

pub use crate::core::NullMap;
pub use crate::errors::NullMapError;

pub use config::{AppConfig, SerialConfig, TimestampConfig, ZeroInstant};

pub use nullable_types::{
    parse_serial, parse_serial_bounded, to_null_bool, to_null_byte, to_null_f64, to_null_i16,
    to_null_i32, to_null_i64, to_null_string, to_null_time, to_null_uuid, unwrap_bool,
    unwrap_byte, unwrap_f64, unwrap_i16, unwrap_i32, unwrap_i64, unwrap_string, unwrap_time,
    unwrap_time_opt, unwrap_uuid, unwrap_uuid_opt, zero_instant, NullBool, NullByte, NullFloat64,
    NullInt16, NullInt32, NullInt64, NullString, NullTime, NullUuid, Nullable, NullableError,
    Serial, SqlValue, ZeroValue, YEAR_ONE_SECONDS,
};

pub use proto_bridge::{from_proto_timestamp, to_proto_timestamp, Timestamp, TimestampBridge};

// Common external dependencies
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;
