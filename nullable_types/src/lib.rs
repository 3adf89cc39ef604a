//! Nullable column values
//!
//! Converts between `Option<T>` and the nullable wrappers a SQL driver
//! binds and scans, for every scalar kind the mapping layer supports.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod null_uuid;
pub mod nullable;
pub mod serial;
pub mod unwrap;
pub mod value;
pub mod wrap;

// Re-export tracing so the macros resolve from dependent crates
#[doc(hidden)]
pub use tracing;

pub use errors::NullableError;
pub use nullable::{
    zero_instant, NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString,
    NullTime, NullUuid, Nullable, ZeroValue, YEAR_ONE_SECONDS,
};
pub use serial::{parse_serial, parse_serial_bounded, Serial};
pub use unwrap::{
    unwrap_bool, unwrap_byte, unwrap_f64, unwrap_i16, unwrap_i32, unwrap_i64, unwrap_string,
    unwrap_time, unwrap_time_opt,
};
pub use null_uuid::{to_null_uuid, unwrap_uuid, unwrap_uuid_opt};
pub use value::SqlValue;
pub use wrap::{
    to_null_bool, to_null_byte, to_null_f64, to_null_i16, to_null_i32, to_null_i64,
    to_null_string, to_null_time,
};
