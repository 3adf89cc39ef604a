//! Wrap functions
//!
//! Turn an optional domain field into the nullable column value a driver
//! binds. `None` becomes NULL; `Some(v)` is always stored, zero values
//! included.

use crate::nullable::{
    NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString, NullTime,
    Nullable,
};
use chrono::{DateTime, Utc};

pub fn to_null_string(value: Option<String>) -> NullString {
    Nullable::from(value)
}

pub fn to_null_i64(value: Option<i64>) -> NullInt64 {
    Nullable::from(value)
}

pub fn to_null_i32(value: Option<i32>) -> NullInt32 {
    Nullable::from(value)
}

pub fn to_null_i16(value: Option<i16>) -> NullInt16 {
    Nullable::from(value)
}

pub fn to_null_byte(value: Option<u8>) -> NullByte {
    Nullable::from(value)
}

pub fn to_null_f64(value: Option<f64>) -> NullFloat64 {
    Nullable::from(value)
}

pub fn to_null_bool(value: Option<bool>) -> NullBool {
    Nullable::from(value)
}

/// Wrap an optional timestamp.
///
/// The zero instant is a valid value here: `Some(zero_instant())` is stored
/// as a present timestamp. Callers that want zero to mean NULL must check
/// before calling.
pub fn to_null_time(value: Option<DateTime<Utc>>) -> NullTime {
    Nullable::from(value)
}
