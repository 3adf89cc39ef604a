//! Unwrap functions
//!
//! Turn a scanned nullable column back into an optional domain field.

use crate::nullable::{
    NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString, NullTime,
};
use chrono::{DateTime, Utc};

pub fn unwrap_string(value: NullString) -> Option<String> {
    value.into_option()
}

pub fn unwrap_i64(value: NullInt64) -> Option<i64> {
    value.into_option()
}

pub fn unwrap_i32(value: NullInt32) -> Option<i32> {
    value.into_option()
}

pub fn unwrap_i16(value: NullInt16) -> Option<i16> {
    value.into_option()
}

pub fn unwrap_byte(value: NullByte) -> Option<u8> {
    value.into_option()
}

pub fn unwrap_f64(value: NullFloat64) -> Option<f64> {
    value.into_option()
}

pub fn unwrap_bool(value: NullBool) -> Option<bool> {
    value.into_option()
}

/// Unwrap to a bare timestamp. NULL yields [`zero_instant`](crate::zero_instant),
/// 0001-01-01T00:00:00Z.
pub fn unwrap_time(value: NullTime) -> DateTime<Utc> {
    value.unwrap_or_zero()
}

pub fn unwrap_time_opt(value: NullTime) -> Option<DateTime<Utc>> {
    value.into_option()
}
