//! Driver parameter values
//!
//! This module provides the value a driver binds for each
//! scalar kind, with NULL as its own variant.

use crate::nullable::Nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Text(String),
    BigInt(i64),
    Integer(i32),
    SmallInt(i16),
    Double(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Null,
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// PostgreSQL type name the value binds as
    pub fn pg_type(&self) -> Option<&'static str> {
        match self {
            SqlValue::Text(_) => Some("VARCHAR"),
            SqlValue::BigInt(_) => Some("BIGINT"),
            SqlValue::Integer(_) => Some("INTEGER"),
            SqlValue::SmallInt(_) => Some("SMALLINT"),
            SqlValue::Double(_) => Some("DOUBLE PRECISION"),
            SqlValue::Boolean(_) => Some("BOOLEAN"),
            SqlValue::Timestamp(_) => Some("TIMESTAMP WITH TIME ZONE"),
            SqlValue::Uuid(_) => Some("UUID"),
            SqlValue::Null => None,
        }
    }
}

impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::BigInt(val)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::SmallInt(val)
    }
}

// PostgreSQL has no single-byte integer
impl From<u8> for SqlValue {
    fn from(val: u8) -> Self {
        SqlValue::SmallInt(i16::from(val))
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Double(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(val: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Uuid(val)
    }
}

impl<T> From<Nullable<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Nullable<T>) -> Self {
        match val.into_option() {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
