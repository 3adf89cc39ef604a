//! Nullable column type
//!
//! This module provides the tagged union a driver uses for
//! nullable columns, plus one alias per supported scalar kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// A column value that is either NULL or carries exactly one `T`.
///
/// The payload lives inside the tag, so a NULL value never exposes a stale
/// payload the way a raw `{ value, valid }` pair can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nullable<T> {
    inner: Option<T>,
}

pub type NullString = Nullable<String>;
pub type NullInt64 = Nullable<i64>;
pub type NullInt32 = Nullable<i32>;
pub type NullInt16 = Nullable<i16>;
pub type NullByte = Nullable<u8>;
pub type NullFloat64 = Nullable<f64>;
pub type NullBool = Nullable<bool>;
pub type NullTime = Nullable<DateTime<Utc>>;
pub type NullUuid = Nullable<Uuid>;

/// Seconds from the Unix epoch to 0001-01-01T00:00:00Z
pub const YEAR_ONE_SECONDS: i64 = -62_135_596_800;

/// Zero value of the time kind, 0001-01-01T00:00:00Z.
///
/// Returned by bare-value unwrapping of a NULL time.
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(YEAR_ONE_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// The value a NULL column reads as in bare-value form
pub trait ZeroValue {
    fn zero() -> Self;
}

macro_rules! impl_zero_value_default {
    ($($ty:ty),*) => {
        $(
            impl ZeroValue for $ty {
                fn zero() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

impl_zero_value_default!(String, i64, i32, i16, u8, f64, bool);

impl ZeroValue for DateTime<Utc> {
    fn zero() -> Self {
        zero_instant()
    }
}

impl ZeroValue for Uuid {
    fn zero() -> Self {
        Uuid::nil()
    }
}

impl<T> Nullable<T> {
    /// A NULL value
    pub const fn null() -> Self {
        Self { inner: None }
    }

    /// A present value
    pub const fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Build from a raw driver column. The payload is dropped when `valid` is false.
    pub fn from_parts(value: T, valid: bool) -> Self {
        if valid {
            Self::new(value)
        } else {
            Self::null()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the payload, if any
    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        Nullable {
            inner: self.inner.map(f),
        }
    }
}

impl<T: ZeroValue> Nullable<T> {
    /// Split into the raw `(value, valid)` pair a driver stores.
    /// NULL yields the zero value of `T`.
    pub fn into_parts(self) -> (T, bool) {
        match self.inner {
            Some(value) => (value, true),
            None => (T::zero(), false),
        }
    }

    /// Bare-value form: NULL becomes the zero value of `T`, so callers that
    /// use this cannot tell NULL apart from a stored zero.
    pub fn unwrap_or_zero(self) -> T {
        self.inner.unwrap_or_else(T::zero)
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self { inner: value }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.inner
    }
}

impl<T: Display> Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "NULL"),
        }
    }
}
