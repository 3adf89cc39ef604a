//! UUID columns
//!
//! Bare-value unwrapping uses the nil UUID for NULL. The nil UUID is also a
//! legitimate value, so wrapping it yields a present column.

use crate::nullable::{NullUuid, Nullable};
use uuid::Uuid;

pub fn to_null_uuid(id: Option<Uuid>) -> NullUuid {
    Nullable::from(id)
}

/// Unwrap to a bare UUID. NULL yields [`Uuid::nil`].
/// Use [`unwrap_uuid_opt`] to keep NULL distinguishable.
pub fn unwrap_uuid(id: NullUuid) -> Uuid {
    id.into_option().unwrap_or_else(Uuid::nil)
}

pub fn unwrap_uuid_opt(id: NullUuid) -> Option<Uuid> {
    id.into_option()
}
