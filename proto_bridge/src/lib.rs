//! Protobuf timestamp bridge
//!
//! Converts between a nullable timestamp column and the well-known
//! `google.protobuf.Timestamp` message, where "no message" stands for NULL.

pub mod timestamp;

pub use timestamp::{from_proto_timestamp, is_valid_timestamp, to_proto_timestamp, TimestampBridge};

// Re-export the message type used in the public API
pub use prost_types::Timestamp;
