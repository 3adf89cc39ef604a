//! Timestamp conversion
//!
//! The two directions use different notions of NULL: a missing or invalid
//! message reads as NULL, and writing treats both NULL and the zero instant
//! as "no message". The generic codec keeps the zero instant as a value, so
//! the two are not interchangeable.

use chrono::{DateTime, Utc};
use config::{TimestampConfig, ZeroInstant};
use nullable_types::{debug_log, trace_log, NullTime, Nullable, YEAR_ONE_SECONDS};
use prost_types::Timestamp;

/// 0001-01-01T00:00:00Z
const MIN_VALID_SECONDS: i64 = YEAR_ONE_SECONDS;
/// 10000-01-01T00:00:00Z
const MAX_VALID_SECONDS: i64 = 253_402_300_800;
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Whether a message is inside the range the well-known type allows
pub fn is_valid_timestamp(ts: &Timestamp) -> bool {
    (MIN_VALID_SECONDS..MAX_VALID_SECONDS).contains(&ts.seconds)
        && (0..NANOS_PER_SECOND).contains(&ts.nanos)
}

/// Timestamp bridge with a configured zero instant
#[derive(Debug, Clone, Copy)]
pub struct TimestampBridge {
    zero_seconds: i64,
    zero_as_absent: bool,
}

impl TimestampBridge {
    pub fn new(config: &TimestampConfig) -> Self {
        let zero_seconds = match config.zero_instant {
            ZeroInstant::YearOne => YEAR_ONE_SECONDS,
            ZeroInstant::UnixEpoch => 0,
        };

        Self {
            zero_seconds,
            zero_as_absent: config.zero_as_absent,
        }
    }

    /// Whether `t` is the configured zero instant
    pub fn is_zero(&self, t: &DateTime<Utc>) -> bool {
        t.timestamp() == self.zero_seconds && t.timestamp_subsec_nanos() == 0
    }

    /// NULL, and the zero instant when configured so, become `None`
    pub fn to_proto(&self, t: &NullTime) -> Option<Timestamp> {
        let instant = t.value()?;

        if self.zero_as_absent && self.is_zero(instant) {
            debug_log!("Zero instant {} mapped to no timestamp message", instant);
            return None;
        }

        // Leap seconds are carried as nanos >= 1e9 by chrono
        let nanos = instant.timestamp_subsec_nanos().min(NANOS_PER_SECOND as u32 - 1);
        Some(Timestamp {
            seconds: instant.timestamp(),
            nanos: nanos as i32,
        })
    }

    /// A missing or invalid message becomes NULL
    pub fn from_proto(&self, ts: Option<&Timestamp>) -> NullTime {
        let Some(ts) = ts else {
            return Nullable::null();
        };

        if !is_valid_timestamp(ts) {
            debug_log!(
                "Dropping invalid timestamp message: seconds={} nanos={}",
                ts.seconds,
                ts.nanos
            );
            return Nullable::null();
        }

        trace_log!("Converting timestamp message seconds={} nanos={}", ts.seconds, ts.nanos);
        Nullable::from(DateTime::from_timestamp(ts.seconds, ts.nanos as u32))
    }
}

impl Default for TimestampBridge {
    fn default() -> Self {
        Self::new(&TimestampConfig::default())
    }
}

/// Convert with the default bridge: 0001-01-01T00:00:00Z is the zero instant
pub fn to_proto_timestamp(t: &NullTime) -> Option<Timestamp> {
    TimestampBridge::default().to_proto(t)
}

pub fn from_proto_timestamp(ts: Option<&Timestamp>) -> NullTime {
    TimestampBridge::default().from_proto(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use nullable_types::{to_null_time, unwrap_time, zero_instant};

    fn message(seconds: i64, nanos: i32) -> Timestamp {
        Timestamp { seconds, nanos }
    }

    #[test]
    fn test_from_proto_none_is_null() {
        assert!(from_proto_timestamp(None).is_null());
    }

    #[test]
    fn test_from_proto_now() {
        let now = Utc::now();
        let ts = message(now.timestamp(), now.timestamp_subsec_nanos() as i32);

        let result = from_proto_timestamp(Some(&ts));
        assert_eq!(result.value(), Some(&now));
    }

    #[test]
    fn test_from_proto_invalid_is_null() {
        assert!(from_proto_timestamp(Some(&message(0, -1))).is_null());
        assert!(from_proto_timestamp(Some(&message(0, NANOS_PER_SECOND))).is_null());
        assert!(from_proto_timestamp(Some(&message(MIN_VALID_SECONDS - 1, 0))).is_null());
        assert!(from_proto_timestamp(Some(&message(MAX_VALID_SECONDS, 0))).is_null());
    }

    #[test]
    fn test_from_proto_range_edges() {
        let first = from_proto_timestamp(Some(&message(MIN_VALID_SECONDS, 0)));
        assert_eq!(first.value(), Some(&Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()));

        let last = from_proto_timestamp(Some(&message(MAX_VALID_SECONDS - 1, 999_999_999)));
        assert!(last.is_valid());
    }

    #[test]
    fn test_to_proto_null_is_none() {
        assert_eq!(to_proto_timestamp(&NullTime::null()), None);
        assert_eq!(to_proto_timestamp(&NullTime::from_parts(Utc::now(), false)), None);
    }

    #[test]
    fn test_to_proto_zero_instant_is_none() {
        assert_eq!(to_proto_timestamp(&NullTime::new(zero_instant())), None);
    }

    #[test]
    fn test_to_proto_present() {
        let now = Utc::now();
        let ts = to_proto_timestamp(&NullTime::new(now)).unwrap();
        assert_eq!(ts.seconds, now.timestamp());
        assert_eq!(ts.nanos, now.timestamp_subsec_nanos() as i32);
        assert!(is_valid_timestamp(&ts));
    }

    #[test]
    fn test_zero_instant_asymmetry() {
        // The codec keeps the zero instant; the bridge drops it
        let wrapped = to_null_time(Some(zero_instant()));
        assert!(wrapped.is_valid());
        assert_eq!(to_proto_timestamp(&wrapped), None);

        // NULL unwraps to the zero instant, which the bridge also drops
        let bare = unwrap_time(NullTime::null());
        assert_eq!(bare, zero_instant());
        assert_eq!(to_proto_timestamp(&NullTime::new(bare)), None);
    }

    #[test]
    fn test_epoch_message_round_trip() {
        let epoch = message(0, 0);

        let scanned = from_proto_timestamp(Some(&epoch));
        assert!(scanned.is_valid());
        assert_eq!(to_proto_timestamp(&scanned), Some(epoch));
    }

    #[test]
    fn test_round_trip() {
        let t = Utc.with_ymd_and_hms(2023, 3, 14, 15, 9, 26).unwrap();
        let ts = to_proto_timestamp(&NullTime::new(t));
        assert_eq!(from_proto_timestamp(ts.as_ref()), NullTime::new(t));
    }

    #[test]
    fn test_default_zero_is_year_one() {
        let bridge = TimestampBridge::default();
        let year_one = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();

        assert!(bridge.is_zero(&year_one));
        assert!(!bridge.is_zero(&DateTime::<Utc>::default()));
        assert_eq!(bridge.to_proto(&NullTime::new(year_one)), None);
    }

    #[test]
    fn test_unix_epoch_zero_instant() {
        let bridge = TimestampBridge::new(&TimestampConfig::new().with_zero_instant(ZeroInstant::UnixEpoch));
        let epoch = DateTime::<Utc>::default();

        assert!(bridge.is_zero(&epoch));
        assert_eq!(bridge.to_proto(&NullTime::new(epoch)), None);

        // Year one is an ordinary instant under this configuration
        assert_eq!(
            bridge.to_proto(&NullTime::new(zero_instant())),
            Some(message(MIN_VALID_SECONDS, 0))
        );
    }

    #[test]
    fn test_zero_kept_when_configured() {
        let bridge = TimestampBridge::new(&TimestampConfig::new().with_zero_as_absent(false));
        assert_eq!(
            bridge.to_proto(&NullTime::new(zero_instant())),
            Some(message(MIN_VALID_SECONDS, 0))
        );
        assert_eq!(bridge.to_proto(&NullTime::null()), None);
    }

    #[test]
    fn test_leap_second_nanos_clamped() {
        let leap = Utc
            .with_ymd_and_hms(2016, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(1_500_000_000)
            .unwrap();

        let ts = to_proto_timestamp(&NullTime::new(leap)).unwrap();
        assert_eq!(ts.nanos, 999_999_999);
        assert!(is_valid_timestamp(&ts));
    }
}
