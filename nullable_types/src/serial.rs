//! Serial identifiers
//!
//! Auto-incrementing identifier columns (PostgreSQL `serial` / `bigserial`)
//! often come back as text. These helpers parse them strictly as base-10
//! unsigned integers.

use crate::errors::NullableError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Parse a serial identifier.
///
/// Only ASCII digits are accepted: no sign, whitespace, or decimal point.
pub fn parse_serial(input: &str) -> Result<u64, NullableError> {
    parse_serial_bounded(input, u64::MAX)
}

/// Parse a serial identifier no larger than `max`
pub fn parse_serial_bounded(input: &str, max: u64) -> Result<u64, NullableError> {
    // `u64::from_str` accepts a leading '+', a serial column never carries one
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        debug_log!("Rejected serial '{}': not a base-10 unsigned integer", input);
        return Err(NullableError::InvalidSerial {
            input: input.to_string(),
        });
    }

    let value = input.parse::<u64>().map_err(|_| {
        debug_log!("Rejected serial '{}': overflows u64", input);
        NullableError::InvalidSerial {
            input: input.to_string(),
        }
    })?;

    if value > max {
        debug_log!("Rejected serial '{}': above maximum {}", input, max);
        return Err(NullableError::SerialOutOfRange {
            input: input.to_string(),
            max,
        });
    }

    Ok(value)
}

/// A parsed serial identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Serial(pub u64);

impl Serial {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for Serial {
    type Err = NullableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_serial(s).map(Serial)
    }
}

impl Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Serial> for u64 {
    fn from(serial: Serial) -> Self {
        serial.0
    }
}

impl From<u64> for Serial {
    fn from(value: u64) -> Self {
        Serial(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serial_valid() {
        assert_eq!(parse_serial("42"), Ok(42));
        assert_eq!(parse_serial("0"), Ok(0));
        assert_eq!(parse_serial("007"), Ok(7));
        assert_eq!(parse_serial("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn test_parse_serial_names_input() {
        let err = parse_serial("foobar").unwrap_err();
        assert_eq!(err.input(), "foobar");
        assert_eq!(err.to_string(), "failed to parse 'foobar' as unsigned int");
    }

    #[test]
    fn test_parse_serial_rejects_malformed() {
        for input in ["", "1.1111", "-1", "+1", " 1", "1 ", "1_000", "0x10", "１"] {
            assert_eq!(
                parse_serial(input),
                Err(NullableError::InvalidSerial {
                    input: input.to_string()
                }),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_serial_rejects_overflow() {
        let err = parse_serial("18446744073709551616").unwrap_err();
        assert!(matches!(err, NullableError::InvalidSerial { .. }));
    }

    #[test]
    fn test_parse_serial_bounded() {
        let max = i32::MAX as u64;
        assert_eq!(parse_serial_bounded("2147483647", max), Ok(max));
        assert_eq!(
            parse_serial_bounded("2147483648", max),
            Err(NullableError::SerialOutOfRange {
                input: "2147483648".to_string(),
                max,
            })
        );
    }

    #[test]
    fn test_serial_from_str() {
        let serial: Serial = "1234".parse().unwrap();
        assert_eq!(serial, Serial(1234));
        assert_eq!(u64::from(serial), 1234);
        assert_eq!(serial.to_string(), "1234");
        assert!("abc".parse::<Serial>().is_err());
    }

    #[test]
    fn test_serial_serde() {
        assert_eq!(serde_json::to_string(&Serial(9)).unwrap(), "9");
        let parsed: Serial = serde_json::from_str("10").unwrap();
        assert_eq!(parsed.get(), 10);
    }
}
