//! Error types for instant construction, arithmetic and clock interop.
//!
//! Categories are stable and disjoint: construction range violations name
//! the offending component, arithmetic that would leave the representable
//! range is reported separately from construction, and malformed text or
//! binary input keeps its own variants.

use thiserror::Error;

/// Errors produced by the date-time engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DateTimeError {
    /// A calendar or clock component outside its permitted range.
    #[error("{component} out of range: {value} (expected {min}..={max})")]
    ComponentOutOfRange {
        component: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A raw tick count outside `[0, MAX_TICKS]`.
    #[error("ticks out of range: {ticks}")]
    TicksOutOfRange { ticks: i64 },

    /// Arithmetic that would move the instant outside the representable
    /// range. Distinct from construction range violations.
    #[error("{operation} overflows the representable range")]
    ArithmeticOverflow { operation: &'static str },

    /// A floating-point add argument beyond the per-unit maximum.
    #[error("value {value} out of range for add_{unit}")]
    AddRangeExceeded { unit: &'static str, value: f64 },

    /// A kind tag byte that is not Unspecified, Utc or Local.
    #[error("invalid kind value: {value}")]
    InvalidKind { value: u8 },

    /// Second 60 was given for an instant the platform does not recognize
    /// as a leap second.
    #[error(
        "not a valid leap second: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:60"
    )]
    InvalidLeapSecond {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    /// A serialized 64-bit word whose tick payload exceeds the maximum.
    #[error("binary value {raw:#x} decodes to out-of-range ticks")]
    InvalidBinaryData { raw: i64 },

    /// Round-trip timestamp text that deviates from the fixed shape.
    #[error("malformed timestamp at offset {offset}")]
    MalformedTimestamp { offset: usize },
}

/// Result type for date-time operations.
pub type DateTimeResult<T> = std::result::Result<T, DateTimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_distinct() {
        let range = DateTimeError::ComponentOutOfRange {
            component: "month",
            value: 13,
            min: 1,
            max: 12,
        };
        let overflow = DateTimeError::ArithmeticOverflow {
            operation: "add_ticks",
        };
        assert_ne!(range, overflow);
    }

    #[test]
    fn test_component_message_names_component() {
        let err = DateTimeError::ComponentOutOfRange {
            component: "second",
            value: 61,
            min: 0,
            max: 59,
        };
        assert_eq!(err.to_string(), "second out of range: 61 (expected 0..=59)");
    }
}
