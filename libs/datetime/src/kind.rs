//! Kind tagging and day-of-week enumeration.

use crate::error::DateTimeError;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Classification of an instant relative to a time zone.
///
/// Kind is informational metadata carried in the top bits of the packed
/// word; it never triggers a conversion by itself. The internal
/// ambiguous-DST sub-flag reads back as `Local`.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum DateTimeKind {
    /// Not stated to be either local or universal time.
    Unspecified = 0,
    /// Coordinated universal time.
    Utc = 1,
    /// The system's local time zone.
    Local = 2,
}

impl DateTimeKind {
    /// Fallible conversion with the engine's error type.
    pub fn from_u8(value: u8) -> Result<Self, DateTimeError> {
        Self::try_from(value).map_err(|_| DateTimeError::InvalidKind { value })
    }
}

/// Day of the week, Sunday-based to match the tick epoch arithmetic
/// (0001-01-01 is a Monday).
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Total conversion from a day index; reduced modulo 7.
    pub(crate) const fn from_day_index(index: u8) -> DayOfWeek {
        match index % 7 {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_u8() {
        for kind in [
            DateTimeKind::Unspecified,
            DateTimeKind::Utc,
            DateTimeKind::Local,
        ] {
            let raw: u8 = kind.into();
            assert_eq!(DateTimeKind::from_u8(raw).unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_kind_is_rejected() {
        assert_eq!(
            DateTimeKind::from_u8(3),
            Err(DateTimeError::InvalidKind { value: 3 })
        );
    }

    #[test]
    fn test_day_of_week_values() {
        assert_eq!(u8::from(DayOfWeek::Sunday), 0);
        assert_eq!(DayOfWeek::try_from(6u8).unwrap(), DayOfWeek::Saturday);
        assert!(DayOfWeek::try_from(7u8).is_err());
    }
}
