//! Culture-invariant round-trip text form.
//!
//! `Display` emits `YYYY-MM-DDTHH:MM:SS[.fffffff][Z]`: the fraction
//! appears only for sub-second instants with trailing zeros trimmed, and
//! the `Z` suffix marks kind Utc. `FromStr` accepts exactly that shape.
//! Anything culture-aware (month names, 12-hour clocks, locale ordering)
//! is out of scope; this form exists so `to_string`/`parse` round-trip
//! losslessly for Unspecified and Utc values.

use crate::constants::TICKS_PER_SECOND;
use crate::datetime::DateTime;
use crate::error::{DateTimeError, DateTimeResult};
use crate::kind::DateTimeKind;
use std::fmt;
use std::str::FromStr;

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )?;
        let fraction = self.ticks() % TICKS_PER_SECOND;
        if fraction != 0 {
            let digits = format!("{fraction:07}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        if self.kind() == DateTimeKind::Utc {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self}, kind: {:?})", self.kind())
    }
}

fn fixed_digits(bytes: &[u8], start: usize, len: usize) -> DateTimeResult<u32> {
    let mut acc = 0u32;
    for i in start..start + len {
        match bytes.get(i) {
            Some(&b) if b.is_ascii_digit() => acc = acc * 10 + (b - b'0') as u32,
            _ => return Err(DateTimeError::MalformedTimestamp { offset: i }),
        }
    }
    Ok(acc)
}

fn expect_separator(bytes: &[u8], at: usize, want: u8) -> DateTimeResult<()> {
    if bytes.get(at) == Some(&want) {
        Ok(())
    } else {
        Err(DateTimeError::MalformedTimestamp { offset: at })
    }
}

impl FromStr for DateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        let bytes = s.as_bytes();
        let year = fixed_digits(bytes, 0, 4)?;
        expect_separator(bytes, 4, b'-')?;
        let month = fixed_digits(bytes, 5, 2)?;
        expect_separator(bytes, 7, b'-')?;
        let day = fixed_digits(bytes, 8, 2)?;
        expect_separator(bytes, 10, b'T')?;
        let hour = fixed_digits(bytes, 11, 2)?;
        expect_separator(bytes, 13, b':')?;
        let minute = fixed_digits(bytes, 14, 2)?;
        expect_separator(bytes, 16, b':')?;
        let second = fixed_digits(bytes, 17, 2)?;

        let mut pos = 19;
        let mut fraction_ticks = 0i64;
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            let fraction_start = pos;
            let mut scale = TICKS_PER_SECOND;
            while let Some(&b) = bytes.get(pos) {
                if !b.is_ascii_digit() {
                    break;
                }
                if pos - fraction_start == 7 {
                    return Err(DateTimeError::MalformedTimestamp { offset: pos });
                }
                scale /= 10;
                fraction_ticks += (b - b'0') as i64 * scale;
                pos += 1;
            }
            if pos == fraction_start {
                return Err(DateTimeError::MalformedTimestamp { offset: pos });
            }
        }

        let kind = if bytes.get(pos) == Some(&b'Z') {
            pos += 1;
            DateTimeKind::Utc
        } else {
            DateTimeKind::Unspecified
        };
        if pos != bytes.len() {
            return Err(DateTimeError::MalformedTimestamp { offset: pos });
        }

        let base = DateTime::new(year as i32, month, day, hour, minute, second, kind)?;
        DateTime::from_ticks_and_kind(base.ticks() + fraction_ticks, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_second() {
        let t = DateTime::new(2024, 8, 7, 9, 5, 3, DateTimeKind::Unspecified).unwrap();
        assert_eq!(t.to_string(), "2024-08-07T09:05:03");
    }

    #[test]
    fn test_display_trims_fraction_and_marks_utc() {
        let t = DateTime::new_with_millis(2024, 8, 7, 9, 5, 3, 120, DateTimeKind::Utc).unwrap();
        assert_eq!(t.to_string(), "2024-08-07T09:05:03.12Z");

        let t = DateTime::from_ticks(DateTime::from_ymd(1, 1, 1).unwrap().ticks() + 1).unwrap();
        assert_eq!(t.to_string(), "0001-01-01T00:00:00.0000001");
    }

    #[test]
    fn test_parse_round_trips() {
        for text in [
            "2024-08-07T09:05:03",
            "2024-08-07T09:05:03.12Z",
            "0001-01-01T00:00:00.0000001",
            "9999-12-31T23:59:59.9999999Z",
        ] {
            let t: DateTime = text.parse().unwrap();
            assert_eq!(t.to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        assert_eq!(
            "2024-08-07 09:05:03".parse::<DateTime>(),
            Err(DateTimeError::MalformedTimestamp { offset: 10 })
        );
        assert_eq!(
            "2024-08-07T09:05".parse::<DateTime>(),
            Err(DateTimeError::MalformedTimestamp { offset: 16 })
        );
        assert_eq!(
            "2024-08-07T09:05:03.".parse::<DateTime>(),
            Err(DateTimeError::MalformedTimestamp { offset: 20 })
        );
        assert_eq!(
            "2024-08-07T09:05:03.12345678".parse::<DateTime>(),
            Err(DateTimeError::MalformedTimestamp { offset: 27 })
        );
        assert_eq!(
            "2024-08-07T09:05:03Zjunk".parse::<DateTime>(),
            Err(DateTimeError::MalformedTimestamp { offset: 20 })
        );
    }

    #[test]
    fn test_parse_validates_components() {
        assert_eq!(
            "2023-02-29T00:00:00".parse::<DateTime>(),
            Err(DateTimeError::ComponentOutOfRange {
                component: "day",
                value: 29,
                min: 1,
                max: 28,
            })
        );
        assert!(matches!(
            "2024-00-07T09:05:03".parse::<DateTime>(),
            Err(DateTimeError::ComponentOutOfRange {
                component: "month",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_kind_tagging() {
        let utc: DateTime = "2024-08-07T09:05:03Z".parse().unwrap();
        assert_eq!(utc.kind(), DateTimeKind::Utc);
        let plain: DateTime = "2024-08-07T09:05:03".parse().unwrap();
        assert_eq!(plain.kind(), DateTimeKind::Unspecified);
        assert_eq!(utc.compare(plain), std::cmp::Ordering::Equal);
        assert_ne!(utc, plain);
    }
}
