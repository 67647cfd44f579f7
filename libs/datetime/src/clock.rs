//! Collaborator seams: system clock, leap-second oracle, timezone offsets.
//!
//! ## Purpose
//!
//! The engine itself never touches the OS. Everything platform-specific is
//! injected through the three traits in this module, so the tick
//! arithmetic stays testable against fakes and the production bindings
//! stay small:
//!
//! - [`SystemClock`] reads the OS timestamp (100 ns ticks since the
//!   1601-01-01 file-time epoch) and owns the platform's leap-second
//!   conversions.
//! - [`LeapSecondOracle`] answers whether a given minute legitimately ends
//!   in second 60. The engine treats this as opaque platform knowledge.
//! - [`TimeZoneProvider`] maps an instant and kind to a UTC offset with
//!   DST/ambiguity flags.
//!
//! Production bindings: [`OsSystemClock`] (std `SystemTime`, no
//! leap-second tracking), [`NoLeapSeconds`], and
//! [`LocalTimeZoneProvider`] backed by `chrono::Local`. Process-wide
//! defaults are published through `once_cell` statics and reached by the
//! convenience constructors on `DateTime`.

use crate::constants::{
    FILE_TIME_EPOCH_TICKS, MAX_TICKS, TICKS_PER_SECOND, UNIX_EPOCH_TICKS,
};
use crate::datetime::DateTime;
use crate::kind::DateTimeKind;
use once_cell::sync::Lazy;
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC offset answer from a [`TimeZoneProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneOffset {
    /// Signed offset to add to a UTC tick count to reach local time.
    pub offset_ticks: i64,
    /// Whether daylight saving is in effect at the queried instant.
    pub is_daylight_saving: bool,
    /// Whether the local wall-clock reading maps to two UTC instants
    /// (the repeated hour of a backward transition).
    pub is_ambiguous: bool,
}

impl TimeZoneOffset {
    /// A zero offset with no DST and no ambiguity.
    pub const UTC: TimeZoneOffset = TimeZoneOffset {
        offset_ticks: 0,
        is_daylight_saving: false,
        is_ambiguous: false,
    };
}

/// High-resolution reader of the platform clock.
///
/// `os_ticks_now` is in the OS representation: 100 ns ticks since
/// 1601-01-01. The two conversion hooks carry the platform's leap-second
/// handling; the default bodies are the plain epoch shift used everywhere
/// leap seconds are not tracked.
pub trait SystemClock: Send + Sync {
    /// Current OS timestamp, 100 ns ticks since 1601-01-01T00:00:00 UTC.
    fn os_ticks_now(&self) -> u64;

    /// Whether the platform folds leap seconds into its timestamps.
    fn supports_leap_seconds(&self) -> bool;

    /// Convert an OS file-time tick count to engine UTC ticks
    /// (100 ns since 0001-01-01). `None` when unrepresentable.
    fn file_time_to_utc_ticks(&self, file_ticks: u64) -> Option<u64> {
        let ticks = i64::try_from(file_ticks)
            .ok()?
            .checked_add(FILE_TIME_EPOCH_TICKS)?;
        (0..=MAX_TICKS).contains(&ticks).then_some(ticks as u64)
    }

    /// Convert engine UTC ticks back to an OS file-time tick count.
    /// `None` for instants before the file-time epoch.
    fn utc_ticks_to_file_time(&self, utc_ticks: u64) -> Option<u64> {
        let ticks = i64::try_from(utc_ticks).ok()?;
        let file = ticks.checked_sub(FILE_TIME_EPOCH_TICKS)?;
        (file >= 0).then_some(file as u64)
    }
}

/// Validity authority for second-60 instants.
pub trait LeapSecondOracle: Send + Sync {
    /// Whether `{year}-{month}-{day} {hour}:{minute}:60` is a recognized
    /// leap second for the given kind.
    fn is_valid_leap_second(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        kind: DateTimeKind,
    ) -> bool;
}

/// UTC-offset source for kind conversions.
pub trait TimeZoneProvider: Send + Sync {
    /// Offset for `instant` interpreted per `kind`: for [`DateTimeKind::Utc`]
    /// the instant is a UTC tick count and the answer converts it to local
    /// time; otherwise the instant is a local wall-clock reading.
    fn offset_for(&self, instant: DateTime, kind: DateTimeKind) -> TimeZoneOffset;
}

/// Production clock: std `SystemTime` shifted onto the file-time epoch.
///
/// No mainstream OS exposes leap seconds through this path, so
/// `supports_leap_seconds` is false and the default conversions apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSystemClock;

impl SystemClock for OsSystemClock {
    fn os_ticks_now(&self) -> u64 {
        let since_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch");
        let unix_ticks =
            since_unix.as_secs() as i64 * TICKS_PER_SECOND + (since_unix.subsec_nanos() / 100) as i64;
        (unix_ticks + (UNIX_EPOCH_TICKS - FILE_TIME_EPOCH_TICKS)) as u64
    }

    fn supports_leap_seconds(&self) -> bool {
        false
    }
}

/// Production oracle for platforms without leap-second tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLeapSeconds;

impl LeapSecondOracle for NoLeapSeconds {
    fn is_valid_leap_second(
        &self,
        _year: i32,
        _month: u32,
        _day: u32,
        _hour: u32,
        _minute: u32,
        _kind: DateTimeKind,
    ) -> bool {
        false
    }
}

/// Fixed zero-offset provider for pinned-UTC configurations.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcTimeZoneProvider;

impl TimeZoneProvider for UtcTimeZoneProvider {
    fn offset_for(&self, _instant: DateTime, _kind: DateTimeKind) -> TimeZoneOffset {
        TimeZoneOffset::UTC
    }
}

/// Production provider backed by the system zone via `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTimeZoneProvider;

impl LocalTimeZoneProvider {
    fn naive_from_ticks(ticks: i64) -> Option<chrono::NaiveDateTime> {
        let unix_ticks = ticks - UNIX_EPOCH_TICKS;
        let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
        chrono::DateTime::from_timestamp(secs, nanos).map(|utc| utc.naive_utc())
    }

    fn offset_seconds_at_utc(naive_utc: chrono::NaiveDateTime) -> i32 {
        use chrono::{Offset, TimeZone};
        chrono::Local
            .offset_from_utc_datetime(&naive_utc)
            .fix()
            .local_minus_utc()
    }

    /// Smallest offset the zone uses in the instant's year: DST is
    /// whatever exceeds it. Sampling both solstices covers either
    /// hemisphere's transition layout.
    fn standard_offset_seconds(year: i32) -> i32 {
        let jan = chrono::NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(Self::offset_seconds_at_utc);
        let jul = chrono::NaiveDate::from_ymd_opt(year, 7, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(Self::offset_seconds_at_utc);
        match (jan, jul) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => 0,
        }
    }
}

impl TimeZoneProvider for LocalTimeZoneProvider {
    fn offset_for(&self, instant: DateTime, kind: DateTimeKind) -> TimeZoneOffset {
        use chrono::{Datelike, LocalResult, Offset, TimeZone};

        let Some(naive) = Self::naive_from_ticks(instant.ticks()) else {
            return TimeZoneOffset::UTC;
        };

        let (offset_seconds, is_ambiguous) = match kind {
            DateTimeKind::Utc => (Self::offset_seconds_at_utc(naive), false),
            DateTimeKind::Local | DateTimeKind::Unspecified => {
                // The instant is a wall-clock reading; resolve it in the
                // local zone, taking the earlier of an ambiguous pair.
                match chrono::Local.from_local_datetime(&naive) {
                    LocalResult::Single(resolved) => {
                        (resolved.offset().fix().local_minus_utc(), false)
                    }
                    LocalResult::Ambiguous(earlier, _later) => {
                        (earlier.offset().fix().local_minus_utc(), true)
                    }
                    LocalResult::None => (Self::offset_seconds_at_utc(naive), false),
                }
            }
        };

        let standard = Self::standard_offset_seconds(naive.date().year());
        TimeZoneOffset {
            offset_ticks: offset_seconds as i64 * TICKS_PER_SECOND,
            is_daylight_saving: offset_seconds > standard,
            is_ambiguous,
        }
    }
}

static DEFAULT_SYSTEM_CLOCK: OsSystemClock = OsSystemClock;
static DEFAULT_LEAP_ORACLE: NoLeapSeconds = NoLeapSeconds;
static DEFAULT_TIME_ZONE: Lazy<LocalTimeZoneProvider> = Lazy::new(LocalTimeZoneProvider::default);

/// Process-wide default clock.
pub fn system_clock() -> &'static dyn SystemClock {
    &DEFAULT_SYSTEM_CLOCK
}

/// Process-wide default leap-second oracle.
pub fn leap_second_oracle() -> &'static dyn LeapSecondOracle {
    &DEFAULT_LEAP_ORACLE
}

/// Process-wide default timezone provider.
pub fn time_zone_provider() -> &'static dyn TimeZoneProvider {
    &*DEFAULT_TIME_ZONE
}
