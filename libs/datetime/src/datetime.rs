//! The packed tick/kind instant and its calendar engine.
//!
//! ## Purpose
//!
//! A [`DateTime`] is one 64-bit word: bits 0..61 hold a tick count (100 ns
//! units since 0001-01-01T00:00:00, proleptic Gregorian) and bits 62..63
//! hold the kind flags. Calendar fields are never stored; they are derived
//! on demand from the tick count through the 400-year-cycle decomposition,
//! and every constructor validates its components before any ticks are
//! committed.
//!
//! ## Integration Points
//!
//! - **Construction**: component constructors ([`DateTime::new`] family),
//!   raw ticks ([`DateTime::from_ticks`]), serialized words
//!   ([`DateTime::from_binary`]), OS file times, and the injected clock
//!   ([`DateTime::utc_now`]).
//! - **Arithmetic**: `add_*` returns a new value and fails on range
//!   violations; the kind tag rides along untouched.
//! - **Kind semantics**: ordering compares ticks only, equality compares
//!   the whole word; `specify_kind`/`to_universal_time`/`to_local_time`
//!   are the only operations that change the tag.

use crate::clock::{
    self, LeapSecondOracle, SystemClock, TimeZoneProvider,
};
use crate::constants::*;
use crate::error::{DateTimeError, DateTimeResult};
use crate::kind::{DateTimeKind, DayOfWeek};
use crate::leap_cache::{LeapSecondCache, GLOBAL_CLOCK_CACHE};
use std::cmp::Ordering;

/// Cumulative days before each month, non-leap years.
const DAYS_TO_MONTH_365: [i64; 13] = [
    0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365,
];
/// Cumulative days before each month, leap years.
const DAYS_TO_MONTH_366: [i64; 13] = [
    0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366,
];

/// Ceiling for the millisecond-scaled fractional adders.
const MAX_ADD_MILLIS: i64 = MAX_TICKS / TICKS_PER_MILLISECOND + 1;

/// An instant in the proleptic Gregorian calendar with a kind tag.
///
/// Equality and hashing cover the full packed word (ticks and kind);
/// ordering deliberately does not exist as an operator. Rust's `Ord`
/// contract requires consistency with `Eq`, and tick-only ordering breaks
/// it for values that differ solely in kind — use [`DateTime::compare`],
/// [`DateTime::is_before`] and [`DateTime::is_after`] instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    raw: u64,
}

impl DateTime {
    /// Midnight, January 1 of year 1, kind Unspecified.
    pub const MIN: DateTime = DateTime { raw: 0 };

    /// The last representable instant of year 9999, kind Unspecified.
    pub const MAX: DateTime = DateTime {
        raw: MAX_TICKS as u64,
    };

    /// 1970-01-01T00:00:00, kind Unspecified.
    pub const UNIX_EPOCH: DateTime = DateTime {
        raw: UNIX_EPOCH_TICKS as u64,
    };

    // ------------------------------------------------------------------
    // Construction

    /// Wrap a raw tick count with kind Unspecified.
    pub fn from_ticks(ticks: i64) -> DateTimeResult<Self> {
        Self::from_ticks_and_kind(ticks, DateTimeKind::Unspecified)
    }

    /// Wrap a raw tick count with an explicit kind.
    pub fn from_ticks_and_kind(ticks: i64, kind: DateTimeKind) -> DateTimeResult<Self> {
        if !(0..=MAX_TICKS).contains(&ticks) {
            return Err(DateTimeError::TicksOutOfRange { ticks });
        }
        Ok(DateTime {
            raw: ticks as u64 | kind_flag(kind),
        })
    }

    /// Midnight on the given date, kind Unspecified.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateTimeResult<Self> {
        Ok(DateTime {
            raw: Self::date_to_ticks(year, month, day)? as u64,
        })
    }

    /// Construct from date and time-of-day components.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        kind: DateTimeKind,
    ) -> DateTimeResult<Self> {
        Self::new_with_micros(year, month, day, hour, minute, second, 0, 0, kind)
    }

    /// Construct with millisecond precision.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_millis(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        kind: DateTimeKind,
    ) -> DateTimeResult<Self> {
        Self::new_with_micros(year, month, day, hour, minute, second, millisecond, 0, kind)
    }

    /// Construct with microsecond precision.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_micros(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        microsecond: u32,
        kind: DateTimeKind,
    ) -> DateTimeResult<Self> {
        Self::new_with_collaborators(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            kind,
            clock::system_clock(),
            clock::leap_second_oracle(),
        )
    }

    /// Full constructor with explicit collaborators.
    ///
    /// Second 60 is accepted only when `clock` reports leap-second support
    /// and `oracle` validates the instant; the stored value is then the
    /// final representable second of the minute (second 59, sub-second
    /// components preserved).
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_collaborators(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        microsecond: u32,
        kind: DateTimeKind,
        clock: &dyn SystemClock,
        oracle: &dyn LeapSecondOracle,
    ) -> DateTimeResult<Self> {
        let mut second = second;
        if second == 60 {
            if !clock.supports_leap_seconds() {
                return Err(DateTimeError::ComponentOutOfRange {
                    component: "second",
                    value: 60,
                    min: 0,
                    max: 59,
                });
            }
            if !oracle.is_valid_leap_second(year, month, day, hour, minute, kind) {
                return Err(DateTimeError::InvalidLeapSecond {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                });
            }
            second = 59;
        }
        check_component("millisecond", millisecond as i64, 0, 999)?;
        check_component("microsecond", microsecond as i64, 0, 999)?;
        let ticks = Self::date_to_ticks(year, month, day)?
            + Self::time_to_ticks(hour, minute, second)?
            + millisecond as i64 * TICKS_PER_MILLISECOND
            + microsecond as i64 * TICKS_PER_MICROSECOND;
        Ok(DateTime {
            raw: ticks as u64 | kind_flag(kind),
        })
    }

    // ------------------------------------------------------------------
    // Packed-word accessors

    /// Tick count since 0001-01-01T00:00:00.
    pub const fn ticks(&self) -> i64 {
        (self.raw & TICKS_MASK) as i64
    }

    /// The kind tag. The internal ambiguous-DST state reads as `Local`.
    pub const fn kind(&self) -> DateTimeKind {
        match self.raw & FLAGS_MASK {
            0 => DateTimeKind::Unspecified,
            KIND_UTC_FLAG => DateTimeKind::Utc,
            _ => DateTimeKind::Local,
        }
    }

    /// Whether this Local value was produced from an ambiguous DST
    /// wall-clock reading.
    pub const fn is_ambiguous_daylight_saving_time(&self) -> bool {
        self.raw & FLAGS_MASK == KIND_LOCAL_AMBIGUOUS_FLAG
    }

    /// Re-tag the instant without touching the tick count. Idempotent.
    pub fn specify_kind(self, kind: DateTimeKind) -> Self {
        DateTime {
            raw: self.ticks() as u64 | kind_flag(kind),
        }
    }

    /// The packed word as a serializable 64-bit integer.
    pub const fn to_binary(self) -> i64 {
        self.raw as i64
    }

    /// Rebuild from a serialized packed word, rejecting tick payloads
    /// beyond the representable range.
    pub fn from_binary(raw: i64) -> DateTimeResult<Self> {
        let data = raw as u64;
        if (data & TICKS_MASK) as i64 > MAX_TICKS {
            return Err(DateTimeError::InvalidBinaryData { raw });
        }
        Ok(DateTime { raw: data })
    }

    // ------------------------------------------------------------------
    // Calendar decomposition

    /// Calendar year, 1..=9999.
    pub fn year(&self) -> i32 {
        self.split_date().0
    }

    /// Calendar month, 1..=12.
    pub fn month(&self) -> u32 {
        self.get_date().1
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.get_date().2
    }

    /// Hour of day, 0..=23.
    pub fn hour(&self) -> u32 {
        ((self.ticks() / TICKS_PER_HOUR) % 24) as u32
    }

    /// Minute, 0..=59.
    pub fn minute(&self) -> u32 {
        ((self.ticks() / TICKS_PER_MINUTE) % 60) as u32
    }

    /// Second, 0..=59.
    pub fn second(&self) -> u32 {
        ((self.ticks() / TICKS_PER_SECOND) % 60) as u32
    }

    /// Millisecond component, 0..=999.
    pub fn millisecond(&self) -> u32 {
        ((self.ticks() / TICKS_PER_MILLISECOND) % 1000) as u32
    }

    /// Microsecond component, 0..=999.
    pub fn microsecond(&self) -> u32 {
        ((self.ticks() / TICKS_PER_MICROSECOND) % 1000) as u32
    }

    /// Nanosecond component at tick resolution (multiples of 100).
    pub fn nanosecond(&self) -> u32 {
        ((self.ticks() % TICKS_PER_MICROSECOND) * 100) as u32
    }

    /// Day of the week.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_day_index(((self.ticks() / TICKS_PER_DAY + 1) % 7) as u8)
    }

    /// Day of the year, 1..=366.
    pub fn day_of_year(&self) -> u32 {
        (self.split_date().1 + 1) as u32
    }

    /// Midnight of the same day, kind preserved.
    pub fn date(&self) -> Self {
        let midnight = self.ticks() - self.ticks() % TICKS_PER_DAY;
        DateTime {
            raw: midnight as u64 | (self.raw & FLAGS_MASK),
        }
    }

    /// Ticks elapsed since midnight.
    pub const fn time_of_day_ticks(&self) -> i64 {
        self.ticks() % TICKS_PER_DAY
    }

    /// (year, day-of-year zero-based, is-leap) from the 400-year cycle.
    fn split_date(&self) -> (i32, i64, bool) {
        let mut n = self.ticks() / TICKS_PER_DAY;
        let y400 = n / DAYS_PER_400_YEARS;
        n -= y400 * DAYS_PER_400_YEARS;
        let mut y100 = n / DAYS_PER_100_YEARS;
        if y100 == 4 {
            y100 = 3;
        }
        n -= y100 * DAYS_PER_100_YEARS;
        let y4 = n / DAYS_PER_4_YEARS;
        n -= y4 * DAYS_PER_4_YEARS;
        let mut y1 = n / DAYS_PER_YEAR;
        if y1 == 4 {
            y1 = 3;
        }
        n -= y1 * DAYS_PER_YEAR;
        let year = (y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1) as i32;
        let leap = y1 == 3 && (y4 != 24 || y100 == 3);
        (year, n, leap)
    }

    /// (year, month, day) via the cumulative month table.
    fn get_date(&self) -> (i32, u32, u32) {
        let (year, n, leap) = self.split_date();
        let days = if leap {
            &DAYS_TO_MONTH_366
        } else {
            &DAYS_TO_MONTH_365
        };
        // n >> 5 underestimates the month; at most two scan steps remain.
        let mut m = ((n >> 5) + 1) as usize;
        while n >= days[m] {
            m += 1;
        }
        let day = (n - days[m - 1] + 1) as u32;
        (year, m as u32, day)
    }

    // ------------------------------------------------------------------
    // Calendar statics

    /// Gregorian leap-year rule for years 1..=9999.
    pub fn is_leap_year(year: i32) -> DateTimeResult<bool> {
        check_component("year", year as i64, MIN_YEAR as i64, MAX_YEAR as i64)?;
        Ok(is_leap(year))
    }

    /// Number of days in the given month.
    pub fn days_in_month(year: i32, month: u32) -> DateTimeResult<u32> {
        check_component("year", year as i64, MIN_YEAR as i64, MAX_YEAR as i64)?;
        check_component("month", month as i64, 1, 12)?;
        Ok(days_in_month_unchecked(year, month))
    }

    /// Ticks at midnight of the given date, validating every component.
    fn date_to_ticks(year: i32, month: u32, day: u32) -> DateTimeResult<i64> {
        check_component("year", year as i64, MIN_YEAR as i64, MAX_YEAR as i64)?;
        check_component("month", month as i64, 1, 12)?;
        let days = if is_leap(year) {
            &DAYS_TO_MONTH_366
        } else {
            &DAYS_TO_MONTH_365
        };
        let max_day = days[month as usize] - days[month as usize - 1];
        check_component("day", day as i64, 1, max_day)?;
        let n = days_to_year(year as i64) + days[month as usize - 1] + day as i64 - 1;
        Ok(n * TICKS_PER_DAY)
    }

    /// Ticks since midnight for a wall-clock time.
    fn time_to_ticks(hour: u32, minute: u32, second: u32) -> DateTimeResult<i64> {
        check_component("hour", hour as i64, 0, 23)?;
        check_component("minute", minute as i64, 0, 59)?;
        check_component("second", second as i64, 0, 59)?;
        Ok((hour as i64 * 3600 + minute as i64 * 60 + second as i64) * TICKS_PER_SECOND)
    }

    // ------------------------------------------------------------------
    // Arithmetic

    /// Add a signed tick count; a result outside `[0, MAX_TICKS]` is an
    /// arithmetic overflow, never a wraparound.
    pub fn add_ticks(self, value: i64) -> DateTimeResult<Self> {
        let ticks = self
            .ticks()
            .checked_add(value)
            .filter(|t| (0..=MAX_TICKS).contains(t))
            .ok_or(DateTimeError::ArithmeticOverflow {
                operation: "add_ticks",
            })?;
        Ok(self.with_ticks(ticks))
    }

    /// Add fractional days.
    pub fn add_days(self, value: f64) -> DateTimeResult<Self> {
        self.add_scaled(value, MILLIS_PER_DAY, "days")
    }

    /// Add fractional hours.
    pub fn add_hours(self, value: f64) -> DateTimeResult<Self> {
        self.add_scaled(value, MILLIS_PER_HOUR, "hours")
    }

    /// Add fractional minutes.
    pub fn add_minutes(self, value: f64) -> DateTimeResult<Self> {
        self.add_scaled(value, MILLIS_PER_MINUTE, "minutes")
    }

    /// Add fractional seconds.
    pub fn add_seconds(self, value: f64) -> DateTimeResult<Self> {
        self.add_scaled(value, MILLIS_PER_SECOND, "seconds")
    }

    /// Add fractional milliseconds.
    pub fn add_milliseconds(self, value: f64) -> DateTimeResult<Self> {
        self.add_scaled(value, 1, "milliseconds")
    }

    /// Add fractional microseconds, carried at tick resolution.
    pub fn add_microseconds(self, value: f64) -> DateTimeResult<Self> {
        let ticks = value * TICKS_PER_MICROSECOND as f64 + if value >= 0.0 { 0.5 } else { -0.5 };
        if !(ticks > -(MAX_TICKS as f64) && ticks < MAX_TICKS as f64) {
            return Err(DateTimeError::AddRangeExceeded {
                unit: "microseconds",
                value,
            });
        }
        self.add_ticks(ticks as i64)
    }

    /// Shared fractional adder: scale to milliseconds, round half away
    /// from zero, bound so the tick multiply cannot overflow, delegate.
    fn add_scaled(self, value: f64, millis_per_unit: i64, unit: &'static str) -> DateTimeResult<Self> {
        let millis = value * millis_per_unit as f64 + if value >= 0.0 { 0.5 } else { -0.5 };
        // Inverted comparison also rejects NaN.
        if !(millis > -(MAX_ADD_MILLIS as f64) && millis < MAX_ADD_MILLIS as f64) {
            return Err(DateTimeError::AddRangeExceeded { unit, value });
        }
        self.add_ticks(millis as i64 * TICKS_PER_MILLISECOND)
    }

    /// Add calendar months with floor carry into the year; the day of
    /// month clamps downward when the target month is shorter.
    pub fn add_months(self, months: i32) -> DateTimeResult<Self> {
        check_component("months", months as i64, -120_000, 120_000)?;
        let (year, month, day) = self.get_date();
        let zero_based = month as i32 - 1 + months;
        let year = year + zero_based.div_euclid(12);
        let month = (zero_based.rem_euclid(12) + 1) as u32;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateTimeError::ArithmeticOverflow {
                operation: "add_months",
            });
        }
        let day = day.min(days_in_month_unchecked(year, month));
        let date_ticks = Self::date_to_ticks(year, month, day)?;
        Ok(self.with_ticks(date_ticks + self.time_of_day_ticks()))
    }

    /// Add calendar years; February 29 lands on February 28 when the
    /// target year is not a leap year.
    pub fn add_years(self, years: i32) -> DateTimeResult<Self> {
        check_component("years", years as i64, -10_000, 10_000)?;
        self.add_months(years * 12).map_err(|err| match err {
            DateTimeError::ArithmeticOverflow { .. } => DateTimeError::ArithmeticOverflow {
                operation: "add_years",
            },
            other => other,
        })
    }

    /// Signed tick distance `self - other`; kind is ignored.
    pub fn diff_ticks(self, other: Self) -> i64 {
        self.ticks() - other.ticks()
    }

    fn with_ticks(self, ticks: i64) -> Self {
        DateTime {
            raw: ticks as u64 | (self.raw & FLAGS_MASK),
        }
    }

    // ------------------------------------------------------------------
    // Comparison

    /// Order by tick count alone; kind never participates. Note the
    /// asymmetry with `==`, which compares the full packed word.
    pub fn compare(self, other: Self) -> Ordering {
        self.ticks().cmp(&other.ticks())
    }

    /// True when this instant's ticks precede `other`'s.
    pub fn is_before(self, other: Self) -> bool {
        self.ticks() < other.ticks()
    }

    /// True when this instant's ticks follow `other`'s.
    pub fn is_after(self, other: Self) -> bool {
        self.ticks() > other.ticks()
    }

    /// The tick-wise earlier of the two values.
    pub fn min(self, other: Self) -> Self {
        if other.ticks() < self.ticks() {
            other
        } else {
            self
        }
    }

    /// The tick-wise later of the two values.
    pub fn max(self, other: Self) -> Self {
        if other.ticks() > self.ticks() {
            other
        } else {
            self
        }
    }

    // ------------------------------------------------------------------
    // Kind conversions and clock interop

    /// Convert to UTC using the process-default timezone provider.
    pub fn to_universal_time(&self) -> Self {
        self.to_universal_time_with(clock::time_zone_provider())
    }

    /// Convert to UTC with an explicit provider. Unspecified values are
    /// treated as local readings; the result clamps into the
    /// representable range instead of overflowing.
    pub fn to_universal_time_with(&self, tz: &dyn TimeZoneProvider) -> Self {
        if self.kind() == DateTimeKind::Utc {
            return *self;
        }
        let offset = tz.offset_for(*self, self.kind());
        let ticks = (self.ticks() - offset.offset_ticks).clamp(0, MAX_TICKS);
        DateTime {
            raw: ticks as u64 | KIND_UTC_FLAG,
        }
    }

    /// Convert to local time using the process-default provider.
    pub fn to_local_time(&self) -> Self {
        self.to_local_time_with(clock::time_zone_provider())
    }

    /// Convert to local time with an explicit provider. Unspecified
    /// values are treated as UTC instants; ambiguous wall-clock results
    /// carry the ambiguous-DST sub-flag.
    pub fn to_local_time_with(&self, tz: &dyn TimeZoneProvider) -> Self {
        if self.kind() == DateTimeKind::Local {
            return *self;
        }
        let offset = tz.offset_for(*self, DateTimeKind::Utc);
        let ticks = (self.ticks() + offset.offset_ticks).clamp(0, MAX_TICKS);
        let flag = if offset.is_ambiguous {
            KIND_LOCAL_AMBIGUOUS_FLAG
        } else {
            KIND_LOCAL_FLAG
        };
        DateTime {
            raw: ticks as u64 | flag,
        }
    }

    /// Current UTC instant from the process-default clock, served through
    /// the leap-second snapshot cache.
    pub fn utc_now() -> Self {
        Self::utc_now_with(clock::system_clock(), &GLOBAL_CLOCK_CACHE)
    }

    /// Current UTC instant from an explicit clock and cache.
    pub fn utc_now_with(clock: &dyn SystemClock, cache: &LeapSecondCache) -> Self {
        let ticks = cache.utc_ticks(clock).min(MAX_TICKS as u64);
        DateTime {
            raw: ticks | KIND_UTC_FLAG,
        }
    }

    /// Current local instant from the process defaults.
    pub fn now() -> Self {
        Self::utc_now().to_local_time()
    }

    /// Current local instant from explicit collaborators.
    pub fn now_with(
        clock: &dyn SystemClock,
        cache: &LeapSecondCache,
        tz: &dyn TimeZoneProvider,
    ) -> Self {
        Self::utc_now_with(clock, cache).to_local_time_with(tz)
    }

    /// Midnight of the current local day.
    pub fn today() -> Self {
        Self::now().date()
    }

    /// Interpret an OS file time (100 ns ticks since 1601-01-01) as a UTC
    /// instant via the process-default clock.
    pub fn from_file_time_utc(file_time: i64) -> DateTimeResult<Self> {
        Self::from_file_time_utc_with(clock::system_clock(), file_time)
    }

    /// Interpret an OS file time with an explicit clock, whose conversion
    /// hook owns the platform's leap-second handling.
    pub fn from_file_time_utc_with(
        clock: &dyn SystemClock,
        file_time: i64,
    ) -> DateTimeResult<Self> {
        let max_file = MAX_TICKS - FILE_TIME_EPOCH_TICKS;
        check_component("file_time", file_time, 0, max_file)?;
        let utc = clock
            .file_time_to_utc_ticks(file_time as u64)
            .ok_or(DateTimeError::ComponentOutOfRange {
                component: "file_time",
                value: file_time,
                min: 0,
                max: max_file,
            })?;
        Self::from_ticks_and_kind(utc as i64, DateTimeKind::Utc)
    }

    /// Express this instant as an OS file time via the process defaults.
    pub fn to_file_time_utc(&self) -> DateTimeResult<i64> {
        self.to_file_time_utc_with(clock::system_clock(), clock::time_zone_provider())
    }

    /// Express this instant as an OS file time. Local values convert to
    /// UTC first; Unspecified values are treated as already universal.
    pub fn to_file_time_utc_with(
        &self,
        clock: &dyn SystemClock,
        tz: &dyn TimeZoneProvider,
    ) -> DateTimeResult<i64> {
        let utc = match self.kind() {
            DateTimeKind::Local => self.to_universal_time_with(tz),
            _ => *self,
        };
        let file = clock
            .utc_ticks_to_file_time(utc.ticks() as u64)
            .ok_or(DateTimeError::ComponentOutOfRange {
                component: "file_time",
                value: utc.ticks() - FILE_TIME_EPOCH_TICKS,
                min: 0,
                max: MAX_TICKS - FILE_TIME_EPOCH_TICKS,
            })?;
        Ok(file as i64)
    }
}

const fn kind_flag(kind: DateTimeKind) -> u64 {
    match kind {
        DateTimeKind::Unspecified => 0,
        DateTimeKind::Utc => KIND_UTC_FLAG,
        DateTimeKind::Local => KIND_LOCAL_FLAG,
    }
}

const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_to_year(year: i64) -> i64 {
    let n = year - 1;
    n * DAYS_PER_YEAR + n / 4 - n / 100 + n / 400
}

fn days_in_month_unchecked(year: i32, month: u32) -> u32 {
    let days = if is_leap(year) {
        &DAYS_TO_MONTH_366
    } else {
        &DAYS_TO_MONTH_365
    };
    (days[month as usize] - days[month as usize - 1]) as u32
}

fn check_component(
    component: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> DateTimeResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DateTimeError::ComponentOutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_binary())
    }
}

#[cfg(feature = "serialization")]
impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        DateTime::from_binary(raw).map_err(serde::de::Error::custom)
    }
}
