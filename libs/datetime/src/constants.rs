//! Tick and calendar constants.
//!
//! One tick is 100 nanoseconds. Tick zero is 0001-01-01T00:00:00 in the
//! proleptic Gregorian calendar; the maximum tick is the last instant of
//! 9999-12-31. These values define the packed representation and must
//! remain stable: the raw 64-bit word is also the serialized form.

/// Ticks per microsecond (100 ns resolution).
pub const TICKS_PER_MICROSECOND: i64 = 10;

/// Ticks per millisecond.
pub const TICKS_PER_MILLISECOND: i64 = TICKS_PER_MICROSECOND * 1_000;

/// Ticks per second.
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1_000;

/// Ticks per minute.
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;

/// Ticks per hour.
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;

/// Ticks per day.
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// Milliseconds per second/minute/hour/day, used by the fractional adders.
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = MILLIS_PER_SECOND * 60;
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;

/// Days in a non-leap year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Days in a 4-year span with one leap day.
pub const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1; // 1461

/// Days in a 100-year span (24 leap days).
pub const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1; // 36524

/// Days in the full 400-year Gregorian cycle (97 leap days).
pub const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1; // 146097

/// Smallest and largest representable calendar year.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// The last representable tick: 9999-12-31T23:59:59.9999999.
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

/// Ticks at the Windows file-time epoch, 1601-01-01T00:00:00.
pub const FILE_TIME_EPOCH_TICKS: i64 = 504_911_232_000_000_000;

/// Ticks at the Unix epoch, 1970-01-01T00:00:00.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

// Packing of the 64-bit word: bits 0..61 carry ticks, bits 62..63 the
// kind flags. The ambiguous-DST marker is a third flag state of Local.
pub(crate) const TICKS_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;
pub(crate) const FLAGS_MASK: u64 = 0xC000_0000_0000_0000;
pub(crate) const KIND_UTC_FLAG: u64 = 0x4000_0000_0000_0000;
pub(crate) const KIND_LOCAL_FLAG: u64 = 0x8000_0000_0000_0000;
pub(crate) const KIND_LOCAL_AMBIGUOUS_FLAG: u64 = 0xC000_0000_0000_0000;
