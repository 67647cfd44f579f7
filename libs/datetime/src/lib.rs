//! # Coreval DateTime - tick-based calendar instant engine
//!
//! ## Purpose
//!
//! An instant is one 64-bit word: a 62-bit count of 100 ns ticks since
//! 0001-01-01T00:00:00 (proleptic Gregorian) plus a 2-bit kind tag
//! (Unspecified / Utc / Local, with an ambiguous-DST sub-flag folded into
//! the same bits). On top of that packing the crate provides validated
//! construction, on-demand calendar decomposition, checked arithmetic,
//! and leap-second-aware system-clock interop.
//!
//! ## Quick Start
//!
//! ```rust
//! use coreval_datetime::{DateTime, DateTimeKind};
//!
//! let t = DateTime::new(2024, 2, 29, 13, 45, 0, DateTimeKind::Utc)?;
//! assert_eq!(t.day_of_year(), 60);
//!
//! // Calendar arithmetic clamps the day, never wraps the month.
//! let next_month = DateTime::from_ymd(2024, 1, 31)?.add_months(1)?;
//! assert_eq!((next_month.month(), next_month.day()), (2, 29));
//!
//! // The packed word is the serialized form.
//! assert_eq!(DateTime::from_binary(t.to_binary())?, t);
//! # Ok::<(), coreval_datetime::DateTimeError>(())
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! Components ⇄ [tick codec / calendar cycle math] ⇄ packed u64 word
//!                         ↓
//!        SystemClock · LeapSecondOracle · TimeZoneProvider
//!              (injected collaborators, §clock module)
//! ```
//!
//! The engine itself is pure; the only shared mutable state is the
//! leap-second snapshot cache behind `utc_now`, published as an
//! atomically swapped immutable snapshot (see [`leap_cache`]).

pub mod clock;
pub mod constants;
pub mod error;
pub mod kind;
pub mod leap_cache;

mod datetime;
mod text;

pub use clock::{
    leap_second_oracle, system_clock, time_zone_provider, LeapSecondOracle,
    LocalTimeZoneProvider, NoLeapSeconds, OsSystemClock, SystemClock, TimeZoneOffset,
    TimeZoneProvider, UtcTimeZoneProvider,
};
pub use constants::{MAX_TICKS, TICKS_PER_DAY, TICKS_PER_SECOND};
pub use datetime::DateTime;
pub use error::{DateTimeError, DateTimeResult};
pub use kind::{DateTimeKind, DayOfWeek};
pub use leap_cache::LeapSecondCache;
