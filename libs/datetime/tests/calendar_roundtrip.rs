//! Calendar inverse and serialization round-trip properties.

use coreval_datetime::{DateTime, DateTimeKind, MAX_TICKS, TICKS_PER_DAY};
use proptest::prelude::*;

/// Arbitrary valid calendar components: the raw day is folded into the
/// month's actual length so every tuple constructs.
fn components() -> impl Strategy<Value = (i32, u32, u32, u32, u32, u32, u32, u32)> {
    (
        1i32..=9999,
        1u32..=12,
        0u32..31,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
        0u32..1000,
    )
        .prop_map(|(year, month, raw_day, hour, minute, second, millis, micros)| {
            let day = 1 + raw_day % DateTime::days_in_month(year, month).unwrap();
            (year, month, day, hour, minute, second, millis, micros)
        })
}

proptest! {
    #[test]
    fn construction_decomposes_to_the_same_components(
        (year, month, day, hour, minute, second, millis, micros) in components()
    ) {
        let t = DateTime::new_with_micros(
            year, month, day, hour, minute, second, millis, micros,
            DateTimeKind::Unspecified,
        )
        .unwrap();
        prop_assert_eq!((t.year(), t.month(), t.day()), (year, month, day));
        prop_assert_eq!((t.hour(), t.minute(), t.second()), (hour, minute, second));
        prop_assert_eq!((t.millisecond(), t.microsecond()), (millis, micros));
    }

    #[test]
    fn binary_round_trips_for_every_kind(
        ticks in 0i64..=MAX_TICKS,
        kind_raw in 0u8..3,
    ) {
        let kind = DateTimeKind::from_u8(kind_raw).unwrap();
        let t = DateTime::from_ticks_and_kind(ticks, kind).unwrap();
        let back = DateTime::from_binary(t.to_binary()).unwrap();
        prop_assert_eq!(back, t);
        prop_assert_eq!(back.kind(), kind);
        prop_assert_eq!(back.ticks(), ticks);
    }

    #[test]
    fn decomposition_inverts_for_raw_ticks(ticks in 0i64..=MAX_TICKS) {
        let t = DateTime::from_ticks(ticks).unwrap();
        let rebuilt = DateTime::new_with_micros(
            t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second(),
            t.millisecond(), t.microsecond(), DateTimeKind::Unspecified,
        )
        .unwrap();
        // Everything above tick resolution is recovered; the sub-tick
        // remainder is the nanosecond accessor.
        prop_assert_eq!(rebuilt.ticks() + (t.nanosecond() / 100) as i64, ticks);
    }

    #[test]
    fn whole_day_adds_match_tick_adds(
        ticks in 0i64..=(MAX_TICKS - TICKS_PER_DAY),
        days in 1i64..1000,
    ) {
        let t = DateTime::from_ticks(ticks).unwrap();
        prop_assume!(ticks + days * TICKS_PER_DAY <= MAX_TICKS);
        let by_days = t.add_days(days as f64).unwrap();
        let by_ticks = t.add_ticks(days * TICKS_PER_DAY).unwrap();
        prop_assert_eq!(by_days, by_ticks);
    }

    #[test]
    fn text_round_trips(
        (year, month, day, hour, minute, second, millis, micros) in components()
    ) {
        let t = DateTime::new_with_micros(
            year, month, day, hour, minute, second, millis, micros,
            DateTimeKind::Utc,
        )
        .unwrap();
        let text = t.to_string();
        prop_assert_eq!(text.parse::<DateTime>().unwrap(), t);
    }

    #[test]
    fn add_months_day_is_clamped_never_wrapped(
        (year, month, day, ..) in components(),
        months in -600i32..600,
    ) {
        let t = DateTime::from_ymd(year, month, day).unwrap();
        match t.add_months(months) {
            Ok(shifted) => {
                let expected_index = (month as i32 - 1 + months).rem_euclid(12) as u32 + 1;
                prop_assert_eq!(shifted.month(), expected_index);
                prop_assert!(shifted.day() <= day.max(28));
            }
            Err(_) => {
                // Only representable-range failures are allowed here.
                let target = year + (month as i32 - 1 + months).div_euclid(12);
                prop_assert!(!(1..=9999).contains(&target));
            }
        }
    }
}

#[test]
fn leap_year_rule_is_exact_over_the_full_domain() {
    for year in 1..=9999 {
        let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(
            DateTime::is_leap_year(year).unwrap(),
            expected,
            "year {year}"
        );
    }
}

#[test]
fn known_leap_year_samples() {
    assert!(!DateTime::is_leap_year(1900).unwrap());
    assert!(DateTime::is_leap_year(2000).unwrap());
    assert!(!DateTime::is_leap_year(2023).unwrap());
    assert!(DateTime::is_leap_year(2024).unwrap());
}

#[test]
fn day_count_over_four_centuries_matches_the_cycle() {
    let start = DateTime::from_ymd(1601, 1, 1).unwrap();
    let end = DateTime::from_ymd(2001, 1, 1).unwrap();
    assert_eq!(end.diff_ticks(start), 146_097 * TICKS_PER_DAY);
}
