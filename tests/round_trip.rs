//! Round-trip and sign-convention properties of the resolver.

use calendarium::definitions::bulgar::BULGAR;
use calendarium::definitions::gregorian::{year_ad, GREGORIAN};
use calendarium::{resolve, to_day_count, CalendarDefinition};

fn assert_round_trip(def: &CalendarDefinition, day_count: i64) {
    let periods = resolve(day_count, def).expect("resolution should succeed");
    assert_eq!(
        periods.len(),
        def.registry().len(),
        "instance count for day {day_count} of '{}'",
        def.name()
    );
    assert_eq!(
        to_day_count(&periods).expect("inverse should succeed"),
        day_count,
        "round trip for day {day_count} of '{}'",
        def.name()
    );
    // The finest instance starts on the queried day, so its absolute
    // counter equals the day count itself.
    assert_eq!(periods[0].absolute(), day_count);
    assert_eq!(periods[0].start_day(), day_count);
}

#[test]
fn round_trip_dense_window_both_calendars() {
    for d in -1500..=1500 {
        assert_round_trip(&GREGORIAN, d);
        assert_round_trip(&BULGAR, d);
    }
}

#[test]
fn round_trip_wide_strided_span() {
    // The Bulgarian epoch lies ~2.7 million days before 1970; cover the
    // whole civil span on both sides with a prime stride.
    let mut d: i64 = -3_000_000;
    while d <= 3_000_000 {
        assert_round_trip(&GREGORIAN, d);
        assert_round_trip(&BULGAR, d);
        d += 9973;
    }
}

#[test]
fn round_trip_cycle_boundaries() {
    for boundary in [146_097i64, 292_194, -146_097] {
        for d in boundary - 2..=boundary + 2 {
            assert_round_trip(&GREGORIAN, d);
        }
    }
    for boundary in [1461i64, 4383, 21_915, -21_915] {
        for d in boundary - 2..=boundary + 2 {
            assert_round_trip(&BULGAR, d);
        }
    }
}

#[test]
fn negative_day_counts_use_floor_division() {
    // Day -1 of the Gregorian definition is 31 December 1999: the root
    // quotient goes to -1 and the remainder stays non-negative, so the
    // scan lands on the last day of the previous cycle.
    let periods = resolve(-1, &GREGORIAN).unwrap();
    assert_eq!(periods[4].relative(), -1);
    assert_eq!(periods[4].start_day(), -146_097);
    assert_eq!(year_ad(&periods), 1999);
    assert_eq!(periods[1].display_relative(), 12);
    assert_eq!(periods[0].display_relative(), 31);

    // Day -1 of the Bulgarian definition is the Бехти day closing the
    // previous sixty-year cycle.
    let periods = resolve(-1, &BULGAR).unwrap();
    assert_eq!(periods[6].relative(), -1);
    assert_eq!(periods[3].name("bg"), "Ден Бехти");
}

#[test]
fn negative_day_counts_round_trip() {
    for d in [-1i64, -365, -1461, -146_097, -2_729_466] {
        assert_round_trip(&GREGORIAN, d);
        assert_round_trip(&BULGAR, d);
    }
}

#[test]
fn absolute_equals_relative_at_the_root() {
    // There is no coarser type to reset the root counter, so its relative
    // and absolute counts coincide.
    for d in [-200_000i64, -1, 0, 1, 200_000] {
        let periods = resolve(d, &GREGORIAN).unwrap();
        assert_eq!(periods[4].relative(), periods[4].absolute(), "day {d}");
        let periods = resolve(d, &BULGAR).unwrap();
        assert_eq!(periods[6].relative(), periods[6].absolute(), "day {d}");
    }
}
