// Property-based tests for the week layout engine

use proptest::prelude::*;
use week_planner::models::day::{Day, DAY_ORDER};
use week_planner::models::event::Event;
use week_planner::models::user::User;
use week_planner::services::layout::{compute_geometry, segment_week, select_variant, Variant};

fn event(start: (usize, u32), end: (usize, u32)) -> Event {
    Event::builder()
        .starts(DAY_ORDER[start.0], start.1)
        .ends(DAY_ORDER[end.0], end.1)
        .host(User::new("Lucia"))
        .build()
        .unwrap()
}

fn hhmm() -> impl Strategy<Value = u32> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| hour * 100 + minute)
}

proptest! {
    /// Property: a same-day event is exactly one segment at its hour rows
    #[test]
    fn prop_same_day_single_segment(
        day in 0usize..7,
        start in hhmm(),
        end in hhmm(),
        width in 0u32..2000,
        height in 0u32..2000,
    ) {
        let geometry = compute_geometry(width, height);
        let segments = segment_week(&event((day, start), (day, end)), &geometry).unwrap();

        prop_assert_eq!(segments.len(), 1);
        prop_assert_eq!(segments[0].day, DAY_ORDER[day]);
        prop_assert_eq!(segments[0].vertical_start, (start / 100) * geometry.row_height);
        prop_assert_eq!(segments[0].vertical_end, (end / 100) * geometry.row_height);
    }

    /// Property: an event over N consecutive days gives N segments, first to
    /// the bottom edge, interior days full height, last from the top
    #[test]
    fn prop_multi_day_segments(
        start_day in 0usize..6,
        span in 1usize..7,
        start in hhmm(),
        end in hhmm(),
        width in 0u32..2000,
        height in 0u32..2000,
    ) {
        let end_day = (start_day + span).min(6);
        prop_assume!(end_day > start_day);

        let geometry = compute_geometry(width, height);
        let segments = segment_week(&event((start_day, start), (end_day, end)), &geometry).unwrap();

        prop_assert_eq!(segments.len(), end_day - start_day + 1);

        let first = segments.first().unwrap();
        prop_assert_eq!(first.vertical_start, (start / 100) * geometry.row_height);
        prop_assert_eq!(first.vertical_end, height);

        let last = segments.last().unwrap();
        prop_assert_eq!(last.vertical_start, 0);
        prop_assert_eq!(last.vertical_end, (end / 100) * geometry.row_height);

        for interior in &segments[1..segments.len() - 1] {
            prop_assert_eq!((interior.vertical_start, interior.vertical_end), (0, height));
        }

        let days: Vec<Day> = segments.iter().map(|s| s.day).collect();
        prop_assert_eq!(days, DAY_ORDER[start_day..=end_day].to_vec());
    }

    /// Property: an end day earlier in the week than the start day is rejected
    #[test]
    fn prop_backwards_span_rejected(
        end_day in 0usize..6,
        gap in 1usize..7,
        start in hhmm(),
        end in hhmm(),
    ) {
        let start_day = (end_day + gap).min(6);
        prop_assume!(start_day > end_day);

        let result = segment_week(&event((start_day, start), (end_day, end)), &compute_geometry(700, 690));
        prop_assert!(result.is_err());
    }

    /// Property: layout is deterministic
    #[test]
    fn prop_segment_is_idempotent(
        start_day in 0usize..7,
        end_day in 0usize..7,
        start in hhmm(),
        end in hhmm(),
    ) {
        let geometry = compute_geometry(700, 690);
        let event = event((start_day, start), (end_day, end));
        prop_assert_eq!(segment_week(&event, &geometry), segment_week(&event, &geometry));
    }

    /// Property: without host view every event is drawn as an attendee
    #[test]
    fn prop_host_view_off_is_always_attendee(name in "[A-Za-z]{1,12}") {
        let event = Event::builder()
            .starts(Day::Monday, 900)
            .ends(Day::Monday, 1000)
            .host(User::new(name.clone()))
            .build()
            .unwrap();
        prop_assert_eq!(select_variant(&event, &User::new(name), false), Variant::Attendee);
    }
}
