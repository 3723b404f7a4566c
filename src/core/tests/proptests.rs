use crate::core::flight::Direction;
use crate::core::progress::{clamp_fraction, compute_progress};
use crate::core::tests::utils::{arb_flight, arb_same_day_time, at};
use crate::core::timeline::Timeline;
use chrono::Duration;
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn test_progress_boundaries(flight in arb_flight(), before in 1..600i64, after in 1..600i64) {
        let (start, end) = match flight.direction {
            Direction::Departure => (flight.local_time, flight.other_end_time),
            Direction::Arrival => (flight.other_end_time, flight.local_time),
        };

        prop_assert_eq!(compute_progress(&flight, &(start - Duration::minutes(before))), 0.0);
        prop_assert_eq!(compute_progress(&flight, &(end + Duration::minutes(after))), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic(flight in arb_flight(), a in 0..2000i64, b in 0..2000i64) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let base = flight.departure_time() - Duration::minutes(60);

        let p_early = compute_progress(&flight, &(base + Duration::minutes(early)));
        let p_late = compute_progress(&flight, &(base + Duration::minutes(late)));

        prop_assert!(
            p_early <= p_late,
            "\nProgress went backwards for {}:\n{} at +{}m vs {} at +{}m",
            flight.flight_name, p_early, early, p_late, late
        );
    }

    #[test]
    fn test_consistent_flight_stays_in_range(flight in arb_flight(), offset in -600..2000i64) {
        let now = flight.departure_time() + Duration::minutes(offset);
        let fraction = compute_progress(&flight, &now);
        prop_assert!((0.0..=1.0).contains(&fraction), "fraction {}", fraction);
        prop_assert_eq!(clamp_fraction(fraction), fraction);
    }

    #[test]
    fn test_clamp_always_in_unit_range(value in proptest::num::f64::ANY) {
        let clamped = clamp_fraction(value);
        prop_assert!((0.0..=1.0).contains(&clamped));
    }

    #[test]
    fn test_buckets_partition_events(times in prop::collection::vec(arb_same_day_time(), 1..40)) {
        let events: Vec<(usize, _)> = times.into_iter().enumerate().collect();
        let timeline = Timeline::new(&events, |e| e.1);

        let mut seen: Vec<usize> = timeline
            .buckets()
            .iter()
            .flat_map(|bucket| bucket.events.iter().map(|e| e.0))
            .collect();
        seen.sort_unstable();

        let expected: Vec<usize> = (0..events.len()).collect();
        prop_assert_eq!(seen, expected);
        prop_assert!(timeline.latest_hour() > timeline.earliest_hour());
    }

    #[test]
    fn test_bucket_preserves_input_order(times in prop::collection::vec(arb_same_day_time(), 1..40)) {
        let events: Vec<(usize, _)> = times.into_iter().enumerate().collect();
        let timeline = Timeline::new(&events, |e| e.1);

        for bucket in timeline.buckets() {
            let ids: Vec<usize> = bucket.events.iter().map(|e| e.0).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_empty_timeline_has_no_events(hour in 0..30u32) {
        let events: Vec<(usize, chrono::DateTime<chrono::FixedOffset>)> = Vec::new();
        let timeline = Timeline::new(&events, |e| e.1);
        prop_assert_eq!(timeline.earliest_hour(), 0);
        prop_assert_eq!(timeline.latest_hour(), 24);
        prop_assert!(timeline.events_in_hour(hour).is_empty());
    }
}

#[test]
fn test_single_hour_range_is_at_least_one() {
    let events = vec![at(13, 1), at(13, 59)];
    let timeline = Timeline::new(&events, |t| *t);
    assert!(timeline.latest_hour() - timeline.earliest_hour() >= 1);
}
