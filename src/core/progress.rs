//! Flight progress: how far along its trip a flight is at a given instant.
//!
//! The fraction is direction aware: for a departure the clock starts at
//! the local time, for an arrival it starts at the far end.  Before the
//! start the flight is at 0.0, after the end at 1.0.  In between the
//! elapsed minutes are divided by the *scheduled* flight time, not by the
//! gap between the two timestamps, so the in-flight value may leave
//! [0, 1] when the schedule disagrees with itself.  Renderers run the
//! value through [`clamp_fraction`] before drawing.

use thiserror::Error;

use super::flight::{Direction, FlightEvent, Timestamp};

/// Elapsed-progress ratio, intended to lie in [0, 1].
pub type Fraction = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("flight time must be positive, got {0} minutes")]
    InvalidDuration(i64),
}

/// Absolute number of whole minutes between two instants.
///
/// Works on absolute instants, so daylight-saving changes and date
/// boundaries don't skew the result.  Returns 0 if the difference can't
/// be represented.
pub fn minutes_between(start: &Timestamp, end: &Timestamp) -> i64 {
    end.signed_duration_since(*start)
        .num_minutes()
        .checked_abs()
        .unwrap_or(0)
}

/// Checked progress computation.
///
/// The boundary branches never look at `flight_time_minutes`; only the
/// in-flight branch divides by it and rejects a non-positive value.
pub fn try_compute_progress(event: &FlightEvent, now: &Timestamp) -> Result<Fraction, ProgressError> {
    let (start, end) = match event.direction {
        Direction::Departure => (&event.local_time, &event.other_end_time),
        Direction::Arrival => (&event.other_end_time, &event.local_time),
    };

    if now < start {
        return Ok(0.0);
    }
    if now > end {
        return Ok(1.0);
    }

    if event.flight_time_minutes <= 0 {
        return Err(ProgressError::InvalidDuration(event.flight_time_minutes));
    }
    let elapsed = minutes_between(start, now);
    Ok(elapsed as f64 / event.flight_time_minutes as f64)
}

/// Progress for display.  Bad durations are logged and shown as 0.0.
pub fn compute_progress(event: &FlightEvent, now: &Timestamp) -> Fraction {
    match try_compute_progress(event, now) {
        Ok(fraction) => fraction,
        Err(err) => {
            tracing::warn!(flight = %event.flight_name, "{err}");
            0.0
        }
    }
}

/// Clamp a fraction into [0, 1]; NaN becomes 0.
pub fn clamp_fraction(fraction: Fraction) -> Fraction {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tests::utils::{arrival, at, departure};

    #[test]
    fn departure_halfway() {
        let flight = departure(at(10, 0), at(12, 0), 120);
        assert!((compute_progress(&flight, &at(11, 0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn departure_before_leaving_is_zero() {
        let flight = departure(at(10, 0), at(12, 0), 120);
        assert_eq!(compute_progress(&flight, &at(9, 0)), 0.0);
    }

    #[test]
    fn departure_after_landing_is_one() {
        let flight = departure(at(10, 0), at(12, 0), 120);
        assert_eq!(compute_progress(&flight, &at(13, 0)), 1.0);
    }

    #[test]
    fn arrival_counts_from_far_end() {
        let flight = arrival(at(10, 30), at(8, 0), 150);
        assert_eq!(minutes_between(&at(8, 0), &at(9, 15)), 75);
        assert!((compute_progress(&flight, &at(9, 15)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn arrival_boundaries() {
        let flight = arrival(at(10, 30), at(8, 0), 150);
        assert_eq!(compute_progress(&flight, &at(7, 59)), 0.0);
        assert_eq!(compute_progress(&flight, &at(10, 31)), 1.0);
    }

    #[test]
    fn exact_endpoints_are_in_flight() {
        let flight = departure(at(10, 0), at(12, 0), 120);
        assert_eq!(compute_progress(&flight, &at(10, 0)), 0.0);
        assert_eq!(compute_progress(&flight, &at(12, 0)), 1.0);
    }

    #[test]
    fn zero_duration_in_flight_is_rejected() {
        let flight = departure(at(10, 0), at(12, 0), 0);
        assert_eq!(
            try_compute_progress(&flight, &at(11, 0)),
            Err(ProgressError::InvalidDuration(0))
        );
        assert_eq!(compute_progress(&flight, &at(11, 0)), 0.0);
    }

    #[test]
    fn zero_duration_boundaries_still_resolve() {
        let flight = departure(at(10, 0), at(12, 0), -5);
        assert_eq!(try_compute_progress(&flight, &at(9, 0)), Ok(0.0));
        assert_eq!(try_compute_progress(&flight, &at(13, 0)), Ok(1.0));
    }

    #[test]
    fn underestimated_duration_overshoots_until_landing() {
        // Schedule says 60 minutes but the timestamps are two hours apart.
        let flight = departure(at(10, 0), at(12, 0), 60);
        let fraction = compute_progress(&flight, &at(11, 30));
        assert!((fraction - 1.5).abs() < 1e-9);
        assert_eq!(clamp_fraction(fraction), 1.0);
    }

    #[test]
    fn minutes_between_is_symmetric_and_truncates() {
        let a = at(10, 0);
        let b = at(11, 0) + chrono::Duration::seconds(59);
        assert_eq!(minutes_between(&a, &b), 60);
        assert_eq!(minutes_between(&b, &a), 60);
    }

    #[test]
    fn minutes_between_ignores_offsets() {
        use chrono::{FixedOffset, TimeZone};
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let west = FixedOffset::west_opt(4 * 3600).unwrap();
        let a = east.with_ymd_and_hms(2024, 5, 1, 16, 0, 0).unwrap();
        let b = west.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap();
        assert_eq!(minutes_between(&a, &b), 60);
    }

    #[test]
    fn clamp_handles_nan_and_range() {
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
        assert_eq!(clamp_fraction(-0.3), 0.0);
        assert_eq!(clamp_fraction(0.25), 0.25);
        assert_eq!(clamp_fraction(f64::INFINITY), 1.0);
    }
}
