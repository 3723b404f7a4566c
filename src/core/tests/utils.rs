use crate::core::flight::{Direction, FlightEvent, FlightStatus, Timestamp};
use crate::core::geo::Coordinate;
use chrono::{Duration, FixedOffset, TimeZone};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn offset() -> FixedOffset {
    FixedOffset::west_opt(4 * 3600).unwrap()
}

/// 2024-05-`day` at `hour:minute`, UTC-4.
pub fn at_on(day: u32, hour: u32, minute: u32) -> Timestamp {
    offset()
        .with_ymd_and_hms(2024, 5, day, hour, minute, 0)
        .unwrap()
}

pub fn at(hour: u32, minute: u32) -> Timestamp {
    at_on(1, hour, minute)
}

fn flight(
    direction: Direction,
    local_time: Timestamp,
    other_end_time: Timestamp,
    flight_time_minutes: i64,
) -> FlightEvent {
    FlightEvent {
        id: 1,
        flight_name: "US 1234".to_string(),
        other_airport: "Las Vegas".to_string(),
        direction,
        local_time,
        other_end_time,
        flight_time_minutes,
        status: FlightStatus::OnTime,
        local_location: Coordinate::new(35.655, -83.4411),
        other_location: Coordinate::new(36.084, -115.1537),
    }
}

pub fn departure(local_time: Timestamp, other_end_time: Timestamp, minutes: i64) -> FlightEvent {
    flight(Direction::Departure, local_time, other_end_time, minutes)
}

pub fn arrival(local_time: Timestamp, other_end_time: Timestamp, minutes: i64) -> FlightEvent {
    flight(Direction::Arrival, local_time, other_end_time, minutes)
}

pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Departure), Just(Direction::Arrival)]
}

/// A well-formed flight: departure before arrival, duration matching the gap.
pub fn arb_flight() -> impl Strategy<Value = FlightEvent> {
    (arb_direction(), 0..1440i64, 1..900i64).prop_map(|(direction, start, minutes)| {
        let departs = at(0, 0) + Duration::minutes(start);
        let lands = departs + Duration::minutes(minutes);
        match direction {
            Direction::Departure => departure(departs, lands, minutes),
            Direction::Arrival => arrival(lands, departs, minutes),
        }
    })
}

/// A timestamp within a single day, so hour-of-day ordering holds.
pub fn arb_same_day_time() -> impl Strategy<Value = Timestamp> {
    (0..24u32, 0..60u32).prop_map(|(hour, minute)| at(hour, minute))
}
