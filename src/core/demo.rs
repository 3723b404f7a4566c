//! Built-in demo schedule, used when no flight file is given.
//!
//! The schedule is fixed: the same `date` and `offset` always produce the
//! same flights, spread across the day at a single home airport.

use chrono::{Duration, FixedOffset, NaiveDate};

use super::flight::{Direction, FlightEvent, FlightStatus};
use super::geo::Coordinate;

/// Home airport for the demo board.
pub const HOME_LOCATION: Coordinate = Coordinate {
    latitude: 35.655,
    longitude: -83.4411,
};

struct Destination {
    name: &'static str,
    location: Coordinate,
    minutes: i64,
}

const DESTINATIONS: &[Destination] = &[
    Destination { name: "Las Vegas", location: Coordinate { latitude: 36.084, longitude: -115.1537 }, minutes: 265 },
    Destination { name: "Atlanta", location: Coordinate { latitude: 33.6407, longitude: -84.4277 }, minutes: 65 },
    Destination { name: "Chicago", location: Coordinate { latitude: 41.9742, longitude: -87.9073 }, minutes: 110 },
    Destination { name: "New York", location: Coordinate { latitude: 40.6413, longitude: -73.7781 }, minutes: 135 },
    Destination { name: "Denver", location: Coordinate { latitude: 39.8561, longitude: -104.6737 }, minutes: 200 },
    Destination { name: "Miami", location: Coordinate { latitude: 25.7959, longitude: -80.2870 }, minutes: 120 },
    Destination { name: "Dallas", location: Coordinate { latitude: 32.8998, longitude: -97.0403 }, minutes: 150 },
    Destination { name: "Boston", location: Coordinate { latitude: 42.3656, longitude: -71.0096 }, minutes: 140 },
    Destination { name: "Seattle", location: Coordinate { latitude: 47.4502, longitude: -122.3088 }, minutes: 330 },
    Destination { name: "London", location: Coordinate { latitude: 51.4700, longitude: -0.4543 }, minutes: 525 },
];

const AIRLINES: &[&str] = &["US", "SA", "YU", "AA", "DL"];

const FLIGHT_COUNT: u32 = 30;

/// Minutes a delayed flight slips from its slot.
const DELAY_MINUTES: i64 = 25;

fn status_for(index: u32) -> FlightStatus {
    match index % 11 {
        3 | 8 => FlightStatus::Delayed,
        6 => FlightStatus::Cancelled,
        _ => FlightStatus::OnTime,
    }
}

/// Generate the demo board for `date`, with all times in `offset`.
pub fn generate_test_flights(date: NaiveDate, offset: FixedOffset) -> Vec<FlightEvent> {
    (0..FLIGHT_COUNT)
        .filter_map(|i| {
            let destination = &DESTINATIONS[i as usize % DESTINATIONS.len()];
            let airline = AIRLINES[i as usize % AIRLINES.len()];
            let hour = 5 + (i * 7) % 18;
            let minute = (i * 13) % 60;
            let direction = if i % 2 == 0 {
                Direction::Departure
            } else {
                Direction::Arrival
            };
            let status = status_for(i);

            let slot = date
                .and_hms_opt(hour, minute, 0)?
                .and_local_timezone(offset)
                .single()?;
            let local_time = match status {
                FlightStatus::Delayed => slot + Duration::minutes(DELAY_MINUTES),
                _ => slot,
            };
            let flight_time = Duration::minutes(destination.minutes);
            let other_end_time = match direction {
                Direction::Departure => local_time + flight_time,
                Direction::Arrival => local_time - flight_time,
            };

            Some(FlightEvent {
                id: i + 1,
                flight_name: format!("{airline} {}", 1000 + i * 37),
                other_airport: destination.name.to_string(),
                direction,
                local_time,
                other_end_time,
                flight_time_minutes: destination.minutes,
                status,
                local_location: HOME_LOCATION,
                other_location: destination.location,
            })
        })
        .collect()
}
