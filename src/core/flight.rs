//! Flight data model: the read-only records every other layer consumes.
//!
//! A [`FlightEvent`] is always seen from one airport (the "local" one).
//! Whether that airport is the origin or the destination is captured by
//! [`Direction`], and the accessors below resolve departure/arrival
//! fields from it so renderers never branch on direction themselves.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

/// Point in time, carrying the wall-clock offset of the airport it belongs to.
pub type Timestamp = DateTime<FixedOffset>;

// ───────────────────────────────────────── enums ─────────────

/// Which end of the flight the local airport is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Departure,
    Arrival,
}

/// Board status.  Display payload only; progress never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Cancelled,
    Boarding,
    Departed,
    Landed,
}

impl FlightStatus {
    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Landed => "Landed",
        }
    }
}

// ───────────────────────────────────────── event ─────────────

/// One row of the flight board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEvent {
    pub id: u32,
    /// Airline code + number, e.g. `"US 1234"`.
    pub flight_name: String,
    /// Name of the far-end airport.
    pub other_airport: String,
    pub direction: Direction,
    /// Time at the local airport end of the flight.
    pub local_time: Timestamp,
    /// Time at the far-end airport.
    pub other_end_time: Timestamp,
    /// Scheduled duration.  Trusted as-is as the progress denominator.
    pub flight_time_minutes: i64,
    pub status: FlightStatus,
    pub local_location: Coordinate,
    pub other_location: Coordinate,
}

impl FlightEvent {
    pub fn departure_time(&self) -> Timestamp {
        match self.direction {
            Direction::Departure => self.local_time,
            Direction::Arrival => self.other_end_time,
        }
    }

    pub fn arrival_time(&self) -> Timestamp {
        match self.direction {
            Direction::Departure => self.other_end_time,
            Direction::Arrival => self.local_time,
        }
    }

    pub fn starting_location(&self) -> Coordinate {
        match self.direction {
            Direction::Departure => self.local_location,
            Direction::Arrival => self.other_location,
        }
    }

    pub fn ending_location(&self) -> Coordinate {
        match self.direction {
            Direction::Departure => self.other_location,
            Direction::Arrival => self.local_location,
        }
    }

    /// Headline shown on the card, e.g. `"US 1234 to Las Vegas"`.
    pub fn status_board_name(&self) -> String {
        let preposition = match self.direction {
            Direction::Departure => "to",
            Direction::Arrival => "from",
        };
        format!("{} {preposition} {}", self.flight_name, self.other_airport)
    }
}

// ───────────────────────────────────────── loading ───────────

/// Read a JSON array of flights from disk.
pub fn load_flights(path: &Path) -> anyhow::Result<Vec<FlightEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read flights: {}", path.display()))?;
    let flights: Vec<FlightEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse flights JSON: {}", path.display()))?;
    tracing::debug!(count = flights.len(), path = %path.display(), "loaded flights");
    Ok(flights)
}
