//! Hour bucketing for the timeline view.
//!
//! The list is drawn one hour at a time, ascending, so cards that fall in
//! the same hour sit together under a single label.  Only the hour-of-day
//! component is compared: a set of events that crosses midnight is not
//! ordered correctly (23:00 sorts after 01:00 of the next day).  Callers
//! that care should split their input per calendar day first.

use std::ops::Range;

use chrono::{NaiveTime, Timelike};

use super::flight::Timestamp;

/// Number of hour buckets in a day; the upper bound for an empty timeline.
pub const HOURS_PER_DAY: u32 = 24;

/// How hour labels are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockFormat {
    /// `"9:00 AM"`
    #[default]
    TwelveHour,
    /// `"09:00"`
    TwentyFourHour,
}

impl ClockFormat {
    pub fn toggled(self) -> Self {
        match self {
            ClockFormat::TwelveHour => ClockFormat::TwentyFourHour,
            ClockFormat::TwentyFourHour => ClockFormat::TwelveHour,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%-I:%M %p",
            ClockFormat::TwentyFourHour => "%H:%M",
        }
    }

    /// Short time string for a timestamp, in its own offset.
    pub fn short_time(self, time: &Timestamp) -> String {
        time.format(self.pattern()).to_string()
    }
}

/// All events that share one hour of day.
#[derive(Debug)]
pub struct HourBucket<'a, T> {
    pub hour: u32,
    pub events: Vec<&'a T>,
}

/// A read-only view over `events`, keyed by the timestamp `time_of` returns.
pub struct Timeline<'a, T, F> {
    events: &'a [T],
    time_of: F,
}

impl<'a, T, F> Timeline<'a, T, F>
where
    F: Fn(&T) -> Timestamp,
{
    pub fn new(events: &'a [T], time_of: F) -> Self {
        Self { events, time_of }
    }

    /// Hour of the chronologically earliest event, or 0 when empty.
    pub fn earliest_hour(&self) -> u32 {
        self.events
            .iter()
            .map(|e| (self.time_of)(e))
            .min()
            .map_or(0, |t| t.hour())
    }

    /// Hour of the chronologically latest event plus one, or 24 when empty.
    pub fn latest_hour(&self) -> u32 {
        self.events
            .iter()
            .map(|e| (self.time_of)(e))
            .max()
            .map_or(HOURS_PER_DAY, |t| t.hour() + 1)
    }

    /// The half-open range of hours to display.  Empty when the events
    /// wrap past midnight and the latest hour of day is before the earliest.
    pub fn hours(&self) -> Range<u32> {
        self.earliest_hour()..self.latest_hour()
    }

    /// Events whose hour of day equals `hour`, in input order.
    pub fn events_in_hour(&self, hour: u32) -> Vec<&'a T> {
        self.events
            .iter()
            .filter(|e| (self.time_of)(e).hour() == hour)
            .collect()
    }

    /// One bucket per displayed hour, ascending.  Empty hours are kept.
    pub fn buckets(&self) -> Vec<HourBucket<'a, T>> {
        self.hours()
            .map(|hour| HourBucket {
                hour,
                events: self.events_in_hour(hour),
            })
            .collect()
    }
}

/// Label for the start of `hour`, or `"Unknown"` if it isn't a valid hour.
pub fn hour_label(hour: u32, format: ClockFormat) -> String {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time.format(format.pattern()).to_string(),
        None => "Unknown".to_string(),
    }
}
