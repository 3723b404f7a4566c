//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::path::PathBuf;

use chrono::Local;

use crate::config::AppConfig;
use crate::core::flight::{FlightEvent, Timestamp};
use crate::ui::timeline_widget::{display_order, TimelineWidgetState};

/// Where "now" comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clock {
    /// The system clock, read on every tick.
    System,
    /// A frozen instant (`--now`).
    Fixed(Timestamp),
}

impl Clock {
    pub fn now(&self) -> Timestamp {
        match self {
            Clock::System => Local::now().fixed_offset(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub flights: Vec<FlightEvent>,
    /// Indices into `flights`, in the order the timeline shows them.
    pub order: Vec<usize>,
    /// Widget-level state (selection, scroll).
    pub timeline_state: TimelineWidgetState,
    pub config: AppConfig,
    /// Where config changes are written.  `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    pub clock: Clock,
    /// The instant every progress value on screen is computed against.
    pub now: Timestamp,
    /// Shown in the title bar: the flight file name or `"demo"`.
    pub source: String,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(flights: Vec<FlightEvent>, config: AppConfig, clock: Clock, source: String) -> Self {
        let order = display_order(&flights);
        Self {
            flights,
            order,
            timeline_state: TimelineWidgetState::default(),
            config,
            config_path: None,
            now: clock.now(),
            clock,
            source,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-read the clock.  Called on every tick.
    pub fn refresh_now(&mut self) {
        self.now = self.clock.now();
    }

    /// The flight under the cursor, if the board isn't empty.
    pub fn selected_flight(&self) -> Option<&FlightEvent> {
        self.order
            .get(self.timeline_state.selected)
            .map(|&i| &self.flights[i])
    }
}
