//! Custom Ratatui widget that renders the flight board as hour-labelled
//! groups of compact card rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{
    flight::{FlightEvent, Timestamp},
    progress::{clamp_fraction, compute_progress},
    timeline::{hour_label, ClockFormat, Timeline},
};

use super::theme::Theme;

// ───────────────────────────────────────── state ─────────────

/// Persistent state for the timeline widget.
#[derive(Debug, Default)]
pub struct TimelineWidgetState {
    /// Position of the highlighted flight in display order.  Hour headers
    /// are not selectable.
    pub selected: usize,
    /// Vertical scroll offset (first visible row).
    pub offset: usize,
}

impl TimelineWidgetState {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ensure `row` is visible within a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, row: usize, height: usize) {
        if height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row - height + 1;
        }
    }
}

// ───────────────────────────────────────── row model ─────────

/// One rendered row in the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineRow {
    Hour { label: String },
    Card {
        /// Index into the flight slice.
        flight: usize,
        /// Position in display order (what `selected` counts).
        position: usize,
    },
}

/// Flight indices in the order the board shows them: by hour bucket, and
/// by input order within an hour.
pub fn display_order(flights: &[FlightEvent]) -> Vec<usize> {
    build_rows(flights, ClockFormat::default())
        .into_iter()
        .filter_map(|row| match row {
            TimelineRow::Card { flight, .. } => Some(flight),
            TimelineRow::Hour { .. } => None,
        })
        .collect()
}

/// Flatten the hour buckets into header and card rows.
pub fn build_rows(flights: &[FlightEvent], format: ClockFormat) -> Vec<TimelineRow> {
    let indices: Vec<usize> = (0..flights.len()).collect();
    let timeline = Timeline::new(&indices, |&i| flights[i].local_time);

    let mut rows = Vec::new();
    let mut position = 0;
    for bucket in timeline.buckets() {
        rows.push(TimelineRow::Hour {
            label: hour_label(bucket.hour, format),
        });
        for &flight in bucket.events {
            rows.push(TimelineRow::Card { flight, position });
            position += 1;
        }
    }
    rows
}

/// Text of a compact card row: name, times, status, progress.
pub fn card_text(flight: &FlightEvent, now: &Timestamp, format: ClockFormat) -> String {
    let percent = (clamp_fraction(compute_progress(flight, now)) * 100.0).round();
    format!(
        "{}  {} → {}  {}  {percent:.0}%",
        flight.status_board_name(),
        format.short_time(&flight.departure_time()),
        format.short_time(&flight.arrival_time()),
        flight.status.label(),
    )
}

/// The whole board as plain text (used by `--print`).
pub fn plain_text(flights: &[FlightEvent], now: &Timestamp, format: ClockFormat) -> String {
    let mut out = String::new();
    for row in build_rows(flights, format) {
        match row {
            TimelineRow::Hour { label } => out.push_str(&label),
            TimelineRow::Card { flight, .. } => {
                out.push_str("  ");
                out.push_str(&card_text(&flights[flight], now, format));
            }
        }
        out.push('\n');
    }
    out
}

// ───────────────────────────────────────── widget ────────────

/// The timeline widget itself, created fresh each frame.
pub struct TimelineWidget<'a> {
    flights: &'a [FlightEvent],
    now: Timestamp,
    format: ClockFormat,
    block: Option<Block<'a>>,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(flights: &'a [FlightEvent], now: Timestamp) -> Self {
        Self {
            flights,
            now,
            format: ClockFormat::default(),
            block: None,
        }
    }

    pub fn clock_format(mut self, format: ClockFormat) -> Self {
        self.format = format;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> StatefulWidget for TimelineWidget<'a> {
    type State = TimelineWidgetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let rows = build_rows(self.flights, self.format);
        let selected_row = rows
            .iter()
            .position(|r| matches!(r, TimelineRow::Card { position, .. } if *position == state.selected));
        match selected_row {
            // Keep the hour header above the first card in view when there
            // is room for both.
            Some(1) if inner.height >= 2 => state.clamp_scroll(0, inner.height as usize),
            Some(row) => state.clamp_scroll(row, inner.height as usize),
            None => state.offset = 0,
        }

        let visible_rows = rows
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, row)) in visible_rows.enumerate() {
            let y = inner.y + i as u16;
            let is_selected = Some(row_idx) == selected_row;

            let line = match row {
                TimelineRow::Hour { label } => {
                    Line::from(Span::styled(label.clone(), Theme::hour_label_style()))
                }
                TimelineRow::Card { flight, .. } => {
                    let flight = &self.flights[*flight];
                    let style = if is_selected {
                        Theme::selected_style()
                    } else {
                        Theme::card_style()
                    };
                    Line::from(vec![
                        Span::styled("  ● ", Theme::status_style(flight.status)),
                        Span::styled(card_text(flight, &self.now, self.format), style),
                    ])
                }
            };

            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
