//! The detail card for the selected flight: headline, both ends of the
//! trip, and a progress bar with an airplane riding along it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::{
    flight::{Direction, FlightEvent, Timestamp},
    geo::haversine_distance_km,
    progress::{clamp_fraction, compute_progress, minutes_between},
    timeline::ClockFormat,
};

use super::theme::Theme;

const PLANE: &str = "✈";

/// Width reserved on each side of the bar for times and airport names.
const SIDE_WIDTH: u16 = 14;

// ───────────────────────────────────────── progress bar ──────

/// A one-row track with the airplane placed at `fraction` of the width.
pub struct ProgressBar {
    fraction: f64,
    color: Color,
}

impl ProgressBar {
    pub fn new(fraction: f64, color: Color) -> Self {
        Self {
            fraction: clamp_fraction(fraction),
            color,
        }
    }

    /// Column (relative to the bar) where the airplane is drawn.
    pub fn plane_column(&self, width: u16) -> u16 {
        let span = width.saturating_sub(1) as f64;
        (span * self.fraction).round() as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let plane_x = self.plane_column(area.width);
        let y = area.y;
        let flown = Style::default().fg(self.color);
        for dx in 0..area.width {
            let (symbol, style) = match dx.cmp(&plane_x) {
                std::cmp::Ordering::Less => ("━", flown),
                std::cmp::Ordering::Equal => (PLANE, flown),
                std::cmp::Ordering::Greater => ("─", Theme::dim_style()),
            };
            buf.set_string(area.x + dx, y, symbol, style);
        }
    }
}

// ───────────────────────────────────────── card ──────────────

/// The card widget, created fresh each frame.
pub struct FlightCard<'a> {
    flight: &'a FlightEvent,
    now: Timestamp,
    format: ClockFormat,
}

impl<'a> FlightCard<'a> {
    pub fn new(flight: &'a FlightEvent, now: Timestamp, format: ClockFormat) -> Self {
        Self { flight, now, format }
    }

    fn elapsed_line(&self, fraction: f64) -> String {
        let flight = self.flight;
        let elapsed = if fraction <= 0.0 {
            0
        } else if fraction >= 1.0 {
            flight.flight_time_minutes.max(0)
        } else {
            minutes_between(&flight.departure_time(), &self.now)
        };
        let distance = haversine_distance_km(flight.starting_location(), flight.ending_location());
        format!("{elapsed} of {} min · {distance:.0} km", flight.flight_time_minutes)
    }
}

impl<'a> Widget for FlightCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let flight = self.flight;
        let color = Theme::status_color(flight.status);
        let block = Block::default()
            .title(format!(" {} ", flight.status_board_name()))
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 {
            return;
        }

        let fraction = clamp_fraction(compute_progress(flight, &self.now));

        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1), // status
                Constraint::Length(1), // airports
                Constraint::Length(1), // times + bar
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(flight.status.label(), Style::default().fg(color)),
            Span::styled(format!("  {}", self.elapsed_line(fraction)), Theme::dim_style()),
        ]))
        .render(rows[0], buf);

        let columns = |row: Rect| {
            Layout::default()
                .direction(LayoutDirection::Horizontal)
                .constraints([
                    Constraint::Length(SIDE_WIDTH),
                    Constraint::Min(1),
                    Constraint::Length(SIDE_WIDTH),
                ])
                .split(row)
        };

        // The far-end airport sits above whichever end of the trip it is.
        let airports = columns(rows[1]);
        let (left_airport, right_airport) = match flight.direction {
            Direction::Arrival => (flight.other_airport.as_str(), ""),
            Direction::Departure => ("", flight.other_airport.as_str()),
        };
        Paragraph::new(left_airport).render(airports[0], buf);
        Paragraph::new(Line::from(right_airport).right_aligned()).render(airports[2], buf);

        let times = columns(rows[2]);
        Paragraph::new(self.format.short_time(&flight.departure_time())).render(times[0], buf);
        ProgressBar::new(fraction, color).render(times[1], buf);
        Paragraph::new(Line::from(self.format.short_time(&flight.arrival_time())).right_aligned())
            .render(times[2], buf);
    }
}
