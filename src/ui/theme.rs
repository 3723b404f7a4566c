//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::flight::FlightStatus;

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── flights ────────────────────────────────────────────────
    pub fn status_color(status: FlightStatus) -> Color {
        match status {
            FlightStatus::OnTime | FlightStatus::Landed => Color::Green,
            FlightStatus::Boarding | FlightStatus::Departed => Color::Cyan,
            FlightStatus::Delayed => Color::Yellow,
            FlightStatus::Cancelled => Color::Red,
        }
    }

    pub fn status_style(status: FlightStatus) -> Style {
        Style::default().fg(Self::status_color(status))
    }

    pub fn hour_label_style() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── map ────────────────────────────────────────────────────
    pub fn map_land_color() -> Color {
        Color::DarkGray
    }

    pub fn map_route_color() -> Color {
        Color::Blue
    }

    /// The not-yet-flown part of the route.
    pub fn map_track_color() -> Color {
        Color::Gray
    }

    pub fn map_airport_color() -> Color {
        Color::White
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
