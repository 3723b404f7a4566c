//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the selected-flight card, borders included.
pub const CARD_HEIGHT: u16 = 7;

/// Primary screen layout: timeline on the left, the selected card and the
/// map on the right, and a bottom status bar.
pub struct AppLayout {
    pub timeline_area: Rect,
    pub card_area: Rect,
    /// Zero-sized when the map is hidden.
    pub map_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, show_map: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[0]);

        let (card_area, map_area) = if show_map {
            let detail = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
                .split(columns[1]);
            (detail[0], detail[1])
        } else {
            let right = columns[1];
            let card = Rect {
                height: right.height.min(CARD_HEIGHT),
                ..right
            };
            (card, Rect { height: 0, ..right })
        };

        Self {
            timeline_area: columns[0],
            card_area,
            map_area,
            status_area: rows[1],
        }
    }
}
