//! Input handling: maps key events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    tracing::debug!(?action, "key action");
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::MoveUp => state.timeline_state.select_prev(),
        Action::MoveDown => state.timeline_state.select_next(state.order.len()),
        Action::JumpToNow => jump_to_now(state),
        Action::ToggleMap => {
            state.config.show_map = !state.config.show_map;
            persist(state);
        }
        Action::ToggleClockFormat => {
            state.config.clock_format = state.config.clock_format.toggled();
            persist(state);
        }
    }
}

/// Select the first flight whose local time hasn't passed yet, or the last
/// flight if they all have.
fn jump_to_now(state: &mut AppState) {
    if state.order.is_empty() {
        return;
    }
    let now = state.now;
    let position = state
        .order
        .iter()
        .position(|&i| state.flights[i].local_time >= now)
        .unwrap_or(state.order.len() - 1);
    state.timeline_state.selected = position;
}

fn persist(state: &mut AppState) {
    let Some(path) = state.config_path.as_deref() else {
        return;
    };
    if let Err(e) = state.config.save_to(path) {
        tracing::warn!("{e:#}");
        state.status_message = Some(format!("Config not saved: {e}"));
    }
}
