//! A terminal flight board.
//!
//! Run the binary to open the interactive board: flights grouped by hour,
//! the selected flight's card, and its route on a map.
//! Run with `--print` to write the grouped timeline to stdout instead.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{AppState, Clock},
};
use crate::config::AppConfig;
use crate::core::{
    demo,
    flight::{self, Timestamp},
    progress::compute_progress,
    timeline::ClockFormat,
};
use crate::ui::{
    card::FlightCard,
    layout::AppLayout,
    map::FlightMap,
    theme::Theme,
    timeline_widget::{self, TimelineWidget},
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Flight board with in-flight progress")]
struct Cli {
    /// JSON file with the flights to show (defaults to a demo board).
    #[arg(long, value_name = "FILE")]
    flights: Option<PathBuf>,

    /// Freeze the clock at this RFC 3339 instant, e.g. `2024-05-01T11:00:00-04:00`.
    #[arg(long, value_name = "TIME")]
    now: Option<Timestamp>,

    /// Day to generate the demo board for (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Print the grouped timeline to stdout and exit.
    #[arg(long)]
    print: bool,

    /// Use 24-hour times for this run.
    #[arg(long = "twenty-four-hour")]
    twenty_four_hour: bool,
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area(), state.config.show_map);
    let format = state.config.clock_format;

    let timeline_block = Block::default()
        .title(format!(" {} · {} ", state.source, format.short_time(&state.now)))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    let timeline = TimelineWidget::new(&state.flights, state.now)
        .clock_format(format)
        .block(timeline_block);
    frame.render_stateful_widget(timeline, layout.timeline_area, &mut state.timeline_state);

    match state.selected_flight() {
        Some(flight) => {
            frame.render_widget(FlightCard::new(flight, state.now, format), layout.card_area);
            if state.config.show_map {
                let map = FlightMap::new(
                    flight.starting_location(),
                    flight.ending_location(),
                    compute_progress(flight, &state.now),
                )
                .color(Theme::status_color(flight.status))
                .block(
                    Block::default()
                        .title(" Route ")
                        .title_style(Theme::title_style())
                        .borders(Borders::ALL)
                        .border_style(Theme::border_style()),
                );
                frame.render_widget(map, layout.map_area);
            }
        }
        None => {
            let empty = Paragraph::new("No flights")
                .block(Block::default().borders(Borders::ALL).border_style(Theme::border_style()));
            frame.render_widget(empty, layout.card_area);
        }
    }

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);
}

// ───────────────────────────────────────── event loop ───────

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(state.config.refresh_ms));

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {}
        }
        state.refresh_now();

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = config::config_path();
    let mut config = AppConfig::load_from(&config_path);
    if cli.twenty_four_hour {
        config.clock_format = ClockFormat::TwentyFourHour;
    }

    let clock = cli.now.map_or(Clock::System, Clock::Fixed);
    let (flights, source) = match &cli.flights {
        Some(path) => (flight::load_flights(path)?, path.display().to_string()),
        None => {
            let now = clock.now();
            let date = cli.date.unwrap_or_else(|| now.date_naive());
            (demo::generate_test_flights(date, *now.offset()), "demo".to_string())
        }
    };
    tracing::info!(flights = flights.len(), %source, "board ready");

    // ── print mode ────────────────────────────────────────────
    if cli.print {
        print!(
            "{}",
            timeline_widget::plain_text(&flights, &clock.now(), config.clock_format)
        );
        return Ok(());
    }

    let mut state = AppState::new(flights, config, clock, source);
    state.config_path = Some(config_path);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
