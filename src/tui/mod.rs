//! Terminal User Interface (TUI) for focusflow.
//!
//! The full-screen timer view. Built with ratatui and crossterm; the event
//! loop polls for key events with a deadline-derived timeout and advances
//! the engine once per elapsed second while a countdown is armed.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::prelude::*;

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::error::FocusError;
use crate::features::timer::TimerEngine;
use crate::storage::kv::KeyValueStore;

/// Run the TUI application around an engine.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<K: KeyValueStore, N: Notifier, C: Clock>(
    engine: TimerEngine<K, N, C>,
) -> Result<(), FocusError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| FocusError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| FocusError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(engine);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, K: KeyValueStore, N: Notifier, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<K, N, C>,
) -> Result<(), FocusError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusError::Config(format!("Failed to draw: {e}")))?;

        // Handle events until the next tick is due
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if let Some(handle) = app.engine.armed() {
                app.engine.tick(handle);
            }
            last_tick = Instant::now();
        }
    }

    // Keep focus seconds accumulated mid-phase
    if let Err(e) = app.engine.persist_stats() {
        warn!("Stats not persisted on exit: {e}");
    }

    Ok(())
}
