//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::error::FocusError;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events, waiting at most `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<K: KeyValueStore, N: Notifier, C: Clock>(
    app: &mut App<K, N, C>,
    timeout: Duration,
) -> Result<Option<Action>, FocusError> {
    if event::poll(timeout).map_err(|e| FocusError::Config(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| FocusError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            // Settings panel has its own key map
            if app.show_settings {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('s') => {
                        app.toggle_settings();
                    }
                    KeyCode::Char('j') | KeyCode::Down => app.select_next_field(),
                    KeyCode::Char('k') | KeyCode::Up => app.select_previous_field(),
                    KeyCode::Char('l' | '+') | KeyCode::Right => app.increment_field(),
                    KeyCode::Char('h' | '-') | KeyCode::Left => app.decrement_field(),
                    KeyCode::Char(' ') => app.toggle_field(),
                    _ => {}
                }
                return Ok(None);
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer controls
                KeyCode::Char(' ') => app.toggle_run(),
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('R') => app.reset_all(),

                // Phase prompt
                KeyCode::Char('b') => app.begin_break(),
                KeyCode::Char('f') => app.begin_focus(),
                KeyCode::Enter => app.continue_from_prompt(),

                // Settings panel
                KeyCode::Char('s') => app.toggle_settings(),

                _ => {}
            }
        }
    }

    Ok(None)
}
