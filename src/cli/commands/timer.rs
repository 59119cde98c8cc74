//! Interactive timer command.

use crate::core::clock::{Clock, SystemClock};
use crate::core::notify::DesktopNotifier;
use crate::error::FocusError;
use crate::features::session::SessionStore;
use crate::features::timer::TimerEngine;
use crate::storage::SqliteStore;
use crate::tui;

/// Launch the full-screen interactive timer.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or the terminal cannot be
/// initialized.
pub fn timer() -> Result<String, FocusError> {
    let kv = SqliteStore::new()?;
    let clock = SystemClock;
    let store = SessionStore::load(kv, clock.today());
    let engine = TimerEngine::new(store, DesktopNotifier, clock);

    tui::run(engine)?;
    Ok(String::new())
}
