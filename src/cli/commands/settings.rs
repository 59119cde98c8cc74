//! Settings command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::core::clock::{Clock, SystemClock};
use crate::error::FocusError;
use crate::features::session::SessionStore;
use crate::output::pretty::format_settings;
use crate::output::to_json;
use crate::storage::SqliteStore;

/// Execute settings subcommands.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or the new settings fail
/// validation.
pub fn settings(cmd: SettingsCommands, format: OutputFormat) -> Result<String, FocusError> {
    let kv = SqliteStore::new()?;
    let mut store = SessionStore::load(kv, SystemClock.today());

    match cmd {
        SettingsCommands::Show => match format {
            OutputFormat::Json => to_json(store.settings()),
            OutputFormat::Pretty => Ok(format_settings(store.settings())),
        },

        SettingsCommands::Set {
            focus,
            short_break,
            long_break,
            cycles,
            notifications,
        } => {
            let mut updated = store.settings().clone();

            if let Some(minutes) = focus {
                updated.focus_minutes = minutes;
            }
            if let Some(minutes) = short_break {
                updated.short_break_minutes = minutes;
            }
            if let Some(minutes) = long_break {
                updated.long_break_minutes = minutes;
            }
            if let Some(count) = cycles {
                updated.cycles_before_long_break = count;
            }
            if let Some(enabled) = notifications {
                updated.notifications = enabled;
            }

            store.save_settings(updated)?;

            match format {
                OutputFormat::Json => to_json(store.settings()),
                OutputFormat::Pretty => Ok(format!(
                    "{}\n\n{}",
                    "✓ Settings saved".green(),
                    format_settings(store.settings())
                )),
            }
        }
    }
}
