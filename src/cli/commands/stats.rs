//! Statistics command implementation.

use crate::cli::args::OutputFormat;
use crate::core::clock::{Clock, SystemClock};
use crate::error::FocusError;
use crate::features::session::SessionStore;
use crate::output::pretty::format_stats;
use crate::output::to_json;
use crate::storage::SqliteStore;

/// Show focus statistics.
///
/// Loading applies the daily-reset rule, so the per-day counter is already
/// correct for today.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or output formatting fails.
pub fn stats(format: OutputFormat) -> Result<String, FocusError> {
    let kv = SqliteStore::new()?;
    let store = SessionStore::load(kv, SystemClock.today());

    match format {
        OutputFormat::Json => to_json(store.stats()),
        OutputFormat::Pretty => Ok(format_stats(store.stats())),
    }
}
