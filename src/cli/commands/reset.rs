//! Reset command implementation.

use crate::core::clock::{Clock, SystemClock};
use crate::error::FocusError;
use crate::features::session::SessionStore;
use crate::storage::SqliteStore;

/// Erase the saved settings and statistics.
///
/// # Errors
///
/// Returns an error unless `--force` is given, or if storage fails.
pub fn reset(force: bool) -> Result<String, FocusError> {
    if !force {
        return Err(FocusError::Config(
            "This will erase your saved settings and statistics.\nUse --force to confirm."
                .to_string(),
        ));
    }

    let kv = SqliteStore::new()?;
    let mut store = SessionStore::load(kv, SystemClock.today());
    store.clear()?;

    Ok("Settings and statistics reset to defaults.".to_string())
}
