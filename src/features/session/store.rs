//! Load/save round-trip for the settings and statistics records.

use chrono::NaiveDate;
use log::warn;
use serde::de::DeserializeOwned;

use crate::error::FocusError;
use crate::features::session::{Settings, Stats};
use crate::storage::kv::{KeyValueStore, SETTINGS_KEY, STATS_KEY};

/// Owns the in-memory settings and statistics and their persistence.
///
/// Loading never fails: an absent or corrupt record, or an unavailable
/// backend, degrades to the defaults for this session (logged). Writes
/// report their errors so callers can decide whether to surface or merely
/// log them.
pub struct SessionStore<K: KeyValueStore> {
    kv: K,
    settings: Settings,
    stats: Stats,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Load both records from the backend, merging each over its defaults.
    ///
    /// The daily-reset rule runs only when a persisted stats record existed,
    /// so a fresh store loads exactly the defaults.
    pub fn load(kv: K, today: NaiveDate) -> Self {
        let settings = read_record::<K, Settings>(&kv, SETTINGS_KEY)
            .filter(|s| match s.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Discarding persisted settings: {e}");
                    false
                }
            })
            .unwrap_or_default();

        let persisted_stats: Option<Stats> = read_record(&kv, STATS_KEY);
        let had_record = persisted_stats.is_some();
        let mut stats = persisted_stats.unwrap_or_default();
        if had_record {
            stats.apply_daily_reset(today);
        }

        Self {
            kv,
            settings,
            stats,
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Mutable statistics, for the engine's per-tick and per-completion
    /// updates. Callers persist explicitly via [`Self::save_stats`].
    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// Validate and persist new settings.
    ///
    /// Returns whether the focus duration changed, so the caller can decide
    /// to re-derive the remaining time of an idle focus countdown. A backend
    /// write failure is logged and the new settings stay in effect for this
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidSettings` if validation fails; the prior
    /// settings remain in effect and nothing is written.
    pub fn save_settings(&mut self, settings: Settings) -> Result<bool, FocusError> {
        settings.validate()?;

        let focus_changed = settings.focus_minutes != self.settings.focus_minutes;

        let raw = serde_json::to_string(&settings)?;
        if let Err(e) = self.kv.set(SETTINGS_KEY, &raw) {
            warn!("Settings not persisted, continuing in memory: {e}");
        }
        self.settings = settings;

        Ok(focus_changed)
    }

    /// Persist the full statistics record.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if the backend write fails. The
    /// in-memory record is unaffected either way.
    pub fn save_stats(&mut self) -> Result<(), FocusError> {
        let raw = serde_json::to_string(&self.stats)?;
        self.kv.set(STATS_KEY, &raw)
    }

    /// Consume the store, returning the backend (for tests).
    #[cfg(test)]
    pub(crate) fn into_kv(self) -> K {
        self.kv
    }

    /// Erase both persisted records and restore the in-memory defaults.
    /// Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if a delete fails; the in-memory
    /// defaults are restored regardless.
    pub fn clear(&mut self) -> Result<(), FocusError> {
        self.settings = Settings::default();
        self.stats = Stats::default();

        self.kv.remove(SETTINGS_KEY)?;
        self.kv.remove(STATS_KEY)?;
        Ok(())
    }
}

/// Read and deserialize one record, treating every failure as absence.
fn read_record<K: KeyValueStore, T: DeserializeOwned>(kv: &K, key: &str) -> Option<T> {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding corrupt {key} record: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Storage unavailable, using default {key}: {e}");
            None
        }
    }
}
