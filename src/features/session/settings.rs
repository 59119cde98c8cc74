//! Timer settings record.

use serde::{Deserialize, Serialize};

use crate::error::FocusError;

/// User-adjustable timer settings.
///
/// Persisted as JSON under the `settings` key. Every field carries a serde
/// default so a partial persisted record merges over the defaults and
/// records written by newer versions load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Focus phase duration in minutes.
    #[serde(default = "default_focus")]
    pub focus_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of focus sessions before a long break.
    #[serde(default = "default_cycles")]
    pub cycles_before_long_break: u32,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

// Default value functions for serde
const fn default_focus() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_cycles() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            cycles_before_long_break: default_cycles(),
            notifications: default_true(),
        }
    }
}

impl Settings {
    /// Validate the settings invariants.
    ///
    /// All durations must be positive and the long-break cadence must be at
    /// least 1, since the break selection divides by it.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidSettings` naming the offending field.
    pub fn validate(&self) -> Result<(), FocusError> {
        if self.focus_minutes == 0 {
            return Err(FocusError::InvalidSettings(
                "focus duration must be at least 1 minute".to_string(),
            ));
        }
        if self.short_break_minutes == 0 {
            return Err(FocusError::InvalidSettings(
                "short break duration must be at least 1 minute".to_string(),
            ));
        }
        if self.long_break_minutes == 0 {
            return Err(FocusError::InvalidSettings(
                "long break duration must be at least 1 minute".to_string(),
            ));
        }
        if self.cycles_before_long_break == 0 {
            return Err(FocusError::InvalidSettings(
                "cycles before long break must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
