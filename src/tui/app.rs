//! Application state for the TUI.

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::features::session::Settings;
use crate::features::timer::{Phase, TimerEngine};
use crate::storage::kv::KeyValueStore;

/// Field selected in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// Focus duration in minutes.
    Focus,
    /// Short break duration in minutes.
    ShortBreak,
    /// Long break duration in minutes.
    LongBreak,
    /// Focus sessions before a long break.
    Cycles,
    /// Desktop notification toggle.
    Notifications,
}

impl SettingsField {
    /// The field below this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Cycles,
            Self::Cycles => Self::Notifications,
            Self::Notifications => Self::Focus,
        }
    }

    /// The field above this one, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Focus => Self::Notifications,
            Self::ShortBreak => Self::Focus,
            Self::LongBreak => Self::ShortBreak,
            Self::Cycles => Self::LongBreak,
            Self::Notifications => Self::Cycles,
        }
    }

    /// Label shown in the settings panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus duration",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
            Self::Cycles => "Sessions before long break",
            Self::Notifications => "Notifications",
        }
    }
}

/// Application state.
pub struct App<K: KeyValueStore, N: Notifier, C: Clock> {
    /// The timer engine.
    pub engine: TimerEngine<K, N, C>,
    /// Whether the settings panel is open.
    pub show_settings: bool,
    /// Selected settings field.
    pub selected_field: SettingsField,
    /// Settings being edited in the panel.
    pub draft: Settings,
    /// Status message to display.
    pub status: Option<String>,
}

impl<K: KeyValueStore, N: Notifier, C: Clock> App<K, N, C> {
    /// Create a new app around an engine.
    pub fn new(engine: TimerEngine<K, N, C>) -> Self {
        let draft = engine.settings().clone();
        Self {
            engine,
            show_settings: false,
            selected_field: SettingsField::Focus,
            draft,
            status: Some("Press Space to start".to_string()),
        }
    }

    /// Start or pause the countdown.
    pub fn toggle_run(&mut self) {
        if self.engine.is_active() {
            self.engine.pause();
            self.status = Some("Paused".to_string());
        } else if self.engine.start().is_some() {
            self.status = None;
        }
    }

    /// Reset the current phase.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Reset everything, including the saved records.
    pub fn reset_all(&mut self) {
        self.engine.reset_all();
        self.draft = self.engine.settings().clone();
        self.status = Some("All settings and statistics reset".to_string());
    }

    /// Start the offered break. Only valid at the prompt after a focus
    /// session.
    pub fn begin_break(&mut self) {
        if self.engine.pending_prompt() && self.engine.phase() == Phase::Focus {
            self.engine.start_break();
            self.status = None;
        }
    }

    /// Start a new focus session. Only valid at the prompt after a break.
    pub fn begin_focus(&mut self) {
        if self.engine.pending_prompt() && self.engine.phase().is_break() {
            self.engine.start_focus();
            self.status = None;
        }
    }

    /// Take the suggested next phase from the prompt.
    pub fn continue_from_prompt(&mut self) {
        if self.engine.phase() == Phase::Focus {
            self.begin_break();
        } else {
            self.begin_focus();
        }
    }

    /// Open the settings panel, or close it and apply the draft.
    pub fn toggle_settings(&mut self) {
        if self.show_settings {
            self.apply_settings();
        } else {
            self.draft = self.engine.settings().clone();
            self.show_settings = true;
        }
    }

    /// Close the panel and push the draft through validation.
    fn apply_settings(&mut self) {
        self.show_settings = false;
        match self.engine.update_settings(self.draft.clone()) {
            Ok(()) => self.status = Some("Settings saved".to_string()),
            Err(e) => {
                self.draft = self.engine.settings().clone();
                self.status = Some(e.to_string());
            }
        }
    }

    /// Move the panel selection down.
    pub fn select_next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    /// Move the panel selection up.
    pub fn select_previous_field(&mut self) {
        self.selected_field = self.selected_field.previous();
    }

    /// Increase the selected field (or toggle notifications).
    pub fn increment_field(&mut self) {
        match self.selected_field {
            SettingsField::Focus => self.draft.focus_minutes += 1,
            SettingsField::ShortBreak => self.draft.short_break_minutes += 1,
            SettingsField::LongBreak => self.draft.long_break_minutes += 1,
            SettingsField::Cycles => self.draft.cycles_before_long_break += 1,
            SettingsField::Notifications => {
                self.draft.notifications = !self.draft.notifications;
            }
        }
    }

    /// Decrease the selected field, keeping it valid (or toggle
    /// notifications).
    pub fn decrement_field(&mut self) {
        match self.selected_field {
            SettingsField::Focus => {
                self.draft.focus_minutes = self.draft.focus_minutes.saturating_sub(1).max(1);
            }
            SettingsField::ShortBreak => {
                self.draft.short_break_minutes =
                    self.draft.short_break_minutes.saturating_sub(1).max(1);
            }
            SettingsField::LongBreak => {
                self.draft.long_break_minutes =
                    self.draft.long_break_minutes.saturating_sub(1).max(1);
            }
            SettingsField::Cycles => {
                self.draft.cycles_before_long_break =
                    self.draft.cycles_before_long_break.saturating_sub(1).max(1);
            }
            SettingsField::Notifications => {
                self.draft.notifications = !self.draft.notifications;
            }
        }
    }

    /// Toggle the selected field if it is a boolean.
    pub fn toggle_field(&mut self) {
        if self.selected_field == SettingsField::Notifications {
            self.draft.notifications = !self.draft.notifications;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::notify::NullNotifier;
    use crate::features::session::SessionStore;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn test_app() -> App<MemoryStore, NullNotifier, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let store = SessionStore::load(MemoryStore::new(), today);
        App::new(TimerEngine::new(store, NullNotifier, FixedClock(today)))
    }

    #[test]
    fn test_toggle_run() {
        let mut app = test_app();

        app.toggle_run();
        assert!(app.engine.is_active());

        app.toggle_run();
        assert!(!app.engine.is_active());
    }

    #[test]
    fn test_settings_panel_round_trip() {
        let mut app = test_app();

        app.toggle_settings();
        assert!(app.show_settings);

        app.increment_field(); // Focus 25 -> 26
        app.toggle_settings();

        assert!(!app.show_settings);
        assert_eq!(app.engine.settings().focus_minutes, 26);
        assert_eq!(app.engine.time_left(), 26 * 60);
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut app = test_app();

        app.toggle_settings();
        app.selected_field = SettingsField::Cycles;
        for _ in 0..10 {
            app.decrement_field();
        }

        assert_eq!(app.draft.cycles_before_long_break, 1);
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = SettingsField::Focus;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, SettingsField::Focus);
        assert_eq!(SettingsField::Focus.previous(), SettingsField::Notifications);
    }

    #[test]
    fn test_prompt_keys_respect_phase() {
        let mut app = test_app();

        // Not at a prompt: both are no-ops
        app.begin_break();
        assert_eq!(app.engine.phase(), Phase::Focus);
        app.begin_focus();
        assert_eq!(app.engine.phase(), Phase::Focus);
        assert!(!app.engine.is_active());
    }
}
