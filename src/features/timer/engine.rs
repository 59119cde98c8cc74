//! The timer engine.
//!
//! Owns the transient timer state (phase, countdown, cycle count, prompt
//! flag), reads configuration from the session store, writes statistics back
//! into it, and emits notifications at phase boundaries. The host drives it
//! with one [`TimerEngine::tick`] per second while a handle is armed.

use log::warn;

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::error::FocusError;
use crate::features::session::{SessionStore, Settings, Stats};
use crate::features::timer::{Countdown, Phase, TickHandle, Ticker};
use crate::storage::kv::KeyValueStore;

/// Result of presenting a tick to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The handle was stale or nothing was armed; state is unchanged.
    Ignored,
    /// One second elapsed.
    Counted,
    /// The countdown reached zero and the named phase completed.
    Completed(Phase),
}

/// The countdown state machine.
///
/// Pause/reset cancel the armed tick handle before touching any state, so a
/// tick scheduled before the cancellation is ignored rather than observing
/// half-mutated state.
pub struct TimerEngine<K: KeyValueStore, N: Notifier, C: Clock> {
    store: SessionStore<K>,
    notifier: N,
    clock: C,
    phase: Phase,
    countdown: Countdown,
    cycles: u32,
    pending_prompt: bool,
    ticker: Ticker,
}

impl<K: KeyValueStore, N: Notifier, C: Clock> TimerEngine<K, N, C> {
    /// Create an engine in its initial state: focus phase, inactive, the
    /// full configured focus duration on the clock.
    pub fn new(store: SessionStore<K>, notifier: N, clock: C) -> Self {
        let countdown = Countdown::from_minutes(store.settings().focus_minutes);
        Self {
            store,
            notifier,
            clock,
            phase: Phase::Focus,
            countdown,
            cycles: 0,
            pending_prompt: false,
            ticker: Ticker::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn time_left(&self) -> i64 {
        self.countdown.remaining_seconds()
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Whether a completed phase is waiting for the next-phase choice.
    #[must_use]
    pub const fn pending_prompt(&self) -> bool {
        self.pending_prompt
    }

    /// Focus phases completed in this run.
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// The armed tick handle, if the countdown is running.
    #[must_use]
    pub const fn armed(&self) -> Option<TickHandle> {
        self.ticker.armed()
    }

    /// Countdown progress (0.0 - 1.0) for display.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.countdown.progress()
    }

    /// Remaining time formatted as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        self.countdown.format_remaining()
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// Current statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        self.store.stats()
    }

    /// Whether the next break would be a long one.
    ///
    /// Long every `cycles_before_long_break` completed focus phases. The
    /// cycle counter is incremented before this is consulted, both at focus
    /// completion and in [`Self::start_break`].
    #[must_use]
    pub const fn next_break_is_long(&self) -> bool {
        self.cycles % self.store.settings().cycles_before_long_break == 0
    }

    /// Start the countdown.
    ///
    /// No-op while the countdown is already running, while a completion
    /// prompt is waiting for an answer, or when nothing is left on the
    /// clock; returns the armed handle otherwise.
    pub fn start(&mut self) -> Option<TickHandle> {
        if self.ticker.is_armed() || self.pending_prompt || self.countdown.is_finished() {
            return None;
        }
        Some(self.ticker.arm())
    }

    /// Pause the countdown, leaving time, phase, and cycles untouched.
    /// Idempotent.
    pub fn pause(&mut self) {
        self.ticker.cancel();
    }

    /// Stop the countdown and return to an idle focus phase at the full
    /// configured duration. Cycles and statistics are untouched.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.pending_prompt = false;
        self.phase = Phase::Focus;
        self.countdown = Countdown::from_minutes(self.store.settings().focus_minutes);
    }

    /// Full reset: everything [`Self::reset`] does, plus zeroing the cycle
    /// counter, restoring settings and statistics to their defaults, and
    /// erasing the persisted records.
    pub fn reset_all(&mut self) {
        self.ticker.cancel();
        self.cycles = 0;
        self.pending_prompt = false;

        if let Err(e) = self.store.clear() {
            warn!("Failed to erase persisted records: {e}");
        }

        self.phase = Phase::Focus;
        self.countdown = Countdown::from_minutes(self.store.settings().focus_minutes);
    }

    /// Begin a focus phase at the full configured duration and start the
    /// countdown.
    pub fn start_focus(&mut self) -> Option<TickHandle> {
        self.ticker.cancel();
        self.phase = Phase::Focus;
        self.countdown = Countdown::from_minutes(self.store.settings().focus_minutes);
        self.pending_prompt = false;
        self.start()
    }

    /// Begin the appropriate break phase and start the countdown.
    ///
    /// Selects a long break when the completed cycle count lands on the
    /// configured cadence, a short break otherwise.
    pub fn start_break(&mut self) -> Option<TickHandle> {
        self.ticker.cancel();

        let settings = self.store.settings();
        let (phase, minutes) = if self.next_break_is_long() {
            (Phase::LongBreak, settings.long_break_minutes)
        } else {
            (Phase::ShortBreak, settings.short_break_minutes)
        };

        self.phase = phase;
        self.countdown = Countdown::from_minutes(minutes);
        self.pending_prompt = false;
        self.start()
    }

    /// Advance the countdown by one second.
    ///
    /// Ticks carrying a cancelled or superseded handle are ignored. During a
    /// focus phase every counted second is added to the focus-time total.
    /// When the countdown reaches zero the phase-completion transition runs
    /// exactly once and the engine waits at the prompt.
    pub fn tick(&mut self, handle: TickHandle) -> Tick {
        if !self.ticker.accepts(handle) {
            return Tick::Ignored;
        }

        if self.phase == Phase::Focus {
            self.store.stats_mut().total_focus_seconds += 1;
        }

        if self.countdown.tick() {
            let completed = self.phase;
            self.complete_phase();
            Tick::Completed(completed)
        } else {
            Tick::Counted
        }
    }

    /// Validate, adopt, and persist new settings.
    ///
    /// When the focus duration changed and the engine sits idle in the focus
    /// phase (not running, no prompt pending), the remaining time is
    /// re-derived from the new duration.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidSettings` if validation fails; the prior
    /// settings stay in effect.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), FocusError> {
        let focus_changed = self.store.save_settings(settings)?;

        if focus_changed
            && self.phase == Phase::Focus
            && !self.is_active()
            && !self.pending_prompt
        {
            self.countdown = Countdown::from_minutes(self.store.settings().focus_minutes);
        }

        Ok(())
    }

    /// Persist the statistics record.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if the backend write fails.
    pub fn persist_stats(&mut self) -> Result<(), FocusError> {
        self.store.save_stats()
    }

    /// Phase-completion transition. Runs with the countdown at zero; cancels
    /// the handle before mutating anything else.
    fn complete_phase(&mut self) {
        self.ticker.cancel();
        self.pending_prompt = true;

        match self.phase {
            Phase::Focus => {
                self.cycles += 1;

                let today = self.clock.today();
                let stats = self.store.stats_mut();
                stats.today_sessions += 1;
                stats.completed_cycles += 1;
                stats.last_session_date = Some(today);

                let settings = self.store.settings().clone();
                if self.next_break_is_long() {
                    self.send_notification(
                        "Session complete!",
                        &format!(
                            "Great work! You've completed {} cycles. Take a {} minute break.",
                            settings.cycles_before_long_break, settings.long_break_minutes
                        ),
                    );
                } else {
                    self.send_notification(
                        "Session complete!",
                        &format!(
                            "Nice work! Take a {} minute break.",
                            settings.short_break_minutes
                        ),
                    );
                }

                if let Err(e) = self.store.save_stats() {
                    warn!("Stats not persisted, continuing in memory: {e}");
                }
            }
            Phase::ShortBreak | Phase::LongBreak => {
                self.send_notification("Break finished", "Ready to start another focus session?");
            }
        }
    }

    /// Emit a notification, honoring the settings gate. Delivery failures
    /// are logged and otherwise ignored.
    fn send_notification(&self, title: &str, body: &str) {
        if !self.store.settings().notifications {
            return;
        }
        if let Err(e) = self.notifier.notify(title, body) {
            warn!("Notification suppressed: {e}");
        }
    }
}
