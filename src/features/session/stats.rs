//! Usage statistics record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accumulated usage statistics.
///
/// Mutated only by the timer engine when a focus session completes, except
/// for the daily reset applied at load time. Persisted as JSON under the
/// `stats` key with the same partial-merge semantics as the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stats {
    /// Seconds spent in the focus phase while the countdown was running.
    pub total_focus_seconds: u64,
    /// Focus sessions completed since the last daily reset.
    pub today_sessions: u32,
    /// Date of the most recently completed focus session.
    pub last_session_date: Option<NaiveDate>,
    /// Focus phases completed over the lifetime of the records.
    pub completed_cycles: u64,
}

impl Stats {
    /// Apply the daily-reset rule.
    ///
    /// If the last session did not happen today, the per-day session counter
    /// starts over and the record is stamped with today's date. Everything
    /// else is left untouched.
    pub fn apply_daily_reset(&mut self, today: NaiveDate) {
        if self.last_session_date != Some(today) {
            self.today_sessions = 0;
            self.last_session_date = Some(today);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_are_zero() {
        let stats = Stats::default();

        assert_eq!(stats.total_focus_seconds, 0);
        assert_eq!(stats.today_sessions, 0);
        assert_eq!(stats.last_session_date, None);
        assert_eq!(stats.completed_cycles, 0);
    }

    #[test]
    fn test_daily_reset_on_stale_date() {
        let mut stats = Stats {
            total_focus_seconds: 7200,
            today_sessions: 3,
            last_session_date: Some(date(2025, 5, 31)),
            completed_cycles: 12,
        };

        stats.apply_daily_reset(date(2025, 6, 1));

        assert_eq!(stats.today_sessions, 0);
        assert_eq!(stats.last_session_date, Some(date(2025, 6, 1)));
        // Cumulative fields survive the reset
        assert_eq!(stats.total_focus_seconds, 7200);
        assert_eq!(stats.completed_cycles, 12);
    }

    #[test]
    fn test_daily_reset_same_day_is_noop() {
        let today = date(2025, 6, 1);
        let mut stats = Stats {
            today_sessions: 3,
            last_session_date: Some(today),
            ..Stats::default()
        };

        stats.apply_daily_reset(today);

        assert_eq!(stats.today_sessions, 3);
        assert_eq!(stats.last_session_date, Some(today));
    }

    #[test]
    fn test_partial_record_merges_over_defaults() {
        let stats: Stats = serde_json::from_str(r#"{"today_sessions":2}"#).unwrap();

        assert_eq!(stats.today_sessions, 2);
        assert_eq!(stats.total_focus_seconds, 0);
        assert_eq!(stats.last_session_date, None);
    }

    #[test]
    fn test_round_trip() {
        let stats = Stats {
            total_focus_seconds: 1500,
            today_sessions: 1,
            last_session_date: Some(date(2025, 6, 1)),
            completed_cycles: 1,
        };

        let raw = serde_json::to_string(&stats).unwrap();
        let loaded: Stats = serde_json::from_str(&raw).unwrap();

        assert_eq!(loaded, stats);
    }
}
