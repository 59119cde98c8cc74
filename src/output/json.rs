//! JSON output formatting for focusflow.

use serde::Serialize;

use crate::error::FocusError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::{Settings, Stats};

    #[test]
    fn test_settings_to_json() {
        let result = to_json(&Settings::default()).unwrap();

        assert!(result.contains("\"focus_minutes\": 25"));
        assert!(result.contains("\"cycles_before_long_break\": 4"));
        assert!(result.contains("\"notifications\": true"));
    }

    #[test]
    fn test_stats_to_json() {
        let stats = Stats {
            total_focus_seconds: 1500,
            today_sessions: 1,
            last_session_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1),
            completed_cycles: 1,
        };
        let result = to_json(&stats).unwrap();

        assert!(result.contains("\"total_focus_seconds\": 1500"));
        assert!(result.contains("\"last_session_date\": \"2025-06-01\""));
    }
}
