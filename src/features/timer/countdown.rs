//! Second-granularity countdown and duration formatting.

use chrono::Duration;

/// A countdown over whole seconds.
///
/// The remaining time never goes below zero, and the zero crossing is
/// reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// Total duration in seconds
    total_seconds: i64,
    /// Remaining seconds
    remaining_seconds: i64,
}

impl Countdown {
    /// Create a new countdown with the given duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        let seconds = duration.num_seconds();
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
        }
    }

    /// Create a countdown from minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::minutes(minutes as i64))
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true exactly when this tick brings the remaining time to
    /// zero. Ticking a finished countdown changes nothing and returns
    /// false.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }

        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Get remaining time in seconds.
    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Check if the countdown has reached zero.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Get progress as a percentage (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.total_seconds as f64)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(Duration::seconds(self.remaining_seconds))
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_new() {
        let countdown = Countdown::from_minutes(25);
        assert_eq!(countdown.remaining_seconds(), 25 * 60);
        assert!(!countdown.is_finished());
    }

    #[test]
    fn test_tick_to_zero() {
        let mut countdown = Countdown::from_minutes(1);

        for _ in 0..59 {
            assert!(!countdown.tick());
        }

        assert!(countdown.tick());
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_tick_past_zero_clamps() {
        let mut countdown = Countdown::new(Duration::seconds(1));

        assert!(countdown.tick());
        // Further ticks neither go negative nor report completion again
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_progress() {
        let mut countdown = Countdown::new(Duration::seconds(100));

        assert_eq!(countdown.progress(), 0.0);

        for _ in 0..50 {
            countdown.tick();
        }

        assert!((countdown.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_remaining() {
        let countdown = Countdown::from_minutes(25);
        assert_eq!(countdown.format_remaining(), "25:00");
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(30)), "30 seconds");
    }
}
