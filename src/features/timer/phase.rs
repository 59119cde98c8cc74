//! Timer phases.

use serde::{Deserialize, Serialize};

/// The phase the countdown is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work.
    Focus,
    /// Short break between focus sessions.
    ShortBreak,
    /// Long break after a full cycle of focus sessions.
    LongBreak,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Phase::Focus.to_string(), "Focus");
        assert_eq!(Phase::ShortBreak.to_string(), "Short Break");
        assert_eq!(Phase::LongBreak.to_string(), "Long Break");
    }

    #[test]
    fn test_is_break() {
        assert!(!Phase::Focus.is_break());
        assert!(Phase::ShortBreak.is_break());
        assert!(Phase::LongBreak.is_break());
    }
}
