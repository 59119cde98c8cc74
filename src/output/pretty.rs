//! Human-readable output formatting.

use chrono::Duration;
use colored::Colorize;

use crate::features::session::{Settings, Stats};
use crate::features::timer::format_duration;

/// Format the timer settings for terminal display.
#[must_use]
pub fn format_settings(settings: &Settings) -> String {
    let mut output = Vec::new();

    output.push("⚙️  Timer Settings".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!(
        "Focus:            {} min",
        settings.focus_minutes.to_string().cyan()
    ));
    output.push(format!(
        "Short break:      {} min",
        settings.short_break_minutes.to_string().cyan()
    ));
    output.push(format!(
        "Long break:       {} min",
        settings.long_break_minutes.to_string().cyan()
    ));
    output.push(format!(
        "Long break every: {} sessions",
        settings.cycles_before_long_break.to_string().cyan()
    ));
    output.push(format!(
        "Notifications:    {}",
        if settings.notifications {
            "on".green().to_string()
        } else {
            "off".red().to_string()
        }
    ));

    output.join("\n")
}

/// Format the usage statistics for terminal display.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn format_stats(stats: &Stats) -> String {
    let mut output = Vec::new();

    output.push("📊 Focus Statistics".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!(
        "Sessions today:   {}",
        stats.today_sessions.to_string().cyan()
    ));
    output.push(format!(
        "Completed cycles: {}",
        stats.completed_cycles.to_string().cyan()
    ));
    output.push(format!(
        "Total focus time: {}",
        format_duration(Duration::seconds(stats.total_focus_seconds as i64)).cyan()
    ));

    if let Some(date) = stats.last_session_date {
        output.push(format!("Last session:     {}", date.format("%Y-%m-%d")));
    } else {
        output.push("Last session:     never".dimmed().to_string());
    }

    output.join("\n")
}
