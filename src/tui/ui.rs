//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::features::timer::Phase;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::{App, SettingsField};

/// Render the application UI.
pub fn render<K: KeyValueStore, N: Notifier, C: Clock>(frame: &mut Frame<'_>, app: &App<K, N, C>) {
    // Create layout: header, timer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if app.show_settings {
        render_settings_panel(frame, app);
    }
}

/// Color for each phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Focus => Color::Cyan,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Magenta,
    }
}

/// Render the header.
fn render_header<K: KeyValueStore, N: Notifier, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<K, N, C>,
    area: Rect,
) {
    let title = format!(
        " 🍅 focusflow ({} sessions today) ",
        app.engine.stats().today_sessions
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown view.
fn render_timer<K: KeyValueStore, N: Notifier, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<K, N, C>,
    area: Rect,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Spacer
            Constraint::Length(1), // Phase name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Run state / prompt
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Progress bar
            Constraint::Length(1), // Session info
            Constraint::Min(0),
        ])
        .split(area);

    let color = phase_color(app.engine.phase());

    let phase = Paragraph::new(app.engine.phase().display_name())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(phase, sections[1]);

    let countdown = Paragraph::new(app.engine.format_remaining())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(countdown, sections[3]);

    let state_line = if app.engine.pending_prompt() {
        prompt_line(app)
    } else if app.engine.is_active() {
        Line::from(Span::styled("● RUNNING", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled("⏸ PAUSED", Style::default().fg(Color::Yellow)))
    };
    frame.render_widget(
        Paragraph::new(state_line).alignment(Alignment::Center),
        sections[5],
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (app.engine.progress() * 100.0) as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100));
    frame.render_widget(gauge, sections[7]);

    let settings = app.engine.settings();
    let session_in_cycle =
        (app.engine.cycles() % settings.cycles_before_long_break) + 1;
    let info = format!(
        "Session {} of {}  •  {} completed today",
        session_in_cycle,
        settings.cycles_before_long_break,
        app.engine.stats().today_sessions
    );
    frame.render_widget(
        Paragraph::new(info)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        sections[8],
    );
}

/// The prompt shown when a phase has completed.
fn prompt_line<K: KeyValueStore, N: Notifier, C: Clock>(app: &App<K, N, C>) -> Line<'static> {
    let settings = app.engine.settings();

    let text = if app.engine.phase() == Phase::Focus {
        let minutes = if app.engine.next_break_is_long() {
            settings.long_break_minutes
        } else {
            settings.short_break_minutes
        };
        format!("Session complete! Press b for a {minutes} minute break")
    } else {
        "Break finished. Press f to start a new focus session".to_string()
    };

    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the status bar.
fn render_status_bar<K: KeyValueStore, N: Notifier, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<K, N, C>,
    area: Rect,
) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Space:start/pause | r:reset | R:reset all | s:settings | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the settings panel over the timer view.
fn render_settings_panel<K: KeyValueStore, N: Notifier, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<K, N, C>,
) {
    let area = centered_rect(50, 40, frame.area());

    let fields = [
        SettingsField::Focus,
        SettingsField::ShortBreak,
        SettingsField::LongBreak,
        SettingsField::Cycles,
        SettingsField::Notifications,
    ];

    let items: Vec<ListItem<'_>> = fields
        .iter()
        .map(|&field| {
            let value = match field {
                SettingsField::Focus => format!("{} min", app.draft.focus_minutes),
                SettingsField::ShortBreak => format!("{} min", app.draft.short_break_minutes),
                SettingsField::LongBreak => format!("{} min", app.draft.long_break_minutes),
                SettingsField::Cycles => app.draft.cycles_before_long_break.to_string(),
                SettingsField::Notifications => {
                    if app.draft.notifications {
                        "on".to_string()
                    } else {
                        "off".to_string()
                    }
                }
            };

            let line = format!("{:<28} < {value} >", field.label());
            let style = if field == app.selected_field {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let panel = List::new(items).block(
        Block::default()
            .title(" Settings | j/k move, h/l adjust, s close ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// A rectangle centered in `area`, sized as a percentage of it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
