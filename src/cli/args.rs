use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A Pomodoro focus timer for the terminal")]
#[command(long_about = "focusflow - A Pomodoro focus timer for the terminal

Cycles between focus sessions and breaks, keeps daily statistics, and sends
a desktop notification when a phase ends. A long break comes around after
every few focus sessions; everything in between is a short break.

QUICK START:
  focusflow timer           Run the interactive timer
  focusflow stats           Show your focus statistics
  focusflow settings show   Show the timer settings

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focusflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Opens the full-screen timer. The countdown starts paused on a focus
    /// phase; press Space to begin.
    ///
    /// # Keys
    ///
    ///   Space    Start / pause the countdown
    ///   b        Start the break offered after a focus session
    ///   f        Start a new focus session after a break
    ///   r        Reset the current phase
    ///   R        Reset everything, including saved statistics
    ///   s        Open / close the settings panel
    ///   q        Quit
    #[command(alias = "t")]
    Timer,

    /// View or change the timer settings
    ///
    /// Settings are validated before they are saved: all durations must be
    /// at least one minute and the long-break cadence at least 1.
    ///
    /// # Examples
    ///
    ///   focusflow settings show
    ///   focusflow settings set --focus 50
    ///   focusflow settings set --short-break 10 --cycles 3
    ///   focusflow settings set --notifications false
    Settings(SettingsArgs),

    /// Show focus statistics
    ///
    /// Sessions completed today, lifetime completed cycles, and total
    /// accumulated focus time. The daily counter resets automatically on
    /// the first load of a new day.
    ///
    /// # Examples
    ///
    ///   focusflow stats
    ///   focusflow stats -o json
    Stats,

    /// Erase saved settings and statistics
    ///
    /// Restores the defaults and removes both persisted records. This
    /// cannot be undone, so it requires --force.
    Reset(ResetArgs),

    /// Generate shell completions
    ///
    /// Supports bash, zsh, fish, powershell, and elvish.
    ///
    /// # Examples
    ///
    ///   focusflow completions zsh > ~/.zsh/completions/_focusflow
    Completions {
        /// The shell to generate completions for
        shell: String,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,

    /// Update one or more settings
    Set {
        /// Focus duration in minutes
        #[arg(long)]
        focus: Option<u32>,

        /// Short break duration in minutes
        #[arg(long)]
        short_break: Option<u32>,

        /// Long break duration in minutes
        #[arg(long)]
        long_break: Option<u32>,

        /// Focus sessions before a long break
        #[arg(long)]
        cycles: Option<u32>,

        /// Enable or disable desktop notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm erasing the saved records
    #[arg(long)]
    pub force: bool,
}
