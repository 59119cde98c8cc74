use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::warn;

use focusflow::cli::args::{Cli, Commands};
use focusflow::cli::commands;
use focusflow::config::{ColorSetting, Config};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Falling back to default config: {e}");
        Config::default()
    });

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Timer => commands::timer()?,
        Commands::Settings(args) => commands::settings(args.command, format)?,
        Commands::Stats => commands::stats(format)?,
        Commands::Reset(args) => commands::reset(args.force)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
