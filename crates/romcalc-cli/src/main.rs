//! romcalc - Command-line calculator for arabic integers and Roman numerals.

use clap::Parser;
use romcalc_cli::commands;
use romcalc_cli::config::OutputFormat;
use romcalc_cli::repl::{self, ReplOptions};
use romcalc_cli::{logging, Cli, Command, Config, Formatter};
use romcalc_domain::{ArabicRange, Calculator};
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        if !e.already_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run() -> romcalc_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; a broken file is reported and replaced by defaults
    let loaded = match &cli.config {
        Some(path) => Config::load_from(Path::new(path)),
        None => Config::load(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.settings.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    // Flags override the config file
    let format: OutputFormat = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let range: ArabicRange = cli
        .range
        .map(Into::into)
        .unwrap_or_else(|| config.settings.arabic_range.into());

    let formatter = Formatter::new(format, color_enabled);
    let calculator = Calculator::new(range);
    tracing::debug!(?range, ?format, "session configured");

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&calculator, &formatter, ReplOptions::from(&config))?;
        }
        Some(Command::Eval(args)) => {
            commands::execute_eval(args, &calculator, &formatter)?;
        }
        Some(Command::Convert(args)) => {
            commands::execute_convert(args, &formatter)?;
        }
        Some(Command::Table(args)) => {
            commands::execute_table(args, &formatter)?;
        }
    }

    Ok(())
}
