//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use romcalc_domain::{Calculator, Expression};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const BANNER: &str = "Please enter an expression to calculate.";
const PROMPT: &str = "romcalc> ";

/// Session options taken from config and flags.
#[derive(Debug, Clone, Copy)]
pub struct ReplOptions {
    /// Maximum number of history entries kept
    pub history_size: usize,
    /// Stop the session at the first failed expression
    pub exit_on_error: bool,
}

impl From<&Config> for ReplOptions {
    fn from(config: &Config) -> Self {
        Self {
            history_size: config.settings.history_size,
            exit_on_error: config.settings.exit_on_error,
        }
    }
}

/// Run the interactive REPL.
pub fn run_repl(calculator: &Calculator, formatter: &Formatter, options: ReplOptions) -> Result<()> {
    println!("{}", formatter.info(BANNER));
    println!("{}", formatter.info("Type 'help' for patterns, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(options.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path();
    if let Some(path) = &history_path {
        if let Err(e) = editor.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let mut editor_error = None;
    let lines = std::iter::from_fn(|| loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                return Some(line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.warning("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => return None,
            Err(err) => {
                editor_error = Some(err);
                return None;
            }
        }
    });

    let end = run_session(lines, calculator, formatter, options.exit_on_error, |step| {
        print_step(&step, formatter)
    });

    // Save history
    if let Some(path) = &history_path {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    if let Some(err) = editor_error {
        return Err(err.into());
    }
    end.into_result()
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User typed an exit command
    Exit,
    /// Input ran out
    EndOfInput,
    /// A failed expression stopped the session
    Aborted,
}

impl SessionEnd {
    /// Aborted sessions become [`CliError::SessionAborted`].
    pub fn into_result(self) -> Result<()> {
        match self {
            SessionEnd::Aborted => Err(CliError::SessionAborted),
            SessionEnd::Exit | SessionEnd::EndOfInput => Ok(()),
        }
    }
}

/// Drive a session over `lines`, handing each step to `on_step`.
///
/// Blank lines are skipped. With `exit_on_error` the first failure is the
/// last step.
pub fn run_session<I>(
    lines: I,
    calculator: &Calculator,
    formatter: &Formatter,
    exit_on_error: bool,
    mut on_step: impl FnMut(ReplStep),
) -> SessionEnd
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let step = handle_line(line, calculator, formatter);
        let end = match &step {
            ReplStep::Exit => Some(SessionEnd::Exit),
            ReplStep::Failed(_) if exit_on_error => Some(SessionEnd::Aborted),
            _ => None,
        };
        on_step(step);

        if let Some(end) = end {
            if end == SessionEnd::Aborted {
                tracing::debug!("session stopped at first failure");
            }
            return end;
        }
    }
    SessionEnd::EndOfInput
}

fn print_step(step: &ReplStep, formatter: &Formatter) {
    match step {
        ReplStep::Exit => println!("{}", formatter.info("Goodbye!")),
        ReplStep::Help => print_help(formatter),
        ReplStep::Output(output) => println!("{}", output),
        ReplStep::Failed(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

/// What one input line asks the session to do.
#[derive(Debug)]
pub enum ReplStep {
    /// Leave the session
    Exit,
    /// Show usage
    Help,
    /// Print a formatted answer
    Output(String),
    /// Report an error for this cycle
    Failed(CliError),
}

/// Interpret one non-empty input line.
pub fn handle_line(line: &str, calculator: &Calculator, formatter: &Formatter) -> ReplStep {
    match line {
        "exit" | "quit" | "q" => ReplStep::Exit,
        "help" | "?" => ReplStep::Help,
        _ => {
            let result = Expression::parse(line)
                .map_err(CliError::from)
                .and_then(|expr| commands::evaluate_expression(&expr, calculator, formatter));
            match result {
                Ok(output) => ReplStep::Output(output),
                Err(e) => ReplStep::Failed(e),
            }
        }
    }
}

fn get_history_path() -> Option<PathBuf> {
    let dir = match Config::dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "history disabled");
            return None;
        }
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "history disabled");
        return None;
    }
    Some(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Enter an expression as three space-separated tokens:"));
    println!();
    println!("  a + b        - Addition");
    println!("  a - b        - Subtraction");
    println!("  a * b        - Multiplication");
    println!("  a / b        - Integer division (truncates toward zero)");
    println!();
    println!("  Operands are both arabic integers (3 * 4) or both Roman");
    println!("  numerals from I to X (IV + III). Roman answers must be positive.");
    println!();
    println!("  help, ?      - Show this help");
    println!("  exit, quit, q - Exit REPL");
    println!();
}
