//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculation error
    #[error(transparent)]
    Calc(#[from] romcalc_domain::CalcError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// REPL stopped at a failed expression (exit_on_error)
    #[error("Session stopped after a failed expression")]
    SessionAborted,
}

impl CliError {
    /// Whether the user has already seen this error.
    pub fn already_reported(&self) -> bool {
        matches!(self, CliError::SessionAborted)
    }
}
