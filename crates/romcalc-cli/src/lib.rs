//! romcalc CLI library.
//!
//! This library provides the session loop and one-shot commands for the
//! romcalc calculator, including configuration management, logging setup
//! and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
