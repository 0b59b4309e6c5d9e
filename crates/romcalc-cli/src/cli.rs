//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use romcalc_domain::{ArabicRange, ROMAN_CAP};

/// romcalc - Arithmetic on arabic integers or Roman numerals I to X.
#[derive(Debug, Parser)]
#[command(name = "romcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ROMCALC_CONFIG")]
    pub config: Option<String>,

    /// Accepted arabic operand values
    #[arg(short, long, value_enum, global = true)]
    pub range: Option<RangeArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Bare answer (default)
    Plain,
    /// JSON format
    Json,
}

/// Arabic range options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RangeArg {
    /// Any integer (default)
    Unrestricted,
    /// Only 1 through 10, like the Roman operands
    Strict,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single expression
    Eval(EvalArgs),

    /// Convert between arabic and Roman notation
    Convert(ConvertArgs),

    /// Print the arabic/Roman conversion table
    Table(TableArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the eval command.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Left operand (e.g. 3 or IV)
    #[arg(allow_hyphen_values = true)]
    pub left: String,

    /// Operator: +, -, * or /
    #[arg(allow_hyphen_values = true)]
    pub operator: String,

    /// Right operand
    #[arg(allow_hyphen_values = true)]
    pub right: String,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Arabic integer (1-100) or canonical Roman numeral (I-C)
    pub value: String,
}

/// Arguments for the table command.
#[derive(Debug, Parser)]
pub struct TableArgs {
    /// Largest value to list
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=i64::from(ROMAN_CAP)))]
    pub max: u32,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => crate::config::OutputFormat::Plain,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<RangeArg> for ArabicRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::Unrestricted => ArabicRange::Unrestricted,
            RangeArg::Strict => ArabicRange::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["romcalc"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_eval_command() {
        let cli = Cli::parse_from(["romcalc", "eval", "IV", "+", "III"]);
        match cli.command {
            Some(Command::Eval(args)) => {
                assert_eq!(args.left, "IV");
                assert_eq!(args.operator, "+");
                assert_eq!(args.right, "III");
            }
            _ => panic!("Expected Eval command"),
        }
    }

    #[test]
    fn test_eval_accepts_minus_operator_and_negative_operand() {
        let cli = Cli::parse_from(["romcalc", "eval", "-3", "-", "4"]);
        match cli.command {
            Some(Command::Eval(args)) => {
                assert_eq!(args.left, "-3");
                assert_eq!(args.operator, "-");
            }
            _ => panic!("Expected Eval command"),
        }
    }

    #[test]
    fn test_table_max_bounds() {
        let cli = Cli::parse_from(["romcalc", "table", "--max", "40"]);
        assert!(matches!(cli.command, Some(Command::Table(TableArgs { max: 40 }))));

        assert!(Cli::try_parse_from(["romcalc", "table", "--max", "101"]).is_err());
        assert!(Cli::try_parse_from(["romcalc", "table", "--max", "0"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["romcalc", "--range", "strict", "--format", "json", "repl"]);
        assert!(matches!(cli.range, Some(RangeArg::Strict)));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Some(Command::Repl)));
    }

    #[test]
    fn test_range_conversion() {
        let range: ArabicRange = RangeArg::Strict.into();
        assert_eq!(range, ArabicRange::Strict);
    }
}
