//! Table command implementation.

use crate::cli::TableArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the table command.
pub fn execute_table(args: TableArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_table(args.max)?);
    Ok(())
}
