//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use crate::output::{Conversion, Formatter};
use romcalc_domain::{codec, ROMAN_CAP};
use std::num::NonZeroU32;

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let conversion = convert(&args.value)?;
    println!("{}", formatter.format_conversion(&conversion)?);
    Ok(())
}

/// Convert an arabic integer to Roman, or a Roman numeral to arabic.
pub fn convert(input: &str) -> Result<Conversion> {
    if let Ok(value) = input.parse::<i64>() {
        let positive = u32::try_from(value)
            .ok()
            .filter(|v| *v <= ROMAN_CAP)
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "{} cannot be written as a Roman numeral (expected 1 to {})",
                    value, ROMAN_CAP
                ))
            })?;
        return Ok(Conversion::ToRoman {
            value: positive.get(),
            numeral: codec::encode(positive),
        });
    }

    let value = codec::parse_canonical(input).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "'{}' is neither an integer nor a canonical Roman numeral up to {}",
            input, ROMAN_CAP
        ))
    })?;
    Ok(Conversion::ToArabic {
        numeral: input.to_string(),
        value,
    })
}
