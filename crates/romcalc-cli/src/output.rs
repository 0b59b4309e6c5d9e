//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use romcalc_domain::{codec, Answer, Expression};
use std::num::NonZeroU32;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Result of the convert command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Arabic input written as Roman
    ToRoman {
        /// Input value
        value: u32,
        /// Roman spelling
        numeral: String,
    },
    /// Roman input written as arabic
    ToArabic {
        /// Input numeral
        numeral: String,
        /// Its value
        value: u32,
    },
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the answer to an expression.
    pub fn format_answer(&self, expression: &Expression, answer: &Answer) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(answer.to_string()),
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "expression": expression.to_string(),
                    "kind": answer.kind().as_str(),
                    "value": answer.value(),
                    "output": answer.to_string(),
                });
                Ok(serde_json::to_string(&json)?)
            }
        }
    }

    /// Format a conversion result.
    pub fn format_conversion(&self, conversion: &Conversion) -> Result<String> {
        let (value, numeral) = match conversion {
            Conversion::ToRoman { value, numeral } | Conversion::ToArabic { numeral, value } => {
                (value, numeral)
            }
        };

        match self.format {
            OutputFormat::Plain => Ok(match conversion {
                Conversion::ToRoman { .. } => numeral.clone(),
                Conversion::ToArabic { .. } => value.to_string(),
            }),
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
                "arabic": value,
                "roman": numeral,
            }))?),
        }
    }

    /// Format the conversion table for 1..=max.
    pub fn format_table(&self, max: u32) -> Result<String> {
        let rows: Vec<(u32, String)> = (1..=max)
            .filter_map(NonZeroU32::new)
            .map(|value| (value.get(), codec::encode(value)))
            .collect();

        if self.format == OutputFormat::Json {
            let json: Vec<serde_json::Value> = rows
                .iter()
                .map(|(value, numeral)| serde_json::json!({ "arabic": value, "roman": numeral }))
                .collect();
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Arabic", "Roman"]);
        for (value, numeral) in &rows {
            builder.push_record([value.to_string(), numeral.clone()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expression() -> Expression {
        Expression::new("IV", "+", "III")
    }

    fn seven() -> Answer {
        Answer::Roman {
            value: 7,
            numeral: "VII".to_string(),
        }
    }

    #[test]
    fn test_plain_answer() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_answer(&expression(), &seven()).unwrap();
        assert_eq!(output, "VII");
    }

    #[test]
    fn test_json_answer() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_answer(&expression(), &seven()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["expression"], "IV + III");
        assert_eq!(parsed["kind"], "roman");
        assert_eq!(parsed["value"], 7);
        assert_eq!(parsed["output"], "VII");
    }

    #[test]
    fn test_json_fallback_answer() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_answer(&expression(), &Answer::DecimalFallback(150))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["kind"], "arabic");
        assert_eq!(parsed["output"], "150");
    }

    #[test]
    fn test_conversion_plain() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let to_roman = Conversion::ToRoman {
            value: 14,
            numeral: "XIV".to_string(),
        };
        assert_eq!(formatter.format_conversion(&to_roman).unwrap(), "XIV");

        let to_arabic = Conversion::ToArabic {
            numeral: "XIV".to_string(),
            value: 14,
        };
        assert_eq!(formatter.format_conversion(&to_arabic).unwrap(), "14");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_table(10).unwrap();
        assert!(output.contains("Roman"));
        assert!(output.contains("VIII"));
        assert!(!output.contains("XI"));
    }

    #[test]
    fn test_table_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_table(4).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[3]["roman"], "IV");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        assert_eq!(formatter.info("test"), "ℹ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
