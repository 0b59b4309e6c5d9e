//! Eval command implementation.

use crate::cli::EvalArgs;
use crate::error::Result;
use crate::output::Formatter;
use romcalc_domain::{Calculator, Expression};

/// Execute the eval command.
pub fn execute_eval(args: EvalArgs, calculator: &Calculator, formatter: &Formatter) -> Result<()> {
    let expression = Expression::new(args.left, args.operator, args.right);
    let output = evaluate_expression(&expression, calculator, formatter)?;
    println!("{}", output);
    Ok(())
}

/// Calculate one expression and format the answer.
pub fn evaluate_expression(
    expression: &Expression,
    calculator: &Calculator,
    formatter: &Formatter,
) -> Result<String> {
    match calculator.calculate(expression) {
        Ok(answer) => {
            tracing::debug!(%expression, %answer, kind = %answer.kind(), "evaluated expression");
            formatter.format_answer(expression, &answer)
        }
        Err(e) => {
            tracing::debug!(%expression, error = %e, "expression rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use romcalc_domain::{ArabicRange, CalcError};

    #[test]
    fn test_evaluate_expression() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let calculator = Calculator::new(ArabicRange::Unrestricted);

        let output =
            evaluate_expression(&Expression::new("VI", "*", "VII"), &calculator, &formatter).unwrap();
        assert_eq!(output, "XLII");
    }

    #[test]
    fn test_evaluate_expression_error() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let calculator = Calculator::new(ArabicRange::Strict);

        let err =
            evaluate_expression(&Expression::new("20", "+", "1"), &calculator, &formatter).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calc(CalcError::OutOfRangeOperand { value: 20, .. })
        ));
    }
}
