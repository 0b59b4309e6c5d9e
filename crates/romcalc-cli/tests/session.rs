//! Session-level tests: lines as a user would type them.

use romcalc_cli::config::OutputFormat;
use romcalc_cli::repl::{handle_line, ReplStep};
use romcalc_cli::{CliError, Formatter};
use romcalc_domain::{ArabicRange, CalcError, Calculator};

fn run_script(lines: &[&str], calculator: &Calculator) -> Vec<ReplStep> {
    let formatter = Formatter::new(OutputFormat::Plain, false);
    lines
        .iter()
        .map(|line| handle_line(line, calculator, &formatter))
        .collect()
}

#[test]
fn test_errors_do_not_end_the_session() {
    let calculator = Calculator::new(ArabicRange::Unrestricted);
    let steps = run_script(&["V / 2", "IV + III", "7 % 2", "3 * 4", "exit"], &calculator);

    assert!(matches!(
        steps[0],
        ReplStep::Failed(CliError::Calc(CalcError::MismatchedOperandTypes { .. }))
    ));
    assert!(matches!(&steps[1], ReplStep::Output(out) if out == "VII"));
    assert!(matches!(
        steps[2],
        ReplStep::Failed(CliError::Calc(CalcError::UnsupportedOperator { .. }))
    ));
    assert!(matches!(&steps[3], ReplStep::Output(out) if out == "12"));
    assert!(matches!(steps[4], ReplStep::Exit));
}

#[test]
fn test_roman_results_outside_numeral_range() {
    let calculator = Calculator::new(ArabicRange::Unrestricted);
    let steps = run_script(&["IX - X", "X * X", "X + I"], &calculator);

    assert!(matches!(
        steps[0],
        ReplStep::Failed(CliError::Calc(CalcError::NonPositiveRomanResult { value: -1 }))
    ));
    assert!(matches!(&steps[1], ReplStep::Output(out) if out == "C"));
    assert!(matches!(&steps[2], ReplStep::Output(out) if out == "XI"));
}

#[test]
fn test_strict_session_rejects_large_arabic() {
    let calculator = Calculator::new(ArabicRange::Strict);
    let steps = run_script(&["11 + 1", "10 + 1"], &calculator);

    match &steps[0] {
        ReplStep::Failed(e) => assert!(e.to_string().contains("'11'")),
        other => panic!("Expected failure, got {:?}", other),
    }
    assert!(matches!(&steps[1], ReplStep::Output(out) if out == "11"));
}

#[test]
fn test_json_session_output() {
    let calculator = Calculator::default();
    let formatter = Formatter::new(OutputFormat::Json, false);

    match handle_line("VIII / III", &calculator, &formatter) {
        ReplStep::Output(out) => {
            let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert_eq!(parsed["output"], "II");
            assert_eq!(parsed["value"], 2);
        }
        other => panic!("Expected output, got {:?}", other),
    }
}
