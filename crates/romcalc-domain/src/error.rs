//! Error types for classification, evaluation and rendering.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Every way an expression can fail to produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The line did not contain exactly three tokens
    #[error(
        "Please enter a valid expression (expected 3 tokens, found {found}). Patterns: a + b, a - b, a * b, a / b"
    )]
    MalformedExpression {
        /// Number of whitespace-separated tokens actually supplied
        found: usize,
    },

    /// Token is neither an arabic integer nor a Roman numeral I..X
    #[error("Unrecognized operand '{token}': expected an integer or a Roman numeral from I to X")]
    UnparseableOperand {
        /// The offending token
        token: String,
    },

    /// One operand is arabic, the other Roman
    #[error("Mismatched operand types: '{left}' and '{right}' must both be arabic or both be Roman")]
    MismatchedOperandTypes {
        /// Left operand token
        left: String,
        /// Right operand token
        right: String,
    },

    /// Arabic operand outside the accepted range
    #[error("Operand '{token}' is out of range: {value} is not between 1 and 10")]
    OutOfRangeOperand {
        /// The offending token
        token: String,
        /// Its parsed value
        value: i64,
    },

    /// Operator other than + - * /
    #[error("Unsupported operator '{operator}': expected one of +, -, *, /")]
    UnsupportedOperator {
        /// The offending operator token
        operator: String,
    },

    /// Right operand of `/` was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Roman expression evaluated to zero or less
    #[error("Result {value} cannot be written as a Roman numeral: Roman numerals are positive")]
    NonPositiveRomanResult {
        /// The evaluated value
        value: i64,
    },

    /// Arithmetic exceeded the 64-bit integer range
    #[error("Integer overflow while computing the result")]
    Overflow,
}
