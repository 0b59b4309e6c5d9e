//! Expression module - one `<operand> <operator> <operand>` cycle
//!
//! [`Calculator`] ties the pieces together: classify the operands, evaluate
//! the operator, then render the value in the notation of the input.

use crate::classifier::{classify, ArabicRange};
use crate::codec::{self, ROMAN_CAP};
use crate::error::{CalcError, Result};
use crate::evaluator::evaluate;
use crate::numeral::NumeralKind;
use std::fmt;
use std::num::NonZeroU32;

/// Three tokens: left operand, operator, right operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Left operand token
    pub left: String,
    /// Operator token
    pub operator: String,
    /// Right operand token
    pub right: String,
}

impl Expression {
    /// Create an expression from its three tokens
    pub fn new(
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator: operator.into(),
            right: right.into(),
        }
    }

    /// Split a line on whitespace into exactly three tokens.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [left, operator, right] => Ok(Self::new(*left, *operator, *right)),
            _ => Err(CalcError::MalformedExpression {
                found: tokens.len(),
            }),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl std::str::FromStr for Expression {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An evaluated value, rendered for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Arabic input, decimal output
    Arabic(i64),

    /// Roman input, value in 1..=ROMAN_CAP
    Roman {
        /// Evaluated value
        value: u32,
        /// Its Roman spelling
        numeral: String,
    },

    /// Roman input, value above ROMAN_CAP, written in decimal
    DecimalFallback(i64),
}

impl Answer {
    /// Render `value` in the notation of `kind`.
    ///
    /// Roman values must be positive; `Invalid` is treated as arabic.
    pub fn render(kind: NumeralKind, value: i64) -> Result<Self> {
        if kind != NumeralKind::Roman {
            return Ok(Answer::Arabic(value));
        }

        if value > i64::from(ROMAN_CAP) {
            return Ok(Answer::DecimalFallback(value));
        }

        let positive = u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CalcError::NonPositiveRomanResult { value })?;
        Ok(Answer::Roman {
            value: positive.get(),
            numeral: codec::encode(positive),
        })
    }

    /// Numeric value
    pub fn value(&self) -> i64 {
        match self {
            Answer::Arabic(value) | Answer::DecimalFallback(value) => *value,
            Answer::Roman { value, .. } => i64::from(*value),
        }
    }

    /// Notation the answer is written in
    pub fn kind(&self) -> NumeralKind {
        match self {
            Answer::Roman { .. } => NumeralKind::Roman,
            Answer::Arabic(_) | Answer::DecimalFallback(_) => NumeralKind::Arabic,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Arabic(value) | Answer::DecimalFallback(value) => write!(f, "{}", value),
            Answer::Roman { numeral, .. } => f.write_str(numeral),
        }
    }
}

/// Evaluates expressions under a fixed arabic range policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    range: ArabicRange,
}

impl Calculator {
    /// Create a calculator
    pub fn new(range: ArabicRange) -> Self {
        Self { range }
    }

    /// Arabic range policy in effect
    pub fn range(&self) -> ArabicRange {
        self.range
    }

    /// Classify, evaluate and render one expression.
    pub fn calculate(&self, expression: &Expression) -> Result<Answer> {
        let operands = classify(&expression.left, &expression.right, self.range)?;
        let value = evaluate(
            &expression.operator,
            operands.left.value(),
            operands.right.value(),
        )?;
        Answer::render(operands.kind(), value)
    }

    /// Parse and calculate a raw input line.
    pub fn evaluate_line(&self, line: &str) -> Result<Answer> {
        self.calculate(&Expression::parse(line)?)
    }
}
