//! Evaluator module - the four integer operations

use crate::error::{CalcError, Result};
use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero
    Div,
}

impl Operator {
    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Apply the operator.
    ///
    /// Division by zero and 64-bit overflow are reported as errors.
    pub fn apply(&self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => {
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(CalcError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(CalcError::UnsupportedOperator {
                operator: s.to_string(),
            }),
        }
    }
}

/// Parse `operator` and apply it to `a` and `b`.
pub fn evaluate(operator: &str, a: i64, b: i64) -> Result<i64> {
    operator.parse::<Operator>()?.apply(a, b)
}
