//! Numeral module - token shapes and operand values

use crate::codec::{self, OPERAND_NUMERALS};
use crate::error::CalcError;
use std::fmt;

/// Which numeral system a token (or a pair of tokens) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralKind {
    /// Base-10 integer literal
    Arabic,

    /// Restricted Roman numeral I..X
    Roman,

    /// Neither
    Invalid,
}

impl NumeralKind {
    /// Determine the shape of a single token.
    ///
    /// Arabic is tried first; the two shapes never overlap in practice
    /// (digits vs. letters), so this only fixes precedence.
    pub fn of(token: &str) -> Self {
        if token.parse::<i64>().is_ok() {
            NumeralKind::Arabic
        } else if codec::decode(token).is_some() {
            NumeralKind::Roman
        } else {
            NumeralKind::Invalid
        }
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NumeralKind::Arabic => "arabic",
            NumeralKind::Roman => "roman",
            NumeralKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Roman numeral from the closed set I..X
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u8);

impl RomanNumeral {
    /// Parse one of the ten accepted forms
    pub fn parse(token: &str) -> Option<Self> {
        codec::decode(token).and_then(Self::from_value)
    }

    /// Build from a value in 1..=10
    pub fn from_value(value: u32) -> Option<Self> {
        (1..=10).contains(&value).then(|| Self(value as u8))
    }

    /// Integer value in 1..=10
    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        OPERAND_NUMERALS[usize::from(self.0) - 1]
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RomanNumeral {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalcError::UnparseableOperand {
            token: s.to_string(),
        })
    }
}

/// One side of an expression: arabic or Roman, never both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Arabic integer
    Arabic(i64),

    /// Roman numeral
    Roman(RomanNumeral),
}

impl Operand {
    /// Integer value regardless of notation
    pub fn value(&self) -> i64 {
        match self {
            Operand::Arabic(value) => *value,
            Operand::Roman(numeral) => i64::from(numeral.value()),
        }
    }

    /// Notation of this operand
    pub fn kind(&self) -> NumeralKind {
        match self {
            Operand::Arabic(_) => NumeralKind::Arabic,
            Operand::Roman(_) => NumeralKind::Roman,
        }
    }
}
