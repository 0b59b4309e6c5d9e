//! Classifier module - decides which numeral system governs an expression

use crate::error::{CalcError, Result};
use crate::numeral::{NumeralKind, Operand, RomanNumeral};
use std::ops::RangeInclusive;

/// Accepted arabic operand values under [`ArabicRange::Strict`]
pub const STRICT_ARABIC_RANGE: RangeInclusive<i64> = 1..=10;

/// Policy for arabic operand values
///
/// Applied to both operands of every expression in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArabicRange {
    /// Only 1..=10, mirroring the Roman operand domain
    Strict,

    /// Any 64-bit integer
    #[default]
    Unrestricted,
}

impl ArabicRange {
    /// Whether `value` is an acceptable arabic operand
    pub fn accepts(&self, value: i64) -> bool {
        match self {
            ArabicRange::Strict => STRICT_ARABIC_RANGE.contains(&value),
            ArabicRange::Unrestricted => true,
        }
    }
}

/// Two operands known to share a notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPair {
    /// Left operand
    pub left: Operand,
    /// Right operand
    pub right: Operand,
}

impl OperandPair {
    /// Notation shared by both operands
    pub fn kind(&self) -> NumeralKind {
        self.left.kind()
    }
}

/// Classify two operand tokens.
///
/// Both arabic yields an arabic pair (subject to `range`), both Roman a Roman
/// pair. A mix of the two is [`CalcError::MismatchedOperandTypes`]; a token
/// of neither shape is [`CalcError::UnparseableOperand`].
pub fn classify(left: &str, right: &str, range: ArabicRange) -> Result<OperandPair> {
    match (NumeralKind::of(left), NumeralKind::of(right)) {
        (NumeralKind::Arabic, NumeralKind::Arabic) => Ok(OperandPair {
            left: arabic(left, range)?,
            right: arabic(right, range)?,
        }),
        (NumeralKind::Roman, NumeralKind::Roman) => Ok(OperandPair {
            left: roman(left)?,
            right: roman(right)?,
        }),
        (NumeralKind::Invalid, _) => Err(CalcError::UnparseableOperand {
            token: left.to_string(),
        }),
        (_, NumeralKind::Invalid) => Err(CalcError::UnparseableOperand {
            token: right.to_string(),
        }),
        _ => Err(CalcError::MismatchedOperandTypes {
            left: left.to_string(),
            right: right.to_string(),
        }),
    }
}

fn arabic(token: &str, range: ArabicRange) -> Result<Operand> {
    let value: i64 = token.parse().map_err(|_| CalcError::UnparseableOperand {
        token: token.to_string(),
    })?;

    if !range.accepts(value) {
        return Err(CalcError::OutOfRangeOperand {
            token: token.to_string(),
            value,
        });
    }
    Ok(Operand::Arabic(value))
}

fn roman(token: &str) -> Result<Operand> {
    token.parse::<RomanNumeral>().map(Operand::Roman)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_roman() {
        let pair = classify("IV", "III", ArabicRange::Strict).unwrap();
        assert_eq!(pair.kind(), NumeralKind::Roman);
        assert_eq!(pair.left.value(), 4);
        assert_eq!(pair.right.value(), 3);
    }

    #[test]
    fn test_both_arabic() {
        let pair = classify("3", "4", ArabicRange::Strict).unwrap();
        assert_eq!(pair.kind(), NumeralKind::Arabic);
        assert_eq!(pair.left, Operand::Arabic(3));
        assert_eq!(pair.right, Operand::Arabic(4));
    }

    #[test]
    fn test_mismatched_types() {
        let err = classify("V", "2", ArabicRange::Strict).unwrap_err();
        assert_eq!(
            err,
            CalcError::MismatchedOperandTypes {
                left: "V".to_string(),
                right: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_mismatch_ignores_arabic_range() {
        let err = classify("X", "0", ArabicRange::Strict).unwrap_err();
        assert!(matches!(err, CalcError::MismatchedOperandTypes { .. }));
    }

    #[test]
    fn test_unparseable_operand_names_token() {
        let err = classify("5", "five", ArabicRange::Strict).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnparseableOperand {
                token: "five".to_string()
            }
        );

        let err = classify("xi", "V", ArabicRange::Strict).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnparseableOperand {
                token: "xi".to_string()
            }
        );
    }

    #[test]
    fn test_strict_range() {
        let err = classify("11", "2", ArabicRange::Strict).unwrap_err();
        assert_eq!(
            err,
            CalcError::OutOfRangeOperand {
                token: "11".to_string(),
                value: 11,
            }
        );

        let err = classify("1", "0", ArabicRange::Strict).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRangeOperand { value: 0, .. }));
    }

    #[test]
    fn test_unrestricted_range() {
        let pair = classify("-250", "0", ArabicRange::Unrestricted).unwrap();
        assert_eq!(pair.kind(), NumeralKind::Arabic);
        assert_eq!(pair.left.value(), -250);
        assert_eq!(pair.right.value(), 0);
    }

    #[test]
    fn test_default_range_is_unrestricted() {
        assert_eq!(ArabicRange::default(), ArabicRange::Unrestricted);
        assert!(ArabicRange::Strict.accepts(10));
        assert!(!ArabicRange::Strict.accepts(11));
    }
}
