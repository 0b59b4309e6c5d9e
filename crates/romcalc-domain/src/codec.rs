//! Conversions between Roman numerals and integers.
//!
//! Two directions with different domains:
//! - [`decode`] accepts only the ten operand forms I..X
//! - [`encode`] writes any positive value up to [`ROMAN_CAP`] in canonical
//!   subtractive notation, and falls back to a decimal literal above it

use std::num::NonZeroU32;

/// Largest value [`encode`] writes as a Roman numeral.
pub const ROMAN_CAP: u32 = 100;

/// Operand forms accepted by [`decode`], indexed by value - 1.
pub(crate) const OPERAND_NUMERALS: [&str; 10] =
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Value/digit pairs for greedy encoding, largest first.
const ENCODE_TABLE: [(u32, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Look up a restricted Roman numeral.
///
/// Returns `None` for anything outside the exact set I..X, including
/// lowercase forms and larger numerals such as `XI`.
pub fn decode(token: &str) -> Option<u32> {
    OPERAND_NUMERALS
        .iter()
        .position(|numeral| *numeral == token)
        .map(|index| index as u32 + 1)
}

/// Encode a positive value as a Roman numeral.
///
/// Values above [`ROMAN_CAP`] are returned as their decimal literal.
pub fn encode(value: NonZeroU32) -> String {
    let mut remainder = value.get();
    if remainder > ROMAN_CAP {
        return remainder.to_string();
    }

    let mut numeral = String::new();
    for (step, digits) in ENCODE_TABLE {
        while remainder >= step {
            numeral.push_str(digits);
            remainder -= step;
        }
    }
    numeral
}

/// Parse any canonical Roman numeral in 1..=[`ROMAN_CAP`].
///
/// This is the exact inverse of [`encode`] within the cap: non-canonical
/// spellings such as `IIII` or `VX` are rejected.
pub fn parse_canonical(numeral: &str) -> Option<u32> {
    if numeral.is_empty() {
        return None;
    }

    let mut rest = numeral;
    let mut total = 0u32;
    for (step, digits) in ENCODE_TABLE {
        while let Some(tail) = rest.strip_prefix(digits) {
            total += step;
            rest = tail;
        }
    }

    if !rest.is_empty() || total == 0 || total > ROMAN_CAP {
        return None;
    }

    // Greedy stripping accepts a few non-canonical strings (e.g. "IXI");
    // only the spelling encode would produce is valid.
    let canonical = NonZeroU32::new(total).map(encode)?;
    (canonical == numeral).then_some(total)
}
