//! romcalc Domain Layer
//!
//! This crate contains the calculator's core rules: recognising numerals,
//! converting between Roman and arabic forms, deciding which numeral system
//! governs an expression, and evaluating it. It performs no I/O; the session
//! loop lives in `romcalc-cli`.
//!
//! ## Key Concepts
//!
//! - **Roman numeral (restricted)**: one of I, II, ... X, denoting 1 to 10
//! - **Classification**: deciding whether both operands are arabic or Roman
//! - **Answer**: the evaluated value, rendered in the numeral system of its input
//!
//! ## Example
//!
//! ```
//! use romcalc_domain::{ArabicRange, Calculator};
//!
//! let calculator = Calculator::new(ArabicRange::Strict);
//! assert_eq!(calculator.evaluate_line("IV + III").unwrap().to_string(), "VII");
//! assert_eq!(calculator.evaluate_line("3 * 4").unwrap().to_string(), "12");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod codec;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod numeral;

// Re-exports for convenience
pub use classifier::{classify, ArabicRange, OperandPair};
pub use codec::ROMAN_CAP;
pub use error::{CalcError, Result};
pub use evaluator::{evaluate, Operator};
pub use expression::{Answer, Calculator, Expression};
pub use numeral::{NumeralKind, Operand, RomanNumeral};
