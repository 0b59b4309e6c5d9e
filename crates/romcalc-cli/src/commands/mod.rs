//! Command implementations.

pub mod convert;
pub mod eval;
pub mod table;

pub use self::convert::execute_convert;
pub use self::eval::{evaluate_expression, execute_eval};
pub use self::table::execute_table;
