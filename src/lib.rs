
//! Conversion of infix arithmetic expressions to postfix (Reverse
//! Polish) notation, and evaluation of the postfix form.

pub mod eval;
pub mod expression;
pub mod parsing;
pub mod stack;
pub mod util;

pub use eval::EvalError;
pub use expression::Expression;
