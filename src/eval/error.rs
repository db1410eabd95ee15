
use crate::stack::StackError;

use thiserror::Error;

/// Reasons a postfix expression can fail to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Operator '{operator}' needs 2 operands but only {found} available")]
  NotEnoughOperands {
    operator: char,
    found: usize,
  },
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Invalid token '{0}'")]
  InvalidToken(String),
  #[error("Expected exactly one result but {0} values remain")]
  WrongResultCount(usize),
}

impl EvalError {
  pub fn not_enough_operands(operator: char, err: StackError) -> Self {
    match err {
      StackError::NotEnoughElements { actual, .. } => {
        EvalError::NotEnoughOperands { operator, found: actual }
      }
    }
  }
}
