
//! Evaluation of whitespace-delimited postfix expressions.

mod error;
mod number;

pub use error::EvalError;
pub use number::is_valid_double;

use crate::parsing::operator::Operator;
use crate::stack::Stack;
use crate::util::regexes::WHITESPACE_RE;

use log::{debug, trace};

/// The value reported alongside a failed evaluation, for callers
/// using the flat value-and-flag convention.
pub const ERROR_SENTINEL: f64 = -1.0;

/// Evaluates a postfix expression. Numbers must be unsigned decimal
/// literals (see [`is_valid_double`]), and the supported operators
/// are `+`, `-`, `*`, and `/`.
///
/// Evaluation stops at the first bad token. On success, exactly one
/// value must remain on the stack.
pub fn evaluate_postfix(postfix: &str) -> Result<f64, EvalError> {
  let result = evaluate_tokens(postfix);
  if let Err(err) = &result {
    debug!("evaluation of {:?} failed: {}", postfix, err);
  }
  result
}

/// As [`evaluate_postfix`], but flattens the result to a value and an
/// error flag. On failure the value is always [`ERROR_SENTINEL`], so
/// check the flag rather than the value.
pub fn evaluate_flagged(postfix: &str) -> (f64, bool) {
  match evaluate_postfix(postfix) {
    Ok(value) => (value, false),
    Err(_) => (ERROR_SENTINEL, true),
  }
}

fn evaluate_tokens(postfix: &str) -> Result<f64, EvalError> {
  let mut values: Stack<f64> = Stack::new();
  for token in WHITESPACE_RE.split(postfix).filter(|t| !t.is_empty()) {
    trace!("token {:?}, stack depth {}", token, values.len());
    if is_valid_double(token) {
      // A lone "." passes validation but is not a float.
      let value = token.parse::<f64>().map_err(|_| EvalError::InvalidToken(token.to_owned()))?;
      values.push(value);
    } else if let Some(op) = Arithmetic::from_token(token) {
      let operands = values.pop_several(2)
        .map_err(|err| EvalError::not_enough_operands(op.symbol(), err))?;
      let (a, b) = (operands[0], operands[1]);
      values.push(op.apply(a, b)?);
    } else {
      return Err(EvalError::InvalidToken(token.to_owned()));
    }
  }
  match values.into_vec().as_slice() {
    [result] => Ok(*result),
    rest => Err(EvalError::WrongResultCount(rest.len())),
  }
}

/// The operators the evaluator understands. `^` is produced by the
/// converter but is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arithmetic {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Arithmetic {
  fn from_token(token: &str) -> Option<Arithmetic> {
    match Operator::from_token(token)? {
      Operator::Plus => Some(Arithmetic::Add),
      Operator::Minus => Some(Arithmetic::Subtract),
      Operator::Times => Some(Arithmetic::Multiply),
      Operator::Divide => Some(Arithmetic::Divide),
      Operator::Power => None,
    }
  }

  fn symbol(self) -> char {
    match self {
      Arithmetic::Add => '+',
      Arithmetic::Subtract => '-',
      Arithmetic::Multiply => '*',
      Arithmetic::Divide => '/',
    }
  }

  fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
    match self {
      Arithmetic::Add => Ok(a + b),
      Arithmetic::Subtract => Ok(a - b),
      Arithmetic::Multiply => Ok(a * b),
      Arithmetic::Divide => {
        if b == 0.0 {
          Err(EvalError::DivisionByZero)
        } else {
          Ok(a / b)
        }
      }
    }
  }
}
