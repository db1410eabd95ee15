
use crate::eval::{self, EvalError};
use crate::parsing::shunting_yard;

use serde::{Serialize, Deserialize};

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An arithmetic expression, stored in both infix and postfix form.
///
/// The postfix form is derived from the infix form by
/// [`convert_to_postfix`](Expression::convert_to_postfix), which
/// appends to the existing postfix text rather than replacing it. Call
/// it at most once per instance; a second call leaves the two
/// conversions concatenated.
///
/// An `Expression` has no internal synchronization. Concurrent
/// conversions on one instance must be serialized by the caller,
/// which `&mut self` already enforces in safe code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
  infix: String,
  postfix: String,
}

impl Expression {
  /// An expression with empty infix and postfix text.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_infix(infix: impl Into<String>) -> Self {
    Self {
      infix: infix.into(),
      postfix: String::new(),
    }
  }

  pub fn infix(&self) -> &str {
    &self.infix
  }

  pub fn postfix(&self) -> &str {
    &self.postfix
  }

  pub fn convert_to_postfix(&mut self) {
    shunting_yard::convert_to_postfix(&self.infix, &mut self.postfix);
  }

  /// Evaluates the stored postfix text.
  pub fn evaluate(&self) -> Result<f64, EvalError> {
    eval::evaluate_postfix(&self.postfix)
  }

  /// Evaluates the stored postfix text, returning the value and an
  /// error flag. See [`eval::evaluate_flagged`].
  pub fn evaluate_flagged(&self) -> (f64, bool) {
    eval::evaluate_flagged(&self.postfix)
  }

  /// Renders both forms as a JSON-shaped string. The text is inserted
  /// verbatim, so an expression containing `"` or control characters
  /// produces malformed JSON. Use the `Serialize` impl for properly
  /// escaped output.
  pub fn to_json(&self) -> String {
    format!(r#"{{"infix":"{}", "postfix":"{}"}}"#, self.infix, self.postfix)
  }
}

impl Display for Expression {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.infix)
  }
}

impl FromStr for Expression {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Expression::from_infix(s))
  }
}
