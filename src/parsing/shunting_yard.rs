
//! Infix to postfix conversion, via the classic shunting yard
//! algorithm.
//!
//! Conversion never fails. Unbalanced parentheses and unsupported
//! characters are tolerated silently, and the resulting postfix text
//! may be rejected later by the evaluator.

use super::operator::{Operator, precedence};
use super::tokenizer::TokenizerState;
use crate::stack::Stack;
use crate::util::regexes::ALPHANUMERIC_RUN_RE;

use log::trace;

/// A value on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpStackValue {
  LeftParen,
  Operator(Operator),
}

impl OpStackValue {
  fn symbol(self) -> char {
    match self {
      OpStackValue::LeftParen => '(',
      OpStackValue::Operator(op) => op.symbol(),
    }
  }
}

/// Converts `infix` to postfix, appending the result to `output`.
/// Existing contents of `output` are left untouched.
///
/// Every emitted token is followed by a single space, except the
/// final operator drained from the stack at the end of the input.
pub fn convert_to_postfix(infix: &str, output: &mut String) {
  let mut operator_stack: Stack<OpStackValue> = Stack::new();
  let mut state = TokenizerState::new(infix.trim());

  while !state.is_eof() {
    if let Some(operand) = state.read_regex(&ALPHANUMERIC_RUN_RE) {
      trace!("operand {:?} at {}", operand.as_str(), operand.start());
      output.push_str(operand.as_str());
      output.push(' ');
      continue;
    }

    let pos = state.current_pos();
    let Some(sym) = state.next_char() else { break };
    match sym {
      '(' => {
        operator_stack.push(OpStackValue::LeftParen);
      }
      ')' => {
        // Pop down to the matching paren, then discard it. A missing
        // paren is ignored.
        while let Some(value) = operator_stack.pop_if(|v| *v != OpStackValue::LeftParen) {
          emit(output, value);
        }
        if operator_stack.pop_if(|v| *v == OpStackValue::LeftParen).is_none() {
          trace!("unmatched ')' at {}", pos);
        }
      }
      _ => {
        let Some(op) = Operator::from_char(sym) else {
          trace!("skipping {:?} at {}", sym, pos);
          continue;
        };
        while let Some(value) = operator_stack.pop_if(|v| match v {
          OpStackValue::LeftParen => false,
          OpStackValue::Operator(top) => precedence(top.symbol(), op.symbol()),
        }) {
          emit(output, value);
        }
        operator_stack.push(OpStackValue::Operator(op));
      }
    }
  }

  // Drain remaining operators. Any unmatched '(' goes out with them.
  while let Ok(value) = operator_stack.pop() {
    output.push(value.symbol());
    if !operator_stack.is_empty() {
      output.push(' ');
    }
  }
}

/// Converts `infix` to a freshly allocated postfix string.
pub fn to_postfix(infix: &str) -> String {
  let mut output = String::new();
  convert_to_postfix(infix, &mut output);
  output
}

fn emit(output: &mut String, value: OpStackValue) {
  output.push(value.symbol());
  output.push(' ');
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokens(postfix: &str) -> Vec<&str> {
    postfix.split_whitespace().collect()
  }

  #[test]
  fn test_higher_precedence_on_right() {
    assert_eq!(to_postfix("3 + 4 * 2"), "3 4 2 * +");
  }

  #[test]
  fn test_higher_precedence_on_left() {
    assert_eq!(to_postfix("3 * 4 + 2"), "3 4 * 2 +");
  }

  #[test]
  fn test_left_assoc_op() {
    assert_eq!(to_postfix("1 - 2 - 3"), "1 2 - 3 -");
    assert_eq!(to_postfix("8 / 4 / 2"), "8 4 / 2 /");
  }

  #[test]
  fn test_parens() {
    assert_eq!(to_postfix("(3 + 4) * 2"), "3 4 + 2 *");
    assert_eq!(tokens(&to_postfix("((1+2)*(3-4))/5")), vec!["1", "2", "+", "3", "4", "-", "*", "5", "/"]);
  }

  #[test]
  fn test_trailing_space_after_final_paren() {
    // Nothing left on the stack to drain, so the operator popped by
    // ')' keeps its trailing space.
    assert_eq!(to_postfix("(3+4)"), "3 4 + ");
  }

  #[test]
  fn test_multichar_operands() {
    assert_eq!(to_postfix("12+abc*3x"), "12 abc 3x * +");
  }

  #[test]
  fn test_whitespace_is_irrelevant() {
    assert_eq!(to_postfix("  3+4*2\t"), to_postfix("3 + 4 * 2"));
  }

  #[test]
  fn test_power_is_not_special() {
    // '^' shares its level with '+' and '-', so it is popped by a
    // later '+' and does not pop a preceding '*'.
    assert_eq!(to_postfix("2 ^ 3 + 1"), "2 3 ^ 1 +");
    assert_eq!(to_postfix("2 * 3 ^ 2"), "2 3 * 2 ^");
    assert_eq!(to_postfix("2 ^ 3 * 2"), "2 3 2 * ^");
  }

  #[test]
  fn test_unsupported_characters_skipped() {
    assert_eq!(to_postfix("3 % 4 $ + 1"), "3 4 1 +");
    assert_eq!(to_postfix("3 é 4"), "3 4 ");
  }

  #[test]
  fn test_unmatched_close_paren() {
    assert_eq!(to_postfix("3 + 4)"), "3 4 + ");
    assert_eq!(to_postfix(")"), "");
  }

  #[test]
  fn test_unmatched_open_paren() {
    assert_eq!(to_postfix("(3 + 4"), "3 4 + (");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(to_postfix(""), "");
    assert_eq!(to_postfix("   "), "");
  }

  #[test]
  fn test_appends_to_existing_output() {
    let mut output = String::from("1 ");
    convert_to_postfix("2 + 3", &mut output);
    assert_eq!(output, "1 2 3 +");
  }
}
