
//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

/// Runs of ASCII whitespace only. Characters such as U+00A0 are not
/// separators and stay inside their token.
pub static WHITESPACE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

/// A maximal run of ASCII letters and digits, anchored at the start
/// of the input.
pub static ALPHANUMERIC_RUN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+").unwrap());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_whitespace_split() {
    let tokens: Vec<_> = WHITESPACE_RE.split("3  4\t+").collect();
    assert_eq!(tokens, vec!["3", "4", "+"]);
    let tokens: Vec<_> = WHITESPACE_RE.split("1\x0B2\x0C3\r\n4").collect();
    assert_eq!(tokens, vec!["1", "2", "3", "4"]);
  }

  #[test]
  fn test_unicode_space_is_not_a_separator() {
    let tokens: Vec<_> = WHITESPACE_RE.split("3\u{a0}4 +").collect();
    assert_eq!(tokens, vec!["3\u{a0}4", "+"]);
  }

  #[test]
  fn test_alphanumeric_run() {
    assert_eq!(ALPHANUMERIC_RUN_RE.find("abc12+3").map(|m| m.as_str()), Some("abc12"));
    assert_eq!(ALPHANUMERIC_RUN_RE.find("+3"), None);
    assert_eq!(ALPHANUMERIC_RUN_RE.find("é1"), None);
  }
}
