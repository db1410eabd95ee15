
/// Whether `token` looks like an unsigned decimal literal: only ASCII
/// digits and at most one `.`, and not empty.
///
/// Signs, exponents, and letters are all rejected, so neither
/// negative literals nor variable names count as numbers.
pub fn is_valid_double(token: &str) -> bool {
  let mut seen_dot = false;
  for ch in token.chars() {
    match ch {
      '0'..='9' => {}
      '.' if !seen_dot => seen_dot = true,
      _ => return false,
    }
  }
  !token.is_empty()
}
