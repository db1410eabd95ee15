

/// One of the five single-character binary operators understood by
/// the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

/// The binding level of an operator symbol. Only two levels exist:
/// multiplicative operators bind tighter than everything else.
///
/// Note that `^` falls into the [`LOW`](Precedence::LOW) level, the
/// same as `+` and `-`. Callers relying on conventional
/// exponentiation precedence should parenthesize explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Operator {
  pub fn from_char(ch: char) -> Option<Operator> {
    match ch {
      '+' => Some(Operator::Plus),
      '-' => Some(Operator::Minus),
      '*' => Some(Operator::Times),
      '/' => Some(Operator::Divide),
      '^' => Some(Operator::Power),
      _ => None,
    }
  }

  /// Parses a whole token, which must consist of exactly one
  /// operator character.
  pub fn from_token(token: &str) -> Option<Operator> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => Operator::from_char(ch),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Operator::Plus => '+',
      Operator::Minus => '-',
      Operator::Times => '*',
      Operator::Divide => '/',
      Operator::Power => '^',
    }
  }
}

impl Precedence {
  pub const LOW: Precedence = Precedence(1);
  pub const HIGH: Precedence = Precedence(2);

  /// The precedence of an arbitrary character. Anything other than
  /// `*` and `/`, including characters which are not operators at
  /// all, is [`LOW`](Precedence::LOW).
  pub fn of_symbol(ch: char) -> Precedence {
    match ch {
      '*' | '/' => Precedence::HIGH,
      _ => Precedence::LOW,
    }
  }
}

/// Returns true iff `op1` binds at least as tightly as `op2`.
pub fn precedence(op1: char, op2: char) -> bool {
  Precedence::of_symbol(op1) >= Precedence::of_symbol(op2)
}
