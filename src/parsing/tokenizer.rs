
use regex::Regex;

/// A cursor over an input string. The tokenizer only ever moves
/// forward.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: usize,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: usize,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: 0,
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> usize {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes. Returns a
  /// [`TokenizerMatch`] indicating the substring matched by the
  /// skipped portion. This method will never advance beyond
  /// one-past-the-end of the input.
  ///
  /// `amount` must land on a character boundary.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start,
    }
  }

  /// Consumes and returns the next character, if any.
  pub fn next_char(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.advance(ch.len_utf8());
    Some(ch)
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }
  pub fn start(&self) -> usize {
    self.start
  }
}
