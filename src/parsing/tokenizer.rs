
//! Reads a raw calculator expression into infix [`Token`]s.
//!
//! The tokenizer never fails. Digits and decimal points collect into
//! a pending literal, operator and parenthesis characters end that
//! literal and produce their own token, and every other character is
//! dropped without a trace.

use super::token::Token;

use tracing::trace;

pub const DECIMAL_POINT: char = '.';

/// Scanning state for a single expression.
#[derive(Debug, Clone, Default)]
pub struct TokenizerState {
  tokens: Vec<Token>,
  pending_literal: String,
}

impl TokenizerState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn read_char(&mut self, c: char) {
    if c.is_ascii_digit() || c == DECIMAL_POINT {
      self.pending_literal.push(c);
    } else if let Some(token) = Token::from_symbol_char(c) {
      self.flush_literal();
      self.tokens.push(token);
    }
  }

  pub fn read_str(&mut self, input: &str) {
    for c in input.chars() {
      self.read_char(c);
    }
  }

  /// Whether a numeric literal has been started but not yet emitted.
  pub fn has_pending_literal(&self) -> bool {
    !self.pending_literal.is_empty()
  }

  fn flush_literal(&mut self) {
    if self.has_pending_literal() {
      self.tokens.push(Token::Number(parse_literal(&self.pending_literal)));
      self.pending_literal.clear();
    }
  }

  pub fn finish(mut self) -> Vec<Token> {
    self.flush_literal();
    self.tokens
  }
}

pub fn tokenize(expression: &str) -> Vec<Token> {
  let mut state = TokenizerState::new();
  state.read_str(expression);
  let tokens = state.finish();
  trace!(count = tokens.len(), "tokenized expression");
  tokens
}

/// Parses a literal made of ASCII digits and decimal points.
///
/// A second decimal point ends the literal, so `1.2.3` reads as
/// `1.2`. A literal with no digits at all, such as `.`, is `NaN`.
pub fn parse_literal(literal: &str) -> f64 {
  let end = literal.match_indices(DECIMAL_POINT)
    .nth(1)
    .map_or(literal.len(), |(i, _)| i);
  literal[..end].parse().unwrap_or(f64::NAN)
}
