
use super::operator::{OperatorSymbol, OperatorTable};

use serde::{Serialize, Deserialize};
use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of a calculator expression.
///
/// Tokens serialize as the bare number or symbol they stand for, so a
/// token sequence renders in JSON as, for instance, `[12, "+", 3.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
  Number(f64),
  Operator(OperatorSymbol),
  Paren(Paren),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paren {
  #[serde(rename = "(")]
  Open,
  #[serde(rename = ")")]
  Close,
}

impl Token {
  /// The token for a single operator or parenthesis character, if `c`
  /// is one.
  pub fn from_symbol_char(c: char) -> Option<Token> {
    match c {
      '(' => Some(Token::Paren(Paren::Open)),
      ')' => Some(Token::Paren(Paren::Close)),
      c => OperatorTable::get(c).map(|op| Token::Operator(op.symbol())),
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Token::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_operator(&self) -> Option<OperatorSymbol> {
    match self {
      Token::Operator(op) => Some(*op),
      _ => None,
    }
  }

  pub fn is_multiplicative(&self) -> bool {
    self.as_operator().is_some_and(OperatorSymbol::is_multiplicative)
  }
}

impl Paren {
  pub const fn as_char(self) -> char {
    match self {
      Paren::Open => '(',
      Paren::Close => ')',
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{}", n),
      Token::Operator(op) => write!(f, "{}", op),
      Token::Paren(paren) => write!(f, "{}", paren.as_char()),
    }
  }
}

/// Renders a token sequence with single spaces between tokens. The
/// tokenizer ignores the spaces, so rendering and re-tokenizing an
/// infix sequence gives back the same tokens.
pub fn render(tokens: &[Token]) -> String {
  tokens.iter().join(" ")
}
