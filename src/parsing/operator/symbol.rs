
use super::{Operator, OperatorTable};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// The operator characters a calculator expression may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorSymbol {
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "-")]
  Minus,
  #[serde(rename = "×")]
  Times,
  #[serde(rename = "÷")]
  Divide,
  #[serde(rename = "%")]
  Percent,
}

impl OperatorSymbol {
  pub const ALL: [OperatorSymbol; 5] = [
    OperatorSymbol::Plus,
    OperatorSymbol::Minus,
    OperatorSymbol::Times,
    OperatorSymbol::Divide,
    OperatorSymbol::Percent,
  ];

  pub const fn as_char(self) -> char {
    match self {
      OperatorSymbol::Plus => '+',
      OperatorSymbol::Minus => '-',
      OperatorSymbol::Times => '×',
      OperatorSymbol::Divide => '÷',
      OperatorSymbol::Percent => '%',
    }
  }

  /// The precedence and associativity of this symbol, as recorded in
  /// the [`OperatorTable`].
  pub fn operator(self) -> &'static Operator {
    // unwrap: Every symbol's character is a key of the operator table.
    OperatorTable::get(self.as_char()).unwrap()
  }

  /// `×` and `÷`. A percent sign followed by one of these acts as a
  /// plain fraction rather than a share of the running total.
  pub const fn is_multiplicative(self) -> bool {
    matches!(self, OperatorSymbol::Times | OperatorSymbol::Divide)
  }
}

impl Display for OperatorSymbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}
