
use super::{Associativity, Operator, OperatorSymbol, Precedence};

use phf::phf_map;

static OPERATORS: phf::Map<char, Operator> = phf_map! {
  '+' => Operator::new(OperatorSymbol::Plus, Associativity::Left, Precedence::new(1)),
  '-' => Operator::new(OperatorSymbol::Minus, Associativity::Left, Precedence::new(1)),
  '×' => Operator::new(OperatorSymbol::Times, Associativity::Left, Precedence::new(2)),
  '÷' => Operator::new(OperatorSymbol::Divide, Associativity::Left, Precedence::new(2)),
  '%' => Operator::new(OperatorSymbol::Percent, Associativity::Right, Precedence::new(3)),
};

/// The fixed table of calculator operators, keyed by the character
/// the user types. This is the only place operator precedence and
/// associativity are defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorTable;

impl OperatorTable {
  pub fn get(c: char) -> Option<&'static Operator> {
    OPERATORS.get(&c)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_by_char() {
    let op = OperatorTable::get('×').unwrap();
    assert_eq!(op.symbol(), OperatorSymbol::Times);
    assert_eq!(op.precedence(), Precedence::new(2));
    assert_eq!(op.associativity(), Associativity::Left);
    assert!(OperatorTable::get('*').is_none());
    assert!(OperatorTable::get('(').is_none());
  }

  #[test]
  fn test_table_agrees_with_symbols() {
    for symbol in OperatorSymbol::ALL {
      let op = OperatorTable::get(symbol.as_char()).unwrap();
      assert_eq!(op.symbol(), symbol);
      assert_eq!(symbol.operator(), op);
    }
  }

  #[test]
  fn test_relative_precedence() {
    let prec = |c| OperatorTable::get(c).unwrap().precedence();
    assert_eq!(prec('+'), prec('-'));
    assert_eq!(prec('×'), prec('÷'));
    assert!(prec('×') > prec('+'));
    // Some older tables put % level with × and ÷ and left-associative.
    // We take the richer table, where % binds tightest and associates
    // to the right.
    assert!(prec('%') > prec('×'));
    assert_eq!(OperatorTable::get('%').unwrap().associativity(), Associativity::Right);
  }
}
