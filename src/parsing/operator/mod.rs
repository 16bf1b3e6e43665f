
mod associativity;
mod precedence;
mod symbol;
mod table;

pub use associativity::Associativity;
pub use precedence::Precedence;
pub use symbol::OperatorSymbol;
pub use table::OperatorTable;

/// An infix operator together with the precedence and associativity
/// the shunting yard algorithm uses to place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
  symbol: OperatorSymbol,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  pub const fn new(symbol: OperatorSymbol, assoc: Associativity, prec: Precedence) -> Operator {
    Operator { symbol, assoc, prec }
  }

  pub fn symbol(&self) -> OperatorSymbol {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// True if `self`, sitting on the operator stack, must be emitted
  /// before `incoming` can be pushed.
  pub fn yields_before(&self, incoming: &Operator) -> bool {
    self.prec > incoming.prec ||
      (self.prec == incoming.prec && incoming.assoc.is_left_assoc())
  }
}
