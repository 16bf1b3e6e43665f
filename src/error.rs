
use crate::parsing::ShuntingYardError;
use crate::stack::StackError;

use thiserror::Error;

/// Everything that can go wrong between a raw expression and its
/// value. Each of these means the input was malformed; evaluating the
/// same input again fails the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluationError {
  #[error("{0}")]
  UnbalancedParentheses(#[from] ShuntingYardError),
  #[error("{0}")]
  StackUnderflow(#[from] StackError),
  #[error("Invalid operator '{0}'")]
  InvalidOperator(String),
  #[error("Missing operator: {count} values left over after evaluation")]
  LeftoverOperands { count: usize },
}
