
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StackError {
  #[error("Stack underflow: expected at least {expected} operands but found {actual}")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}
