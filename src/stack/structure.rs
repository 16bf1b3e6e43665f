
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top two elements, returned as `(below, top)`. This is
  /// the `(left, right)` operand order of a binary operator. In case
  /// of a [`StackError`], `self` will NOT be modified.
  pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
    self.check_stack_size(2)?;
    let top = self.pop()?;
    let below = self.pop()?;
    Ok((below, top))
  }

  /// The top of the stack, if any.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self { elements: Vec::new() }
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}
