
//! A minimal LIFO stack used by both the converter and the
//! evaluator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}

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

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  pub fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_stack_size(count)?;
    Ok(self.elements.split_off(self.len() - count))
  }

  /// Pops the top element only if `pred` accepts it.
  pub fn pop_if<F>(&mut self, pred: F) -> Option<T>
  where F: FnOnce(&T) -> bool {
    if pred(self.peek()?) {
      self.elements.pop()
    } else {
      None
    }
  }

  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Consumes the stack, returning its elements from bottom to top.
  pub fn into_vec(self) -> Vec<T> {
    self.elements
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self { elements: Vec::new() }
  }
}

impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}
