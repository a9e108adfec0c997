use std::fmt;

use crate::error::EngineError;

/// Names the stack that ran out of room, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// Pending operators, functions and left parentheses.
    Operator,
    /// The postfix program being built.
    Output,
    /// One tracker per open function call.
    Arity,
    /// Operands during postfix evaluation.
    Value,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Operator => "operator",
            Self::Output => "output",
            Self::Arity => "arity",
            Self::Value => "value",
        };
        f.write_str(name)
    }
}

/// A vector-backed stack that refuses to grow past a fixed capacity.
///
/// Every push is checked; overflowing returns
/// [`EngineError::CapacityExceeded`] naming the stack.
///
/// # Example
/// ```
/// use yardcalc::util::stack::{BoundedStack, StackKind};
///
/// let mut stack = BoundedStack::new(StackKind::Value, 2);
/// stack.push(1.0).unwrap();
/// stack.push(2.0).unwrap();
/// assert!(stack.push(3.0).is_err());
/// assert_eq!(stack.pop(), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    kind:     StackKind,
    capacity: usize,
    items:    Vec<T>,
}

impl<T> BoundedStack<T> {
    #[must_use]
    pub const fn new(kind: StackKind, capacity: usize) -> Self {
        Self { kind,
               capacity,
               items: Vec::new() }
    }

    /// Pushes `item`, failing once the stack already holds `capacity` items.
    pub fn push(&mut self, item: T) -> Result<(), EngineError> {
        if self.items.len() >= self.capacity {
            return Err(EngineError::CapacityExceeded { stack:    self.kind,
                                                       capacity: self.capacity, });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the top `count` items, returned bottom-first.
    ///
    /// Returns `None` and leaves the stack untouched if fewer than `count`
    /// items are present.
    pub fn pop_many(&mut self, count: usize) -> Option<Vec<T>> {
        let start = self.items.len().checked_sub(count)?;
        Some(self.items.split_off(start))
    }

    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Display> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
