//! `SimpleStack`: LIFO view over a [`SimpleList`].
//!
//! The stack adds no state of its own. `push` appends at the tail in O(1);
//! `pop` removes the tail and, because the chain is singly linked, walks to
//! the new tail in O(len).

use std::fmt;

use crate::list::simple_list::{Iter, SimpleList};

/// LIFO stack backed by a singly-linked list.
pub struct SimpleStack<T> {
    list: SimpleList<T>,
}

impl<T> SimpleStack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            list: SimpleList::new(),
        }
    }

    /// Pushes `value` on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.add(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_last()
    }

    /// Like [`pop`](Self::pop), but yields `T::default()` on an empty stack.
    ///
    /// A default value popped from a non-empty stack is indistinguishable
    /// from the empty case; prefer `pop` unless that is acceptable.
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// The top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Values from bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Read-only access to the underlying list (positions count from the bottom).
    pub fn as_list(&self) -> &SimpleList<T> {
        &self.list
    }

    pub fn into_list(self) -> SimpleList<T> {
        self.list
    }
}

impl<T> Default for SimpleStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<SimpleList<T>> for SimpleStack<T> {
    /// The list's last element becomes the top of the stack.
    fn from(list: SimpleList<T>) -> Self {
        Self { list }
    }
}

impl<T> Extend<T> for SimpleStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for SimpleStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Clone for SimpleStack<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleStack")
            .field("items", &self.list)
            .finish()
    }
}
