//! `SimpleList`: a singly-linked list with position-based access.
//!
//! The list owns a forward chain of [`Node`]s and keeps a non-owning pointer
//! to the last node so that [`add`](SimpleList::add) is O(1). There is no
//! index table: reaching position `k` walks the chain from the head `k`
//! times, so [`get`](SimpleList::get), [`set`](SimpleList::set) and
//! [`node`](SimpleList::node) are O(k).

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::collections_error::CollectionsError;
use crate::debug_invariants::DebugInvariants;
use crate::list::node::{Link, Node};

/// Singly-linked list of `T`.
///
/// Invariants:
/// - empty list: `head` and `tail` are both `None` and `len == 0`;
/// - otherwise following `next` from `head` `len - 1` times reaches exactly
///   `tail`, whose `next` is `None`.
pub struct SimpleList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list exclusively owns its nodes, like `Vec<T>` owns its buffer.
unsafe impl<T: Send> Send for SimpleList<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for SimpleList<T> {}

impl<T> SimpleList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` after the current last element in O(1).
    pub fn add(&mut self, value: T) {
        let node = Node::alloc(value);
        match self.tail {
            None => self.head = Some(node),
            // SAFETY: `tail` is the live last node of this list and `&mut self`
            // guarantees no outstanding references into the chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Returns the node at `position`, walking from the head.
    ///
    /// Nodes are only ever lent out shared. The links belong to the list, so
    /// there is no way to get a `&mut Node` and rewire a chain from outside:
    ///
    /// ```compile_fail
    /// use figure_collections::prelude::*;
    ///
    /// let a = SimpleList::from([1]);
    /// let b = SimpleList::from([2]);
    /// std::mem::swap(a.node(0).unwrap(), b.node(0).unwrap());
    /// ```
    ///
    /// # Errors
    /// [`CollectionsError::PositionOutOfRange`] if `position >= len`.
    pub fn node(&self, position: usize) -> Result<&Node<T>, CollectionsError> {
        let ptr = self.node_ptr(position)?;
        // SAFETY: live node owned by `self`, borrowed for the lifetime of `&self`.
        Ok(unsafe { &*ptr.as_ptr() })
    }

    /// Value at `position`.
    pub fn get(&self, position: usize) -> Result<&T, CollectionsError> {
        self.node(position).map(Node::value)
    }

    /// Mutable value at `position`.
    ///
    /// Only the value is lent mutably; the node's link stays private.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, CollectionsError> {
        let ptr = self.node_ptr(position)?;
        // SAFETY: live node owned by `self`; `&mut self` makes the borrow unique.
        Ok(unsafe { &mut (*ptr.as_ptr()).value })
    }

    /// Replaces the value at `position`, returning the previous one.
    pub fn set(&mut self, position: usize, value: T) -> Result<T, CollectionsError> {
        self.get_mut(position)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// First value, in O(1).
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by `self`.
        self.head.map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    /// Last value, in O(1).
    pub fn last(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by `self`.
        self.tail.map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    /// Lazy forward iterator over the values.
    ///
    /// Iteration does not touch the list, so any number of iterators may run
    /// side by side and each restarts from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Removes and returns the last value.
    ///
    /// The chain is singly linked, so finding the new tail walks to position
    /// `len - 2`: O(len).
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        let old_tail = self.tail?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let new_tail = self.walk(self.len - 2);
            // SAFETY: `new_tail` is a live node of this list and `&mut self`
            // guarantees exclusive access.
            unsafe { (*new_tail.as_ptr()).next = None };
            self.tail = Some(new_tail);
        }
        self.len -= 1;
        // SAFETY: `old_tail` is no longer reachable from the chain.
        let (value, _) = unsafe { Node::into_value(old_tail) };
        crate::debug_invariants!(&*self, "SimpleList::remove_last");
        Some(value)
    }

    /// Removes and returns the first value in O(1).
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let old_head = self.head?;
        // SAFETY: `old_head` is unlinked from the list right below.
        let (value, next) = unsafe { Node::into_value(old_head) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Bounds-checked position walk.
    pub(crate) fn node_ptr(&self, position: usize) -> Result<NonNull<Node<T>>, CollectionsError> {
        if position >= self.len {
            return Err(CollectionsError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        Ok(self.walk(position))
    }

    /// Walks from the head `position` times.
    ///
    /// Callers guarantee `position < len`.
    pub(crate) fn walk(&self, position: usize) -> NonNull<Node<T>> {
        debug_assert!(position < self.len, "walk({position}) on list of len {}", self.len);
        let Some(mut cur) = self.head else {
            unreachable!("walk on an empty list");
        };
        for _ in 0..position {
            // SAFETY: every pointer reachable from `head` is a live node.
            cur = match unsafe { (*cur.as_ptr()).next } {
                Some(next) => next,
                None => unreachable!("chain is shorter than len"),
            };
        }
        cur
    }
}

impl<T> Drop for SimpleList<T> {
    fn drop(&mut self) {
        // Iterative, so long chains cannot overflow the call stack.
        self.clear();
    }
}

impl<T> Default for SimpleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SimpleList<T> {}

impl<T> Extend<T> for SimpleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for SimpleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> DebugInvariants for SimpleList<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "SimpleList");
    }

    fn validate_invariants(&self) -> Result<(), CollectionsError> {
        let violation = |msg: String| Err(CollectionsError::InvariantViolation(msg));
        match (self.head, self.tail) {
            (None, None) if self.len == 0 => return Ok(()),
            (Some(_), Some(_)) if self.len > 0 => {}
            (head, tail) => {
                return violation(format!(
                    "head present = {}, tail present = {}, len = {}",
                    head.is_some(),
                    tail.is_some(),
                    self.len
                ));
            }
        }

        let mut reachable = 0usize;
        let mut last = None;
        let mut cur = self.head;
        // Bounded by len + 1 so a corrupted (cyclic) chain still terminates.
        while let Some(ptr) = cur {
            reachable += 1;
            if reachable > self.len {
                return violation(format!("more than {} nodes reachable from head", self.len));
            }
            last = Some(ptr);
            // SAFETY: every pointer reachable from `head` is a live node.
            cur = unsafe { (*ptr.as_ptr()).next };
        }
        if reachable != self.len {
            return violation(format!("{reachable} nodes reachable, len = {}", self.len));
        }
        if last != self.tail {
            return violation("tail is not the last reachable node".to_string());
        }
        Ok(())
    }
}

/// Borrowing iterator returned by [`SimpleList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

// SAFETY: behaves like `&'a T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: behaves like `&'a T`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|ptr| {
            // SAFETY: the list is borrowed for `'a`, keeping the node alive.
            let node: &'a Node<T> = unsafe { &*ptr.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `SimpleList::into_iter`.
pub struct IntoIter<T>(SimpleList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SimpleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for SimpleList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(SimpleList<String>: Send, Sync);
    assert_not_impl_any!(SimpleList<std::rc::Rc<u8>>: Send, Sync);
    assert_impl_all!(Iter<'static, u8>: Send, Sync);
}
