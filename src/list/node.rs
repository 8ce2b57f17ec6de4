//! Chain nodes of [`SimpleList`](crate::list::SimpleList).
//!
//! Nodes are heap-allocated and linked through raw `NonNull` pointers, the
//! way `std::collections::LinkedList` does it: the list owns every node
//! reachable from its head and frees them itself, which lets it also keep a
//! non-owning tail pointer for O(1) append.

use std::fmt;
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One element of a singly-linked chain.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node and leaks it into a raw pointer.
    ///
    /// Ownership passes to the caller, who must eventually hand the pointer
    /// to [`Node::into_value`].
    pub(crate) fn alloc(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next: None })))
    }

    /// Frees a node and returns its value.
    ///
    /// # Safety
    /// `ptr` must come from [`Node::alloc`], must not have been freed, and no
    /// reference into the node may outlive this call.
    pub(crate) unsafe fn into_value(ptr: NonNull<Node<T>>) -> (T, Link<T>) {
        // SAFETY: upheld by the caller.
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        (node.value, node.next)
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, if any.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: `next` is either `None` or a live node owned by the same
        // list as `self`; the borrow of `self` keeps that list borrowed.
        self.next.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Returns `true` if this is the last node of its chain.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_last", &self.is_last())
            .finish()
    }
}
