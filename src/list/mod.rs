//! Singly-linked sequence containers.
//!
//! [`SimpleList`] offers O(1) append, O(k) access to position `k`, lazy
//! restartable iteration and an in-place quicksort that runs on the chain
//! itself (see [`sort`]). [`SimpleStack`] narrows it to push/pop.

pub mod node;
pub mod simple_list;
pub mod sort;
pub mod stack;

pub use node::Node;
pub use simple_list::{IntoIter, Iter, SimpleList};
pub use stack::SimpleStack;
