//! Emptiness policies: what "no value present" means for a store cell.
//!
//! A policy supplies the canonical empty value returned for cells that were
//! never written, and a predicate that recognizes it. Implementations must
//! satisfy `policy.is_empty(&policy.empty_value())` and have no side effects.
//! Stores hold their policy behind an `Arc`, so one policy may serve many
//! stores.

use std::fmt::Debug;

/// Strategy defining the empty value of a cell of type `T`.
pub trait EmptinessPolicy<T>: Debug {
    /// The value returned for a cell that was never written.
    fn empty_value(&self) -> T;

    /// Returns `true` if `value` stands for "no value present".
    fn is_empty(&self, value: &T) -> bool;
}

/// `Option<U>` cells: `None` is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionPolicy;

impl<U> EmptinessPolicy<Option<U>> for OptionPolicy {
    #[inline]
    fn empty_value(&self) -> Option<U> {
        None
    }

    #[inline]
    fn is_empty(&self, value: &Option<U>) -> bool {
        value.is_none()
    }
}

/// Cells whose `Default` value means empty (e.g. `0` for integers).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultPolicy;

impl<T: Default + PartialEq> EmptinessPolicy<T> for DefaultPolicy {
    #[inline]
    fn empty_value(&self) -> T {
        T::default()
    }

    #[inline]
    fn is_empty(&self, value: &T) -> bool {
        *value == T::default()
    }
}

/// An explicit sentinel value marks empty cells.
///
/// Note that a written value equal to the sentinel renders as empty; use
/// [`SparseStore3::try_get`](crate::sparse::SparseStore3::try_get) when the
/// distinction matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentinelPolicy<T> {
    sentinel: T,
}

impl<T> SentinelPolicy<T> {
    pub fn new(sentinel: T) -> Self {
        Self { sentinel }
    }

    pub fn sentinel(&self) -> &T {
        &self.sentinel
    }
}

impl<T: Clone + PartialEq + Debug> EmptinessPolicy<T> for SentinelPolicy<T> {
    fn empty_value(&self) -> T {
        self.sentinel.clone()
    }

    fn is_empty(&self, value: &T) -> bool {
        *value == self.sentinel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent<T, P: EmptinessPolicy<T>>(p: &P) {
        assert!(p.is_empty(&p.empty_value()));
    }

    #[test]
    fn empty_value_is_recognized() {
        assert_consistent::<Option<String>, _>(&OptionPolicy);
        assert_consistent::<i32, _>(&DefaultPolicy);
        assert_consistent::<String, _>(&DefaultPolicy);
        assert_consistent::<i64, _>(&SentinelPolicy::new(-1i64));
    }

    #[test]
    fn real_values_are_not_empty() {
        assert!(!EmptinessPolicy::<Option<u8>>::is_empty(&OptionPolicy, &Some(0)));
        assert!(!EmptinessPolicy::<i32>::is_empty(&DefaultPolicy, &7));
        let p = SentinelPolicy::new(-1i64);
        assert!(!p.is_empty(&0));
        assert_eq!(*p.sentinel(), -1);
    }
}
