//! In-place partition-exchange sort for [`SimpleList`].
//!
//! This is Hoare's quicksort with a middle pivot, run directly on the chain.
//! The list has no random access, so every "index" the algorithm touches is
//! a walk from the head:
//!
//! - each comparison and each swap costs O(position);
//! - a full sort therefore costs O(n² log n) on average instead of the
//!   O(n log n) of an array quicksort, and O(n³) in the worst case.
//!
//! Values are exchanged between nodes; the nodes themselves are never
//! relinked, so node addresses stay stable across a sort. Recursion depth
//! is O(log n) on average and O(n) in the worst case.
//!
//! Callers that sort large lists often are better served by collecting into
//! a `Vec`, sorting there, and rebuilding the list.

use std::cmp::Ordering;

use crate::list::simple_list::SimpleList;

impl<T: Ord> SimpleList<T> {
    /// Sorts the list in non-decreasing order. Not stable.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> SimpleList<T> {
    /// Sorts the list with a comparator. Not stable.
    ///
    /// `compare` must be a total order. With an inconsistent comparator the
    /// cursors can run past the range being partitioned, which panics.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len > 1 {
            let high = (self.len - 1) as isize;
            self.partition_sort(0, high, &mut compare);
        }
        crate::debug_invariants!(&*self, "SimpleList::sort_by");
    }

    /// Sorts the closed position range `[low, high]`.
    ///
    /// Cursors are signed: `j` may step to `low - 1`, which is `-1` when
    /// `low == 0`.
    fn partition_sort<F>(&mut self, low: isize, high: isize, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        log::trace!("SimpleList::sort: partition [{low}, {high}]");
        // The pivot value moves when it is swapped; follow it by position.
        let mut pivot = (low + (high - low) / 2) as usize;
        let (mut i, mut j) = (low, high);
        loop {
            while self.compare_at(i as usize, pivot, compare) == Ordering::Less {
                i += 1;
            }
            while self.compare_at(j as usize, pivot, compare) == Ordering::Greater {
                j -= 1;
            }
            if i <= j {
                let (a, b) = (i as usize, j as usize);
                self.swap_values(a, b);
                if pivot == a {
                    pivot = b;
                } else if pivot == b {
                    pivot = a;
                }
                i += 1;
                j -= 1;
            }
            if i > j {
                break;
            }
        }
        if low < j {
            self.partition_sort(low, j, compare);
        }
        if i < high {
            self.partition_sort(i, high, compare);
        }
    }

    fn compare_at<F>(&self, a: usize, b: usize, compare: &mut F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (pa, pb) = (self.walk(a), self.walk(b));
        // SAFETY: both are live nodes of `self`; only shared references are made.
        unsafe { compare(&(*pa.as_ptr()).value, &(*pb.as_ptr()).value) }
    }

    /// Exchanges the values stored at two positions.
    fn swap_values(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (pa, pb) = (self.walk(a), self.walk(b));
        // SAFETY: `a != b`, so these are two distinct live nodes of `self`, and
        // `&mut self` rules out any other reference into the chain.
        unsafe { std::mem::swap(&mut (*pa.as_ptr()).value, &mut (*pb.as_ptr()).value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug_invariants::DebugInvariants;

    fn sorted(values: &[i32]) -> Vec<i32> {
        let mut l: SimpleList<i32> = values.iter().copied().collect();
        l.sort();
        l.validate_invariants().unwrap();
        l.into_iter().collect()
    }

    #[test]
    fn trivial_lists() {
        assert_eq!(sorted(&[]), Vec::<i32>::new());
        assert_eq!(sorted(&[4]), [4]);
        assert_eq!(sorted(&[2, 1]), [1, 2]);
        assert_eq!(sorted(&[1, 2]), [1, 2]);
    }

    #[test]
    fn duplicates_and_reverse_input() {
        assert_eq!(sorted(&[3, 1, 3, 1, 2, 2]), [1, 1, 2, 2, 3, 3]);
        assert_eq!(sorted(&[9, 8, 7, 6, 5, 4, 3, 2, 1]), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(sorted(&[5, 5, 5, 5]), [5, 5, 5, 5]);
    }

    #[test]
    fn sort_by_descending() {
        let mut l = SimpleList::from([1, 4, 2, 8, 5]);
        l.sort_by(|a, b| b.cmp(a));
        assert_eq!(l.iter().copied().collect::<Vec<_>>(), [8, 5, 4, 2, 1]);
    }

    #[test]
    fn nodes_are_not_relinked() {
        let mut l = SimpleList::from([3, 1, 2]);
        let before: Vec<_> = (0..3).map(|k| l.walk(k)).collect();
        l.sort();
        let after: Vec<_> = (0..3).map(|k| l.walk(k)).collect();
        assert_eq!(before, after);
        assert_eq!(l.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn sorts_without_clone() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Token(u32);
        let mut l = SimpleList::from([Token(2), Token(0), Token(1)]);
        l.sort();
        assert_eq!(l.first(), Some(&Token(0)));
        assert_eq!(l.last(), Some(&Token(2)));
    }
}
