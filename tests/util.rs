#![allow(dead_code)]
use figure_collections::{
    figure::Figure,
    list::SimpleList,
    sparse::{Bounds, OptionPolicy, SparseStore3},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The three figures of the classic demo: 30x40 rectangle, side-5 square, radius-6 circle.
pub fn demo_figures() -> [Figure; 3] {
    [
        Figure::rectangle(30.0, 40.0),
        Figure::square(5.0),
        Figure::circle(6.0),
    ]
}

/// Empty cube-shaped figure store.
pub fn figure_store(side: usize) -> SparseStore3<Option<Figure>, OptionPolicy> {
    SparseStore3::with_policy(Bounds::cube(side).unwrap(), OptionPolicy).unwrap()
}

/// Deterministic pseudo-random integers.
pub fn seeded_values(seed: u64, n: usize, max: i64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-max..=max)).collect()
}

pub fn list_of<T: Clone>(values: &[T]) -> SimpleList<T> {
    values.iter().cloned().collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort();
    let mut b = want.to_vec();
    b.sort();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Assert the slice is non-decreasing.
pub fn assert_non_decreasing<T: Ord + std::fmt::Debug>(values: &[T]) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "out of order: {:?} > {:?}", pair[0], pair[1]);
    }
}
