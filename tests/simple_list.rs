mod util;

use figure_collections::collections_error::CollectionsError;
use figure_collections::debug_invariants::DebugInvariants;
use figure_collections::figure::Figure;
use figure_collections::list::SimpleList;
use proptest::prelude::*;
use util::{assert_non_decreasing, assert_permutation, demo_figures, list_of, seeded_values};

#[test]
fn figures_sort_by_area() {
    let mut list = list_of(&demo_figures());
    list.sort();
    let names: Vec<&str> = list.iter().map(Figure::name).collect();
    assert_eq!(names, ["Square", "Circle", "Rectangle"]);
    let areas: Vec<f64> = list.iter().map(Figure::area).collect();
    assert!(areas.windows(2).all(|w| w[0] <= w[1]), "{areas:?}");
    list.validate_invariants().unwrap();
}

#[test]
fn positions_match_insertion_order() {
    let values = seeded_values(7, 50, 1_000);
    let list = list_of(&values);
    assert_eq!(list.len(), values.len());
    for (k, v) in values.iter().enumerate() {
        assert_eq!(list.get(k), Ok(v));
    }
    assert_eq!(
        list.get(values.len()),
        Err(CollectionsError::PositionOutOfRange {
            position: 50,
            len: 50
        })
    );
}

#[test]
fn seeded_shuffles_sort_correctly() {
    for seed in 0..20 {
        let values = seeded_values(seed, 64, 10);
        let mut list = list_of(&values);
        list.sort();
        let got: Vec<i64> = list.iter().copied().collect();
        assert_non_decreasing(&got);
        assert_permutation(&got, &values);
    }
}

#[test]
fn sort_is_repeatable_and_idempotent() {
    let mut list = list_of(&seeded_values(3, 30, 5));
    list.sort();
    let once = list.clone();
    list.sort();
    assert_eq!(list, once);
}

#[test]
fn iteration_is_restartable_after_mutation() {
    let mut list = SimpleList::from([3, 1, 2]);
    let before: Vec<_> = list.iter().copied().collect();
    list.set(0, 0).unwrap();
    list.add(4);
    let after: Vec<_> = list.iter().copied().collect();
    assert_eq!(before, [3, 1, 2]);
    assert_eq!(after, [0, 1, 2, 4]);
    assert_eq!(list.iter().len(), 4);
}

#[test]
fn sort_by_key_like_comparators() {
    let mut list = SimpleList::from(["ccc", "a", "bb", ""]);
    list.sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["", "a", "bb", "ccc"]);
}

proptest! {
    #[test]
    fn prop_get_returns_added_values(values in proptest::collection::vec(any::<i32>(), 0..60)) {
        let list: SimpleList<i32> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());
        for (k, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(k), Ok(v));
        }
        prop_assert!(list.get(values.len()).is_err());
    }

    #[test]
    fn prop_sort_is_ordered_permutation(values in proptest::collection::vec(-50i32..50, 0..80)) {
        let mut list: SimpleList<i32> = values.iter().copied().collect();
        list.sort();
        let got: Vec<i32> = list.iter().copied().collect();
        let mut want = values.clone();
        want.sort();
        prop_assert_eq!(got, want);
        prop_assert!(list.validate_invariants().is_ok());
    }

    #[test]
    fn prop_sort_by_reverse_is_non_increasing(values in proptest::collection::vec(any::<u16>(), 0..40)) {
        let mut list: SimpleList<u16> = values.iter().copied().collect();
        list.sort_by(|a, b| b.cmp(a));
        let got: Vec<u16> = list.into_iter().collect();
        prop_assert!(got.windows(2).all(|w| w[0] >= w[1]));
    }
}
