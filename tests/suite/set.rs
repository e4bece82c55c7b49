//! Set container tests

use lockhold::{ElementNotFound, LockedSet, ValueAdapter};

use crate::common::sample_set;

#[test]
fn contains_checks_membership() {
    let set = sample_set();
    assert!(set.contains(&1));
    assert!(!set.contains(&4));
}

#[test]
fn add_new_element() {
    let mut set = sample_set();
    set.add(4);
    assert!(set.contains(&4));
}

#[test]
fn add_twice_same_as_once() {
    let mut once = sample_set();
    once.add(4);
    let mut twice = sample_set();
    twice.add(4);
    twice.add(4);
    assert_eq!(once, twice);
    assert_eq!(once.len(), twice.len());
}

#[test]
fn remove_present_and_absent() {
    let mut set = sample_set();
    set.remove(&2).unwrap();
    assert!(!set.contains(&2));
    assert_eq!(set.remove(&2), Err(ElementNotFound));
    assert_eq!(set.len(), 2);
}

#[test]
fn len_counts_elements() {
    assert_eq!(sample_set().len(), 3);
}

#[test]
fn or_unions_into_new_set() {
    let set = sample_set();
    let result = &set | [4, 5];
    assert_eq!(result, LockedSet::from([1, 2, 3, 4, 5]));
    assert_eq!(set.len(), 3);
}

#[test]
fn union_collapses_duplicates() {
    let result = sample_set().union([3, 3, 4]);
    assert_eq!(result.len(), 4);
}

#[test]
fn iteration_is_stable_between_calls() {
    let set = sample_set();
    let first: Vec<_> = set.iter().copied().collect();
    let second: Vec<_> = set.iter().copied().collect();
    assert_eq!(first, second);
    let mut sorted = first;
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 2, 3]);
}
