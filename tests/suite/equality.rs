//! Structural equality across construction paths

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use lockhold::{LockedDict, LockedList, LockedSet};

#[test]
fn dicts_from_different_sources_compare_equal() {
    let from_array = LockedDict::from([("a", 1), ("b", 2)]);
    let from_hash_map = LockedDict::from(HashMap::from([("b", 2), ("a", 1)]));
    let mut index_map = IndexMap::new();
    index_map.insert("a", 1);
    index_map.insert("b", 2);
    let from_index_map = LockedDict::from(index_map);

    assert_eq!(from_array, from_hash_map);
    assert_eq!(from_array, from_index_map);
    assert_ne!(from_array, LockedDict::from([("a", 1), ("b", 3)]));
}

#[test]
fn lists_compare_by_position() {
    assert_eq!(LockedList::from(vec![1, 2]), LockedList::from([1, 2]));
    assert_eq!(LockedList::from(&[1, 2][..]), [1, 2].into_iter().collect::<LockedList<_>>());
    assert_ne!(LockedList::from([1, 2]), LockedList::from([2, 1]));
}

#[test]
fn sets_ignore_order_and_duplicates() {
    let from_vec = LockedSet::from(vec![3, 1, 2, 1]);
    let from_hash_set = LockedSet::from(HashSet::from([1, 2, 3]));
    assert_eq!(from_vec, from_hash_set);
    assert_ne!(from_vec, LockedSet::from([1, 2]));
}

#[test]
fn equal_wrappers_are_distinct_values() {
    let left = LockedSet::from([1]);
    let mut right = left.clone();
    assert_eq!(left, right);
    right.add(2);
    assert_ne!(left, right);
}
