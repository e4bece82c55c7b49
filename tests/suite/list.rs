//! Sequence container tests

use lockhold::{IndexOutOfRange, LockedList, ValueAdapter};

use crate::common::sample_list;

#[test]
fn contains_scans_elements() {
    let list = sample_list();
    assert!(list.contains(&2));
    assert!(!list.contains(&5));
}

#[test]
fn get_first_element() {
    assert_eq!(sample_list().get(0), Ok(&1));
    assert_eq!(sample_list()[0], 1);
}

#[test]
fn set_then_get() {
    let mut list = sample_list();
    assert_eq!(list.set(0, 5), Ok(1));
    assert_eq!(list.get(0), Ok(&5));
}

#[test]
fn set_out_of_range_fails_without_growing() {
    let mut list = sample_list();
    assert_eq!(list.set(3, 4), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(list.set(-4, 4), Err(IndexOutOfRange { index: -4, len: 3 }));
    assert_eq!(list, sample_list());
}

#[test]
fn append_goes_to_the_end() {
    let mut list = sample_list();
    let before = list.len();
    list.append(4);
    assert_eq!(list.get(-1), Ok(&4));
    assert_eq!(list.len(), before + 1);
}

#[test]
fn len_counts_elements() {
    assert_eq!(sample_list().len(), 3);
}

#[test]
fn plus_concatenates_into_new_list() {
    let list = sample_list();
    let joined = &list + sample_list();
    assert_eq!(joined.len(), 6);
    assert_eq!(list, sample_list());
}

#[test]
fn iteration_is_positional() {
    let list = sample_list();
    let doubled: Vec<_> = list.iter().map(|n| n * 2).collect();
    assert_eq!(doubled, [2, 4, 6]);
    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned, [1, 2, 3]);
}

#[test]
fn json_round_trip() {
    let list = LockedList::<String>::from_json_str(r#"["a", "b"]"#).unwrap();
    assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    assert!(LockedList::<String>::from_json_str(r#"{"a": "b"}"#).is_err());
}
