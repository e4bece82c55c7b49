//! Closed attribute surface, exercised through [`Locked`].

use std::collections::HashSet;
use std::fmt::Debug;

use indexmap::IndexMap;
use lockhold::{AttributeError, Locked, LockedDict, LockedList, LockedObject, LockedSet};

use crate::common::{sample_dict, sample_list, sample_set};

const FOREIGN_NAMES: &[&str] = &["foo", "_data", "__dict__", "attr", "len"];

fn assert_rejects_writes<L: Locked + Clone + PartialEq + Debug>(
    before: &L,
    type_name: &str,
) {
    for name in FOREIGN_NAMES {
        let mut target = before.clone();
        let err = target.set_attr(name, 42).unwrap_err();
        assert_eq!(err.name(), *name);
        assert_eq!(err.type_name(), type_name);
        assert_eq!(
            err.to_string(),
            format!("'{type_name}' object has no attribute '{name}'")
        );
        assert_eq!(&target, before, "failed write to {name} changed state");
    }
}

#[test]
fn undeclared_writes_fail_on_every_type() {
    assert_rejects_writes(&LockedObject::new(), "LockedObject");
    assert_rejects_writes(&sample_dict(), "LockedDict");
    assert_rejects_writes(&sample_list(), "LockedList");
    assert_rejects_writes(&sample_set(), "LockedSet");
}

#[test]
fn undeclared_reads_fail() {
    let dict = sample_dict();
    assert!(matches!(
        dict.get_attr("foo"),
        Err(AttributeError::Undeclared { .. })
    ));
    assert!(sample_list().get_attr("__dict__").is_err());
    assert!(sample_set().get_attr("_data").is_err());
}

#[test]
fn surfaces_declare_only_data() {
    assert!(LockedObject::attributes().is_empty());
    assert_eq!(LockedDict::<String, i32>::attributes(), ["data"]);
    assert_eq!(LockedList::<i32>::attributes(), ["data"]);
    assert_eq!(LockedSet::<i32>::attributes(), ["data"]);
    assert!(sample_list().has_attr("data"));
    assert!(!sample_list().has_attr("foo"));
}

#[test]
fn data_slot_reads_the_wrapped_collection() {
    let list = sample_list();
    let data: &Vec<i32> = list.attr("data").unwrap();
    assert_eq!(data, &vec![1, 2, 3]);
}

#[test]
fn data_slot_replacement_must_match_type() {
    let mut list = sample_list();
    let err = list.set_attr("data", "not a vec").unwrap_err();
    assert!(matches!(err, AttributeError::WrongType { .. }));
    assert_eq!(list, sample_list());

    list.set_attr("data", vec![9]).unwrap();
    assert_eq!(list, LockedList::from([9]));
}

#[test]
fn data_slot_replacement_on_dict_and_set() {
    let mut dict = sample_dict();
    dict.set_attr("data", IndexMap::from([("z", 26)])).unwrap();
    assert_eq!(dict, LockedDict::from([("z", 26)]));

    let mut set = sample_set();
    set.set_attr("data", HashSet::from([7])).unwrap();
    assert_eq!(set, LockedSet::from([7]));
}
