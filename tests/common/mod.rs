//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lockhold::{LockedDict, LockedList, LockedSet};

/// Sources of the `lockhold` crate, labelled by file name.
pub const CORE_SOURCES: &[(&str, &str)] = &[
    ("lib.rs", include_str!("../../core/src/lib.rs")),
    ("lock.rs", include_str!("../../core/src/lock.rs")),
    ("adapter.rs", include_str!("../../core/src/adapter.rs")),
    ("dict.rs", include_str!("../../core/src/dict.rs")),
    ("list.rs", include_str!("../../core/src/list.rs")),
    ("set.rs", include_str!("../../core/src/set.rs")),
];

/// Sources of `lockhold-types`.
pub const TYPES_SOURCES: &[(&str, &str)] = &[
    ("lib.rs", include_str!("../../types/src/lib.rs")),
    ("error.rs", include_str!("../../types/src/error.rs")),
    ("surface.rs", include_str!("../../types/src/surface.rs")),
];

/// Sources of `lockhold-audit`.
pub const AUDIT_SOURCES: &[(&str, &str)] = &[
    ("lib.rs", include_str!("../../audit/src/lib.rs")),
    ("config.rs", include_str!("../../audit/src/config.rs")),
    ("index.rs", include_str!("../../audit/src/index.rs")),
    ("report.rs", include_str!("../../audit/src/report.rs")),
];

/// On-disk paths of [`CORE_SOURCES`].
pub fn core_source_paths() -> Vec<PathBuf> {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("../core/src");
    CORE_SOURCES.iter().map(|(file, _)| src.join(file)).collect()
}

/// `{"a": 1, "b": 2}`
pub fn sample_dict() -> LockedDict<&'static str, i32> {
    LockedDict::from([("a", 1), ("b", 2)])
}

/// `[1, 2, 3]`
pub fn sample_list() -> LockedList<i32> {
    LockedList::from([1, 2, 3])
}

/// `{1, 2, 3}`
pub fn sample_set() -> LockedSet<i32> {
    LockedSet::from([1, 2, 3])
}
