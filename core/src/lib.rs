//! Locked container wrappers.
//!
//! Each container owns exactly one wrapped collection and exposes a narrow,
//! documented protocol over it:
//!
//! - [`LockedDict`]: keyed access and merge over an insertion-ordered map
//! - [`LockedList`]: positional access and append over a vector
//! - [`LockedSet`]: add/remove and union over a hash set
//! - [`LockedObject`]: the base type, with no attributes at all
//!
//! # Closed attribute surface
//!
//! Rust structs cannot grow fields, so `dict.foo = 42` is a compile error.
//! For callers that address attributes by name, [`Locked`] checks every
//! read and write against the type's fixed [`Surface`] and rejects anything
//! undeclared with [`AttributeError`].
//!
//! ```
//! use lockhold::{Locked, LockedDict};
//!
//! let mut dict = LockedDict::from([("a", 1), ("b", 2)]);
//! assert!(dict.set_attr("foo", 42).is_err());
//! assert!(dict.get_attr("data").is_ok());
//! ```

#![deny(missing_docs)]
// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Error taxonomy is documented on the error types

mod adapter;
mod dict;
mod list;
mod lock;
mod set;

pub use adapter::{Collection, ValueAdapter};
pub use dict::LockedDict;
pub use list::LockedList;
pub use lock::{Locked, LockedObject};
pub use set::LockedSet;

pub use lockhold_types::{
    AttributeError, ElementNotFound, Error, IndexOutOfRange, KeyNotFound, Result, Shape,
    ShapeMismatch, Surface,
};
