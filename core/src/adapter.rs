//! Delegation from a container to its wrapped collection.

use std::collections::HashSet;
use std::collections::hash_set;
use std::slice;

use indexmap::IndexMap;
use indexmap::map;
use lockhold_types::{Shape, ShapeMismatch};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The one slot every container declares: its wrapped collection.
pub(crate) const DATA_SLOT: &[&str] = &["data"];

/// A plain collection a container can wrap.
///
/// Implemented for the three collections the containers store; the
/// methods mirror what those collections already do.
pub trait Collection {
    /// Iterator over the collection by reference, in its natural order.
    type Iter<'a>: Iterator
    where
        Self: 'a;

    /// Number of elements (or bindings).
    fn len(&self) -> usize;

    /// Whether the collection holds nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate by reference.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V, S> Collection for IndexMap<K, V, S> {
    type Iter<'a>
        = map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }
}

impl<T> Collection for Vec<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

/// Read-only delegation from a container to the collection it owns.
///
/// Only [`ValueAdapter::data`] is required; length and iteration forward
/// to the wrapped collection and never mutate it.
pub trait ValueAdapter {
    /// The wrapped collection type.
    type Data: Collection;

    /// Borrow the wrapped collection.
    fn data(&self) -> &Self::Data;

    /// Number of elements in the wrapped collection.
    #[must_use]
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Whether the wrapped collection is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Iterate the wrapped collection in its natural order.
    ///
    /// Insertion order for dicts and lists; unspecified but stable between
    /// mutations for sets.
    fn iter(&self) -> <Self::Data as Collection>::Iter<'_> {
        self.data().iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserialize a wrapped collection from JSON, checking the outer shape
/// before the element types.
pub(crate) fn collection_from_json<C: DeserializeOwned>(
    shape: Shape,
    value: Value,
) -> Result<C, ShapeMismatch> {
    let fits = match shape {
        Shape::Mapping => value.is_object(),
        Shape::Sequence | Shape::Set => value.is_array(),
    };
    if !fits {
        return Err(ShapeMismatch::new(
            shape,
            format!("found {}", json_kind(&value)),
        ));
    }
    serde_json::from_value(value).map_err(|err| ShapeMismatch::new(shape, err.to_string()))
}

pub(crate) fn collection_from_json_str<C: DeserializeOwned>(
    shape: Shape,
    raw: &str,
) -> Result<C, ShapeMismatch> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| ShapeMismatch::new(shape, format!("invalid JSON: {err}")))?;
    collection_from_json(shape, value)
}
