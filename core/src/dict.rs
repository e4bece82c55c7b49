//! Mapping container.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{BitOr, BitOrAssign, Index};

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::{Equivalent, IndexMap};
use lockhold_types::{KeyNotFound, Shape, ShapeMismatch, Surface};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::{DATA_SLOT, ValueAdapter, collection_from_json, collection_from_json_str};
use crate::lock::Locked;

/// A dictionary-like container over an insertion-ordered map.
///
/// Keys keep the order they were first inserted in; overwriting a key
/// keeps its position. Equality compares bindings and ignores order.
///
/// ```
/// use lockhold::LockedDict;
///
/// let dict = LockedDict::from([("a", 1), ("b", 2)]);
/// let merged = &dict | [("c", 3)];
/// assert_eq!(merged, LockedDict::from([("a", 1), ("b", 2), ("c", 3)]));
/// assert_eq!(dict.get(&"c"), Err(lockhold::KeyNotFound));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Hash + Eq, V: Serialize",
    deserialize = "K: Deserialize<'de> + Hash + Eq, V: Deserialize<'de>"
))]
pub struct LockedDict<K, V> {
    data: IndexMap<K, V>,
}

impl<K, V> LockedDict<K, V> {
    /// Create an empty dict.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: IndexMap::new(),
        }
    }

    /// Unwrap into the owned map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.data
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.data.keys()
    }

    /// Iterate values in key insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        self.data.values()
    }
}

impl<K: Hash + Eq, V> LockedDict<K, V> {
    /// Whether `key` is bound.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.data.contains_key(key)
    }

    /// The value bound to `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.data.get(key).ok_or(KeyNotFound)
    }

    /// Bind `key` to `value`, returning the value it replaced.
    ///
    /// A new key goes to the end; an existing key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.data.insert(key, value)
    }

    /// Remove the binding for `key` and return its value.
    ///
    /// Remaining keys keep their relative order.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.data.shift_remove(key).ok_or(KeyNotFound)
    }

    /// A new dict with `other`'s bindings laid over this one's.
    ///
    /// Right-hand values win on key collision. Neither operand changes.
    #[must_use]
    pub fn merge<I>(&self, other: I) -> Self
    where
        K: Clone,
        V: Clone,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut data = self.data.clone();
        data.extend(other);
        Self { data }
    }

    /// Build a dict from a JSON object.
    ///
    /// Anything other than an object, or an object whose keys or values do
    /// not deserialize into `K` and `V`, fails with [`ShapeMismatch`].
    pub fn from_json(value: Value) -> Result<Self, ShapeMismatch>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
    {
        collection_from_json(Shape::Mapping, value).map(|data| Self { data })
    }

    /// Build a dict from JSON text; see [`LockedDict::from_json`].
    pub fn from_json_str(raw: &str) -> Result<Self, ShapeMismatch>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
    {
        collection_from_json_str(Shape::Mapping, raw).map(|data| Self { data })
    }
}

impl<K, V> Default for LockedDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ValueAdapter for LockedDict<K, V> {
    type Data = IndexMap<K, V>;

    fn data(&self) -> &Self::Data {
        &self.data
    }
}

impl<K: 'static, V: 'static> Locked for LockedDict<K, V> {
    const SURFACE: Surface = Surface::new("LockedDict", DATA_SLOT);

    fn slot(&self, index: usize) -> Option<&dyn Any> {
        (index == 0).then_some(&self.data as &dyn Any)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        (index == 0).then_some(&mut self.data as &mut dyn Any)
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for LockedDict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Hash + Eq, V: Eq> Eq for LockedDict<K, V> {}

impl<K, Q, V> Index<&Q> for LockedDict<K, V>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
{
    type Output = V;

    /// Panics if `key` is absent; use [`LockedDict::get`] to handle that.
    fn index(&self, key: &Q) -> &V {
        &self.data[key]
    }
}

impl<K: Hash + Eq, V> From<IndexMap<K, V>> for LockedDict<K, V> {
    fn from(data: IndexMap<K, V>) -> Self {
        Self { data }
    }
}

impl<K: Hash + Eq, V> From<HashMap<K, V>> for LockedDict<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for LockedDict<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for LockedDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for LockedDict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<K, V> IntoIterator for LockedDict<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a LockedDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K, V, I> BitOr<I> for &LockedDict<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    type Output = LockedDict<K, V>;

    fn bitor(self, rhs: I) -> Self::Output {
        self.merge(rhs)
    }
}

impl<K, V, I> BitOr<I> for LockedDict<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    type Output = LockedDict<K, V>;

    fn bitor(mut self, rhs: I) -> Self::Output {
        self.data.extend(rhs);
        self
    }
}

impl<K, V, I> BitOrAssign<I> for LockedDict<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    fn bitor_assign(&mut self, rhs: I) {
        self.data.extend(rhs);
    }
}
