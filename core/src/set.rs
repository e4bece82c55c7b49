//! Set container.

use std::any::Any;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr};

use lockhold_types::{ElementNotFound, Shape, ShapeMismatch, Surface};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::{DATA_SLOT, ValueAdapter, collection_from_json, collection_from_json_str};
use crate::lock::Locked;

/// A set-like container over a hash set.
///
/// ```
/// use lockhold::LockedSet;
///
/// let set = LockedSet::from([1, 2, 3]);
/// assert_eq!(&set | [4, 5], LockedSet::from([1, 2, 3, 4, 5]));
/// assert!(!set.contains(&4));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize + Hash + Eq",
    deserialize = "T: Deserialize<'de> + Hash + Eq"
))]
pub struct LockedSet<T> {
    data: HashSet<T>,
}

impl<T> LockedSet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashSet::new(),
        }
    }

    /// Unwrap into the owned hash set.
    #[must_use]
    pub fn into_inner(self) -> HashSet<T> {
        self.data
    }
}

impl<T: Hash + Eq> LockedSet<T> {
    /// Whether `value` is a member.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.data.contains(value)
    }

    /// Insert `value` unless an equal element is already present.
    ///
    /// Returns whether the set grew. Adding twice is the same as adding once.
    pub fn add(&mut self, value: T) -> bool {
        self.data.insert(value)
    }

    /// Remove `value`, failing if it is not a member.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<(), ElementNotFound>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.data.remove(value) {
            Ok(())
        } else {
            Err(ElementNotFound)
        }
    }

    /// Remove `value` if present. Returns whether it was.
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.data.remove(value)
    }

    /// A new set holding every element of either operand.
    ///
    /// Duplicates collapse by equality. Neither operand changes.
    #[must_use]
    pub fn union<I>(&self, other: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut data = self.data.clone();
        data.extend(other);
        Self { data }
    }

    /// A new set holding the elements present in both operands.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            data: self.data.intersection(&other.data).cloned().collect(),
        }
    }

    /// Build a set from a JSON array; duplicates collapse.
    ///
    /// Anything other than an array, or an element that does not
    /// deserialize into `T`, fails with [`ShapeMismatch`].
    pub fn from_json(value: Value) -> Result<Self, ShapeMismatch>
    where
        T: DeserializeOwned,
    {
        collection_from_json(Shape::Set, value).map(|data| Self { data })
    }

    /// Build a set from JSON text; see [`LockedSet::from_json`].
    pub fn from_json_str(raw: &str) -> Result<Self, ShapeMismatch>
    where
        T: DeserializeOwned,
    {
        collection_from_json_str(Shape::Set, raw).map(|data| Self { data })
    }
}

impl<T> Default for LockedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueAdapter for LockedSet<T> {
    type Data = HashSet<T>;

    fn data(&self) -> &Self::Data {
        &self.data
    }
}

impl<T: 'static> Locked for LockedSet<T> {
    const SURFACE: Surface = Surface::new("LockedSet", DATA_SLOT);

    fn slot(&self, index: usize) -> Option<&dyn Any> {
        (index == 0).then_some(&self.data as &dyn Any)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        (index == 0).then_some(&mut self.data as &mut dyn Any)
    }
}

impl<T: Hash + Eq> PartialEq for LockedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Hash + Eq> Eq for LockedSet<T> {}

impl<T: Hash + Eq> From<HashSet<T>> for LockedSet<T> {
    fn from(data: HashSet<T>) -> Self {
        Self { data }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for LockedSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for LockedSet<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq> FromIterator<T> for LockedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for LockedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for LockedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LockedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, I> BitOr<I> for &LockedSet<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    type Output = LockedSet<T>;

    fn bitor(self, rhs: I) -> Self::Output {
        self.union(rhs)
    }
}

impl<T, I> BitOr<I> for LockedSet<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    type Output = LockedSet<T>;

    fn bitor(mut self, rhs: I) -> Self::Output {
        self.data.extend(rhs);
        self
    }
}

impl<T: Hash + Eq + Clone> BitAnd for &LockedSet<T> {
    type Output = LockedSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}
