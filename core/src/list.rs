//! Sequence container.

use std::any::Any;
use std::mem;
use std::ops::{Add, Index};
use std::slice::Iter;
use std::vec::IntoIter;

use lockhold_types::{IndexOutOfRange, Shape, ShapeMismatch, Surface};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::{DATA_SLOT, ValueAdapter, collection_from_json, collection_from_json_str};
use crate::lock::Locked;

/// A list-like container over a vector.
///
/// Positions are `isize`: negative indices count back from the end, so
/// `-1` is the last element. Writing past either end fails; the list only
/// grows through [`LockedList::append`] and friends.
///
/// ```
/// use lockhold::{LockedList, ValueAdapter};
///
/// let mut list = LockedList::from([1, 2, 3]);
/// list.append(4);
/// assert_eq!(list.get(-1), Ok(&4));
/// assert!(list.set(10, 0).is_err());
/// assert_eq!(list.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockedList<T> {
    data: Vec<T>,
}

impl<T> LockedList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Unwrap into the owned vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    fn position(&self, index: isize) -> Result<usize, IndexOutOfRange> {
        let len = self.data.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        resolved
            .filter(|&position| position < len)
            .ok_or(IndexOutOfRange { index, len })
    }

    /// The element at `index`.
    pub fn get(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        let position = self.position(index)?;
        Ok(&self.data[position])
    }

    /// Replace the element at `index`, returning the old one.
    ///
    /// Never extends the list: an index outside `-len..len` fails and the
    /// list is left as it was.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, IndexOutOfRange> {
        let position = self.position(index)?;
        Ok(mem::replace(&mut self.data[position], value))
    }

    /// Remove and return the element at `index`, shifting later ones down.
    pub fn delete(&mut self, index: isize) -> Result<T, IndexOutOfRange> {
        let position = self.position(index)?;
        Ok(self.data.remove(position))
    }

    /// Add `value` at the end.
    pub fn append(&mut self, value: T) {
        self.data.push(value);
    }

    /// Remove and return the last element.
    ///
    /// An empty list fails with [`IndexOutOfRange`] at index `-1`.
    pub fn pop(&mut self) -> Result<T, IndexOutOfRange> {
        self.data
            .pop()
            .ok_or(IndexOutOfRange { index: -1, len: 0 })
    }

    /// The first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// The last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Whether any element equals `value`. Linear scan.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    /// A new list holding this list's elements followed by `other`'s.
    ///
    /// Neither operand changes.
    #[must_use]
    pub fn concat<I>(&self, other: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut data = self.data.clone();
        data.extend(other);
        Self { data }
    }

    /// Build a list from a JSON array.
    ///
    /// Anything other than an array, or an element that does not
    /// deserialize into `T`, fails with [`ShapeMismatch`].
    pub fn from_json(value: Value) -> Result<Self, ShapeMismatch>
    where
        T: DeserializeOwned,
    {
        collection_from_json(Shape::Sequence, value).map(|data| Self { data })
    }

    /// Build a list from JSON text; see [`LockedList::from_json`].
    pub fn from_json_str(raw: &str) -> Result<Self, ShapeMismatch>
    where
        T: DeserializeOwned,
    {
        collection_from_json_str(Shape::Sequence, raw).map(|data| Self { data })
    }
}

impl<T> Default for LockedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueAdapter for LockedList<T> {
    type Data = Vec<T>;

    fn data(&self) -> &Self::Data {
        &self.data
    }
}

impl<T: 'static> Locked for LockedList<T> {
    const SURFACE: Surface = Surface::new("LockedList", DATA_SLOT);

    fn slot(&self, index: usize) -> Option<&dyn Any> {
        (index == 0).then_some(&self.data as &dyn Any)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        (index == 0).then_some(&mut self.data as &mut dyn Any)
    }
}

impl<T> Index<isize> for LockedList<T> {
    type Output = T;

    /// Panics outside `-len..len`; use [`LockedList::get`] to handle that.
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for LockedList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for LockedList<T> {
    fn from(items: &[T]) -> Self {
        Self {
            data: items.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LockedList<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            data: Vec::from(items),
        }
    }
}

impl<T> FromIterator<T> for LockedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for LockedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for LockedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LockedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Clone, I: IntoIterator<Item = T>> Add<I> for &LockedList<T> {
    type Output = LockedList<T>;

    fn add(self, rhs: I) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T, I: IntoIterator<Item = T>> Add<I> for LockedList<T> {
    type Output = LockedList<T>;

    fn add(mut self, rhs: I) -> Self::Output {
        self.data.extend(rhs);
        self
    }
}
