//! # Dynamic Array
//!
//! A growable, randomly indexable sequence with an explicit, fallible
//! surface: `pop` on an empty array reports [`Error::Underflow`] and every
//! indexed access is bounds-checked, reporting [`Error::OutOfRange`] rather
//! than panicking. Storage is a `Vec<T>`; this type adds the error contract
//! the other containers in the crate build on.
//!
//! `DynamicArray` backs both the hash map's bucket table and the min-heap's
//! element store.

use crate::error::{Error, Result};

/// A growable, bounds-checked sequence of values.
///
/// # Examples
/// ```
/// use chainmap::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.append(3);
/// array.append(9);
/// assert_eq!(array.get(1), Ok(&9));
/// assert_eq!(array.pop(), Ok(9));
/// assert_eq!(array.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        DynamicArray { data: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value at the end of the array.
    pub fn append(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the array is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(Error::Underflow)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swaps the elements at `i` and `j`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.data.len();
        if i >= len {
            return Err(Error::OutOfRange { index: i, len });
        }
        if j >= len {
            return Err(Error::OutOfRange { index: j, len });
        }
        self.data.swap(i, j);
        Ok(())
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DynamicArray {
            data: iter.into_iter().collect(),
        }
    }
}
