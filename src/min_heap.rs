//! # Binary Min-Heap
//!
//! An array-backed binary min-heap over [`DynamicArray`]. The element at
//! index `i` has children at `2i + 1` and `2i + 2`; every parent orders at
//! or below both children, so the minimum sits at index 0.
//!
//! `add` appends and sifts up; `remove_min` swaps the root with the last
//! element, pops it, and sifts the new root down. Building from an existing
//! array uses Floyd's bottom-up heapify, which is O(n) rather than the
//! O(n log n) of repeated `add`.

use crate::dynamic_array::DynamicArray;
use crate::error::{Error, Result};

/// An array-backed binary min-heap.
///
/// # Examples
/// ```
/// use chainmap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.add(5);
/// heap.add(1);
/// heap.add(3);
/// assert_eq!(heap.get_min(), Ok(&1));
/// assert_eq!(heap.remove_min(), Ok(1));
/// assert_eq!(heap.remove_min(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: DynamicArray<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        MinHeap {
            heap: DynamicArray::new(),
        }
    }

    /// Builds a heap from an existing array in O(n) using Floyd's
    /// bottom-up heapify.
    pub fn from_array(items: DynamicArray<T>) -> Self {
        let mut heap = MinHeap { heap: items };
        heap.heapify();
        heap
    }

    /// Adds an item, restoring the heap order by sifting it up.
    pub fn add(&mut self, item: T) {
        self.heap.append(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Returns the minimum item without removing it.
    ///
    /// # Errors
    /// [`Error::EmptyHeap`] if the heap is empty.
    pub fn get_min(&self) -> Result<&T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyHeap);
        }
        self.heap.get(0)
    }

    /// Removes and returns the minimum item.
    ///
    /// The root is swapped with the last element, the last slot is popped,
    /// and the new root sifts down to its place.
    ///
    /// # Errors
    /// [`Error::EmptyHeap`] if the heap is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last)?;
        let min = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Number of items in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn heapify(&mut self) {
        let len = self.heap.len();
        if len <= 1 {
            return;
        }
        // Sift down every non-leaf, deepest parents first.
        let last_parent = (len - 2) / 2;
        for index in (0..=last_parent).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        let heap = self.heap.as_mut_slice();
        while index > 0 {
            let parent = (index - 1) / 2;
            if heap[parent] <= heap[index] {
                break;
            }
            heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let heap = self.heap.as_mut_slice();
        let len = heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && heap[left] < heap[smallest] {
                smallest = left;
            }
            if right < len && heap[right] < heap[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_array(iter.into_iter().collect())
    }
}
