//! Error types shared by the containers in this crate.
//!
//! Key absence is deliberately **not** an error: lookups return `Option`,
//! removals return `bool`. The variants here cover the genuinely fatal
//! conditions — popping an empty array, indexing out of range, and reading
//! the minimum of an empty heap.

use thiserror::Error;

/// Errors reported by the container operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Popping from an empty `DynamicArray`.
    #[error("pop from an empty array")]
    Underflow,

    /// Index outside `0..len` on a `DynamicArray` access.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the access.
        len: usize,
    },

    /// Reading or removing the minimum of an empty `MinHeap`.
    #[error("minimum of an empty heap")]
    EmptyHeap,
}

impl Error {
    /// Shorthand for an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;
