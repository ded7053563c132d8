//! # chainmap
//!
//! Associative containers from first principles: a separate-chaining
//! [`ChainedHashMap`] built out of this crate's own [`DynamicArray`] and
//! [`LinkedList`], plus a [`MinHeap`] over the same array type.
//!
//! The hash map is the centerpiece. Its bucket table is a `DynamicArray` of
//! `LinkedList` collision chains, the hash algorithm is injected through the
//! [`KeyHasher`] capability (any `Fn(&str) -> u64` works), and growth is
//! entirely caller-driven: `put` never resizes, callers watch
//! `table_load()` and call `resize()` themselves.
//!
//! Everything is single-threaded and synchronous. Wrap the whole map in one
//! exclusive lock if you need to share it across threads; the individual
//! operations are not atomic at the sub-step level.
//!
//! ```
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new(11);
//! map.put("one", 1);
//! map.put("two", 2);
//!
//! assert_eq!(map.get("one"), Some(&1));
//! assert_eq!(map.len(), 2);
//!
//! if map.table_load() > 0.75 {
//!     map.resize(map.capacity() * 2);
//! }
//! ```

pub mod dynamic_array;
pub mod error;
pub mod hash_map;
pub mod hashing;
pub mod linked_list;
pub mod min_heap;

pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use hash_map::ChainedHashMap;
pub use hashing::{ByteSumHasher, Fnv1aHasher, KeyHasher, WeightedByteSumHasher};
pub use linked_list::LinkedList;
pub use min_heap::MinHeap;
