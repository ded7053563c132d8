//! # Chained Hash Map
//!
//! This module implements a **separate-chaining hash map** over the crate's
//! own containers: the bucket table is a [`DynamicArray`] of [`LinkedList`]
//! collision chains, and the hash algorithm is an injected [`KeyHasher`]
//! capability rather than a hardcoded function.
//!
//! ## Key properties
//! - **String keys, opaque values**: keys are owned `String`s, values are
//!   any `V`.
//! - **Average O(1)** get/put/remove under a well-distributed hasher; worst
//!   case O(n) when every key lands in one chain — still correct, just slow.
//! - **Caller-driven growth**: `put` never resizes. Callers watch
//!   [`table_load`](ChainedHashMap::table_load) and call
//!   [`resize`](ChainedHashMap::resize) when they choose.
//! - **Rehash by re-insertion**: `resize` rebuilds the bucket table and
//!   pushes every entry back through the normal put path, so every bucket
//!   index is recomputed under the new capacity.
//!
//! ## Example
//! ```
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new(8);
//! map.put("answer", 42);
//! assert_eq!(map.get("answer"), Some(&42));
//! assert!(map.remove("answer"));
//! assert!(map.is_empty());
//! ```

use std::fmt;

use log::debug;

use crate::dynamic_array::DynamicArray;
use crate::hashing::{Fnv1aHasher, KeyHasher};
use crate::linked_list::LinkedList;

/// A separate-chaining hash map with string keys and a pluggable hasher.
///
/// Holds exactly `capacity` buckets at all times (`capacity >= 1`); each
/// bucket is a [`LinkedList`] ordered by most-recent insertion. `size` is
/// the total entry count across all buckets and always equals the sum of
/// the chain lengths.
#[derive(Debug)]
pub struct ChainedHashMap<V, H = Fnv1aHasher>
where
    H: KeyHasher,
{
    buckets: DynamicArray<LinkedList<V>>,
    capacity: usize,
    hasher: H,
    size: usize,
}

impl<V> ChainedHashMap<V> {
    /// Creates a map with `capacity` buckets and the default FNV-1a hasher.
    ///
    /// Capacities below 1 are clamped to 1.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, Fnv1aHasher)
    }
}

impl<V, H: KeyHasher> ChainedHashMap<V, H> {
    /// Creates a map with `capacity` buckets and the given hasher.
    ///
    /// Capacities below 1 are clamped to 1. Buckets are allocated eagerly:
    /// a fresh map holds `capacity` empty chains.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        let capacity = capacity.max(1);
        ChainedHashMap {
            buckets: Self::fresh_buckets(capacity),
            capacity,
            hasher,
            size: 0,
        }
    }

    fn fresh_buckets(capacity: usize) -> DynamicArray<LinkedList<V>> {
        let mut buckets = DynamicArray::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.append(LinkedList::new());
        }
        buckets
    }

    /// Bucket index for `key` under the current capacity.
    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) as usize) % self.capacity
    }

    /// Inserts or updates the value stored under `key`.
    ///
    /// If the key is already present its value is overwritten in place and
    /// `len` is unchanged; otherwise the entry is inserted at the front of
    /// its collision chain and `len` grows by one. Never resizes the table.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets.as_mut_slice()[index];

        if let Some(existing) = bucket.find_mut(&key) {
            *existing = value;
            return;
        }

        bucket.insert(key, value);
        self.size += 1;
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets.as_slice()[index].find(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets.as_mut_slice()[index].find_mut(key)
    }

    /// Removes the entry stored under `key`.
    ///
    /// Returns `true` iff an entry was actually removed; `len` is
    /// decremented only in that case, so removing a missing key — or
    /// removing from an empty map — is a safe no-op.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.size == 0 {
            return false;
        }
        let index = self.bucket_index(key);
        let removed = self.buckets.as_mut_slice()[index].remove(key);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns `true` if `key` is present.
    ///
    /// An empty map answers `false` without hashing the key.
    pub fn contains_key(&self, key: &str) -> bool {
        if self.size == 0 {
            return false;
        }
        self.get(key).is_some()
    }

    /// Number of buckets whose chain is empty. O(capacity).
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Current load factor: entries divided by buckets.
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Changes the number of buckets, rehashing every entry.
    ///
    /// A `new_capacity` below 1 is silently ignored. Otherwise a fresh
    /// bucket table is allocated and every existing entry is re-inserted
    /// through the standard put path, scanning old buckets in index order
    /// and each chain in its own order. Every entry's bucket index is
    /// therefore recomputed under the new capacity; nothing is relinked in
    /// place.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }
        debug!(
            "resizing table from {} to {} buckets ({} entries to rehash)",
            self.capacity, new_capacity, self.size
        );

        let old_buckets = std::mem::replace(&mut self.buckets, Self::fresh_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;

        for chain in old_buckets {
            for (key, value) in chain {
                // Keys were unique in the old table, so these puts never
                // overwrite.
                self.put(key, value);
            }
        }
    }

    /// Collects every stored key, scanning buckets in index order and each
    /// chain from its head. No ordering is promised across buckets.
    pub fn get_keys(&self) -> DynamicArray<String> {
        let mut keys = DynamicArray::with_capacity(self.size);
        for chain in self.buckets.iter() {
            for (key, _) in chain.iter() {
                keys.append(key.to_owned());
            }
        }
        keys
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        debug!("clearing table ({} entries dropped)", self.size);
        for chain in self.buckets.as_mut_slice() {
            *chain = LinkedList::new();
        }
        self.size = 0;
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Diagnostic rendering: one `index: chain` line per bucket. Not a stable
/// format.
impl<V: fmt::Display, H: KeyHasher> fmt::Display for ChainedHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {chain}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::ByteSumHasher;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    fn keys_as_set<V, H: KeyHasher>(map: &ChainedHashMap<V, H>) -> BTreeSet<String> {
        map.get_keys().into_iter().collect()
    }

    #[test]
    fn test_forced_collision_layout() {
        // "a" and "c" share a bucket, "b" gets its own.
        let hasher = |key: &str| match key {
            "b" => 1u64,
            "c" => 5,
            _ => 0,
        };
        let mut map = ChainedHashMap::with_hasher(5, hasher);
        map.put("a", 1);
        map.put("b", 2);
        map.put("c", 3);

        assert_eq!(map.len(), 3);
        assert_eq!(map.empty_buckets(), 3);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("c"), Some(&3));
        assert!((map.table_load() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut map = ChainedHashMap::new(4);
        map.put("x", 10);
        map.put("x", 20);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x"), Some(&20));
    }

    #[test]
    fn test_remove_on_empty_map_is_safe() {
        let mut map: ChainedHashMap<i32> = ChainedHashMap::new(4);
        assert!(!map.remove("x"));
        assert_eq!(map.len(), 0);

        // Also safe once the map has been emptied again.
        map.put("x", 1);
        assert!(map.remove("x"));
        assert!(!map.remove("x"));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_remove_only_decrements_on_hit() {
        let mut map = ChainedHashMap::new(2);
        map.put("a", 1);
        map.put("b", 2);

        assert!(!map.remove("missing"));
        assert_eq!(map.len(), 2);
        assert!(map.remove("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_contains_key_short_circuits_without_hashing() {
        let calls = Cell::new(0u32);
        let hasher = |key: &str| {
            calls.set(calls.get() + 1);
            key.len() as u64
        };
        let mut map = ChainedHashMap::with_hasher(4, hasher);

        assert!(!map.contains_key("q"));
        assert_eq!(calls.get(), 0, "empty map must not touch the hasher");

        map.put("q", 1);
        assert!(map.contains_key("q"));
        assert!(calls.get() > 0);
    }

    #[test]
    fn test_resize_down_and_back_up_preserves_contents() {
        let mut map = ChainedHashMap::new(11);
        for i in 0..20 {
            map.put(format!("key{i}"), i);
        }
        let before = keys_as_set(&map);

        map.resize(1);
        assert_eq!(map.capacity(), 1);
        assert_eq!(map.len(), 20);
        assert_eq!(map.empty_buckets(), 0);
        assert!((map.table_load() - 20.0).abs() < f64::EPSILON);
        for i in 0..20 {
            assert_eq!(map.get(&format!("key{i}")), Some(&i));
        }

        map.resize(11);
        assert_eq!(map.capacity(), 11);
        assert_eq!(map.len(), 20);
        assert_eq!(keys_as_set(&map), before);
        for i in 0..20 {
            assert_eq!(map.get(&format!("key{i}")), Some(&i));
        }
    }

    #[test]
    fn test_resize_below_one_is_ignored() {
        let mut map = ChainedHashMap::new(7);
        map.put("k", 1);

        map.resize(0);
        assert_eq!(map.capacity(), 7);
        assert_eq!(map.get("k"), Some(&1));
    }

    #[test]
    fn test_zero_capacity_construction_clamps_to_one() {
        let mut map = ChainedHashMap::new(0);
        assert_eq!(map.capacity(), 1);
        map.put("k", 1);
        assert_eq!(map.get("k"), Some(&1));
    }

    #[test]
    fn test_pathological_hasher_stays_correct() {
        // Every key lands in bucket 0.
        let mut map = ChainedHashMap::with_hasher(8, |_: &str| 0u64);
        for i in 0..32 {
            map.put(format!("k{i}"), i);
        }

        assert_eq!(map.len(), 32);
        assert_eq!(map.empty_buckets(), 7);
        for i in 0..32 {
            assert_eq!(map.get(&format!("k{i}")), Some(&i));
        }

        assert!(map.remove("k13"));
        assert_eq!(map.get("k13"), None);
        assert_eq!(map.len(), 31);
    }

    #[test]
    fn test_size_matches_get_keys_across_operations() {
        let mut map = ChainedHashMap::new(3);
        assert_eq!(map.len(), map.get_keys().len());

        for i in 0..10 {
            map.put(format!("k{i}"), i);
        }
        assert_eq!(map.len(), map.get_keys().len());

        map.remove("k3");
        map.remove("k3"); // second remove must not double-count
        map.put("k4", 99); // overwrite must not change size
        assert_eq!(map.len(), 8);
        assert_eq!(map.len(), map.get_keys().len());

        map.resize(17);
        assert_eq!(map.len(), map.get_keys().len());

        map.clear();
        assert_eq!(map.len(), 0);
        assert_eq!(map.get_keys().len(), 0);
    }

    #[test]
    fn test_get_keys_collects_every_key_once() {
        let mut map = ChainedHashMap::with_hasher(4, ByteSumHasher);
        for key in ["ab", "ba", "cd", "dc"] {
            // ByteSum collides the anagram pairs on purpose.
            map.put(key, ());
        }

        let keys = keys_as_set(&map);
        assert_eq!(keys.len(), 4);
        for key in ["ab", "ba", "cd", "dc"] {
            assert!(keys.contains(key));
        }
    }

    #[test]
    fn test_get_mut_updates_value() {
        let mut map = ChainedHashMap::new(4);
        map.put("counter", 0);
        if let Some(value) = map.get_mut("counter") {
            *value += 5;
        }
        assert_eq!(map.get("counter"), Some(&5));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut map = ChainedHashMap::new(6);
        for i in 0..12 {
            map.put(format!("k{i}"), i);
        }

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 6);
        assert_eq!(map.empty_buckets(), 6);
        assert_eq!(map.get("k0"), None);
        assert_eq!(map.table_load(), 0.0);
    }

    #[test]
    fn test_display_one_line_per_bucket() {
        let mut map = ChainedHashMap::with_hasher(2, ByteSumHasher);
        map.put("a", 1); // 97 % 2 == 1

        assert_eq!(map.to_string(), "0: []\n1: [(a: 1)]\n");
    }
}
