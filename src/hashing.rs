//! # Key Hashing
//!
//! The hash map never hardcodes a hash algorithm. It is generic over the
//! [`KeyHasher`] capability — anything that maps a string key to a
//! non-negative integer. A blanket implementation covers plain closures, so
//! `|key: &str| ...` works directly as a hasher.
//!
//! Three ready-made hashers are provided. `ByteSumHasher` and
//! `WeightedByteSumHasher` are simple order-insensitive and order-sensitive
//! byte accumulators, useful for producing predictable collisions in tests.
//! [`Fnv1aHasher`] is 64-bit FNV-1a, a fast non-cryptographic hash with a
//! reasonable distribution, and the default for
//! [`ChainedHashMap::new`](crate::ChainedHashMap::new).
//!
//! The map's correctness must never depend on hash quality: a hasher that
//! sends every key to the same bucket degrades lookups to O(n) but produces
//! no wrong answers.

/// FNV-1a 64-bit parameters.
const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Maps a string key to a non-negative integer.
///
/// Implementors only need good-enough distribution for their use case; the
/// containers in this crate remain correct under arbitrary collisions.
pub trait KeyHasher {
    /// Hashes `key`. The map reduces the result modulo its bucket count.
    fn hash_key(&self, key: &str) -> u64;
}

/// Any `Fn(&str) -> u64` closure is a hasher.
impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Sums the byte values of the key.
///
/// Anagrams collide (`"ab"` and `"ba"` hash identically), which makes this
/// hasher handy for exercising collision chains deliberately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteSumHasher;

impl KeyHasher for ByteSumHasher {
    fn hash_key(&self, key: &str) -> u64 {
        key.bytes().map(u64::from).sum()
    }
}

/// Sums `(position + 1) * byte` over the key's bytes.
///
/// Position weighting separates anagrams, at the cost of a multiply per
/// byte. Still far from uniform; prefer [`Fnv1aHasher`] outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedByteSumHasher;

impl KeyHasher for WeightedByteSumHasher {
    fn hash_key(&self, key: &str) -> u64 {
        key.bytes()
            .enumerate()
            .map(|(i, byte)| (i as u64 + 1) * u64::from(byte))
            .sum()
    }
}

/// 64-bit FNV-1a.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aHasher;

impl KeyHasher for Fnv1aHasher {
    fn hash_key(&self, key: &str) -> u64 {
        let mut hash = FNV64_OFFSET_BASIS;
        for byte in key.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV64_PRIME);
        }
        hash
    }
}
