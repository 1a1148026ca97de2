//! Hashing helpers for bucket placement.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Mask clearing the top bit so every hash is non-negative.
const NON_NEGATIVE: u64 = u64::MAX >> 1;

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Maps a raw hash onto a bucket slot: `(hash & 0x7FFF..) mod capacity`.
///
/// `capacity` must be non-zero.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn bucket_index(hash: u64, capacity: usize) -> usize {
    // The remainder is < capacity, which already fits in usize.
    ((hash & NON_NEGATIVE) % capacity as u64) as usize
}
