//! Bucket placement ignores the hash's top bit.

use crate::hash::bucket_index;
use crate::{HashTable, KeyEquality};

/// Key 1 hashes to `u64::MAX`, every other key to 0.
#[derive(Debug, Clone, Copy, Default)]
struct TopBitSet;

impl KeyEquality<u32> for TopBitSet {
    fn hash(&self, key: &u32) -> u64 {
        if *key == 1 { u64::MAX } else { 0 }
    }

    fn eq(&self, a: &u32, b: &u32) -> bool {
        a == b
    }
}

#[test]
fn top_bit_is_masked_before_modulo() {
    // (2^63 - 1) mod 3 == 1, while (2^64 - 1) mod 3 == 0.
    assert_eq!(bucket_index(u64::MAX, 3), 1);
    assert_eq!(bucket_index(1 << 63, 3), 0);
    assert_eq!(bucket_index(u64::MAX, 1), 0);
}

#[test]
fn index_stays_below_capacity() {
    for hash in [0, 1, 7, u64::MAX, u64::MAX - 1, 1 << 63] {
        for capacity in [1, 2, 3, 16, 1000] {
            assert!(bucket_index(hash, capacity) < capacity);
        }
    }
}

#[test]
fn table_places_top_bit_hash_by_masked_value() {
    let mut table = HashTable::with_capacity_and_equality(3, TopBitSet).unwrap();
    table.insert(2, 20);
    table.insert(1, 10);
    assert_eq!(table.capacity(), 3);
    // Key 2 sits in bucket 0, key 1 in bucket 1, so iteration meets 2 first.
    assert_eq!(table.keys().copied().collect::<Vec<_>>(), [2, 1]);
    assert_eq!(table.get(&1), Some(&10));
}
