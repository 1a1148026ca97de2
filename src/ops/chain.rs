//! Bucket chain walks: lookup, unlink and rehash.

use slab::Slab;

use crate::compare::KeyEquality;
use crate::hash;
use crate::node::{Entry, Link};

/// Searches the chain starting at `head` for `key`.
///
/// Returns the handle of the matching entry. At most one entry per key
/// exists, so the first match is the only one.
pub fn find<K, V, E>(entries: &Slab<Entry<K, V>>, head: Link, key: &K, equality: &E) -> Link
where
    E: KeyEquality<K>,
{
    let mut cursor = head;
    while let Some(id) = cursor {
        let entry = &entries[id];
        if equality.eq(&entry.key, key) {
            return Some(id);
        }
        cursor = entry.next;
    }
    None
}

/// Unlinks the entry holding `key` from the chain rooted at `bucket`.
///
/// Patches the predecessor's `next`, or the bucket head when the match is
/// first. The entry's slot stays allocated; the caller frees it.
pub fn unlink<K, V, E>(
    entries: &mut Slab<Entry<K, V>>,
    bucket: &mut Link,
    key: &K,
    equality: &E,
) -> Link
where
    E: KeyEquality<K>,
{
    let mut prev: Link = None;
    let mut cursor = *bucket;
    while let Some(id) = cursor {
        let next = entries[id].next;
        if equality.eq(&entries[id].key, key) {
            match prev {
                None => *bucket = next,
                Some(p) => entries[p].next = next,
            }
            entries[id].next = None;
            return Some(id);
        }
        prev = cursor;
        cursor = next;
    }
    None
}

/// Builds a bucket array of `capacity` slots holding every entry of `old`.
///
/// Entries are visited bucket-ascending, then in chain order, and each is
/// prepended to its new bucket. Slots are reused; only links change.
pub fn rehash<K, V, E>(
    entries: &mut Slab<Entry<K, V>>,
    old: &[Link],
    capacity: usize,
    equality: &E,
) -> Box<[Link]>
where
    E: KeyEquality<K>,
{
    let mut buckets = vec![None; capacity].into_boxed_slice();
    for &head in old {
        let mut cursor = head;
        while let Some(id) = cursor {
            let entry = &mut entries[id];
            cursor = entry.next;
            let idx = hash::bucket_index(equality.hash(&entry.key), capacity);
            entry.next = buckets[idx];
            buckets[idx] = Some(id);
        }
    }
    buckets
}

