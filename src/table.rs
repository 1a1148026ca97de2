//! Chained hash table.

use std::fmt;
use std::mem;
use std::ops;

use log::{debug, trace};
use slab::Slab;

use crate::compare::{KeyEquality, NaturalEquality};
use crate::error::{Error, Result};
use crate::hash;
use crate::iter::{Iter, Keys, Values};
use crate::node::{Entry, Link};
use crate::ops::chain;

/// Bucket count used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Capacity multiplier applied on every resize.
pub const GROWTH_FACTOR: usize = 2;

/// Largest occupancy allowed for `capacity` buckets: `floor(capacity * 0.75)`.
#[inline]
#[must_use]
pub const fn threshold(capacity: usize) -> usize {
    capacity - capacity.div_ceil(4)
}

/// Hash table with separate chaining and load-factor driven growth.
///
/// Each bucket heads a singly linked chain of entries; new keys are
/// prepended. When linking a new key would push occupancy above 3/4 of the
/// bucket count, the bucket array doubles and every entry is relinked.
/// The table never shrinks.
///
/// Keys are hashed and compared through an injected [`KeyEquality`],
/// [`NaturalEquality`] by default.
pub struct HashTable<K, V, E = NaturalEquality> {
    buckets: Box<[Link]>,
    entries: Slab<Entry<K, V>>,
    threshold: usize,
    equality: E,
}

// ---------------------------------------------------------------------------
// Construction with natural equality
// ---------------------------------------------------------------------------

impl<K, V> HashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, NaturalEquality)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_equality(capacity, NaturalEquality)
    }
}

// ---------------------------------------------------------------------------
// Construction & accessors: no trait bounds
// ---------------------------------------------------------------------------

impl<K, V, E> HashTable<K, V, E> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets and the given
    /// key equality.
    #[must_use]
    pub fn with_equality(equality: E) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, equality)
    }

    /// Creates an empty table with `capacity` buckets and the given key
    /// equality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity_and_equality(capacity: usize, equality: E) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument {
                name: "capacity",
                reason: "must be positive",
            });
        }
        Ok(Self::from_parts(capacity, equality))
    }

    fn from_parts(capacity: usize, equality: E) -> Self {
        Self {
            buckets: vec![None; capacity].into_boxed_slice(),
            entries: Slab::new(),
            threshold: threshold(capacity),
            equality,
        }
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current number of buckets.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the key equality in use.
    #[must_use]
    pub const fn equality(&self) -> &E {
        &self.equality
    }

    /// Removes every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.entries.len());
        self.entries.clear();
        self.buckets.fill(None);
    }

    /// Returns an iterator over `(&K, &V)` pairs.
    ///
    /// The order is bucket index ascending, then most recently inserted
    /// first within a bucket. Callers should treat it as unordered.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries, &self.buckets)
    }

    /// Returns an iterator over the keys, in [`iter`](Self::iter) order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values, in [`iter`](Self::iter) order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Keyed operations: E: KeyEquality<K>
// ---------------------------------------------------------------------------

impl<K, V, E: KeyEquality<K>> HashTable<K, V, E> {
    fn bucket_of(&self, key: &K) -> usize {
        hash::bucket_index(self.equality.hash(key), self.capacity())
    }

    fn find(&self, key: &K) -> Link {
        let head = self.buckets[self.bucket_of(key)];
        chain::find(&self.entries, head, key, &self.equality)
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value returned; occupancy is unchanged. Otherwise the pair is
    /// prepended to its bucket's chain, growing the table first if the new
    /// occupancy would exceed the load-factor threshold.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.equality.hash(&key);
        let mut idx = hash::bucket_index(hash, self.capacity());

        if let Some(id) = chain::find(&self.entries, self.buckets[idx], &key, &self.equality) {
            return Some(mem::replace(&mut self.entries[id].value, value));
        }

        if self.entries.len() + 1 > self.threshold {
            self.grow();
            idx = hash::bucket_index(hash, self.capacity());
        }

        let id = self.entries.insert(Entry {
            key,
            value,
            next: self.buckets[idx],
        });
        self.buckets[idx] = Some(id);
        None
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.entries[id].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.entries[id].value)
    }

    /// Returns `true` if the table contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`. Returns `true` if an entry was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    pub fn take(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_of(key);
        let id = chain::unlink(&mut self.entries, &mut self.buckets[idx], key, &self.equality)?;
        Some(self.entries.remove(id).value)
    }

    /// Doubles the bucket count and relinks every entry.
    fn grow(&mut self) {
        let old = self.capacity();
        let capacity = old.saturating_mul(GROWTH_FACTOR);
        self.buckets = chain::rehash(&mut self.entries, &self.buckets, capacity, &self.equality);
        self.threshold = threshold(capacity);
        debug!(
            "resized hash table from {old} to {capacity} buckets ({} entries)",
            self.entries.len()
        );
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V, E: Default> Default for HashTable<K, V, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<K, V, E> fmt::Debug for HashTable<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.entries.len())
            .field("capacity", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, E: KeyEquality<K>> Extend<(K, V)> for HashTable<K, V, E> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, E: KeyEquality<K> + Default> FromIterator<(K, V)> for HashTable<K, V, E> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<K, V, E: KeyEquality<K>> ops::Index<&K> for HashTable<K, V, E> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V, E> IntoIterator for &'a HashTable<K, V, E> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
