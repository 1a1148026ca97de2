//! Injected comparison capabilities.
//!
//! [`HashTable`](crate::HashTable) needs a [`KeyEquality`]: a hash function
//! paired with an equivalence that agrees with it. [`BinarySearchTree`](crate::BinarySearchTree)
//! needs a [`Comparator`]: a total order over its values. Both default to the
//! type's own `Hash + Eq` / `Ord` implementations.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::hash;

/// Hashing and equivalence for table keys.
///
/// Implementations must be consistent: `eq(a, b)` implies
/// `hash(a) == hash(b)`. A key whose hash changes while it is stored is lost
/// to lookups until the next resize.
pub trait KeyEquality<K: ?Sized> {
    /// Returns the hash of `key`. The top bit is ignored.
    fn hash(&self, key: &K) -> u64;

    /// Returns `true` if `a` and `b` denote the same key.
    fn eq(&self, a: &K, b: &K) -> bool;
}

/// Equality from the key type's `Hash` and `Eq` implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEquality;

impl<K: Hash + Eq + ?Sized> KeyEquality<K> for NaturalEquality {
    #[inline]
    fn hash(&self, key: &K) -> u64 {
        hash::hash_one(key)
    }

    #[inline]
    fn eq(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Total order over tree values.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order from the value type's `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
