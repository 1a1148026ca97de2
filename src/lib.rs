//! In-memory chained hash table and unbalanced binary search tree.
//!
//! Two independent stores:
//!
//! - [`HashTable`]: maps keys to values through an array of singly linked
//!   bucket chains. Inserting a new key prepends it to its chain; when
//!   occupancy would exceed 3/4 of the bucket count the array doubles and
//!   every entry is relinked. Existing keys are overwritten in place.
//! - [`BinarySearchTree`]: keeps values ordered by a comparator, routing
//!   strictly-less values left and everything else right. Duplicates are
//!   kept. Supports min/max and in-, pre- and post-order traversal.
//!
//! Both keep their linked records in a [`slab::Slab`] and refer to them by
//! slot handle, so removal frees the slot immediately.
//!
//! # Capabilities
//!
//! Keys are hashed and compared through a [`KeyEquality`]; tree values are
//! ordered by a [`Comparator`]. The defaults, [`NaturalEquality`] and
//! [`NaturalOrder`], use the type's own `Hash + Eq` and `Ord`.
//!
//! ```
//! use chain_tree::{BinarySearchTree, HashTable};
//!
//! let mut table = HashTable::with_capacity(16)?;
//! table.insert("uno", 1);
//! table.insert("dos", 2);
//! assert!(table.remove(&"dos"));
//! assert_eq!(table.len(), 1);
//!
//! let tree: BinarySearchTree<i32> = [50, 30, 70].into_iter().collect();
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [30, 50, 70]);
//! # Ok::<(), chain_tree::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Neither store locks. Iterators borrow their store, so mutation while an
//! iterator is alive is rejected at compile time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod iter;
pub mod node;

mod ops;
mod table;
mod tree;

#[cfg(test)]
mod tests;

pub use compare::{Comparator, KeyEquality, NaturalEquality, NaturalOrder};
pub use error::{Error, Result};
pub use table::{DEFAULT_CAPACITY, GROWTH_FACTOR, HashTable};
pub use tree::BinarySearchTree;
