//! Unbalanced binary search tree.

use std::fmt;

use log::trace;
use slab::Slab;

use crate::compare::{Comparator, NaturalOrder};
use crate::iter::{InOrder, PostOrder, PreOrder};
use crate::node::{Link, Side, TreeNode};
use crate::ops::descend;
use crate::ops::remove::{RemoveOutcome, remove};

/// Binary search tree ordered by an injected [`Comparator`].
///
/// Values comparing strictly less than a node live in its left subtree,
/// everything else (equal values included) in its right subtree. Duplicates
/// are kept, so the tree is a multiset over the comparator's order. No
/// rebalancing is performed: height depends on insertion order.
pub struct BinarySearchTree<T, C = NaturalOrder> {
    nodes: Slab<TreeNode<T>>,
    root: Link,
    comparator: C,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree using the value type's natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

// ---------------------------------------------------------------------------
// Construction & shape queries: no trait bounds
// ---------------------------------------------------------------------------

impl<T, C> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            comparator,
        }
    }

    /// Returns the number of stored values, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the comparator in use.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        trace!("clearing {} tree nodes", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the smallest value (leftmost node).
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        descend::extreme(&self.nodes, self.root, Side::Left).map(|id| &self.nodes[id].value)
    }

    /// Returns the largest value (rightmost node).
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        descend::extreme(&self.nodes, self.root, Side::Right).map(|id| &self.nodes[id].value)
    }

    /// Returns the number of edges on the longest root-to-leaf path, or
    /// `None` for an empty tree.
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        descend::height(&self.nodes, self.root)
    }

    /// Traverses left, node, right. Yields values in non-decreasing order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.nodes, self.root)
    }

    /// Traverses node, left, right.
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.nodes, self.root)
    }

    /// Traverses left, right, node.
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.nodes, self.root)
    }

    /// Same as [`in_order`](Self::in_order).
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }
}

// ---------------------------------------------------------------------------
// Ordered operations: C: Comparator<T>
// ---------------------------------------------------------------------------

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Inserts `value` as a new leaf. Equal values are routed right and
    /// never rejected.
    pub fn insert(&mut self, value: T) {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.insert(TreeNode::leaf(value)));
            return;
        };
        let (parent, side) = descend::attach_point(&self.nodes, root, &value, &self.comparator);
        let id = self.nodes.insert(TreeNode::leaf(value));
        self.nodes[parent].set_child(side, Some(id));
    }

    /// Returns `true` if some stored value compares equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the first stored value met on the descent that compares
    /// equal to `value`.
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        descend::find(&self.nodes, self.root, value, &self.comparator).map(|id| &self.nodes[id].value)
    }

    /// Removes one value comparing equal to `value`. Returns `true` on
    /// success.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes one value comparing equal to `value` and returns it.
    ///
    /// The first match on the descent is removed. A leaf or single-child
    /// node is replaced by its child; a two-child node takes its in-order
    /// successor's value and the successor is unlinked instead.
    pub fn take(&mut self, value: &T) -> Option<T> {
        match remove(&mut self.nodes, self.root, value, &self.comparator) {
            RemoveOutcome::NotFound => None,
            RemoveOutcome::Removed { root, value } => {
                self.root = root;
                Some(value)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, C: Default> Default for BinarySearchTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> fmt::Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.nodes.len())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinarySearchTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> InOrder<'a, T> {
        self.in_order()
    }
}
