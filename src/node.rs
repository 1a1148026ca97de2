//! Record types held in the slot arenas, and link helpers.

use std::fmt;

/// Handle of an arena slot, or `None` for an absent link.
pub type Link = Option<usize>;

/// Chain entry of a hash table bucket.
pub struct Entry<K, V> {
    /// The key.
    pub key: K,
    /// The value.
    pub value: V,
    /// Next entry in the same bucket.
    pub next: Link,
}

/// Which child link of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Values comparing strictly less than the node.
    Left,
    /// Values comparing greater than or equal to the node.
    Right,
}

/// Binary search tree node.
///
/// Invariant: everything under `left` compares strictly less than `value`;
/// everything under `right` compares greater or equal.
pub struct TreeNode<T> {
    /// The stored value.
    pub value: T,
    /// Left subtree root.
    pub left: Link,
    /// Right subtree root.
    pub right: Link,
}

impl<T> TreeNode<T> {
    /// Creates a leaf.
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the child link on `side`.
    #[inline]
    #[must_use]
    pub const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Replaces the child link on `side`.
    #[inline]
    pub const fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    /// Returns the only child, or `None` for a leaf.
    ///
    /// Meaningful only when the node has at most one child.
    #[inline]
    #[must_use]
    pub const fn only_child(&self) -> Link {
        match self.left {
            Some(left) => Some(left),
            None => self.right,
        }
    }

    /// Returns `true` if both children are present.
    #[inline]
    #[must_use]
    pub const fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

// ---------------------------------------------------------------------------
// Manual trait impls: links only, no K/V/T bounds.
// ---------------------------------------------------------------------------

impl<K, V> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}
