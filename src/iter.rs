//! Lazy iterators over [`HashTable`](crate::HashTable) entries and
//! [`BinarySearchTree`](crate::BinarySearchTree) traversals.
//!
//! Every iterator borrows its store, so the store cannot be mutated while
//! one is alive. Each call to the producing method starts a fresh walk.

use std::iter::FusedIterator;

use slab::Slab;

use crate::node::{Entry, Link, TreeNode};

// ---------------------------------------------------------------------------
// Hash table
// ---------------------------------------------------------------------------

/// Iterator over `(&K, &V)` pairs of a [`HashTable`](crate::HashTable).
///
/// Walks buckets in ascending index order, then each chain from its head.
/// The resulting order depends on hashing and insertion history and should
/// be treated as unordered.
pub struct Iter<'a, K, V> {
    entries: &'a Slab<Entry<K, V>>,
    buckets: &'a [Link],
    bucket: usize,
    cursor: Link,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(entries: &'a Slab<Entry<K, V>>, buckets: &'a [Link]) -> Self {
        Self {
            entries,
            buckets,
            bucket: 0,
            cursor: None,
            remaining: entries.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        loop {
            if let Some(id) = self.cursor {
                let entry = &entries[id];
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.cursor = *self.buckets.get(self.bucket)?;
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a [`HashTable`](crate::HashTable).
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`HashTable`](crate::HashTable).
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

// ---------------------------------------------------------------------------
// Binary search tree
// ---------------------------------------------------------------------------

/// In-order traversal (left, node, right): ascending comparator order.
///
/// Keeps an explicit stack of pending ancestors, so depth is bounded by
/// heap memory rather than the call stack.
pub struct InOrder<'a, T> {
    nodes: &'a Slab<TreeNode<T>>,
    stack: Vec<usize>,
    cursor: Link,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<TreeNode<T>>, root: Link) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            cursor: root,
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = nodes[id].left;
        }
        let id = self.stack.pop()?;
        let node = &nodes[id];
        self.cursor = node.right;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Pre-order traversal (node, left, right).
pub struct PreOrder<'a, T> {
    nodes: &'a Slab<TreeNode<T>>,
    stack: Vec<usize>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<TreeNode<T>>, root: Link) -> Self {
        Self {
            nodes,
            stack: root.into_iter().collect(),
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let id = self.stack.pop()?;
        let node = &nodes[id];
        // Right first so left pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Pending work for [`PostOrder`].
#[derive(Clone, Copy)]
enum Step {
    /// Expand the subtree rooted here.
    Visit(usize),
    /// Both subtrees are done; yield this node.
    Emit(usize),
}

/// Post-order traversal (left, right, node).
///
/// Runs as a state machine over a stack of [`Step`]s instead of recursing.
pub struct PostOrder<'a, T> {
    nodes: &'a Slab<TreeNode<T>>,
    stack: Vec<Step>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<TreeNode<T>>, root: Link) -> Self {
        Self {
            nodes,
            stack: root.map(Step::Visit).into_iter().collect(),
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(id) => {
                    self.remaining -= 1;
                    return Some(&nodes[id].value);
                }
                Step::Visit(id) => {
                    let node = &nodes[id];
                    self.stack.push(Step::Emit(id));
                    self.stack.extend(node.right.map(Step::Visit));
                    self.stack.extend(node.left.map(Step::Visit));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PostOrder<'_, T> {}

impl<T> FusedIterator for PostOrder<'_, T> {}
