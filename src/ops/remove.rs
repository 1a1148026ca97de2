//! Removal: unlink a leaf or single-child node, promote the in-order
//! successor for a two-child node.

use std::cmp::Ordering;
use std::mem;

use log::trace;
use slab::Slab;

use crate::compare::Comparator;
use crate::node::{Link, Side, TreeNode};

/// Outcome of a tree remove.
pub enum RemoveOutcome<T> {
    /// No node compared equal; the tree is unchanged.
    NotFound,
    /// A node was removed.
    Removed {
        /// Root of the tree after the removal.
        root: Link,
        /// The value that was deleted.
        value: T,
    },
}

/// Removes the first node matching `value` from the tree rooted at `root`.
///
/// Exactly one arena slot is freed on success. For a two-child node the
/// doomed node keeps its slot and takes over its successor's value; the
/// successor's slot is the one freed.
pub fn remove<T, C>(
    nodes: &mut Slab<TreeNode<T>>,
    root: Link,
    value: &T,
    comparator: &C,
) -> RemoveOutcome<T>
where
    C: Comparator<T>,
{
    let mut parent: Option<(usize, Side)> = None;
    let mut cursor = root;
    while let Some(id) = cursor {
        let node = &nodes[id];
        let side = match comparator.compare(value, &node.value) {
            Ordering::Equal => break,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        parent = Some((id, side));
        cursor = node.child(side);
    }

    let Some(doomed) = cursor else {
        return RemoveOutcome::NotFound;
    };

    if let (Some(_), Some(right)) = (nodes[doomed].left, nodes[doomed].right) {
        let value = promote_successor(nodes, doomed, right);
        return RemoveOutcome::Removed { root, value };
    }

    let node = nodes.remove(doomed);
    let child = node.only_child();
    let root = match parent {
        None => child,
        Some((p, side)) => {
            nodes[p].set_child(side, child);
            root
        }
    };
    RemoveOutcome::Removed {
        root,
        value: node.value,
    }
}

/// Replaces `doomed`'s value with its in-order successor's and unlinks the
/// successor, which has no left child.
///
/// `right` is `doomed`'s right child. Returns the value `doomed` held.
fn promote_successor<T>(nodes: &mut Slab<TreeNode<T>>, doomed: usize, right: usize) -> T {
    let mut parent = (doomed, Side::Right);
    let mut successor = right;
    while let Some(next) = nodes[successor].left {
        parent = (successor, Side::Left);
        successor = next;
    }

    let promoted = nodes.remove(successor);
    nodes[parent.0].set_child(parent.1, promoted.right);
    trace!("promoted successor slot {successor} into slot {doomed}");
    mem::replace(&mut nodes[doomed].value, promoted.value)
}
