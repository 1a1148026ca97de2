//! Comparator-guided descent through the tree.

use std::cmp::Ordering;

use slab::Slab;

use crate::compare::Comparator;
use crate::node::{Link, Side, TreeNode};

/// Finds the first node whose value compares equal to `value`.
///
/// Goes left on less, right on greater, stops on equal.
pub fn find<T, C>(nodes: &Slab<TreeNode<T>>, root: Link, value: &T, comparator: &C) -> Link
where
    C: Comparator<T>,
{
    let mut cursor = root;
    while let Some(id) = cursor {
        let node = &nodes[id];
        cursor = match comparator.compare(value, &node.value) {
            Ordering::Equal => return Some(id),
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
        };
    }
    None
}

/// Returns the node and side under which `value` gets attached as a leaf.
///
/// Strictly-less goes left, everything else (equal included) goes right.
pub fn attach_point<T, C>(
    nodes: &Slab<TreeNode<T>>,
    root: usize,
    value: &T,
    comparator: &C,
) -> (usize, Side)
where
    C: Comparator<T>,
{
    let mut parent = root;
    loop {
        let node = &nodes[parent];
        let side = if comparator.compare(value, &node.value) == Ordering::Less {
            Side::Left
        } else {
            Side::Right
        };
        match node.child(side) {
            Some(child) => parent = child,
            None => return (parent, side),
        }
    }
}

/// Follows `side` links from `root` to the last node.
pub fn extreme<T>(nodes: &Slab<TreeNode<T>>, root: Link, side: Side) -> Link {
    let mut id = root?;
    while let Some(next) = nodes[id].child(side) {
        id = next;
    }
    Some(id)
}

/// Returns the number of edges on the longest root-to-leaf path.
pub fn height<T>(nodes: &Slab<TreeNode<T>>, root: Link) -> Option<usize> {
    let mut stack = vec![(root?, 0_usize)];
    let mut max = 0;
    while let Some((id, depth)) = stack.pop() {
        max = max.max(depth);
        let node = &nodes[id];
        for child in [node.left, node.right].into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
    Some(max)
}
