//! Utilities to traverse the KDTree structure.

use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableNum;

/// A read-only view onto one node of a [`KDTree`].
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,

    /// Distance from the root, which has depth 0
    depth: usize,

    dimensions: usize,
}

impl<'a, T> NodeRef<'a, T> {
    /// The pivot item of this node.
    pub fn item(&self) -> &'a T {
        &self.node.item
    }

    /// The depth of this node in the tree. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis this node splits its children over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % self.dimensions
    }

    /// The child holding items at or below the pivot on [`axis`][NodeRef::axis].
    pub fn left_child(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(|node| self.child(node))
    }

    /// The child holding items at or above the pivot on [`axis`][NodeRef::axis].
    pub fn right_child(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(|node| self.child(node))
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of items in the subtree rooted at this node, including its own.
    pub fn num_items(&self) -> usize {
        1 + self.left_child().map_or(0, |n| n.num_items())
            + self.right_child().map_or(0, |n| n.num_items())
    }

    fn child(&self, node: &'a Node<T>) -> NodeRef<'a, T> {
        NodeRef {
            node,
            depth: self.depth + 1,
            dimensions: self.dimensions,
        }
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// An iterator over all items of a [`KDTree`], in pre-order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Note: pushed in backwards order to what gets popped
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T, N: IndexableNum, F> KDTree<T, N, F> {
    /// Access the root node of the KDTree for manual traversal.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            node: &self.root,
            depth: 0,
            dimensions: self.dimensions,
        }
    }

    /// Iterate over every item in the tree exactly once.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::with_capacity(self.height());
        stack.push(&self.root);
        Iter {
            stack,
            remaining: self.num_items,
        }
    }
}

impl<'a, T, N: IndexableNum, F> IntoIterator for &'a KDTree<T, N, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
