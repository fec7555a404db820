use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Node, Parenthesised, Sideways};

/// An unbalanced binary search tree. Values less than a node are stored to its left, all others
/// (including equal values) to its right, so duplicates are kept.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinaryTree.
/// - `h`: The height of the BinaryTree, which is `n` in the worst case.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `in_order` | `O(n)` |
pub struct BinaryTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinaryTree<T> {
    /// Creates a new BinaryTree with no elements.
    pub const fn new() -> BinaryTree<T> {
        BinaryTree {
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits every value in ascending order, calling `on_node` for each, and returns the values
    /// in the order they were visited.
    pub fn in_order<F: FnMut(&T)>(&self, mut on_node: F) -> Vec<&T> {
        self.iter().inspect(|value| on_node(value)).collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Inserts `value` into the first empty branch found by descending from the root.
    pub fn insert(&mut self, value: T) -> &mut Self {
        let mut branch = &mut self.root;
        while let Some(node) = branch {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
        *branch = Some(Node::leaf(value));
        self.len += 1;
        self
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut branch = &self.root;
        while let Some(node) = branch {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        // Dropping the root directly would recurse once per level, and a tree built from sorted
        // input is as tall as it is long.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Display> Display for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&Parenthesised(&self.root), f)
    }
}

impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&Sideways(&self.root), f)
    }
}
