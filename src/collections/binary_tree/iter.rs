use std::iter::FusedIterator;

use super::{BinaryTree, Node};

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            stack: Vec::new(),
            current: self.root.as_deref(),
            len: self.len,
        }
    }
}

/// An in-order iterator over a [`BinaryTree`], yielding values in ascending order.
pub struct Iter<'a, T> {
    // Nodes whose left subtree is being visited, nearest ancestor last.
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) current: Option<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}
