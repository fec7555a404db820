//! An unbalanced binary search tree, [`BinaryTree`], and its in-order iterator.

mod binary_tree;
mod iter;
mod node;

pub use binary_tree::*;
pub use iter::*;
pub(crate) use node::*;
