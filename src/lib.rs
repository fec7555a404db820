//! A small collection of classic data structures, written as learning exercises.
//!
//! # Purpose
//! This crate is a learning project with no expectation of production use. Writing these data
//! structures by hand is a way to properly understand the edge cases hiding in them: index bounds,
//! empty containers, and insertion or removal at arbitrary positions.
//!
//! # Contents
//! - [`LinkedList`](collections::linked::LinkedList): a singly linked list with positional and
//!   value-based insertion, lookup and removal.
//! - [`BinaryTree`](collections::binary_tree::BinaryTree): an unbalanced binary search tree with
//!   in-order traversal.
//!
//! # Error Handling
//! Misuse, such as indexing past the end of a list, is reported through strongly typed errors:
//! small structs (mostly ZSTs) that implement [`Error`](std::error::Error), combined into enums
//! where an operation can fail in more than one way. Every fallible method has a `try_` form
//! returning a [`Result`] and a plain form that panics with the error's message, because being
//! forced to handle an error on every call is rarely ergonomic for a collection.
//!
//! # Features
//! Each collection sits behind its own feature (`linked`, `binary-tree`), all enabled by default
//! through `collections-all`.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because the derives remove a lot of
//! very repetitive `Display` and `Error` implementations.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
