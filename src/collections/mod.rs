//! Classic collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, and about ownership
//! of heap-allocated node chains in particular.
//!
//! # Method
//! Every node is owned by exactly one parent through a [`Box`], so none of these collections need
//! reference counting or unsafe code. Each collection is gated behind a Cargo feature of the same
//! name.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
