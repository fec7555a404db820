//! A module containing [`LinkedList`] and associated types.
//!
//! Other than the list itself, this module provides borrowed and owned iteration, the [`Joined`]
//! display adapter and the error types returned by the list's fallible methods.

mod fmt;
mod iter;
mod length;
mod linked_list;
mod node;
mod tests;

pub use fmt::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
