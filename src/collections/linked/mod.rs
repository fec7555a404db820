//! Linked collection types. Currently this is just the singly linked [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
