use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, ONE};
#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, ContainerDoesNotContain, ContainerIsEmpty, DeleteError, IndexOutOfBounds,
    RemoveError,
};
use crate::util::result::ResultExtension;

/// A singly linked list, owning a chain of nodes from its head to its terminal node.
///
/// Positions are taken as [`isize`]. Negative positions are rejected by every method except
/// [`at`](LinkedList::at) (and its variants), which resolves them relative to the end of the list,
/// so that `-1` refers to the last element.
///
/// Fallible methods come in two forms: a `try_` method returning a [`Result`] and a plain method
/// that panics with the error's message instead. Mutators return `&mut Self`, allowing calls to be
/// chained.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `prepend` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `append` | `O(n)` |
/// | `at` | `O(i)` |
/// | `insert_at` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `find` | `O(n)` |
/// | `delete` | `O(n)` |
///
/// There is no tail reference, so anything involving the end of the list walks the whole chain.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: Box<Node<T>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
        }
    }

    /// Creates a new LinkedList containing only `value`.
    pub fn with_value(value: T) -> LinkedList<T> {
        LinkedList {
            state: ListState::single(value),
        }
    }

    /// Creates a LinkedList containing every item of `values`, in order. This is equivalent to
    /// appending each item to an empty list.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> LinkedList<T> {
        values.into_iter().collect()
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(&contents.head.value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => Some(&mut contents.head.value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists. This walks the entire
    /// list.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Adds `value` after the terminal node of the list, or as the head if the list is empty.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn append(&mut self, value: T) -> &mut Self {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.extend(iter::once(value)),
        }
        self
    }

    /// Adds `value` as the new head of the list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn prepend(&mut self, value: T) -> &mut Self {
        self.state = match mem::take(&mut self.state) {
            Empty => ListState::single(value),
            Full(ListContents { len, head }) => Full(ListContents {
                len: len.checked_add(1).ok_or(CapacityOverflow).throw(),
                head: Node::boxed(value, Some(head)),
            }),
        };
        self
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match mem::take(&mut self.state) {
            Empty => None,
            Full(ListContents { len, head }) => {
                let Node { value, next } = *head;
                if let (Some(len), Some(head)) = (len.checked_sub(1), next) {
                    self.state = Full(ListContents { len, head });
                }
                Some(value)
            },
        }
    }

    /// Inserts `value` so that it becomes the element at position `at`, shifting the element
    /// previously at that position, and all following elements, one place later.
    ///
    /// # Panics
    /// Panics if `at` is out of bounds of the LinkedList. See
    /// [`try_insert_at`](LinkedList::try_insert_at).
    pub fn insert_at(&mut self, value: T, at: isize) -> &mut Self {
        self.try_insert_at(value, at).throw()
    }

    /// Inserts `value` so that it becomes the element at position `at`, returning an [`Err`] on a
    /// failure rather than panicking.
    ///
    /// Inserting at position 0 of an empty list sets the head. Otherwise `at` must refer to an
    /// existing element, so it is not possible to insert after the terminal node with this method;
    /// use [`append`](LinkedList::append) for that.
    pub fn try_insert_at(&mut self, value: T, at: isize) -> Result<&mut Self, IndexOutOfBounds> {
        if self.is_empty() && at == 0 {
            return Ok(self.append(value));
        }

        let index = self.checked_index(at)?;
        if index == 0 {
            return Ok(self.prepend(value));
        }

        let error = self.out_of_bounds(at);
        let Full(contents) = &mut self.state else {
            return Err(error);
        };
        contents.link_after(index - 1, value).ok_or(error)?;
        Ok(self)
    }

    /// Returns a reference to the element at `index`, panicking on a failure. Negative indices
    /// count back from the end of the list.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn at(&self, index: isize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking. A negative `index` is resolved as `len - |index|`.
    pub fn try_at(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        let error = self.out_of_bounds(index);
        let resolved = self.resolve_index(index)?;
        match &self.state {
            Empty => Err(error),
            Full(contents) => contents.seek(resolved).map(|node| &node.value).ok_or(error),
        }
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn at_mut(&mut self, index: isize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking. Negative indices are resolved the same way as for
    /// [`try_at`](LinkedList::try_at).
    pub fn try_at_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        let error = self.out_of_bounds(index);
        let resolved = self.resolve_index(index)?;
        match &mut self.state {
            Empty => Err(error),
            Full(contents) => contents.seek_mut(resolved).map(|node| &mut node.value).ok_or(error),
        }
    }

    /// Returns the first element that satisfies `predicate`, or [`None`] if there is no such
    /// element.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<&T> {
        self.iter().find(|value| predicate(value))
    }

    /// Returns a mutable reference to the first element that satisfies `predicate`.
    pub fn find_mut<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<&mut T> {
        self.iter_mut().find(|value| predicate(value))
    }

    /// Removes the element at position `at`.
    ///
    /// # Panics
    /// Panics if the list is empty or `at` is out of bounds. See
    /// [`try_remove_at`](LinkedList::try_remove_at).
    pub fn remove_at(&mut self, at: isize) -> &mut Self {
        self.try_remove_at(at).throw()
    }

    /// Removes the element at position `at`, returning an [`Err`] on a failure rather than
    /// panicking. An empty list is reported as [`ContainerIsEmpty`] regardless of `at`.
    pub fn try_remove_at(&mut self, at: isize) -> Result<&mut Self, RemoveError> {
        self.take_at(at)?;
        Ok(self)
    }

    /// Removes the element at position `at` and returns it. Fails under the same conditions as
    /// [`try_remove_at`](LinkedList::try_remove_at).
    pub fn take_at(&mut self, at: isize) -> Result<T, RemoveError> {
        if self.is_empty() {
            return Err(ContainerIsEmpty.into());
        }

        let error = self.out_of_bounds(at);
        let index = self.checked_index(at)?;
        self.unlink(index).ok_or(RemoveError::from(error))
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a [`Vec`] containing a clone of every element, from head to terminal node. The list
    /// is left untouched.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element equal to `value`.
    ///
    /// # Panics
    /// Panics if the list is empty or doesn't contain `value`. See
    /// [`try_delete`](LinkedList::try_delete).
    pub fn delete(&mut self, value: &T) -> &mut Self {
        self.try_delete(value).throw()
    }

    /// Removes the first element equal to `value`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_delete(&mut self, value: &T) -> Result<&mut Self, DeleteError> {
        if self.is_empty() {
            return Err(ContainerIsEmpty.into());
        }

        let index = self.index_of(value).ok_or(ContainerDoesNotContain)?;
        self.unlink(index).ok_or(ContainerDoesNotContain)?;
        Ok(self)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn out_of_bounds(&self, index: isize) -> IndexOutOfBounds {
        IndexOutOfBounds { index, len: self.len() }
    }

    /// Converts `index` to a position that is less than the length of the list, rejecting negative
    /// values.
    pub(crate) fn checked_index(&self, index: isize) -> Result<usize, IndexOutOfBounds> {
        usize::try_from(index)
            .ok()
            .filter(|&resolved| resolved < self.len())
            .ok_or(self.out_of_bounds(index))
    }

    /// Resolves a possibly negative `index` against the current length. The upper bound isn't
    /// checked here; that is left to the traversal.
    pub(crate) fn resolve_index(&self, index: isize) -> Result<usize, IndexOutOfBounds> {
        if self.is_empty() {
            return Err(self.out_of_bounds(index));
        }

        match usize::try_from(index) {
            Ok(resolved) => Ok(resolved),
            Err(_) => self.len()
                .checked_sub(index.unsigned_abs())
                .ok_or(self.out_of_bounds(index)),
        }
    }

    /// Unlinks the node at `index`, returning its value or [`None`] if the chain ends first.
    pub(crate) fn unlink(&mut self, index: usize) -> Option<T> {
        match index {
            0 => self.pop_front(),
            _ => match &mut self.state {
                Empty => None,
                Full(contents) => contents.unlink_after(index - 1),
            },
        }
    }

    /// Checks that the stored length matches the number of nodes reachable from the head.
    #[cfg(test)]
    pub(crate) fn verify_length(&self) {
        let mut reachable = 0;
        if let Full(contents) = &self.state {
            let mut link = Some(&contents.head);
            while let Some(node) = link {
                reachable += 1;
                link = node.next.as_ref();
            }
        }
        assert_eq!(
            self.len(), reachable,
            "Stored length should match the number of reachable nodes."
        );
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> Option<&Node<T>> {
        let mut node = &*self.head;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    pub fn seek_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = &mut *self.head;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    /// Links a new node holding `value` directly after the node at `index`.
    pub fn link_after(&mut self, index: usize, value: T) -> Option<()> {
        let len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        let prev = self.seek_mut(index)?;
        prev.next = Some(Node::boxed(value, prev.next.take()));
        self.len = len;
        Some(())
    }

    /// Unlinks the node directly after the node at `index` and returns its value.
    pub fn unlink_after(&mut self, index: usize) -> Option<T> {
        // A node following another means the list holds at least two.
        let len = self.len.checked_sub(1)?;
        let prev = self.seek_mut(index)?;
        let Node { value, next } = *prev.next.take()?;
        prev.next = next;
        self.len = len;
        Some(value)
    }

    /// Walks to the terminal node once, then links every item of `values` after it.
    pub fn extend<I: Iterator<Item = T>>(&mut self, values: I) {
        let mut link: &mut Link<T> = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }

        for value in values {
            self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
            link = &mut link.insert(Node::boxed(value, None)).next;
        }
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        ListContents {
            len: ONE,
            head: Node::boxed(value, None),
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<isize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        self.at(index)
    }
}

impl<T> IndexMut<isize> for LinkedList<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        if self.is_empty() {
            match iter.next() {
                Some(first) => self.state = ListState::single(first),
                None => return,
            }
        }

        if let Full(contents) = &mut self.state {
            contents.extend(iter);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        LinkedList::from_values(values)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head directly would recurse once per node.
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}
