use std::fmt::{self, Debug, Display, Formatter};

use super::LinkedList;
use crate::util::fmt::DebugEntries;

/// The separator placed between elements by [`LinkedList`]'s [`Display`] implementation.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// A [`Display`] adapter that writes the elements of a [`LinkedList`] from head to terminal node,
/// with `separator` between each pair. Created by [`LinkedList::joined`].
pub struct Joined<'a, T> {
    list: &'a LinkedList<T>,
    separator: &'a str,
}

impl<T> LinkedList<T> {
    /// Returns an adapter that displays the list with a custom separator, e.g. `list.joined(",")`
    /// renders `[1, 2, 3]` as `1,2,3`.
    pub const fn joined<'a>(&'a self, separator: &'a str) -> Joined<'a, T> {
        Joined {
            list: self,
            separator,
        }
    }
}

impl<T: Display> Display for Joined<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.list.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, "{}{value}", self.separator)?;
            }
        }
        Ok(())
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.joined(DEFAULT_SEPARATOR), f)
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
