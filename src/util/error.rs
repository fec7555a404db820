use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when an index doesn't resolve to a node in the collection. `index` is the index as it
/// was provided, so it may be negative.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: isize,
    pub len: usize,
}

/// Returned by operations that need at least one element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Container is empty!")]
pub struct ContainerIsEmpty;

/// Returned when a search by value reaches the end of the collection without a match.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Container does not contain the requested value!")]
pub struct ContainerDoesNotContain;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The ways in which removing an element by value can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum DeleteError {
    ContainerIsEmpty(ContainerIsEmpty),
    ContainerDoesNotContain(ContainerDoesNotContain),
}

/// The ways in which removing an element by position can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    ContainerIsEmpty(ContainerIsEmpty),
    IndexOutOfBounds(IndexOutOfBounds),
}
