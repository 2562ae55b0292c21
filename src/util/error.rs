use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range that the operation accepts. Insertion accepts `0..=len`,
/// everything else accepts `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A walk along a chain of nodes ran out of links before reaching the position that the cached
/// length promised. This can only happen if the collection's internal state has been corrupted, so
/// it should never be treated as a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenChain {
    /// The position of the link that was missing.
    pub index: usize,
    /// The length that the collection claimed to have.
    pub len: usize,
}

impl Display for BrokenChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain ended at link {} of a collection claiming {} elements, links are corrupted!",
            self.index, self.len
        )
    }
}

impl Error for BrokenChain {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Any of the ways a positional list operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    BrokenChain(BrokenChain),
}

/// Returned when pushing onto a stack that is already at capacity. The rejected value is handed
/// back rather than dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct StackFull<T> {
    pub value: T,
    pub capacity: usize,
}

impl<T> StackFull<T> {
    /// Recovers the value that couldn't be pushed.
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Written by hand so that the error doesn't require T: Debug just to be printed.
impl<T> Debug for StackFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFull")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> Display for StackFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack is full! (capacity {})", self.capacity)
    }
}

impl<T> Error for StackFull<T> {}
