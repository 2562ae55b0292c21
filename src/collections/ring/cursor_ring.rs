use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

use super::{Arena, Iter, NodeHandle, RingNode};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::{DebugEntries, write_chain};
use crate::util::length::{Length, ONE};
use crate::util::result::ResultExtension;

/// A circular singly linked list with a cursor that always rests on a live node.
///
/// The cursor marks the most recently visited or inserted element. Inserting places the new value
/// directly after the cursor and moves the cursor onto it, so a sequence of inserts lays values
/// out in insertion order. [`CursorRing::next`] steps the cursor forward, wrapping around forever.
///
/// Because the ring has no end, every scan is bounded by its length rather than by reaching a
/// terminal link.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CursorRing.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `insert` | `O(1)` |
/// | `next` | `O(1)` |
/// | `current` | `O(1)` |
/// | `search` | `O(n)` |
/// | `delete` | `O(n)` |
#[derive(Clone)]
pub struct CursorRing<T> {
    pub(crate) nodes: Arena<T>,
    pub(crate) state: RingState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum RingState {
    #[default]
    Empty,
    Full(RingContents),
}

use RingState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RingContents {
    pub cursor: NodeHandle,
    pub len: Length,
}

impl<T> CursorRing<T> {
    /// Creates a new CursorRing with no elements.
    pub const fn new() -> CursorRing<T> {
        CursorRing {
            nodes: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the number of elements in the ring.
    pub const fn size(&self) -> usize {
        self.state.len()
    }

    /// An alias of [`CursorRing::size`].
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the CursorRing contains no elements, in which case there is no cursor.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the element under the cursor without moving it.
    pub fn current(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(RingContents { cursor, .. }) => Some(&self.nodes[cursor].value),
        }
    }

    /// Inserts `value` directly after the cursor and moves the cursor onto it. Inserting into an
    /// empty ring creates a single node that links to itself.
    pub fn insert(&mut self, value: T) {
        self.state = match self.state {
            Empty => {
                let node = self.nodes.alloc_with(|handle| RingNode { value, next: handle });
                Full(RingContents {
                    cursor: node,
                    len: ONE,
                })
            },
            Full(RingContents { cursor, len }) => {
                let len = len.checked_add(1).ok_or(CapacityOverflow).throw();
                let next = self.nodes[cursor].next;
                let node = self.nodes.alloc(RingNode { value, next });
                self.nodes[cursor].next = node;
                Full(RingContents { cursor: node, len })
            },
        };
    }

    /// Advances the cursor to the following node and returns its value. In a ring of one, the
    /// cursor moves back onto the same node. Returns [`None`] if the ring is empty.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        match &mut self.state {
            Empty => None,
            Full(RingContents { cursor, .. }) => {
                *cursor = self.nodes[*cursor].next;
                Some(&self.nodes[*cursor].value)
            },
        }
    }

    /// Returns an iterator over one full cycle of the ring, starting with the element under the
    /// cursor. The cursor isn't moved.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Clones one full cycle of the ring into a new [`Vec`], starting from the cursor.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> CursorRing<T> {
    /// Returns true if any element of the ring is equal to `value`. The cursor isn't moved.
    pub fn search(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Removes the first element equal to `value` and returns true, or returns false if there is
    /// no such element. See [`CursorRing::remove`] for the order in which elements are compared.
    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Elements are compared starting from the one after the cursor, finishing with the cursor
    /// itself, so at most one full cycle is scanned. If the removed node was under the cursor, the
    /// cursor moves back to the preceding node. Removing the last element empties the ring.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let Full(RingContents { cursor, len }) = self.state else {
            return None;
        };

        let mut prev = cursor;
        let mut curr = self.nodes[cursor].next;

        for _ in 0..len.get() {
            if self.nodes[curr].value == *value {
                self.state = match len.checked_sub(1) {
                    Some(new_len) => {
                        self.nodes[prev].next = self.nodes[curr].next;
                        Full(RingContents {
                            cursor: if curr == cursor { prev } else { cursor },
                            len: new_len,
                        })
                    },
                    None => Empty,
                };

                let node = self.nodes.release(curr)?;
                if self.state.is_empty() {
                    self.nodes.clear();
                }
                debug_assert!(self.verify_cycle(), "Ring links are corrupted after removal!");
                return Some(node.value);
            }

            prev = curr;
            curr = self.nodes[curr].next;
        }

        None
    }
}

impl<T> CursorRing<T> {
    /// Checks that following `len` links from the cursor returns to the cursor, visiting every live
    /// node exactly once.
    pub(crate) fn verify_cycle(&self) -> bool {
        match self.state {
            Empty => self.nodes.len() == 0,
            Full(RingContents { cursor, len }) => {
                let mut curr = cursor;
                for _ in 1..len.get() {
                    curr = self.nodes[curr].next;
                    if curr == cursor {
                        // Returned early, so the cycle is shorter than the length claims.
                        return false;
                    }
                }
                self.nodes[curr].next == cursor && self.nodes.len() == len.get()
            },
        }
    }
}

impl RingState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(RingContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for CursorRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CursorRing<T> {
    /// Builds a ring by inserting each item in turn, leaving the cursor on the last one.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = CursorRing::new();
        for item in iter {
            ring.insert(item);
        }
        ring
    }
}

impl<T: Debug> Debug for CursorRing<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorRing")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for CursorRing<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())?;
        if !self.is_empty() {
            write!(f, " -> ...")?;
        }
        Ok(())
    }
}
