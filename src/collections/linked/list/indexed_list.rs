use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Iter, Link, Node};
#[doc(inline)]
pub use crate::util::error::{BrokenChain, IndexOutOfBounds, ListError};
use crate::util::fmt::{DebugEntries, write_chain};
use crate::util::result::ResultExtension;

/// A singly linked list, addressed by zero-based position.
///
/// Each node exclusively owns the node after it, and the list owns the first node. There are no
/// back-links, so every positional operation walks forward from the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the IndexedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `delete` | `O(i)` |
/// | `to_sequence` | `O(n)` |
///
/// # Errors
/// Positional operations come in pairs: `try_*` methods return a [`ListError`], while their
/// counterparts panic with the error's message. An error never leaves the list partially modified.
pub struct IndexedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> IndexedList<T> {
    /// Creates a new IndexedList with no elements.
    pub const fn new() -> IndexedList<T> {
        IndexedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list. This is a cached value and doesn't walk the
    /// chain.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// An alias of [`IndexedList::size`].
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the IndexedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the element at the provided `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Inserts `value` so that it ends up at `index`, shifting every following element back by one.
    /// `index` may be equal to the length of the list, in which case the value is appended.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list, or if the links are found to be
    /// corrupted.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        let link = self.link_at_mut(index)?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));

        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting every following element forward by
    /// one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list, or if the links are found to be corrupted.
    pub fn delete(&mut self, index: usize) -> T {
        self.try_delete(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_delete(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        let len = self.len;
        let link = self.link_at_mut(index)?;
        // Taking from an empty link leaves it empty, so a broken chain is still unmodified here.
        let node = link.take().ok_or(BrokenChain { index, len })?;
        *link = node.next;

        self.len -= 1;
        Ok(node.value)
    }

    /// Clones every element into a new [`Vec`], ordered from front to back.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> IndexedList<T> {
    /// Walks `index` links from the front and returns the link found there: the one pointing at the
    /// node currently at `index`, or the trailing empty link if `index` is the length.
    pub(crate) fn link_at_mut(&mut self, index: usize) -> Result<&mut Link<T>, BrokenChain> {
        let len = self.len;
        let mut link = &mut self.head;

        for step in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(BrokenChain { index: step, len }),
            }
        }

        Ok(link)
    }

    /// Checks that the cached length matches the number of nodes reachable from the front.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) -> Result<(), BrokenChain> {
        let mut count = 0;
        let mut curr = &self.head;

        while let Some(node) = curr {
            count += 1;
            curr = &node.next;
        }

        if count == self.len {
            Ok(())
        } else {
            Err(BrokenChain {
                index: count,
                len: self.len,
            })
        }
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for IndexedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, otherwise dropping the head would recurse through the
        // entire chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = IndexedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for IndexedList<T> {
    /// Appends every item to the back of the list, walking to the end only once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut len = self.len;
        let mut tail = &mut self.head;

        while let Some(node) = tail {
            tail = &mut node.next;
        }

        for value in iter {
            tail = &mut tail.insert(Node::boxed(value, None)).next;
            len += 1;
        }

        self.len = len;
    }
}

impl<T: Clone> Clone for IndexedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T: Hash> Hash for IndexedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for IndexedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for IndexedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}
