use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
#[doc(inline)]
pub use crate::util::error::StackFull;
use crate::util::fmt::DebugEntries;

pub(crate) type StackLink<T> = Option<Box<StackNode<T>>>;

pub(crate) struct StackNode<T> {
    pub value: T,
    pub below: StackLink<T>,
}

/// A last-in-first-out stack which holds at most `capacity` elements.
///
/// Hitting either bound isn't treated as an error: pushing onto a full stack is rejected and
/// popping or peeking an empty stack yields [`None`], both without modifying the stack.
///
/// # Time Complexity
/// Every method is `O(1)`, except for iteration and `to_sequence`, which are `O(n)`.
pub struct BoundedStack<T> {
    pub(crate) top: StackLink<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
}

impl<T> BoundedStack<T> {
    /// The capacity used by [`BoundedStack::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates a new, empty BoundedStack that can hold [`BoundedStack::DEFAULT_CAPACITY`]
    /// elements.
    pub const fn new() -> BoundedStack<T> {
        BoundedStack::with_cap(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new, empty BoundedStack that can hold `cap` elements. A capacity of 0 produces a
    /// stack that rejects every push.
    pub const fn with_cap(cap: usize) -> BoundedStack<T> {
        BoundedStack {
            top: None,
            len: 0,
            cap,
        }
    }

    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of elements on the stack.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// An alias of [`BoundedStack::size`].
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn empty(&self) -> bool {
        self.top.is_none()
    }

    /// An alias of [`BoundedStack::empty`].
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub const fn is_full(&self) -> bool {
        self.len >= self.cap
    }

    /// Pushes `value` onto the stack, returning an [`Err`] containing the value if the stack is
    /// already full.
    pub fn try_push(&mut self, value: T) -> Result<(), StackFull<T>> {
        if self.is_full() {
            return Err(StackFull {
                value,
                capacity: self.cap,
            });
        }

        let below = self.top.take();
        self.top = Some(Box::new(StackNode { value, below }));
        self.len += 1;
        Ok(())
    }

    /// Pushes `value` onto the stack, returning false (and dropping `value`) if the stack is
    /// already full.
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Removes the top element and returns it, or [`None`] if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            self.top = node.below;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the top element, or [`None`] if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_deref_mut().map(|node| &mut node.value)
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Clones every element into a new [`Vec`], ordered from the bottom of the stack to the top.
    /// This is the order in which the elements were pushed.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.reverse();
        items
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BoundedStack<T> {
    fn drop(&mut self) {
        let mut curr = self.top.take();
        while let Some(mut node) = curr {
            curr = node.below.take();
        }
    }
}

impl<T: Debug> Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug> Display for BoundedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut items: Vec<&T> = self.iter().collect();
        items.reverse();
        write!(f, "Stack({items:?})")
    }
}
