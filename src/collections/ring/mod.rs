//! A circular singly linked list navigated by an internal cursor. See [`CursorRing`].
//!
//! Nodes live in an arena and link to each other through handles rather than owning
//! pointers, so the cycle never has to be broken before the ring can be dropped.

mod arena;
mod cursor_ring;
mod iter;
mod tests;

pub(crate) use arena::*;
pub use cursor_ring::*;
pub use iter::*;
