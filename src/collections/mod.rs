//! Hand-rolled linked container types.
//!
//! # Purpose
//! Each of these types is built from explicitly linked nodes rather than a contiguous buffer, which
//! makes ownership of the links the interesting part of every operation.
//!
//! # Method
//! Chains that end ([`IndexedList`](linked::IndexedList) and [`BoundedStack`](stack::BoundedStack))
//! use owning `Box` links. The [`CursorRing`](ring::CursorRing) is a true cycle, so its nodes live
//! in an arena and refer to each other by handle.

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "ring")]
pub mod ring;
#[cfg(feature = "stack")]
pub mod stack;
