//! A small family of hand-rolled linked containers: a positional singly linked list, a cursor-based
//! circular list and a capacity-bounded stack.
//!
//! # Purpose
//! These containers exist to work through explicit node and link manipulation in Rust: who owns
//! each node, how links are re-pointed during a splice and how a structure with no terminal link is
//! traversed and torn down. None of them depend on one another.
//!
//! # Error Handling
//! There are two kinds of failure here and they are deliberately kept apart.
//!
//! Some conditions are expected in normal use: pushing onto a full stack, popping an empty one,
//! advancing an empty ring or deleting a value that isn't there. These are reported through
//! ordinary return values (`bool`, [`Option`] or a [`Result`] that hands the value back) and never
//! panic.
//!
//! Others indicate a mistake by the caller or a broken internal invariant: an out-of-range index,
//! or a chain of links that ends earlier than its cached length says it should. These are strongly
//! typed errors, using enums for static dispatch with structs that implement
//! [`Error`](std::error::Error). Every method that can produce one has a `try_*` form returning the
//! error and a plain form that panics with its message. Neither form modifies the container when
//! it fails.
//!
//! # Dependencies
//! This crate depends on `derive_more` for the error enums, because the derives remove some very
//! repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{BrokenChain, CapacityOverflow, IndexOutOfBounds, ListError, StackFull};
