//! A LIFO stack with a fixed maximum size, built on a chain of owned nodes. See [`BoundedStack`].

mod bounded_stack;
mod iter;

pub use bounded_stack::*;
pub use iter::*;
