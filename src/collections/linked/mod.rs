//! Singly linked collection types. Primarily revolves around [`IndexedList`], a list addressed by
//! zero-based position.

pub mod list;

#[doc(inline)]
pub use list::IndexedList;
