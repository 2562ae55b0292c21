use std::iter::FusedIterator;

use super::{IndexedList, Node};

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

/// A borrowing iterator over an [`IndexedList`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) curr: Option<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|node| {
            self.curr = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}
