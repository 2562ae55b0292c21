use std::iter::FusedIterator;

use super::{Arena, CursorRing, NodeHandle, RingContents, RingState};

impl<'a, T> IntoIterator for &'a CursorRing<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match self.state {
            RingState::Empty => Iter {
                nodes: &self.nodes,
                curr: None,
                remaining: 0,
            },
            RingState::Full(RingContents { cursor, len }) => Iter {
                nodes: &self.nodes,
                curr: Some(cursor),
                remaining: len.get(),
            },
        }
    }
}

/// A borrowing iterator over exactly one cycle of a [`CursorRing`], starting at the cursor.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Arena<T>,
    pub(crate) curr: Option<NodeHandle>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.curr?];
        self.curr = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
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
            nodes: self.nodes,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}
