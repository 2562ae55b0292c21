#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insert_and_next() {
    let mut ring = CursorRing::new();
    assert_eq!(ring.next(), None, "An empty ring has nothing to advance to.");

    ring.insert('A');
    ring.insert('B');
    ring.insert('C');

    assert_eq!(ring.size(), 3);
    assert_eq!(ring.current(), Some(&'C'), "The cursor should rest on the last insert.");
    assert_eq!(ring.next(), Some(&'A'), "Advancing from the last insert should wrap around.");
    assert_eq!(ring.next(), Some(&'B'));
    assert_eq!(ring.next(), Some(&'C'));
    assert_eq!(ring.next(), Some(&'A'));
    assert!(ring.verify_cycle());
}

#[test]
fn test_single_node_cycle() {
    let mut ring = CursorRing::new();
    ring.insert(7);

    assert!(ring.verify_cycle(), "A single node should link to itself.");
    assert_eq!(ring.next(), Some(&7));
    assert_eq!(ring.next(), Some(&7), "The only node is its own successor.");
    assert_eq!(ring.to_sequence(), [7]);
}

#[test]
fn test_insert_after_cursor() {
    let mut ring = CursorRing::from_iter(['A', 'B', 'C']);
    ring.next();

    // Cursor is on 'A', so 'X' lands between 'A' and 'B'.
    ring.insert('X');
    assert_eq!(ring.current(), Some(&'X'));
    assert_eq!(ring.to_sequence(), ['X', 'B', 'C', 'A']);
    assert!(ring.verify_cycle());
}

#[test]
fn test_delete_and_cursor() {
    let mut ring = CursorRing::from_iter(['A', 'B', 'C']);
    ring.next();
    ring.next();

    assert!(ring.search(&'B'));
    assert!(!ring.search(&'Z'));

    assert!(ring.delete(&'A'), "Deleting an existing value should succeed.");
    assert!(!ring.delete(&'2'), "Deleting a missing value should fail.");
    assert_eq!(ring.size(), 2);
    assert_eq!(ring.current(), Some(&'B'), "Deleting another node shouldn't move the cursor.");
    assert_eq!(
        iter::repeat_with(|| ring.next().copied()).take(4).collect::<Vec<_>>(),
        [Some('C'), Some('B'), Some('C'), Some('B')]
    );
    assert!(!ring.delete(&'4'));

    ring.insert('D');
    assert_eq!(ring.size(), 3);
    assert!(ring.search(&'D'));
    assert_eq!(ring.next(), Some(&'C'));

    assert!(ring.delete(&'C'));
    assert_eq!(
        ring.current(),
        Some(&'D'),
        "Deleting the node under the cursor should move the cursor to its predecessor."
    );
    assert_eq!(ring.size(), 2);
    assert_eq!(
        iter::repeat_with(|| ring.next().copied()).take(4).collect::<Vec<_>>(),
        [Some('B'), Some('D'), Some('B'), Some('D')]
    );
    assert!(ring.verify_cycle());
}

#[test]
fn test_delete_scan_order() {
    let mut ring = CursorRing::from_iter([1, 2, 1, 3]);

    // The scan starts after the cursor (on 3), so the first 1 is removed.
    assert_eq!(ring.remove(&1), Some(1));
    assert_eq!(ring.to_sequence(), [3, 2, 1]);
}

#[test]
fn test_delete_last_node() {
    let mut ring = CursorRing::new();
    ring.insert("only");

    assert!(ring.delete(&"only"));
    assert!(ring.is_empty(), "Deleting the only node should empty the ring.");
    assert_eq!(ring.size(), 0);
    assert_eq!(ring.next(), None);
    assert_eq!(ring.current(), None);
    assert!(!ring.delete(&"only"), "Deleting from an empty ring should fail softly.");
    assert!(!ring.search(&"only"));
    assert!(ring.verify_cycle());

    ring.insert("again");
    assert_eq!(ring.next(), Some(&"again"), "An emptied ring should be reusable.");
}

#[test]
fn test_slot_reuse() {
    let mut ring = CursorRing::from_iter(0..4);
    assert_eq!(ring.nodes.slot_count(), 4);

    ring.delete(&1);
    ring.delete(&2);
    ring.insert(10);
    ring.insert(11);

    assert_eq!(ring.nodes.slot_count(), 4, "Released slots should be reused before growing.");
    assert_eq!(ring.to_sequence(), [11, 0, 3, 10]);
    assert!(ring.verify_cycle());
}

#[test]
fn test_formatting() {
    let mut ring = CursorRing::from_iter(['A', 'B']);

    assert_eq!(format!("{ring}"), "('B') -> ('A') -> ...");
    ring.next();
    assert_eq!(format!("{ring:?}"), "CursorRing { contents: ['A', 'B'], len: 2 }");
    assert_eq!(format!("{}", CursorRing::<u8>::new()), "");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut ring = CursorRing::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(ring.remove(&counter));
    assert_eq!(counter.count(), 1, "A removed value should be handed to the caller.");

    drop(ring);
    assert_eq!(
        counter.count(),
        10,
        "Dropping a ring should release every node exactly once."
    );
}

proptest! {
    #[test]
    fn search_never_moves_cursor(
        values in prop::collection::vec(0..16_u8, 1..24),
        steps in 0..32_usize,
        needle in 0..16_u8,
    ) {
        let mut ring = CursorRing::from_iter(values.iter().copied());
        for _ in 0..steps {
            ring.next();
        }
        let mut untouched = ring.clone();

        prop_assert_eq!(ring.search(&needle), values.contains(&needle));
        ring.search(&needle);

        for _ in 0..values.len() * 2 {
            prop_assert_eq!(ring.next(), untouched.next());
        }
    }

    #[test]
    fn delete_keeps_a_single_cycle(
        values in prop::collection::vec(0..8_u8, 0..24),
        deletions in prop::collection::vec(0..8_u8, 0..24),
    ) {
        let mut ring = CursorRing::from_iter(values.iter().copied());
        let mut expected = values.len();

        for target in deletions {
            let found = ring.search(&target);
            prop_assert_eq!(ring.delete(&target), found);
            if found {
                expected -= 1;
            }
            prop_assert_eq!(ring.size(), expected);
            prop_assert!(ring.verify_cycle());
            prop_assert_eq!(ring.current().is_some(), expected != 0);
        }
    }
}
