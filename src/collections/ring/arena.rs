use std::mem;
use std::ops::{Index, IndexMut};

/// A stable reference to a node within an [`Arena`]. Handles stay valid until the node they refer
/// to is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeHandle(usize);

#[derive(Debug, Clone)]
pub(crate) struct RingNode<T> {
    pub value: T,
    pub next: NodeHandle,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(RingNode<T>),
    Vacant { next_free: Option<NodeHandle> },
}

/// Backing storage for ring nodes. Released slots form a free list and are reused before the
/// storage grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeHandle>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    /// The number of live nodes.
    pub const fn len(&self) -> usize {
        self.occupied
    }

    /// Stores the node built by `init`, which receives the handle that the node will live at. This
    /// allows a node to link to itself.
    pub fn alloc_with(&mut self, init: impl FnOnce(NodeHandle) -> RingNode<T>) -> NodeHandle {
        if let Some(handle) = self.free {
            if let Slot::Vacant { next_free } = self.slots[handle.0] {
                self.slots[handle.0] = Slot::Occupied(init(handle));
                self.free = next_free;
                self.occupied += 1;
                return handle;
            }
        }

        let handle = NodeHandle(self.slots.len());
        self.slots.push(Slot::Occupied(init(handle)));
        self.occupied += 1;
        handle
    }

    pub fn alloc(&mut self, node: RingNode<T>) -> NodeHandle {
        self.alloc_with(|_| node)
    }

    /// Removes the node at `handle` and returns it, or [`None`] if there was no live node there.
    pub fn release(&mut self, handle: NodeHandle) -> Option<RingNode<T>> {
        let slot = self.slots.get_mut(handle.0)?;

        match mem::replace(slot, Slot::Vacant { next_free: self.free }) {
            Slot::Occupied(node) => {
                self.free = Some(handle);
                self.occupied -= 1;
                Some(node)
            },
            vacant => {
                *slot = vacant;
                None
            },
        }
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&RingNode<T>> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut RingNode<T>> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// The number of slots, live or vacant.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops every node and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeHandle> for Arena<T> {
    type Output = RingNode<T>;

    /// # Panics
    /// Panics if `handle` doesn't refer to a live node, which means the ring's links are corrupted.
    fn index(&self, handle: NodeHandle) -> &Self::Output {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("Handle {} doesn't refer to a live ring node!", handle.0),
        }
    }
}

impl<T> IndexMut<NodeHandle> for Arena<T> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(node) => node,
            None => panic!("Handle {} doesn't refer to a live ring node!", handle.0),
        }
    }
}
