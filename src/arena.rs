use std::ops::{Index, IndexMut};

/// Handle to one occupied slot of an [`Arena`].
///
/// Ids are plain indices, so they are `Copy` and comparable; a node points
/// at its neighbours by storing their ids instead of owning them. An id is
/// only meaningful for the arena that produced it and only until the slot
/// is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// Slab of nodes backing a list.
///
/// All nodes of a list live in one `Vec`; the links between them are
/// [`NodeId`]s rather than owning pointers. Removing a node leaves its slot
/// vacant and pushes the id onto a free list, so later insertions reuse the
/// space. Because the storage is flat, dropping the arena releases every
/// node in one pass no matter how the links are wired, and a list never
/// recurses or leaks on teardown.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Vec<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot<N> {
    Occupied(N),
    Vacant,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its id, reusing the most recently freed
    /// slot if there is one.
    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Vacates the slot and hands the node back.
    pub(crate) fn remove(&mut self, id: NodeId) -> N {
        match std::mem::replace(&mut self.slots[id.0], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.free.push(id);
                node
            }
            Slot::Vacant => panic!("slot {} removed twice", id.0),
        }
    }

    /// Drops all nodes and forgets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("slot {} is vacant", id.0),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("slot {} is vacant", id.0),
        }
    }
}
