//! Node storage for the tree.
//!
//! Nodes live in a slot arena and refer to each other by [`NodeId`] rather
//! than by owning pointers. Vacated slots go onto a free list and are
//! reused by later allocations, so a set that churns does not grow its
//! backing storage beyond its high-water mark. Dropping the arena drops
//! one `Vec`, regardless of the tree's shape.

/// A handle to a node slot in a [`NodeArena`].
///
/// A handle is only meaningful for the arena that issued it and becomes
/// dangling once its slot is vacated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct NodeId(usize);

/// A single tree node.
#[derive(Copy, Clone, Debug)]
pub(super) struct Node {
    pub key: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub fn leaf(key: i64) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Default)]
pub(super) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
}

impl NodeArena {
    /// Number of live (non-vacated) nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Node {
        self.slots[id.0].expect("NodeArena::get: vacated slot")
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0]
            .as_mut()
            .expect("NodeArena::get_mut: vacated slot")
    }

    /// Vacates a slot, returning the node that occupied it.
    pub fn take(&mut self, id: NodeId) -> Node {
        let node = self.slots[id.0]
            .take()
            .expect("NodeArena::take: vacated slot");
        self.free.push(id);
        node
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
