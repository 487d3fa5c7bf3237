//! Node identity
//!
//! Scene nodes are addressed by generational ids:
//! - Each node slot carries a generation counter
//! - Despawning a node frees its slot for reuse
//! - The generation increments on free, so stale ids held by gameplay code
//!   stop resolving instead of silently pointing at the new occupant

use serde::{Deserialize, Serialize};

/// Handle to a node in a [`Scene`](crate::Scene).
///
/// An index into the node arena plus the generation of that slot. Two ids
/// with the same index but different generations refer to different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Slot in the node arena
    index: u32,
    /// Version of that slot - increments when the slot is reused
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena slot of this node (for column access).
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A null/invalid node reference, for "no target" fields.
    pub const NULL: NodeId = NodeId { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::NULL
    }
}

/// Allocates node slots and tracks which ids are alive.
///
/// Freed slots are reused LIFO with their generation bumped, so old ids
/// never match the replacement node.
pub(crate) struct NodeAllocator {
    /// Generation counter for each slot
    generations: Vec<u32>,
    /// Free slots available for reuse
    free_indices: Vec<u32>,
    /// Next fresh index if no free slot is available
    next_fresh: u32,
    /// Number of currently alive nodes
    alive_count: u32,
}

impl NodeAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            next_fresh: 0,
            alive_count: 0,
        }
    }

    pub fn allocate(&mut self) -> NodeId {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped when the slot was freed
            NodeId::new(index, self.generations[index as usize])
        } else {
            let index = self.next_fresh;
            self.next_fresh += 1;
            self.generations.push(0);
            NodeId::new(index, 0)
        }
    }

    /// Free a node slot. Returns false if the id was already dead.
    pub fn free(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }

        self.generations[id.index as usize] += 1;
        self.free_indices.push(id.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        if id.is_null() {
            return false;
        }
        let idx = id.index as usize;
        idx < self.generations.len() && self.generations[idx] == id.generation
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}
