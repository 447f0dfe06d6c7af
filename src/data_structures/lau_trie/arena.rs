//! Slot storage for trie nodes.
//!
//! Every node lives in a slot of the arena; parent and child links are plain
//! `NodeId` indices. Freed slots are recycled, and each slot carries a
//! generation counter so that outstanding `NodeHandle`s stop resolving once
//! the node they named is gone.

use std::ops::{Index, IndexMut};

use super::node::{NodeHandle, NodeId, TrieNode};

#[derive(Debug, Clone)]
struct Slot {
    generation: u64,
    node: Option<TrieNode>,
}

/// Owner of all nodes of one trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl NodeArena {
    /// Stores `node` and returns its id, reusing a freed slot when possible.
    pub(crate) fn alloc(&mut self, node: TrieNode) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node in `id`'s slot, invalidating every handle to it.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<TrieNode> {
        let slot = self.slots.get_mut(id.0)?;
        let node = slot.node.take()?;
        slot.generation += 1;
        self.free.push(id.0);
        self.live -= 1;
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.slots.get(id.0).and_then(|slot| slot.node.as_ref())
    }

    /// A handle naming the current occupant of `id`'s slot.
    pub(crate) fn handle(&self, id: NodeId) -> NodeHandle {
        let generation = self.slots.get(id.0).map_or(0, |slot| slot.generation);
        NodeHandle { id, generation }
    }

    /// The id behind `handle`, if the node it named still exists.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<NodeId> {
        let slot = self.slots.get(handle.id.0)?;
        (slot.generation == handle.generation && slot.node.is_some()).then_some(handle.id)
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Drops every node. Generations are kept so stale handles stay stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
            }
            self.free.push(index);
        }
        self.live = 0;
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &TrieNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {} is not live", id.0),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        match self.slots.get_mut(id.0).and_then(|slot| slot.node.as_mut()) {
            Some(node) => node,
            None => panic!("node {} is not live", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_release() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(TrieNode::leaf(vec!['a'], None));
        let b = arena.alloc(TrieNode::leaf(vec!['b'], None));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a].key(), 'a');
        assert_eq!(arena[b].key(), 'b');

        let released = arena.release(a).map(|node| node.label);
        assert_eq!(released, Some(vec!['a']));
        assert_eq!(arena.len(), 1);
        assert!(arena.get(a).is_none());
        assert!(arena.release(a).is_none());
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(TrieNode::leaf(vec!['a'], None));
        let handle = arena.handle(a);
        assert_eq!(arena.resolve(handle), Some(a));

        arena.release(a);
        let c = arena.alloc(TrieNode::leaf(vec!['c'], None));
        assert_eq!(c, a, "freed slot should be reused");
        assert_eq!(arena.resolve(handle), None);
        assert_eq!(arena.resolve(arena.handle(c)), Some(c));
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(TrieNode::leaf(vec!['a'], None));
        let handle = arena.handle(a);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.resolve(handle), None);
        let b = arena.alloc(TrieNode::leaf(vec!['b'], None));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[b].key(), 'b');
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn test_index_vacant_slot_panics() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(TrieNode::leaf(vec!['a'], None));
        arena.release(a);
        let _ = &arena[a];
    }
}
