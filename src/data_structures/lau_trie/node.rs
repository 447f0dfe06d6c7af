//! Node implementation for the Lau Trie.
//!
//! This module provides the `TrieNode` structure stored in the trie's arena,
//! the `NodeId` index used for child and parent links, and the public
//! `NodeHandle`/`NodeRef` pair callers use to inspect individual nodes.

use std::collections::BTreeMap;

use super::LauTrie;

/// Index of a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A node in the Lau Trie.
///
/// Each node holds a compressed label of one or more symbols. Terminal nodes
/// (`count > 0`) mark the end of an inserted string.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// Compressed label, never empty
    pub(crate) label: Vec<char>,

    /// How many times the string ending here was inserted
    pub(crate) count: usize,

    /// Terminal nodes in this subtree, this node included
    pub(crate) leaves: usize,

    /// Children keyed by the first symbol of their label
    pub(crate) children: BTreeMap<char, NodeId>,

    /// Non-owning link to the parent, `None` for roots
    pub(crate) parent: Option<NodeId>,
}

impl TrieNode {
    /// Creates a terminal node with no children.
    pub(crate) fn leaf(label: Vec<char>, parent: Option<NodeId>) -> Self {
        Self {
            label,
            count: 1,
            leaves: 1,
            children: BTreeMap::new(),
            parent,
        }
    }

    /// Creates a node from explicit counters.
    pub(crate) fn branch(
        label: Vec<char>,
        count: usize,
        leaves: usize,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            label,
            count,
            leaves,
            children: BTreeMap::new(),
            parent,
        }
    }

    /// First symbol of the label; the key under which the node is stored.
    pub(crate) fn key(&self) -> char {
        self.label[0]
    }

    /// Whether an inserted string ends at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.count > 0
    }
}

/// A stable reference to a node, as returned by queries such as
/// [`LauTrie::get_deepest_node`].
///
/// Handles survive further insertions. Once the node is removed by a
/// reduction the handle no longer resolves, even if its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) id: NodeId,
    pub(crate) generation: u64,
}

/// Read-only view of a single node.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) trie: &'a LauTrie,
    pub(crate) id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a TrieNode {
        &self.trie.arena[self.id]
    }

    /// The handle of this node.
    pub fn handle(&self) -> NodeHandle {
        self.trie.arena.handle(self.id)
    }

    /// The compressed label stored on this node.
    pub fn label(&self) -> String {
        self.node().label.iter().collect()
    }

    /// Number of times the string ending at this node was inserted.
    pub fn count(&self) -> usize {
        self.node().count
    }

    /// Number of terminal nodes in the subtree rooted here.
    pub fn leaves(&self) -> usize {
        self.node().leaves
    }

    /// Whether an inserted string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.node().is_terminal()
    }

    /// The parent node, `None` for roots.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef { trie: self.trie, id })
    }

    /// Children in ascending order of their first symbol.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let trie = self.trie;
        self.node()
            .children
            .values()
            .map(move |&id| NodeRef { trie, id })
    }

    /// Length in symbols of the full string ending at this node.
    pub fn depth(&self) -> usize {
        self.trie.depth_of(self.id)
    }

    /// The full string from the forest root down to this node.
    pub fn string(&self) -> String {
        self.trie.path_string(self.id)
    }
}
