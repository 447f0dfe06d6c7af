//! Whole-trie traversals: enumeration, deepest-node lookup, structural
//! validation and the printable dump.
//!
//! All walks use an explicit stack, so key length never bounds call depth.
//! Children are visited in ascending symbol order, which makes every walk a
//! lexicographic pre-order over the stored strings.

use std::fmt;

use super::node::{NodeHandle, NodeId};
use super::LauTrie;

/// One node reached by a [`Walk`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Visit {
    pub(crate) id: NodeId,
    /// Symbols from the forest root through this node's label
    pub(crate) depth: usize,
    /// Nodes above this one, 0 for roots
    pub(crate) level: usize,
}

/// Pre-order iterator over every node of the forest.
pub(crate) struct Walk<'a> {
    trie: &'a LauTrie,
    stack: Vec<(NodeId, usize, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let (id, above, level) = self.stack.pop()?;
        let node = &self.trie.arena[id];
        let depth = above + node.label.len();
        self.stack
            .extend(node.children.values().rev().map(|&child| (child, depth, level + 1)));
        Some(Visit { id, depth, level })
    }
}

/// A broken structural invariant, as reported by [`LauTrie::validate_detailed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralViolation {
    /// A node has an empty label.
    #[error("Node under '{parent}' has an empty label")]
    EmptyLabel {
        /// Label of the parent, empty for roots
        parent: String,
    },

    /// A child does not point back at the node holding it.
    #[error("Node '{label}' does not point back at its parent")]
    ParentMismatch {
        /// Label of the child
        label: String,
    },

    /// A node is stored under a key other than its first symbol.
    #[error("Node '{label}' is stored under key '{key}'")]
    KeyMismatch {
        /// Label of the misplaced node
        label: String,
        /// The key it was found under
        key: char,
    },

    /// A child link refers to a freed slot.
    #[error("Node '{parent}' links to a freed child")]
    DanglingChild {
        /// Label of the node holding the link
        parent: String,
    },

    /// A cached leaf count disagrees with the node's subtree.
    #[error("Node '{label}' caches {actual} leaves but its subtree holds {expected}")]
    LeafCount {
        /// Label of the node
        label: String,
        /// Leaves computed from the subtree
        expected: usize,
        /// Leaves cached on the node
        actual: usize,
    },

    /// The distinct-word counter disagrees with the roots.
    #[error("Trie counts {actual} words but its roots hold {expected}")]
    WordCount {
        /// Sum of root leaf counts
        expected: usize,
        /// The trie's counter
        actual: usize,
    },

    /// Some allocated nodes are not reachable from any root.
    #[error("{live} nodes are allocated but only {reachable} are reachable")]
    Unreachable {
        /// Allocated nodes
        live: usize,
        /// Nodes reachable from the roots
        reachable: usize,
    },
}

impl LauTrie {
    pub(crate) fn walk(&self) -> Walk<'_> {
        Walk {
            trie: self,
            stack: self.roots.values().rev().map(|&id| (id, 0, 0)).collect(),
        }
    }

    /// All stored strings (nodes with `count > 0`) in lexicographic order.
    pub fn get_words(&self) -> Vec<String> {
        self.walk()
            .filter(|visit| self.arena[visit.id].is_terminal())
            .map(|visit| self.path_string(visit.id))
            .collect()
    }

    /// Handles of all childless nodes, in lexicographic order of their strings.
    pub fn get_leaves(&self) -> Vec<NodeHandle> {
        self.walk()
            .filter(|visit| self.arena[visit.id].children.is_empty())
            .map(|visit| self.arena.handle(visit.id))
            .collect()
    }

    /// Strings ending at childless nodes, in lexicographic order.
    pub fn get_strings(&self) -> Vec<String> {
        self.walk()
            .filter(|visit| self.arena[visit.id].children.is_empty())
            .map(|visit| self.path_string(visit.id))
            .collect()
    }

    /// The node with the longest path from its forest root, measured in
    /// symbols. Ties go to the lexicographically smallest string.
    pub fn get_deepest_node(&self) -> Option<NodeHandle> {
        self.deepest(false).map(|id| self.arena.handle(id))
    }

    /// The longest stored path string, empty when the trie is empty.
    pub fn get_longest_string(&self) -> String {
        self.deepest(false)
            .map(|id| self.path_string(id))
            .unwrap_or_default()
    }

    /// Deepest node, optionally skipping roots.
    pub(crate) fn deepest(&self, below_roots: bool) -> Option<NodeId> {
        let mut best: Option<Visit> = None;
        for visit in self.walk() {
            if below_roots && visit.level == 0 {
                continue;
            }
            if best.map_or(true, |current| visit.depth > current.depth) {
                best = Some(visit);
            }
        }
        best.map(|visit| visit.id)
    }

    /// Checks the structural invariants of the trie.
    ///
    /// Returns `true` when every child points back at its parent, every node
    /// is keyed by its first symbol and every cached leaf count is correct.
    pub fn validate(&self) -> bool {
        self.validate_detailed().is_ok()
    }

    /// Like [`LauTrie::validate`], reporting the first violation found.
    pub fn validate_detailed(&self) -> Result<(), StructuralViolation> {
        let mut reachable = 0;
        let mut root_leaves = 0;
        // (node, expected parent, key it is stored under)
        let mut stack = Vec::new();

        for (&key, &root) in &self.roots {
            let Some(node) = self.arena.get(root) else {
                return Err(StructuralViolation::DanglingChild {
                    parent: String::new(),
                });
            };
            root_leaves += node.leaves;
            stack.push((root, None, key));
        }

        while let Some((id, parent, key)) = stack.pop() {
            reachable += 1;
            let node = &self.arena[id];
            let label: String = node.label.iter().collect();

            if node.label.is_empty() {
                let parent = parent
                    .map(|p| self.arena[p].label.iter().collect())
                    .unwrap_or_default();
                return Err(StructuralViolation::EmptyLabel { parent });
            }
            if node.parent != parent {
                return Err(StructuralViolation::ParentMismatch { label });
            }
            if node.key() != key {
                return Err(StructuralViolation::KeyMismatch { label, key });
            }

            let mut expected = usize::from(node.is_terminal());
            for (&child_key, &child) in &node.children {
                let Some(child_node) = self.arena.get(child) else {
                    return Err(StructuralViolation::DanglingChild { parent: label });
                };
                expected += child_node.leaves;
                stack.push((child, Some(id), child_key));
            }
            if node.leaves != expected {
                return Err(StructuralViolation::LeafCount {
                    label,
                    expected,
                    actual: node.leaves,
                });
            }
        }

        if root_leaves != self.unique_words {
            return Err(StructuralViolation::WordCount {
                expected: root_leaves,
                actual: self.unique_words,
            });
        }
        if reachable != self.arena.len() {
            return Err(StructuralViolation::Unreachable {
                live: self.arena.len(),
                reachable,
            });
        }
        Ok(())
    }
}

/// Indented dump of the forest, one `label : count : leaves` line per node.
impl fmt::Display for LauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.walk() {
            let node = &self.arena[visit.id];
            let label: String = node.label.iter().collect();
            writeln!(
                f,
                "{:indent$}{} : {} : {}",
                "",
                label,
                node.count,
                node.leaves,
                indent = visit.level * 2
            )?;
        }
        Ok(())
    }
}
