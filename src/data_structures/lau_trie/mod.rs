// Copyright (c) 2025 Lau Radix Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie Implementation
//!
//! This module provides a compressed (radix) trie over strings with exact and
//! prefix membership, enumeration, and size-bounded reduction of the stored
//! word set.
//!
//! # Features
//!
//! - Node labels hold runs of symbols, so chains without branching take one node.
//! - Every node caches how many words its subtree holds, which keeps the
//!   distinct-word count exact through splits and reductions.
//! - Inserting a word again raises its multiplicity without touching structure.
//! - Reduction collapses the deepest subtrees into wildcard-terminated
//!   prefixes until at most N entries remain. With the default prune policy
//!   every stored word keeps a covering entry while the target allows it.
//!
//! # Example
//!
//! ```
//! use lau_radix_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! trie.insert("hello").unwrap();
//! trie.insert("help").unwrap();
//! trie.insert("world").unwrap();
//!
//! assert!(trie.exists("help"));
//! assert!(trie.sub_exists("hel"));
//! assert!(!trie.exists("hel"));
//!
//! trie.delete_words(2, '*').unwrap();
//! assert_eq!(trie.get_words(), vec!["hel*".to_string(), "world".to_string()]);
//! ```
//!
//! # Storage
//!
//! Nodes live in an arena owned by the trie. Children and parents refer to
//! each other by index, and the parent link is only ever used to rebuild a
//! node's string and to carry leaf-count changes upwards.
//!
//! The trie has no internal locking. Share it across threads behind a lock
//! held for the whole operation, since inserts rewrite links that traversals
//! read.

mod arena;
mod config;
mod error;
mod locator;
mod node;
mod reducer;
mod traversal;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use tracing::trace;

pub use config::{LauTrieConfig, PrunePolicy, ReductionOptions};
pub use error::{ExhaustionCause, LauTrieError, LauTrieResult};
pub use node::{NodeHandle, NodeRef};
pub use reducer::{ReductionReport, ReductionStep};
pub use traversal::StructuralViolation;

use arena::NodeArena;
use locator::Outcome;
use node::{NodeId, TrieNode};

/// Lau Trie is a compressed trie over strings.
///
/// Key features:
/// * Exact and prefix membership in time proportional to the key length
/// * Multiplicity tracking for repeated insertions
/// * Deterministic enumeration in lexicographic order
/// * Lossy reduction to a bounded number of wildcard-terminated prefixes
#[derive(Debug, Clone, Default)]
pub struct LauTrie {
    /// Owner of every node
    arena: NodeArena,

    /// Forest roots keyed by the first symbol of their label
    roots: BTreeMap<char, NodeId>,

    /// Number of distinct strings currently stored
    unique_words: usize,

    /// Configuration options
    config: LauTrieConfig,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LauTrieConfig::default())
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LauTrieConfig) -> Self {
        Self {
            arena: NodeArena::default(),
            roots: BTreeMap::new(),
            unique_words: 0,
            config,
        }
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Inserts a string into the trie.
    ///
    /// Inserting an empty string is a no-op. Inserting a string that is
    /// already present raises its multiplicity.
    ///
    /// # Arguments
    ///
    /// * `key` - The string to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the string became a new distinct entry.
    /// * `Err(LauTrieError)` - If the key is longer than the configured maximum.
    pub fn insert<K>(&mut self, key: K) -> LauTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Ok(false);
        }

        let symbols: Vec<char> = key.chars().collect();
        if let Some(max_length) = self.config.max_key_length {
            if symbols.len() > max_length {
                return Err(LauTrieError::KeyTooLong {
                    key: key.to_string(),
                    max_length,
                });
            }
        }

        Ok(self.insert_symbols(symbols))
    }

    /// Inserts every string of `keys`, returning how many were new.
    ///
    /// Stops at the first key that cannot be inserted.
    pub fn insert_all<I>(&mut self, keys: I) -> LauTrieResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut added = 0;
        for key in keys {
            if self.insert(key)? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn insert_symbols(&mut self, symbols: Vec<char>) -> bool {
        let Some(location) = self.locate(&symbols) else {
            let key = symbols[0];
            let root = self.arena.alloc(TrieNode::leaf(symbols, None));
            self.roots.insert(key, root);
            self.unique_words += 1;
            trace!(root = %key, "created new root");
            return true;
        };

        let node = location.node;
        let label_len = self.arena[node].label.len();
        match location.outcome(symbols.len(), label_len) {
            Outcome::Exact => {
                let current = &mut self.arena[node];
                current.count += 1;
                if current.count > 1 {
                    trace!(count = current.count, "raised multiplicity");
                    return false;
                }
                // an internal branch point became a word
                self.add_leaves(Some(node), 1);
                trace!("marked branch point terminal");
            }
            Outcome::Extend => {
                let rest = symbols[location.input_index..].to_vec();
                let key = rest[0];
                let child = self.arena.alloc(TrieNode::leaf(rest, Some(node)));
                self.arena[node].children.insert(key, child);
                self.add_leaves(Some(node), 1);
                trace!("added child");
            }
            Outcome::PrefixSplit => {
                let parent = self.split_label(node, location.label_index, 1);
                let above = self.arena[parent].parent;
                self.add_leaves(above, 1);
                trace!("split into two");
            }
            Outcome::BranchSplit => {
                let parent = self.split_label(node, location.label_index, 0);
                let rest = symbols[location.input_index..].to_vec();
                let key = rest[0];
                let son = self.arena.alloc(TrieNode::leaf(rest, Some(parent)));
                self.arena[parent].children.insert(key, son);
                let above = self.arena[parent].parent;
                self.add_leaves(above, 1);
                trace!("split into three");
            }
        }

        self.unique_words += 1;
        true
    }

    /// Splits `node`'s label before position `at`.
    ///
    /// A new node holding the prefix takes `node`'s place under its parent
    /// (or in the root map) and `node`, keeping the suffix, its count and its
    /// children, becomes the new node's child. The new node counts one leaf
    /// more than `node`: either itself (`count == 1`) or the sibling the
    /// caller attaches next.
    fn split_label(&mut self, node: NodeId, at: usize, count: usize) -> NodeId {
        let (prefix, above, leaves) = {
            let current = &mut self.arena[node];
            let suffix = current.label.split_off(at);
            let prefix = std::mem::replace(&mut current.label, suffix);
            (prefix, current.parent, current.leaves)
        };

        let key = prefix[0];
        let parent = self
            .arena
            .alloc(TrieNode::branch(prefix, count, leaves + 1, above));
        match above {
            Some(above) => {
                self.arena[above].children.insert(key, parent);
            }
            None => {
                self.roots.insert(key, parent);
            }
        }

        let child_key = self.arena[node].key();
        self.arena[node].parent = Some(parent);
        self.arena[parent].children.insert(child_key, node);
        parent
    }

    /// Adds `delta` leaves to `start` and every ancestor.
    fn add_leaves(&mut self, start: Option<NodeId>, delta: usize) {
        let mut cursor = start;
        while let Some(id) = cursor {
            let node = &mut self.arena[id];
            node.leaves += delta;
            cursor = node.parent;
        }
    }

    /// Removes `delta` leaves from `start` and every ancestor.
    fn sub_leaves(&mut self, start: Option<NodeId>, delta: usize) {
        let mut cursor = start;
        while let Some(id) = cursor {
            let node = &mut self.arena[id];
            node.leaves -= delta;
            cursor = node.parent;
        }
    }

    /// Checks if `key` was inserted into the trie.
    pub fn exists<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.multiplicity(key) > 0
    }

    /// Checks if some inserted string starts with `prefix`.
    ///
    /// The empty prefix matches whenever the trie holds at least one word.
    pub fn sub_exists<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        let symbols: Vec<char> = prefix.as_ref().chars().collect();
        if symbols.is_empty() {
            return !self.is_empty();
        }

        self.locate(&symbols)
            .is_some_and(|location| location.input_index == symbols.len())
    }

    /// Number of times `key` was inserted, 0 if it is not present.
    pub fn multiplicity<K>(&self, key: K) -> usize
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let symbols: Vec<char> = key.chars().collect();
        let Some(location) = self.locate(&symbols) else {
            return 0;
        };

        let node = &self.arena[location.node];
        if location.outcome(symbols.len(), node.label.len()) != Outcome::Exact {
            return 0;
        }
        debug_assert_eq!(self.path_string(location.node), key);
        node.count
    }

    /// Number of distinct strings stored.
    pub fn unique_word_count(&self) -> usize {
        self.unique_words
    }

    /// Number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.unique_words
    }

    /// Checks if the trie holds no strings.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nodes currently allocated.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Removes every string from the trie. Outstanding handles stop resolving.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.roots.clear();
        self.unique_words = 0;
    }

    /// Read-only view of the node behind `handle`.
    pub fn node(&self, handle: NodeHandle) -> Option<NodeRef<'_>> {
        self.arena
            .resolve(handle)
            .map(|id| NodeRef { trie: self, id })
    }

    /// The forest roots in ascending order of their first symbol.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.values().map(move |&id| NodeRef { trie: self, id })
    }

    /// Rebuilds the full string ending at the node behind `handle`.
    pub fn get_string(&self, handle: NodeHandle) -> Option<String> {
        self.arena.resolve(handle).map(|id| self.path_string(id))
    }

    /// Concatenates the labels from the forest root down to `id`.
    pub(crate) fn path_string(&self, id: NodeId) -> String {
        let mut labels = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.arena[current];
            labels.push(&node.label);
            cursor = node.parent;
        }
        labels.iter().rev().flat_map(|label| label.iter()).collect()
    }

    /// Length in symbols of the string ending at `id`.
    pub(crate) fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.arena[current];
            depth += node.label.len();
            cursor = node.parent;
        }
        depth
    }
}
