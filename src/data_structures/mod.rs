//! Data structures for Lau Radix.
//!
//! This module contains the string index at the heart of the crate.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Iterative traversals, so input size never limits stack depth
//! - Deterministic iteration order

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieConfig, LauTrieError, LauTrieResult};
