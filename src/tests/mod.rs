//! Test modules for Lau Radix.
//!
//! This module contains the crate-level testing infrastructure:
//! - Unit tests for configuration and error handling
//! - Corpus tests that run word lists through build, reduction and coverage
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! Trie internals are tested next to the code in `data_structures::lau_trie`.

pub mod config_tests;
pub mod corpus_tests;
pub mod init_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, word_list_strategy, word_strategy, TestFixture};

/// Held by tests that install process-wide state (error reporter, global
/// configuration) so they do not observe each other's installs.
pub static GLOBAL_STATE: parking_lot::Mutex<()> = parking_lot::const_mutex(());
