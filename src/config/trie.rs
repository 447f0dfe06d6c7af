//! Trie configuration module.
//!
//! This module defines the settings applied while words are loaded into the trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie construction settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrieSettings {
    /// Longest accepted word in symbols, unbounded when absent
    pub max_key_length: Option<usize>,
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == Some(0) {
            return Err(ConfigError::invalid("trie.max_key_length", "must be greater than 0"));
        }
        Ok(())
    }
}
