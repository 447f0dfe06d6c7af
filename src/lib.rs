//! Lau Radix Library
//!
//! This library contains the compressed radix trie at the core of Lau Radix,
//! the wildcard reduction that shrinks a word list to a bounded set of
//! patterns, and the configuration and corpus helpers used by the binary.
//!
//! # Architecture
//!
//! Lau Radix is designed with the following principles in mind:
//! - Strict component boundaries
//! - Single-owner node storage with index links instead of shared pointers
//! - Deterministic results for identical input
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Lau Radix.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter, then loads the configuration from
/// `config_path` (or the default location) into the global slot. The global
/// slot is set once per process: later calls still validate their
/// configuration but return the one installed first.
pub fn init(config_path: Option<&std::path::Path>) -> error::LauResult<config::GlobalConfig> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    let loaded = match config_path {
        Some(path) => config::ConfigLoader::new(Some(path), config::ENV_PREFIX).load()?,
        None => config::load_default_config()?,
    };
    config::init_global_config(loaded);

    config::get_global_config().ok_or_else(|| {
        error::LauError::Custom("Global configuration is not initialized".to_string())
    })
}
