//! Errors raised while loading Lau Radix configuration.
//!
//! Every failure names where it came from: the built-in defaults, a file, or
//! the `LAU__*` environment overrides layered on top.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The configuration layer a value was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Values compiled into the crate
    Defaults,
    /// A configuration file
    File(PathBuf),
    /// Environment variables with the given prefix
    Environment(String),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => f.write_str("built-in defaults"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Environment(prefix) => write!(f, "{prefix}__* environment variables"),
        }
    }
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Only `.toml`, `.json`, `.yaml` and `.yml` files are read.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A layer could not be read or did not fit the configuration shape.
    #[error("Failed to parse configuration from {origin}: {message}")]
    Parse {
        /// Layer that failed
        origin: ConfigOrigin,
        /// Parser message
        message: String,
    },

    /// A value parsed but is not allowed.
    #[error("Invalid configuration value {key}: {message}")]
    Invalid {
        /// Dotted key, e.g. `reduction.replacement`
        key: String,
        /// What is wrong with the value
        message: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// The dotted key of an invalid value, if this is a validation failure.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}
