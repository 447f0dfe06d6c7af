//! Configuration module for Lau Radix.
//!
//! This module provides a layered configuration system that loads settings
//! from files (TOML, YAML, JSON) and overrides them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::data_structures::LauTrieConfig;
use crate::error::config::{ConfigError, ConfigOrigin};

pub mod reduction;
pub mod trie;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LAU";

/// Load the default configuration.
///
/// This loads the default configuration file and merges it with any environment
/// variables. A missing file is not an error: the built-in defaults are used.
///
/// # Returns
///
/// * `Ok(LauConfig)` if the configuration was successfully loaded
/// * `Err(ConfigError)` if the file or environment held invalid values
pub fn load_default_config() -> ConfigResult<LauConfig> {
    let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);

    match loader.load() {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()
        }
        Err(e) => Err(e),
    }
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Lau Radix.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LauConfig {
    /// Trie construction settings
    pub trie: trie::TrieSettings,

    /// Reduction settings
    pub reduction: reduction::ReductionConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl LauConfig {
    /// Trie settings merged with the reduction defaults used by `delete_words`.
    pub fn trie_config(&self) -> LauTrieConfig {
        let mut config = LauTrieConfig::new().with_prune_policy(self.reduction.policy);
        if let Some(max) = self.trie.max_key_length {
            config = config.with_max_key_length(max);
        }
        if let Some(attempts) = self.reduction.max_attempts {
            config = config.with_max_reduction_attempts(attempts);
        }
        config
    }
}

impl Validate for LauConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.reduction.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::invalid(
                "log.level",
                format!("expected trace, debug, info, warn or error, got {other:?}"),
            )),
        }
    }
}

/// Configuration loader for Lau Radix.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// The file layer is checked on its own before the environment is
    /// applied, so a parse error names the layer that caused it.
    ///
    /// # Returns
    ///
    /// * `Ok(LauConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LauConfig> {
        let defaults = Config::try_from(&LauConfig::default())
            .map_err(|e| parse_error(ConfigOrigin::Defaults, e))?;
        let mut builder = Config::builder().add_source(defaults);
        let mut origin = ConfigOrigin::Defaults;

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
            origin = ConfigOrigin::File(path.clone());
        }

        builder
            .build_cloned()
            .and_then(|config| config.try_deserialize::<LauConfig>())
            .map_err(|e| parse_error(origin, e))?;

        // Add environment variables with prefix
        let origin = ConfigOrigin::Environment(self.env_prefix.clone());
        let lau_config: LauConfig = builder
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| parse_error(origin, e))?;

        lau_config.validate()?;

        Ok(lau_config)
    }
}

fn parse_error(origin: ConfigOrigin, error: config::ConfigError) -> ConfigError {
    ConfigError::Parse {
        origin,
        message: error.to_string(),
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<LauConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: LauConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &LauConfig {
        &self.config
    }
}

/// Process-wide configuration.
static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: LauConfig) {
    if GLOBAL_CONFIG.set(Mutex::new(GlobalConfig::new(config))).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, `None` until [`init_global_config`] ran.
pub fn get_global_config() -> Option<GlobalConfig> {
    GLOBAL_CONFIG.get().map(|mutex| mutex.lock().clone())
}
