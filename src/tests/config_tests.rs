//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::TestFixture;
use crate::config::{
    reduction::ReductionConfig, trie::TrieSettings, ConfigLoader, LauConfig, LogConfig, Validate,
};
use crate::data_structures::lau_trie::PrunePolicy;
use crate::error::config::{ConfigError, ConfigOrigin};
use std::fs;
use tempfile::tempdir;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LauConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.reduction.replacement_symbol().unwrap(), '*');
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LauConfig::default();

    config.trie.max_key_length = Some(0);
    assert_eq!(config.validate().unwrap_err().key(), Some("trie.max_key_length"));

    config.trie.max_key_length = Some(64);
    config.reduction.max_attempts = Some(0);
    assert_eq!(config.validate().unwrap_err().key(), Some("reduction.max_attempts"));

    config.reduction.max_attempts = Some(10);
    config.log.level = "verbose".to_string();
    assert_eq!(config.validate().unwrap_err().key(), Some("log.level"));

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test_case("*", true ; "single ascii symbol")]
#[test_case("…", true ; "single multibyte symbol")]
#[test_case("", false ; "empty")]
#[test_case("**", false ; "two symbols")]
fn test_replacement_must_be_one_symbol(replacement: &str, valid: bool) {
    let config = ReductionConfig {
        replacement: replacement.to_string(),
        ..ReductionConfig::default()
    };
    assert_eq!(config.validate().is_ok(), valid);
    assert_eq!(config.to_options().is_ok(), valid);
}

/// Test that the sections map onto the trie and reduction settings.
#[test]
fn test_config_conversions() {
    let config = LauConfig {
        trie: TrieSettings {
            max_key_length: Some(32),
        },
        reduction: ReductionConfig {
            target_words: 7,
            replacement: "#".to_string(),
            max_attempts: Some(3),
            policy: PrunePolicy::DeepestNode,
        },
        log: LogConfig::default(),
    };

    let trie_config = config.trie_config();
    assert_eq!(trie_config.max_key_length, Some(32));
    assert_eq!(trie_config.max_reduction_attempts, Some(3));
    assert_eq!(trie_config.prune_policy, PrunePolicy::DeepestNode);

    let options = config.reduction.to_options().unwrap();
    assert_eq!(options.target, 7);
    assert_eq!(options.replacement, '#');
    assert_eq!(options.max_attempts, Some(3));
    assert_eq!(options.policy, PrunePolicy::DeepestNode);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [trie]
    max_key_length = 40

    [reduction]
    target_words = 12
    policy = "deepest_node"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.trie.max_key_length, Some(40));
    assert_eq!(config.reduction.target_words, 12);
    assert_eq!(config.reduction.policy, PrunePolicy::DeepestNode);

    // Other values should be defaults
    assert_eq!(config.reduction.replacement, "*");
    assert_eq!(config.reduction.max_attempts, None);
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            "[reduction]\ntarget_words = 12\nreplacement = \"*\"\n",
        )
        .unwrap();

    // Set environment variables with a unique prefix
    fixture.set_env("TEST_ENV__REDUCTION__TARGET_WORDS", "5");
    fixture.set_env("TEST_ENV__REDUCTION__REPLACEMENT", "?");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.reduction.target_words, 5);
    assert_eq!(config.reduction.replacement, "?");
    assert_eq!(config.log.level, "debug");
}

/// Test that loading a configuration without a file uses the defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_NO_FILE");
    assert_eq!(loader.load().unwrap(), LauConfig::default());
}

/// Test that a missing file is reported as such.
#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("missing.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    match loader.load() {
        Err(ConfigError::FileNotFound(path)) => assert_eq!(path, config_path),
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    let config_content = r#"
    [reduction
    target_words = ten"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    match loader.load() {
        Err(ConfigError::Parse { origin, .. }) => {
            assert_eq!(origin, ConfigOrigin::File(config_path));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Test that a malformed environment override is blamed on the environment.
#[test]
fn test_env_parse_error_names_environment() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env_parse.toml", "[reduction]\ntarget_words = 12\n")
        .unwrap();
    fixture.set_env("TEST_ENV_PARSE__REDUCTION__TARGET_WORDS", "twelve");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV_PARSE");
    match loader.load() {
        Err(ConfigError::Parse { origin, message }) => {
            assert_eq!(origin, ConfigOrigin::Environment("TEST_ENV_PARSE".to_string()));
            assert!(!message.is_empty());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Test that a value of the wrong type in the file is blamed on the file.
#[test]
fn test_file_type_error_names_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("wrong_type.toml");
    fs::write(&config_path, "[reduction]\ntarget_words = \"twelve\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE_TYPE");
    let error = loader.load().unwrap_err();
    assert!(error.to_string().contains("wrong_type.toml"), "{error}");
    assert!(matches!(
        error,
        ConfigError::Parse {
            origin: ConfigOrigin::File(_),
            ..
        }
    ));
}

/// Test that a well-formed file with invalid values fails validation.
#[test]
fn test_load_config_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad_values.toml");
    fs::write(&config_path, "[reduction]\nreplacement = \"ab\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_VALUES");
    let error = loader.load().unwrap_err();
    assert_eq!(error.key(), Some("reduction.replacement"));
}

/// Test that an unknown extension is rejected.
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "level=info").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXTENSION");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::UnsupportedFormat(path)) if path == config_path
    ));
}

/// Test that generated configuration loads back unchanged.
#[test]
fn test_generated_config_round_trip() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    let toml = toml::to_string_pretty(&LauConfig::default()).unwrap();
    fs::write(&config_path, toml).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_GENERATED");
    assert_eq!(loader.load().unwrap(), LauConfig::default());
}
