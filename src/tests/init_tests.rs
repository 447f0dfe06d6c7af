//! Tests for library initialization.

use super::{TestFixture, GLOBAL_STATE};
use crate::config::get_global_config;
use crate::error::get_error_reporting;

/// Test that `init` installs the reporter and the global configuration.
#[test]
fn test_init_installs_reporter_and_global_config() {
    let _guard = GLOBAL_STATE.lock();
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("init.toml", "[reduction]\ntarget_words = 17\n")
        .unwrap();

    let global = crate::init(Some(config_path.as_path())).unwrap();

    assert!(get_error_reporting().has_reporter());
    let installed = get_global_config().unwrap();
    assert_eq!(installed.get(), global.get());
    assert_eq!(installed.get().reduction.target_words, 17);

    // The slot is set once; a second init validates but keeps the first
    let other_path = fixture
        .create_file("init_other.toml", "[reduction]\ntarget_words = 3\n")
        .unwrap();
    let again = crate::init(Some(other_path.as_path())).unwrap();
    assert_eq!(again.get().reduction.target_words, 17);
}

/// Test that `init` reports configuration errors instead of installing them.
#[test]
fn test_init_rejects_invalid_config() {
    let _guard = GLOBAL_STATE.lock();
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("init_bad.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    assert!(crate::init(Some(config_path.as_path())).is_err());
    assert!(get_error_reporting().has_reporter());
}
