use crate::config::{Config, ConfigError};
use longdrive_core::constants::{LONGDRIVE_DATA_DIR, LONGDRIVE_STORE_FILE};
use longdrive_core::longdrive_dir;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(LONGDRIVE_DATA_DIR);
    env::remove_var(LONGDRIVE_STORE_FILE);
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_dir, longdrive_dir());
    assert_eq!(config.store_file, "settings.json");
    assert_eq!(config.store_path(), longdrive_dir().join("settings.json"));
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    clear_env();
    env::set_var(LONGDRIVE_DATA_DIR, "/tmp/longdrive-test");
    env::set_var(LONGDRIVE_STORE_FILE, "golf.json");

    let config = Config::from_env().unwrap();

    assert_eq!(config.store_path(), PathBuf::from("/tmp/longdrive-test/golf.json"));

    clear_env();
}

#[test]
#[serial]
fn test_config_empty_data_dir() {
    clear_env();
    env::set_var(LONGDRIVE_DATA_DIR, "  ");

    assert_eq!(
        Config::from_env(),
        Err(ConfigError::EmptyValue(LONGDRIVE_DATA_DIR))
    );

    clear_env();
}

#[rstest]
#[case("")]
#[case("nested/settings.json")]
#[case("../settings.json")]
#[case("..")]
#[serial]
fn test_config_rejects_non_plain_store_file(#[case] name: &str) {
    clear_env();
    env::set_var(LONGDRIVE_STORE_FILE, name);

    assert_eq!(
        Config::from_env(),
        Err(ConfigError::InvalidStoreFile(name.to_string()))
    );

    clear_env();
}
