//! Integration tests for config file resolution
//!
//! Covers the priority order (CLI → ENV → user config → defaults) and the
//! rule that a missing config file never prevents startup.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions.
//! Tests that touch HOTEL_MERGER_CONFIG are marked with #[serial].

use hotel_common::config::{ConfigResolver, ConfigSource, TomlConfig, CONFIG_ENV_VAR};
use hotel_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_no_config_anywhere_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();

    let loaded = ConfigResolver::new(None)
        .with_user_config_path(Some(temp_dir.path().join("absent.toml")))
        .load()
        .unwrap();

    assert_eq!(loaded.config, TomlConfig::default());
    assert_eq!(loaded.source, ConfigSource::Defaults { missing: None });
}

#[test]
#[serial]
fn test_cli_path_takes_precedence_over_env() {
    let temp_dir = TempDir::new().unwrap();
    let cli = write_config(&temp_dir, "cli.toml", "[logging]\nlevel = \"debug\"\n");
    let from_env = write_config(&temp_dir, "env.toml", "[logging]\nlevel = \"warn\"\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let loaded = ConfigResolver::new(Some(cli.clone())).load().unwrap();

    assert_eq!(loaded.config.logging.level, "debug");
    assert_eq!(loaded.source, ConfigSource::CommandLine(cli));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_takes_precedence_over_user_config() {
    let temp_dir = TempDir::new().unwrap();
    let user = write_config(&temp_dir, "user.toml", "[merge]\nsimilarity_cutoff = 0.5\n");
    let from_env = write_config(&temp_dir, "env.toml", "[merge]\nsimilarity_cutoff = 0.95\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let loaded = ConfigResolver::new(None)
        .with_user_config_path(Some(user))
        .load()
        .unwrap();

    assert_eq!(loaded.config.merge.cutoff(), 0.95);
    assert_eq!(loaded.source, ConfigSource::Environment(from_env));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_user_config_file_is_used() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let user = write_config(
        &temp_dir,
        "config.toml",
        "[suppliers]\nacme_url = \"http://localhost:9000/acme\"\ntimeout_secs = 3\n",
    );

    let loaded = ConfigResolver::new(None)
        .with_user_config_path(Some(user.clone()))
        .load()
        .unwrap();

    assert_eq!(loaded.config.suppliers.acme_url, "http://localhost:9000/acme");
    assert_eq!(loaded.config.suppliers.timeout_secs, 3);
    // Unspecified endpoints keep their defaults
    assert!(loaded.config.suppliers.paperflies_url.ends_with("/paperflies"));
    assert_eq!(loaded.source, ConfigSource::UserConfig(user));
}

#[test]
#[serial]
fn test_missing_explicit_file_falls_back_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let loaded = ConfigResolver::new(Some(missing.clone())).load().unwrap();

    assert_eq!(loaded.config, TomlConfig::default());
    assert_eq!(loaded.source, ConfigSource::Defaults { missing: Some(missing) });
}

#[test]
#[serial]
fn test_malformed_explicit_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let broken = write_config(&temp_dir, "broken.toml", "[merge\nsimilarity_cutoff = ");

    let result = ConfigResolver::new(Some(broken)).load();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_blank_env_var_is_ignored() {
    env::set_var(CONFIG_ENV_VAR, "   ");

    let loaded = ConfigResolver::new(None)
        .with_user_config_path(None)
        .load()
        .unwrap();

    assert_eq!(loaded.source, ConfigSource::Defaults { missing: None });

    env::remove_var(CONFIG_ENV_VAR);
}
