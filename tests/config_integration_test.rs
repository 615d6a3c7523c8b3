//! Configuration loading integration tests

use labsum::config::load_config;
use labsum::domain::LabsumError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labsum.toml");
    fs::write(
        &path,
        r#"
        [application]
        name = "labsum"
        log_level = "debug"

        [input]
        directory = "incoming"

        [output]
        directory = "out"
        branding = "banner.txt"

        [processing]
        skip_empty = true
        "#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.input.directory, PathBuf::from("incoming"));
    assert_eq!(config.output.branding, Some(PathBuf::from("banner.txt")));
    assert!(config.processing.skip_empty);
    assert!(!config.processing.dry_run);
}

#[test]
fn test_env_var_substitution() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labsum.toml");
    fs::write(
        &path,
        r#"
        [input]
        directory = "${LABSUM_TEST_SUBST_DIR}"
        "#,
    )
    .unwrap();

    std::env::set_var("LABSUM_TEST_SUBST_DIR", "substituted");
    let config = load_config(&path).unwrap();
    std::env::remove_var("LABSUM_TEST_SUBST_DIR");

    assert_eq!(config.input.directory, PathBuf::from("substituted"));
}

#[test]
fn test_missing_env_var_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labsum.toml");
    fs::write(
        &path,
        r#"
        [input]
        directory = "${LABSUM_TEST_NEVER_SET}"
        "#,
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, LabsumError::Configuration(_)));
    assert!(err.to_string().contains("LABSUM_TEST_NEVER_SET"));
}

#[test]
fn test_commented_placeholder_does_not_require_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labsum.toml");
    fs::write(
        &path,
        r#"
        # directory = "${LABSUM_TEST_COMMENTED_OUT}"
        [input]
        directory = "inbox"
        "#,
    )
    .unwrap();

    assert!(load_config(&path).is_ok());
}

#[test]
fn test_invalid_section_value_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labsum.toml");
    fs::write(
        &path,
        r#"
        [logging]
        local_rotation = "weekly"
        "#,
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("local_rotation"));
}
