//! Config defaults, TOML overrides and file loading.

use std::time::Duration;

use scumdb_core::config::EditorConfig;
use scumdb_core::SaveEditError;

#[test]
fn defaults_when_empty() {
    let config = EditorConfig::from_toml("").unwrap();
    assert_eq!(config.database.effective_path().to_str(), Some("scum.db"));
    assert!(config.database.effective_verify_layout());
    assert_eq!(config.database.effective_busy_timeout(), Duration::from_millis(5000));
    assert!(config.backup.effective_disambiguate());
    assert_eq!(config.logging.effective_level(), "info");
}

#[test]
fn partial_sections_override_only_given_fields() {
    let config = EditorConfig::from_toml(
        r#"
[database]
path = "/srv/scum/SCUM.db"

[backup]
disambiguate = false

[logging]
level = "scumdb_storage=debug"
"#,
    )
    .unwrap();
    assert_eq!(
        config.database.effective_path().to_str(),
        Some("/srv/scum/SCUM.db")
    );
    assert!(config.database.effective_verify_layout());
    assert!(!config.backup.effective_disambiguate());
    assert_eq!(config.logging.effective_level(), "scumdb_storage=debug");
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("scumdb.toml");
    std::fs::write(&path, "[database\npath = 1").unwrap();
    let err = EditorConfig::load(&path).unwrap_err();
    assert!(matches!(err, SaveEditError::TomlParse(_)), "{err:?}");
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn missing_config_file_is_config_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = EditorConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn for_database_sets_only_path() {
    let config = EditorConfig::for_database("saves/scum.db");
    assert_eq!(
        config.database.effective_path(),
        std::path::PathBuf::from("saves/scum.db")
    );
    assert!(config.backup.effective_disambiguate());
}

#[test]
fn invalid_log_level_is_rejected() {
    std::env::remove_var("RUST_LOG");
    let config = EditorConfig::from_toml("[logging]\nlevel = \"scumdb=verbose\"").unwrap();
    let err = scumdb_core::logging::init_tracing(&config.logging).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
