use realodex_core::{load_config, AppConfig, ConfigError};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realodex.toml");
    std::fs::write(
        &path,
        "data_file = \"/srv/realodex/contacts.db\"\nlog_level = \"error\"\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.data_file, PathBuf::from("/srv/realodex/contacts.db"));
    assert_eq!(config.log_level, "error");
    assert_eq!(config.log_dir, AppConfig::default().log_dir);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realodex.toml");
    std::fs::write(&path, "data_file = [").unwrap();

    assert!(matches!(
        load_config(&path).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn directory_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config(dir.path()).unwrap_err(),
        ConfigError::Read { .. }
    ));
}
