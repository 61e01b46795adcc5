use spillpay::config::{Config, ConfigError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.display.currency_symbol, "$");
    assert!(config.storage.data_dir.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("spillpay/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_valid_toml() {
    let (_dir, path) = write_config(
        r#"
[display]
currency_symbol = "€"

[storage]
data_dir = "/srv/spillpay"

[logging]
level = "debug"
file = "/var/log/spillpay.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.currency_symbol, "€");
    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/spillpay")));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.data_dir(), PathBuf::from("/srv/spillpay"));
    assert_eq!(
        config.log_file(Path::new("/ignored")),
        PathBuf::from("/var/log/spillpay.log")
    );
}

#[test]
fn test_partial_toml_fills_defaults() {
    let (_dir, path) = write_config("[display]\ncurrency_symbol = \"£\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.currency_symbol, "£");
    assert_eq!(config.logging.level, "info");
    assert!(config.storage.data_dir.is_none());
}

#[test]
fn test_log_file_defaults_into_data_dir() {
    let config = Config::default();
    assert_eq!(
        config.log_file(Path::new("/data")),
        PathBuf::from("/data/spillpay.log")
    );
}

#[test]
fn test_parse_invalid_toml() {
    let (_dir, path) = write_config("[display\ncurrency_symbol = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_unknown_level() {
    let (_dir, path) = write_config("[logging]\nlevel = \"chatty\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("chatty"));
}

#[test]
fn test_validation_accepts_uppercase_level() {
    let mut config = Config::default();
    config.logging.level = "WARN".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_roundtrip() {
    let mut config = Config::default();
    config.display.currency_symbol = "kr ".to_string();
    config.storage.data_dir = Some(PathBuf::from("/tmp/names"));
    config.logging.file = Some(PathBuf::from("/tmp/names/log"));
    let toml = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml).unwrap();
    assert_eq!(parsed, config);
}
