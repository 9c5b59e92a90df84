use duelcalc::config::{Config, ConfigError};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.reset_delay_ms, 800);
    assert_eq!(config.avatars.presets.len(), 5);
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nreset_delay_ms = 400\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.reset_delay_ms, 400);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(!config.avatars.presets.is_empty());
}

#[test]
fn avatar_presets_can_be_overridden() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[avatars]\npresets = [\"one.png\", \"two.png\"]\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.avatars.presets, ["one.png", "two.png"]);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\ntick_rate_ms = ???").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn empty_avatar_presets_fail_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[avatars]\npresets = []\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
