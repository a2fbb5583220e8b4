#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Config file round trips through a temp dir.

use echo_terminal::config::EchoConfig;
use echo_terminal::TerminalError;
use tempfile::TempDir;

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = EchoConfig::default();
    config.ui.dark_mode = false;
    config.call.tick_interval_ms = 500;
    config.save(&path).unwrap();

    let loaded = EchoConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("echo.toml");
    std::fs::write(&path, "[ui]\ndark_mode = false\n").unwrap();

    let loaded = EchoConfig::load(&path).unwrap();
    assert!(!loaded.ui.dark_mode);
    assert_eq!(loaded.ui.tick_rate_ms, EchoConfig::default().ui.tick_rate_ms);
    assert_eq!(loaded.logging.level, "info");
}

#[test]
fn test_zero_tick_rejected_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[call]\ntick_interval_ms = 0\n").unwrap();

    match EchoConfig::load(&path) {
        Err(TerminalError::Config { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[ui\n").unwrap();

    assert!(matches!(
        EchoConfig::load(&path),
        Err(TerminalError::ConfigParse(_))
    ));
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        EchoConfig::discover(Some(&missing)),
        Err(TerminalError::Io(_))
    ));
}
