//! DashboardConfig Tests

use launch_dash_core::dashboard::{ConfigError, DashboardConfig, DEFAULT_TITLE};
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn defaults_bind_localhost() {
    let config = DashboardConfig::default();
    assert_eq!(config.addr(), "127.0.0.1:8050");
    assert!(!config.debug);
    assert_eq!(config.title, DEFAULT_TITLE);
    assert!(config.socket_addr().is_some());
}

#[test]
fn toml_overlays_only_given_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
title = "Launch Outcomes"

[server]
port = 9000
debug = true

[data]
path = "data/launches.csv"
"#
    )
    .unwrap();

    let config = DashboardConfig::load_from(file.path(), DashboardConfig::default()).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert!(config.debug);
    assert_eq!(config.dataset_path, PathBuf::from("data/launches.csv"));
    assert_eq!(config.title, "Launch Outcomes");
}

#[test]
fn missing_file_keeps_base() {
    let base = DashboardConfig {
        port: 1234,
        ..DashboardConfig::default()
    };
    let config =
        DashboardConfig::load_from(Path::new("/no/such/launch_dash.toml"), base.clone()).unwrap();
    assert_eq!(config, base);
}

#[test]
fn broken_toml_is_reported_to_caller() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = ").unwrap();

    let err = DashboardConfig::load_from(file.path(), DashboardConfig::default()).unwrap_err();
    match &err {
        ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn unreadable_config_is_read_error() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::load_from(dir.path(), DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
