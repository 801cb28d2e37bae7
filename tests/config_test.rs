//! Tests for client configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use broadside::ClientConfig;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.server_url(), "http://127.0.0.1:5000");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.log_file(), &PathBuf::from("broadside.log"));
}

#[test]
fn test_file_overrides_defaults() {
    let file = config_file(
        r#"
server_url = "https://scores.example.net"
request_timeout_secs = 3
"#,
    );

    let config = ClientConfig::load(Some(file.path())).expect("Valid config");
    assert_eq!(config.server_url(), "https://scores.example.net");
    assert_eq!(*config.request_timeout_secs(), 3);
    // Unset keys keep their defaults.
    assert_eq!(config.log_file(), &PathBuf::from("broadside.log"));
}

#[test]
fn test_cli_overrides_file() {
    let file = config_file("server_url = \"http://10.0.0.2:5000\"\n");

    let config = ClientConfig::load(Some(file.path()))
        .expect("Valid config")
        .with_overrides(
            Some("http://localhost:8080".to_string()),
            Some(30),
            Some(PathBuf::from("/tmp/broadside-test.log")),
        )
        .expect("Valid overrides");

    assert_eq!(config.server_url(), "http://localhost:8080");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/broadside-test.log"));
}

#[test]
fn test_invalid_values_rejected() {
    let file = config_file("server_url = \"ftp://example.net\"\n");
    let err = ClientConfig::load(Some(file.path())).expect_err("Not http");
    assert!(err.message.contains("server_url"));

    let err = ClientConfig::default()
        .with_overrides(None, Some(0), None)
        .expect_err("Zero timeout");
    assert!(err.message.contains("request_timeout_secs"));
}

#[test]
fn test_missing_or_broken_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let missing = dir.path().join("nope.toml");
    let err = ClientConfig::load(Some(missing.as_path())).expect_err("Missing file");
    assert!(err.message.contains("Failed to read config file"));

    let file = config_file("server_url = [not toml");
    let err = ClientConfig::load(Some(file.path())).expect_err("Bad TOML");
    assert!(err.message.contains("Failed to parse config"));
}
