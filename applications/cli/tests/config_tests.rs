use ammora_cli::{AppConfig, CliError};
use ammora_client::DEFAULT_BASE_URL;
use std::collections::HashMap;
use std::io::Write;

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_from_empty_file() {
    let file = write_config("");

    let config = AppConfig::load_with_env(Some(file.path()), no_env()).unwrap();

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.log.filter.contains("ammora"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_values() {
    let file = write_config(
        r#"
[api]
base_url = "http://localhost:9000/api"

[log]
filter = "debug"
"#,
    );

    let config = AppConfig::load_with_env(Some(file.path()), no_env()).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:9000/api");
    assert_eq!(config.log.filter, "debug");
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(
        r#"
[api]
base_url = "http://localhost:9000/api"
"#,
    );

    let env = HashMap::from([(
        "AMMORA_API__BASE_URL".to_string(),
        "https://staging.example.com/api".to_string(),
    )]);

    let config = AppConfig::load_with_env(Some(file.path()), Some(env)).unwrap();

    assert_eq!(config.api.base_url, "https://staging.example.com/api");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match AppConfig::load_with_env(Some(&path), no_env()).unwrap_err() {
        CliError::Config(msg) => assert!(msg.contains("not found")),
    }
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("[api\nbase_url = ");

    assert!(AppConfig::load_with_env(Some(file.path()), no_env()).is_err());
}

#[test]
fn test_validate_rejects_empty_base_url() {
    let mut config = AppConfig::default();
    config.api.base_url = "  ".to_string();

    match config.validate().unwrap_err() {
        CliError::Config(msg) => assert!(msg.contains("base URL")),
    }
}
