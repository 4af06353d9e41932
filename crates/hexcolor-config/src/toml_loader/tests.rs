//! Tests for TOML config loading and path resolution.

use super::*;
use crate::schema::OutputFormat;
use hexcolor_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hexcolor_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[output]
format = "json"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    // Defaults preserved
    assert_eq!(config.output.precision, 4);
    assert!(!config.output.hex);
    assert_eq!(config.parse.alpha, None);
}

#[test]
fn load_full_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[output]
format = "text"
precision = 2
hex = true

[parse]
alpha = 0.5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.output.precision, 2);
    assert!(config.output.hex);
    assert_eq!(config.parse.alpha, Some(0.5));
}

#[test]
fn load_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::HexColorConfig::default());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_unknown_format_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nprecision = 40\n\n[parse]\nalpha = 3.0\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("output.precision"));
    assert!(msg.contains("parse.alpha"));
}

#[test]
fn default_config_path_ends_with_hexcolor() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("hexcolor/config.toml"));
    }
}
