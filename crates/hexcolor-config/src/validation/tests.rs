//! Tests for config validation.

use super::*;

#[test]
fn default_config_validates() {
    let config = HexColorConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_precision_too_large() {
    let mut config = HexColorConfig::default();
    config.output.precision = 11;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("output.precision"));
}

#[test]
fn accepts_precision_bounds() {
    let mut config = HexColorConfig::default();
    config.output.precision = 0;
    assert!(validate(&config).is_ok());
    config.output.precision = 10;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_alpha_out_of_range() {
    let mut config = HexColorConfig::default();
    config.parse.alpha = Some(1.2);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("parse.alpha"));

    config.parse.alpha = Some(f64::NAN);
    assert!(validate(&config).is_err());
}

#[test]
fn accepts_alpha_in_range() {
    let mut config = HexColorConfig::default();
    config.parse.alpha = Some(0.0);
    assert!(validate(&config).is_ok());
    config.parse.alpha = Some(1.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = HexColorConfig::default();
    config.output.precision = 50;
    config.parse.alpha = Some(-1.0);
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("output.precision"));
    assert!(msg.contains("parse.alpha"));
    assert!(msg.contains("; "));
}
