//! Configuration validation.
//!
//! Checks every numeric range and collects all problems into a single
//! `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::HexColorConfig;
use hexcolor_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HexColorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "output.precision", config.output.precision, 0, 10);

    if let Some(alpha) = config.parse.alpha {
        validate_range_f64(&mut errors, "parse.alpha", alpha, 0.0, 1.0);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
