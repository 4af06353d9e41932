use serde::{Deserialize, Serialize};

/// Parsing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Replace every color's alpha with this value (valid range: 0.0-1.0).
    pub alpha: Option<f64>,
}
