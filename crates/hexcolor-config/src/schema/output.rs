//! Output formatting configuration types.

use serde::{Deserialize, Serialize};

/// How parsed colors are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for text output (valid range: 0-10).
    pub precision: u32,
    /// Also print the normalized `#rrggbb` form.
    pub hex: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 4,
            hex: false,
        }
    }
}
