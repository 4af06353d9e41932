//! Configuration for the `hexcolor` command-line tool.
//!
//! A small TOML file controls output formatting and an optional alpha
//! override. Every field has a default, so an empty or partial file works.
//!
//! ```rust,no_run
//! use hexcolor_config::{load_config, OutputFormat};
//!
//! let config = load_config().expect("failed to load config");
//! assert!(matches!(config.output.format, OutputFormat::Text | OutputFormat::Json));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HexColorConfig, OutputConfig, OutputFormat, ParseConfig};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use hexcolor_common::ConfigError;

/// Load config from the platform default path, or defaults if absent.
pub fn load_config() -> Result<HexColorConfig, ConfigError> {
    load_default()
}
