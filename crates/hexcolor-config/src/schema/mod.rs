//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod output;
mod parse;

pub use output::*;
pub use parse::*;

use serde::{Deserialize, Serialize};

/// Root configuration for `hexcolor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexColorConfig {
    pub output: OutputConfig,
    pub parse: ParseConfig,
}
