//! Serialize a [`Color`] field as `#rrggbbaa` text.
//!
//! ```rust
//! use hexcolor_parse::Color;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Swatch {
//!     #[serde(with = "hexcolor_parse::serde_hex")]
//!     color: Color,
//! }
//! ```

use hexcolor_common::Color;
use serde::{Deserialize, Deserializer, Serializer};

use crate::hex::parse_hex_color;

pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex_string_with_alpha())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_hex_color(&s).map_err(serde::de::Error::custom)
}
