//! Hex color string parsing.
//!
//! Turns `#RRGGBB` / `#RRGGBBAA` text (marker optional) into a [`Color`]
//! with normalized channels, and exposes the single-channel extraction
//! used to build it.
//!
//! ```rust
//! use hexcolor_parse::{color_component, parse_hex_color};
//!
//! let c = parse_hex_color("#0000FF80").unwrap();
//! assert_eq!(c.blue, 1.0);
//! assert!((c.alpha - 128.0 / 255.0).abs() < 1e-12);
//!
//! assert_eq!(color_component("FF", 0, 2).unwrap(), 1.0);
//! ```

pub mod hex;
pub mod serde_hex;

pub use hex::{
    color_component, is_hex_color, parse_hex_color, parse_hex_color_into,
    parse_hex_color_with_alpha,
};
pub use hexcolor_common::{Color, ColorError, FromChannels};
