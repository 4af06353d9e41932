use serde::{Deserialize, Serialize};

/// An sRGB color with four normalized channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Construction from four normalized channels.
///
/// Implement this for a UI toolkit's own color type to have the parser
/// build it directly.
pub trait FromChannels {
    fn from_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Self;
}

impl FromChannels for Color {
    fn from_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl FromChannels for [f32; 4] {
    fn from_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        [red as f32, green as f32, blue as f32, alpha as f32]
    }
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Channels scaled back to bytes, rounded to nearest and clamped.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
            channel_to_byte(self.alpha),
        ]
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`.
    pub fn to_hex_string_with_alpha(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
