//! Hex color parsing and channel extraction.
//!
//! Accepts `#RRGGBB` and `#RRGGBBAA`; the `#` marker is optional and
//! surrounding whitespace is ignored. Each two-digit group is divided by
//! 255 to give a channel in `[0.0, 1.0]`. Alpha defaults to opaque.

mod parse;


use hexcolor_common::{Color, ColorError, FromChannels};

use parse::{check_digit_count, parse_group, strip_marker, HEX_RE, MAX_GROUP_DIGITS};

/// Parse a hex color string into a [`Color`].
///
/// Accepted formats:
/// - `#RRGGBB` / `RRGGBB` (alpha = 1.0)
/// - `#RRGGBBAA` / `RRGGBBAA`
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    parse_hex_color_into(s)
}

/// Parse a hex color string and hand the channels to `T`'s constructor.
pub fn parse_hex_color_into<T: FromChannels>(s: &str) -> Result<T, ColorError> {
    let hex = strip_marker(s);

    let channels = check_digit_count(hex, s).and_then(|()| {
        let red = color_component(hex, 0, 2)?;
        let green = color_component(hex, 2, 2)?;
        let blue = color_component(hex, 4, 2)?;
        let alpha = if hex.len() >= 8 {
            color_component(hex, 6, 2)?
        } else {
            1.0
        };
        Ok((red, green, blue, alpha))
    });

    match channels {
        Ok((red, green, blue, alpha)) => Ok(T::from_channels(red, green, blue, alpha)),
        Err(e) => {
            tracing::debug!("rejected hex color {s:?}: {e}");
            Err(e)
        }
    }
}

/// Parse a hex color string, replacing its alpha with `alpha`.
///
/// Any alpha group in the string is ignored. `alpha` must lie in `[0, 1]`.
pub fn parse_hex_color_with_alpha(s: &str, alpha: f64) -> Result<Color, ColorError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ColorError::AlphaOutOfRange(alpha));
    }
    parse_hex_color(s).map(|c| c.with_alpha(alpha))
}

/// Read one channel: `length` hex digits of `s` starting at byte `start`,
/// divided by 255.
///
/// The result is not clamped, so groups longer than two digits can exceed
/// 1.0.
pub fn color_component(s: &str, start: usize, length: usize) -> Result<f64, ColorError> {
    if length == 0 || length > MAX_GROUP_DIGITS {
        return Err(ColorError::InvalidFormat(format!(
            "component length must be 1-{MAX_GROUP_DIGITS}, got {length}"
        )));
    }

    let out_of_range = || ColorError::OutOfRange {
        start,
        length,
        len: s.len(),
    };
    let end = start.checked_add(length).ok_or_else(out_of_range)?;
    if end > s.len() {
        return Err(out_of_range());
    }

    let value = parse_group(s.as_bytes(), start, length)?;
    Ok(f64::from(value) / 255.0)
}

/// Whether `s` is a hex color [`parse_hex_color`] accepts.
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}
