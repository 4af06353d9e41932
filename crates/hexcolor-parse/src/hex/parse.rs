//! Low-level helpers shared by the public parsing functions.

use hexcolor_common::ColorError;
use regex::Regex;
use std::sync::LazyLock;

/// Whole-string hex color: optional marker, then 6 or 8 digits.
pub(super) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Longest group that still fits in a `u32`.
pub(super) const MAX_GROUP_DIGITS: usize = 8;

/// Trim surrounding whitespace and drop one leading `#`.
pub(super) fn strip_marker(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

/// Check the digit count of a marker-free hex string.
///
/// The count is in bytes, not characters: a valid color is pure ASCII, so
/// any multi-byte character either breaks the 6/8 length (`InvalidFormat`)
/// or fails the later digit check (`InvalidDigit`).
pub(super) fn check_digit_count(hex: &str, input: &str) -> Result<(), ColorError> {
    match hex.len() {
        0 => Err(ColorError::InvalidFormat("empty color string".into())),
        6 | 8 => Ok(()),
        n => Err(ColorError::InvalidFormat(format!(
            "expected 6 or 8 hex digits, got {n} in {input:?}"
        ))),
    }
}

/// Read `len` bytes starting at `start` as a base-16 integer.
///
/// Caller guarantees the range is in bounds and `len <= MAX_GROUP_DIGITS`.
/// Anything but `[0-9a-fA-F]` is rejected, including the sign characters
/// `u32::from_str_radix` would accept.
pub(super) fn parse_group(bytes: &[u8], start: usize, len: usize) -> Result<u32, ColorError> {
    let group = &bytes[start..start + len];
    let mut value = 0u32;
    for &b in group {
        match char::from(b).to_digit(16) {
            Some(d) => value = value * 16 + d,
            None => {
                return Err(ColorError::InvalidDigit {
                    position: start,
                    group: String::from_utf8_lossy(group).into_owned(),
                })
            }
        }
    }
    Ok(value)
}
