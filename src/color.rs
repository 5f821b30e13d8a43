//! Colors and hex color parsing.

use crate::error::{Error, Result};
use image::Rgba;

/// A background color and the text color drawn over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    /// Canvas fill.
    pub background: Rgba<u8>,
    /// Text paint.
    pub foreground: Rgba<u8>,
}

/// Parses a `#` followed by either 3 or 6 hex digits into an opaque color.
///
/// The 3 digit form is shorthand for doubling each digit, so `#f08` is `#ff0088`.
/// Any other length is an [`Error::Format`].
///
/// # Examples
/// ```
/// use image::Rgba;
/// use textcard::color::parse_hex;
///
/// assert_eq!(parse_hex("#f00").unwrap(), Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_hex("#00ff08").unwrap(), Rgba([0, 255, 8, 255]));
/// assert!(parse_hex("#ff00").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Rgba<u8>> {
    if s.len() != 4 && s.len() != 7 {
        return Err(Error::Format(format!(
            "{s:?} has length {}, must be 4 (#rgb) or 7 (#rrggbb)",
            s.len()
        )));
    }

    let digits = match s.strip_prefix('#') {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_hexdigit()) => digits.as_bytes(),
        _ => {
            return Err(Error::Format(format!(
                "{s:?} must be '#' followed by hex digits"
            )))
        }
    };

    let [r, g, b] = if digits.len() == 3 {
        // A single hex digit times 17 is the digit doubled, e.g. 0x2 * 17 == 0x22.
        [
            hex_value(digits[0]) * 17,
            hex_value(digits[1]) * 17,
            hex_value(digits[2]) * 17,
        ]
    } else {
        [
            (hex_value(digits[0]) << 4) | hex_value(digits[1]),
            (hex_value(digits[2]) << 4) | hex_value(digits[3]),
            (hex_value(digits[4]) << 4) | hex_value(digits[5]),
        ]
    };

    Ok(Rgba([r, g, b, u8::MAX]))
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
