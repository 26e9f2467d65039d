//! RGB color handling with hex parsing and Lab conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use std::ops::Range;

use super::LabColor;

/// RGB color value parsed from a hex string.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Reason a hex string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Not exactly six digits after the optional `#`.
    Length,
    /// Contains a character outside `0-9a-fA-F`.
    Digit,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchmaker::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex_digits(hex);

        if digits.len() != 6 {
            return Err(HexError::Length);
        }
        // from_str_radix accepts a leading '+', so check the digits first
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexError::Digit);
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| HexError::Digit);
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to CIE L*a*b* (D65 reference white).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchmaker::models::RgbColor;
    ///
    /// let lab = RgbColor::new(255, 0, 0).to_lab();
    /// assert_eq!(lab.rounded(), (53, 80, 67));
    /// ```
    #[must_use]
    pub fn to_lab(&self) -> LabColor {
        LabColor::from_rgb(*self)
    }

    /// Channels as fractions in 0.0-1.0.
    #[must_use]
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Strips whitespace and an optional leading `#`.
pub(crate) fn hex_digits(hex: &str) -> &str {
    let hex = hex.trim();
    hex.strip_prefix('#').unwrap_or(hex)
}
