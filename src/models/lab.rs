//! CIE L*a*b* conversion used to pick readable label colors.
//!
//! The conversion goes sRGB → linear RGB → XYZ (scaled to 0-100) → Lab with
//! the D65 reference white. Chart labels show the components rounded to whole
//! numbers, and the dark/light decision is made on the rounded lightness so
//! that what the label says always agrees with the branch taken.

#![allow(clippy::cast_possible_truncation)]

use std::fmt;

use super::RgbColor;
use crate::constants::DARK_LIGHTNESS_THRESHOLD;

/// D65 reference white, XYZ scaled to Y = 100.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// (6/29)^3
const EPSILON: f64 = 0.008_856;
const KAPPA_SLOPE: f64 = 7.787;

/// A color in CIE L*a*b* space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

impl LabColor {
    /// Converts an sRGB color to Lab.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.to_unit();
        let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

        let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0;
        let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0;
        let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Components rounded to integers, halves toward positive infinity.
    #[must_use]
    pub fn rounded(&self) -> (i32, i32, i32) {
        (round_half_up(self.l), round_half_up(self.a), round_half_up(self.b))
    }

    /// Whether a swatch of this color needs light label text.
    ///
    /// Dark means rounded lightness strictly below 50; exactly 50 is light.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        f64::from(self.rounded().0) < DARK_LIGHTNESS_THRESHOLD
    }
}

impl fmt::Display for LabColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, a, b) = self.rounded();
        write!(f, "L:{l} a:{a} b:{b}")
    }
}

/// Undo sRGB companding (IEC 61966-2-1).
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE.mul_add(t, 16.0 / 116.0)
    }
}

fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(hex: &str) -> LabColor {
        RgbColor::from_hex(hex).unwrap().to_lab()
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(lab("#ff0000").rounded(), (53, 80, 67));
        assert_eq!(lab("#00ff00").rounded(), (88, -86, 83));
        assert_eq!(lab("#0000ff").rounded(), (32, 79, -108));
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(lab("#000000").rounded(), (0, 0, 0));
        let white = lab("#ffffff");
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.5);
        assert!(white.b.abs() < 0.5);
    }

    #[test]
    fn test_lightness_is_monotonic_for_greys() {
        let dark = lab("#333333").l;
        let mid = lab("#777777").l;
        let light = lab("#cccccc").l;
        assert!(dark < mid && mid < light);
    }

    #[test]
    fn test_dark_navy_is_dark() {
        let navy = lab("#000080");
        assert!(navy.l < 30.0);
        assert!(navy.is_dark());
    }

    #[test]
    fn test_pale_yellow_is_light() {
        let pale = lab("#ffffe0");
        assert!(pale.l > 80.0);
        assert!(!pale.is_dark());
    }

    #[test]
    fn test_threshold_boundary() {
        // #777777 sits just above 50, #737373 clearly below
        let boundary = lab("#777777");
        assert_eq!(boundary.rounded().0, 50);
        assert!(!boundary.is_dark());

        let below = lab("#737373");
        assert_eq!(below.rounded().0, 48);
        assert!(below.is_dark());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(49.5), 50);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
        assert_eq!(round_half_up(-107.9), -108);
    }

    #[test]
    fn test_display() {
        assert_eq!(lab("#ff0000").to_string(), "L:53 a:80 b:67");
    }
}
