//! Application-wide constants.
//!
//! Built-in defaults for everything the command line and config file can
//! override. The defaults reproduce the classic swatch chart exactly.

/// The display name of the application.
pub const APP_NAME: &str = "Swatchmaker";

/// Colour scheme key selected when none is configured.
pub const DEFAULT_SCHEME: &str = "vogel5000";

/// Swatch width in SVG user units.
pub const DEFAULT_SWATCH_WIDTH: f64 = 120.0;

/// Swatch height in SVG user units.
pub const DEFAULT_SWATCH_HEIGHT: f64 = 100.0;

/// Scheme entry used for label text on dark swatches.
pub const DEFAULT_DARK_SWATCH_LABEL: &str = "grey10";

/// Scheme entry used for label text on light swatches.
pub const DEFAULT_LIGHT_SWATCH_LABEL: &str = "grey0";

/// Lab lightness below which a swatch counts as dark.
pub const DARK_LIGHTNESS_THRESHOLD: f64 = 50.0;
