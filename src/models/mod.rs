//! Data models for colour schemes, layouts, and chart geometry.
//!
//! Models are independent of file formats and output; parsing lives in
//! [`crate::parser`] and SVG generation in [`crate::export`].

pub mod color_scheme;
pub mod geometry;
pub mod lab;
pub mod rgb;
pub mod swatch;
pub mod swatch_layout;

// Re-export all model types
pub use color_scheme::{ColorScheme, LabelNames, NamedColor, SchemeDocument};
pub use geometry::ChartGeometry;
pub use lab::LabColor;
pub use rgb::{HexError, RgbColor};
pub use swatch::Swatch;
pub use swatch_layout::{Cell, SwatchLayout};
