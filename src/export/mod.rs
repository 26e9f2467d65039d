//! Export of resolved swatches to image formats.
//!
//! Currently SVG only: a self-contained document with one background
//! rectangle and one group per swatch.

pub mod svg_renderer;

pub use svg_renderer::{write_chart, write_chart_file};
