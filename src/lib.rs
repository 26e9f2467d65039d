//! Swatchmaker Library
//!
//! Renders a labeled colour swatch chart as SVG from a YAML colour scheme and
//! a YAML grid layout. The pipeline is: load scheme, load layout, compute
//! geometry, resolve swatches, write markup.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;

pub use error::{Result, SwatchError};
