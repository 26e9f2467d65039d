//! Command-line interface for swatchmaker.

pub mod render;

// Re-export types used by main.rs and tests
pub use render::{RenderArgs, RenderSummary};
