//! Loaders for the colour-scheme and layout documents.

pub mod color_scheme;
pub mod layout;

// Re-export commonly used functions
pub use color_scheme::load_color_scheme;
pub use layout::load_layout;
