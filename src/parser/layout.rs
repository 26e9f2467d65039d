//! Swatch layout document loader.
//!
//! The layout is a YAML sequence of rows, each row a sequence of colour names.
//! `~`, `null` and `""` leave a cell empty:
//!
//! ```yaml
//! - [red, orange, yellow]
//! - [~, grey10]
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::models::SwatchLayout;

/// Parses a layout from a string.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// [`SwatchError::Parse`] if the content is malformed, is not a sequence of
/// sequences of strings, or has no rows.
pub fn parse_layout(content: &str, path: &Path) -> Result<SwatchLayout> {
    if content.trim().is_empty() {
        return Err(SwatchError::parse(path, "layout is empty"));
    }

    let layout: SwatchLayout =
        serde_yml::from_str(content).map_err(|e| SwatchError::parse(path, e.to_string()))?;

    if layout.is_empty() {
        return Err(SwatchError::parse(path, "layout has no rows"));
    }

    Ok(layout)
}

/// Reads and parses the layout file at `path`.
pub fn load_layout(path: &Path) -> Result<SwatchLayout> {
    let content = fs::read_to_string(path).map_err(|e| SwatchError::io("read", path, e))?;
    let layout = parse_layout(&content, path)?;
    debug!(
        "Layout {}: {} rows, {} columns, {} swatches",
        path.display(),
        layout.row_count(),
        layout.col_count(),
        layout.populated_count()
    );
    Ok(layout)
}
