//! Render units: one per populated layout cell.

use super::{ColorScheme, LabColor, NamedColor, SwatchLayout};
use crate::error::Result;

/// A fully resolved swatch, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Row index in the layout
    pub row: usize,
    /// Column index in the layout
    pub col: usize,
    /// Swatch colour
    pub color: NamedColor,
    /// Lab value of the swatch colour
    pub lab: LabColor,
    /// Hex text used for the labels
    pub label_hex: String,
}

impl Swatch {
    /// Resolves every populated cell of `layout` against `scheme`.
    ///
    /// Stops at the first unknown name or malformed hex value.
    pub fn resolve_all(layout: &SwatchLayout, scheme: &ColorScheme) -> Result<Vec<Self>> {
        layout
            .cells()
            .map(|cell| {
                let color = scheme.color(cell.name)?;
                let lab = color.rgb.to_lab();
                let label_hex = scheme.label_color_for(color.rgb).hex.clone();
                Ok(Self {
                    row: cell.row,
                    col: cell.col,
                    color,
                    lab,
                    label_hex,
                })
            })
            .collect()
    }
}
