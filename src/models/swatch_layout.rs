//! Grid of colour-name references defining where swatches go.

use serde::Deserialize;

/// Rows of cells; each cell names a colour or is empty.
///
/// Rows may have different lengths. Cells past the end of a row are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SwatchLayout {
    rows: Vec<Vec<Option<String>>>,
}

/// One populated cell of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
    /// Referenced colour name
    pub name: &'a str,
}

impl SwatchLayout {
    /// Creates a layout from explicit rows.
    #[must_use]
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the layout has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name at (`row`, `col`), or `None` for empty and out-of-range cells.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(col)?
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Populated cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        let cols = self.col_count();
        (0..self.row_count()).flat_map(move |row| {
            (0..cols).filter_map(move |col| self.cell(row, col).map(|name| Cell { row, col, name }))
        })
    }

    /// Number of populated cells.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.cells().count()
    }
}
