//! Chart geometry derived from grid size and swatch dimensions.

/// Fixed chart geometry for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Width of one swatch
    pub swatch_width: f64,
    /// Height of one swatch
    pub swatch_height: f64,
    /// Margin around the swatch grid
    pub border: f64,
    /// Total canvas width
    pub canvas_width: f64,
    /// Total canvas height
    pub canvas_height: f64,
}

impl ChartGeometry {
    /// Computes geometry for a grid of `rows` × `cols` swatches.
    ///
    /// The border is an eighth of width plus height, so the frame scales with
    /// the swatches.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchmaker::models::ChartGeometry;
    ///
    /// let geo = ChartGeometry::compute(3, 4, 120.0, 100.0);
    /// assert_eq!(geo.border, 27.5);
    /// assert_eq!(geo.canvas_width, 535.0);
    /// assert_eq!(geo.canvas_height, 355.0);
    /// ```
    #[must_use]
    pub fn compute(rows: usize, cols: usize, swatch_width: f64, swatch_height: f64) -> Self {
        let border = (swatch_width + swatch_height) / 8.0;
        Self {
            swatch_width,
            swatch_height,
            border,
            canvas_width: swatch_width * cols as f64 + 2.0 * border,
            canvas_height: swatch_height * rows as f64 + 2.0 * border,
        }
    }

    /// Top-left corner of the swatch at (`row`, `col`).
    #[must_use]
    pub fn swatch_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (
            col as f64 * self.swatch_width + self.border,
            row as f64 * self.swatch_height + self.border,
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_swatch_size() {
        let geo = ChartGeometry::compute(3, 4, 120.0, 100.0);
        assert_eq!(geo.border, 27.5);
        assert_eq!(geo.canvas_width, 535.0);
        assert_eq!(geo.canvas_height, 355.0);
    }

    #[test]
    fn test_single_cell() {
        let geo = ChartGeometry::compute(1, 1, 120.0, 100.0);
        assert_eq!(geo.canvas_width, 175.0);
        assert_eq!(geo.canvas_height, 155.0);
        assert_eq!(geo.swatch_origin(0, 0), (27.5, 27.5));
    }

    #[test]
    fn test_swatch_origin() {
        let geo = ChartGeometry::compute(2, 3, 120.0, 100.0);
        assert_eq!(geo.swatch_origin(1, 2), (267.5, 127.5));
    }

    #[test]
    fn test_custom_size_scales_border() {
        let geo = ChartGeometry::compute(2, 2, 80.0, 80.0);
        assert_eq!(geo.border, 20.0);
        assert_eq!(geo.canvas_width, 200.0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            ChartGeometry::compute(5, 7, 120.0, 100.0),
            ChartGeometry::compute(5, 7, 120.0, 100.0)
        );
    }
}
