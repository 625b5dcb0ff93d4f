//! Grid layout: rows x columns cells with independent axis gaps.

use super::Bounds;

/// Layout parameters for a grid of cells.
///
/// Cells are addressed by a linear index: `column = index % columns`,
/// `row = index / columns`, with row 0 at the top.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Horizontal gap between cells, as a fraction of the grid.
    pub gap_x: f64,
    /// Vertical gap between cells, as a fraction of the grid.
    pub gap_y: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { rows: 2, columns: 2, gap_x: 0.0, gap_y: 0.0 }
    }
}

impl GridLayout {
    /// Compute the bounds of the cell at linear `index`.
    ///
    /// Each axis uses the same formula as a tab strip; row offsets are
    /// measured from the top. A degenerate grid (zero rows or columns)
    /// yields the full unit square rather than dividing by zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn cell(&self, index: usize) -> Bounds {
        if self.rows == 0 || self.columns == 0 {
            return Bounds::FULL;
        }

        let columns = self.columns as f64;
        let column = (index % self.columns) as f64;
        let width = 1.0 / columns - self.gap_x * (columns - 1.0) / columns;
        let offset_x = column / columns * (1.0 + self.gap_x);

        let rows = self.rows as f64;
        let row = (index / self.columns) as f64;
        let height = 1.0 / rows - self.gap_y * (rows - 1.0) / rows;
        let offset_y = row / rows * (1.0 + self.gap_y);

        Bounds::new(offset_x, 1.0 - offset_y - height, offset_x + width, 1.0 - offset_y)
    }
}
