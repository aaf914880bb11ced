//! Summary statistics over a heatmap's values

use std::fmt;

use crate::io::configuration::MAX_VALUE;
use crate::spatial::coordinates::CellCoord;
use crate::spatial::grid::HeatmapGrid;

/// Aggregate view of a grid's heat distribution
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics {
    /// Number of cells in the grid
    pub cell_count: usize,
    /// Sum of all cell values
    pub total: i64,
    /// Highest cell value
    pub peak: i32,
    /// First cell holding the peak value, scanning column by column
    pub peak_cell: Option<CellCoord>,
    /// Cells with a value above zero
    pub hot_cells: usize,
    /// Cells at the maximum value
    pub saturated_cells: usize,
    /// Mean value over all cells
    pub mean: f64,
}

impl GridStatistics {
    /// Compute statistics from the current grid values
    pub fn from_grid(grid: &HeatmapGrid) -> Self {
        let mut cell_count = 0usize;
        let mut total = 0i64;
        let mut peak = 0i32;
        let mut peak_cell = None;
        let mut hot_cells = 0usize;
        let mut saturated_cells = 0usize;

        for (cell, value) in grid.iter_cells() {
            cell_count += 1;
            total += i64::from(value);
            if value > 0 {
                hot_cells += 1;
                if value > peak {
                    peak = value;
                    peak_cell = Some(cell);
                }
            }
            if value == MAX_VALUE {
                saturated_cells += 1;
            }
        }

        let mean = if cell_count == 0 {
            0.0
        } else {
            total as f64 / cell_count as f64
        };

        Self {
            cell_count,
            total,
            peak,
            peak_cell,
            hot_cells,
            saturated_cells,
            mean,
        }
    }

    /// Share of cells holding any heat, in `[0, 1]`
    pub fn coverage(&self) -> f64 {
        if self.cell_count == 0 {
            0.0
        } else {
            self.hot_cells as f64 / self.cell_count as f64
        }
    }
}

impl fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells, {} hot ({:.1}%), {} saturated, total {}, mean {:.2}, peak {}",
            self.cell_count,
            self.hot_cells,
            self.coverage() * 100.0,
            self.saturated_cells,
            self.total,
            self.mean,
            self.peak
        )?;
        if let Some(cell) = self.peak_cell {
            write!(f, " at ({}, {})", cell.x, cell.y)?;
        }
        Ok(())
    }
}
