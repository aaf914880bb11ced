//! Mapping between continuous world space and discrete cell indices
//!
//! Cell `(x, y)` covers the half-open square
//! `[origin + x * size, origin + (x + 1) * size)` on each axis, so every world
//! position belongs to exactly one cell, including positions left of or below
//! the origin, which map to negative indices.

use crate::math::rounding::floor_to_i32;

/// Position in continuous world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing upwards
    pub y: f64,
}

impl WorldPosition {
    /// The world origin `(0, 0)`
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a world position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discrete cell index, possibly outside any grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellCoord {
    /// Column index
    pub x: i32,
    /// Row index, row 0 at the bottom
    pub y: i32,
}

impl CellCoord {
    /// Create a cell coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell displaced by `(dx, dy)`, saturating at the index range
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan distance to `other`
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Affine transform from world space onto a lattice of square cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    origin: WorldPosition,
    cell_size: f64,
}

impl CoordinateTransform {
    /// Create a transform with cell `(0, 0)` anchored at `origin`
    ///
    /// `cell_size` is expected to be positive; `HeatmapGrid` validates it
    /// before building a transform.
    pub const fn new(origin: WorldPosition, cell_size: f64) -> Self {
        Self { origin, cell_size }
    }

    /// World position of the lower-left corner of cell `(0, 0)`
    pub const fn origin(&self) -> WorldPosition {
        self.origin
    }

    /// Side length of one cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cell containing `position`
    ///
    /// Agrees with [`CoordinateTransform::cell_to_world`]: a cell's own corner always
    /// maps back to that cell, even when `cell_size` or the origin are not exactly
    /// representable.
    pub fn world_to_cell(&self, position: WorldPosition) -> CellCoord {
        CellCoord {
            x: axis_to_cell(position.x, self.origin.x, self.cell_size),
            y: axis_to_cell(position.y, self.origin.y, self.cell_size),
        }
    }

    /// Lower-left corner of cell `(x, y)`
    pub fn cell_to_world(&self, x: i32, y: i32) -> WorldPosition {
        WorldPosition {
            x: cell_edge(x, self.origin.x, self.cell_size),
            y: cell_edge(y, self.origin.y, self.cell_size),
        }
    }

    /// Center of cell `(x, y)`
    pub fn cell_center(&self, x: i32, y: i32) -> WorldPosition {
        let corner = self.cell_to_world(x, y);
        let half = self.cell_size / 2.0;
        WorldPosition {
            x: corner.x + half,
            y: corner.y + half,
        }
    }
}

/// Lower edge of `cell` along one axis
fn cell_edge(cell: i32, origin: f64, cell_size: f64) -> f64 {
    f64::from(cell).mul_add(cell_size, origin)
}

/// Index of the cell whose `[edge(c), edge(c + 1))` span holds `coordinate`
///
/// The floored quotient can land one cell off when the division rounds across an
/// edge, so it is nudged against the edges `cell_edge` produces.
fn axis_to_cell(coordinate: f64, origin: f64, cell_size: f64) -> i32 {
    let estimate = floor_to_i32((coordinate - origin) / cell_size);

    if let Some(next) = estimate.checked_add(1)
        && cell_edge(next, origin, cell_size) <= coordinate
    {
        next
    } else if let Some(previous) = estimate.checked_sub(1)
        && cell_edge(estimate, origin, cell_size) > coordinate
    {
        previous
    } else {
        estimate
    }
}
