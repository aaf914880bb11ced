//! Fixed-size heatmap grid with clamped values and change notification
//!
//! All reads and writes go through [`HeatmapGrid::get_value`] and
//! [`HeatmapGrid::set_value`]. Out-of-range reads report `0` and out-of-range writes
//! are dropped without notification, so radial sweeps near an edge need no
//! special-casing. Every in-range write clamps into `[MIN_VALUE, MAX_VALUE]` and
//! notifies subscribers, even when the stored value does not change.

use ndarray::Array2;

use crate::algorithm::falloff::FalloffProfile;
use crate::algorithm::propagation;
use crate::io::configuration::{MAX_VALUE, MIN_VALUE};
use crate::io::error::{Result, invalid_dimension};
use crate::spatial::coordinates::{CellCoord, CoordinateTransform, WorldPosition};
use crate::spatial::events::{CellChanged, GridObserver, ObserverRegistry, SubscriptionId};

/// Rule deciding which cell indices count as inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsCheck {
    /// `0 <= x < width` and `0 <= y < height`
    #[default]
    Strict,
    /// `0 <= x < width` and `0 <= y < width`
    ///
    /// Reproduces hosts that compared the row index against the width. On a grid
    /// taller than wide, rows at or above `width` reject writes and read as `0`;
    /// on a grid wider than tall, indices past the stored rows are still dropped.
    Legacy,
}

/// Bounded integer value field over a rectangular world area
#[derive(Debug)]
pub struct HeatmapGrid {
    width: i32,
    height: i32,
    transform: CoordinateTransform,
    bounds_check: BoundsCheck,
    /// Values indexed `[x, y]`
    cells: Array2<i32>,
    observers: ObserverRegistry,
}

impl HeatmapGrid {
    /// Create a grid with every cell at `0`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `width` or `height` is not positive, or if
    /// `cell_size` is not a positive finite number
    pub fn new(width: i32, height: i32, cell_size: f64, origin: WorldPosition) -> Result<Self> {
        Self::with_bounds_check(width, height, cell_size, origin, BoundsCheck::Strict)
    }

    /// Create a grid using an explicit bounds rule
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` under the same conditions as [`HeatmapGrid::new`]
    pub fn with_bounds_check(
        width: i32,
        height: i32,
        cell_size: f64,
        origin: WorldPosition,
        bounds_check: BoundsCheck,
    ) -> Result<Self> {
        if width <= 0 {
            return Err(invalid_dimension("width", &width));
        }
        if height <= 0 {
            return Err(invalid_dimension("height", &height));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(invalid_dimension("cell_size", &cell_size));
        }

        log::debug!(
            "Creating {width}x{height} heatmap grid, cell size {cell_size}, origin ({}, {}), {bounds_check:?} bounds",
            origin.x,
            origin.y
        );

        Ok(Self {
            width,
            height,
            transform: CoordinateTransform::new(origin, cell_size),
            bounds_check,
            cells: Array2::zeros((width as usize, height as usize)),
            observers: ObserverRegistry::new(),
        })
    }

    /// Number of columns
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// World-space side length of one cell
    pub const fn cell_size(&self) -> f64 {
        self.transform.cell_size()
    }

    /// World position of the lower-left corner of cell `(0, 0)`
    pub const fn origin(&self) -> WorldPosition {
        self.transform.origin()
    }

    /// Bounds rule selected at construction
    pub const fn bounds_check(&self) -> BoundsCheck {
        self.bounds_check
    }

    /// World-to-cell transform of this grid
    pub const fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Cell containing a world position (may lie outside the grid)
    pub fn world_to_cell(&self, position: WorldPosition) -> CellCoord {
        self.transform.world_to_cell(position)
    }

    /// Lower-left corner of cell `(x, y)`
    pub fn cell_to_world(&self, x: i32, y: i32) -> WorldPosition {
        self.transform.cell_to_world(x, y)
    }

    /// Center of cell `(x, y)`
    pub fn cell_center(&self, x: i32, y: i32) -> WorldPosition {
        self.transform.cell_center(x, y)
    }

    /// Whether `(x, y)` passes the bounds rule
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        let row_limit = match self.bounds_check {
            BoundsCheck::Strict => self.height,
            BoundsCheck::Legacy => self.width,
        };
        x >= 0 && y >= 0 && x < self.width && y < row_limit
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        self.contains(x, y).then_some([x as usize, y as usize])
    }

    /// Value of cell `(x, y)`, or `0` outside the grid
    pub fn get_value(&self, x: i32, y: i32) -> i32 {
        self.index(x, y)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(0)
    }

    /// Value of the cell containing a world position
    pub fn get_value_at(&self, position: WorldPosition) -> i32 {
        let cell = self.world_to_cell(position);
        self.get_value(cell.x, cell.y)
    }

    /// Clamp `value` into the stored range and write it to `(x, y)`
    ///
    /// Notifies subscribers on every in-range write. Out-of-range writes are
    /// ignored.
    pub fn set_value(&mut self, x: i32, y: i32, value: i32) {
        let Some(cell) = self
            .index(x, y)
            .and_then(|index| self.cells.get_mut(index))
        else {
            return;
        };

        *cell = value.clamp(MIN_VALUE, MAX_VALUE);
        log::trace!("Cell ({x}, {y}) set to {}", *cell);
        self.observers.notify(CellChanged { x, y });
    }

    /// Write to the cell containing a world position
    pub fn set_value_at(&mut self, position: WorldPosition, value: i32) {
        let cell = self.world_to_cell(position);
        self.set_value(cell.x, cell.y, value);
    }

    /// Add `delta` to the clamped current value of `(x, y)` and store the clamped sum
    ///
    /// Clamping after every step makes the cell a saturating accumulator:
    /// `+1000` then `-1000` ends at `0`.
    pub fn add_value(&mut self, x: i32, y: i32, delta: i32) {
        let current = self.get_value(x, y);
        self.set_value(x, y, current.saturating_add(delta));
    }

    /// Add `delta` to the cell containing a world position
    pub fn add_value_at(&mut self, position: WorldPosition, delta: i32) {
        let cell = self.world_to_cell(position);
        self.add_value(cell.x, cell.y, delta);
    }

    /// Spread `value` around the cell containing `position`
    ///
    /// Cells within Manhattan radius `full_value_range` receive `value`; beyond it
    /// the amount drops by a fixed step per unit of radius until `total_range`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFalloffRange` if `total_range == full_value_range`. No cell
    /// is written in that case.
    pub fn add_value_radial(
        &mut self,
        position: WorldPosition,
        value: i32,
        full_value_range: i32,
        total_range: i32,
    ) -> Result<()> {
        let profile = FalloffProfile::new(value, full_value_range, total_range)?;
        self.add_falloff(position, &profile);
        Ok(())
    }

    /// Spread a validated falloff profile around the cell containing `position`
    pub fn add_falloff(&mut self, position: WorldPosition, profile: &FalloffProfile) {
        let origin = self.world_to_cell(position);
        propagation::spread(self, origin, profile);
    }

    /// Reset every cell to `0`, notifying each in-range cell once
    pub fn clear(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                self.set_value(x, y, 0);
            }
        }
    }

    /// Iterate over every stored cell and its value, column by column
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, i32)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &value)| (CellCoord::new(x as i32, y as i32), value))
    }

    /// Register an observer for cell writes
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: GridObserver + 'static,
    {
        let id = self.observers.subscribe(Box::new(observer));
        log::debug!("Observer {id:?} subscribed to grid changes");
        id
    }

    /// Remove an observer, returning whether it was subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        if removed {
            log::debug!("Observer {id:?} unsubscribed from grid changes");
        }
        removed
    }

    /// Number of subscribed observers
    pub const fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
