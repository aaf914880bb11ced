//! Bounded integer heatmap over a rectangular world area with radial falloff painting
//!
//! A [`HeatmapGrid`] maps world positions onto fixed-size square cells, keeps every
//! cell within `[MIN_VALUE, MAX_VALUE]`, notifies observers on each write, and
//! spreads values around a point in a diamond that fades linearly with Manhattan
//! distance.

#![forbid(unsafe_code)]

/// Falloff profiles and the radial sweep
pub mod algorithm;
/// Statistics over painted fields
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Numeric conversions and color interpolation
pub mod math;
/// Coordinates, change notification and the grid itself
pub mod spatial;

pub use io::configuration::{MAX_VALUE, MIN_VALUE};
pub use io::error::{HeatmapError, Result};
pub use spatial::{BoundsCheck, CellCoord, HeatmapGrid, WorldPosition};
