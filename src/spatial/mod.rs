//! Spatial data structures for the heatmap
//!
//! This module contains:
//! - World/cell coordinate mapping
//! - Cell change notification
//! - The bounded value grid itself

/// World position and cell index types with the mapping between them
pub mod coordinates;
/// Change notification payload, observer trait and subscription registry
pub mod events;
/// Heatmap grid storage, clamped mutation and queries
pub mod grid;

pub use coordinates::{CellCoord, WorldPosition};
pub use grid::{BoundsCheck, HeatmapGrid};
