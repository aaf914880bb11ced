//! Diamond-shaped radial sweep applying a falloff profile around an origin cell
//!
//! The sweep enumerates one quadrant of offsets `(dx, dy)` with `dx, dy >= 0` and
//! `dx + dy <= total_range`, and reflects each offset into the other three
//! quadrants. Offsets lying on an axis are only reflected across the other axis, so
//! a single `(dx, dy)` never writes the same cell twice. Every write goes through
//! the grid's clamped accumulator in sweep order, and writes falling outside the
//! grid are dropped by the grid itself.

use crate::algorithm::falloff::FalloffProfile;
use crate::spatial::coordinates::CellCoord;
use crate::spatial::grid::HeatmapGrid;

/// First-quadrant offsets `(dx, dy)` in sweep order, `dx` outermost
pub fn quadrant_offsets(total_range: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..=total_range).flat_map(move |dx| (0..=total_range - dx).map(move |dy| (dx, dy)))
}

/// Reflections of a first-quadrant offset, without duplicates on the axes
///
/// Order: `(dx, dy)`, `(-dx, dy)`, `(dx, -dy)`, `(-dx, -dy)`.
pub fn mirrored(dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> {
    [
        (dx, dy, true),
        (-dx, dy, dx != 0),
        (dx, -dy, dy != 0),
        (-dx, -dy, dx != 0 && dy != 0),
    ]
    .into_iter()
    .filter_map(|(x, y, keep)| keep.then_some((x, y)))
}

/// Every offset written by a sweep of `total_range`, in write order
pub fn diamond_offsets(total_range: i32) -> Vec<(i32, i32)> {
    quadrant_offsets(total_range)
        .flat_map(|(dx, dy)| mirrored(dx, dy))
        .collect()
}

/// Add `profile` to the cells around `origin`
pub fn spread(grid: &mut HeatmapGrid, origin: CellCoord, profile: &FalloffProfile) {
    log::debug!(
        "Spreading value {} around cell ({}, {}): full range {}, total range {}, step {}",
        profile.value(),
        origin.x,
        origin.y,
        profile.full_value_range(),
        profile.total_range(),
        profile.falloff_step()
    );

    for (dx, dy) in quadrant_offsets(profile.total_range()) {
        let amount = profile.amount_at(dx + dy);
        for (mx, my) in mirrored(dx, dy) {
            let cell = origin.offset(mx, my);
            grid.add_value(cell.x, cell.y, amount);
        }
    }
}
