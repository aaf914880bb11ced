//! Linear falloff profile for radial heat painting
//!
//! A profile applies its full `value` up to Manhattan radius `full_value_range`,
//! then subtracts `falloff_step` for every unit of radius beyond it. The step is
//! `value / (total_range - full_value_range)` rounded half to even, so the amount at
//! `total_range` is the rounding residue of that division (zero when it is exact).

use crate::io::error::{HeatmapError, Result};
use crate::math::rounding::round_half_even_to_i32;

/// Validated falloff parameters with their precomputed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FalloffProfile {
    value: i32,
    full_value_range: i32,
    total_range: i32,
    falloff_step: i32,
}

impl FalloffProfile {
    /// Build a profile
    ///
    /// A negative `total_range` describes an empty sweep, and a `total_range`
    /// below `full_value_range` applies the full value everywhere it reaches.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFalloffRange` if `total_range == full_value_range`
    pub fn new(value: i32, full_value_range: i32, total_range: i32) -> Result<Self> {
        if total_range == full_value_range {
            return Err(HeatmapError::InvalidFalloffRange {
                full_value_range,
                total_range,
            });
        }

        let span = f64::from(total_range) - f64::from(full_value_range);
        let falloff_step = round_half_even_to_i32(f64::from(value) / span);

        Ok(Self {
            value,
            full_value_range,
            total_range,
            falloff_step,
        })
    }

    /// Peak value applied inside the full-value radius
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Radius up to which the peak value is applied unchanged
    pub const fn full_value_range(&self) -> i32 {
        self.full_value_range
    }

    /// Outermost radius reached by the sweep
    pub const fn total_range(&self) -> i32 {
        self.total_range
    }

    /// Amount removed per unit of radius past the full-value radius
    pub const fn falloff_step(&self) -> i32 {
        self.falloff_step
    }

    /// Amount added to a cell at Manhattan distance `radius` from the origin cell
    pub const fn amount_at(&self, radius: i32) -> i32 {
        if radius > self.full_value_range {
            let excess = radius.saturating_sub(self.full_value_range);
            self.value
                .saturating_sub(self.falloff_step.saturating_mul(excess))
        } else {
            self.value
        }
    }
}
