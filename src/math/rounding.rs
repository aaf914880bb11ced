//! Float-to-integer conversions with the rounding conventions cell math relies on
//!
//! Both helpers saturate at the `i32` range instead of wrapping, and map NaN to
//! `i32::MIN` so a malformed position lands far outside any grid.

/// Largest integer less than or equal to `value`
pub fn floor_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return i32::MIN;
    }
    // `as` saturates at the integer bounds
    value.floor() as i32
}

/// Nearest integer to `value`, ties rounded to the even neighbour
///
/// `2.5` rounds to `2` and `3.5` to `4`.
pub fn round_half_even_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return i32::MIN;
    }
    value.round_ties_even() as i32
}
