/// Falloff profile validation and per-radius amounts
pub mod falloff;
/// Four-quadrant diamond sweep over the grid
pub mod propagation;
