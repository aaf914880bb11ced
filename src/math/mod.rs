//! Numeric helpers shared by the grid and its renderers

/// Color ramp interpolation for rendering cell values
pub mod interpolation;
/// Floor and round-half-even conversions from world units to cell indices
pub mod rounding;
