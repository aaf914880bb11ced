//! Value range constants and runtime configuration defaults

// Closed range every stored cell value is clamped into
/// Lowest value a cell can hold
pub const MIN_VALUE: i32 = 0;
/// Highest value a cell can hold
pub const MAX_VALUE: i32 = 100;

// Demo defaults: a 100x100 board of 4-unit cells anchored at the world origin
/// Default grid width in cells
pub const DEFAULT_WIDTH: i32 = 100;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: i32 = 100;
/// Default world-space side length of one cell
pub const DEFAULT_CELL_SIZE: f64 = 4.0;

// Default brush applied per click
/// Peak value added at the clicked cell
pub const DEFAULT_CLICK_VALUE: i32 = 100;
/// Radius within which the peak value is applied unchanged
pub const DEFAULT_FULL_VALUE_RANGE: i32 = 2;
/// Radius beyond which nothing is applied
pub const DEFAULT_TOTAL_RANGE: i32 = 20;

/// Fixed seed for reproducible random scatter
pub const DEFAULT_SEED: u64 = 42;

// Rendering
/// Pixels per cell side in exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 4;
/// Largest accepted pixel scale, keeps exports bounded
pub const MAX_PIXEL_SCALE: u32 = 64;

// Output settings
/// Default output path for the rendered field
pub const DEFAULT_OUTPUT: &str = "heatmap.png";
/// Suffix added to the animation filename
pub const ANIMATION_SUFFIX: &str = "_animation";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
