/// Click scripts and random scatter feeding the grid
pub mod clicks;
/// Command-line argument parsing and session orchestration
pub mod cli;
/// Value range constants and runtime defaults
pub mod configuration;
/// Error types for all heatmap operations
pub mod error;
/// Rendering and PNG export
pub mod image;
/// Progress display while painting
pub mod progress;
/// Change-driven rendering and GIF capture
pub mod visualization;
