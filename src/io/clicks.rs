//! Click scripts: world-space positions to paint, in order
//!
//! Script format, one click per line:
//!
//! ```text
//! # x, y                        uses the default brush
//! 12.5, 40
//! # x, y, value, full, total    explicit brush
//! 200, 200, 60, 1, 8
//! ```
//!
//! Blank lines and everything after `#` are ignored.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::falloff::FalloffProfile;
use crate::io::configuration::{
    DEFAULT_CLICK_VALUE, DEFAULT_FULL_VALUE_RANGE, DEFAULT_TOTAL_RANGE,
};
use crate::io::error::{HeatmapError, Result, invalid_parameter};
use crate::spatial::coordinates::WorldPosition;
use crate::spatial::grid::HeatmapGrid;

/// Falloff parameters applied by one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Peak value added at the clicked cell
    pub value: i32,
    /// Radius within which the peak value is applied unchanged
    pub full_value_range: i32,
    /// Radius beyond which nothing is applied
    pub total_range: i32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            value: DEFAULT_CLICK_VALUE,
            full_value_range: DEFAULT_FULL_VALUE_RANGE,
            total_range: DEFAULT_TOTAL_RANGE,
        }
    }
}

impl Brush {
    /// Validated falloff profile for this brush
    ///
    /// # Errors
    ///
    /// Returns `InvalidFalloffRange` if both radii are equal
    pub fn profile(&self) -> Result<FalloffProfile> {
        FalloffProfile::new(self.value, self.full_value_range, self.total_range)
    }
}

/// A single paint action at a world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// Where the click landed
    pub position: WorldPosition,
    /// Falloff applied around the click
    pub brush: Brush,
}

impl Click {
    /// Spread this click's brush over `grid`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFalloffRange` if the brush radii are equal
    pub fn apply(&self, grid: &mut HeatmapGrid) -> Result<()> {
        grid.add_value_radial(
            self.position,
            self.brush.value,
            self.brush.full_value_range,
            self.brush.total_range,
        )
    }
}

/// Parse an `x,y` world position
///
/// # Errors
///
/// Returns a description of the problem if the text is not two finite numbers
/// separated by a comma
pub fn parse_position(text: &str) -> std::result::Result<WorldPosition, String> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [x, y] = fields.as_slice() else {
        return Err(format!("expected 'x,y', got '{text}'"));
    };
    Ok(WorldPosition::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text
        .parse()
        .map_err(|e| format!("'{text}' is not a number ({e})"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{text}' is not a finite coordinate"))
    }
}

fn parse_integer(name: &str, text: &str) -> std::result::Result<i32, String> {
    text.parse()
        .map_err(|e| format!("{name} '{text}' is not an integer ({e})"))
}

fn parse_line(line: &str, default_brush: Brush) -> std::result::Result<Click, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [x, y] => Ok(Click {
            position: WorldPosition::new(parse_coordinate(x)?, parse_coordinate(y)?),
            brush: default_brush,
        }),
        [x, y, value, full, total] => Ok(Click {
            position: WorldPosition::new(parse_coordinate(x)?, parse_coordinate(y)?),
            brush: Brush {
                value: parse_integer("value", value)?,
                full_value_range: parse_integer("full range", full)?,
                total_range: parse_integer("total range", total)?,
            },
        }),
        _ => Err(format!(
            "expected 2 or 5 comma-separated fields, got {}",
            fields.len()
        )),
    }
}

/// Ordered list of clicks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickScript {
    clicks: Vec<Click>,
}

impl ClickScript {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse script text; `source` only labels errors
    ///
    /// # Errors
    ///
    /// Returns `ClickScript` with the offending line number if a line is malformed
    pub fn parse(text: &str, source: &Path, default_brush: Brush) -> Result<Self> {
        let mut clicks = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let click = parse_line(line, default_brush).map_err(|reason| {
                HeatmapError::ClickScript {
                    path: source.to_path_buf(),
                    line: index + 1,
                    reason,
                }
            })?;
            clicks.push(click);
        }

        Ok(Self { clicks })
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed
    pub fn from_file(path: &Path, default_brush: Brush) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| HeatmapError::FileSystem {
            path: PathBuf::from(path),
            operation: "read click script",
            source: e,
        })?;
        let script = Self::parse(&text, path, default_brush)?;
        log::debug!(
            "Loaded {} clicks from '{}'",
            script.len(),
            path.display()
        );
        Ok(script)
    }

    /// Uniformly scattered clicks over the area covered by `grid`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid's world extent or far corner is not a
    /// finite number, which happens for huge cell sizes or origins
    pub fn random(count: usize, seed: u64, grid: &HeatmapGrid, brush: Brush) -> Result<Self> {
        let origin = grid.origin();
        let extent_x = f64::from(grid.width()) * grid.cell_size();
        let extent_y = f64::from(grid.height()) * grid.cell_size();

        let finite = [extent_x, extent_y, origin.x + extent_x, origin.y + extent_y]
            .iter()
            .all(|bound| bound.is_finite());
        if !finite {
            return Err(invalid_parameter(
                "cell_size",
                &grid.cell_size(),
                &format!(
                    "a {}x{} grid at origin ({}, {}) has no finite world extent to scatter over",
                    grid.width(),
                    grid.height(),
                    origin.x,
                    origin.y
                ),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let clicks = (0..count)
            .map(|_| Click {
                position: WorldPosition::new(
                    origin.x + rng.random_range(0.0..extent_x),
                    origin.y + rng.random_range(0.0..extent_y),
                ),
                brush,
            })
            .collect();

        Ok(Self { clicks })
    }

    /// Append a click
    pub fn push(&mut self, click: Click) {
        self.clicks.push(click);
    }

    /// Append every click of `other`
    pub fn extend(&mut self, other: Self) {
        self.clicks.extend(other.clicks);
    }

    /// Number of clicks
    pub const fn len(&self) -> usize {
        self.clicks.len()
    }

    /// Whether the script has no clicks
    pub const fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }

    /// Clicks in application order
    pub const fn clicks(&self) -> &[Click] {
        self.clicks.as_slice()
    }

    /// Apply every click to `grid` in order
    ///
    /// # Errors
    ///
    /// Stops at and returns the first click whose brush is invalid; earlier clicks
    /// stay applied
    pub fn apply(&self, grid: &mut HeatmapGrid) -> Result<()> {
        for click in &self.clicks {
            click.apply(grid)?;
        }
        Ok(())
    }
}
