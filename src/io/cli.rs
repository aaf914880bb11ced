//! Command-line interface: build a grid, paint clicks onto it, render the result

use crate::analysis::statistics::GridStatistics;
use crate::io::clicks::{Brush, Click, ClickScript, parse_position};
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_CELL_SIZE, DEFAULT_CLICK_VALUE, DEFAULT_FULL_VALUE_RANGE,
    DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PIXEL_SCALE, DEFAULT_SEED, DEFAULT_TOTAL_RANGE,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::{export_grid_as_png, validate_scale};
use crate::io::progress::ClickProgress;
use crate::io::visualization::HeatmapVisual;
use crate::math::interpolation::ColorRamp;
use crate::spatial::coordinates::WorldPosition;
use crate::spatial::grid::{BoundsCheck, HeatmapGrid};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "heatgrid")]
#[command(
    author,
    version,
    about = "Paint radial falloff heat onto a bounded grid and render it"
)]
/// Command-line arguments for the heatmap painter
// Independent rendering and diagnostics switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Click script with one `x,y` or `x,y,value,full,total` per line
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// World-space side length of one cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE, allow_negative_numbers = true)]
    pub cell_size: f64,

    /// World x of the lower-left corner of cell (0, 0)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_x: f64,

    /// World y of the lower-left corner of cell (0, 0)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_y: f64,

    /// Extra click at a world position, applied after the script (repeatable)
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_position, allow_hyphen_values = true)]
    pub clicks: Vec<WorldPosition>,

    /// Number of uniformly scattered random clicks, applied last
    #[arg(short, long)]
    pub random: Option<usize>,

    /// Random seed for reproducible scatter
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Peak value of the default brush
    #[arg(long, default_value_t = DEFAULT_CLICK_VALUE, allow_negative_numbers = true)]
    pub value: i32,

    /// Radius within which the default brush applies its full value
    #[arg(long, default_value_t = DEFAULT_FULL_VALUE_RANGE, allow_negative_numbers = true)]
    pub full_range: i32,

    /// Radius beyond which the default brush applies nothing
    #[arg(long, default_value_t = DEFAULT_TOTAL_RANGE, allow_negative_numbers = true)]
    pub total_range: i32,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pixels per cell side in rendered images
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Also write an animated GIF with one frame per click
    #[arg(short, long)]
    pub animate: bool,

    /// Render in grayscale instead of the heat ramp
    #[arg(long)]
    pub grayscale: bool,

    /// Compare row indices against the width, as legacy hosts did
    #[arg(long)]
    pub legacy_bounds: bool,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Brush applied to clicks that don't carry their own parameters
    pub const fn brush(&self) -> Brush {
        Brush {
            value: self.value,
            full_value_range: self.full_range,
            total_range: self.total_range,
        }
    }

    /// Bounds rule selected by `--legacy-bounds`
    pub const fn bounds_check(&self) -> BoundsCheck {
        if self.legacy_bounds {
            BoundsCheck::Legacy
        } else {
            BoundsCheck::Strict
        }
    }

    /// Default log filter; `RUST_LOG` still overrides it
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Color ramp selected by `--grayscale`
    pub fn ramp(&self) -> ColorRamp {
        if self.grayscale {
            ColorRamp::grayscale()
        } else {
            ColorRamp::heat()
        }
    }

    /// GIF path derived from the output path
    pub fn animation_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let name = format!("{}{ANIMATION_SUFFIX}.gif", stem.to_string_lossy());

        match self.output.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Runs one painting session described by the command line
pub struct HeatmapRunner {
    cli: Cli,
}

impl HeatmapRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the empty grid described by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for non-positive sizes
    pub fn build_grid(&self) -> Result<HeatmapGrid> {
        HeatmapGrid::with_bounds_check(
            self.cli.width,
            self.cli.height,
            self.cli.cell_size,
            WorldPosition::new(self.cli.origin_x, self.cli.origin_y),
            self.cli.bounds_check(),
        )
    }

    /// Gather clicks from the script, `--click` flags and `--random`, in that order
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or parsed, or if random clicks
    /// are requested on a grid without a finite world extent
    pub fn collect_clicks(&self, grid: &HeatmapGrid) -> Result<ClickScript> {
        let brush = self.cli.brush();
        let mut script = match &self.cli.script {
            Some(path) => ClickScript::from_file(path, brush)?,
            None => ClickScript::new(),
        };

        for &position in &self.cli.clicks {
            script.push(Click { position, brush });
        }

        if let Some(count) = self.cli.random {
            script.extend(ClickScript::random(count, self.cli.seed, grid, brush)?);
        }

        Ok(script)
    }

    /// Paint every click, export the images and return the final statistics
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, script loading, painting or any
    /// export fails
    pub fn run(&self) -> Result<GridStatistics> {
        let start_time = Instant::now();

        validate_scale(self.cli.scale)?;
        self.cli.brush().profile()?;

        let mut grid = self.build_grid()?;
        let script = self.collect_clicks(&grid)?;
        if script.is_empty() {
            log::warn!("No clicks given; rendering an empty heatmap");
        }

        let ramp = self.cli.ramp();
        let mut visual = if self.cli.animate {
            let mut visual = HeatmapVisual::attach(&mut grid, ramp.clone(), self.cli.scale)?;
            visual.capture_frame(&grid);
            Some(visual)
        } else {
            None
        };

        let progress = ClickProgress::new(script.len(), self.cli.should_show_progress());
        for click in script.clicks() {
            click.apply(&mut grid)?;
            if let Some(ref mut visual) = visual {
                visual.capture_frame(&grid);
            }
            progress.advance();
        }
        progress.finish();

        export_grid_as_png(&grid, &ramp, self.cli.scale, &self.cli.output)?;

        if let Some(mut visual) = visual {
            visual.export_gif(self.cli.animation_path(), GIF_FRAME_DELAY_MS)?;
            visual.detach(&mut grid);
        }

        let statistics = GridStatistics::from_grid(&grid);
        log::info!(
            "Applied {} clicks in {:.2?}: {statistics}",
            script.len(),
            start_time.elapsed()
        );

        Ok(statistics)
    }
}
