//! Observer-driven rendering of a grid and GIF capture of its evolution

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use bitvec::prelude::*;
use image::{Frame, Rgba, RgbaImage};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{HeatmapError, Result};
use crate::io::image::{ensure_parent_dir, render_grid};
use crate::math::interpolation::ColorRamp;
use crate::spatial::coordinates::CellCoord;
use crate::spatial::events::{CellChanged, SubscriptionId};
use crate::spatial::grid::HeatmapGrid;

/// Cells written since the last refresh, one bit per cell at `x * height + y`
#[derive(Debug)]
struct DirtyCells {
    bits: BitVec,
    width: i32,
    height: i32,
    count: usize,
}

impl DirtyCells {
    fn new(width: i32, height: i32) -> Self {
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
            count: 0,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| x as usize * self.height as usize + y as usize)
    }

    fn mark(&mut self, event: CellChanged) {
        if let Some(index) = self.index(event.x, event.y)
            && self.bits.get(index).as_deref() == Some(&false)
        {
            self.bits.set(index, true);
            self.count += 1;
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    fn drain(&mut self) -> Vec<CellCoord> {
        let height = self.height as usize;
        let cells = self
            .bits
            .iter_ones()
            .map(|index| CellCoord::new((index / height) as i32, (index % height) as i32))
            .collect();
        self.bits.fill(false);
        self.count = 0;
        cells
    }
}

/// Keeps a rendered image of a grid in sync with its writes
///
/// The visual subscribes to the grid and only records which cells changed; the
/// image is repainted from the grid on [`HeatmapVisual::refresh`] or
/// [`HeatmapVisual::capture_frame`], which re-read the current values.
pub struct HeatmapVisual {
    subscription: Option<SubscriptionId>,
    dirty: Rc<RefCell<DirtyCells>>,
    ramp: ColorRamp,
    scale: u32,
    grid_height: i32,
    canvas: RgbaImage,
    frames: Vec<RgbaImage>,
}

impl HeatmapVisual {
    /// Render `grid` once and subscribe to its changes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `scale` is out of range or the rendered image
    /// would be too large; the grid is left unsubscribed
    pub fn attach(grid: &mut HeatmapGrid, ramp: ColorRamp, scale: u32) -> Result<Self> {
        let canvas = render_grid(grid, &ramp, scale)?;

        let dirty = Rc::new(RefCell::new(DirtyCells::new(grid.width(), grid.height())));
        let sink = Rc::clone(&dirty);
        let subscription = grid.subscribe(move |event: CellChanged| {
            sink.borrow_mut().mark(event);
        });

        Ok(Self {
            subscription: Some(subscription),
            dirty,
            canvas,
            ramp,
            scale,
            grid_height: grid.height(),
            frames: Vec::new(),
        })
    }

    /// Unsubscribe from `grid`, returning whether a subscription was removed
    pub fn detach(&mut self, grid: &mut HeatmapGrid) -> bool {
        self.subscription
            .take()
            .is_some_and(|id| grid.unsubscribe(id))
    }

    /// Whether the visual is still subscribed
    pub const fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Number of distinct cells written since the last refresh
    pub fn dirty_count(&self) -> usize {
        self.dirty.borrow().count
    }

    /// Whether cell `(x, y)` was written since the last refresh
    pub fn is_dirty(&self, x: i32, y: i32) -> bool {
        self.dirty.borrow().contains(x, y)
    }

    /// Take the set of written cells, column by column, and reset it
    pub fn take_dirty(&mut self) -> Vec<CellCoord> {
        self.dirty.borrow_mut().drain()
    }

    /// Repaint written cells from the grid's current values
    ///
    /// Returns the number of repainted cells.
    pub fn refresh(&mut self, grid: &HeatmapGrid) -> usize {
        let cells = self.take_dirty();
        for cell in &cells {
            self.paint_cell(*cell, grid.get_value(cell.x, cell.y));
        }
        cells.len()
    }

    fn paint_cell(&mut self, cell: CellCoord, value: i32) {
        let (Ok(column), Ok(row)) = (
            u32::try_from(cell.x),
            u32::try_from((self.grid_height - 1).saturating_sub(cell.y)),
        ) else {
            return;
        };
        let (Some(left), Some(top)) = (
            column.checked_mul(self.scale),
            row.checked_mul(self.scale),
        ) else {
            return;
        };

        let color = Rgba(self.ramp.color_for_value(value));
        for py in top..top.saturating_add(self.scale) {
            for px in left..left.saturating_add(self.scale) {
                if let Some(pixel) = self.canvas.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }

    /// Current rendered image
    pub const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Refresh and record a frame if anything changed since the previous frame
    ///
    /// The first call always records a frame. Returns whether a frame was added.
    pub fn capture_frame(&mut self, grid: &HeatmapGrid) -> bool {
        let changed = self.refresh(grid) > 0;
        if !changed && !self.frames.is_empty() {
            return false;
        }
        self.frames.push(self.canvas.clone());
        true
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the recorded frames as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is below what viewers reliably play back, only every
    /// n-th frame is kept so the apparent animation speed is preserved. The
    /// final frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: impl AsRef<Path>, frame_delay_ms: u32) -> Result<()> {
        let output_path = output_path.as_ref();
        let Some(last) = self.frames.last() else {
            return Err(HeatmapError::EmptyCapture);
        };

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let delay = image::Delay::from_numer_denom_ms(effective_delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .step_by(skip_factor)
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();
        frames.push(Frame::from_parts(
            last.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
        ));

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| HeatmapError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let frame_total = frames.len();
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| HeatmapError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!(
            "Wrote {frame_total}-frame animation to '{}'",
            output_path.display()
        );

        Ok(())
    }
}
