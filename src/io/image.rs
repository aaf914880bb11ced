//! Rendering the heat field to images and PNG export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::MAX_PIXEL_SCALE;
use crate::io::error::{HeatmapError, Result, invalid_parameter};
use crate::math::interpolation::ColorRamp;
use crate::spatial::grid::HeatmapGrid;

/// Check a pixel-per-cell scale before allocating an image
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero or above `MAX_PIXEL_SCALE`
pub fn validate_scale(scale: u32) -> Result<()> {
    if scale == 0 || scale > MAX_PIXEL_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_PIXEL_SCALE}"),
        ));
    }
    Ok(())
}

/// Pixel size of a `width x height` grid rendered at `scale` pixels per cell side
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is out of range, or if either side or
/// the RGBA buffer would not fit the image types
pub fn image_dimensions(width: i32, height: i32, scale: u32) -> Result<(u32, u32)> {
    validate_scale(scale)?;

    let too_large = || {
        invalid_parameter(
            "scale",
            &scale,
            &format!("a {width}x{height} grid at this scale exceeds the image size limit"),
        )
    };

    let columns = u32::try_from(width).map_err(|e| {
        invalid_parameter("width", &width, &format!("not a pixel count ({e})"))
    })?;
    let rows = u32::try_from(height).map_err(|e| {
        invalid_parameter("height", &height, &format!("not a pixel count ({e})"))
    })?;
    let pixel_width = columns.checked_mul(scale).ok_or_else(too_large)?;
    let pixel_height = rows.checked_mul(scale).ok_or_else(too_large)?;

    (pixel_width as usize)
        .checked_mul(pixel_height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(too_large)?;

    Ok((pixel_width, pixel_height))
}

/// Render every cell as a `scale x scale` block colored by `ramp`
///
/// The top image row shows the top grid row, so the picture reads the same
/// way up as world space.
///
/// # Errors
///
/// Returns `InvalidParameter` if the image size is out of range, see
/// [`image_dimensions`]
pub fn render_grid(grid: &HeatmapGrid, ramp: &ColorRamp, scale: u32) -> Result<RgbaImage> {
    let (pixel_width, pixel_height) = image_dimensions(grid.width(), grid.height(), scale)?;
    let rows = grid.height() as u32;

    Ok(ImageBuffer::from_fn(pixel_width, pixel_height, |px, py| {
        let x = (px / scale) as i32;
        let y = (rows - 1 - py / scale) as i32;
        Rgba(ramp.color_for_value(grid.get_value(x, y)))
    }))
}

/// Create the parent directory of `path` if it has one
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| HeatmapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is out of range or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &HeatmapGrid,
    ramp: &ColorRamp,
    scale: u32,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = render_grid(grid, ramp, scale)?;
    ensure_parent_dir(output_path)?;

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| HeatmapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!(
        "Wrote {}x{} heatmap image to '{}'",
        img.width(),
        img.height(),
        output_path.display()
    );

    Ok(())
}
