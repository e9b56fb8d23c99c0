//! PNG export of assembled images with pattern matches highlighted

use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

use crate::algorithm::matcher::ScanReport;
use crate::io::configuration::{PNG_OFF_COLOR, PNG_ON_COLOR, PNG_PATTERN_COLOR};
use crate::io::error::{JigsawError, Result};

/// Export an assembled image as a PNG, one image pixel per PNG pixel
///
/// # Errors
///
/// Returns an error if:
/// - The image is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: &Array2<bool>,
    scan: Option<&ScanReport>,
    output_path: &Path,
) -> Result<()> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(JigsawError::InvalidParameter {
            parameter: "image",
            value: format!("{rows}x{cols}"),
            reason: "cannot export an empty image".to_string(),
        });
    }

    let img = ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let (row, col) = (y as usize, x as usize);
        let covered = scan.is_some_and(|report| report.is_covered(row, col));
        let color = if covered {
            PNG_PATTERN_COLOR
        } else if image.get((row, col)).copied().unwrap_or(false) {
            PNG_ON_COLOR
        } else {
            PNG_OFF_COLOR
        };
        Rgba(color)
    });

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| JigsawError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| JigsawError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
