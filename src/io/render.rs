//! Text rendering of arrangements and assembled images

use ndarray::Array2;

use crate::algorithm::matcher::ScanReport;
use crate::io::configuration::{OFF_PIXEL, ON_PIXEL, PATTERN_PIXEL};
use crate::spatial::ArrangementGrid;

/// Render an image one text row per pixel row
///
/// Pixels covered by a match in `scan` are drawn as `O`.
pub fn render_image(image: &Array2<bool>, scan: Option<&ScanReport>) -> String {
    let mut output = String::with_capacity(image.len() + image.nrows());
    for (row_index, row) in image.rows().into_iter().enumerate() {
        for (col_index, &pixel) in row.iter().enumerate() {
            let covered = scan.is_some_and(|report| report.is_covered(row_index, col_index));
            output.push(if covered {
                PATTERN_PIXEL
            } else if pixel {
                ON_PIXEL
            } else {
                OFF_PIXEL
            });
        }
        output.push('\n');
    }
    output
}

/// Render the tile id in each cell, `-` for empty cells
pub fn render_arrangement(grid: &ArrangementGrid) -> String {
    let ids = grid.tile_ids();
    let width = ids
        .iter()
        .flatten()
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for row in ids.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(id) => format!("{id:>width$}"),
                None => format!("{:>width$}", "-"),
            })
            .collect();
        output.push_str(&cells.join(" "));
        output.push('\n');
    }
    output
}
