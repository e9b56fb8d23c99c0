//! Tile text ingestion and serialisation
//!
//! Each tile is a `Tile <id>:` label line followed by square rows of `#`
//! (on) and `.` (off). Blocks are separated by blank lines.

use ndarray::Array2;
use std::path::Path;

use crate::io::configuration::{OFF_PIXEL, ON_PIXEL, TILE_LABEL_PREFIX};
use crate::io::error::{JigsawError, Result, malformed_input};
use crate::spatial::tiles::{SourceTile, TileId};

/// Parse every tile block in `input`
///
/// Blank input yields an empty list; the catalog rejects that later.
///
/// # Errors
///
/// Returns [`JigsawError::MalformedInput`] naming the block if:
/// - The label line is not `Tile <id>:`
/// - The block has no pixel rows or is not square
/// - A row contains anything other than `#` and `.`
pub fn parse_tiles(input: &str) -> Result<Vec<SourceTile>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in input.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .iter()
        .enumerate()
        .map(|(index, lines)| parse_block(lines, index))
        .collect()
}

fn parse_block(lines: &[&str], index: usize) -> Result<SourceTile> {
    let (label, rows) = lines
        .split_first()
        .ok_or_else(|| malformed_input(&"empty tile block", Some(index)))?;
    let id = parse_label(label).ok_or_else(|| {
        malformed_input(
            &format!("expected '{TILE_LABEL_PREFIX} <id>:', found '{label}'"),
            Some(index),
        )
    })?;

    let side = rows.len();
    if side == 0 {
        return Err(malformed_input(
            &format!("tile {id} has no pixel rows"),
            Some(index),
        ));
    }

    let mut pixels = Vec::with_capacity(side * side);
    for (row_index, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != side {
            return Err(malformed_input(
                &format!("tile {id} row {row_index} has {width} pixels, expected {side}"),
                Some(index),
            ));
        }
        for ch in row.chars() {
            match ch {
                ON_PIXEL => pixels.push(true),
                OFF_PIXEL => pixels.push(false),
                other => {
                    return Err(malformed_input(
                        &format!("tile {id} row {row_index} contains '{other}'"),
                        Some(index),
                    ));
                }
            }
        }
    }

    let pixels = Array2::from_shape_vec((side, side), pixels)
        .map_err(|error| malformed_input(&error.to_string(), Some(index)))?;
    Ok(SourceTile::new(id, pixels))
}

fn parse_label(label: &str) -> Option<TileId> {
    label
        .trim()
        .strip_prefix(TILE_LABEL_PREFIX)?
        .trim()
        .strip_suffix(':')?
        .trim()
        .parse()
        .ok()
}

/// Write tiles back in the input format
pub fn format_tiles(tiles: &[SourceTile]) -> String {
    let mut output = String::new();
    for (index, tile) in tiles.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{TILE_LABEL_PREFIX} {}:\n", tile.id));
        for row in tile.pixels.rows() {
            output.extend(
                row.iter()
                    .map(|&pixel| if pixel { ON_PIXEL } else { OFF_PIXEL }),
            );
            output.push('\n');
        }
    }
    output
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are malformed
pub fn read_tiles(path: &Path) -> Result<Vec<SourceTile>> {
    let input = std::fs::read_to_string(path).map_err(|source| JigsawError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source,
    })?;
    parse_tiles(&input)
}

/// Write tiles to a puzzle file
///
/// # Errors
///
/// Returns an error if the parent directory or file cannot be written
pub fn write_tiles(path: &Path, tiles: &[SourceTile]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| JigsawError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }
    std::fs::write(path, format_tiles(tiles)).map_err(|source| JigsawError::FileSystem {
        path: path.to_path_buf(),
        operation: "write puzzle",
        source,
    })
}
