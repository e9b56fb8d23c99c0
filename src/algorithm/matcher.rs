//! Oriented search for a fixed pattern in the assembled image
//!
//! A pattern is a set of "on" offsets inside a bounding box. Its orientations
//! come from applying the square's symmetry group to the offsets relative to
//! the pattern's own box. A match requires every offset to land on an on
//! pixel; covered pixels are collected in one bitmap so overlapping matches
//! count each pixel once.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::ON_PIXEL;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::symmetry::Transform;

/// A set of on offsets within a `height` x `width` box
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Build a pattern from rows of text, `#` marking on cells
    ///
    /// The box is as tall as the glyph and as wide as its longest row.
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph has no on cells
    pub fn from_glyph<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(row, text)| {
                text.as_ref()
                    .chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == ON_PIXEL)
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        Self::from_cells(cells, rows.len(), width)
    }

    /// Build a pattern from explicit offsets
    ///
    /// # Errors
    ///
    /// Returns an error if there are no offsets or any lies outside the box
    pub fn from_cells(
        mut cells: Vec<(usize, usize)>,
        height: usize,
        width: usize,
    ) -> Result<Self> {
        if cells.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &format!("{height}x{width}"),
                &"pattern has no on cells",
            ));
        }
        if let Some(&(row, col)) = cells.iter().find(|&&(r, c)| r >= height || c >= width) {
            return Err(invalid_parameter(
                "pattern",
                &format!("({row}, {col})"),
                &format!("offset lies outside the {height}x{width} box"),
            ));
        }
        cells.sort_unstable();
        cells.dedup();
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// On offsets, sorted row-major
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of on cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed pattern
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The pattern under `transform`, relative to its own box
    #[must_use]
    pub fn transform(&self, transform: Transform) -> Self {
        let (_, height, width) = transform.apply_to_cell((0, 0), self.height, self.width);
        let mut cells: Vec<(usize, usize)> = self
            .cells
            .iter()
            .map(|&cell| transform.apply_to_cell(cell, self.height, self.width).0)
            .collect();
        cells.sort_unstable();
        Self {
            cells,
            height,
            width,
        }
    }

    /// Distinct orientations paired with the first transform producing each
    ///
    /// An asymmetric pattern has eight; symmetric ones have fewer.
    pub fn orientations(&self) -> Vec<(Transform, Self)> {
        let mut oriented: Vec<(Transform, Self)> = Vec::with_capacity(Transform::ALL.len());
        for transform in Transform::ALL {
            let candidate = self.transform(transform);
            if !oriented.iter().any(|(_, existing)| *existing == candidate) {
                oriented.push((transform, candidate));
            }
        }
        oriented
    }
}

/// One occurrence of the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Row of the oriented box's top-left corner
    pub top: usize,
    /// Column of the oriented box's top-left corner
    pub left: usize,
    /// Orientation of the pattern at this site
    pub transform: Transform,
}

/// Result of scanning an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Every match, grouped by orientation, row-major within each
    pub matches: Vec<Match>,
    /// On pixels in the whole image
    pub on_pixels: usize,
    /// Distinct pixels covered by at least one match
    pub covered: usize,
    coverage: BitVec,
    width: usize,
}

impl ScanReport {
    /// Number of matches across all orientations
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// On pixels not covered by any match
    pub const fn uncovered(&self) -> usize {
        self.on_pixels.saturating_sub(self.covered)
    }

    /// Whether a pixel is part of some match
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        if col >= self.width {
            return false;
        }
        self.coverage.get(row * self.width + col).as_deref() == Some(&true)
    }
}

/// Scans images for every orientation of one pattern
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    orientations: Vec<(Transform, Pattern)>,
}

impl PatternMatcher {
    /// Prepare all eight orientations of `pattern`
    ///
    /// Orientations that coincide for a symmetric pattern are still scanned
    /// separately, and each reports its own matches.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            orientations: Transform::ALL
                .into_iter()
                .map(|transform| (transform, pattern.transform(transform)))
                .collect(),
        }
    }

    /// Orientations that will be searched
    pub fn orientations(&self) -> &[(Transform, Pattern)] {
        &self.orientations
    }

    /// Find every placement of every orientation
    pub fn scan(&self, image: &Array2<bool>) -> ScanReport {
        let (rows, cols) = image.dim();
        let mut coverage = bitvec![0; rows * cols];
        let mut matches = Vec::new();

        for (transform, pattern) in &self.orientations {
            if pattern.height() > rows || pattern.width() > cols {
                continue;
            }
            for top in 0..=rows - pattern.height() {
                for left in 0..=cols - pattern.width() {
                    let found = pattern.cells().iter().all(|&(r, c)| {
                        image.get((top + r, left + c)).copied().unwrap_or(false)
                    });
                    if !found {
                        continue;
                    }

                    log::debug!("Pattern found at ({top}, {left}) under {transform}");
                    matches.push(Match {
                        top,
                        left,
                        transform: *transform,
                    });
                    for &(r, c) in pattern.cells() {
                        coverage.set((top + r) * cols + left + c, true);
                    }
                }
            }
        }

        let on_pixels = image.iter().filter(|&&pixel| pixel).count();
        let covered = coverage.count_ones();
        log::info!(
            "Found {} pattern matches covering {covered} of {on_pixels} on pixels",
            matches.len()
        );

        ScanReport {
            matches,
            on_pixels,
            covered,
            coverage,
            width: cols,
        }
    }
}
