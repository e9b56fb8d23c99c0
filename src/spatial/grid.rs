//! Fixed-size arrangement grid mutated in place during the search
//!
//! Cells are filled in row-major order. Placement and removal are matched
//! operations, so backtracking never copies the grid.

use ndarray::Array2;

use crate::io::error::{JigsawError, Result};
use crate::spatial::edges::{EdgeCode, EdgeCodec};
use crate::spatial::symmetry::Transform;
use crate::spatial::tiles::{Tile, TileId};

/// A tile fixed into one cell in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the tile in its catalog
    pub catalog_index: usize,
    /// Transform applied to the catalog tile
    pub transform: Transform,
    /// The catalog tile after `transform`
    pub tile: Tile,
}

/// Square grid of optional placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangementGrid {
    cells: Array2<Option<Placement>>,
    filled: usize,
}

impl ArrangementGrid {
    /// Create an empty `dim` x `dim` grid
    pub fn new(dim: usize) -> Self {
        Self {
            cells: Array2::from_elem((dim, dim), None),
            filled: 0,
        }
    }

    /// Side of the grid
    pub fn dim(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of populated cells
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Whether every cell holds a placement
    pub fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Row and column of a row-major cell index
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let dim = self.dim().max(1);
        (index / dim, index % dim)
    }

    /// Placement at a row and column
    pub fn get(&self, row: usize, col: usize) -> Option<&Placement> {
        self.cells.get([row, col]).and_then(Option::as_ref)
    }

    /// Fill an empty cell, returning false if it was out of range or taken
    pub fn place(&mut self, row: usize, col: usize, placement: Placement) -> bool {
        let Some(cell) = self.cells.get_mut([row, col]) else {
            return false;
        };
        if cell.is_some() {
            return false;
        }
        *cell = Some(placement);
        self.filled += 1;
        true
    }

    /// Clear a cell, returning what it held
    pub fn unplace(&mut self, row: usize, col: usize) -> Option<Placement> {
        let removed = self.cells.get_mut([row, col]).and_then(Option::take);
        if removed.is_some() {
            self.filled -= 1;
        }
        removed
    }

    /// Edge codes a tile must show to fit at `(row, col)`
    ///
    /// Returns the required top and left codes. A neighbour's bottom or right
    /// edge is read in the opposite direction to this cell's top or left, so
    /// the requirement is its complement. Sides without a placed neighbour
    /// are unconstrained.
    pub fn required_edges(
        &self,
        row: usize,
        col: usize,
        codec: &EdgeCodec,
    ) -> (Option<EdgeCode>, Option<EdgeCode>) {
        let up = row
            .checked_sub(1)
            .and_then(|above| self.get(above, col))
            .map(|placement| codec.complement(placement.tile.bottom()));
        let left = col
            .checked_sub(1)
            .and_then(|before| self.get(row, before))
            .map(|placement| codec.complement(placement.tile.right()));
        (up, left)
    }

    /// Tile ids laid out as in the grid, `None` for empty cells
    pub fn tile_ids(&self) -> Array2<Option<TileId>> {
        self.cells
            .map(|cell| cell.as_ref().map(|placement| placement.tile.id()))
    }

    /// Ids of the top-left, top-right, bottom-left and bottom-right tiles
    ///
    /// # Errors
    ///
    /// Returns an error if any corner cell is empty
    pub fn corner_ids(&self) -> Result<[TileId; 4]> {
        let last = self.dim().saturating_sub(1);
        let corner = |row: usize, col: usize| {
            self.get(row, col)
                .map(|placement| placement.tile.id())
                .ok_or(JigsawError::IncompleteArrangement {
                    filled: self.filled,
                    cells: self.cell_count(),
                })
        };
        Ok([
            corner(0, 0)?,
            corner(0, last)?,
            corner(last, 0)?,
            corner(last, last)?,
        ])
    }

    /// Product of the four corner tile ids
    ///
    /// # Errors
    ///
    /// Returns an error if any corner cell is empty
    pub fn corner_product(&self) -> Result<u128> {
        Ok(self
            .corner_ids()?
            .iter()
            .map(|&id| u128::from(id))
            .product())
    }

    /// Check every shared edge of a complete grid
    ///
    /// Horizontal neighbours need `right == complement(left)`, vertical
    /// neighbours `bottom == complement(top)`. Empty cells fail the check.
    pub fn verify_edges(&self, codec: &EdgeCodec) -> bool {
        let dim = self.dim();
        for row in 0..dim {
            for col in 0..dim {
                let Some(here) = self.get(row, col) else {
                    return false;
                };
                if let Some(right) = self.get(row, col + 1) {
                    if here.tile.right() != codec.complement(right.tile.left()) {
                        return false;
                    }
                }
                if let Some(below) = self.get(row + 1, col) {
                    if here.tile.bottom() != codec.complement(below.tile.top()) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Iterate over populated cells as `((row, col), placement)`
    pub fn placements(&self) -> impl Iterator<Item = ((usize, usize), &Placement)> {
        self.cells
            .indexed_iter()
            .filter_map(|(position, cell)| cell.as_ref().map(|placement| (position, placement)))
    }
}
