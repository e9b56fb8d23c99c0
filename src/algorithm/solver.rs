//! Depth-first arrangement search over row-major cells
//!
//! The solver owns the grid and the used-tile set and mutates both in place.
//! Recursion is replaced by an explicit stack of frames, one per cell on the
//! current search path, each remembering which tile and transform it will try
//! next. Exhausting a frame pops it and removes the parent's placement.
//!
//! Pruning:
//! - A cell's top and left requirements come from already placed neighbours
//! - A tile is skipped outright when its edges contain neither the required
//!   codes (unreflected orientations) nor their complements (reflected ones)
//! - The first cell tries only unreflected transforms and never the last
//!   three catalog tiles, which removes the whole-grid symmetric duplicates
//!   without losing the true arrangement

use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::{ANCHOR_EXCLUDED_TAIL, ANCHOR_TRANSFORMS};
use crate::io::error::{JigsawError, Result};
use crate::spatial::edges::{EdgeCode, EdgeCodec};
use crate::spatial::grid::{ArrangementGrid, Placement};
use crate::spatial::symmetry::Transform;
use crate::spatial::tiles::{Tile, TileId};
use crate::spatial::TileCatalog;

/// Lifecycle of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Not yet finished
    Searching,
    /// Every cell holds a matching placement
    Solved,
    /// The root cell ran out of candidates
    Failed,
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tiles placed into a cell, including those later removed
    pub placements: u64,
    /// Placements undone after their subtree failed
    pub backtracks: u64,
    /// Candidate tiles rejected by the edge membership check
    pub pruned: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placements, {} backtracks, {} pruned",
            self.placements, self.backtracks, self.pruned
        )
    }
}

/// Which orientation families of a tile can still satisfy a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Viability {
    unflipped: bool,
    flipped: bool,
}

impl Viability {
    // Necessary, not sufficient: the codes must also land on the right sides
    fn of(tile: &Tile, up: Option<EdgeCode>, left: Option<EdgeCode>, codec: &EdgeCodec) -> Self {
        let required = [up, left];
        Self {
            unflipped: required.iter().flatten().all(|&code| tile.has_edge(code)),
            flipped: required
                .iter()
                .flatten()
                .all(|&code| tile.has_edge(codec.complement(code))),
        }
    }

    const fn any(self) -> bool {
        self.unflipped || self.flipped
    }

    const fn allows(self, transform: Transform) -> bool {
        if transform.reflects() {
            self.flipped
        } else {
            self.unflipped
        }
    }
}

/// Search state for one cell on the current path
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: usize,
    row: usize,
    col: usize,
    up: Option<EdgeCode>,
    left: Option<EdgeCode>,
    tile_cursor: usize,
    transform_cursor: usize,
    viability: Viability,
}

impl Frame {
    fn accepts(&self, oriented: &Tile) -> bool {
        self.up.is_none_or(|up| up == oriented.top())
            && self.left.is_none_or(|left| left == oriented.left())
    }
}

/// Backtracking solver placing every catalog tile into a square grid
pub struct ArrangementSolver<'a> {
    catalog: &'a TileCatalog,
    grid: ArrangementGrid,
    used: TileBitset,
    state: SolverState,
    stats: SearchStats,
}

impl<'a> ArrangementSolver<'a> {
    /// Create a solver with an empty grid sized for the catalog
    pub fn new(catalog: &'a TileCatalog) -> Self {
        Self {
            catalog,
            grid: ArrangementGrid::new(catalog.dim()),
            used: TileBitset::new(catalog.len()),
            state: SolverState::Searching,
            stats: SearchStats::default(),
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Counters so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The grid in its current state
    pub const fn grid(&self) -> &ArrangementGrid {
        &self.grid
    }

    /// Catalog tiles currently placed
    pub const fn used(&self) -> &TileBitset {
        &self.used
    }

    /// Run the search to completion
    ///
    /// The first complete arrangement found wins; no other branch is explored
    /// after it. Calling again after a finished search returns the same
    /// outcome without searching.
    ///
    /// # Errors
    ///
    /// Returns [`JigsawError::UnsolvableArrangement`] if every candidate for
    /// the first cell fails
    pub fn solve(&mut self) -> Result<()> {
        match self.state {
            SolverState::Solved => return Ok(()),
            SolverState::Failed => return Err(self.unsolvable()),
            SolverState::Searching => {}
        }

        let cells = self.grid.cell_count();
        log::debug!(
            "Searching {dim}x{dim} arrangement of {cells} tiles",
            dim = self.grid.dim()
        );

        let mut stack = Vec::with_capacity(cells + 1);
        stack.push(self.open_frame(0));

        while let Some(frame) = stack.last_mut() {
            if frame.cell == cells {
                self.state = SolverState::Solved;
                log::info!("Arrangement found: {}", self.stats);
                return Ok(());
            }

            if let Some(placement) = self.next_candidate(frame) {
                let (row, col, cell) = (frame.row, frame.col, frame.cell);
                self.grid.place(row, col, placement);
                self.used.insert(placement.catalog_index);
                self.stats.placements += 1;
                let child = self.open_frame(cell + 1);
                stack.push(child);
            } else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    if let Some(removed) = self.grid.unplace(parent.row, parent.col) {
                        self.used.remove(removed.catalog_index);
                    }
                    self.stats.backtracks += 1;
                }
            }
        }

        self.state = SolverState::Failed;
        log::warn!("Arrangement search exhausted: {}", self.stats);
        Err(self.unsolvable())
    }

    /// Consume a solved search and keep its arrangement
    ///
    /// # Errors
    ///
    /// Returns an error if the search has not completed successfully
    pub fn into_solution(self) -> Result<SolvedArrangement> {
        match self.state {
            SolverState::Solved => {
                let corner_ids = self.grid.corner_ids()?;
                Ok(SolvedArrangement {
                    grid: self.grid,
                    stats: self.stats,
                    corner_ids,
                })
            }
            SolverState::Failed => Err(self.unsolvable()),
            SolverState::Searching => Err(JigsawError::IncompleteArrangement {
                filled: self.grid.filled(),
                cells: self.grid.cell_count(),
            }),
        }
    }

    fn unsolvable(&self) -> JigsawError {
        JigsawError::UnsolvableArrangement {
            tiles: self.catalog.len(),
            placements: self.stats.placements,
        }
    }

    // Catalog entries eligible for the first cell
    fn anchor_limit(&self) -> usize {
        let count = self.catalog.len();
        if count > ANCHOR_EXCLUDED_TAIL {
            count - ANCHOR_EXCLUDED_TAIL
        } else {
            count
        }
    }

    fn open_frame(&self, cell: usize) -> Frame {
        let (row, col) = self.grid.coordinates(cell);
        let (up, left) = self.grid.required_edges(row, col, self.catalog.codec());
        Frame {
            cell,
            row,
            col,
            up,
            left,
            tile_cursor: 0,
            transform_cursor: 0,
            viability: Viability::default(),
        }
    }

    // Advances the frame's cursors past the returned candidate
    fn next_candidate(&mut self, frame: &mut Frame) -> Option<Placement> {
        let catalog = self.catalog;
        let codec = catalog.codec();
        let anchoring = frame.cell == 0;
        let tile_limit = if anchoring {
            self.anchor_limit()
        } else {
            catalog.len()
        };
        let transform_limit = if anchoring {
            ANCHOR_TRANSFORMS
        } else {
            Transform::ALL.len()
        };

        while frame.tile_cursor < tile_limit {
            let index = frame.tile_cursor;
            let tile = catalog.tile(index)?;

            if frame.transform_cursor == 0 {
                frame.viability = if self.used.contains(index) {
                    Viability::default()
                } else {
                    let viability = Viability::of(tile, frame.up, frame.left, codec);
                    if !viability.any() {
                        self.stats.pruned += 1;
                    }
                    viability
                };
            }

            while frame.viability.any() && frame.transform_cursor < transform_limit {
                let transform = Transform::from_index(frame.transform_cursor)?;
                frame.transform_cursor += 1;
                if !frame.viability.allows(transform) {
                    continue;
                }

                let oriented = tile.transform(transform, codec);
                if frame.accepts(&oriented) {
                    return Some(Placement {
                        catalog_index: index,
                        transform,
                        tile: oriented,
                    });
                }
            }

            frame.tile_cursor += 1;
            frame.transform_cursor = 0;
        }

        None
    }
}

/// A complete arrangement together with how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedArrangement {
    grid: ArrangementGrid,
    stats: SearchStats,
    corner_ids: [TileId; 4],
}

impl SolvedArrangement {
    /// The fully populated grid
    pub const fn grid(&self) -> &ArrangementGrid {
        &self.grid
    }

    /// Counters from the search that produced this arrangement
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Ids of the top-left, top-right, bottom-left and bottom-right tiles
    pub const fn corner_ids(&self) -> [TileId; 4] {
        self.corner_ids
    }

    /// Product of the four corner tile ids
    pub fn corner_product(&self) -> u128 {
        self.corner_ids.iter().map(|&id| u128::from(id)).product()
    }
}

/// Solve a catalog in one call
///
/// # Errors
///
/// Returns [`JigsawError::UnsolvableArrangement`] if no arrangement exists
pub fn solve(catalog: &TileCatalog) -> Result<SolvedArrangement> {
    let mut solver = ArrangementSolver::new(catalog);
    solver.solve()?;
    solver.into_solution()
}
