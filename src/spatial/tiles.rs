//! Tile records: edge codes for matching, pixel blocks for assembly
//!
//! A [`SourceTile`] is the raw square of pixels read from input. The solver
//! only ever looks at its [`Tile`], the id plus four edge codes. Edges are
//! always listed top, right, bottom, left and each is read clockwise around
//! the tile, so two touching edges encode either to complementary values or,
//! when one tile needs flipping, to equal ones.

use ndarray::{Array2, s};

use crate::spatial::edges::{EdgeCode, EdgeCodec};
use crate::spatial::symmetry::Transform;

/// Identifier carried by each input tile
pub type TileId = u64;

/// Immutable edge record of one tile in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    id: TileId,
    edges: [EdgeCode; 4],
}

impl Tile {
    /// Create a tile from edge codes listed top, right, bottom, left
    pub const fn new(id: TileId, edges: [EdgeCode; 4]) -> Self {
        Self { id, edges }
    }

    /// Tile id, shared by every orientation
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Edge codes listed top, right, bottom, left
    pub const fn edges(&self) -> [EdgeCode; 4] {
        self.edges
    }

    /// Top edge, read left to right
    pub const fn top(&self) -> EdgeCode {
        self.edges[0]
    }

    /// Right edge, read top to bottom
    pub const fn right(&self) -> EdgeCode {
        self.edges[1]
    }

    /// Bottom edge, read right to left
    pub const fn bottom(&self) -> EdgeCode {
        self.edges[2]
    }

    /// Left edge, read bottom to top
    pub const fn left(&self) -> EdgeCode {
        self.edges[3]
    }

    /// Whether any edge carries `code`
    pub fn has_edge(&self, code: EdgeCode) -> bool {
        self.edges.contains(&code)
    }

    /// A new tile with the same id seen through `transform`
    #[must_use]
    pub fn transform(&self, transform: Transform, codec: &EdgeCodec) -> Self {
        Self {
            id: self.id,
            edges: transform.apply_to_edges(self.edges, codec),
        }
    }
}

/// A square block of pixels as read from input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTile {
    /// Tile identifier
    pub id: TileId,
    /// Full pixel block including the border, `true` for on
    pub pixels: Array2<bool>,
}

impl SourceTile {
    /// Create a source tile from its pixel block
    pub const fn new(id: TileId, pixels: Array2<bool>) -> Self {
        Self { id, pixels }
    }

    /// Side length of the block
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Whether the block is square
    pub fn is_square(&self) -> bool {
        self.pixels.nrows() == self.pixels.ncols()
    }

    /// Read the four edges in the fixed clockwise directions
    pub fn edge_tile(&self, codec: &EdgeCodec) -> Tile {
        let last = self.side().saturating_sub(1);
        let top = codec.encode(self.pixels.row(0).iter().copied());
        let right = codec.encode(self.pixels.column(last).iter().copied());
        let bottom = codec.encode(self.pixels.row(last).iter().rev().copied());
        let left = codec.encode(self.pixels.column(0).iter().rev().copied());
        Tile::new(self.id, [top, right, bottom, left])
    }

    /// The block with its one-pixel border stripped
    pub fn interior(&self) -> Array2<bool> {
        let side = self.side();
        if side < 2 {
            return Array2::from_elem((0, 0), false);
        }
        self.pixels.slice(s![1..side - 1, 1..side - 1]).to_owned()
    }
}
