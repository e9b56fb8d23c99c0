//! Validated, read-only collection of the tiles to arrange
//!
//! The catalog is built once from input and never mutated. It enforces the
//! input contract up front: a non-empty, perfect-square number of square
//! tiles of one edge length with distinct ids.

use ndarray::Array2;
use std::collections::HashSet;

use crate::io::error::{Result, malformed_input};
use crate::spatial::edges::EdgeCodec;
use crate::spatial::tiles::{SourceTile, Tile, TileId};

/// Edge records and interior pixel blocks of every input tile
///
/// Entries share one index space: `tiles()[i]` and `interior(i)` describe
/// the same input tile, in input order.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    codec: EdgeCodec,
    dim: usize,
    tiles: Vec<Tile>,
    interiors: Vec<Array2<bool>>,
}

impl TileCatalog {
    /// Validate source tiles and derive their edges and interiors
    ///
    /// # Errors
    ///
    /// Returns [`JigsawError::MalformedInput`](crate::JigsawError::MalformedInput) if:
    /// - No tiles are given
    /// - The tile count is not a perfect square
    /// - A tile is not square or its edge length differs from the first tile's
    /// - The edge length is outside the supported range
    /// - Two tiles share an id
    pub fn from_source_tiles(source_tiles: &[SourceTile]) -> Result<Self> {
        let first = source_tiles
            .first()
            .ok_or_else(|| malformed_input(&"catalog contains no tiles", None))?;

        let count = source_tiles.len();
        let dim = count.isqrt();
        if dim * dim != count {
            return Err(malformed_input(
                &format!("{count} tiles cannot form a square grid"),
                None,
            ));
        }

        let edge_length = first.side();
        let codec = EdgeCodec::new(edge_length)
            .map_err(|error| malformed_input(&error.to_string(), Some(0)))?;

        let mut seen_ids = HashSet::with_capacity(count);
        let mut tiles = Vec::with_capacity(count);
        let mut interiors = Vec::with_capacity(count);

        for (index, source) in source_tiles.iter().enumerate() {
            if !source.is_square() {
                return Err(malformed_input(
                    &format!(
                        "tile {} is {}x{}, tiles must be square",
                        source.id,
                        source.pixels.nrows(),
                        source.pixels.ncols()
                    ),
                    Some(index),
                ));
            }
            if source.side() != edge_length {
                return Err(malformed_input(
                    &format!(
                        "tile {} has edge length {}, expected {edge_length}",
                        source.id,
                        source.side()
                    ),
                    Some(index),
                ));
            }
            if !seen_ids.insert(source.id) {
                return Err(malformed_input(
                    &format!("tile id {} appears more than once", source.id),
                    Some(index),
                ));
            }

            tiles.push(source.edge_tile(&codec));
            interiors.push(source.interior());
        }

        log::debug!("Catalog built: {count} tiles, {dim}x{dim} grid, edge length {edge_length}");

        Ok(Self {
            codec,
            dim,
            tiles,
            interiors,
        })
    }

    /// Codec shared by every edge in the catalog
    pub const fn codec(&self) -> &EdgeCodec {
        &self.codec
    }

    /// Side of the square arrangement grid
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false once constructed; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Pixel length of a tile edge
    pub const fn edge_length(&self) -> usize {
        self.codec.length()
    }

    /// Pixel side of a tile interior once the border is stripped
    pub const fn interior_size(&self) -> usize {
        self.codec.length() - 2
    }

    /// Edge records in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Edge record at a catalog index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Interior pixels of the tile at a catalog index
    pub fn interior(&self, index: usize) -> Option<&Array2<bool>> {
        self.interiors.get(index)
    }

    /// Catalog index of a tile id
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }
}
