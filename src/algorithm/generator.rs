//! Seeded generation of solvable tile puzzles
//!
//! Tiles are cut from a lattice in which neighbouring tiles share their
//! border pixels, exactly as a real puzzle's adjacent edges agree. Every
//! physical boundary is given an edge code that no other boundary shares in
//! either reading direction and that is not a palindrome, so each interior
//! edge matches only its true neighbour. Tiles are then individually rotated
//! or reflected and the catalog order shuffled.

use ndarray::{Array2, s};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

use crate::io::configuration::{GENERATED_ID_BASE, GENERATED_ID_SPAN, MAX_BOUNDARY_ATTEMPTS};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::edges::{EdgeCode, EdgeCodec};
use crate::spatial::symmetry::Transform;
use crate::spatial::tiles::{SourceTile, TileId};

/// A generated puzzle and its known answer
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Tiles in shuffled catalog order, each in a random orientation
    pub tiles: Vec<SourceTile>,
    /// Tile ids in their true positions
    pub layout: Array2<TileId>,
    /// The interior image the tiles were cut from, in its original orientation
    pub image: Array2<bool>,
}

impl GeneratedPuzzle {
    /// Ids of the top-left, top-right, bottom-left and bottom-right tiles
    pub fn corner_ids(&self) -> [TileId; 4] {
        let last = self.layout.nrows().saturating_sub(1);
        let corner = |row: usize, col: usize| self.layout.get([row, col]).copied().unwrap_or(0);
        [
            corner(0, 0),
            corner(0, last),
            corner(last, 0),
            corner(last, last),
        ]
    }

    /// Product of the four corner ids, invariant under whole-grid symmetry
    pub fn corner_product(&self) -> u128 {
        self.corner_ids().iter().map(|&id| u128::from(id)).product()
    }
}

/// Seeded builder of `dim` x `dim` puzzles with `edge_length` tiles
pub struct PuzzleGenerator {
    dim: usize,
    codec: EdgeCodec,
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` is zero, the tile count exceeds the id
    /// space, or `edge_length` is unsupported
    pub fn new(dim: usize, edge_length: usize, seed: u64) -> Result<Self> {
        if dim == 0 {
            return Err(invalid_parameter("dim", &dim, &"must be at least 1"));
        }
        if dim.checked_mul(dim).is_none_or(|count| count > GENERATED_ID_SPAN) {
            return Err(invalid_parameter(
                "dim",
                &dim,
                &format!("at most {GENERATED_ID_SPAN} tiles can receive distinct ids"),
            ));
        }
        Ok(Self {
            dim,
            codec: EdgeCodec::new(edge_length)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Side of the interior image a puzzle is cut from
    pub const fn image_size(&self) -> usize {
        self.dim * (self.codec.length() - 2)
    }

    /// Generate a puzzle over random interior pixels
    ///
    /// # Errors
    ///
    /// Returns an error if unique boundary codes cannot be found
    pub fn generate(&mut self) -> Result<GeneratedPuzzle> {
        let size = self.image_size();
        let rng = &mut self.rng;
        let image = Array2::from_shape_fn((size, size), |_| rng.random_bool(0.5));
        self.generate_with_image(&image)
    }

    /// Generate a puzzle whose assembled interior is `image`
    ///
    /// # Errors
    ///
    /// Returns an error if the image has the wrong size or unique boundary
    /// codes cannot be found
    pub fn generate_with_image(&mut self, image: &Array2<bool>) -> Result<GeneratedPuzzle> {
        let size = self.image_size();
        if image.dim() != (size, size) {
            return Err(invalid_parameter(
                "image",
                &format!("{}x{}", image.nrows(), image.ncols()),
                &format!("must be {size}x{size}"),
            ));
        }

        let edge = self.codec.length();
        let step = edge - 1;
        let interior = edge - 2;
        let lattice_size = self.dim * step + 1;
        let mut lattice = Array2::from_elem((lattice_size, lattice_size), false);

        for tile_row in 0..self.dim {
            for tile_col in 0..self.dim {
                let top = tile_row * step + 1;
                let left = tile_col * step + 1;
                let source = image.slice(s![
                    tile_row * interior..(tile_row + 1) * interior,
                    tile_col * interior..(tile_col + 1) * interior
                ]);
                lattice
                    .slice_mut(s![top..top + interior, left..left + interior])
                    .assign(&source);
            }
        }

        for node_row in (0..lattice_size).step_by(step) {
            for node_col in (0..lattice_size).step_by(step) {
                if let Some(pixel) = lattice.get_mut([node_row, node_col]) {
                    *pixel = self.rng.random_bool(0.5);
                }
            }
        }

        self.fill_boundaries(&mut lattice)?;

        let ids: Vec<TileId> = rand::seq::index::sample(&mut self.rng, GENERATED_ID_SPAN, self.dim * self.dim)
            .into_iter()
            .map(|offset| GENERATED_ID_BASE + offset as TileId)
            .collect();

        let mut layout = Array2::from_elem((self.dim, self.dim), 0);
        let mut tiles = Vec::with_capacity(ids.len());
        for (position, &id) in ids.iter().enumerate() {
            let (tile_row, tile_col) = (position / self.dim, position % self.dim);
            if let Some(slot) = layout.get_mut([tile_row, tile_col]) {
                *slot = id;
            }
            let top = tile_row * step;
            let left = tile_col * step;
            let block = lattice.slice(s![top..top + edge, left..left + edge]);
            let transform =
                Transform::from_index(self.rng.random_range(0..Transform::ALL.len()))
                    .unwrap_or_default();
            tiles.push(SourceTile::new(id, transform.apply_to_array(block)));
        }
        tiles.shuffle(&mut self.rng);

        log::debug!(
            "Generated {dim}x{dim} puzzle with edge length {edge}",
            dim = self.dim
        );

        Ok(GeneratedPuzzle {
            tiles,
            layout,
            image: image.clone(),
        })
    }

    // Gives every boundary segment free pixels producing an unused code
    fn fill_boundaries(&mut self, lattice: &mut Array2<bool>) -> Result<()> {
        let edge = self.codec.length();
        let step = edge - 1;
        let free_bits = edge - 2;
        let mut used: HashSet<EdgeCode> = HashSet::new();

        let mut segments: Vec<Vec<(usize, usize)>> = Vec::new();
        for line in 0..=self.dim {
            for tile in 0..self.dim {
                let fixed = line * step;
                let start = tile * step;
                segments.push((start..=start + step).map(|col| (fixed, col)).collect());
                segments.push((start..=start + step).map(|row| (row, fixed)).collect());
            }
        }

        for segment in &segments {
            let mut attempts = 0;
            loop {
                if attempts == MAX_BOUNDARY_ATTEMPTS {
                    return Err(invalid_parameter(
                        "dim",
                        &self.dim,
                        &format!("could not find unique edge codes of length {edge}"),
                    ));
                }
                attempts += 1;

                let bits: u32 = self.rng.random_range(0..(1u32 << free_bits));
                for (offset, &(row, col)) in segment.iter().skip(1).take(free_bits).enumerate() {
                    if let Some(pixel) = lattice.get_mut([row, col]) {
                        *pixel = (bits >> (free_bits - 1 - offset)) & 1 == 1;
                    }
                }

                let code = self.codec.encode(
                    segment
                        .iter()
                        .map(|&(row, col)| lattice.get([row, col]).copied().unwrap_or(false)),
                );
                if !self.codec.is_palindrome(code) && used.insert(self.codec.canonical(code)) {
                    break;
                }
            }
        }

        Ok(())
    }
}
