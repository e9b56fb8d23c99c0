//! Stitches tile interiors into one composite image
//!
//! Each interior block receives the transform recorded for its cell, the
//! same reflect-then-rotate rule the solver applied to the edge codes, and is
//! copied to its cell's offset in the output.

use ndarray::{Array2, s};

use crate::io::error::{JigsawError, Result, malformed_input};
use crate::spatial::{ArrangementGrid, TileCatalog};

/// Builds the composite image of a complete arrangement
pub struct ImageAssembler<'a> {
    catalog: &'a TileCatalog,
}

impl<'a> ImageAssembler<'a> {
    /// Create an assembler over the catalog the arrangement was solved from
    pub const fn new(catalog: &'a TileCatalog) -> Self {
        Self { catalog }
    }

    /// Side of the assembled image in pixels
    pub const fn image_size(&self) -> usize {
        self.catalog.dim() * self.catalog.interior_size()
    }

    /// Assemble the image, `true` for on pixels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid is not complete ([`JigsawError::IncompleteArrangement`])
    /// - The grid does not match the catalog's dimension or refers to a
    ///   tile the catalog does not hold
    pub fn assemble(&self, grid: &ArrangementGrid) -> Result<Array2<bool>> {
        if !grid.is_complete() {
            return Err(JigsawError::IncompleteArrangement {
                filled: grid.filled(),
                cells: grid.cell_count(),
            });
        }
        if grid.dim() != self.catalog.dim() {
            return Err(malformed_input(
                &format!(
                    "grid is {0}x{0} but the catalog needs {1}x{1}",
                    grid.dim(),
                    self.catalog.dim()
                ),
                None,
            ));
        }

        let block = self.catalog.interior_size();
        let size = self.image_size();
        let mut image = Array2::from_elem((size, size), false);

        for ((row, col), placement) in grid.placements() {
            let interior = self
                .catalog
                .interior(placement.catalog_index)
                .ok_or_else(|| {
                    malformed_input(
                        &format!(
                            "cell ({row}, {col}) refers to catalog index {}",
                            placement.catalog_index
                        ),
                        None,
                    )
                })?;
            let oriented = placement.transform.apply_to_array(interior.view());
            let (top, left) = (row * block, col * block);
            image
                .slice_mut(s![top..top + block, left..left + block])
                .assign(&oriented);
        }

        log::debug!("Assembled {size}x{size} image from {} tiles", grid.cell_count());
        Ok(image)
    }
}
