//! End-to-end reconstruction: solve, assemble, scan
//!
//! Stages run strictly in order and each consumes the previous stage's
//! output; a failure stops the pipeline and no partial result is returned.

use ndarray::Array2;
use std::fmt;

use crate::algorithm::assembly::ImageAssembler;
use crate::algorithm::matcher::{Pattern, PatternMatcher, ScanReport};
use crate::algorithm::solver::{ArrangementSolver, SolvedArrangement};
use crate::io::error::Result;
use crate::spatial::TileCatalog;
use crate::spatial::tiles::SourceTile;

/// Pipeline stage about to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building and validating the catalog
    Cataloguing,
    /// Backtracking search for the arrangement
    Solving,
    /// Stitching interiors into the composite image
    Assembling,
    /// Searching the image for the pattern
    Scanning,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cataloguing => "cataloguing",
            Self::Solving => "solving",
            Self::Assembling => "assembling",
            Self::Scanning => "scanning",
        };
        f.write_str(name)
    }
}

/// Everything produced by a successful run
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// The solved arrangement
    pub arrangement: SolvedArrangement,
    /// The assembled image, `true` for on pixels
    pub image: Array2<bool>,
    /// Pattern matches in the image
    pub scan: ScanReport,
}

impl Reconstruction {
    /// Product of the four corner tile ids
    pub fn corner_product(&self) -> u128 {
        self.arrangement.corner_product()
    }

    /// Number of pattern matches across all orientations
    pub fn match_count(&self) -> usize {
        self.scan.match_count()
    }

    /// On pixels not covered by any match
    pub const fn uncovered(&self) -> usize {
        self.scan.uncovered()
    }
}

/// Runs the solve, assemble and scan stages over one catalog
pub struct Reconstructor<'a> {
    catalog: &'a TileCatalog,
    matcher: PatternMatcher,
}

impl<'a> Reconstructor<'a> {
    /// Prepare a run searching for `pattern`
    pub fn new(catalog: &'a TileCatalog, pattern: &Pattern) -> Self {
        Self {
            catalog,
            matcher: PatternMatcher::new(pattern),
        }
    }

    /// Run every stage
    ///
    /// # Errors
    ///
    /// Returns an error if no arrangement exists
    pub fn run(&self) -> Result<Reconstruction> {
        self.run_with_observer(|_| {})
    }

    /// Run every stage, announcing each one before it starts
    ///
    /// # Errors
    ///
    /// Returns an error if no arrangement exists
    pub fn run_with_observer<F>(&self, mut on_stage: F) -> Result<Reconstruction>
    where
        F: FnMut(Stage),
    {
        on_stage(Stage::Solving);
        let mut solver = ArrangementSolver::new(self.catalog);
        solver.solve()?;
        let arrangement = solver.into_solution()?;
        log::info!(
            "Corner product {} ({})",
            arrangement.corner_product(),
            arrangement.stats()
        );

        on_stage(Stage::Assembling);
        let image = ImageAssembler::new(self.catalog).assemble(arrangement.grid())?;

        on_stage(Stage::Scanning);
        let scan = self.matcher.scan(&image);

        Ok(Reconstruction {
            arrangement,
            image,
            scan,
        })
    }
}

/// Validate raw tiles and run the full pipeline
///
/// # Errors
///
/// Returns an error if the tiles violate the catalog contract or cannot be
/// arranged
pub fn reconstruct<F>(
    source_tiles: &[SourceTile],
    pattern: &Pattern,
    mut on_stage: F,
) -> Result<Reconstruction>
where
    F: FnMut(Stage),
{
    on_stage(Stage::Cataloguing);
    let catalog = TileCatalog::from_source_tiles(source_tiles)?;
    Reconstructor::new(&catalog, pattern).run_with_observer(on_stage)
}
