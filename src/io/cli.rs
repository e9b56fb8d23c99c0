//! Command-line interface for reconstructing puzzle files

use crate::algorithm::executor::{Reconstruction, reconstruct};
use crate::algorithm::generator::PuzzleGenerator;
use crate::algorithm::matcher::Pattern;
use crate::io::configuration::{
    DEFAULT_EDGE_LENGTH, DEFAULT_SEED, INPUT_EXTENSION, OUTPUT_SUFFIX, SEA_MONSTER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::parser::{read_tiles, write_tiles};
use crate::io::progress::ProgressManager;
use crate::io::render::{render_arrangement, render_image};
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "jigsaw")]
#[command(
    author,
    version,
    about = "Reassemble edge-matched image tiles and search the result for sea monsters"
)]
/// Command-line arguments for the reconstruction tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file or directory of puzzle files (output path with --generate)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Print the arrangement and the assembled image with matches marked
    #[arg(short, long)]
    pub render: bool,

    /// Export the assembled image as <input>_image.png
    #[arg(short, long)]
    pub png: bool,

    /// Process files even if their PNG output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write a generated DIM x DIM puzzle to TARGET instead of solving
    #[arg(short, long, value_name = "DIM")]
    pub generate: Option<usize>,

    /// Random seed for puzzle generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tile edge length for puzzle generation
    #[arg(short, long, default_value_t = DEFAULT_EDGE_LENGTH)]
    pub edge_length: usize,
}

impl Cli {
    /// Check if files with existing PNG output should be skipped
    pub const fn skip_existing(&self) -> bool {
        self.png && !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of one reconstructed puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input file
    pub path: PathBuf,
    /// Product of the four corner tile ids
    pub corner_product: u128,
    /// Pattern matches across all orientations
    pub match_count: usize,
    /// On pixels not covered by any match
    pub uncovered: usize,
}

impl FileReport {
    fn from_reconstruction(path: &Path, reconstruction: &Reconstruction) -> Self {
        Self {
            path: path.to_path_buf(),
            corner_product: reconstruction.corner_product(),
            match_count: reconstruction.match_count(),
            uncovered: reconstruction.uncovered(),
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path.display())?;
        writeln!(f, "  corner product: {}", self.corner_product)?;
        writeln!(f, "  sea monsters:   {}", self.match_count)?;
        write!(f, "  rough water:    {}", self.uncovered)
    }
}

/// Orchestrates batch reconstruction with progress tracking
pub struct FileProcessor {
    cli: Cli,
    pattern: Pattern,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor searching for the sea monster
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Ok(Self {
            cli,
            pattern: Pattern::from_glyph(&SEA_MONSTER)?,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, generation or any file's
    /// reconstruction fails
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        if let Some(dim) = self.cli.generate {
            self.generate(dim)?;
            return Ok(Vec::new());
        }

        let files: Vec<PathBuf> = self
            .collect_files()?
            .into_iter()
            .filter(|file| self.should_process_file(file))
            .collect();
        if files.is_empty() {
            log::warn!("No puzzle files found at {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let outcome = self.process_file(file, index);
            if outcome.is_err() {
                if let Some(ref pm) = self.progress_manager {
                    pm.fail_file(index);
                    pm.finish();
                }
            }
            reports.push(outcome?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Self::print_reports(&reports);
        Ok(reports)
    }

    fn generate(&self, dim: usize) -> Result<()> {
        let mut generator = PuzzleGenerator::new(dim, self.cli.edge_length, self.cli.seed)?;
        let puzzle = generator.generate()?;
        write_tiles(&self.cli.target, &puzzle.tiles)?;
        log::info!(
            "Wrote {} tiles to {} (corner product {})",
            puzzle.tiles.len(),
            self.cli.target.display(),
            puzzle.corner_product()
        );
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!(
                "Skipping {} (output exists at {})",
                input_path.display(),
                output_path.display()
            );
            return false;
        }
        true
    }

    // Allow print for the rendered arrangement and image
    #[allow(clippy::print_stdout)]
    fn process_file(&self, input_path: &Path, index: usize) -> Result<FileReport> {
        let start_time = Instant::now();
        log::info!("Processing {}", input_path.display());

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let tiles = read_tiles(input_path)?;
        let reconstruction = reconstruct(&tiles, &self.pattern, |stage| {
            log::debug!("{}: {stage}", input_path.display());
            if let Some(ref pm) = self.progress_manager {
                pm.update_stage(index, stage);
            }
        })?;

        if self.cli.render {
            println!("{}", render_arrangement(reconstruction.arrangement.grid()));
            println!(
                "{}",
                render_image(&reconstruction.image, Some(&reconstruction.scan))
            );
        }

        if self.cli.png {
            let output_path = Self::get_output_path(input_path);
            export_image_as_png(
                &reconstruction.image,
                Some(&reconstruction.scan),
                &output_path,
            )?;
            log::info!("Wrote {}", output_path.display());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(FileReport::from_reconstruction(input_path, &reconstruction))
    }

    // Allow print for the final results
    #[allow(clippy::print_stdout)]
    fn print_reports(reports: &[FileReport]) {
        for report in reports {
            println!("{report}");
        }
    }

    /// Path of the PNG written for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
