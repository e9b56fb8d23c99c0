//! Reconstruction constants and runtime configuration defaults

// Tile geometry
/// Edge length of the tiles in the standard puzzle format
pub const DEFAULT_EDGE_LENGTH: usize = 10;

/// Smallest edge length that still leaves an interior after border stripping
pub const MIN_EDGE_LENGTH: usize = 3;

// Edge codes are stored as u32
/// Largest supported edge length
pub const MAX_EDGE_LENGTH: usize = 32;

// Root-cell anchoring
/// Trailing catalog entries never tried in the first cell
///
/// At least one of the four corner tiles lies outside any three entries,
/// so the true arrangement survives the exclusion.
pub const ANCHOR_EXCLUDED_TAIL: usize = 3;

/// Number of unreflected transforms tried in the first cell
pub const ANCHOR_TRANSFORMS: usize = 4;

// Pattern searched for in the assembled image
/// The sea monster glyph, `#` marks cells that must be on
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Text format
/// Character for an on pixel
pub const ON_PIXEL: char = '#';
/// Character for an off pixel
pub const OFF_PIXEL: char = '.';
/// Character drawn over pixels covered by a pattern match
pub const PATTERN_PIXEL: char = 'O';
/// Label introducing each tile block
pub const TILE_LABEL_PREFIX: &str = "Tile";

// Generation defaults
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;
/// Grid dimension of generated puzzles (12 x 12 = 144 tiles)
pub const DEFAULT_GENERATED_DIM: usize = 12;
/// Lowest generated tile id
pub const GENERATED_ID_BASE: u64 = 1000;
/// Number of distinct generated tile ids (four-digit ids)
pub const GENERATED_ID_SPAN: usize = 9000;
/// Attempts to find an unused edge code for one boundary before giving up
pub const MAX_BOUNDARY_ATTEMPTS: usize = 10_000;

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_image";
/// Extension of puzzle input files in directory mode
pub const INPUT_EXTENSION: &str = "txt";
/// RGBA colour of off pixels in exported images
pub const PNG_OFF_COLOR: [u8; 4] = [16, 42, 92, 255];
/// RGBA colour of on pixels in exported images
pub const PNG_ON_COLOR: [u8; 4] = [120, 170, 230, 255];
/// RGBA colour of pattern pixels in exported images
pub const PNG_PATTERN_COLOR: [u8; 4] = [40, 200, 90, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of pipeline stages reported per file
pub const PIPELINE_STAGES: u64 = 4;
