//! Error types for ingestion, arrangement search and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum JigsawError {
    /// Tile input violates the catalog contract
    ///
    /// Raised for empty catalogs, tile counts that are not perfect squares,
    /// inconsistent edge lengths, duplicate ids and malformed tile blocks.
    /// Always detected before any search begins.
    MalformedInput {
        /// Description of what is wrong with the input
        reason: String,
        /// Zero-based index of the offending tile block, when known
        block: Option<usize>,
    },

    /// Backtracking exhausted every candidate at the root cell
    UnsolvableArrangement {
        /// Number of tiles in the catalog
        tiles: usize,
        /// Placements attempted before giving up
        placements: u64,
    },

    /// An operation that needs a fully populated grid received a partial one
    IncompleteArrangement {
        /// Cells currently holding a placement
        filled: usize,
        /// Total cells in the grid
        cells: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for JigsawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason, block } => match block {
                Some(index) => write!(f, "Malformed input in tile block {index}: {reason}"),
                None => write!(f, "Malformed input: {reason}"),
            },
            Self::UnsolvableArrangement { tiles, placements } => {
                write!(
                    f,
                    "No arrangement exists for {tiles} tiles (search exhausted after {placements} placements)"
                )
            }
            Self::IncompleteArrangement { filled, cells } => {
                write!(
                    f,
                    "Arrangement is incomplete: {filled} of {cells} cells placed"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for JigsawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, JigsawError>;

impl From<std::io::Error> for JigsawError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> JigsawError {
    JigsawError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error, optionally pinned to a tile block
pub fn malformed_input(reason: &impl ToString, block: Option<usize>) -> JigsawError {
    JigsawError::MalformedInput {
        reason: reason.to_string(),
        block,
    }
}
