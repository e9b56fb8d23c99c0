//! Edge-matching jigsaw reconstruction with oriented pattern search
//!
//! Square tiles whose borders must agree with their neighbours' are placed
//! into a unique square arrangement by backtracking, their interiors are
//! stitched into one image, and the image is scanned for a fixed pattern
//! under all eight rotations and reflections.

#![deny(unsafe_code)]

/// Arrangement search, image assembly, pattern matching and puzzle generation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Edge codes, symmetry transforms, tiles and grids
pub mod spatial;

pub use io::error::{JigsawError, Result};
