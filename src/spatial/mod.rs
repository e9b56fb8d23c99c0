//! Spatial data structures for tiles and their arrangement
//!
//! This module contains spatial-related functionality including:
//! - Edge encoding and the square symmetry group
//! - Tile records and the validated tile catalog
//! - The arrangement grid filled by the solver

/// Validated read-only tile collection
pub mod catalog;
/// Edge encoding and complements
pub mod edges;
/// Arrangement grid with matched place/unplace operations
pub mod grid;
/// Rotations and reflections of tiles, pixel blocks and coordinates
pub mod symmetry;
/// Tile edge records and raw pixel tiles
pub mod tiles;

pub use catalog::TileCatalog;
pub use grid::ArrangementGrid;
pub use symmetry::Transform;
