//! Input/output: ingestion, rendering, export, logging and the CLI

/// Command-line interface and batch file processing
pub mod cli;
/// Reconstruction constants and defaults
pub mod configuration;
/// Error types for all reconstruction operations
pub mod error;
/// PNG export of assembled images
pub mod image;
/// Logger initialisation
pub mod log;
/// Tile text parsing and serialisation
pub mod parser;
/// Multi-file progress bars
pub mod progress;
/// Text rendering of arrangements and images
pub mod render;
