/// Composite image assembly from solved arrangements
pub mod assembly;
/// Efficient bitset for tracking used catalog tiles
pub mod bitset;
/// End-to-end pipeline orchestration
pub mod executor;
/// Seeded generation of solvable puzzles
pub mod generator;
/// Oriented pattern search in assembled images
pub mod matcher;
/// Backtracking arrangement search
pub mod solver;
