//! gridmean - numeric grid parsing and column pruning
//!
//! Parses a loosely formatted text file of floats into a dense grid, computes
//! the mean of its non-missing cells and removes the column holding the first
//! cell equal to that mean.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod tracing;

// Re-export commonly used types
pub use config::GridConfig;
pub use error::GridError;
pub use grid::{Grid, MISSING};
pub use pipeline::{run, RunConfig};
