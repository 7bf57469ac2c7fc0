//! Command-line argument parsing
//!
//! Supports:
//! - An optional input path (falls back to the configured default)
//! - Overriding the output path
//! - Verbose console logging

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;
use crate::pipeline::RunConfig;

/// Drop the column holding the grid mean
#[derive(Parser, Debug)]
#[command(
    name = "gridmean",
    version,
    about = "Parse a numeric grid, find the cell equal to its mean and drop that column"
)]
pub struct CliArgs {
    /// Input file of whitespace separated numbers
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of the configured output file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolve CLI arguments against the loaded config
    pub fn into_config(self, defaults: &GridConfig) -> RunConfig {
        RunConfig {
            input: self.input.unwrap_or_else(|| defaults.input.clone()),
            output: self.output.unwrap_or_else(|| defaults.output.clone()),
            precision: defaults.precision,
        }
    }
}
