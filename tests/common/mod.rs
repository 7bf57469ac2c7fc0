//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use gridmean::RunConfig;
use tempfile::TempDir;

/// A scratch directory holding one input file
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Create a temp dir with `data.dat` containing `content`
    pub fn with_input(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("data.dat");
        let output = dir.path().join("data.res");
        std::fs::write(&input, content).expect("write input");
        Self { dir, input, output }
    }

    pub fn config(&self) -> RunConfig {
        RunConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            precision: 2,
        }
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(&self.output).expect("read output")
    }
}
