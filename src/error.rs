//! Error types for loading, analysing and writing grids

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an input file could not be opened
#[derive(Debug)]
pub enum InputErrorKind {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// Other I/O error
    Io(io::Error),
}

impl InputErrorKind {
    pub fn from_io(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(e),
        }
    }
}

impl fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Io(e) => write!(f, "{}", e),
        }
    }
}

/// Errors that end a run
#[derive(Debug)]
pub enum GridError {
    /// The input file could not be opened
    InputUnavailable { path: PathBuf, kind: InputErrorKind },
    /// Reading failed part way through the input
    Read { path: PathBuf, source: io::Error },
    /// The input held no numeric content
    EmptyGrid { rows: usize, cols: usize },
    /// The grid buffer could not be allocated
    Allocation { rows: usize, cols: usize },
    /// The output file could not be created
    OutputUnavailable { path: PathBuf, source: io::Error },
    /// Writing the output failed
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputUnavailable { path, kind } => {
                write!(f, "cannot open input {}: {}", path.display(), kind)
            }
            Self::Read { path, source } => {
                write!(f, "error reading {}: {}", path.display(), source)
            }
            Self::EmptyGrid { rows, cols } => write!(
                f,
                "grid should have dimensions > (0,0), got ({},{})",
                rows, cols
            ),
            Self::Allocation { rows, cols } => {
                write!(f, "cannot allocate a {}x{} grid", rows, cols)
            }
            Self::OutputUnavailable { path, source } => {
                write!(f, "cannot open output {}: {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "error writing {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputUnavailable {
                kind: InputErrorKind::Io(e),
                ..
            } => Some(e),
            Self::Read { source, .. }
            | Self::OutputUnavailable { source, .. }
            | Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
