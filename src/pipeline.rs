//! End-to-end run: load, analyse, drop the mean's column, write
//!
//! Each stage is exposed on its own so callers can stop after loading or
//! analysing without touching the filesystem for output.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GridError, InputErrorKind};
use crate::grid::{
    accumulate, densify, find_first_match, mean_non_missing, remove_column, render, Grid,
};

/// Resolved settings for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub precision: usize,
}

/// Result of analysing a grid
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub mean: f32,
    /// Column of the first cell equal to the mean
    pub matched_column: Option<usize>,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Extent of the parsed input as (rows, cols)
    pub source_dims: (usize, usize),
    pub analysis: Analysis,
    /// The grid that was written
    pub grid: Grid,
}

/// Open an input file for reading
pub fn open_input(path: &Path) -> Result<BufReader<File>, GridError> {
    if path.is_dir() {
        return Err(GridError::InputUnavailable {
            path: path.to_path_buf(),
            kind: InputErrorKind::IsDirectory,
        });
    }

    let file = File::open(path).map_err(|e| GridError::InputUnavailable {
        path: path.to_path_buf(),
        kind: InputErrorKind::from_io(e),
    })?;
    Ok(BufReader::new(file))
}

/// Open and parse an input file into a grid
pub fn load_grid(path: &Path) -> Result<Grid, GridError> {
    read_grid(path, open_input(path)?)
}

/// Parse already opened input; `path` names it in errors
pub fn read_grid<R: BufRead>(path: &Path, reader: R) -> Result<Grid, GridError> {
    let parsed = accumulate(reader).map_err(|source| GridError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if parsed.rejected_tokens > 0 {
        tracing::debug!(
            rejected = parsed.rejected_tokens,
            "skipped tokens that did not convert to numbers"
        );
    }

    let grid = densify(parsed)?;
    tracing::info!("({},{})", grid.rows(), grid.cols());
    Ok(grid)
}

/// Compute the mean and look for a cell equal to it
pub fn analyse(grid: &Grid) -> Analysis {
    let mean = mean_non_missing(grid);
    tracing::info!("grid mean: ({}) {}", grid.count_elements(), mean);

    let matched_column = find_first_match(grid, mean);
    if let Some(col) = matched_column {
        tracing::info!("found mean at column {}", col);
    }

    Analysis {
        mean,
        matched_column,
    }
}

/// Write the rendered grid to `path` and mirror it to `console`
///
/// The file is created before anything is written. A failure part way
/// through may leave it truncated.
pub fn write_output<W: Write>(
    grid: &Grid,
    precision: usize,
    path: &Path,
    console: &mut W,
) -> Result<(), GridError> {
    let file = File::create(path).map_err(|source| GridError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = render::render_grid(grid, precision);
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| GridError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    console
        .write_all(text.as_bytes())
        .and_then(|_| console.flush())
        .map_err(|source| GridError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

    tracing::debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "wrote output");
    Ok(())
}

/// Run the whole pipeline for one input file
pub fn run<W: Write>(config: &RunConfig, console: &mut W) -> Result<Outcome, GridError> {
    let reader = open_input(&config.input)?;
    run_from(config, reader, console)
}

/// Run the pipeline over an already opened input
pub fn run_from<R: BufRead, W: Write>(
    config: &RunConfig,
    reader: R,
    console: &mut W,
) -> Result<Outcome, GridError> {
    let grid = read_grid(&config.input, reader)?;
    let source_dims = (grid.rows(), grid.cols());

    if grid.is_empty() {
        return Err(GridError::EmptyGrid {
            rows: source_dims.0,
            cols: source_dims.1,
        });
    }

    let analysis = analyse(&grid);
    let reduced = match remove_column(&grid, analysis.matched_column)? {
        Cow::Owned(reduced) => Some(reduced),
        Cow::Borrowed(_) => None,
    };

    write_output(
        reduced.as_ref().unwrap_or(&grid),
        config.precision,
        &config.output,
        console,
    )?;

    Ok(Outcome {
        source_dims,
        analysis,
        grid: reduced.unwrap_or(grid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    /// Serves `data`, then fails every further read
    struct FailingReader {
        data: &'static [u8],
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.fill_buf()?.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.pos < self.data.len() {
                Ok(&self.data[self.pos..])
            } else {
                Err(io::Error::other("device went away"))
            }
        }

        fn consume(&mut self, amt: usize) {
            self.pos += amt;
        }
    }

    #[test]
    fn test_analyse_finds_mean_column() {
        let grid = Grid::from_vec(vec![1.0, 2.0, 3.0], 1, 3);
        let analysis = analyse(&grid);

        assert_eq!(analysis.mean, 2.0);
        assert_eq!(analysis.matched_column, Some(1));
    }

    #[test]
    fn test_analyse_no_match() {
        let grid = Grid::from_vec(vec![1.0, 2.0], 1, 2);
        let analysis = analyse(&grid);

        assert_eq!(analysis.mean, 1.5);
        assert_eq!(analysis.matched_column, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_grid(Path::new("/definitely/not/here.dat")).unwrap_err();
        assert!(matches!(
            err,
            GridError::InputUnavailable {
                kind: InputErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_read_failure_maps_to_read_error() {
        let reader = FailingReader {
            data: b"1 2\n3",
            pos: 0,
        };
        let err = read_grid(Path::new("flaky.dat"), reader).unwrap_err();

        match err {
            GridError::Read { path, source } => {
                assert_eq!(path, PathBuf::from("flaky.dat"));
                assert_eq!(source.to_string(), "device went away");
            }
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_failure_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            input: dir.path().join("flaky.dat"),
            output: dir.path().join("data.res"),
            precision: 2,
        };
        let reader = FailingReader {
            data: b"1 2 3\n",
            pos: 0,
        };
        let mut console = Vec::new();

        let err = run_from(&config, reader, &mut console).unwrap_err();

        assert!(matches!(err, GridError::Read { .. }));
        assert!(!config.output.exists());
        assert!(console.is_empty());
    }

    #[test]
    fn test_run_from_passes_grid_through_without_match() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            input: dir.path().join("data.dat"),
            output: dir.path().join("data.res"),
            precision: 2,
        };
        let mut console = Vec::new();

        let outcome = run_from(&config, "1 2\n3 5\n".as_bytes(), &mut console).unwrap();

        assert_eq!(outcome.analysis.matched_column, None);
        assert_eq!((outcome.grid.rows(), outcome.grid.cols()), (2, 2));
        assert_eq!(outcome.grid.as_slice(), &[1.0, 2.0, 3.0, 5.0]);
        assert_eq!(String::from_utf8(console).unwrap(), "1.00 2.00 \n3.00 5.00 \n");
    }
}
