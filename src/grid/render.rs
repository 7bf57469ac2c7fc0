//! Plain-text grid rendering
//!
//! Every value is printed with a fixed number of decimals and followed by a
//! single space; each row ends with a newline. Missing cells print as `NaN`.

use std::fmt::Write as _;
use std::io::{self, Write};

use super::model::Grid;

/// Decimals used when no precision is configured
pub const DEFAULT_PRECISION: usize = 2;

/// Render the whole grid to a string
pub fn render_grid(grid: &Grid, precision: usize) -> String {
    let mut out = String::with_capacity(grid.count_elements() * (precision + 4) + grid.rows());
    for row in grid.iter_rows() {
        for value in row {
            // Writing to a String cannot fail
            let _ = write!(out, "{:.*} ", precision, value);
        }
        out.push('\n');
    }
    out
}

/// Render the grid into any writer
pub fn write_grid<W: Write>(grid: &Grid, precision: usize, writer: &mut W) -> io::Result<()> {
    writer.write_all(render_grid(grid, precision).as_bytes())?;
    writer.flush()
}
