//! Mean, match search and column removal

use std::borrow::Cow;

use super::model::{is_missing, Grid};
use crate::error::GridError;

/// Mean of every non-missing cell
///
/// Returns 0 for a grid without cells. A grid whose cells are all missing
/// divides by zero and yields NaN.
pub fn mean_non_missing(grid: &Grid) -> f32 {
    if grid.is_empty() {
        return 0.0;
    }

    let (sum, count) = grid
        .as_slice()
        .iter()
        .filter(|&&v| !is_missing(v))
        .fold((0.0f32, 0usize), |(sum, count), &v| (sum + v, count + 1));

    sum / count as f32
}

/// Column of the first cell exactly equal to `target`, scanning row by row
///
/// Equality is exact. A mean produced by float summation only matches when
/// it is reproduced bit for bit.
pub fn find_first_match(grid: &Grid, target: f32) -> Option<usize> {
    grid.iter_rows().find_map(|row| row.iter().position(|&v| v == target))
}

/// Copy of `grid` without column `col`; `None` passes the grid through
///
/// # Panics
///
/// Panics if `col` is not a column of `grid`.
pub fn remove_column(grid: &Grid, col: Option<usize>) -> Result<Cow<'_, Grid>, GridError> {
    let Some(col) = col else {
        return Ok(Cow::Borrowed(grid));
    };
    assert!(
        col < grid.cols(),
        "column {} out of bounds for {} columns",
        col,
        grid.cols()
    );

    let mut out = Grid::new(grid.rows(), grid.cols() - 1)?;
    for row in 0..grid.rows() {
        for c in 0..grid.cols() {
            match c.cmp(&col) {
                std::cmp::Ordering::Less => out.put(c, row, grid.get(c, row)),
                std::cmp::Ordering::Equal => {}
                std::cmp::Ordering::Greater => out.put(c - 1, row, grid.get(c, row)),
            }
        }
    }

    Ok(Cow::Owned(out))
}
