//! Sparse-to-dense conversion

use super::accumulator::ParsedCells;
use super::model::Grid;
use crate::error::GridError;

/// Build a grid sized from the discovered extent and fill it from the cells
///
/// Cells outside the extent come from an unterminated final line, which does
/// not count as a row; they are dropped. If two cells share a position the
/// later one in the list wins.
pub fn densify(parsed: ParsedCells) -> Result<Grid, GridError> {
    let mut grid = Grid::new(parsed.max_row, parsed.max_col)?;
    let mut dropped = 0usize;

    for cell in parsed.cells {
        if grid.contains(cell.col, cell.row) {
            grid.put(cell.col, cell.row, cell.value);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::warn!(
            dropped,
            rows = grid.rows(),
            cols = grid.cols(),
            "ignored values outside the grid (unterminated last line?)"
        );
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::accumulator::{accumulate, Cell};
    use crate::grid::model::is_missing;

    #[test]
    fn test_fills_positions() {
        let parsed = ParsedCells {
            cells: vec![Cell::new(1, 0, 2.0), Cell::new(0, 1, 3.0)],
            max_col: 2,
            max_row: 2,
            rejected_tokens: 0,
        };
        let grid = densify(parsed).unwrap();

        assert_eq!(grid.get(1, 0), 2.0);
        assert_eq!(grid.get(0, 1), 3.0);
        assert!(is_missing(grid.get(0, 0)));
        assert!(is_missing(grid.get(1, 1)));
    }

    #[test]
    fn test_ragged_padding() {
        let grid = densify(accumulate("1 2 3\n4\n".as_bytes()).unwrap()).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(0, 1), 4.0);
        assert!(is_missing(grid.get(1, 1)));
        assert!(is_missing(grid.get(2, 1)));
    }

    #[test]
    fn test_unterminated_line_dropped() {
        let grid = densify(accumulate("1 2\n3 4 5".as_bytes()).unwrap()).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (1, 2));
        assert_eq!(grid.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn test_no_content_gives_empty_grid() {
        let grid = densify(accumulate("abc\n\n".as_bytes()).unwrap()).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 0));
        assert!(grid.is_empty());
    }
}
