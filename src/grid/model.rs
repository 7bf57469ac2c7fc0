//! Dense grid storage
//!
//! Row-major `f32` buffer with a fixed extent. Cells that were never written
//! hold [`MISSING`], which keeps "no value" apart from a written zero.

use crate::error::GridError;

/// Marker stored in cells that never received a value
pub const MISSING: f32 = f32::NAN;

/// Whether a stored value is the missing marker
#[inline]
pub fn is_missing(value: f32) -> bool {
    value.is_nan()
}

/// Dense row-major grid of floats
///
/// Accessors take `(col, row)`, mirroring how cells are positioned during
/// parsing. Out-of-range access is a programming error and panics.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Allocate a `rows x cols` grid with every cell set to [`MISSING`]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::Allocation { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GridError::Allocation { rows, cols })?;
        data.resize(len, MISSING);

        Ok(Self { rows, cols, data })
    }

    /// Build a grid from row-major data
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols` or the product overflows.
    pub fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            Some(data.len()),
            rows.checked_mul(cols),
            "Data length {} does not match dimensions {}x{}",
            data.len(),
            rows,
            cols
        );
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    pub fn count_elements(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.cols && row < self.rows,
            "cell ({}, {}) out of bounds for {}x{} grid",
            col,
            row,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.data[self.offset(col, row)]
    }

    #[inline]
    pub fn put(&mut self, col: usize, row: usize, value: f32) {
        let idx = self.offset(col, row);
        self.data[idx] = value;
    }

    /// Whether `(col, row)` lies inside the grid
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    /// All cells in row-major order
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One row as a contiguous slice
    pub fn row(&self, row: usize) -> &[f32] {
        assert!(row < self.rows, "row {} out of bounds", row);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows in order
    ///
    /// Yields `rows` slices even when `cols` is zero.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows).map(move |r| self.row(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_missing() {
        let grid = Grid::new(2, 3).unwrap();

        assert_eq!(grid.count_elements(), 6);
        assert!(grid.as_slice().iter().all(|&v| is_missing(v)));
    }

    #[test]
    fn test_put_get_row_major() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.put(2, 1, 9.0);
        grid.put(0, 0, 0.0);

        assert_eq!(grid.get(2, 1), 9.0);
        assert_eq!(grid.as_slice()[5], 9.0);
        assert_eq!(grid.get(0, 0), 0.0);
        assert!(!is_missing(grid.get(0, 0)));
        assert!(is_missing(grid.get(1, 0)));
    }

    #[test]
    fn test_zero_extent() {
        let grid = Grid::new(3, 0).unwrap();

        assert!(grid.is_empty());
        assert_eq!(grid.iter_rows().count(), 3);
    }

    #[test]
    fn test_overflowing_extent_fails() {
        let result = Grid::new(usize::MAX, 2);
        assert!(matches!(result, Err(GridError::Allocation { .. })));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(1, 1).unwrap();
        grid.get(1, 0);
    }

    #[test]
    fn test_row_slices() {
        let grid = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);

        assert_eq!(grid.row(1), &[3.0, 4.0]);
        let rows: Vec<&[f32]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    #[should_panic(expected = "does not match dimensions")]
    fn test_from_vec_overflowing_extent_panics() {
        Grid::from_vec(vec![1.0, 2.0], usize::MAX, 2);
    }
}
