use ndarray::{Array2, ArrayView2, s};
use thiserror::Error;

use crate::{BoundaryConditions, BoundaryError};

/// A rectangular temperature field with fixed Dirichlet borders.
///
/// Layout contract: values are stored in standard (row-major) order and
/// indexed `[row, col]`. Row `0` is the top edge, row `rows - 1` the bottom;
/// column `0` is the left edge, column `cols - 1` the right. The four border
/// lines hold fixed boundary temperatures for the life of the grid; solvers
/// read them but only ever write interior cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Array2<f64>,
}

/// Errors from constructing a grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid must be at least 3x3 to have interior cells, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("field value at ({row}, {col}) is not finite: {value}")]
    NonFiniteValue { row: usize, col: usize, value: f64 },
}

impl Grid {
    /// Allocates a `rows x cols` field with the given edge temperatures.
    ///
    /// Border cells take the edge values (corners hold the left/right edge
    /// values, see [`BoundaryConditions`]); interior cells start at the
    /// arithmetic mean of the four edges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is below 3, or a
    /// boundary validation error if an edge temperature is not finite.
    pub fn with_boundaries(
        rows: usize,
        cols: usize,
        boundary: &BoundaryConditions,
    ) -> Result<Self, GridError> {
        if rows < 3 || cols < 3 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        boundary.validate()?;

        let mut values = Array2::from_elem((rows, cols), boundary.mean());
        values.row_mut(0).fill(boundary.top);
        values.row_mut(rows - 1).fill(boundary.bottom);
        values.column_mut(0).fill(boundary.left);
        values.column_mut(cols - 1).fill(boundary.right);

        Ok(Self { values })
    }

    /// Wraps an existing field, validating dimensions and finiteness.
    ///
    /// The border cells of `values` are taken as the fixed boundary data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is below 3, or
    /// `NonFiniteValue` naming the first offending cell.
    pub fn from_values(values: Array2<f64>) -> Result<Self, GridError> {
        let (rows, cols) = values.dim();
        if rows < 3 || cols < 3 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        for ((row, col), &value) in values.indexed_iter() {
            if !value.is_finite() {
                return Err(GridError::NonFiniteValue { row, col, value });
            }
        }
        Ok(Self { values })
    }

    /// Number of rows (the Y axis, top to bottom).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (the X axis, left to right).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Returns the temperature at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }

    /// A read-only view of the full field, borders included.
    #[must_use]
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// A read-only view of the interior cells only.
    #[must_use]
    pub fn interior(&self) -> ArrayView2<'_, f64> {
        let (rows, cols) = self.values.dim();
        self.values.slice(s![1..rows - 1, 1..cols - 1])
    }

    /// Mutable access to the full field for relaxation sweeps.
    ///
    /// Callers must preserve the border cells; they are fixed boundary data.
    pub fn values_mut(&mut self) -> &mut Array2<f64> {
        &mut self.values
    }

    /// Consumes the grid and returns the underlying field.
    #[must_use]
    pub fn into_values(self) -> Array2<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample_boundary() -> BoundaryConditions {
        BoundaryConditions {
            top: 100.0,
            bottom: 0.0,
            left: 75.0,
            right: 50.0,
        }
    }

    #[test]
    fn fills_borders_and_interior() {
        let grid = Grid::with_boundaries(4, 5, &sample_boundary()).expect("valid grid");

        for col in 1..4 {
            assert_relative_eq!(grid.get(0, col), 100.0);
            assert_relative_eq!(grid.get(3, col), 0.0);
        }
        for row in 0..4 {
            assert_relative_eq!(grid.get(row, 0), 75.0);
            assert_relative_eq!(grid.get(row, 4), 50.0);
        }
        for row in 1..3 {
            for col in 1..4 {
                assert_relative_eq!(grid.get(row, col), 56.25);
            }
        }
    }

    #[test]
    fn corners_take_side_values() {
        let grid = Grid::with_boundaries(3, 3, &sample_boundary()).expect("valid grid");

        assert_relative_eq!(grid.get(0, 0), 75.0);
        assert_relative_eq!(grid.get(2, 0), 75.0);
        assert_relative_eq!(grid.get(0, 2), 50.0);
        assert_relative_eq!(grid.get(2, 2), 50.0);
    }

    #[test]
    fn rejects_grids_without_interior() {
        let result = Grid::with_boundaries(2, 5, &sample_boundary());
        assert!(matches!(
            result,
            Err(GridError::InvalidDimension { rows: 2, cols: 5 })
        ));

        let result = Grid::with_boundaries(5, 2, &sample_boundary());
        assert!(matches!(result, Err(GridError::InvalidDimension { .. })));
    }

    #[test]
    fn rejects_non_finite_boundary() {
        let boundary = BoundaryConditions {
            bottom: f64::NAN,
            ..sample_boundary()
        };
        let result = Grid::with_boundaries(4, 4, &boundary);
        assert!(matches!(result, Err(GridError::Boundary(_))));
    }

    #[test]
    fn from_values_rejects_non_finite_cell() {
        let mut values = Array2::zeros((3, 3));
        values[[1, 1]] = f64::INFINITY;
        let result = Grid::from_values(values);
        assert!(matches!(
            result,
            Err(GridError::NonFiniteValue { row: 1, col: 1, .. })
        ));
    }

    #[test]
    fn interior_view_excludes_borders() {
        let grid = Grid::with_boundaries(4, 5, &sample_boundary()).expect("valid grid");
        assert_eq!(grid.interior().dim(), (2, 3));
    }
}
