//! Core matrix abstraction traits

use alloc::vec::Vec;

use crate::error::Result;
use crate::matrix::OrthogonalMatrix;

/// Cell-level access shared by every matrix implementation
pub trait SparseMatrix {
    /// Get the value at the specified position
    ///
    /// Unstored cells read as `0`. Positions outside the matrix fail with
    /// [`MatrixError::OutOfRange`](crate::MatrixError::OutOfRange).
    fn get_value(&self, row: i32, col: i32) -> Result<i32>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of explicitly stored cells
    fn nnz(&self) -> usize;
}

/// Extension trait for whole row/column reads
pub trait MatrixOperations: SparseMatrix {
    /// Stored `(col, value)` pairs of a row in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, i32)>;

    /// Stored `(row, value)` pairs of a column in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, i32)>;
}

impl SparseMatrix for OrthogonalMatrix {
    fn get_value(&self, row: i32, col: i32) -> Result<i32> {
        OrthogonalMatrix::get_value(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        OrthogonalMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        OrthogonalMatrix::nnz(self)
    }
}

impl MatrixOperations for OrthogonalMatrix {
    fn get_row(&self, row_index: usize) -> Vec<(usize, i32)> {
        self.row_entries(row_index)
            .map(|entry| (entry.col, entry.value))
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, i32)> {
        self.col_entries(col_index)
            .map(|entry| (entry.row, entry.value))
            .collect()
    }
}
