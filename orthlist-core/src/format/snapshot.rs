//! Serializable picture of a matrix

use alloc::vec::Vec;

use crate::matrix::{Entry, OrthogonalMatrix};

/// Shape plus stored cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatrixSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry>,
}

impl From<&OrthogonalMatrix> for MatrixSnapshot {
    fn from(matrix: &OrthogonalMatrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries: matrix.entries().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lists_stored_cells() {
        let m = OrthogonalMatrix::from_entries(2, 2, [(1, 1, 4), (0, 1, 0)]).unwrap();
        let snapshot = MatrixSnapshot::from(&m);
        assert_eq!((snapshot.rows, snapshot.cols), (2, 2));
        assert_eq!(
            snapshot.entries,
            [
                Entry { row: 0, col: 1, value: 0 },
                Entry { row: 1, col: 1, value: 4 },
            ]
        );
    }
}
