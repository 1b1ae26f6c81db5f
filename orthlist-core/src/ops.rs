//! Matrix arithmetic over the public cell API
//!
//! Every operation reads operands with `get_value` and writes its result with
//! `set_value`; none of them touch chain internals. Each result cell is
//! written explicitly, so results store a node for every cell, zeros
//! included. Integer arithmetic wraps on overflow.

use core::cmp::max;

use crate::error::{MatrixError, Result};
use crate::format::Operation;
use crate::matrix::OrthogonalMatrix;

/// Element-wise sum of two matrices of the same shape
pub fn add(a: &OrthogonalMatrix, b: &OrthogonalMatrix) -> Result<OrthogonalMatrix> {
    if a.dimensions() != b.dimensions() {
        return Err(mismatch(Operation::Add, a, b));
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("add", rows = a.rows(), cols = a.cols()).entered();

    let (rows, cols) = a.extent();
    let mut result = OrthogonalMatrix::new(rows, cols)?;
    for row in 0..rows {
        for col in 0..cols {
            let sum = a.get_value(row, col)?.wrapping_add(b.get_value(row, col)?);
            result.set_value(row, col, sum);
        }
    }
    Ok(result)
}

/// Matrix product `a * b`
///
/// Requires `a.cols == b.rows` and also `a.rows == b.cols`. The result is
/// square with side `max(a.rows, a.cols)` and every cell is computed from
/// operand reads. When `a` is wider than tall some of those reads fall
/// outside the operands, and the product fails with
/// [`MatrixError::OutOfRange`].
pub fn multiply(a: &OrthogonalMatrix, b: &OrthogonalMatrix) -> Result<OrthogonalMatrix> {
    if a.cols() != b.rows() || a.rows() != b.cols() {
        return Err(mismatch(Operation::Multiply, a, b));
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("multiply", rows = a.rows(), cols = a.cols()).entered();

    let (a_rows, inner) = a.extent();
    let dim = max(a_rows, inner);

    let mut result = OrthogonalMatrix::new(dim, dim)?;
    for row in 0..dim {
        for col in 0..dim {
            let mut dot: i32 = 0;
            for l in 0..inner {
                let term = a.get_value(row, l)?.wrapping_mul(b.get_value(l, col)?);
                dot = dot.wrapping_add(term);
            }
            result.set_value(row, col, dot);
        }
    }
    Ok(result)
}

/// Transpose: a `cols x rows` matrix with `result(i, j) == a(j, i)`
pub fn transpose(a: &OrthogonalMatrix) -> Result<OrthogonalMatrix> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("transpose", rows = a.rows(), cols = a.cols()).entered();

    let (rows, cols) = a.extent();
    let mut result = OrthogonalMatrix::new(cols, rows)?;
    for i in 0..cols {
        for j in 0..rows {
            result.set_value(i, j, a.get_value(j, i)?);
        }
    }
    Ok(result)
}

fn mismatch(op: Operation, a: &OrthogonalMatrix, b: &OrthogonalMatrix) -> MatrixError {
    MatrixError::DimensionMismatch {
        op,
        left: a.dimensions(),
        right: b.dimensions(),
    }
}

impl OrthogonalMatrix {
    /// See [`add`]
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// See [`multiply`]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }

    /// See [`transpose`]
    pub fn transpose(&self) -> Result<Self> {
        transpose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::tests::assert_linked;
    use alloc::vec::Vec;

    fn from_rows(rows: &[&[i32]]) -> OrthogonalMatrix {
        let mut m = OrthogonalMatrix::new(rows.len() as i32, rows[0].len() as i32).unwrap();
        for (r, cells) in rows.iter().enumerate() {
            for (c, &value) in cells.iter().enumerate() {
                if value != 0 {
                    m.set_value(r as i32, c as i32, value);
                }
            }
        }
        m
    }

    fn to_rows(m: &OrthogonalMatrix) -> Vec<Vec<i32>> {
        let (rows, cols) = m.extent();
        (0..rows)
            .map(|r| (0..cols).map(|c| m.get_value(r, c).unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_add() {
        let a = from_rows(&[&[1, 2], &[3, 4]]);
        let b = from_rows(&[&[5, 6], &[7, 8]]);
        let sum = a.add(&b).unwrap();

        assert_eq!(to_rows(&sum), [[6, 8], [10, 12]]);
        assert_linked(&sum);
    }

    #[test]
    fn test_add_materializes_zeros() {
        let a = from_rows(&[&[1, 0, 0], &[0, 0, 0]]);
        let b = from_rows(&[&[-1, 0, 0], &[0, 0, 2]]);
        let sum = add(&a, &b).unwrap();

        assert_eq!(to_rows(&sum), [[0, 0, 0], [0, 0, 2]]);
        assert_eq!(sum.nnz(), 6);
        assert!(sum.is_stored(0, 0));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = OrthogonalMatrix::new(2, 2).unwrap();
        let b = OrthogonalMatrix::new(2, 3).unwrap();

        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: Operation::Add,
                left: (2, 2),
                right: (2, 3),
            }
        );
    }

    #[test]
    fn test_multiply_square() {
        let a = from_rows(&[&[1, 2], &[3, 4]]);
        let b = from_rows(&[&[5, 6], &[7, 8]]);
        let product = a.multiply(&b).unwrap();

        assert_eq!(to_rows(&product), [[19, 22], [43, 50]]);
        assert_eq!(product.nnz(), 4);
        assert_linked(&product);
    }

    #[test]
    fn test_multiply_tall_by_wide() {
        // 3x2 * 2x3 is a true 3x3 product
        let a = from_rows(&[&[1, 2], &[0, 1], &[3, 0]]);
        let b = from_rows(&[&[1, 0, 2], &[0, 1, 1]]);
        let product = multiply(&a, &b).unwrap();

        assert_eq!(product.dimensions(), (3, 3));
        assert_eq!(to_rows(&product), [[1, 2, 4], [0, 1, 1], [3, 0, 6]]);
    }

    #[test]
    fn test_multiply_wide_by_tall_reads_out_of_range() {
        // 2x3 * 3x2 passes the shape check, but the 3x3 result grid reaches
        // column 2 of `b` while computing cell (0, 2)
        let a = from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        let b = from_rows(&[&[7, 8], &[9, 10], &[11, 12]]);

        assert_eq!(
            multiply(&a, &b).unwrap_err(),
            MatrixError::OutOfRange { row: 0, col: 2 }
        );
    }

    #[test]
    fn test_multiply_requires_inverted_shapes() {
        // Standard-compatible (2x3 * 3x4) but not inverted: rejected
        let a = OrthogonalMatrix::new(2, 3).unwrap();
        let b = OrthogonalMatrix::new(3, 4).unwrap();
        assert!(matches!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Multiply,
                ..
            })
        ));

        let c = OrthogonalMatrix::new(2, 2).unwrap();
        let d = OrthogonalMatrix::new(3, 3).unwrap();
        assert!(multiply(&c, &d).is_err());
    }

    #[test]
    fn test_multiply_wraps_on_overflow() {
        let a = from_rows(&[&[i32::MAX]]);
        let b = from_rows(&[&[2]]);
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.get_value(0, 0), Ok(i32::MAX.wrapping_mul(2)));
    }

    #[test]
    fn test_transpose() {
        let a = from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(to_rows(&a.transpose().unwrap()), [[1, 3], [2, 4]]);

        let wide = from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        let t = transpose(&wide).unwrap();
        assert_eq!(t.dimensions(), (3, 2));
        assert_eq!(to_rows(&t), [[1, 4], [2, 5], [3, 6]]);
        assert_linked(&t);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    /// Random shape with a random subset of cells written
    fn matrix_strategy(rows: i32, cols: i32) -> impl Strategy<Value = OrthogonalMatrix> {
        proptest::collection::vec((0..rows, 0..cols, -1000i32..1000), 0..=(rows * cols) as usize)
            .prop_map(move |cells| OrthogonalMatrix::from_entries(rows, cols, cells).unwrap())
    }

    fn shaped_pair() -> impl Strategy<Value = (OrthogonalMatrix, OrthogonalMatrix)> {
        (1i32..6, 1i32..6).prop_flat_map(|(rows, cols)| {
            (matrix_strategy(rows, cols), matrix_strategy(rows, cols))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_set_get_roundtrip(
            cells in proptest::collection::vec((0i32..8, 0i32..8, any::<i32>()), 0..40)
        ) {
            let mut m = OrthogonalMatrix::new(8, 8).unwrap();
            let mut last = Vec::new();
            for &(row, col, value) in &cells {
                m.set_value(row, col, value);
                last.retain(|&(r, c, _)| (r, c) != (row, col));
                last.push((row, col, value));
            }
            for &(row, col, value) in &last {
                prop_assert_eq!(m.get_value(row, col), Ok(value));
            }
            prop_assert_eq!(m.nnz(), last.len());
            crate::matrix::tests::assert_linked(&m);
        }

        #[test]
        fn test_transpose_involution(m in (1i32..7, 1i32..7).prop_flat_map(|(r, c)| matrix_strategy(r, c))) {
            let back = m.transpose().unwrap().transpose().unwrap();
            prop_assert_eq!(back, m);
        }

        #[test]
        fn test_add_commutes((a, b) in shaped_pair()) {
            prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
        }

        #[test]
        fn test_multiply_rejects_non_inverted(
            (ar, ac, br, bc) in (1i32..6, 1i32..6, 1i32..6, 1i32..6)
        ) {
            prop_assume!(ac != br || ar != bc);
            let a = OrthogonalMatrix::new(ar, ac).unwrap();
            let b = OrthogonalMatrix::new(br, bc).unwrap();
            let is_mismatch = matches!(
                multiply(&a, &b),
                Err(MatrixError::DimensionMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }
    }
}
