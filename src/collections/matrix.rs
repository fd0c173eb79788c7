//! `DenseMatrix`: a row-major 2D matrix over one contiguous buffer.
//!
//! Rows are plain slices, so a relaxation sweep walks memory linearly and the
//! `parallel` feature can hand disjoint rows to different threads.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// A dense `rows x cols` matrix.
///
/// Decoding rejects a buffer whose length is not `rows * cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr<T>")]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct MatrixRepr<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<MatrixRepr<T>> for DenseMatrix<T> {
    type Error = GraphError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self, Self::Error> {
        if repr.rows.checked_mul(repr.cols) != Some(repr.data.len()) {
            return Err(GraphError::Malformed {
                reason: "matrix buffer length is not rows * cols",
            });
        }
        Ok(Self {
            data: repr.data,
            rows: repr.rows,
            cols: repr.cols,
        })
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Creates a matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a square matrix with `diagonal` on the diagonal and `fill` elsewhere.
    pub fn square_with_diagonal(n: usize, fill: T, diagonal: T) -> Self {
        let mut m = Self::filled(n, n, fill);
        for i in 0..n {
            m.data[i * n + i] = diagonal.clone();
        }
        m
    }
}

impl<T> DenseMatrix<T> {
    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    #[inline(always)]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a row as a mutable slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    #[inline(always)]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        // Zero-column matrices have an empty buffer; `max(1)` only avoids the chunk-size panic.
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> core::ops::Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> core::ops::IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_diagonal() {
        let m = DenseMatrix::square_with_diagonal(3, f64::INFINITY, 0.0);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 0.0 } else { f64::INFINITY };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_rows_and_bounds() {
        let mut m = DenseMatrix::filled(2, 3, 0u32);
        m.row_mut(1).copy_from_slice(&[7, 8, 9]);
        m[(0, 2)] = 4;
        assert_eq!(m.row(0), &[0, 0, 4]);
        assert_eq!(m.row(1), &[7, 8, 9]);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.iter_rows().count(), 2);
    }

    #[test]
    fn test_decode_checks_shape() {
        let m: DenseMatrix<f64> =
            serde_json::from_str(r#"{"data":[1.0,2.0,3.0,4.0],"rows":2,"cols":2}"#).unwrap();
        assert_eq!(m.row(1), &[3.0, 4.0]);

        let short = serde_json::from_str::<DenseMatrix<f64>>(r#"{"data":[],"rows":2,"cols":2}"#);
        assert!(short.is_err());
        let overflow = serde_json::from_str::<DenseMatrix<u8>>(
            r#"{"data":[],"rows":18446744073709551615,"cols":2}"#,
        );
        assert!(overflow.is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let m: DenseMatrix<f64> = DenseMatrix::square_with_diagonal(0, 1.0, 0.0);
        assert_eq!(m.iter_rows().count(), 0);
        assert!(m.as_slice().is_empty());
    }
}
