//! A resizable 2-D matrix of `f64` with value semantics.
//!
//! `DenseMatrix` owns a contiguous row-major buffer indexed as
//! `row * cols + col`. Arithmetic comes in two forms: fallible named
//! operations (`try_add`, `try_mul`, ...) that validate operands and return a
//! `MatError`, and the usual operator impls that delegate to them and panic
//! on a violated precondition, since operator signatures cannot carry a
//! `Result`. Equality is exact structural comparison with no tolerance.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::error::MatError;
use crate::vector::DenseVector;

/// An owned, contiguous, row-major matrix of `f64`.
///
/// Invariant: `data.len() == rows * cols` after any mutating operation
/// completes. Mutations that change shape (resize, transpose) build the new
/// buffer first and swap it in, so no partially-rebuilt state is observable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Creates an empty matrix with no backing storage.
    pub fn new() -> Self {
        Self { rows: 0, cols: 0, data: Vec::new() }
    }

    /// Creates a zero-filled matrix of the given dimensions.
    ///
    /// Either dimension may be zero, which yields an empty-equivalent
    /// matrix that still remembers the requested shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// Creates a matrix of the given dimensions with every element set to
    /// `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self { rows, cols, data: vec![value; rows * cols] }
    }

    /// Creates a square zero matrix of the given size.
    pub fn zero(size: usize) -> Self {
        Self::zeros(size, size)
    }

    /// Creates a square identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Creates a `rows x cols` matrix and packs `values` into it in
    /// row-major order.
    ///
    /// A short slice leaves the remaining cells at zero; a long one is
    /// silently truncated once the matrix is full.
    pub fn from_flat(values: &[f64], rows: usize, cols: usize) -> Self {
        let mut m = Self::zeros(rows, cols);
        let n = values.len().min(m.data.len());
        m.data[..n].copy_from_slice(&values[..n]);
        m
    }

    /// Creates a matrix as a copy of a rectangular 2-D array.
    pub fn from_rows<const R: usize, const C: usize>(grid: [[f64; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in &grid {
            data.extend_from_slice(row);
        }
        Self { rows: R, cols: C, data }
    }

    /// Replaces this matrix's storage with a deep copy of `other`'s.
    pub fn copy_from(&mut self, other: &DenseMatrix) {
        self.rows = other.rows;
        self.cols = other.cols;
        self.data = other.data.clone();
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the backing storage holds no elements, either because the
    /// matrix was never sized or because a dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when `rows == cols`.
    ///
    /// A default-constructed matrix reports square (0 == 0). That quirk is
    /// inherited behavior and deliberately kept.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when every element is `>= 0.0`; vacuously true for an empty
    /// matrix.
    pub fn is_non_negative(&self) -> bool {
        self.data.iter().all(|&v| v >= 0.0)
    }

    /// True when the matrix is non-empty, square, and every off-diagonal
    /// element is exactly `0.0`. A square zero matrix is diagonal; an empty
    /// matrix is not, even though it reports square.
    pub fn is_diagonal(&self) -> bool {
        if self.is_empty() || !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                if i != j && self.data[i * self.cols + j] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatError> {
        self.checked_offset(row, col).map(|off| self.data[off])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatError> {
        let off = self.checked_offset(row, col)?;
        self.data[off] = value;
        Ok(())
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize, MatError> {
        if row >= self.rows {
            return Err(MatError::IndexOutOfRange { index: row, bound: self.rows });
        }
        if col >= self.cols {
            return Err(MatError::IndexOutOfRange { index: col, bound: self.cols });
        }
        Ok(row * self.cols + col)
    }

    /// Copies row `index` out as a vector.
    ///
    /// Returns `Ok(None)` when the matrix is empty; an out-of-range index on
    /// a non-empty matrix is an error. The returned vector shares no storage
    /// with the matrix.
    pub fn row(&self, index: usize) -> Result<Option<DenseVector>, MatError> {
        if self.is_empty() {
            return Ok(None);
        }
        if index >= self.rows {
            return Err(MatError::InvalidArgument(
                "you have specified a row which does not exist",
            ));
        }
        let start = index * self.cols;
        Ok(Some(DenseVector::from_slice(&self.data[start..start + self.cols])))
    }

    /// Copies column `index` out as a vector; same contract as [`row`].
    ///
    /// [`row`]: DenseMatrix::row
    pub fn column(&self, index: usize) -> Result<Option<DenseVector>, MatError> {
        if self.is_empty() {
            return Ok(None);
        }
        if index >= self.cols {
            return Err(MatError::InvalidArgument(
                "you have specified a column which does not exist",
            ));
        }
        let column: Vec<f64> = (0..self.rows)
            .map(|r| self.data[r * self.cols + index])
            .collect();
        Ok(Some(column.into()))
    }

    /// Destructive resize: discards existing contents and allocates a fresh
    /// zero-filled buffer of the new shape.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        *self = DenseMatrix::zeros(rows, cols);
    }

    /// Resize that keeps every element present in both the old and the new
    /// bounds; cells outside the overlap default to zero.
    ///
    /// This is a reshape-and-recopy into a new buffer, swapped in whole.
    pub fn resize_preserving(&mut self, rows: usize, cols: usize) {
        let mut next = DenseMatrix::zeros(rows, cols);
        for i in 0..self.rows.min(rows) {
            for j in 0..self.cols.min(cols) {
                next.data[i * cols + j] = self.data[i * self.cols + j];
            }
        }
        *self = next;
    }

    /// Transposes this matrix in place, replacing the backing storage with a
    /// rows/cols-swapped buffer.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Returns the transpose as a new matrix, leaving `self` untouched.
    pub fn transposed(&self) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    fn require_same_shape(&self, rhs: &DenseMatrix) -> Result<(), MatError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatError::ShapeMismatch(
                self.rows, self.cols, rhs.rows, rhs.cols,
            ));
        }
        Ok(())
    }

    /// Element-wise sum; the shapes must be identical.
    pub fn try_add(&self, rhs: &DenseMatrix) -> Result<DenseMatrix, MatError> {
        self.require_same_shape(rhs)?;
        let data = self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect();
        Ok(DenseMatrix { rows: self.rows, cols: self.cols, data })
    }

    /// Element-wise difference; the shapes must be identical.
    pub fn try_sub(&self, rhs: &DenseMatrix) -> Result<DenseMatrix, MatError> {
        self.require_same_shape(rhs)?;
        let data = self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect();
        Ok(DenseMatrix { rows: self.rows, cols: self.cols, data })
    }

    /// Returns a new matrix with every element multiplied by `scalar`.
    pub fn scaled(&self, scalar: f64) -> DenseMatrix {
        let data = self.data.iter().map(|v| scalar * v).collect();
        DenseMatrix { rows: self.rows, cols: self.cols, data }
    }

    /// Matrix product; requires `self.cols == rhs.rows`.
    ///
    /// Each result cell is the dot product of a row of `self` and a column
    /// of `rhs`, both extracted as vectors. The extraction result and the
    /// vector lengths are re-checked even though the shape precondition
    /// already guarantees them. Plain triple loop, no tiling.
    pub fn try_mul(&self, rhs: &DenseMatrix) -> Result<DenseMatrix, MatError> {
        if self.cols != rhs.rows {
            return Err(MatError::InnerDimensions(
                self.rows, self.cols, rhs.rows, rhs.cols,
            ));
        }
        let mut out = DenseMatrix::zeros(self.rows, rhs.cols);
        for i in 0..out.rows {
            let row = self
                .row(i)?
                .ok_or(MatError::MissingOperand("row of an empty matrix"))?;
            for j in 0..out.cols {
                let col = rhs
                    .column(j)?
                    .ok_or(MatError::MissingOperand("column of an empty matrix"))?;
                out.data[i * out.cols + j] = row.dot(&col)?;
            }
        }
        Ok(out)
    }

    /// Direct (block-diagonal) sum: `self` lands in the top-left block,
    /// `rhs` in the bottom-right, everything else stays zero. No shape
    /// constraint between the operands.
    pub fn direct_sum(&self, rhs: &DenseMatrix) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(self.rows + rhs.rows, self.cols + rhs.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[i * out.cols + j] = self.data[i * self.cols + j];
            }
        }
        for i in 0..rhs.rows {
            for j in 0..rhs.cols {
                out.data[(i + self.rows) * out.cols + (j + self.cols)] =
                    rhs.data[i * rhs.cols + j];
            }
        }
        out
    }

    /// Iterates over every element in row-major order: row 0 left to right,
    /// then row 1, and so on. The ordering is part of the contract.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }
}

// Unary negation is deliberately absent; the upstream design deferred it and
// this implementation keeps the gap rather than inventing semantics.

/// Unchecked indexing by `(row, col)`.
///
/// Bounds are not pre-validated; a bad index panics from the storage layer.
/// The column assert is needed because a flat row-major buffer would
/// otherwise let an oversized column wrap into the next row.
impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.cols, "column index {col} out of range ({} available)", self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.cols, "column index {col} out of range ({} available)", self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl Add for &DenseMatrix {
    type Output = DenseMatrix;
    /// Panics when the shapes differ; use [`DenseMatrix::try_add`] to handle
    /// the mismatch instead.
    fn add(self, rhs: &DenseMatrix) -> DenseMatrix {
        match self.try_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Add for DenseMatrix {
    type Output = DenseMatrix;
    fn add(self, rhs: DenseMatrix) -> DenseMatrix {
        &self + &rhs
    }
}

impl Sub for &DenseMatrix {
    type Output = DenseMatrix;
    /// Panics when the shapes differ; use [`DenseMatrix::try_sub`] to handle
    /// the mismatch instead.
    fn sub(self, rhs: &DenseMatrix) -> DenseMatrix {
        match self.try_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub for DenseMatrix {
    type Output = DenseMatrix;
    fn sub(self, rhs: DenseMatrix) -> DenseMatrix {
        &self - &rhs
    }
}

impl Mul for &DenseMatrix {
    type Output = DenseMatrix;
    /// Panics when the inner dimensions disagree; use
    /// [`DenseMatrix::try_mul`] to handle the mismatch instead.
    fn mul(self, rhs: &DenseMatrix) -> DenseMatrix {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for DenseMatrix {
    type Output = DenseMatrix;
    fn mul(self, rhs: DenseMatrix) -> DenseMatrix {
        &self * &rhs
    }
}

impl Mul<f64> for &DenseMatrix {
    type Output = DenseMatrix;
    fn mul(self, scalar: f64) -> DenseMatrix {
        self.scaled(scalar)
    }
}

impl Mul<f64> for DenseMatrix {
    type Output = DenseMatrix;
    fn mul(self, scalar: f64) -> DenseMatrix {
        self.scaled(scalar)
    }
}

impl Mul<&DenseMatrix> for f64 {
    type Output = DenseMatrix;
    fn mul(self, m: &DenseMatrix) -> DenseMatrix {
        m.scaled(self)
    }
}

impl Mul<DenseMatrix> for f64 {
    type Output = DenseMatrix;
    fn mul(self, m: DenseMatrix) -> DenseMatrix {
        m.scaled(self)
    }
}

impl<'a> IntoIterator for &'a DenseMatrix {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_truncates_long_input() {
        let m = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 2);
        assert_eq!(m, DenseMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn from_flat_zero_pads_short_input() {
        let m = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 3);
        assert_eq!(
            m,
            DenseMatrix::from_rows([
                [1.0, 2.0, 3.0],
                [4.0, 5.0, 6.0],
                [0.0, 0.0, 0.0],
            ])
        );
    }

    #[test]
    fn empty_matrix_reports_square_but_not_diagonal() {
        // Inherited quirk: 0 == 0 counts as square, but diagonality
        // requires storage.
        let m = DenseMatrix::new();
        assert!(m.is_empty());
        assert!(m.is_square());
        assert!(!m.is_diagonal());
    }

    #[test]
    fn zero_dimension_matrix_is_empty() {
        let m = DenseMatrix::zeros(0, 5);
        assert!(m.is_empty());
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 5);
    }

    #[test]
    fn checked_offset_rejects_both_axes() {
        let m = DenseMatrix::zeros(2, 3);
        assert_eq!(
            m.get(2, 0),
            Err(MatError::IndexOutOfRange { index: 2, bound: 2 })
        );
        assert_eq!(
            m.get(0, 3),
            Err(MatError::IndexOutOfRange { index: 3, bound: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn unchecked_column_index_panics() {
        let m = DenseMatrix::zeros(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn resize_preserving_keeps_overlap() {
        let mut m = DenseMatrix::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        m.resize_preserving(3, 3);
        assert_eq!(
            m,
            DenseMatrix::from_rows([
                [4.0, 3.0, 0.0],
                [2.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
            ])
        );
    }

    #[test]
    fn resize_preserving_can_shrink() {
        let mut m = DenseMatrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        m.resize_preserving(2, 2);
        assert_eq!(m, DenseMatrix::from_rows([[1.0, 2.0], [4.0, 5.0]]));
    }

    #[test]
    fn row_extraction_does_not_alias() {
        let mut m = DenseMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let row = m.row(0).unwrap().unwrap();
        m[(0, 0)] = 9.0;
        assert_eq!(row[0], 1.0);
    }

    #[test]
    fn multiplying_empty_operands_is_fine_when_inner_dims_agree() {
        // 0x0 times 0x0: the loops never run, so the empty-row guard is
        // unreachable and the product is empty too.
        let a = DenseMatrix::new();
        let b = DenseMatrix::new();
        let c = a.try_mul(&b).unwrap();
        assert!(c.is_empty());
    }
}
