//! Vector module: a 1-D sequence of `f64` with value semantics.
//!
//! `DenseVector` is the companion type to `DenseMatrix`: row and column
//! extraction return one, and the matrix product consumes them for its
//! inner-product step. Length is fixed at construction; only elements can
//! be reassigned.

use std::ops::{Index, IndexMut};

use crate::error::MatError;

/// An owned, contiguous vector of `f64`.
///
/// Equality is structural: equal lengths and exact element-wise `f64`
/// comparison, nothing looser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a zero-filled vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![0.0; len] }
    }

    /// Creates a vector holding a copy of `values`.
    pub fn from_slice(values: &[f64]) -> Self {
        Self { data: values.to_vec() }
    }

    /// Replaces this vector's storage with a deep copy of `other`'s.
    pub fn copy_from(&mut self, other: &DenseVector) {
        self.data = other.data.clone();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element read.
    pub fn get(&self, index: usize) -> Result<f64, MatError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MatError::IndexOutOfRange { index, bound: self.data.len() })
    }

    /// Checked element write.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MatError> {
        let bound = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MatError::IndexOutOfRange { index, bound }),
        }
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Computes the dot product `Σ self[i] * other[i]`.
    ///
    /// The lengths must agree even when the caller has already checked a
    /// stronger precondition; the mismatch is reported, never truncated.
    pub fn dot(&self, other: &DenseVector) -> Result<f64, MatError> {
        if self.len() != other.len() {
            return Err(MatError::LengthMismatch(self.len(), other.len()));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .sum())
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

/// Unchecked indexing; an out-of-range index panics from the storage,
/// the same way a raw slice would.
impl Index<usize> for DenseVector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for DenseVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a DenseVector {
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
    fn empty_by_default() {
        let v = DenseVector::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn copy_is_independent() {
        let a = DenseVector::from_slice(&[1.0, 2.0, 3.0]);
        let mut b = a.clone();
        b[0] = 9.0;
        assert_eq!(a[0], 1.0);
    }

    #[test]
    fn structural_equality() {
        let a = DenseVector::from_slice(&[1.0, 2.0]);
        let b = DenseVector::from_slice(&[1.0, 2.0]);
        let c = DenseVector::from_slice(&[1.0, 2.0, 0.0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn dot_product() {
        let x = DenseVector::from_slice(&[1.0, 2.0, 3.0]);
        let y = DenseVector::from_slice(&[4.0, -5.0, 6.0]);
        assert_eq!(x.dot(&y).unwrap(), 4.0 - 10.0 + 18.0);
    }

    #[test]
    fn dot_rejects_length_mismatch() {
        let x = DenseVector::from_slice(&[1.0, 2.0]);
        let y = DenseVector::from_slice(&[1.0]);
        assert_eq!(x.dot(&y), Err(MatError::LengthMismatch(2, 1)));
    }

    #[test]
    fn checked_accessors() {
        let mut v = DenseVector::zeros(2);
        v.set(1, 5.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 5.0);
        assert_eq!(
            v.get(2),
            Err(MatError::IndexOutOfRange { index: 2, bound: 2 })
        );
    }
}
