//! Sparse feature vectors.
//!
//! TF-IDF vectors over a tens-of-thousands-term vocabulary are almost
//! entirely zero for a short message, so features are stored as parallel
//! index/value arrays with strictly ascending indices. All scoring math
//! touches only the non-zero entries.

use serde::{Deserialize, Serialize};

/// A sparse vector of a fixed dimension.
///
/// Invariant: `indices` is strictly ascending, `indices.len() == values.len()`,
/// and every index is `< dim`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Total dimensionality (vocabulary size).
    dim: usize,
    /// Indices of non-zero entries, strictly ascending.
    indices: Vec<usize>,
    /// Values of the non-zero entries, parallel to `indices`.
    values: Vec<f64>,
}

impl SparseVector {
    /// Create a sparse vector from pre-sorted entries.
    ///
    /// Callers must supply strictly ascending indices below `dim`.
    pub fn from_sorted(dim: usize, indices: Vec<usize>, values: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.last().is_none_or(|&i| i < dim));

        SparseVector {
            dim,
            indices,
            values,
        }
    }

    /// An all-zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        SparseVector {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Total dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vector has no non-zero entries.
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over `(index, value)` pairs of the non-zero entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product against a dense weight vector.
    ///
    /// Only non-zero entries are visited. The weight vector must have
    /// length `dim`.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        debug_assert_eq!(dense.len(), self.dim);
        self.iter().map(|(i, v)| v * dense[i]).sum()
    }

    /// The Euclidean norm of the vector.
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale the vector to unit Euclidean norm. Zero vectors are unchanged.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_dot() {
        let v = SparseVector::from_sorted(5, vec![0, 2, 4], vec![1.0, 2.0, 3.0]);
        let dense = [1.0, 10.0, 0.5, 10.0, 2.0];

        assert_eq!(v.dot(&dense), 1.0 + 1.0 + 6.0);
    }

    #[test]
    fn test_zero_vector() {
        let v = SparseVector::zeros(10);

        assert!(v.is_zero());
        assert_eq!(v.nnz(), 0);
        assert_eq!(v.dot(&vec![1.0; 10]), 0.0);
    }

    #[test]
    fn test_l2_normalize() {
        let mut v = SparseVector::from_sorted(4, vec![1, 3], vec![3.0, 4.0]);
        v.l2_normalize();

        assert!((v.norm() - 1.0).abs() < 1e-12);
        let values: Vec<f64> = v.iter().map(|(_, val)| val).collect();
        assert!((values[0] - 0.6).abs() < 1e-12);
        assert!((values[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_l2_normalize_zero_vector() {
        let mut v = SparseVector::zeros(3);
        v.l2_normalize();
        assert!(v.is_zero());
    }
}
