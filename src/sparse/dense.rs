//! Duplicate-summing views of a [`SparseMatrix`].

use super::types::SparseMatrix;
use ndarray::Array2;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::ops::AddAssign;

impl<T> SparseMatrix<T>
where
    T: Clone + Zero + AddAssign,
{
    /// Dense `(height, width)` array with duplicate coordinates summed.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::<T>::zeros(self.shape());
        for (r, c, v) in self.iter() {
            dense[[r, c]] += v.clone();
        }
        dense
    }

    /// Merges duplicate `(row, col)` pairs by summation, sorted row-major.
    ///
    /// Explicit zeros (including sums that cancel) are kept.
    pub fn canonicalize(&self) -> SparseMatrix<T> {
        let mut merged: BTreeMap<(usize, usize), T> = BTreeMap::new();
        for (r, c, v) in self.iter() {
            *merged.entry((r, c)).or_insert_with(T::zero) += v.clone();
        }

        let mut data = Vec::with_capacity(merged.len());
        let mut row = Vec::with_capacity(merged.len());
        let mut col = Vec::with_capacity(merged.len());
        for ((r, c), v) in merged {
            row.push(r);
            col.push(c);
            data.push(v);
        }
        SparseMatrix::from_parts_unchecked(self.shape(), data, row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    #[test]
    fn test_to_dense_sums_duplicates() {
        let m = SparseMatrix::from_triplets(
            (2, 3),
            vec![(0, 2, 1.5f32), (1, 0, 2.0), (0, 2, 0.5)],
        )
        .unwrap();
        let expected = arr2(&[[0.0f32, 0.0, 2.0], [2.0, 0.0, 0.0]]);
        assert_relative_eq!(m.to_dense(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_canonicalize_merges_and_sorts() {
        let m = SparseMatrix::from_triplets(
            (3, 3),
            vec![(2, 2, 1i64), (0, 1, 3), (2, 2, 4), (0, 0, -2), (0, 1, -3)],
        )
        .unwrap();
        let c = m.canonicalize();

        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.row(), &[0, 0, 2]);
        assert_eq!(c.col(), &[0, 1, 2]);
        // (0, 1) cancels to zero but stays stored
        assert_eq!(c.data(), &[-2, 0, 5]);
        assert_eq!(c.to_dense(), m.to_dense());
    }

    #[test]
    fn test_canonicalize_empty() {
        let m: SparseMatrix<f64> = SparseMatrix::empty((4, 2));
        let c = m.canonicalize();
        assert!(c.is_empty());
        assert_eq!(c.shape(), (4, 2));
    }
}
