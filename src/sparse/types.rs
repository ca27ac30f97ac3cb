use crate::error::{QuadrantError, Result};

/// Sparse matrix as parallel `(data, row, col)` sequences plus a declared shape.
///
/// Invariants (checked by every constructor):
/// - `data`, `row` and `col` have equal length
/// - `row[i] < shape.0` and `col[i] < shape.1`
///
/// Entry order is not canonical and is preserved by every transform in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    shape: (usize, usize),
    data: Vec<T>,
    row: Vec<usize>,
    col: Vec<usize>,
}

impl<T> SparseMatrix<T> {
    /// `shape` is `(height, width)`.
    pub fn new(shape: (usize, usize), data: Vec<T>, row: Vec<usize>, col: Vec<usize>) -> Result<Self> {
        if data.len() != row.len() || data.len() != col.len() {
            return Err(QuadrantError::LengthMismatch {
                data: data.len(),
                row: row.len(),
                col: col.len(),
            });
        }

        let (height, width) = shape;
        if let Some(entry) = row.iter().zip(col.iter()).position(|(&r, &c)| r >= height || c >= width) {
            return Err(QuadrantError::IndexOutOfBounds {
                entry,
                row: row[entry],
                col: col[entry],
                shape,
            });
        }

        Ok(Self { shape, data, row, col })
    }

    pub fn empty(shape: (usize, usize)) -> Self {
        Self {
            shape,
            data: Vec::new(),
            row: Vec::new(),
            col: Vec::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triples.
    pub fn from_triplets<I>(shape: (usize, usize), triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut data = Vec::new();
        let mut row = Vec::new();
        let mut col = Vec::new();
        for (r, c, v) in triplets {
            row.push(r);
            col.push(c);
            data.push(v);
        }
        Self::new(shape, data, row, col)
    }

    /// Skips validation. Callers must already uphold the struct invariants.
    pub(crate) fn from_parts_unchecked(
        shape: (usize, usize),
        data: Vec<T>,
        row: Vec<usize>,
        col: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(data.len(), row.len());
        debug_assert_eq!(data.len(), col.len());
        Self { shape, data, row, col }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self) -> &[usize] {
        &self.row
    }

    pub fn col(&self) -> &[usize] {
        &self.col
    }

    /// Number of stored entries, duplicates included.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates `(row, col, &value)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.row
            .iter()
            .zip(self.col.iter())
            .zip(self.data.iter())
            .map(|((&r, &c), v)| (r, c, v))
    }

    /// Returns `(shape, data, row, col)`.
    pub fn into_parts(self) -> ((usize, usize), Vec<T>, Vec<usize>, Vec<usize>) {
        (self.shape, self.data, self.row, self.col)
    }
}
