//! Sparse coordinate-list (COO) matrices.
//!
//! Duplicated `(row, col)` pairs are allowed and mean "sum on read".
//! Nothing here merges them implicitly; call [`SparseMatrix::canonicalize`]
//! or [`SparseMatrix::to_dense`] when the summed values are needed.

pub mod types;
pub mod dense;

pub use types::SparseMatrix;
