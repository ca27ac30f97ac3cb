use super::fold::fold_quadrants;
use super::types::FoldOptions;
use crate::error::Result;
use crate::sparse::SparseMatrix;
use tracing::debug;

/// Crops a folded matrix to `rmax` rows and columns.
///
/// The returned shape is always `(rmax, rmax)`, even along an axis that was
/// already shorter than `rmax`; such an axis is left unfiltered. Values and
/// entry order are unchanged.
pub fn resize_folded<T>(matrix: &SparseMatrix<T>, rmax: usize) -> SparseMatrix<T>
where
    T: Copy,
{
    let (sy, sx) = matrix.shape();
    let clip_rows = rmax < sy;
    let clip_cols = rmax < sx;

    let mut data = Vec::new();
    let mut row = Vec::new();
    let mut col = Vec::new();
    for (r, c, &v) in matrix.iter() {
        if (clip_rows && r >= rmax) || (clip_cols && c >= rmax) {
            continue;
        }
        row.push(r);
        col.push(c);
        data.push(v);
    }

    debug!(
        shape = ?(sy, sx),
        rmax,
        nnz_in = matrix.nnz(),
        nnz_out = data.len(),
        "resized folded matrix"
    );

    SparseMatrix::from_parts_unchecked((rmax, rmax), data, row, col)
}

/// Fold followed by an optional radius crop.
pub fn fold_and_resize<T>(matrix: &SparseMatrix<T>, opts: &FoldOptions, rmax: Option<usize>) -> Result<SparseMatrix<T>>
where
    T: Copy + Send + Sync,
{
    let folded = fold_quadrants(matrix, opts)?;
    Ok(match rmax {
        Some(rmax) => resize_folded(&folded, rmax),
        None => folded,
    })
}
