//! Folding a sparse image onto one quadrant around a center pixel.

use super::types::{FoldOptions, Quadrant, QuadrantMask};
use crate::error::{FoldAxis, QuadrantError, Result};
use crate::sparse::SparseMatrix;
use rayon::prelude::*;
use tracing::debug;

/// Entry count above which the per-quadrant scan runs on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Output shape `(ly, lx)` of folding a `shape = (sy, sx)` matrix about `(x0, y0)`.
///
/// Each selected quadrant proposes the extent it reaches from the center
/// (`x0 + 1` leftward, `sx - x0` rightward, `y0 + 1` upward, `sy - y0` downward);
/// the smallest proposal per axis wins so that every selected quadrant covers
/// the whole output.
pub fn folded_shape(shape: (usize, usize), x0: usize, y0: usize, mask: QuadrantMask) -> Result<(usize, usize)> {
    let (sy, sx) = shape;
    let mut lx: Option<usize> = None;
    let mut ly: Option<usize> = None;

    for q in mask.selected() {
        let cx = if q.extends_left() { x0 + 1 } else { sx - x0 };
        let cy = if q.extends_up() { y0 + 1 } else { sy - y0 };
        lx = Some(lx.map_or(cx, |l| l.min(cx)));
        ly = Some(ly.map_or(cy, |l| l.min(cy)));
    }

    let lx = lx.ok_or(QuadrantError::Selection { axis: FoldAxis::Cols, mask: mask.flags() })?;
    let ly = ly.ok_or(QuadrantError::Selection { axis: FoldAxis::Rows, mask: mask.flags() })?;
    Ok((ly, lx))
}

/// Reflected `(row, col)` of an entry if quadrant `q` accepts it.
///
/// Membership is `>= 0` on both offsets; the footprint bound is strict,
/// so offsets equal to `ly`/`lx` are dropped.
#[inline]
fn reflect(q: Quadrant, r: usize, c: usize, center: (usize, usize), extent: (usize, usize)) -> Option<(usize, usize)> {
    let (x0, y0) = center;
    let (ly, lx) = extent;
    let (qsy, qsx) = q.signs();

    let row_delta = (r as isize - y0 as isize) * qsy;
    let col_delta = (c as isize - x0 as isize) * qsx;
    if row_delta < 0 || col_delta < 0 {
        return None;
    }
    let (row_delta, col_delta) = (row_delta as usize, col_delta as usize);
    if row_delta >= ly || col_delta >= lx {
        return None;
    }
    Some((row_delta, col_delta))
}

fn scan_quadrant<T>(
    matrix: &SparseMatrix<T>,
    q: Quadrant,
    center: (usize, usize),
    extent: (usize, usize),
) -> Vec<(usize, usize, T)>
where
    T: Copy + Send + Sync,
{
    let (row, col, data) = (matrix.row(), matrix.col(), matrix.data());
    let accept = |i: usize| reflect(q, row[i], col[i], center, extent).map(|(r, c)| (r, c, data[i]));

    if matrix.nnz() >= PARALLEL_THRESHOLD {
        // collect() keeps source order
        (0..matrix.nnz()).into_par_iter().filter_map(accept).collect()
    } else {
        (0..matrix.nnz()).filter_map(accept).collect()
    }
}

/// Sums the selected quadrants of `matrix` into one origin-anchored matrix.
///
/// Every selected quadrant is reflected so that the center pixel lands on
/// `(0, 0)` and offsets away from the center grow with row and col. The
/// output keeps one entry per accepted source entry, in quadrant order 0..3
/// and source order within a quadrant; overlapping coordinates are *not*
/// merged. Pixels on the center row/column belong to every quadrant that
/// touches them and are therefore counted more than once.
///
/// # Errors
/// - [`QuadrantError::CenterOutOfBounds`] if the resolved center is outside the shape
/// - [`QuadrantError::Selection`] if the mask selects no quadrant
pub fn fold_quadrants<T>(matrix: &SparseMatrix<T>, opts: &FoldOptions) -> Result<SparseMatrix<T>>
where
    T: Copy + Send + Sync,
{
    let shape = matrix.shape();
    let center = opts.resolve_center(shape)?;
    let extent = folded_shape(shape, center.0, center.1, opts.mask)?;

    let mut data = Vec::new();
    let mut row = Vec::new();
    let mut col = Vec::new();
    for q in opts.mask.selected() {
        for (r, c, v) in scan_quadrant(matrix, q, center, extent) {
            row.push(r);
            col.push(c);
            data.push(v);
        }
    }

    debug!(
        shape = ?shape,
        center = ?center,
        mask = ?opts.mask.flags(),
        folded = ?extent,
        nnz_in = matrix.nnz(),
        nnz_out = data.len(),
        "folded sparse quadrants"
    );

    Ok(SparseMatrix::from_parts_unchecked(extent, data, row, col))
}
