//! `resize.rs` 시나리오 테스트

use crate::quadrant::resize_folded;
use crate::sparse::SparseMatrix;

fn sample() -> SparseMatrix<i32> {
    SparseMatrix::from_triplets(
        (6, 8),
        vec![(0, 0, 1), (5, 7, 2), (3, 3, 3), (2, 6, 4), (4, 1, 5), (3, 3, 6)],
    )
    .unwrap()
}

#[test]
fn test_truncates_both_axes() {
    let m = sample();
    let r = resize_folded(&m, 4);

    assert_eq!(r.shape(), (4, 4));
    assert!(r.row().iter().all(|&x| x < 4));
    assert!(r.col().iter().all(|&x| x < 4));
    // order and duplicates survive
    assert_eq!(r.data(), &[1, 3, 6]);
    assert_eq!(r.row(), &[0, 3, 3]);
    assert_eq!(r.col(), &[0, 3, 3]);
}

#[test]
fn test_passthrough_still_reports_square_shape() {
    let m = sample();
    let r = resize_folded(&m, 10);

    assert_eq!(r.shape(), (10, 10));
    assert_eq!(r.data(), m.data());
    assert_eq!(r.row(), m.row());
    assert_eq!(r.col(), m.col());
}

#[test]
fn test_only_longer_axis_is_filtered() {
    // 6 rows pass untouched at rmax = 7, cols >= 7 are dropped
    let m = sample();
    let r = resize_folded(&m, 7);

    assert_eq!(r.shape(), (7, 7));
    assert_eq!(r.data(), &[1, 3, 4, 5, 6]);

    // rmax equal to a dimension does not filter that dimension
    let r = resize_folded(&m, 6);
    assert_eq!(r.shape(), (6, 6));
    assert_eq!(r.data(), &[1, 3, 5, 6]);
}

#[test]
fn test_zero_radius_is_empty() {
    let r = resize_folded(&sample(), 0);
    assert_eq!(r.shape(), (0, 0));
    assert!(r.is_empty());
}

#[test]
fn test_empty_input() {
    let m: SparseMatrix<f64> = SparseMatrix::empty((3, 5));
    let r = resize_folded(&m, 4);
    assert_eq!(r.shape(), (4, 4));
    assert!(r.is_empty());
}
