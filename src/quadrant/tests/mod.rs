use crate::quadrant::{fold_and_resize, FoldOptions, QuadrantMask};
use crate::sparse::SparseMatrix;

pub mod resize_test;

#[test]
fn test_fold_then_resize_pipeline() {
    // 9x9 detector, center (4, 4), one hit per quadrant at distance (1, 3)
    let m = SparseMatrix::from_triplets(
        (9, 9),
        vec![(3, 7, 1.0f64), (3, 1, 2.0), (5, 1, 3.0), (5, 7, 4.0), (0, 4, 10.0)],
    )
    .unwrap();

    let folded = fold_and_resize(&m, &FoldOptions::default(), None).unwrap();
    assert_eq!(folded.shape(), (5, 5));
    assert_eq!(folded.to_dense()[[1, 3]], 10.0);
    assert_eq!(folded.to_dense()[[4, 0]], 20.0);

    // radius 3 drops the (1, 3) hits and the far row-4 pixel
    let cropped = fold_and_resize(&m, &FoldOptions::default(), Some(3)).unwrap();
    assert_eq!(cropped.shape(), (3, 3));
    assert!(cropped.is_empty());
}

#[test]
fn test_pipeline_propagates_selection_error() {
    let m: SparseMatrix<f32> = SparseMatrix::empty((4, 4));
    let opts = FoldOptions::new().with_mask(QuadrantMask::none());
    assert!(fold_and_resize(&m, &opts, Some(2)).is_err());
}
