//! Quadrant folding of sparse 2D detector images.
//!
//! ```
//! use _rust::quadrant::{fold_quadrants, resize_folded, FoldOptions, Quadrant, QuadrantMask};
//! use _rust::sparse::SparseMatrix;
//!
//! let image = SparseMatrix::from_triplets((4, 4), vec![(0, 3, 5.0f32)]).unwrap();
//! let opts = FoldOptions::new()
//!     .with_center(2, 2)
//!     .with_mask(QuadrantMask::only(Quadrant::UpperRight));
//!
//! let folded = fold_quadrants(&image, &opts).unwrap();
//! assert_eq!(folded.shape(), (3, 2));
//! assert_eq!((folded.row()[0], folded.col()[0]), (2, 1));
//!
//! let cropped = resize_folded(&folded, 2);
//! assert_eq!(cropped.shape(), (2, 2));
//! assert!(cropped.is_empty());
//! ```

pub mod error;
pub mod quadrant;
pub mod sparse;

#[cfg(feature = "python")]
mod bindings;

pub use error::{FoldAxis, QuadrantError, Result};
pub use quadrant::{fold_and_resize, fold_quadrants, folded_shape, resize_folded, FoldOptions, Quadrant, QuadrantMask};
pub use sparse::SparseMatrix;
