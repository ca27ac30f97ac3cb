//! Quadrant folding of sparse detector images.
//!
//! A raw image is folded about its center pixel with [`fold_quadrants`] and
//! optionally cropped to a radius with [`resize_folded`].

pub mod types;
pub mod fold;
pub mod resize;

#[cfg(test)]
mod tests;

pub use fold::{fold_quadrants, folded_shape};
pub use resize::{fold_and_resize, resize_folded};
pub use types::{FoldOptions, Quadrant, QuadrantMask};
