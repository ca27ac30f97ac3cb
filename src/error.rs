use thiserror::Error;

/// Which extent of the folded output could not be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldAxis {
    Rows,
    Cols,
}

impl std::fmt::Display for FoldAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoldAxis::Rows => f.write_str("row"),
            FoldAxis::Cols => f.write_str("column"),
        }
    }
}

/// Errors raised while building, folding or resizing a sparse matrix.
///
/// `Selection` is the only error the fold itself produces; every other
/// variant is a precondition on the caller's input (see [`QuadrantError::is_precondition`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadrantError {
    #[error("no quadrant is selected for the {axis} extent (mask = {mask:?})")]
    Selection { axis: FoldAxis, mask: [bool; 4] },

    #[error("data, row and col must have equal lengths (got {data}, {row}, {col})")]
    LengthMismatch { data: usize, row: usize, col: usize },

    #[error("entry {entry} at ({row}, {col}) lies outside shape {shape:?}")]
    IndexOutOfBounds {
        entry: usize,
        row: usize,
        col: usize,
        shape: (usize, usize),
    },

    #[error("center (x0={x0}, y0={y0}) lies outside shape {shape:?}")]
    CenterOutOfBounds {
        x0: usize,
        y0: usize,
        shape: (usize, usize),
    },

    #[error("invalid quadrant mask: {0}")]
    InvalidMask(String),
}

impl QuadrantError {
    /// True for malformed input rather than a degenerate quadrant selection.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, QuadrantError::Selection { .. })
    }
}

pub type Result<T> = std::result::Result<T, QuadrantError>;
