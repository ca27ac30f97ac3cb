use crate::error::{QuadrantError, Result};

/// One of the four regions around the center pixel, in display orientation
/// (row grows downward, col grows rightward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    UpperRight = 0,
    UpperLeft = 1,
    LowerLeft = 2,
    LowerRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// `(row_sign, col_sign)` that maps this quadrant onto non-negative offsets.
    pub fn signs(self) -> (isize, isize) {
        match self {
            Quadrant::UpperRight => (-1, 1),
            Quadrant::UpperLeft => (-1, -1),
            Quadrant::LowerLeft => (1, -1),
            Quadrant::LowerRight => (1, 1),
        }
    }

    pub fn extends_up(self) -> bool {
        matches!(self, Quadrant::UpperRight | Quadrant::UpperLeft)
    }

    pub fn extends_left(self) -> bool {
        matches!(self, Quadrant::UpperLeft | Quadrant::LowerLeft)
    }
}

/// Which quadrants take part in a fold, indexed by [`Quadrant::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadrantMask(pub [bool; 4]);

impl Default for QuadrantMask {
    fn default() -> Self {
        QuadrantMask([true; 4])
    }
}

impl QuadrantMask {
    pub fn new(flags: [bool; 4]) -> Self {
        QuadrantMask(flags)
    }

    pub fn none() -> Self {
        QuadrantMask([false; 4])
    }

    pub fn only(q: Quadrant) -> Self {
        let mut flags = [false; 4];
        flags[q.index()] = true;
        QuadrantMask(flags)
    }

    /// 0/1 style flags; any non-zero value selects the quadrant.
    pub fn from_flags(flags: &[i64]) -> Result<Self> {
        match flags {
            [a, b, c, d] => Ok(QuadrantMask([*a != 0, *b != 0, *c != 0, *d != 0])),
            _ => Err(QuadrantError::InvalidMask(format!(
                "expected 4 flags, got {}",
                flags.len()
            ))),
        }
    }

    pub fn is_selected(&self, q: Quadrant) -> bool {
        self.0[q.index()]
    }

    pub fn selected(&self) -> impl Iterator<Item = Quadrant> + '_ {
        Quadrant::ALL.into_iter().filter(|q| self.is_selected(*q))
    }

    pub fn flags(&self) -> [bool; 4] {
        self.0
    }
}

/// Parameters of a single fold. `None` centers fall back to the floor midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoldOptions {
    pub x0: Option<usize>,
    pub y0: Option<usize>,
    pub mask: QuadrantMask,
}

impl FoldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, x0: usize, y0: usize) -> Self {
        self.x0 = Some(x0);
        self.y0 = Some(y0);
        self
    }

    pub fn with_mask(mut self, mask: QuadrantMask) -> Self {
        self.mask = mask;
        self
    }

    /// Concrete `(x0, y0)` for a matrix of `shape = (height, width)`.
    pub fn resolve_center(&self, shape: (usize, usize)) -> Result<(usize, usize)> {
        let (sy, sx) = shape;
        let x0 = self.x0.unwrap_or(sx / 2);
        let y0 = self.y0.unwrap_or(sy / 2);
        if x0 >= sx || y0 >= sy {
            return Err(QuadrantError::CenterOutOfBounds { x0, y0, shape });
        }
        Ok((x0, y0))
    }
}
