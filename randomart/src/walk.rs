use crate::bits::BitPair;
use crate::error::ArtError;

/// Grid size in cells: `width` columns by `height` rows.
///
/// Both sides must be odd and at least 3 so the grid has a unique
/// center cell with a neighbor on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub width: usize,
    pub height: usize,
}

impl Default for Dims {
    fn default() -> Self {
        Self {
            width: 17,
            height: 9,
        }
    }
}

impl Dims {
    /// Create validated dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, ArtError> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), ArtError> {
        let ok = |n: usize| n >= 3 && n % 2 == 1;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ArtError::InvalidDims {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The exact center cell (integer division on odd sides).
    pub fn center(&self) -> Position {
        Position {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of a cell.
    pub fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Move one diagonal step from `pos` as directed by `pair`.
///
/// The second bit picks left (0) or right (1), the first bit picks up (0)
/// or down (1). Each axis is clamped to the grid independently, so at an
/// edge the blocked axis stays put while the other still moves.
pub(crate) fn step(pos: Position, pair: BitPair, dims: Dims) -> Position {
    let x = if pair.second() {
        (pos.x + 1).min(dims.width - 1)
    } else {
        pos.x.saturating_sub(1)
    };
    let y = if pair.first() {
        (pos.y + 1).min(dims.height - 1)
    } else {
        pos.y.saturating_sub(1)
    };
    Position { x, y }
}

/// Walk the bishop across the grid, returning every position visited.
///
/// The path starts at the center and gains one entry per bit-pair, so its
/// length is always `pairs.len() + 1`.
pub fn walk(pairs: &[BitPair], dims: Dims) -> Result<Vec<Position>, ArtError> {
    dims.validate()?;
    Ok(trace(pairs, dims))
}

/// [`walk`] without the dimension check, for callers that validated up front.
pub(crate) fn trace(pairs: &[BitPair], dims: Dims) -> Vec<Position> {
    let mut path = Vec::with_capacity(pairs.len() + 1);
    let mut pos = dims.center();
    path.push(pos);
    for &pair in pairs {
        pos = step(pos, pair, dims);
        path.push(pos);
    }
    path
}
