use crate::walk::{Dims, Position};

/// Per-cell visit counts for a walk, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    dims: Dims,
    counts: Vec<usize>,
}

impl Histogram {
    /// Count every entry of `path`, including the starting center cell.
    ///
    /// Positions must lie inside `dims`, which holds for any path produced
    /// by [`crate::walk::walk`].
    pub(crate) fn from_path(path: &[Position], dims: Dims) -> Self {
        let mut counts = vec![0; dims.cell_count()];
        for &pos in path {
            counts[dims.index(pos)] += 1;
        }
        Self { dims, counts }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Visits to `pos`, or `None` if it lies outside the grid.
    pub fn count(&self, pos: Position) -> Option<usize> {
        if pos.x >= self.dims.width || pos.y >= self.dims.height {
            return None;
        }
        Some(self.counts[self.dims.index(pos)])
    }

    /// All counts, row-major.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of visits recorded.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
