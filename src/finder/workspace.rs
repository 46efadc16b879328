//! Per-invocation scratch state reused across events.
use crate::hough::ActiveCells;

/// Active-cell map and hit stamps, cleared at the start of every event.
#[derive(Debug, Default)]
pub struct FinderWorkspace {
    pub(crate) cells: ActiveCells,
    pub(crate) stamps: Vec<u32>,
}

impl FinderWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cell of the previous event and zeroes one stamp per hit.
    pub fn reset(&mut self, n_hits: usize) {
        self.cells.clear();
        self.stamps.clear();
        self.stamps.resize(n_hits, 0);
    }

    pub fn active_cells(&self) -> &ActiveCells {
        &self.cells
    }
}
