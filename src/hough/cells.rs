use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Leaf-cell coordinates: left angle-bin edge and top vertical-bin edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellIndex {
    pub x: u32,
    pub y: u32,
}

impl CellIndex {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Cluster assignment of an active cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellLabel {
    Unlabeled,
    Cluster(u32),
}

/// Leaf cell whose curves passed the layer filter.
#[derive(Clone, Debug)]
pub struct ActiveCell {
    /// Distinct-layer count returned by the layer filter (always > 0).
    pub layer_count: u32,
    pub label: CellLabel,
    /// Indices into the event's hit slice, unique within the cell.
    pub hits: Vec<usize>,
}

impl ActiveCell {
    /// Signed label encoding: `-layer_count` while unlabeled, else the cluster id.
    pub fn code(&self) -> i64 {
        match self.label {
            CellLabel::Unlabeled => -(self.layer_count as i64),
            CellLabel::Cluster(id) => id as i64,
        }
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self.label, CellLabel::Cluster(_))
    }
}

/// Sparse map of active leaf cells, ordered by `(x, y)`.
#[derive(Clone, Debug, Default)]
pub struct ActiveCells {
    cells: BTreeMap<CellIndex, ActiveCell>,
}

impl ActiveCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub(crate) fn insert(&mut self, index: CellIndex, layer_count: u32, hits: Vec<usize>) {
        debug_assert!(layer_count > 0, "inactive cell recorded at {index:?}");
        let previous = self.cells.insert(
            index,
            ActiveCell {
                layer_count,
                label: CellLabel::Unlabeled,
                hits,
            },
        );
        debug_assert!(previous.is_none(), "leaf cell {index:?} recorded twice");
    }

    pub fn get(&self, index: &CellIndex) -> Option<&ActiveCell> {
        self.cells.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: &CellIndex) -> Option<&mut ActiveCell> {
        self.cells.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell coordinates in scan order.
    pub fn indices(&self) -> Vec<CellIndex> {
        self.cells.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CellIndex, ActiveCell> {
        self.cells.iter()
    }
}
