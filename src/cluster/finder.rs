use super::options::ClusterOptions;
use crate::diagnostics::ClusterStage;
use crate::hough::{ActiveCells, CellIndex, CellLabel};
use std::time::Instant;

/// Neighbours visited from a cell: next angle bin, previous vertical bin,
/// and their diagonal. Together with the scan order this reaches every
/// adjacent pair once.
const NEIGHBOR_OFFSETS: [(i64, i64); 3] = [(1, 0), (0, -1), (1, -1)];

/// Connected group of active cells accepted by the size bounds.
#[derive(Clone, Debug)]
pub struct RawCluster {
    pub label: u32,
    pub seed: CellIndex,
    pub cells: Vec<CellIndex>,
    /// Indices into the event's hit slice, each listed once.
    pub hits: Vec<usize>,
}

struct ClusterScan<'a> {
    cells: &'a mut ActiveCells,
    options: &'a ClusterOptions,
    n_angle: i64,
    n_vertical: i64,
    stamps: &'a mut [u32],
    label: u32,
    seed: CellIndex,
    members: Vec<CellIndex>,
    hits: Vec<usize>,
}

impl ClusterScan<'_> {
    /// Labels `index` and merges its hits; false if absent or already labeled.
    fn absorb(&mut self, index: CellIndex) -> bool {
        let Some(cell) = self.cells.get_mut(&index) else {
            return false;
        };
        if cell.is_labeled() {
            return false;
        }
        cell.label = CellLabel::Cluster(self.label);
        self.members.push(index);
        for &hit in &cell.hits {
            if self.stamps[hit] != self.label {
                self.stamps[hit] = self.label;
                self.hits.push(hit);
            }
        }
        true
    }

    /// Depth-first growth from `from`, visiting neighbours in offset order.
    ///
    /// Uses an explicit stack of `(cell, next offset)` frames so the depth is
    /// not bounded by the thread stack.
    fn depth_first_search(&mut self, from: CellIndex) {
        let mut stack = vec![(from, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (cell, offset) = *frame;
            if offset == NEIGHBOR_OFFSETS.len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;
            if self.members.len() >= self.options.max_cluster_size {
                return;
            }
            let (dx, dy) = NEIGHBOR_OFFSETS[offset];
            let x = cell.x as i64 + dx;
            let y = cell.y as i64 + dy;
            if (x - self.seed.x as i64).abs() >= self.options.max_cluster_size_x as i64
                || (y - self.seed.y as i64).abs() >= self.options.max_cluster_size_y as i64
            {
                continue;
            }
            if x < 0 || y < 0 || x >= self.n_angle || y >= self.n_vertical {
                continue;
            }
            let next = CellIndex::new(x as u32, y as u32);
            if self.absorb(next) {
                stack.push((next, 0));
            }
        }
    }
}

/// Groups active cells into clusters by depth-first search.
///
/// Cells are labeled in place. `stamps` must hold one zeroed entry per hit
/// of the event; it records the last cluster each hit was merged into.
/// Clusters outside `[min_cluster_size, max_cluster_size]` are dropped, but
/// their label is still consumed.
pub fn find_clusters(
    cells: &mut ActiveCells,
    grid: (u32, u32),
    options: &ClusterOptions,
    stamps: &mut [u32],
) -> (Vec<RawCluster>, ClusterStage) {
    let t0 = Instant::now();
    let mut stage = ClusterStage::default();
    let mut clusters = Vec::new();
    let mut cluster_count = 1u32;

    for seed in cells.indices() {
        if cells.get(&seed).map_or(true, |cell| cell.is_labeled()) {
            continue;
        }
        let mut scan = ClusterScan {
            cells: &mut *cells,
            options,
            n_angle: grid.0 as i64,
            n_vertical: grid.1 as i64,
            stamps: &mut *stamps,
            label: cluster_count,
            seed,
            members: Vec::new(),
            hits: Vec::new(),
        };
        scan.absorb(seed);
        scan.depth_first_search(seed);
        let ClusterScan { members, hits, .. } = scan;

        let size = members.len();
        stage.clusters_seeded += 1;
        stage.largest_cluster = stage.largest_cluster.max(size);
        if size == options.max_cluster_size {
            stage.reached_maximum += 1;
        }
        if size >= options.min_cluster_size && size <= options.max_cluster_size {
            stage.clusters_kept += 1;
            clusters.push(RawCluster {
                label: cluster_count,
                seed,
                cells: members,
                hits,
            });
        } else {
            stage.rejected_too_small += 1;
        }
        cluster_count += 1;
    }

    stage.elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    (clusters, stage)
}
