use super::finder::RawCluster;
use crate::hits::{HitId, HitPoint};
use crate::hough::{CellIndex, HoughSpaceTables};
use serde::Serialize;
use std::cmp::Ordering;

/// Hough-space footprint of the cluster behind a candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub label: u32,
    pub seed: CellIndex,
    /// Number of leaf cells.
    pub size: usize,
    /// Mean of the member cells' bin centres, `[angle, vertical]`.
    pub hough_center: [f64; 2],
    /// Inclusive `[min, max]` leaf indices on the angle axis.
    pub x_bounds: [u32; 2],
    /// Angle window covered by the cells, from the left edge of the first
    /// bin to the right edge of the last.
    pub angle_range: [f64; 2],
    /// Inclusive `[min, max]` leaf indices on the vertical axis.
    pub y_bounds: [u32; 2],
    /// Clusters folded into this candidate (1 unless merged).
    pub merged_clusters: usize,
}

/// Hits of one cluster, ordered outermost first.
#[derive(Clone, Debug)]
pub struct TrackCandidate<'h> {
    pub hits: Vec<&'h HitPoint>,
    pub cluster: ClusterSummary,
}

impl<'h> TrackCandidate<'h> {
    pub fn hit_ids(&self) -> Vec<HitId> {
        self.hits.iter().map(|hit| hit.id).collect()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// True when `hit` is this exact hit of the event slice (identity, not value).
    pub fn contains(&self, hit: &HitPoint) -> bool {
        self.hits.iter().any(|&own| std::ptr::eq(own, hit))
    }
}

fn outer_to_inner(a: &&HitPoint, b: &&HitPoint) -> Ordering {
    b.layer
        .cmp(&a.layer)
        .then_with(|| b.radius().total_cmp(&a.radius()))
}

/// Orders hits by layer, then transverse radius, both descending. Stable.
pub fn sort_outer_to_inner(hits: &mut [&HitPoint]) {
    hits.sort_by(outer_to_inner);
}

/// Builds the candidate for an accepted cluster.
pub(crate) fn emit_candidate<'h>(
    cluster: &RawCluster,
    hits: &'h [HitPoint],
    tables: &HoughSpaceTables,
) -> TrackCandidate<'h> {
    let mut members: Vec<&'h HitPoint> = cluster.hits.iter().map(|&idx| &hits[idx]).collect();
    sort_outer_to_inner(&mut members);

    let mut sum = [0.0f64; 2];
    let mut x_bounds = [u32::MAX, 0];
    let mut y_bounds = [u32::MAX, 0];
    for cell in &cluster.cells {
        sum[0] += tables.x_center(cell.x as usize);
        sum[1] += tables.y_center(cell.y as usize);
        x_bounds = [x_bounds[0].min(cell.x), x_bounds[1].max(cell.x)];
        y_bounds = [y_bounds[0].min(cell.y), y_bounds[1].max(cell.y)];
    }
    let n = cluster.cells.len().max(1) as f64;

    TrackCandidate {
        hits: members,
        cluster: ClusterSummary {
            label: cluster.label,
            seed: cluster.seed,
            size: cluster.cells.len(),
            hough_center: [sum[0] / n, sum[1] / n],
            x_bounds,
            y_bounds,
            angle_range: [
                tables.x_edge(x_bounds[0] as usize),
                tables.x_edge(x_bounds[1] as usize + 1),
            ],
            merged_clusters: 1,
        },
    }
}
