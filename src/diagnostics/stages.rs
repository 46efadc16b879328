use serde::Serialize;

/// Outcome of the recursive subdivision.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterceptStage {
    pub hits_total: usize,
    pub max_recursion_level: u32,
    /// Subdivision calls, the root included.
    pub recursion_calls: usize,
    /// Child cells tested against the layer filter.
    pub cells_evaluated: usize,
    /// Child cells that passed the filter, at any level.
    pub active_cells_total: usize,
    pub active_leaf_cells: usize,
    pub elapsed_ms: f64,
}

/// Outcome of the connected-component search.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub clusters_seeded: usize,
    pub clusters_kept: usize,
    pub rejected_too_small: usize,
    /// Clusters whose growth stopped at the maximum size.
    pub reached_maximum: usize,
    pub largest_cluster: usize,
    pub elapsed_ms: f64,
}

/// Outcome of the optional candidate merge.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStage {
    pub threshold_x: f64,
    pub candidates_in: usize,
    pub candidates_out: usize,
    pub elapsed_ms: f64,
}
