//! I/O helpers for hit files and JSON.
//!
//! - `load_hits`: read a JSON array of hit records into [`HitPoint`]s.
//! - `hits_from_records`: convert parsed records, deriving conformal
//!   coordinates when a record does not carry them.
//! - `cell_records`: flatten the active-cell map with signed label codes.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::cluster::{ClusterSummary, TrackCandidate};
use crate::hits::{HitId, HitPoint};
use crate::hough::ActiveCells;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One hit as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub id: HitId,
    pub layer: u8,
    pub position: [f64; 3],
    /// Explicit `[x', y']`; computed from `position` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conformal: Option<[f64; 2]>,
}

impl From<&HitRecord> for HitPoint {
    fn from(record: &HitRecord) -> Self {
        let [x, y, z] = record.position;
        let position = Vector3::new(x, y, z);
        match record.conformal {
            Some([xc, yc]) => HitPoint::new(record.id, record.layer, position, xc, yc),
            None => HitPoint::from_position(record.id, record.layer, position),
        }
    }
}

pub fn hits_from_records(records: &[HitRecord]) -> Vec<HitPoint> {
    records.iter().map(HitPoint::from).collect()
}

/// Load a JSON array of hit records.
pub fn load_hits(path: &Path) -> Result<Vec<HitPoint>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hits {}: {e}", path.display()))?;
    let records: Vec<HitRecord> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse hits {}: {e}", path.display()))?;
    Ok(hits_from_records(&records))
}

/// Candidate as written to JSON: hit identities plus the cluster summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub hits: Vec<HitId>,
    pub cluster: ClusterSummary,
}

impl From<&TrackCandidate<'_>> for CandidateRecord {
    fn from(candidate: &TrackCandidate<'_>) -> Self {
        Self {
            hits: candidate.hit_ids(),
            cluster: candidate.cluster.clone(),
        }
    }
}

/// Active leaf cell as written to JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub x: u32,
    pub y: u32,
    /// `-layer_count` if unlabeled, else the cluster label.
    pub code: i64,
    pub hits: Vec<HitId>,
}

/// Cells in scan order, with hit indices resolved against `hits`.
pub fn cell_records(cells: &ActiveCells, hits: &[HitPoint]) -> Vec<CellRecord> {
    cells
        .iter()
        .map(|(index, cell)| CellRecord {
            x: index.x,
            y: index.y,
            code: cell.code(),
            hits: cell.hits.iter().map(|&idx| hits[idx].id).collect(),
        })
        .collect()
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
