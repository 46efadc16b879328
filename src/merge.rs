//! Optional post-processing that folds candidates with nearby Hough-space
//! angles into one.
//!
//! Candidates are visited in emission order. The first unmerged candidate
//! absorbs every later one whose centroid angle lies strictly within
//! `threshold_x` of its own (the comparison is always against the absorbing
//! candidate's unmerged centroid, never a running mean). Hit lists are
//! united by identity and re-sorted outermost first. The merged centroid
//! angle is the mean over all absorbed candidates; the vertical coordinate
//! stays that of the absorbing candidate.

use crate::cluster::{sort_outer_to_inner, TrackCandidate};
use crate::diagnostics::MergeStage;
use crate::error::ConfigError;
use crate::hits::HitPoint;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Angular distance, in Hough-space units, below which candidates merge.
    pub threshold_x: f64,
}

impl MergeOptions {
    pub fn new(threshold_x: f64) -> Self {
        Self { threshold_x }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold_x.is_finite() && self.threshold_x > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidMergeThreshold(self.threshold_x))
        }
    }
}

/// Merges candidates whose centroid angles are within the threshold.
pub fn merge_candidates<'h>(
    candidates: Vec<TrackCandidate<'h>>,
    options: &MergeOptions,
) -> (Vec<TrackCandidate<'h>>, MergeStage) {
    let t0 = Instant::now();
    let candidates_in = candidates.len();
    let mut pending: Vec<Option<TrackCandidate<'h>>> = candidates.into_iter().map(Some).collect();
    let mut merged = Vec::with_capacity(pending.len());

    for i in 0..pending.len() {
        let Some(mut head) = pending[i].take() else {
            continue;
        };
        let anchor_x = head.cluster.hough_center[0];
        let mut x_sum = anchor_x;
        let mut absorbed = 1usize;

        for slot in pending.iter_mut().skip(i + 1) {
            let close = slot.as_ref().is_some_and(|other| {
                (other.cluster.hough_center[0] - anchor_x).abs() < options.threshold_x
            });
            if !close {
                continue;
            }
            let Some(other) = slot.take() else {
                continue;
            };
            x_sum += other.cluster.hough_center[0];
            absorbed += 1;
            absorb(&mut head, other);
        }

        if absorbed > 1 {
            head.cluster.hough_center[0] = x_sum / absorbed as f64;
            sort_outer_to_inner(&mut head.hits);
        }
        merged.push(head);
    }

    let stage = MergeStage {
        threshold_x: options.threshold_x,
        candidates_in,
        candidates_out: merged.len(),
        elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
    };
    (merged, stage)
}

fn absorb<'h>(head: &mut TrackCandidate<'h>, other: TrackCandidate<'h>) {
    for hit in other.hits {
        if !contains_identity(&head.hits, hit) {
            head.hits.push(hit);
        }
    }
    let summary = &mut head.cluster;
    summary.size += other.cluster.size;
    summary.merged_clusters += other.cluster.merged_clusters;
    summary.x_bounds = [
        summary.x_bounds[0].min(other.cluster.x_bounds[0]),
        summary.x_bounds[1].max(other.cluster.x_bounds[1]),
    ];
    summary.angle_range = [
        summary.angle_range[0].min(other.cluster.angle_range[0]),
        summary.angle_range[1].max(other.cluster.angle_range[1]),
    ];
    summary.y_bounds = [
        summary.y_bounds[0].min(other.cluster.y_bounds[0]),
        summary.y_bounds[1].max(other.cluster.y_bounds[1]),
    ];
}

fn contains_identity(hits: &[&HitPoint], hit: &HitPoint) -> bool {
    hits.iter().any(|&own| std::ptr::eq(own, hit))
}
