//! Finder pipeline driving one event end-to-end.
//!
//! [`InterceptFinder`] owns the shared lookup tables and a reusable
//! workspace. Each call subdivides the Hough space, clusters the active
//! leaf cells, emits candidates, and optionally merges them.
//!
//! Typical usage:
//! ```no_run
//! use hough_intercept::{FinderParams, HitPoint, InterceptFinder, LayerFilter};
//!
//! # fn example(hits: &[HitPoint]) -> Result<(), hough_intercept::ConfigError> {
//! let mut finder = InterceptFinder::new(FinderParams::new(LayerFilter::new(4)))?;
//! for candidate in finder.apply(hits) {
//!     println!("{} hits: {:?}", candidate.len(), candidate.hit_ids());
//! }
//! # Ok(())
//! # }
//! ```
use super::params::FinderParams;
use super::workspace::FinderWorkspace;
use crate::cluster::{emit_candidate, find_clusters, TrackCandidate};
use crate::diagnostics::{EventDescriptor, FinderReport, FinderTrace, TimingBreakdown};
use crate::error::ConfigError;
use crate::hits::HitPoint;
use crate::hough::{find_active_cells, ActiveCells, HoughSpaceTables};
use crate::merge::merge_candidates;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Track-intercept finder for one Hough-space layout.
pub struct InterceptFinder {
    params: FinderParams,
    tables: Arc<HoughSpaceTables>,
    workspace: FinderWorkspace,
}

impl InterceptFinder {
    /// Validates `params` and builds the lookup tables.
    pub fn new(params: FinderParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let tables = Arc::new(HoughSpaceTables::new(&params.hough)?);
        Ok(Self {
            params,
            tables,
            workspace: FinderWorkspace::new(),
        })
    }

    /// Reuses tables built for the same layout, e.g. by another finder.
    pub fn with_tables(
        params: FinderParams,
        tables: Arc<HoughSpaceTables>,
    ) -> Result<Self, ConfigError> {
        if tables.options() != &params.hough {
            debug!("InterceptFinder: shared tables do not match {:?}", params.hough);
            return Err(ConfigError::TableMismatch);
        }
        params.validate()?;
        Ok(Self {
            params,
            tables,
            workspace: FinderWorkspace::new(),
        })
    }

    pub fn params(&self) -> &FinderParams {
        &self.params
    }

    pub fn tables(&self) -> &Arc<HoughSpaceTables> {
        &self.tables
    }

    /// Leaf cells of the last invocation, with their cluster labels.
    pub fn active_cells(&self) -> &ActiveCells {
        self.workspace.active_cells()
    }

    /// Finds the track candidates of one event.
    pub fn apply<'h>(&mut self, hits: &'h [HitPoint]) -> Vec<TrackCandidate<'h>> {
        self.apply_with_report(hits).candidates
    }

    /// Finds the track candidates of one event and records the stage trace.
    pub fn apply_with_report<'h>(&mut self, hits: &'h [HitPoint]) -> FinderReport<'h> {
        run_event(&self.params, &self.tables, &mut self.workspace, hits)
    }

    /// Processes independent events, each with its own workspace.
    ///
    /// With the `parallel` feature the events run on the rayon pool; results
    /// keep the order of `events` either way.
    pub fn process_batch<'h>(&self, events: &'h [Vec<HitPoint>]) -> Vec<Vec<TrackCandidate<'h>>> {
        #[cfg(feature = "parallel")]
        {
            events
                .par_iter()
                .map_init(FinderWorkspace::new, |workspace, hits| {
                    run_event(&self.params, &self.tables, workspace, hits).candidates
                })
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            let mut workspace = FinderWorkspace::new();
            events
                .iter()
                .map(|hits| run_event(&self.params, &self.tables, &mut workspace, hits).candidates)
                .collect()
        }
    }
}

fn run_event<'h>(
    params: &FinderParams,
    tables: &HoughSpaceTables,
    workspace: &mut FinderWorkspace,
    hits: &'h [HitPoint],
) -> FinderReport<'h> {
    let total_start = Instant::now();
    workspace.reset(hits.len());

    let intercept = find_active_cells(tables, params.layer_filter, hits, &mut workspace.cells);

    let (clusters, clustering) = find_clusters(
        &mut workspace.cells,
        (tables.n_angle_sectors(), tables.n_vertical_sectors()),
        &params.cluster,
        &mut workspace.stamps,
    );

    let emit_start = Instant::now();
    let mut candidates: Vec<TrackCandidate<'h>> = clusters
        .iter()
        .map(|cluster| emit_candidate(cluster, hits, tables))
        .collect();
    let emit_ms = emit_start.elapsed().as_secs_f64() * 1000.0;

    let mut merge = None;
    if let Some(options) = &params.merge {
        let (merged, stage) = merge_candidates(candidates, options);
        candidates = merged;
        merge = Some(stage);
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    let mut timings = TimingBreakdown::with_total(total_ms);
    timings.push("intercept", intercept.elapsed_ms);
    timings.push("clustering", clustering.elapsed_ms);
    timings.push("emit", emit_ms);
    if let Some(stage) = &merge {
        timings.push("merge", stage.elapsed_ms);
    }

    debug!(
        "InterceptFinder: hits={} active_cells={} clusters={}/{} candidates={} total_ms={:.3}",
        hits.len(),
        intercept.active_leaf_cells,
        clustering.clusters_kept,
        clustering.clusters_seeded,
        candidates.len(),
        total_ms
    );

    let trace = FinderTrace {
        input: EventDescriptor {
            hits: hits.len(),
            n_angle_sectors: tables.n_angle_sectors(),
            n_vertical_sectors: tables.n_vertical_sectors(),
            min_layers: params.layer_filter.min_layers,
        },
        timings,
        intercept,
        clustering,
        merge,
        candidates: candidates.len(),
    };
    FinderReport { candidates, trace }
}
