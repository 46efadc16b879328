mod common;

use common::synthetic_hits::{circle_track, hit_with_curve, scattered_hits};
use hough_intercept::error::Axis;
use hough_intercept::hough::LayerSet;
use hough_intercept::{
    ClusterOptions, ConfigError, FinderParams, HitId, HitPoint, HoughSpaceOptions,
    HoughSpaceTables, InterceptFinder, LayerFilter, MergeOptions, TrackCandidate,
};
use std::collections::HashSet;
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn barrel_params() -> FinderParams {
    FinderParams {
        hough: HoughSpaceOptions {
            n_angle_sectors: 128,
            n_vertical_sectors: 128,
            vertical_size: 0.1,
            minimum_x: -FRAC_PI_2,
            maximum_x: FRAC_PI_2,
        },
        layer_filter: LayerFilter::new(3),
        cluster: ClusterOptions {
            min_cluster_size: 1,
            max_cluster_size: 200,
            max_cluster_size_x: 32,
            max_cluster_size_y: 32,
        },
        merge: None,
    }
}

/// Single-cell or two-cell layout over a narrow window where curves are
/// near-straight lines `y ≈ x' + y'·x`.
fn narrow_params(n_angle_sectors: u32, min_layers: u32) -> FinderParams {
    FinderParams {
        hough: HoughSpaceOptions {
            n_angle_sectors,
            n_vertical_sectors: 1,
            vertical_size: 1.0,
            minimum_x: -0.01,
            maximum_x: 0.01,
        },
        layer_filter: LayerFilter::new(min_layers),
        cluster: ClusterOptions {
            min_cluster_size: 1,
            max_cluster_size: 10,
            max_cluster_size_x: 4,
            max_cluster_size_y: 4,
        },
        merge: None,
    }
}

fn barrel_event() -> Vec<HitPoint> {
    let mut hits = circle_track(0, 0.5, 25.0);
    hits.extend(circle_track(10, -0.6, 35.0));
    hits.extend(scattered_hits(100, 12, 7));
    hits
}

fn ids(candidates: &[TrackCandidate<'_>]) -> Vec<Vec<HitId>> {
    candidates.iter().map(TrackCandidate::hit_ids).collect()
}

#[test]
fn circle_tracks_are_recovered() {
    init_logging();
    let hits = barrel_event();
    let mut finder = InterceptFinder::new(barrel_params()).expect("finder");
    let candidates = finder.apply(&hits);
    assert!(!candidates.is_empty());

    for first in [0u32, 10] {
        let track: HashSet<HitId> = (first..first + 4).map(HitId).collect();
        let found = candidates.iter().any(|candidate| {
            let own: HashSet<HitId> = candidate.hit_ids().into_iter().collect();
            track.is_subset(&own)
        });
        assert!(found, "track starting at id {first} not recovered");
    }
}

#[test]
fn candidates_respect_ordering_and_bounds() {
    init_logging();
    let hits = barrel_event();
    let params = barrel_params();
    let mut finder = InterceptFinder::new(params).expect("finder");
    let candidates = finder.apply(&hits);

    for candidate in &candidates {
        let unique: HashSet<HitId> = candidate.hit_ids().into_iter().collect();
        assert_eq!(unique.len(), candidate.len(), "duplicate hit in candidate");

        for pair in candidate.hits.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.layer > b.layer || (a.layer == b.layer && a.radius() >= b.radius()));
        }

        let summary = &candidate.cluster;
        assert!(summary.size >= params.cluster.min_cluster_size);
        assert!(summary.size <= params.cluster.max_cluster_size);
        let reach_x = params.cluster.max_cluster_size_x - 1;
        let reach_y = params.cluster.max_cluster_size_y - 1;
        assert!(summary.seed.x - summary.x_bounds[0] <= reach_x);
        assert!(summary.x_bounds[1] - summary.seed.x <= reach_x);
        assert!(summary.seed.y.abs_diff(summary.y_bounds[0]) <= reach_y);
        assert!(summary.seed.y.abs_diff(summary.y_bounds[1]) <= reach_y);
    }
}

#[test]
fn active_cells_pass_the_layer_filter() {
    let hits = barrel_event();
    let mut finder = InterceptFinder::new(barrel_params()).expect("finder");
    finder.apply(&hits);
    assert!(!finder.active_cells().is_empty());
    for (index, cell) in finder.active_cells().iter() {
        let mut layers = LayerSet::default();
        for &hit in &cell.hits {
            layers.insert(hits[hit].layer);
        }
        assert!(layers.count() >= 3, "cell {index:?} has too few layers");
        assert_eq!(cell.layer_count, layers.count());
        assert!(cell.is_labeled());
    }
}

#[test]
fn repeated_runs_are_identical() {
    let hits = barrel_event();
    let mut first = InterceptFinder::new(barrel_params()).expect("finder");
    let mut second = InterceptFinder::new(barrel_params()).expect("finder");
    let a = first.apply(&hits);
    let b = second.apply(&hits);
    assert_eq!(ids(&a), ids(&b));
    let summaries_a: Vec<_> = a.iter().map(|c| c.cluster.clone()).collect();
    let summaries_b: Vec<_> = b.iter().map(|c| c.cluster.clone()).collect();
    assert_eq!(summaries_a, summaries_b);
}

#[test]
fn workspace_does_not_leak_between_events() {
    let event_a = barrel_event();
    let event_b = scattered_hits(500, 40, 99);
    let mut finder = InterceptFinder::new(barrel_params()).expect("finder");

    let first = ids(&finder.apply(&event_a));
    finder.apply(&event_b);
    let again = ids(&finder.apply(&event_a));
    assert_eq!(first, again);

    assert!(finder.apply(&[]).is_empty());
    assert!(finder.active_cells().is_empty());
}

#[test]
fn batch_matches_sequential_apply() {
    let events = vec![
        barrel_event(),
        circle_track(0, 1.0, 30.0),
        Vec::new(),
        scattered_hits(0, 30, 3),
    ];
    let finder = InterceptFinder::new(barrel_params()).expect("finder");
    let batch = finder.process_batch(&events);
    assert_eq!(batch.len(), events.len());

    let mut sequential = InterceptFinder::new(barrel_params()).expect("finder");
    for (event, candidates) in events.iter().zip(&batch) {
        assert_eq!(ids(candidates), ids(&sequential.apply(event)));
    }
}

#[test]
fn single_cell_candidate_is_sorted_outer_to_inner() {
    let hits = vec![
        hit_with_curve(0, 1, 0.3, 1.0, 3.0),
        hit_with_curve(1, 3, 0.2, 1.0, 10.0),
        hit_with_curve(2, 3, -0.1, 1.0, 12.0),
        hit_with_curve(3, 1, 0.5, 1.0, 4.0),
    ];
    let mut finder = InterceptFinder::new(narrow_params(1, 2)).expect("finder");
    let candidates = finder.apply(&hits);
    assert_eq!(candidates.len(), 1);
    assert_eq!(
        candidates[0].hit_ids(),
        vec![HitId(2), HitId(1), HitId(3), HitId(0)]
    );

    let mut strict = InterceptFinder::new(narrow_params(1, 3)).expect("finder");
    assert!(strict.apply(&hits).is_empty());
}

#[test]
fn hit_shared_by_adjacent_cells_appears_once() {
    let hits = vec![
        hit_with_curve(0, 1, 0.0, 1.0, 5.0),
        hit_with_curve(1, 2, 1.5, 200.0, 9.0),
        hit_with_curve(2, 2, -1.5, 200.0, 11.0),
    ];
    let mut finder = InterceptFinder::new(narrow_params(2, 2)).expect("finder");
    let report = finder.apply_with_report(&hits);
    assert_eq!(report.trace.intercept.active_leaf_cells, 2);
    assert_eq!(report.candidates.len(), 1);
    let candidate = &report.candidates[0];
    assert_eq!(candidate.hit_ids(), vec![HitId(2), HitId(1), HitId(0)]);
    assert_eq!(candidate.cluster.size, 2);
}

#[test]
fn recursion_bound_is_enforced() {
    let mut params = barrel_params();
    params.hough.n_angle_sectors = 1 << 16;
    assert_eq!(
        InterceptFinder::new(params).err(),
        Some(ConfigError::RecursionTooDeep {
            level: 15,
            maximum: 14
        })
    );

    params.hough.n_angle_sectors = 0;
    assert_eq!(
        InterceptFinder::new(params).err(),
        Some(ConfigError::EmptyAxis { axis: Axis::Angle })
    );
}

#[test]
fn shared_tables_must_match_layout() {
    let params = barrel_params();
    let tables = Arc::new(HoughSpaceTables::new(&params.hough).expect("tables"));
    let mut shared = InterceptFinder::with_tables(params, Arc::clone(&tables)).expect("finder");
    let mut owned = InterceptFinder::new(params).expect("finder");
    let hits = barrel_event();
    assert_eq!(ids(&shared.apply(&hits)), ids(&owned.apply(&hits)));

    let mut other = params;
    other.hough.n_vertical_sectors = 64;
    assert_eq!(
        InterceptFinder::with_tables(other, tables).err(),
        Some(ConfigError::TableMismatch)
    );
}

#[test]
fn merge_folds_neighbouring_candidates() {
    let hits = barrel_event();
    let mut plain = InterceptFinder::new(barrel_params()).expect("finder");
    let unmerged = plain.apply(&hits).len();

    let mut params = barrel_params();
    params.merge = Some(MergeOptions::new(0.2));
    let mut merging = InterceptFinder::new(params).expect("finder");
    let report = merging.apply_with_report(&hits);
    let merge = report.trace.merge.as_ref().expect("merge stage");
    assert_eq!(merge.candidates_in, unmerged);
    assert_eq!(merge.candidates_out, report.candidates.len());
    assert!(report.candidates.len() <= unmerged);

    let folded: usize = report
        .candidates
        .iter()
        .map(|c| c.cluster.merged_clusters)
        .sum();
    assert_eq!(folded, unmerged);
    for candidate in &report.candidates {
        let unique: HashSet<HitId> = candidate.hit_ids().into_iter().collect();
        assert_eq!(unique.len(), candidate.len());
    }
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let hits = circle_track(0, 0.3, 40.0);
    let mut finder = InterceptFinder::new(barrel_params()).expect("finder");
    let report = finder.apply_with_report(&hits);
    let json = serde_json::to_value(&report.trace).expect("serialize");
    assert_eq!(json["input"]["hits"], 4);
    assert!(json["intercept"]["activeLeafCells"].as_u64().is_some());
    assert!(json["timings"]["totalMs"].as_f64().is_some());
    assert!(json.get("merge").is_none());

    let timings = &report.trace.timings;
    assert_eq!(
        timings.stage_ms("intercept"),
        Some(report.trace.intercept.elapsed_ms)
    );
    assert_eq!(
        timings.stage_ms("clustering"),
        Some(report.trace.clustering.elapsed_ms)
    );
    assert!(timings.stage_ms("merge").is_none());
}

#[test]
fn scattered_hits_are_reproducible() {
    let a = scattered_hits(0, 25, 11);
    let b = scattered_hits(0, 25, 11);
    assert_eq!(a, b);
    assert_ne!(a, scattered_hits(0, 25, 12));
    assert!(a.iter().all(|hit| (hit.layer as usize) < 4));
}

#[test]
fn full_row_of_leaf_cells_is_clustered_without_overflow() {
    let params = FinderParams {
        hough: HoughSpaceOptions {
            n_angle_sectors: 1 << 15,
            n_vertical_sectors: 4,
            vertical_size: 1.0,
            minimum_x: -1e-4,
            maximum_x: 1e-4,
        },
        layer_filter: LayerFilter::new(2),
        cluster: ClusterOptions {
            min_cluster_size: 1,
            max_cluster_size: 1 << 16,
            max_cluster_size_x: 1 << 16,
            max_cluster_size_y: 4,
        },
        merge: None,
    };
    let hits = vec![
        hit_with_curve(0, 1, 0.3, 1.0, 4.0),
        hit_with_curve(1, 2, 0.31, 1.0, 8.0),
    ];
    let mut finder = InterceptFinder::new(params).expect("finder");
    let report = finder.apply_with_report(&hits);
    assert_eq!(report.trace.intercept.active_leaf_cells, 1 << 15);
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].cluster.size, 1 << 15);
    assert_eq!(report.candidates[0].hit_ids(), vec![HitId(1), HitId(0)]);
}
