use hough_intercept::config::hough_demo;
use hough_intercept::diagnostics::FinderTrace;
use hough_intercept::io::{cell_records, load_hits, write_json_file, CandidateRecord};
use hough_intercept::InterceptFinder;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HoughDemoResult {
    candidates: Vec<CandidateRecord>,
    trace: FinderTrace,
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = hough_demo::load_config(Path::new(&config_path))?;

    let hits = load_hits(&config.input)?;
    let mut finder = InterceptFinder::new(config.finder)
        .map_err(|e| format!("Invalid finder parameters: {e}"))?;
    let report = finder.apply_with_report(&hits);

    let trace = &report.trace;
    println!(
        "Hits: {}  active cells: {}  clusters: {}/{}  candidates: {}",
        trace.input.hits,
        trace.intercept.active_leaf_cells,
        trace.clustering.clusters_kept,
        trace.clustering.clusters_seeded,
        trace.candidates
    );
    let stages = trace
        .timings
        .stages
        .iter()
        .map(|stage| format!("{}={:.3}", stage.label, stage.elapsed_ms))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Timings (ms): {stages} total={:.3}", trace.timings.total_ms);

    if config.output.print_candidates {
        for (i, candidate) in report.candidates.iter().enumerate() {
            let ids: Vec<String> = candidate
                .hit_ids()
                .iter()
                .map(|id| id.0.to_string())
                .collect();
            println!(
                "  #{i}: x={:.4} y={:.4} cells={} hits=[{}]",
                candidate.cluster.hough_center[0],
                candidate.cluster.hough_center[1],
                candidate.cluster.size,
                ids.join(", ")
            );
        }
    }

    let result = HoughDemoResult {
        candidates: report.candidates.iter().map(CandidateRecord::from).collect(),
        trace: report.trace.clone(),
    };
    write_json_file(&config.output.result_json, &result)?;
    println!("Result written to {}", config.output.result_json.display());

    if let Some(path) = &config.output.cells_json {
        write_json_file(path, &cell_records(finder.active_cells(), &hits))?;
        println!("Active cells written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: hough_demo <config.json>".to_string()
}
