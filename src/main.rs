use hough_intercept::{FinderParams, HitId, HitPoint, InterceptFinder, LayerFilter};
use nalgebra::Vector3;

fn main() {
    // Demo stub: one synthetic track through the origin, bending with R = 30.
    let (radius, direction) = (30.0f64, 0.4f64);
    let hits: Vec<HitPoint> = [3.9f64, 8.0, 10.4, 13.5]
        .iter()
        .enumerate()
        .map(|(layer, &r)| {
            let phi = direction + (r / (2.0 * radius)).acos();
            let position = Vector3::new(r * phi.cos(), r * phi.sin(), 0.0);
            HitPoint::from_position(HitId(layer as u32), layer as u8, position)
        })
        .collect();

    let mut finder = match InterceptFinder::new(FinderParams::new(LayerFilter::new(3))) {
        Ok(finder) => finder,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let report = finder.apply_with_report(&hits);
    println!(
        "candidates={} latency_ms={:.3}",
        report.candidates.len(),
        report.trace.timings.total_ms
    );
}
