use hough_intercept::{HitId, HitPoint};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Transverse radii of a small four-layer barrel.
pub const LAYER_RADII: [f64; 4] = [3.9, 8.0, 10.4, 13.5];

/// Hits of a track leaving the origin along a circle of `radius` whose
/// centre lies in `direction`. Layer `i` sits at `LAYER_RADII[i]`.
///
/// All curves cross the Hough-space point `(direction, 1 / radius)` on their
/// rising branch.
pub fn circle_track(first_id: u32, direction: f64, radius: f64) -> Vec<HitPoint> {
    assert!(2.0 * radius > LAYER_RADII[3], "track must reach the outer layer");
    LAYER_RADII
        .iter()
        .enumerate()
        .map(|(layer, &r)| {
            let phi = direction + (r / (2.0 * radius)).acos();
            let position = Vector3::new(r * phi.cos(), r * phi.sin(), 0.5 * r);
            HitPoint::from_position(HitId(first_id + layer as u32), layer as u8, position)
        })
        .collect()
}

/// Deterministic scatter of `count` hits over the barrel layers.
pub fn scattered_hits(first_id: u32, count: usize, seed: u64) -> Vec<HitPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let layer = rng.random_range(0..LAYER_RADII.len());
            let r = LAYER_RADII[layer];
            let phi = rng.random_range(-PI..PI);
            let position = Vector3::new(r * phi.cos(), r * phi.sin(), 0.0);
            HitPoint::from_position(HitId(first_id + i as u32), layer as u8, position)
        })
        .collect()
}

/// Hit with explicit conformal coordinates; `radius` only affects ordering.
pub fn hit_with_curve(
    id: u32,
    layer: u8,
    x_conformal: f64,
    y_conformal: f64,
    radius: f64,
) -> HitPoint {
    HitPoint::new(
        HitId(id),
        layer,
        Vector3::new(radius, 0.0, 0.0),
        x_conformal,
        y_conformal,
    )
}
