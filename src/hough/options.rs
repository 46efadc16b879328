use serde::{Deserialize, Serialize};

/// Discretization of the Hough space at the finest recursion level.
///
/// - `n_angle_sectors` / `n_vertical_sectors`: bin counts along each axis.
/// - `minimum_x` / `maximum_x`: angular window in radians.
/// - `vertical_size`: half-height of the vertical axis, which spans
///   `[-vertical_size, +vertical_size]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughSpaceOptions {
    pub n_angle_sectors: u32,
    pub n_vertical_sectors: u32,
    pub vertical_size: f64,
    pub minimum_x: f64,
    pub maximum_x: f64,
}

impl Default for HoughSpaceOptions {
    fn default() -> Self {
        Self {
            n_angle_sectors: 256,
            n_vertical_sectors: 256,
            vertical_size: 0.15,
            minimum_x: -std::f64::consts::PI,
            maximum_x: std::f64::consts::PI,
        }
    }
}
