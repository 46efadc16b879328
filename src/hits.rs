//! Hit model consumed by the intercept finder.
//!
//! A [`HitPoint`] carries the detector layer, the spatial position (used only
//! for the final outer-to-inner ordering) and the conformal coordinates that
//! define the hit's sinusoid in Hough space:
//!
//! `y(x) = x'·cos(x) + y'·sin(x)`
//!
//! Conformal mapping `(x', y') = 2·(x, y) / (x² + y²)` turns circles through
//! the origin into straight lines, so every hit of a track originating at the
//! beam axis produces a curve through the same Hough-space point: the track
//! direction on the angle axis and `1/R` on the vertical axis.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Identity of a hit inside one event, handed back to the caller in candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitId(pub u32);

/// Detector hit with precomputed conformal coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitPoint {
    pub id: HitId,
    pub layer: u8,
    pub position: Vector3<f64>,
    pub x_conformal: f64,
    pub y_conformal: f64,
}

impl HitPoint {
    pub fn new(
        id: HitId,
        layer: u8,
        position: Vector3<f64>,
        x_conformal: f64,
        y_conformal: f64,
    ) -> Self {
        Self {
            id,
            layer,
            position,
            x_conformal,
            y_conformal,
        }
    }

    /// Builds a hit from its spatial position using the conformal mapping.
    ///
    /// A hit on the axis has no finite image; its coordinates become
    /// non-finite and its curve fails every containment test downstream.
    pub fn from_position(id: HitId, layer: u8, position: Vector3<f64>) -> Self {
        let [x_conformal, y_conformal] = conformal_map(position.x, position.y);
        Self::new(id, layer, position, x_conformal, y_conformal)
    }

    /// Transverse distance from the detector axis.
    pub fn radius(&self) -> f64 {
        self.position.x.hypot(self.position.y)
    }

    /// Curve value `x'·cos + y'·sin` for a precomputed angle.
    #[inline]
    pub fn curve_value(&self, sin: f64, cos: f64) -> f64 {
        self.x_conformal * cos + self.y_conformal * sin
    }

    /// Slope of the curve, `-x'·sin + y'·cos`, for a precomputed angle.
    #[inline]
    pub fn curve_slope(&self, sin: f64, cos: f64) -> f64 {
        -self.x_conformal * sin + self.y_conformal * cos
    }
}

/// Maps `(x, y)` to `2·(x, y) / (x² + y²)`.
#[inline]
pub fn conformal_map(x: f64, y: f64) -> [f64; 2] {
    let r2 = x * x + y * y;
    [2.0 * x / r2, 2.0 * y / r2]
}
