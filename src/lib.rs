#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod finder;
pub mod hits;
pub mod io;

// Stage modules – public for tools and tests, considered internals.
pub mod cluster;
pub mod config;
pub mod hough;
pub mod merge;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + parameters.
pub use crate::finder::{FinderParams, FinderWorkspace, InterceptFinder};
pub use crate::hits::{HitId, HitPoint};
pub use crate::hough::{HoughSpaceOptions, HoughSpaceTables, LayerFilter};
pub use crate::cluster::{ClusterOptions, TrackCandidate};
pub use crate::merge::MergeOptions;
pub use crate::error::ConfigError;

// High-level diagnostics returned by the finder.
pub use crate::diagnostics::{FinderReport, FinderTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_intercept::prelude::*;
/// use nalgebra::Vector3;
///
/// # fn main() -> Result<(), ConfigError> {
/// let hits: Vec<HitPoint> = [(3.9, 0.2), (8.0, 0.9), (10.4, 1.5), (13.5, 2.5)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(x, y))| {
///         HitPoint::from_position(HitId(i as u32), i as u8, Vector3::new(x, y, 0.0))
///     })
///     .collect();
///
/// let mut finder = InterceptFinder::new(FinderParams::new(LayerFilter::new(3)))?;
/// let report = finder.apply_with_report(&hits);
/// println!(
///     "candidates={} total_ms={:.3}",
///     report.candidates.len(),
///     report.trace.timings.total_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        ConfigError, FinderParams, HitId, HitPoint, InterceptFinder, LayerFilter, TrackCandidate,
    };
}
