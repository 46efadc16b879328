//! Diagnostics returned alongside the candidates of one event.
//!
//! [`FinderTrace`] bundles the statistics of every stage the finder ran
//! (subdivision, clustering, the optional merge) with a timing breakdown.
//! All types serialize with camelCase field names for the demo tool's JSON
//! output.

pub mod stages;
pub mod timing;
pub mod trace;

pub use stages::{ClusterStage, InterceptStage, MergeStage};
pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{EventDescriptor, FinderReport, FinderTrace};
