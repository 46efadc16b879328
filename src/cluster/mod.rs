//! Connected-component grouping of active leaf cells into track candidates.
//!
//! Cells are scanned in `(angle, vertical)` order. Each unlabeled cell seeds
//! a depth-first search over three neighbour directions; the search merges
//! the hits of every reached cell, bounded by a maximum cell count and by a
//! maximum distance from the seed along each axis. Accepted clusters become
//! [`TrackCandidate`]s whose hits are ordered from the outermost layer in.

mod candidate;
mod finder;
mod options;

pub use candidate::{sort_outer_to_inner, ClusterSummary, TrackCandidate};
pub(crate) use candidate::emit_candidate;
pub use finder::{find_clusters, RawCluster};
pub use options::ClusterOptions;
