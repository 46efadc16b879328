use super::{ClusterStage, InterceptStage, MergeStage, TimingBreakdown};
use crate::cluster::TrackCandidate;
use serde::Serialize;

/// Candidates of one event together with the trace that produced them.
#[derive(Clone, Debug)]
pub struct FinderReport<'h> {
    pub candidates: Vec<TrackCandidate<'h>>,
    pub trace: FinderTrace,
}

/// Stage-by-stage record of one finder invocation.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderTrace {
    pub input: EventDescriptor,
    pub timings: TimingBreakdown,
    pub intercept: InterceptStage,
    pub clustering: ClusterStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeStage>,
    pub candidates: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    pub hits: usize,
    pub n_angle_sectors: u32,
    pub n_vertical_sectors: u32,
    pub min_layers: u32,
}
