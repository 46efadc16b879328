//! Parameters configuring one intercept finder.
//!
//! Groups the Hough-space layout, the layer filter, the cluster bounds, and
//! the optional candidate merge. Only the layer filter has no default: a
//! configuration file must always state `min_layers`.

use crate::cluster::ClusterOptions;
use crate::error::ConfigError;
use crate::hough::{HoughSpaceOptions, LayerFilter};
use crate::merge::MergeOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinderParams {
    /// Discretization and angular window of the Hough space.
    #[serde(default)]
    pub hough: HoughSpaceOptions,
    /// Distinct-layer threshold for active cells.
    pub layer_filter: LayerFilter,
    /// Size and extent bounds for clusters.
    #[serde(default)]
    pub cluster: ClusterOptions,
    /// Candidate merge; disabled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeOptions>,
}

impl FinderParams {
    /// Default layout and cluster bounds with the given layer threshold.
    pub fn new(layer_filter: LayerFilter) -> Self {
        Self {
            hough: HoughSpaceOptions::default(),
            layer_filter,
            cluster: ClusterOptions::default(),
            merge: None,
        }
    }

    /// Checks the cluster and merge settings. The Hough-space layout is
    /// checked when its tables are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cluster.validate()?;
        if let Some(merge) = &self.merge {
            merge.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_filter_is_required_in_json() {
        let missing = serde_json::from_str::<FinderParams>(r#"{ "cluster": {} }"#);
        assert!(missing.is_err());

        let params: FinderParams =
            serde_json::from_str(r#"{ "layer_filter": { "min_layers": 4 } }"#).expect("parse");
        assert_eq!(params, FinderParams::new(LayerFilter::new(4)));
        assert!(params.merge.is_none());
    }

    #[test]
    fn invalid_merge_threshold_is_rejected() {
        let params = FinderParams {
            merge: Some(MergeOptions::new(-0.1)),
            ..FinderParams::new(LayerFilter::new(3))
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidMergeThreshold(-0.1))
        );
    }
}
