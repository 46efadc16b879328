use crate::error::{Axis, ConfigError};
use serde::{Deserialize, Serialize};

/// Bounds applied while grouping active leaf cells into clusters.
///
/// - `min_cluster_size` / `max_cluster_size`: accepted number of cells; the
///   search stops growing a cluster once it holds `max_cluster_size` cells.
/// - `max_cluster_size_x` / `max_cluster_size_y`: a cell joins only if its
///   distance to the seed cell is strictly below the bound on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    pub min_cluster_size: usize,
    pub max_cluster_size: usize,
    pub max_cluster_size_x: u32,
    pub max_cluster_size_y: u32,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            min_cluster_size: 3,
            max_cluster_size: 100,
            max_cluster_size_x: 16,
            max_cluster_size_y: 16,
        }
    }
}

impl ClusterOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_cluster_size == 0 || self.min_cluster_size > self.max_cluster_size {
            return Err(ConfigError::InvalidClusterBounds {
                minimum: self.min_cluster_size,
                maximum: self.max_cluster_size,
            });
        }
        if self.max_cluster_size_x == 0 {
            return Err(ConfigError::InvalidClusterExtent { axis: Axis::Angle });
        }
        if self.max_cluster_size_y == 0 {
            return Err(ConfigError::InvalidClusterExtent {
                axis: Axis::Vertical,
            });
        }
        Ok(())
    }
}
