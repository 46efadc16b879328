//! Configuration errors reported when a finder is constructed.
//!
//! Everything that can go wrong at search time (empty events, hits outside
//! the Hough window, clusters out of bounds) is ordinary control flow and is
//! never surfaced as an error.

/// Axis of the discretized Hough space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Angle,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Angle => write!(f, "angle"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Reasons why a finder configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The sector counts require more subdivision levels than allowed.
    RecursionTooDeep { level: u32, maximum: u32 },
    /// An axis was configured with zero sectors.
    EmptyAxis { axis: Axis },
    /// The angular window is empty, inverted, or not finite.
    InvalidRange { minimum: f64, maximum: f64 },
    /// The vertical half-height is not a positive finite number.
    InvalidVerticalSize(f64),
    /// Cluster size bounds are empty or inverted.
    InvalidClusterBounds { minimum: usize, maximum: usize },
    /// A cluster extent of zero would reject every neighbour and every seed.
    InvalidClusterExtent { axis: Axis },
    /// The merge threshold is not a positive finite number.
    InvalidMergeThreshold(f64),
    /// Shared tables were built for a different Hough-space layout.
    TableMismatch,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::RecursionTooDeep { level, maximum } => write!(
                f,
                "derived recursion level {level} exceeds the safety bound {maximum}"
            ),
            ConfigError::EmptyAxis { axis } => write!(f, "{axis} axis needs at least one sector"),
            ConfigError::InvalidRange { minimum, maximum } => write!(
                f,
                "invalid angular range [{minimum}, {maximum}] (need finite minimum < maximum)"
            ),
            ConfigError::InvalidVerticalSize(size) => {
                write!(f, "vertical half-height must be positive and finite, got {size}")
            }
            ConfigError::InvalidClusterBounds { minimum, maximum } => write!(
                f,
                "invalid cluster size bounds (min={minimum}, max={maximum}, need 1 ≤ min ≤ max)"
            ),
            ConfigError::InvalidClusterExtent { axis } => {
                write!(f, "maximum cluster extent along the {axis} axis must be ≥ 1")
            }
            ConfigError::InvalidMergeThreshold(threshold) => {
                write!(f, "merge threshold must be positive and finite, got {threshold}")
            }
            ConfigError::TableMismatch => {
                write!(f, "shared Hough-space tables do not match the finder options")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
