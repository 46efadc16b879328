use super::options::HoughSpaceOptions;
use crate::error::{Axis, ConfigError};
use log::debug;

/// Hard upper bound on the derived recursion level.
pub const MAX_RECURSION_LEVEL: u32 = 14;

/// Precomputed trigonometry and bin boundaries for one Hough-space layout.
///
/// Built once per configuration and shared read-only (typically behind an
/// `Arc`) by every finder and every event using that layout.
#[derive(Clone, Debug)]
pub struct HoughSpaceTables {
    options: HoughSpaceOptions,
    max_recursion_level: u32,
    unit_x: f64,
    unit_y: f64,
    x_edges: Vec<f64>,
    sin_edges: Vec<f64>,
    cos_edges: Vec<f64>,
    x_centers: Vec<f64>,
    sin_centers: Vec<f64>,
    cos_centers: Vec<f64>,
    y_edges: Vec<f64>,
    y_centers: Vec<f64>,
}

impl HoughSpaceTables {
    pub fn new(options: &HoughSpaceOptions) -> Result<Self, ConfigError> {
        validate(options)?;
        let max_recursion_level =
            derive_recursion_level(options.n_angle_sectors, options.n_vertical_sectors);
        if max_recursion_level > MAX_RECURSION_LEVEL {
            debug!(
                "HoughSpaceTables: rejecting {}x{} sectors (recursion level {} > {})",
                options.n_angle_sectors,
                options.n_vertical_sectors,
                max_recursion_level,
                MAX_RECURSION_LEVEL
            );
            return Err(ConfigError::RecursionTooDeep {
                level: max_recursion_level,
                maximum: MAX_RECURSION_LEVEL,
            });
        }

        let n_x = options.n_angle_sectors as usize;
        let n_y = options.n_vertical_sectors as usize;
        let unit_x = (options.maximum_x - options.minimum_x) / n_x as f64;
        let unit_y = 2.0 * options.vertical_size / n_y as f64;

        let mut x_edges: Vec<f64> = (0..=n_x)
            .map(|i| options.minimum_x + unit_x * i as f64)
            .collect();
        x_edges[n_x] = options.maximum_x;
        let x_centers: Vec<f64> = x_edges[..n_x].iter().map(|x| x + 0.5 * unit_x).collect();

        let y_edges: Vec<f64> = (0..=n_y)
            .map(|j| options.vertical_size - unit_y * j as f64)
            .collect();
        let y_centers: Vec<f64> = y_edges[..n_y].iter().map(|y| y - 0.5 * unit_y).collect();

        Ok(Self {
            options: *options,
            max_recursion_level,
            unit_x,
            unit_y,
            sin_edges: x_edges.iter().map(|x| x.sin()).collect(),
            cos_edges: x_edges.iter().map(|x| x.cos()).collect(),
            sin_centers: x_centers.iter().map(|x| x.sin()).collect(),
            cos_centers: x_centers.iter().map(|x| x.cos()).collect(),
            x_edges,
            x_centers,
            y_edges,
            y_centers,
        })
    }

    pub fn options(&self) -> &HoughSpaceOptions {
        &self.options
    }

    pub fn n_angle_sectors(&self) -> u32 {
        self.options.n_angle_sectors
    }

    pub fn n_vertical_sectors(&self) -> u32 {
        self.options.n_vertical_sectors
    }

    /// Deepest recursion level; leaf cells are recorded at this level.
    pub fn max_recursion_level(&self) -> u32 {
        self.max_recursion_level
    }

    pub fn unit_x(&self) -> f64 {
        self.unit_x
    }

    pub fn unit_y(&self) -> f64 {
        self.unit_y
    }

    /// Angle at bin edge `i` (`0..=n_angle_sectors`).
    #[inline]
    pub fn x_edge(&self, i: usize) -> f64 {
        self.x_edges[i]
    }

    /// `(sin, cos)` at bin edge `i`.
    #[inline]
    pub fn edge_trig(&self, i: usize) -> (f64, f64) {
        (self.sin_edges[i], self.cos_edges[i])
    }

    /// Angle at the centre of bin `i` (`0..n_angle_sectors`).
    #[inline]
    pub fn x_center(&self, i: usize) -> f64 {
        self.x_centers[i]
    }

    /// `(sin, cos)` at the centre of bin `i`.
    #[inline]
    pub fn center_trig(&self, i: usize) -> (f64, f64) {
        (self.sin_centers[i], self.cos_centers[i])
    }

    /// Vertical coordinate of edge `j`; edge 0 is the top (`+vertical_size`).
    #[inline]
    pub fn y_edge(&self, j: usize) -> f64 {
        self.y_edges[j]
    }

    /// Vertical coordinate at the centre of bin `j`.
    #[inline]
    pub fn y_center(&self, j: usize) -> f64 {
        self.y_centers[j]
    }
}

/// `ceil(log2(max(n_x, n_y))) - 1`, clamped at zero for a single-sector grid.
pub fn derive_recursion_level(n_angle_sectors: u32, n_vertical_sectors: u32) -> u32 {
    let n = n_angle_sectors.max(n_vertical_sectors).max(1);
    let ceil_log2 = u32::BITS - (n - 1).leading_zeros();
    ceil_log2.saturating_sub(1)
}

fn validate(options: &HoughSpaceOptions) -> Result<(), ConfigError> {
    if options.n_angle_sectors == 0 {
        return Err(ConfigError::EmptyAxis { axis: Axis::Angle });
    }
    if options.n_vertical_sectors == 0 {
        return Err(ConfigError::EmptyAxis {
            axis: Axis::Vertical,
        });
    }
    if !(options.minimum_x.is_finite()
        && options.maximum_x.is_finite()
        && options.maximum_x > options.minimum_x)
    {
        return Err(ConfigError::InvalidRange {
            minimum: options.minimum_x,
            maximum: options.maximum_x,
        });
    }
    if !(options.vertical_size.is_finite() && options.vertical_size > 0.0) {
        return Err(ConfigError::InvalidVerticalSize(options.vertical_size));
    }
    Ok(())
}
