use super::cells::{ActiveCells, CellIndex};
use super::layers::{LayerFilter, LayerSet};
use super::tables::HoughSpaceTables;
use crate::diagnostics::InterceptStage;
use crate::hits::HitPoint;
use std::time::Instant;

/// Curve of one hit sampled at the edges and centre of an angle sub-range.
#[derive(Clone, Copy)]
struct CurveSample {
    hit: usize,
    left: f64,
    right: f64,
    center: f64,
}

impl CurveSample {
    /// Three-point containment test against `[lower, upper]`.
    ///
    /// Accepts a curve that crosses the cell between the sampled edges, or
    /// whose centre sample lies on the near side while both edges lie on the
    /// far side of one boundary.
    #[inline]
    fn within(&self, lower: f64, upper: f64) -> bool {
        (self.left <= upper && self.right >= lower)
            || (self.center <= upper && self.left >= lower && self.right >= lower)
            || (self.center >= lower && self.left <= upper && self.right <= upper)
    }
}

struct Interceptor<'a> {
    tables: &'a HoughSpaceTables,
    filter: LayerFilter,
    hits: &'a [HitPoint],
    cells: &'a mut ActiveCells,
    stage: InterceptStage,
}

impl Interceptor<'_> {
    fn recurse(
        &mut self,
        contained: &[usize],
        x_range: (usize, usize),
        y_range: (usize, usize),
        recursion: u32,
    ) {
        let max_level = self.tables.max_recursion_level();
        if recursion == max_level + 1 {
            return;
        }
        self.stage.recursion_calls += 1;

        let (xmin, xmax) = x_range;
        let (ymin, ymax) = y_range;
        // Integer midpoints; a width-1 range collapses one child to zero width.
        let center_x = xmin + (xmax - xmin) / 2;
        let center_y = ymin + (ymax - ymin) / 2;
        let x_bounds = [xmin, center_x, xmax];
        let y_bounds = [ymin, center_y, ymax];

        let mut samples: Vec<CurveSample> = Vec::with_capacity(contained.len());
        let mut layers = LayerSet::default();

        for i in 0..2 {
            let (left, right) = (x_bounds[i], x_bounds[i + 1]);
            if left == right {
                continue;
            }
            let (sin_left, cos_left) = self.tables.edge_trig(left);
            let (sin_right, cos_right) = self.tables.edge_trig(right);
            let (sin_center, cos_center) = self.tables.center_trig((left + right) / 2);

            samples.clear();
            for &idx in contained {
                let hit = &self.hits[idx];
                // Rising branch only.
                if hit.curve_slope(sin_left, cos_left) < 0.0
                    && hit.curve_slope(sin_right, cos_right) < 0.0
                    && hit.curve_slope(sin_center, cos_center) < 0.0
                {
                    continue;
                }
                samples.push(CurveSample {
                    hit: idx,
                    left: hit.curve_value(sin_left, cos_left),
                    right: hit.curve_value(sin_right, cos_right),
                    center: hit.curve_value(sin_center, cos_center),
                });
            }

            for j in 0..2 {
                let (lower, upper) = (y_bounds[j], y_bounds[j + 1]);
                if lower == upper {
                    continue;
                }
                self.stage.cells_evaluated += 1;
                // Vertical edges descend: the lower index is the upper coordinate.
                let upper_coord = self.tables.y_edge(lower);
                let lower_coord = self.tables.y_edge(upper);

                layers.clear();
                let mut child_hits = Vec::new();
                for sample in &samples {
                    if sample.within(lower_coord, upper_coord) {
                        layers.insert(self.hits[sample.hit].layer);
                        child_hits.push(sample.hit);
                    }
                }

                let layer_count = self.filter.apply(&layers);
                if layer_count == 0 {
                    continue;
                }
                self.stage.active_cells_total += 1;
                if recursion < max_level {
                    self.recurse(&child_hits, (left, right), (lower, upper), recursion + 1);
                } else {
                    self.cells.insert(
                        CellIndex::new(left as u32, lower as u32),
                        layer_count,
                        child_hits,
                    );
                }
            }
        }
    }
}

/// Runs the recursive subdivision over the whole Hough space.
///
/// Active leaf cells are inserted into `cells`, which the caller is expected
/// to have cleared. Returns the stage statistics.
pub fn find_active_cells(
    tables: &HoughSpaceTables,
    filter: LayerFilter,
    hits: &[HitPoint],
    cells: &mut ActiveCells,
) -> InterceptStage {
    let t0 = Instant::now();
    let all: Vec<usize> = (0..hits.len()).collect();
    let mut interceptor = Interceptor {
        tables,
        filter,
        hits,
        cells,
        stage: InterceptStage {
            hits_total: hits.len(),
            max_recursion_level: tables.max_recursion_level(),
            ..InterceptStage::default()
        },
    };
    interceptor.recurse(
        &all,
        (0, tables.n_angle_sectors() as usize),
        (0, tables.n_vertical_sectors() as usize),
        0,
    );
    let mut stage = interceptor.stage;
    stage.active_leaf_cells = cells.len();
    stage.elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    stage
}
