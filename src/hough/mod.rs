//! Recursive Hough-space intercept search.
//!
//! Every hit is a sinusoid `y(x) = x'·cos(x) + y'·sin(x)` in a 2D space of
//! angle `x` and vertical offset `y`. Curves of hits from one track meet near
//! a common point, so the search looks for small cells crossed by curves from
//! enough distinct detector layers.
//!
//! Pipeline
//! - Lookup tables: sine/cosine at every angle-bin edge and centre, and the
//!   vertical bin edges, built once per layout ([`HoughSpaceTables`]).
//! - Subdivision: starting from the whole space, each cell is bisected along
//!   both axes. A hit contributes to a child when its curve is on the rising
//!   branch and a three-point sample (left edge, centre, right edge) places it
//!   inside the child's vertical band.
//! - Layer filter: a child is active when its hits cover at least
//!   `min_layers` distinct layers ([`LayerFilter`]). Active children recurse
//!   until the deepest level, where they are recorded as leaf cells in
//!   [`ActiveCells`].
//!
//! Notes
//! - The rising-branch restriction and the three-point approximation are
//!   intentional: they trade exact boundary crossings for fewer evaluations.
//! - The same hit may populate many leaf cells; clustering resolves that.
//! - Recursion depth is bounded by [`MAX_RECURSION_LEVEL`].

mod cells;
mod interceptor;
mod layers;
mod options;
mod tables;

pub use cells::{ActiveCell, ActiveCells, CellIndex, CellLabel};
pub use interceptor::find_active_cells;
pub use layers::{LayerFilter, LayerSet};
pub use options::HoughSpaceOptions;
pub use tables::{derive_recursion_level, HoughSpaceTables, MAX_RECURSION_LEVEL};
