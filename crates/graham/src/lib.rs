//! Convex hulls by Graham scan, with a step-wise engine for animation.
//!
//! Layout
//! - `geom2`: exact integer points and turn classification.
//! - `region`: `contains(x, y)` predicates gating sampled points.
//! - `generate`: reproducible uniform point sets in a bounding box.
//! - `hull`: the Graham scan state machine and the batch `compute_hull`.
//!
//! The engine owns no timers, threads, or I/O. Drivers pace it by calling
//! `HullScan::step` and read `HullScan::snapshot` between calls.

pub mod api;
pub mod generate;
pub mod geom2;
pub mod hull;
pub mod region;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::generate::{generate, GenCfg, GenerateError, ReplayToken, SamplePolicy};
    pub use crate::geom2::{distance, pt, turn, Point, PointSet, Turn};
    pub use crate::hull::{
        compute_hull, HullError, HullPolygon, HullScan, HullSnapshot, Phase, PointRole, StepEvent,
    };
    pub use crate::region::{region_contains, Ellipse, Polygon, Rect, Region, Union};
}
