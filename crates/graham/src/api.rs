//! Flat surface consumed by drivers (the CLI, benches, renderers).
//!
//! Everything here is a re-export; the modules stay the source of truth.

// Geometry
pub use crate::geom2::{
    cross, distance, distance_sq, in_coord_range, lowest_point, pt, turn, Point, PointSet, Turn,
    MAX_COORD,
};
// Regions
pub use crate::region::{filter_points, region_contains, Ellipse, Polygon, Rect, Region, Union};
// Sampling
pub use crate::generate::{
    generate, generate_with_rng, GenCfg, GenerateError, ReplayToken, SamplePolicy, MAX_EXTENT,
    MAX_POINT_COUNT,
};
// Hull engine
pub use crate::hull::{
    compute_hull, polar_order, HullError, HullPolygon, HullScan, HullSnapshot, Phase, PointRole,
    PolarOrder, StepEvent,
};
