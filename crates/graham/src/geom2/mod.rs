//! Exact 2D geometry on integer coordinates.
//!
//! Purpose
//! - Provide the point type and the two predicates the hull engine needs:
//!   squared/Euclidean distance and cross-product turn classification.
//! - Keep every predicate exact. Coordinates are integers and the cross
//!   product is evaluated in `i128`, so near-collinear triples never flip sign.
//!
//! Code cross-refs: `hull::{HullScan, compute_hull}`, `region::Region`

mod types;
mod util;

pub use types::{pt, Point, PointSet, Turn};
pub use util::{cross, distance, distance_sq, in_coord_range, lowest_point, turn, MAX_COORD};

#[cfg(test)]
mod tests;
