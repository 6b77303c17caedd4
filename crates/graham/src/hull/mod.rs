//! Graham scan as a steppable state machine.
//!
//! Purpose
//! - Compute the convex hull of a fixed point set and expose every
//!   intermediate stack so a driver can render or pause between steps.
//! - `compute_hull` is the batch entry point; `HullScan` is the resumable one.
//!
//! Model
//! - Phases run `NotStarted → Sorting → Scanning → Complete`, one transition
//!   per step, never skipping a phase.
//! - Pivot: minimum y, ties broken by minimum x. Copies of the pivot are
//!   dropped from the ordering.
//! - Ordering: polar angle around the pivot (exact cross-product comparison),
//!   ties by ascending distance.
//! - Scan: CCW keeps the middle vertex, Collinear drops it, CW drops it and
//!   re-examines the same head. The pivot is never popped.
//! - Output: counter-clockwise closed polygon starting and ending at the pivot,
//!   extreme points only.
//!
//! Code cross-refs: `geom2::{turn, cross, lowest_point}`, `generate::generate`

mod scan;
mod sort;
mod types;

pub use scan::{compute_hull, HullScan};
pub use sort::{polar_order, PolarOrder};
pub use types::{HullError, HullPolygon, HullSnapshot, Phase, PointRole, StepEvent};
