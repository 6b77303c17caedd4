//! Point and turn types.
//!
//! - `Point`: integer position in the plane, value-equal by coordinates.
//! - `Turn`: sign of the cross product of an ordered triple.

use nalgebra::Point2;

/// Integer position in the plane.
///
/// Points carry no identity beyond their coordinates. Per-point presentation
/// state lives next to the engine (see `hull::PointRole`), never on the point.
pub type Point = Point2<i64>;

/// Ordered point sequence handed to the hull engine.
pub type PointSet = Vec<Point>;

/// Shorthand constructor used throughout tests and callers.
#[inline]
pub fn pt(x: i64, y: i64) -> Point {
    Point2::new(x, y)
}

/// Orientation of the path `p1 → p2 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Left turn (positive cross product).
    Ccw,
    /// Right turn (negative cross product).
    Cw,
    /// Exactly zero cross product.
    Collinear,
}

impl Turn {
    #[inline]
    pub fn is_convex(self) -> bool {
        !matches!(self, Turn::Cw)
    }
}
