//! Engine-facing value types: phases, roles, step events, snapshots, results.

use std::fmt;

use crate::geom2::{cross, in_coord_range, Point, MAX_COORD};

/// Lifecycle of one hull run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Sorting,
    Scanning,
    Complete,
}

/// Rendering role of an input point, tracked alongside the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointRole {
    #[default]
    Unvisited,
    /// Scan origin.
    Pivot,
    /// Currently on the stack, may still be popped.
    Candidate,
    /// Vertex of the finished hull.
    Hull,
    /// Popped from the stack or dropped as a copy of the pivot.
    Rejected,
}

/// What a single call to `HullScan::step` did. Indices refer to the input slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    PivotSelected { pivot: usize },
    Sorted { len: usize, duplicates: usize },
    /// Convex turn (or empty stack floor): `head` pushed, cursor advanced.
    Accepted { head: usize },
    /// Collinear turn: `dropped` discarded, `head` pushed, cursor advanced.
    Collapsed { dropped: usize, head: usize },
    /// Reflex turn: `dropped` discarded, `head` will be examined again.
    Rejected { dropped: usize, head: usize },
    /// Pivot pushed again; the polygon is closed.
    Closed,
    /// Step requested after completion; nothing changed.
    Idle,
}

/// Read-only copy of the engine state for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullSnapshot {
    pub phase: Phase,
    pub pivot: Option<Point>,
    pub stack: Vec<Point>,
    pub cursor: usize,
    /// Next point to be examined, if any.
    pub head: Option<Point>,
    pub ordering_len: usize,
}

/// Finished hull: counter-clockwise vertices, first vertex repeated at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullPolygon {
    vertices: Vec<Point>,
}

impl HullPolygon {
    pub(crate) fn from_closed(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 2 && vertices.first() == vertices.last());
        Self { vertices }
    }

    /// Closed vertex sequence (`first == last`).
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex sequence without the closing duplicate.
    #[inline]
    pub fn open_vertices(&self) -> &[Point] {
        &self.vertices[..self.vertices.len().saturating_sub(1)]
    }

    /// Number of distinct hull vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.open_vertices().len()
    }

    /// A single point or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertex_count() < 3
    }

    /// The pivot: first (and last) vertex.
    #[inline]
    pub fn pivot(&self) -> Option<&Point> {
        self.vertices.first()
    }

    /// Twice the signed area; positive for a proper hull.
    ///
    /// Fans out from the pivot, so every term is non-negative and no partial
    /// sum exceeds the total.
    pub fn area2(&self) -> i128 {
        let Some((o, rest)) = self.open_vertices().split_first() else {
            return 0;
        };
        rest.windows(2).map(|w| cross(o, &w[0], &w[1])).sum()
    }

    /// Whether `p` lies inside or on the boundary. Exact.
    pub fn contains(&self, p: &Point) -> bool {
        // Every vertex is in range, so an out-of-range point is outside.
        if !in_coord_range(p) {
            return false;
        }
        let v = self.open_vertices();
        match v.len() {
            0 => false,
            1 => v[0] == *p,
            2 => {
                cross(&v[0], &v[1], p) == 0
                    && p.x >= v[0].x.min(v[1].x)
                    && p.x <= v[0].x.max(v[1].x)
                    && p.y >= v[0].y.min(v[1].y)
                    && p.y <= v[0].y.max(v[1].y)
            }
            n => (0..n).all(|i| cross(&v[i], &v[(i + 1) % n], p) >= 0),
        }
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

/// Errors surfaced by the hull engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    InsufficientPoints { got: usize },
    /// A coordinate exceeds `±MAX_COORD`, where the exact predicates overflow.
    CoordinateOutOfRange { index: usize, point: Point },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { got } => {
                write!(f, "need at least one point to build a hull, got {got}")
            }
            HullError::CoordinateOutOfRange { index, point } => write!(
                f,
                "point {index} at ({}, {}) is outside the supported range ±{MAX_COORD}",
                point.x, point.y
            ),
        }
    }
}

impl std::error::Error for HullError {}
