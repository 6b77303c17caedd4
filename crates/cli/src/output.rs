//! JSON shapes emitted by the CLI.

use graham::api::{HullPolygon, HullScan, Point, PointRole, StepEvent};
use serde::Serialize;

fn xy(p: &Point) -> [i64; 2] {
    [p.x, p.y]
}

fn role_name(role: PointRole) -> &'static str {
    match role {
        PointRole::Unvisited => "unvisited",
        PointRole::Pivot => "pivot",
        PointRole::Candidate => "candidate",
        PointRole::Hull => "hull",
        PointRole::Rejected => "rejected",
    }
}

/// Finished hull as written by `hull` and printed at the end of `animate` runs.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub input_count: usize,
    pub vertex_count: usize,
    pub degenerate: bool,
    pub area: f64,
    /// Closed polygon, first vertex repeated at the end.
    pub vertices: Vec<[i64; 2]>,
}

impl HullReport {
    pub fn new(input_count: usize, hull: &HullPolygon) -> Self {
        Self {
            input_count,
            vertex_count: hull.vertex_count(),
            degenerate: hull.is_degenerate(),
            area: hull.area2() as f64 / 2.0,
            vertices: hull.vertices().iter().map(xy).collect(),
        }
    }
}

/// One animation frame: the engine snapshot plus the event that produced it.
#[derive(Debug, Serialize)]
pub struct Frame {
    pub run: u64,
    pub step: usize,
    pub phase: String,
    pub event: String,
    pub pivot: Option<[i64; 2]>,
    pub head: Option<[i64; 2]>,
    pub cursor: usize,
    pub stack: Vec<[i64; 2]>,
    /// Role of every input point, in input order.
    pub roles: Vec<&'static str>,
}

impl Frame {
    pub fn capture(run: u64, scan: &HullScan<'_>, event: Option<StepEvent>) -> Self {
        let snap = scan.snapshot();
        Self {
            run,
            step: scan.steps(),
            phase: format!("{:?}", snap.phase),
            event: event.map_or_else(|| "Start".to_string(), |e| format!("{e:?}")),
            pivot: snap.pivot.as_ref().map(xy),
            head: snap.head.as_ref().map(xy),
            cursor: snap.cursor,
            stack: snap.stack.iter().map(xy).collect(),
            roles: scan.roles().iter().copied().map(role_name).collect(),
        }
    }
}
