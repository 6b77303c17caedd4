use crate::geom2::{in_coord_range, lowest_point, turn, Point, Turn};

use super::sort::polar_order;
use super::types::{HullError, HullPolygon, HullSnapshot, Phase, PointRole, StepEvent};

/// Resumable Graham scan over a borrowed point set.
///
/// Invariants while `Scanning`:
/// - `stack[0]` is the pivot and is never popped.
/// - Consecutive triples on `stack` never turn clockwise.
/// - `stack` holds no two points with equal coordinates.
///
/// Drive it with `step` (or iterate it) for animation, or call `finish` for
/// the batch result. A scan is single-use: once `Complete`, further steps are
/// no-ops and a new run needs a new `HullScan`.
#[derive(Clone, Debug)]
pub struct HullScan<'a> {
    points: &'a [Point],
    phase: Phase,
    pivot: Option<usize>,
    ordering: Vec<usize>,
    stack: Vec<usize>,
    cursor: usize,
    roles: Vec<PointRole>,
    result: Option<HullPolygon>,
    steps: usize,
}

impl<'a> HullScan<'a> {
    /// Fresh state for `points`. Fails on an empty set or on a coordinate
    /// beyond `±MAX_COORD`.
    pub fn new(points: &'a [Point]) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::InsufficientPoints { got: 0 });
        }
        if let Some(index) = points.iter().position(|p| !in_coord_range(p)) {
            return Err(HullError::CoordinateOutOfRange {
                index,
                point: points[index],
            });
        }
        Ok(Self {
            points,
            phase: Phase::NotStarted,
            pivot: None,
            ordering: Vec::new(),
            stack: Vec::new(),
            cursor: 0,
            roles: vec![PointRole::Unvisited; points.len()],
            result: None,
            steps: 0,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    #[inline]
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    #[inline]
    pub fn pivot(&self) -> Option<Point> {
        self.pivot.map(|i| self.points[i])
    }

    /// Index of the next point to examine within `ordering`.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Polar ordering as input indices (empty before sorting).
    #[inline]
    pub fn ordering(&self) -> &[usize] {
        &self.ordering
    }

    /// Current stack as input indices, bottom first.
    #[inline]
    pub fn stack_indices(&self) -> &[usize] {
        &self.stack
    }

    /// Current stack as points, bottom first.
    pub fn stack(&self) -> Vec<Point> {
        self.stack.iter().map(|&i| self.points[i]).collect()
    }

    /// Per-input-point rendering roles.
    #[inline]
    pub fn roles(&self) -> &[PointRole] {
        &self.roles
    }

    /// Number of non-idle steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Finished hull, available once `Complete`.
    #[inline]
    pub fn result(&self) -> Option<&HullPolygon> {
        self.result.as_ref()
    }

    pub fn snapshot(&self) -> HullSnapshot {
        HullSnapshot {
            phase: self.phase,
            pivot: self.pivot(),
            stack: self.stack(),
            cursor: self.cursor,
            head: self.ordering.get(self.cursor).map(|&i| self.points[i]),
            ordering_len: self.ordering.len(),
        }
    }

    /// Advance exactly one unit of work.
    pub fn step(&mut self) -> StepEvent {
        let event = match self.phase {
            Phase::NotStarted => self.select_pivot(),
            Phase::Sorting => self.sort(),
            Phase::Scanning => self.scan_one(),
            Phase::Complete => return StepEvent::Idle,
        };
        self.steps += 1;
        tracing::trace!(step = self.steps, ?event, stack = self.stack.len(), "hull step");
        event
    }

    /// Step until `Complete`; returns the number of steps taken by this call.
    pub fn run_to_completion(&mut self) -> usize {
        let before = self.steps;
        while !self.is_complete() {
            self.step();
        }
        self.steps - before
    }

    /// Run to completion and hand out the hull.
    pub fn finish(mut self) -> HullPolygon {
        self.run_to_completion();
        self.result
            .take()
            .unwrap_or_else(|| HullPolygon::from_closed(self.stack()))
    }

    fn select_pivot(&mut self) -> StepEvent {
        let Some(pivot) = lowest_point(self.points) else {
            // Unreachable through `new`, which rejects empty input.
            self.phase = Phase::Complete;
            return StepEvent::Idle;
        };
        self.pivot = Some(pivot);
        self.roles[pivot] = PointRole::Pivot;
        self.phase = Phase::Sorting;
        StepEvent::PivotSelected { pivot }
    }

    fn sort(&mut self) -> StepEvent {
        let Some(pivot) = self.pivot else {
            self.phase = Phase::Complete;
            return StepEvent::Idle;
        };
        let order = polar_order(self.points, pivot);
        for &d in &order.duplicates {
            self.roles[d] = PointRole::Rejected;
        }
        self.ordering = order.ordering;
        self.stack = self.ordering.iter().take(2).copied().collect();
        if let Some(&second) = self.stack.get(1) {
            self.roles[second] = PointRole::Candidate;
        }
        self.cursor = self.stack.len();
        self.phase = Phase::Scanning;
        tracing::debug!(
            pivot = ?self.points[pivot],
            len = self.ordering.len(),
            duplicates = order.duplicates.len(),
            "polar order ready"
        );
        StepEvent::Sorted {
            len: self.ordering.len(),
            duplicates: order.duplicates.len(),
        }
    }

    fn scan_one(&mut self) -> StepEvent {
        let Some(&head) = self.ordering.get(self.cursor) else {
            return self.close();
        };
        let n = self.stack.len();
        if n < 2 {
            // Floor: the pivot alone is never popped, so just extend.
            self.stack.push(head);
            self.roles[head] = PointRole::Candidate;
            self.cursor += 1;
            return StepEvent::Accepted { head };
        }
        let (tail, middle) = (self.stack[n - 2], self.stack[n - 1]);
        self.stack.truncate(n - 1);
        let p = self.points;
        match turn(&p[tail], &p[middle], &p[head]) {
            Turn::Ccw => {
                self.stack.push(middle);
                self.stack.push(head);
                self.roles[head] = PointRole::Candidate;
                self.cursor += 1;
                StepEvent::Accepted { head }
            }
            Turn::Collinear => {
                self.stack.push(head);
                self.roles[middle] = PointRole::Rejected;
                self.roles[head] = PointRole::Candidate;
                self.cursor += 1;
                StepEvent::Collapsed {
                    dropped: middle,
                    head,
                }
            }
            Turn::Cw => {
                self.roles[middle] = PointRole::Rejected;
                StepEvent::Rejected {
                    dropped: middle,
                    head,
                }
            }
        }
    }

    fn close(&mut self) -> StepEvent {
        let Some(&pivot) = self.stack.first() else {
            self.phase = Phase::Complete;
            return StepEvent::Idle;
        };
        self.stack.push(pivot);
        for &i in &self.stack[1..self.stack.len() - 1] {
            self.roles[i] = PointRole::Hull;
        }
        self.result = Some(HullPolygon::from_closed(self.stack()));
        self.phase = Phase::Complete;
        tracing::debug!(
            vertices = self.stack.len() - 1,
            steps = self.steps + 1,
            "hull closed"
        );
        StepEvent::Closed
    }
}

/// Drives the scan one event at a time; ends after the closing step.
impl Iterator for HullScan<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.is_complete() {
            None
        } else {
            Some(self.step())
        }
    }
}

/// Convex hull of `points` as a closed counter-clockwise polygon.
///
/// Degenerate inputs are returned as-is rather than rejected: one distinct
/// point gives `[p, p]`, collinear points give `[a, b, a]` with `a`, `b` the
/// extremes. Only an empty input or an out-of-range coordinate is an error.
pub fn compute_hull(points: &[Point]) -> Result<HullPolygon, HullError> {
    Ok(HullScan::new(points)?.finish())
}
