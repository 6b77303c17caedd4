use std::cmp::Ordering;

use super::types::{Point, Turn};

/// Largest coordinate magnitude the exact predicates accept.
///
/// Coordinate differences then fit in 63 bits, so every product in `cross`
/// and `distance_sq` stays below 2^126 and their sums below `i128::MAX`.
pub const MAX_COORD: i64 = (1 << 62) - 1;

/// Whether both coordinates of `p` lie within `±MAX_COORD`.
#[inline]
pub fn in_coord_range(p: &Point) -> bool {
    p.x.unsigned_abs() <= MAX_COORD as u64 && p.y.unsigned_abs() <= MAX_COORD as u64
}

/// Cross product `(a - o) × (b - o)`, exact when all three points are
/// `in_coord_range`.
#[inline]
pub fn cross(o: &Point, a: &Point, b: &Point) -> i128 {
    let (ox, oy) = (o.x as i128, o.y as i128);
    let (ax, ay) = (a.x as i128 - ox, a.y as i128 - oy);
    let (bx, by) = (b.x as i128 - ox, b.y as i128 - oy);
    ax * by - ay * bx
}

/// Squared Euclidean distance, exact.
#[inline]
pub fn distance_sq(a: &Point, b: &Point) -> i128 {
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;
    dx * dx + dy * dy
}

/// Euclidean distance.
///
/// Only used for display and tie reporting; ordering decisions go through
/// `distance_sq` so they stay exact.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (distance_sq(a, b) as f64).sqrt()
}

/// Classify the turn `p1 → p2 → p3` by the sign of `(p2-p1) × (p3-p1)`.
#[inline]
pub fn turn(p1: &Point, p2: &Point, p3: &Point) -> Turn {
    match cross(p1, p2, p3).cmp(&0) {
        Ordering::Greater => Turn::Ccw,
        Ordering::Less => Turn::Cw,
        Ordering::Equal => Turn::Collinear,
    }
}

/// Index of the lowest point: minimum y, ties broken by minimum x.
///
/// Among exact duplicates the first occurrence wins, so the result only
/// depends on coordinates and not on how the caller ordered equal points.
pub fn lowest_point(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(ia, a), (ib, b)| a.y.cmp(&b.y).then(a.x.cmp(&b.x)).then(ia.cmp(ib)))
        .map(|(i, _)| i)
}
