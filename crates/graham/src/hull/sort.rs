use std::cmp::Ordering;

use crate::geom2::{cross, distance_sq, Point};

/// Polar ordering around a pivot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolarOrder {
    /// Input indices: the pivot first, then the remaining points by angle and distance.
    pub ordering: Vec<usize>,
    /// Input indices of points sharing the pivot's coordinates (excluded from `ordering`).
    pub duplicates: Vec<usize>,
}

/// Sort `points` by polar angle around `points[pivot]`, ties by ascending distance.
///
/// Pre: `pivot` is the lowest point (minimum y, then minimum x). Every other
/// point then lies at an angle in `[0, π)`, where comparing by the sign of the
/// cross product is a total order and no trigonometry is needed.
pub fn polar_order(points: &[Point], pivot: usize) -> PolarOrder {
    let origin = points[pivot];
    let mut duplicates = Vec::new();
    let mut rest: Vec<usize> = Vec::with_capacity(points.len().saturating_sub(1));
    for (i, p) in points.iter().enumerate() {
        if i == pivot {
            continue;
        }
        if *p == origin {
            duplicates.push(i);
        } else {
            rest.push(i);
        }
    }
    rest.sort_by(|&a, &b| polar_cmp(&origin, &points[a], &points[b]).then(a.cmp(&b)));

    let mut ordering = Vec::with_capacity(rest.len() + 1);
    ordering.push(pivot);
    ordering.extend(rest);
    PolarOrder {
        ordering,
        duplicates,
    }
}

#[inline]
fn polar_cmp(origin: &Point, a: &Point, b: &Point) -> Ordering {
    // a before b when b is counter-clockwise of a.
    match cross(origin, a, b).cmp(&0) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => distance_sq(origin, a).cmp(&distance_sq(origin, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::pt;

    #[test]
    fn orders_by_angle_then_distance() {
        let pts = vec![pt(0, 4), pt(4, 4), pt(0, 0), pt(2, 2), pt(4, 0)];
        let order = polar_order(&pts, 2);
        let seq: Vec<Point> = order.ordering.iter().map(|&i| pts[i]).collect();
        assert_eq!(seq, vec![pt(0, 0), pt(4, 0), pt(2, 2), pt(4, 4), pt(0, 4)]);
        assert!(order.duplicates.is_empty());
    }

    #[test]
    fn pivot_copies_are_excluded() {
        let pts = vec![pt(1, 1), pt(5, 5), pt(1, 1), pt(5, 1), pt(1, 1)];
        let order = polar_order(&pts, 0);
        assert_eq!(order.ordering, vec![0, 3, 1]);
        assert_eq!(order.duplicates, vec![2, 4]);
    }

    #[test]
    fn horizontal_ray_sorts_first() {
        // Points level with the pivot have angle 0 and precede everything else.
        let pts = vec![pt(0, 0), pt(-3, 1), pt(9, 0), pt(1, 7), pt(3, 0)];
        let order = polar_order(&pts, 0);
        let seq: Vec<Point> = order.ordering.iter().map(|&i| pts[i]).collect();
        assert_eq!(seq, vec![pt(0, 0), pt(3, 0), pt(9, 0), pt(1, 7), pt(-3, 1)]);
    }

    #[test]
    fn equal_points_keep_input_order() {
        let pts = vec![pt(0, 0), pt(2, 2), pt(2, 2), pt(1, 1)];
        let order = polar_order(&pts, 0);
        assert_eq!(order.ordering, vec![0, 3, 1, 2]);
    }
}
