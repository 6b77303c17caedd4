//! Region predicates that gate which sampled points are admissible.
//!
//! Purpose
//! - A `Region` is an opaque `contains(x, y)` predicate over a closed planar
//!   area. The generator only ever asks that question; it never inspects shape.
//! - A few generic primitives (`Rect`, `Ellipse`, `Polygon`, `Union`) are
//!   provided so callers can assemble compound areas without a graphics stack.
//!
//! Conventions
//! - Coordinates are `f64` so integer points and analytic shapes share one test.
//! - `Rect` is half-open on its max edges, `Ellipse` is closed, `Polygon`
//!   uses the even-odd rule (self-intersecting vertex lists are allowed).

use nalgebra::Vector2;

use crate::geom2::Point;

/// Predicate describing a planar area.
pub trait Region {
    fn contains(&self, x: f64, y: f64) -> bool;
}

impl<F> Region for F
where
    F: Fn(f64, f64) -> bool,
{
    #[inline]
    fn contains(&self, x: f64, y: f64) -> bool {
        self(x, y)
    }
}

/// Whether `p` lies in `region`.
#[inline]
pub fn region_contains<R: Region + ?Sized>(region: &R, p: &Point) -> bool {
    region.contains(p.x as f64, p.y as f64)
}

/// Keep only the points inside `region`, preserving order. Rejected points
/// are dropped, not replaced.
pub fn filter_points<R: Region + ?Sized>(points: &[Point], region: &R) -> Vec<Point> {
    points
        .iter()
        .filter(|p| region_contains(region, p))
        .copied()
        .collect()
}

/// Axis-aligned rectangle `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Region for Rect {
    #[inline]
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Axis-aligned ellipse inscribed in the box at `(x, y)` of the given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Region for Ellipse {
    fn contains(&self, x: f64, y: f64) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        let u = (x - (self.x + rx)) / rx;
        let v = (y - (self.y + ry)) / ry;
        u * u + v * v <= 1.0
    }
}

/// Closed polygon given by its vertex list (implicitly closed).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }

    /// Build from integer points, e.g. a finished hull.
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            vertices: points
                .iter()
                .map(|p| Vector2::new(p.x as f64, p.y as f64))
                .collect(),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.vertices.push(Vector2::new(x, y));
    }
}

impl Region for Polygon {
    /// Even-odd crossing test against a horizontal ray towards +x.
    fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > y) != (b.y > y) {
                let x_cross = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
                if x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Compound area: a point is inside if any member contains it.
#[derive(Default)]
pub struct Union {
    parts: Vec<Box<dyn Region>>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, part: impl Region + 'static) -> Self {
        self.parts.push(Box::new(part));
        self
    }

    pub fn add(&mut self, part: impl Region + 'static) {
        self.parts.push(Box::new(part));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Region for Union {
    fn contains(&self, x: f64, y: f64) -> bool {
        self.parts.iter().any(|r| r.contains(x, y))
    }
}

impl std::fmt::Debug for Union {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Union")
            .field("parts", &self.parts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::pt;

    #[test]
    fn rect_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.99, 4.99));
        assert!(!r.contains(10.0, 2.0));
        assert!(!r.contains(3.0, 5.0));
        assert!(!r.contains(-0.01, 1.0));
    }

    #[test]
    fn ellipse_membership() {
        let e = Ellipse::new(0.0, 0.0, 10.0, 4.0);
        assert!(e.contains(5.0, 2.0));
        assert!(e.contains(0.0, 2.0)); // boundary
        assert!(!e.contains(0.5, 0.5)); // corner of bounding box
        assert!(!Ellipse::new(0.0, 0.0, 0.0, 4.0).contains(0.0, 2.0));
    }

    #[test]
    fn polygon_even_odd() {
        let tri = Polygon::from_points(&[pt(0, 0), pt(10, 0), pt(0, 10)]);
        assert!(tri.contains(2.0, 2.0));
        assert!(!tri.contains(8.0, 8.0));
        // Bow-tie: the two lobes are inside, the crossing region is not doubled.
        let mut bow = Polygon::default();
        bow.push(0.0, 0.0);
        bow.push(10.0, 10.0);
        bow.push(10.0, 0.0);
        bow.push(0.0, 10.0);
        assert!(bow.contains(1.0, 5.0));
        assert!(bow.contains(9.0, 5.0));
        assert!(!bow.contains(5.0, 1.0));
        // Degenerate vertex lists contain nothing.
        assert!(!Polygon::from_points(&[pt(0, 0), pt(1, 1)]).contains(0.5, 0.5));
    }

    #[test]
    fn union_and_closures() {
        let u = Union::new()
            .with(Rect::new(0.0, 0.0, 1.0, 1.0))
            .with(|x: f64, y: f64| x > 5.0 && y > 5.0);
        assert_eq!(u.len(), 2);
        assert!(u.contains(0.5, 0.5));
        assert!(u.contains(6.0, 6.0));
        assert!(!u.contains(3.0, 3.0));
        assert!(!Union::new().contains(0.0, 0.0));
    }

    #[test]
    fn filter_keeps_order_and_drops_outside() {
        let pts = vec![pt(1, 1), pt(20, 1), pt(2, 2), pt(3, 30)];
        let kept = filter_points(&pts, &Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(kept, vec![pt(1, 1), pt(2, 2)]);
        assert!(region_contains(&Rect::new(0.0, 0.0, 2.0, 2.0), &pt(1, 1)));
    }
}
