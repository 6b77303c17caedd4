//! Region assembly for the shape selector. Presentation variety only; the
//! library sees nothing but the resulting `Region`.

use graham::api::{Ellipse, Polygon, Rect, Region, Union};
use rand::Rng;

use crate::config::ShapeKind;

/// Vertex count range for `ShapeKind::Random` (min inclusive, max exclusive).
const RANDOM_VERTICES: (usize, usize) = (3, 100);

/// Build the region for `kind` inside the box `[0, width) × [0, height)`.
pub fn build<R: Rng>(kind: ShapeKind, width: i64, height: i64, rng: &mut R) -> Box<dyn Region> {
    let (w, h) = (width as f64, height as f64);
    match kind {
        ShapeKind::Square => Box::new(Rect::new(0.0, 0.0, w, h)),
        ShapeKind::Circle => Box::new(Ellipse::new(0.0, 0.0, w, h)),
        ShapeKind::Heart => Box::new(heart(0, 0, width, height)),
        ShapeKind::Triangle => Box::new(triangle(rng, 0, 0, width, height)),
        ShapeKind::Random => Box::new(random_polygon(rng, width, height)),
    }
}

/// Two lobes plus a triangle pointing at `y`. Integer arithmetic keeps the
/// proportions stable for small boxes.
pub fn heart(x: i64, y: i64, width: i64, height: i64) -> Union {
    let oval_h = height / 2;
    let oval_w = width / 2 + width / 15;
    let base_y = (y + height - oval_h + oval_h / 4) as f64;
    let mut tri = Polygon::default();
    tri.push((x + width / 30) as f64, base_y);
    tri.push((x + width - width / 30) as f64, base_y);
    tri.push((x + width / 2) as f64, y as f64);
    Union::new()
        .with(Ellipse::new(
            x as f64,
            (y + height / 2) as f64,
            oval_w as f64,
            oval_h as f64,
        ))
        .with(Ellipse::new(
            (x + width - oval_w) as f64,
            (y + height / 2) as f64,
            oval_w as f64,
            oval_h as f64,
        ))
        .with(tri)
}

/// Flat base along `y`, apex at a random x on the far edge.
pub fn triangle<R: Rng>(rng: &mut R, x: i64, y: i64, width: i64, height: i64) -> Polygon {
    let mut tri = Polygon::default();
    tri.push(x as f64, y as f64);
    tri.push((x + width) as f64, y as f64);
    tri.push((rng.gen_range(0..=width) + x) as f64, (y + height) as f64);
    tri
}

/// Random (usually self-intersecting) polygon; membership follows the even-odd rule.
pub fn random_polygon<R: Rng>(rng: &mut R, width: i64, height: i64) -> Polygon {
    let n = rng.gen_range(RANDOM_VERTICES.0..RANDOM_VERTICES.1);
    let mut poly = Polygon::default();
    for _ in 0..n {
        poly.push(
            rng.gen_range(0..width) as f64,
            rng.gen_range(0..height) as f64,
        );
    }
    poly
}
