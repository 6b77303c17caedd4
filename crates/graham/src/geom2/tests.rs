use super::*;

#[test]
fn turn_classification_signs() {
    let o = pt(0, 0);
    assert_eq!(turn(&o, &pt(4, 0), &pt(4, 4)), Turn::Ccw);
    assert_eq!(turn(&o, &pt(4, 4), &pt(4, 0)), Turn::Cw);
    assert_eq!(turn(&o, &pt(2, 2), &pt(5, 5)), Turn::Collinear);
    // Coincident points are collinear, not a turn.
    assert_eq!(turn(&o, &pt(3, 1), &pt(3, 1)), Turn::Collinear);
}

#[test]
fn cross_is_exact_for_large_coordinates() {
    // Products of these differences overflow i64 but not i128.
    let big = 1_i64 << 40;
    let o = pt(-big, -big);
    let a = pt(big, -big + 1);
    let b = pt(big + 2, -big + 2);
    // (2B, 1) × (2B + 2, 2) = 4B - (2B + 2)
    assert_eq!(cross(&o, &a, &b), 2 * (big as i128) - 2);
    assert_eq!(turn(&o, &pt(big, big), &pt(0, 0)), Turn::Collinear);
}

#[test]
fn distances() {
    let a = pt(1, 1);
    let b = pt(4, 5);
    assert_eq!(distance_sq(&a, &b), 25);
    assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    assert_eq!(distance_sq(&a, &a), 0);
}

#[test]
fn lowest_point_breaks_ties_by_x() {
    let pts = vec![pt(5, 1), pt(3, 2), pt(2, 1), pt(9, 1)];
    assert_eq!(lowest_point(&pts), Some(2));
    // Reordering the ties does not change which coordinates win.
    let pts = vec![pt(9, 1), pt(2, 1), pt(5, 1)];
    assert_eq!(pts[lowest_point(&pts).unwrap()], pt(2, 1));
    assert_eq!(lowest_point(&[]), None);
}

#[test]
fn convexity_helper() {
    assert!(Turn::Ccw.is_convex());
    assert!(Turn::Collinear.is_convex());
    assert!(!Turn::Cw.is_convex());
}
