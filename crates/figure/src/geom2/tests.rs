use super::*;

#[test]
fn distance_and_products() {
    assert!((distance(pt(0.0, 0.0), pt(3.0, 4.0)) - 5.0).abs() < 1e-12);
    // o→a is +x, o→b is +y: left turn.
    assert_eq!(cross(pt(1.0, 1.0), pt(2.0, 1.0), pt(1.0, 2.0)), 1.0);
    assert_eq!(cross(pt(1.0, 1.0), pt(1.0, 2.0), pt(2.0, 1.0)), -1.0);
    assert_eq!(dot(pt(1.0, 1.0), pt(3.0, 1.0), pt(2.0, 4.0)), 2.0);
}

#[test]
fn angles_in_degrees() {
    let o = pt(0.0, 0.0);
    assert!((angle_at(pt(1.0, 0.0), o, pt(0.0, 5.0)) - 90.0).abs() < 1e-12);
    assert!((angle_at(pt(1.0, 0.0), o, pt(1.0, 1.0)) - 45.0).abs() < 1e-12);
    assert!((angle_at(pt(1.0, 0.0), o, pt(-2.0, 0.0)) - 180.0).abs() < 1e-12);
    assert!(angle_at(pt(1.0, 0.0), o, pt(3.0, 0.0)).abs() < 1e-12);
    // Unsigned: clockwise and counter-clockwise give the same angle.
    assert_eq!(
        angle_at(pt(1.0, 0.0), o, pt(1.0, 1.0)),
        angle_at(pt(1.0, 0.0), o, pt(1.0, -1.0))
    );
}

#[test]
fn orientation_is_strict() {
    assert!(ccw(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)));
    assert!(!ccw(pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 0.0)));
    assert!(!ccw(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)));
}

#[test]
fn tolerant_predicates() {
    assert!(is_collinear(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0 + 1e-7), EPSILON));
    assert!(!is_collinear(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.001), EPSILON));
    assert!(is_parallel(
        pt(0.0, 0.0),
        pt(2.0, 1.0),
        pt(5.0, 5.0),
        pt(1.0, 3.0),
        EPSILON
    ));
    assert!(!is_parallel(
        pt(0.0, 0.0),
        pt(2.0, 1.0),
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        EPSILON
    ));
    assert!(approx_eq(1.0, 1.0 + 1e-6, EPSILON));
    assert!(!approx_eq(1.0, 1.0001, EPSILON));
}

#[test]
fn loop_edges_close_from_three_points() {
    assert!(loop_edges(0).is_empty());
    assert!(loop_edges(1).is_empty());
    assert_eq!(loop_edges(2), vec![Edge::new(0, 1)]);
    assert_eq!(
        loop_edges(4),
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 0)]
    );
    assert!(Edge::new(0, 1).shares_vertex(&Edge::new(1, 2)));
    assert!(!Edge::new(0, 1).shares_vertex(&Edge::new(2, 3)));
    assert_eq!(Edge::from((3, 4)), Edge::new(3, 4));
}
