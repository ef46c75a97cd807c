//! Triangle and quadrilateral refinement.
//!
//! Vertices are taken in drawing order; sides are cyclic consecutive distances.

use super::types::{ClassifyCfg, QuadKind, TriangleKind};
use crate::geom2::{angle_at, approx_eq, distance, is_parallel, Point};

/// Side lengths `|p0p1|, |p1p2|, …, |p(n-1)p0|`.
fn cyclic_sides<const N: usize>(p: &[Point; N]) -> [f64; N] {
    std::array::from_fn(|i| distance(p[i], p[(i + 1) % N]))
}

/// Some permutation of the squared sides satisfies `a² + b² = c²` within `eps`.
fn is_pythagorean(a: f64, b: f64, c: f64, eps: f64) -> bool {
    let (a2, b2, c2) = (a * a, b * b, c * c);
    approx_eq(a2 + b2, c2, eps) || approx_eq(a2 + c2, b2, eps) || approx_eq(b2 + c2, a2, eps)
}

/// Right beats isosceles: a right isosceles triangle is reported as right.
pub fn classify_triangle(t: &[Point; 3], eps: f64) -> TriangleKind {
    let [a, b, c] = cyclic_sides(t);
    if is_pythagorean(a, b, c, eps) {
        TriangleKind::Right
    } else if approx_eq(a, b, eps) || approx_eq(b, c, eps) || approx_eq(a, c, eps) {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    }
}

/// Interior angle at every vertex, in degrees.
pub fn interior_angles(q: &[Point; 4]) -> [f64; 4] {
    std::array::from_fn(|i| angle_at(q[(i + 3) % 4], q[i], q[(i + 1) % 4]))
}

/// Square → rectangle → rhombus → trapezoid → general.
pub fn classify_quadrilateral(q: &[Point; 4], cfg: &ClassifyCfg) -> QuadKind {
    let eps = cfg.eps;
    let sides = cyclic_sides(q);
    let opposite_sides_equal =
        approx_eq(sides[0], sides[2], eps) && approx_eq(sides[1], sides[3], eps);
    let all_sides_equal = sides.iter().all(|&s| approx_eq(s, sides[0], eps));
    let all_right = interior_angles(q)
        .iter()
        .all(|&a| (a - 90.0).abs() < cfg.right_angle_tol_deg);
    let has_parallel_pair =
        is_parallel(q[0], q[1], q[2], q[3], eps) || is_parallel(q[1], q[2], q[3], q[0], eps);

    if all_right && all_sides_equal {
        QuadKind::Square
    } else if all_right && opposite_sides_equal {
        QuadKind::Rectangle
    } else if all_sides_equal {
        QuadKind::Rhombus
    } else if has_parallel_pair {
        QuadKind::Trapezoid
    } else {
        QuadKind::General
    }
}
