//! Scalar predicates on points: distance, orientation, angles, parallelism.
//!
//! All functions are total over finite input. Tolerant predicates take the
//! epsilon explicitly so callers can thread a `ClassifyCfg` through.

use super::types::Point;

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// Cross product of `a - o` and `b - o`. Positive when `o → a → b` turns left.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Dot product of `a - o` and `b - o`.
#[inline]
pub fn dot(o: Point, a: Point, b: Point) -> f64 {
    (a - o).dot(&(b - o))
}

/// Unsigned angle at `vertex` between the rays to `prev` and `next`, in degrees.
///
/// Uses `atan2(|cross|, dot)`, so the result lies in `[0, 180]` and stays
/// well-conditioned near 0° and 180°.
#[inline]
pub fn angle_at(prev: Point, vertex: Point, next: Point) -> f64 {
    cross(vertex, prev, next)
        .abs()
        .atan2(dot(vertex, prev, next))
        .to_degrees()
}

/// Three points on one line, within `eps` on the cross product.
#[inline]
pub fn is_collinear(a: Point, b: Point, c: Point, eps: f64) -> bool {
    cross(a, b, c).abs() < eps
}

/// Strict counter-clockwise test for `a → b → c`. No epsilon: collinear is `false`.
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Directions `a1 → a2` and `b1 → b2` are parallel (or anti-parallel) within `eps`.
#[inline]
pub fn is_parallel(a1: Point, a2: Point, b1: Point, b2: Point, eps: f64) -> bool {
    let da = a2 - a1;
    let db = b2 - b1;
    (da.x * db.y - da.y * db.x).abs() < eps
}

/// Two reals equal within `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
