//! Point normalization and the whole-set collinearity check.
//!
//! Normalization is two passes:
//! 1. drop exact coordinate duplicates, keeping the first occurrence;
//! 2. one cyclic pass dropping every point collinear with its neighbours.
//!
//! Pass 2 is not iterated to a fixpoint: every point is tested
//! against its neighbours in the deduplicated list, not in the shrinking output.

use crate::geom2::{is_collinear, Point};

/// Keep the first occurrence of each exact `(x, y)`, preserving order.
pub fn dedup_exact(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !out.contains(p) {
            out.push(*p);
        }
    }
    out
}

/// Single cyclic pass removing points collinear with their predecessor and successor.
///
/// Lists with fewer than three points are returned unchanged. The list is
/// treated as a loop even if the caller draws it as an open chain.
pub fn strip_collinear(points: &[Point], eps: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            !is_collinear(prev, points[i], next, eps)
        })
        .map(|i| points[i])
        .collect()
}

/// Dedupe, then strip interior collinear points.
pub fn normalize(points: &[Point], eps: f64) -> Vec<Point> {
    strip_collinear(&dedup_exact(points), eps)
}

/// All points lie on the line through the first two. Fewer than three: `true`.
pub fn all_collinear(points: &[Point], eps: f64) -> bool {
    match points {
        [a, b, rest @ ..] if !rest.is_empty() => {
            rest.iter().all(|&c| is_collinear(*a, *b, c, eps))
        }
        _ => true,
    }
}
