//! Pairwise self-intersection test over an edge list.
//!
//! Only proper crossings between non-adjacent edges count. Edges are adjacent
//! when they are consecutive in the list, when they are the first and last
//! edge (the closing edge of a loop), or when they share a vertex index.

use crate::error::FigureError;
use crate::geom2::{ccw, Edge, Point};

/// Adjacency of the edges at list positions `i` and `j` (order-insensitive).
///
/// # Panics
/// If `i` or `j` is not a position in `edges`.
pub fn are_adjacent(edges: &[Edge], i: usize, j: usize) -> bool {
    let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
    hi - lo == 1 || (lo == 0 && hi + 1 == edges.len()) || edges[lo].shares_vertex(&edges[hi])
}

/// Proper crossing of segments `a–b` and `c–d`.
///
/// Segments that share an endpoint coordinate never cross. Orientation is
/// strict, so fully collinear segments (touching or overlapping) never cross.
pub fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    if a == c || a == d || b == c || b == d {
        return false;
    }
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Resolve every edge against `points`, failing on the first bad index.
pub fn resolve_edges(points: &[Point], edges: &[Edge]) -> Result<Vec<(Point, Point)>, FigureError> {
    let len = points.len();
    let mut segs = Vec::with_capacity(edges.len());
    for (k, e) in edges.iter().enumerate() {
        let get = |index: usize| {
            points
                .get(index)
                .copied()
                .ok_or(FigureError::EdgeIndexOutOfRange { edge: k, index, len })
        };
        segs.push((get(e.from)?, get(e.to)?));
    }
    Ok(segs)
}

/// True if any two non-adjacent edges cross properly.
///
/// All edges are resolved before any pair is tested, so an invalid index is
/// reported even when an earlier pair would already cross. Quadratic in the
/// number of edges; returns on the first crossing.
pub fn has_self_intersection(points: &[Point], edges: &[Edge]) -> Result<bool, FigureError> {
    let segs = resolve_edges(points, edges)?;
    for i in 0..segs.len() {
        for j in (i + 1)..segs.len() {
            if are_adjacent(edges, i, j) {
                continue;
            }
            let (a, b) = segs[i];
            let (c, d) = segs[j];
            if segments_cross(a, b, c, d) {
                tracing::trace!(i, j, "edges cross");
                return Ok(true);
            }
        }
    }
    Ok(false)
}
