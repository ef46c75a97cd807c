//! Basic 2D types for grid figures.
//!
//! - `Point`: plain `Vector2<f64>`; coordinates are integer-valued in practice.
//! - `Edge`: pair of indices into the point list a caller passed in.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A figure vertex.
pub type Point = Vector2<f64>;

/// Shorthand constructor used throughout tests and the generator.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Directed edge `from → to` between two entries of a point list.
///
/// Indices are fixed when the edge is built and are never renumbered, even if
/// the list they were built against is later normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// True if both edges touch the same vertex index.
    #[inline]
    pub fn shares_vertex(&self, other: &Edge) -> bool {
        self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

/// Open chain `0→1→…→n-1`, closed back to `0` once there are at least three points.
///
/// This is the drawing loop the generator hands to the classifier.
pub fn loop_edges(n: usize) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..n).map(|i| Edge::new(i - 1, i)).collect();
    if n >= 3 {
        edges.push(Edge::new(n - 1, 0));
    }
    edges
}
