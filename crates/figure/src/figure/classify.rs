use std::borrow::Cow;

use super::intersect::has_self_intersection;
use super::normalize::{all_collinear, normalize};
use super::shape::{classify_quadrilateral, classify_triangle};
use super::types::{ClassifyCfg, EdgePolicy, Figure};
use crate::error::FigureError;
use crate::geom2::{loop_edges, Edge, Point};

/// Classify a figure with the default tolerances and edge policy.
///
/// `points` is the drawing-order vertex list; `edges` index into it.
pub fn classify(points: &[Point], edges: &[Edge]) -> Result<Figure, FigureError> {
    classify_with(points, edges, &ClassifyCfg::default())
}

/// Classification label, e.g. `"quadrilateral: square"`.
pub fn identify(points: &[Point], edges: &[Edge]) -> Result<String, FigureError> {
    classify(points, edges).map(|f| f.to_string())
}

/// Classify a figure.
///
/// Steps, first match wins:
/// 1. normalize (dedupe, strip collinear points);
/// 2. one point → `Point`, two → `Segment`;
/// 3. all collinear → `Fragment`;
/// 4. two non-adjacent edges cross → `SelfIntersecting`;
/// 5. three → `Triangle`, four → `Quadrilateral`, else `Polygon`.
///
/// Under `EdgePolicy::AsGiven` the edges are resolved against the normalized
/// list with their original indices.
pub fn classify_with(
    points: &[Point],
    edges: &[Edge],
    cfg: &ClassifyCfg,
) -> Result<Figure, FigureError> {
    if points.is_empty() {
        return Err(FigureError::EmptyInput);
    }
    let pts = normalize(points, cfg.eps);
    tracing::debug!(input = points.len(), normalized = pts.len(), "normalized");

    match pts.len() {
        1 => return Ok(Figure::Point),
        2 => return Ok(Figure::Segment),
        _ => {}
    }
    if all_collinear(&pts, cfg.eps) {
        return Ok(Figure::Fragment);
    }

    let edges: Cow<'_, [Edge]> = match cfg.edges {
        EdgePolicy::AsGiven => Cow::Borrowed(edges),
        EdgePolicy::Loop => Cow::Owned(loop_edges(pts.len())),
    };
    if has_self_intersection(&pts, &edges)? {
        return Ok(Figure::SelfIntersecting {
            vertices: pts.len(),
        });
    }

    let fig = match pts.as_slice() {
        [a, b, c] => Figure::Triangle(classify_triangle(&[*a, *b, *c], cfg.eps)),
        [a, b, c, d] => Figure::Quadrilateral(classify_quadrilateral(&[*a, *b, *c, *d], cfg)),
        _ => Figure::Polygon {
            vertices: pts.len(),
        },
    };
    tracing::debug!(figure = %fig, "classified");
    Ok(fig)
}
