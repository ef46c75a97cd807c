//! Curated surface for front ends (CLI, services).
//!
//! - Entry points take plain coordinate pairs and index pairs, so callers do
//!   not need `nalgebra` in scope.
//! - Prefer these over reaching into `figure`/`geom2` directly.

use crate::error::FigureError;
use crate::figure::ClassifyCfg;
use crate::generate::FigureReport;
use crate::geom2::{loop_edges, pt, Edge, Point};

pub use crate::figure::{classify, classify_with, identify, EdgePolicy, Figure};
pub use crate::generate::{generate_figure, FigureGenCfg, FigureGenerator, FigureSample};
pub use crate::geom2::rand::{GridCfg, ReplayToken, VertexCount};

/// Classify coordinate pairs. With `edges = None` the closed drawing loop over
/// the input points is used.
pub fn report_from_pairs(
    coords: &[(f64, f64)],
    edges: Option<&[(usize, usize)]>,
    cfg: &ClassifyCfg,
) -> Result<FigureReport, FigureError> {
    let points: Vec<Point> = coords.iter().map(|&(x, y)| pt(x, y)).collect();
    let edges: Vec<Edge> = match edges {
        Some(pairs) => pairs.iter().copied().map(Edge::from).collect(),
        None => loop_edges(points.len()),
    };
    FigureReport::build(&points, edges, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_default_to_loop_edges() {
        let r = report_from_pairs(
            &[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)],
            None,
            &ClassifyCfg::default(),
        )
        .unwrap();
        assert_eq!(r.label, "self-intersecting: quadrilateral");
        assert_eq!(r.edges.len(), 4);
    }

    #[test]
    fn explicit_pairs_are_kept() {
        let r = report_from_pairs(
            &[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)],
            Some(&[(0, 1), (1, 2)][..]),
            &ClassifyCfg::default(),
        )
        .unwrap();
        assert_eq!(r.label, "triangle: right");
        assert_eq!(r.edges, vec![Edge::new(0, 1), Edge::new(1, 2)]);
    }

    #[test]
    fn bad_index_surfaces() {
        let err = report_from_pairs(
            &[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)],
            Some(&[(0, 5)][..]),
            &ClassifyCfg::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FigureError::EdgeIndexOutOfRange {
                edge: 0,
                index: 5,
                len: 3
            }
        );
    }
}
