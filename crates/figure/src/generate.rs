//! Random figures packaged for presentation.
//!
//! Purpose
//! - Turn a grid draw into what a viewer needs: points in drawing order with
//!   a colour each, the drawing-loop edges, and the classification.
//! - Every sample carries its replay token, so any figure in a stream can be
//!   regenerated on its own.
//!
//! Code cross-refs: `geom2::rand::{draw_grid_points, draw_order}`, `figure::classify_with`

use serde::{Deserialize, Serialize};

use crate::error::{FigureError, GeneratorError};
use crate::figure::{classify_with, ClassifyCfg, EdgePolicy};
use crate::geom2::rand::{draw_grid_points, draw_order, GridCfg, ReplayToken};
use crate::geom2::{loop_edges, pt, Edge, Point};

/// Colours handed out in drawing order, cycling.
pub const PALETTE: [&str; 7] = ["red", "green", "blue", "orange", "magenta", "black", "cyan"];

/// A drawn vertex: coordinates plus display colour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

impl ColoredPoint {
    #[inline]
    pub fn point(&self) -> Point {
        pt(self.x, self.y)
    }
}

/// Attach palette colours to points in order.
pub fn paint(points: &[Point]) -> Vec<ColoredPoint> {
    points
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(p, color)| ColoredPoint {
            x: p.x,
            y: p.y,
            color: (*color).to_string(),
        })
        .collect()
}

/// Classification result with everything needed to draw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureReport {
    /// Category tag, e.g. `triangle` or `self-intersecting`.
    pub category: String,
    /// Triangle/quadrilateral refinement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Full label, e.g. `triangle: right`.
    pub label: String,
    /// Input points (not normalized), in drawing order.
    pub points: Vec<ColoredPoint>,
    /// Edges as given, indexing `points`.
    pub edges: Vec<Edge>,
}

impl FigureReport {
    pub fn build(
        points: &[Point],
        edges: Vec<Edge>,
        cfg: &ClassifyCfg,
    ) -> Result<Self, FigureError> {
        let fig = classify_with(points, &edges, cfg)?;
        Ok(Self {
            category: fig.category().into_owned(),
            subtype: fig.subtype().map(str::to_string),
            label: fig.to_string(),
            points: paint(points),
            edges,
        })
    }
}

/// Sampler plus classifier settings.
///
/// Sampled points can coincide after recentering or sit on a line between
/// their neighbours, so the default classifies along the rebuilt loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureGenCfg {
    pub grid: GridCfg,
    pub classify: ClassifyCfg,
}

impl Default for FigureGenCfg {
    fn default() -> Self {
        Self {
            grid: GridCfg::default(),
            classify: ClassifyCfg {
                edges: EdgePolicy::Loop,
                ..ClassifyCfg::default()
            },
        }
    }
}

/// Draw, order, connect and classify one figure.
pub fn generate_figure(cfg: &FigureGenCfg, tok: ReplayToken) -> Result<FigureReport, GeneratorError> {
    let raw = draw_grid_points(&cfg.grid, tok)?;
    let ordered: Vec<Point> = draw_order(&raw).into_iter().map(|i| raw[i]).collect();
    let edges = loop_edges(ordered.len());
    let report = FigureReport::build(&ordered, edges, &cfg.classify)?;
    tracing::debug!(seed = tok.seed, index = tok.index, label = %report.label, "generated");
    Ok(report)
}

/// A generated report plus the token that reproduces it.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureSample {
    pub report: FigureReport,
    pub replay: ReplayToken,
}

/// Reproducible stream of random figures: sample `k` uses token `(seed, k)`.
#[derive(Clone, Debug)]
pub struct FigureGenerator {
    cfg: FigureGenCfg,
    seed: u64,
    next_index: u64,
}

impl FigureGenerator {
    pub fn new(cfg: FigureGenCfg, seed: u64) -> Result<Self, GeneratorError> {
        cfg.grid.validate()?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
        })
    }

    pub fn cfg(&self) -> &FigureGenCfg {
        &self.cfg
    }

    pub fn generate_next(&mut self) -> Result<FigureSample, GeneratorError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        let report = generate_figure(&self.cfg, replay)?;
        Ok(FigureSample { report, replay })
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Result<FigureReport, GeneratorError> {
        generate_figure(&self.cfg, *replay)
    }
}
