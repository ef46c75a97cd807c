//! Random grid figures in 2D (unique integer points + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the figures fed to the
//!   classifier: a handful of distinct lattice points, nudged towards the
//!   origin and put into a drawable order.
//!
//! Model
//! - Draw `n` distinct points uniformly from `[min_coord, max_coord]²`.
//! - Shift every coordinate `>= recenter_at` down by `recenter_by`. This may
//!   create duplicates; the classifier dedupes them.
//! - With three or more points, order them by polar angle around their mean so
//!   the drawing loop is (mostly) simple.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{pt, Point};
use crate::error::GeneratorError;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(1),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }

    fn upper(&self) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(1),
            VertexCount::Uniform { min, max } => max.max(min).max(1),
        }
    }
}

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    pub vertex_count: VertexCount,
    /// Inclusive coordinate range on both axes.
    pub min_coord: i32,
    pub max_coord: i32,
    /// Coordinates `>= recenter_at` are shifted by `-recenter_by`.
    pub recenter_at: i32,
    pub recenter_by: i32,
}
impl Default for GridCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 1, max: 6 },
            min_coord: -5,
            max_coord: 5,
            recenter_at: 5,
            recenter_by: 2,
        }
    }
}

impl GridCfg {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_coord > self.max_coord {
            return Err(GeneratorError::invalid("min_coord <= max_coord required"));
        }
        if let VertexCount::Uniform { min, max } = self.vertex_count {
            if min > max {
                return Err(GeneratorError::invalid("vertex_count min <= max required"));
            }
        }
        let side = (i64::from(self.max_coord) - i64::from(self.min_coord) + 1) as u64;
        let cells = side.saturating_mul(side);
        if self.vertex_count.upper() as u64 > cells {
            return Err(GeneratorError::invalid(format!(
                "cannot draw {} distinct points from a grid of {cells} cells",
                self.vertex_count.upper()
            )));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw distinct lattice points, recentred, in generation order.
pub fn draw_grid_points(cfg: &GridCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let mut used: HashSet<(i32, i32)> = HashSet::with_capacity(n);
    let mut pts: Vec<Point> = Vec::with_capacity(n);
    while pts.len() < n {
        let x = rng.gen_range(cfg.min_coord..=cfg.max_coord);
        let y = rng.gen_range(cfg.min_coord..=cfg.max_coord);
        if used.insert((x, y)) {
            pts.push(pt(f64::from(x), f64::from(y)));
        }
    }
    recenter(&mut pts, cfg.recenter_at, cfg.recenter_by);
    Ok(pts)
}

/// Shift each coordinate `>= at` by `-by`, independently per axis.
pub fn recenter(points: &mut [Point], at: i32, by: i32) {
    let (at, by) = (f64::from(at), f64::from(by));
    for p in points.iter_mut() {
        if p.x >= at {
            p.x -= by;
        }
        if p.y >= at {
            p.y -= by;
        }
    }
}

/// Drawing order as indices into `points`.
///
/// Three or more points are sorted by `atan2` around their mean (stable, so
/// ties keep generation order); fewer points keep their order.
pub fn draw_order(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    if points.len() < 3 {
        return order;
    }
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;
    let key = |i: usize| (points[i].y - cy).atan2(points[i].x - cx);
    order.sort_by(|&a, &b| {
        key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = GridCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_grid_points(&cfg, tok).expect("points");
        let p2 = draw_grid_points(&cfg, tok).expect("points");
        assert_eq!(p1, p2);
    }

    #[test]
    fn draws_respect_count_and_range() {
        let cfg = GridCfg {
            vertex_count: VertexCount::Fixed(6),
            ..GridCfg::default()
        };
        for index in 0..50 {
            let pts = draw_grid_points(&cfg, ReplayToken { seed: 3, index }).unwrap();
            assert_eq!(pts.len(), 6);
            for p in &pts {
                assert!(p.x >= -5.0 && p.x <= 4.0, "x out of range: {p:?}");
                assert!(p.y >= -5.0 && p.y <= 4.0, "y out of range: {p:?}");
                assert_eq!(p.x.fract(), 0.0);
                assert_eq!(p.y.fract(), 0.0);
            }
        }
    }

    #[test]
    fn raw_draw_is_distinct_before_recentering() {
        let cfg = GridCfg {
            vertex_count: VertexCount::Fixed(20),
            recenter_by: 0,
            ..GridCfg::default()
        };
        let pts = draw_grid_points(&cfg, ReplayToken { seed: 9, index: 1 }).unwrap();
        for (i, a) in pts.iter().enumerate() {
            for b in &pts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn recenter_shifts_only_high_coordinates() {
        let mut pts = vec![pt(5.0, 0.0), pt(4.0, 5.0), pt(-5.0, -5.0)];
        recenter(&mut pts, 5, 2);
        assert_eq!(pts, vec![pt(3.0, 0.0), pt(4.0, 3.0), pt(-5.0, -5.0)]);
    }

    #[test]
    fn draw_order_sorts_by_angle_around_mean() {
        // Mean is the origin; angles: (1,0)=0, (0,1)=π/2, (-1,0)=π, (0,-1)=-π/2.
        let pts = vec![pt(1.0, 0.0), pt(-1.0, 0.0), pt(0.0, 1.0), pt(0.0, -1.0)];
        assert_eq!(draw_order(&pts), vec![3, 0, 2, 1]);
        assert_eq!(draw_order(&pts[..2]), vec![0, 1]);
    }

    #[test]
    fn invalid_params_rejected() {
        let cfg = GridCfg {
            min_coord: 1,
            max_coord: 0,
            ..GridCfg::default()
        };
        assert!(matches!(
            draw_grid_points(&cfg, ReplayToken { seed: 0, index: 0 }),
            Err(GeneratorError::InvalidParams { .. })
        ));
        let crowded = GridCfg {
            vertex_count: VertexCount::Fixed(5),
            min_coord: 0,
            max_coord: 0,
            ..GridCfg::default()
        };
        assert!(crowded.validate().is_err());
    }
}
