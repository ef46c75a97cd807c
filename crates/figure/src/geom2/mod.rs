//! 2D primitives for grid figures.
//!
//! Purpose
//! - Points, edges and the scalar predicates every classifier step relies on
//!   (distance, cross/dot, angles, orientation, parallelism).
//! - Centralized tolerances (`cfg`) and a seedable grid sampler (`rand`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; the sampler only produces integer
//!   coordinates, so orientation tests on sampled data are exact.
//! - Tolerant predicates take `eps` explicitly; `ccw` is strict.
//!
//! Code cross-refs: `figure::{normalize, intersect, shape}`

pub mod cfg;
mod predicates;
pub mod rand;
mod types;

pub use cfg::{EPSILON, RIGHT_ANGLE_TOL_DEG};
pub use predicates::{angle_at, approx_eq, ccw, cross, distance, dot, is_collinear, is_parallel};
pub use types::{loop_edges, pt, Edge, Point};

#[cfg(test)]
mod tests;
