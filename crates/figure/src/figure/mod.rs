//! Figure classification over small 2D point/edge lists.
//!
//! Purpose
//! - Decide what a drawn figure is: a point, a segment, a collinear fragment,
//!   a self-intersecting polygon, or a simple polygon, refined for triangles
//!   (right/isosceles/scalene) and quadrilaterals
//!   (square/rectangle/rhombus/trapezoid/general).
//!
//! Pipeline
//! - `normalize` → `all_collinear` → `has_self_intersection` →
//!   `classify_triangle` / `classify_quadrilateral` / `polygon_name`.
//! - Every step is a pure function; nothing is cached between calls.
//!
//! Edge indices
//! - Edges index the point list as the caller built it. Normalization can drop
//!   points, and `EdgePolicy` decides what happens then (see `ClassifyCfg`).
//!
//! Code cross-refs: `geom2::{predicates, types, cfg}`.

mod classify;
pub mod intersect;
pub mod normalize;
pub mod shape;
mod types;

pub use classify::{classify, classify_with, identify};
pub use intersect::{are_adjacent, has_self_intersection, segments_cross};
pub use normalize::{all_collinear, dedup_exact, normalize, strip_collinear};
pub use shape::{classify_quadrilateral, classify_triangle};
pub use types::{polygon_name, ClassifyCfg, EdgePolicy, Figure, QuadKind, TriangleKind};
