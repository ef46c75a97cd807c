//! Classification of small grid figures.
//!
//! A figure is an ordered list of 2D points plus the edges drawn between
//! them. `figure::classify` names it: point, segment, fragment,
//! self-intersecting polygon, or a simple polygon with a refined kind for
//! triangles and quadrilaterals.
//!
//! Layout
//! - `geom2`: points, edges, predicates, tolerances, seedable grid sampler.
//! - `figure`: normalization, intersection test, shape refinement, orchestration.
//! - `generate`: random figures with colours, packaged as `FigureReport`.

pub mod api;
pub mod error;
pub mod figure;
pub mod generate;
pub mod geom2;

pub use error::{FigureError, GeneratorError};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{FigureError, GeneratorError};
    pub use crate::figure::{
        classify, classify_with, identify, ClassifyCfg, EdgePolicy, Figure, QuadKind, TriangleKind,
    };
    pub use crate::generate::{
        generate_figure, ColoredPoint, FigureGenCfg, FigureGenerator, FigureReport,
    };
    pub use crate::geom2::rand::{GridCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{loop_edges, pt, Edge, Point};
}
