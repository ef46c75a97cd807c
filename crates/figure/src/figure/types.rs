//! Classification results and classifier configuration.
//!
//! - `Figure`: the category of a classified figure plus its refinement for
//!   triangles and quadrilaterals. `Display` yields the classification label
//!   (`"triangle: right"`, `"self-intersecting: pentagon"`, `"7-gon"`, ...).
//! - `ClassifyCfg`: tolerances and the edge-resolution policy.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom2::{EPSILON, RIGHT_ANGLE_TOL_DEG};

/// Refinement of a three-vertex figure. Precedence: right > isosceles > scalene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    Right,
    Isosceles,
    Scalene,
}

impl TriangleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriangleKind::Right => "right",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        }
    }
}

/// Refinement of a four-vertex figure, first match wins in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadKind {
    Square,
    Rectangle,
    Rhombus,
    Trapezoid,
    General,
}

impl QuadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuadKind::Square => "square",
            QuadKind::Rectangle => "rectangle",
            QuadKind::Rhombus => "rhombus",
            QuadKind::Trapezoid => "trapezoid",
            QuadKind::General => "general",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QuadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified figure. Vertex counts refer to the normalized point list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Figure {
    Point,
    Segment,
    /// Every remaining point lies on one line.
    Fragment,
    /// Two non-adjacent edges cross properly.
    SelfIntersecting { vertices: usize },
    Triangle(TriangleKind),
    Quadrilateral(QuadKind),
    /// Simple polygon with five or more vertices.
    Polygon { vertices: usize },
}

impl Figure {
    /// Category tag: `point`, `segment`, `fragment`, `self-intersecting`,
    /// `triangle`, `quadrilateral`, `pentagon`, `hexagon` or `<n>-gon`.
    pub fn category(&self) -> Cow<'static, str> {
        match *self {
            Figure::Point => Cow::Borrowed("point"),
            Figure::Segment => Cow::Borrowed("segment"),
            Figure::Fragment => Cow::Borrowed("fragment"),
            Figure::SelfIntersecting { .. } => Cow::Borrowed("self-intersecting"),
            Figure::Triangle(_) => Cow::Borrowed("triangle"),
            Figure::Quadrilateral(_) => Cow::Borrowed("quadrilateral"),
            Figure::Polygon { vertices } => polygon_name(vertices),
        }
    }

    /// Triangle or quadrilateral refinement, if any.
    pub fn subtype(&self) -> Option<&'static str> {
        match *self {
            Figure::Triangle(k) => Some(k.as_str()),
            Figure::Quadrilateral(k) => Some(k.as_str()),
            _ => None,
        }
    }

    /// Number of vertices after normalization, where the category implies one.
    pub fn vertices(&self) -> Option<usize> {
        match *self {
            Figure::Point => Some(1),
            Figure::Segment => Some(2),
            Figure::Fragment => None,
            Figure::Triangle(_) => Some(3),
            Figure::Quadrilateral(_) => Some(4),
            Figure::SelfIntersecting { vertices } | Figure::Polygon { vertices } => Some(vertices),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Figure::SelfIntersecting { vertices } => {
                write!(f, "self-intersecting: {}", polygon_name(vertices))
            }
            Figure::Triangle(k) => write!(f, "triangle: {k}"),
            Figure::Quadrilateral(k) => write!(f, "quadrilateral: {k}"),
            _ => f.write_str(&self.category()),
        }
    }
}

/// Name of a polygon by vertex count.
pub fn polygon_name(n: usize) -> Cow<'static, str> {
    match n {
        3 => Cow::Borrowed("triangle"),
        4 => Cow::Borrowed("quadrilateral"),
        5 => Cow::Borrowed("pentagon"),
        6 => Cow::Borrowed("hexagon"),
        _ => Cow::Owned(format!("{n}-gon")),
    }
}

/// How edge indices are resolved once normalization has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    /// Resolve the caller's edges against the normalized list. Indices are
    /// not renumbered, so a list that shrank below an edge endpoint fails
    /// with `FigureError::EdgeIndexOutOfRange`.
    #[default]
    AsGiven,
    /// Ignore the caller's edges and use the closed drawing loop over the
    /// normalized points.
    Loop,
}

/// Classifier configuration (tolerances and edge policy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyCfg {
    pub eps: f64,
    pub right_angle_tol_deg: f64,
    pub edges: EdgePolicy,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            eps: EPSILON,
            right_angle_tol_deg: RIGHT_ANGLE_TOL_DEG,
            edges: EdgePolicy::AsGiven,
        }
    }
}
