//! Error taxonomy for the geometry engine.

use crate::model::Point;
use thiserror::Error;

/// Errors reported by curve operations and network commits.
///
/// Numeric degeneracies during root finding (vanishing leading
/// coefficients) are not represented here: the solvers fall back to the
/// correct lower-degree analysis instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Inverse fit called with parameters that make the 2x2 system
    /// singular (t1 == t2, or a parameter at the interval boundary).
    #[error("degenerate fit: t1={t1} t2={t2} yield a singular system")]
    DegenerateFit { t1: f64, t2: f64 },

    /// Parameter inversion queried at a point with a non-unique
    /// parameter, or on a curve whose inverse map is not one-dimensional
    /// (degree-collapsed curves).
    #[error("ambiguous parameter at ({x}, {y})")]
    AmbiguousParameter { x: f64, y: f64 },

    /// Adaptive subdivision exceeded its depth cap. Carries every
    /// intersection point collected before the cap was hit.
    #[error("intersection recursion limit {max_depth} exceeded ({} partial points)", partial.len())]
    RecursionLimit { max_depth: u32, partial: Vec<Point> },
}
