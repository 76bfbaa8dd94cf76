// Centralized tolerances for robust curve geometry.

/// Parameter dedup threshold for split positions.
pub const EPS_PARAM: f64 = 1e-9;

/// Tunable tolerances threaded through intersection and network code.
///
/// Defaults follow the engine's reference behavior: coordinate merges at
/// 1e-5, terminal subdivision when the summed box areas drop below 1e-10
/// (the square of the coordinate tolerance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Point coincidence threshold used to merge duplicate intersections
    /// and to detect near-segment bounding boxes.
    pub point_eps: f64,
    /// Summed bounding-box area below which a subdivision cell is treated
    /// as a single intersection point.
    pub area_eps: f64,
    /// Denominator guard for closed-form solves and the inverse map.
    pub denom_eps: f64,
    /// Hard cap on subdivision depth; exceeding it is a reported error,
    /// never an unbounded recursion.
    pub max_depth: u32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { point_eps: 1e-5, area_eps: 1e-10, denom_eps: 1e-12, max_depth: 32 }
    }
}

#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

#[inline]
pub fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
