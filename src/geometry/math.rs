// Stateless closed-form algebra: Horner evaluation and low-degree solvers.

use super::tolerance::near_zero;

/// Evaluate a0 + a1 t + a2 t^2 + a3 t^3 by Horner's scheme.
#[inline]
pub fn horner4(a0: f64, a1: f64, a2: f64, a3: f64, t: f64) -> f64 {
    a0 + t * (a1 + t * (a2 + t * a3))
}

/// Real roots of `a t + b = 0`. Empty when `a` is (near) zero: a constant
/// is either identically zero or never zero, and neither contributes a
/// usable root.
pub fn solve_linear(a: f64, b: f64, denom_eps: f64) -> Vec<f64> {
    if near_zero(a, denom_eps) {
        Vec::new()
    } else {
        vec![-b / a]
    }
}

/// Real roots of `a t^2 + b t + c = 0`.
///
/// Falls back to the linear solve when the leading coefficient vanishes;
/// the polynomial is then legitimately of lower degree.
pub fn solve_quadratic(a: f64, b: f64, c: f64, denom_eps: f64) -> Vec<f64> {
    if near_zero(a, denom_eps) {
        return solve_linear(b, c, denom_eps);
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let root = disc.sqrt();
    vec![(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
}

/// Solve the 2x2 system `[[a11 a12], [a21 a22]] v = [b1 b2]` by Cramer's
/// rule. `None` when the determinant is within the denominator guard.
pub fn solve_2x2(
    a11: f64,
    a12: f64,
    a21: f64,
    a22: f64,
    b1: f64,
    b2: f64,
    denom_eps: f64,
) -> Option<(f64, f64)> {
    let det = a11 * a22 - a12 * a21;
    if near_zero(det, denom_eps) {
        return None;
    }
    Some(((b1 * a22 - a12 * b2) / det, (a11 * b2 - b1 * a21) / det))
}
