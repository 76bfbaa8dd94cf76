// Numerical linear algebra behind parameter inversion and nearest-point
// queries: an SVD null-space routine and a companion-matrix root finder.
// Degrees <= 2 stay on the closed-form solvers in `math`.

use nalgebra::DMatrix;

use super::math::{solve_linear, solve_quadratic};

// Relative cutoff separating "numerically zero" singular values and
// leading polynomial coefficients from genuine ones.
const REL_RANK_EPS: f64 = 1e-9;

// Imaginary-part slack when harvesting real eigenvalues of the
// companion matrix.
const IM_EPS: f64 = 1e-8;

/// Null space of a 5x6 matrix, for the one-dimensional case.
///
/// Returns `None` when the null space is not exactly one-dimensional
/// (rank-deficient input, e.g. a degree-collapsed curve). The matrix is
/// zero-padded to 6x6 so the full set of right singular vectors is
/// available; padding with a zero row changes neither rank nor kernel.
pub fn null_space_5x6(rows: &[[f64; 6]; 5]) -> Option<[f64; 6]> {
    let m = DMatrix::<f64>::from_fn(6, 6, |r, c| if r < 5 { rows[r][c] } else { 0.0 });
    let svd = m.svd(false, true);
    let v_t = svd.v_t?;

    let sv = &svd.singular_values;
    let sv_max = sv.iter().cloned().fold(0.0_f64, f64::max);
    if sv_max <= f64::MIN_POSITIVE {
        return None;
    }
    let cutoff = sv_max * REL_RANK_EPS;
    let mut zero_count = 0usize;
    let mut min_idx = 0usize;
    for (i, &s) in sv.iter().enumerate() {
        if s <= cutoff {
            zero_count += 1;
        }
        if s < sv[min_idx] {
            min_idx = i;
        }
    }
    if zero_count != 1 {
        return None;
    }

    let mut out = [0.0; 6];
    for c in 0..6 {
        out[c] = v_t[(min_idx, c)];
    }
    Some(out)
}

/// All real roots of `c[0] + c[1] t + ... + c[n] t^n`.
///
/// Leading coefficients that vanish relative to the largest coefficient
/// are trimmed first, so a formally-quintic polynomial that is really
/// cubic or lower gets the analysis of its true degree. Degrees <= 2 use
/// the closed forms; higher degrees go through the eigenvalues of the
/// monic companion matrix.
pub fn real_roots(coeffs: &[f64], denom_eps: f64) -> Vec<f64> {
    let scale = coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if scale <= f64::MIN_POSITIVE {
        return Vec::new();
    }
    let mut deg = coeffs.len().saturating_sub(1);
    while deg > 0 && coeffs[deg].abs() <= scale * REL_RANK_EPS {
        deg -= 1;
    }
    match deg {
        0 => Vec::new(),
        1 => solve_linear(coeffs[1], coeffs[0], denom_eps),
        2 => solve_quadratic(coeffs[2], coeffs[1], coeffs[0], denom_eps),
        _ => {
            let lead = coeffs[deg];
            let companion = DMatrix::<f64>::from_fn(deg, deg, |r, c| {
                if c == deg - 1 {
                    -coeffs[r] / lead
                } else if r == c + 1 {
                    1.0
                } else {
                    0.0
                }
            });
            companion
                .complex_eigenvalues()
                .iter()
                .filter(|e| e.im.abs() <= IM_EPS * (1.0 + e.re.abs()))
                .map(|e| e.re)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn quintic_known_roots() {
        // (t - 0.2)(t - 0.5)(t - 0.9)(t^2 + 1): real roots 0.2, 0.5, 0.9.
        let a = [-0.2, -0.5, -0.9];
        // Expand (t - a0)(t - a1)(t - a2) = t^3 + e1 t^2 + e2 t + e3.
        let e1 = a[0] + a[1] + a[2];
        let e2 = a[0] * a[1] + a[0] * a[2] + a[1] * a[2];
        let e3 = a[0] * a[1] * a[2];
        // Multiply by (t^2 + 1).
        let coeffs = [e3, e2, e1 + e3, 1.0 + e2, e1, 1.0];
        let mut roots = real_roots(&coeffs, EPS);
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), 3);
        for (got, want) in roots.iter().zip([0.2, 0.5, 0.9]) {
            assert!((got - want).abs() < 1e-9, "root {got} vs {want}");
        }
    }

    #[test]
    fn degree_collapse_uses_lower_solver() {
        // Formally quintic, actually quadratic: t^2 - 1.
        let coeffs = [-1.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let mut roots = real_roots(&coeffs, EPS);
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots, vec![-1.0, 1.0]);
    }

    #[test]
    fn all_zero_polynomial_has_no_roots() {
        assert!(real_roots(&[0.0; 6], EPS).is_empty());
    }

    #[test]
    fn null_space_of_simple_matrix() {
        // Rows pinning v[0..5] to zero; kernel is span(e5).
        let mut rows = [[0.0; 6]; 5];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        let v = null_space_5x6(&rows).expect("one-dimensional kernel");
        for (i, &c) in v.iter().enumerate().take(5) {
            assert!(c.abs() < 1e-12, "component {i} should vanish");
        }
        assert!(v[5].abs() > 0.9);
    }

    #[test]
    fn null_space_rejects_rank_deficient() {
        // Two identical rows leave a two-dimensional kernel.
        let mut rows = [[0.0; 6]; 5];
        rows[0][0] = 1.0;
        rows[1][0] = 1.0;
        rows[2][2] = 1.0;
        rows[3][3] = 1.0;
        rows[4][4] = 1.0;
        assert!(null_space_5x6(&rows).is_none());
    }
}
