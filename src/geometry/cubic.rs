//! Cubic Bezier operations: evaluation, inverse fitting, de Casteljau
//! splitting, bounding boxes, self-intersection and parameter inversion.

use crate::error::GeometryError;
use crate::model::{BoundingBox, Curve, Point};

use super::math::{horner4, solve_2x2, solve_quadratic};
use super::numeric::{null_space_5x6, real_roots};
use super::tolerance::{clamp01, near_zero, Tolerances, EPS_PARAM};

impl Curve {
    /// Power-basis coefficients `a0..a3` with
    /// `B(t) = a0 + a1 t + a2 t^2 + a3 t^3`.
    ///
    /// Derived on demand from the control points; identical on every call
    /// since the curve is immutable.
    pub fn coefficients(&self) -> [Point; 4] {
        [
            self.p0,
            (self.p1 - self.p0) * 3.0,
            (self.p2 - self.p1 * 2.0 + self.p0) * 3.0,
            self.p3 - self.p2 * 3.0 + self.p1 * 3.0 - self.p0,
        ]
    }

    /// Coefficients of `B'(t) = d0 + d1 t + d2 t^2`.
    pub fn derivative_coefficients(&self) -> [Point; 3] {
        let [_, a1, a2, a3] = self.coefficients();
        [a1, a2 * 2.0, a3 * 3.0]
    }

    /// Point on the curve at parameter `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the
    /// polynomial beyond the curve's endpoints.
    pub fn eval(&self, t: f64) -> Point {
        let [a0, a1, a2, a3] = self.coefficients();
        Point::new(horner4(a0.x, a1.x, a2.x, a3.x, t), horner4(a0.y, a1.y, a2.y, a3.y, t))
    }

    /// Recover the interior control points of a curve passing through
    /// `q1` at `t1` and `q2` at `t2`, with `p0`/`p3` fixed as the
    /// endpoints. `t1` and `t2` must be distinct and interior.
    ///
    /// Per axis this is a 2x2 linear system in the Bernstein weights of
    /// `p1` and `p2`, solved by Cramer elimination. The determinant
    /// depends on `t1`/`t2` only; when it vanishes (equal or boundary
    /// parameters) the configuration is rejected instead of dividing
    /// through to non-finite control points.
    pub fn fit_through_points(
        p0: Point,
        q1: Point,
        q2: Point,
        p3: Point,
        t1: f64,
        t2: f64,
        tol: &Tolerances,
    ) -> Result<Curve, GeometryError> {
        let weight = |t: f64| {
            let u = 1.0 - t;
            (3.0 * t * u * u, 3.0 * t * t * u)
        };
        let rhs = |q: Point, t: f64| {
            let u = 1.0 - t;
            q - p0 * (u * u * u) - p3 * (t * t * t)
        };
        let (a11, a12) = weight(t1);
        let (a21, a22) = weight(t2);
        let r1 = rhs(q1, t1);
        let r2 = rhs(q2, t2);

        let degenerate = || GeometryError::DegenerateFit { t1, t2 };
        let (p1x, p2x) = solve_2x2(a11, a12, a21, a22, r1.x, r2.x, tol.denom_eps).ok_or_else(degenerate)?;
        let (p1y, p2y) = solve_2x2(a11, a12, a21, a22, r1.y, r2.y, tol.denom_eps).ok_or_else(degenerate)?;
        Ok(Curve::new(p0, Point::new(p1x, p1y), Point::new(p2x, p2y), p3))
    }

    /// Recover the parameter of a point known to lie on the curve.
    ///
    /// The inverse of a planar cubic is the linear-fractional map
    /// `t = (a1 x + b1 y + c1) / (a2 x + b2 y + c2)`; its six
    /// coefficients span the null space of a fixed 5x6 matrix built from
    /// the power-basis coefficients. A multi-dimensional null space
    /// (degree-collapsed curve) or a vanishing denominator (two
    /// parameters meet at this point, i.e. a self-intersection) is
    /// reported as [`GeometryError::AmbiguousParameter`] rather than
    /// picking a branch.
    pub fn parameter_of(&self, p: Point, tol: &Tolerances) -> Result<f64, GeometryError> {
        let [a0, a1, a2, a3] = self.coefficients();
        let rows = [
            [a3.x, a3.y, 0.0, 0.0, 0.0, 0.0],
            [a2.x, a2.y, 0.0, -a3.x, -a3.y, 0.0],
            [a1.x, a1.y, 0.0, -a2.x, -a2.y, 0.0],
            [a0.x, a0.y, 1.0, -a1.x, -a1.y, 0.0],
            [0.0, 0.0, 0.0, -a0.x, -a0.y, -1.0],
        ];
        let ambiguous = || GeometryError::AmbiguousParameter { x: p.x, y: p.y };
        let [na2, nb2, nc2, na1, nb1, nc1] = null_space_5x6(&rows).ok_or_else(ambiguous)?;
        let den = na2 * p.x + nb2 * p.y + nc2;
        if near_zero(den, tol.denom_eps) {
            return Err(ambiguous());
        }
        Ok((na1 * p.x + nb1 * p.y + nc1) / den)
    }

    /// Split at `t` with the de Casteljau construction, yielding the
    /// `[0, t]` and `[t, 1]` sub-curves.
    pub fn split_at(&self, t: f64) -> (Curve, Curve) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let mid = p012.lerp(p123, t);
        (Curve::new(self.p0, p01, p012, mid), Curve::new(mid, p123, p23, self.p3))
    }

    /// Partition the curve at a set of interior parameters.
    ///
    /// Parameters are deduplicated, sorted, and restricted to the open
    /// interval `(0, 1)`; an empty set returns the curve unchanged as a
    /// single piece. Cuts are applied iteratively: each cut emits the
    /// left piece and re-bases the still-pending parameters onto the
    /// remaining sub-curve via `u' = (u - t) / (1 - t)`.
    pub fn split(&self, params: &[f64]) -> Vec<Curve> {
        let mut ts: Vec<f64> = params.iter().copied().filter(|t| *t > 0.0 && *t < 1.0).collect();
        ts.sort_by(f64::total_cmp);
        ts.dedup_by(|a, b| (*a - *b).abs() <= EPS_PARAM);

        let mut parts = Vec::with_capacity(ts.len() + 1);
        let mut current = *self;
        for i in 0..ts.len() {
            let t = ts[i];
            let (left, right) = current.split_at(t);
            parts.push(left);
            current = right;
            for u in ts[i + 1..].iter_mut() {
                *u = (*u - t) / (1.0 - t);
            }
        }
        parts.push(current);
        parts
    }

    /// Loose axis-aligned bounding box: the box of the control points.
    /// Valid because the curve lies in their convex hull.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of_points(&self.control_points())
    }

    /// Tight axis-aligned bounding box: endpoints plus curve points at
    /// interior parameters where the derivative's x or y component
    /// vanishes. Per axis that is a quadratic in `t`; a vanishing
    /// leading coefficient drops to the linear analysis.
    pub fn bounding_box_tight(&self, tol: &Tolerances) -> BoundingBox {
        let [d0, d1, d2] = self.derivative_coefficients();
        let mut points = vec![self.p0, self.p3];
        for roots in [
            solve_quadratic(d2.x, d1.x, d0.x, tol.denom_eps),
            solve_quadratic(d2.y, d1.y, d0.y, tol.denom_eps),
        ] {
            for t in roots {
                if t > 0.0 && t < 1.0 {
                    points.push(self.eval(t));
                }
            }
        }
        BoundingBox::of_points(&points)
    }

    /// The at-most-one parameter pair `(t1, t2)`, `t1 < t2`, at which the
    /// curve crosses itself, with both parameters in `[0, 1]`.
    ///
    /// Eliminating `t1 + t2` and `t1 t2` from `B(t1) = B(t2)` via the
    /// determinant of the derivative coefficients reduces the relation to
    /// a quadratic in the mean `m = (t1 + t2) / 2`. A zero or undefined
    /// determinant means the curve is effectively of degree below three
    /// and cannot self-intersect. A zero discriminant (the two parameters
    /// coincide: a cusp or tangential self-touch) is treated as no
    /// crossing; only strictly positive discriminants count.
    pub fn self_intersection(&self, tol: &Tolerances) -> Option<(f64, f64)> {
        let [_, a1, a2, a3] = self.coefficients();
        let det = a3.x * a2.y - a2.x * a3.y;
        if near_zero(det, tol.denom_eps) {
            return None;
        }
        // r = t1^2 + t1 t2 + t2^2, s = t1 + t2, p = t1 t2.
        let r = (a2.x * a1.y - a1.x * a2.y) / det;
        let s = (a1.x * a3.y - a3.x * a1.y) / det;
        let p = s * s - r;
        let m = s / 2.0;
        let disc = m * m - p;
        if disc <= 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let (t1, t2) = (m - root, m + root);
        if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
            Some((t1, t2))
        } else {
            None
        }
    }

    /// The point on the curve nearest to `p`, together with its parameter.
    ///
    /// Stationary points of the squared distance satisfy a degree-5
    /// polynomial in `t`; all real roots inside `[0, 1]` compete with the
    /// two endpoints for the minimum.
    pub fn nearest_point(&self, p: Point, tol: &Tolerances) -> (Point, f64) {
        let [a0, a1, a2, a3] = self.coefficients();
        let a0 = a0 - p;
        let coeffs = [
            a0.dot(a1),
            2.0 * a0.dot(a2) + a1.dot(a1),
            3.0 * a0.dot(a3) + 3.0 * a1.dot(a2),
            4.0 * a1.dot(a3) + 2.0 * a2.dot(a2),
            5.0 * a2.dot(a3),
            3.0 * a3.dot(a3),
        ];
        let mut candidates = vec![0.0, 1.0];
        for t in real_roots(&coeffs, tol.denom_eps) {
            if t > -EPS_PARAM && t < 1.0 + EPS_PARAM {
                candidates.push(clamp01(t));
            }
        }

        let mut best_t = 0.0;
        let mut best_point = self.p0;
        let mut best_d2 = f64::INFINITY;
        for t in candidates {
            let q = self.eval(t);
            let d2 = (q - p).dot(q - p);
            if d2 < best_d2 {
                best_d2 = d2;
                best_point = q;
                best_t = t;
            }
        }
        (best_point, best_t)
    }
}
