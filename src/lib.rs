//! curvenet: a planar cubic-Bezier geometry engine.
//!
//! The crate is a pure computational core: curve evaluation, inverse
//! fitting, de Casteljau splitting, bounding boxes, self-intersection,
//! pairwise intersection by adaptive subdivision, parameter inversion,
//! nearest-point queries, and a committed curve collection that resolves
//! crossings on commit. Rendering and interactive tooling live outside
//! and talk to this crate in plain coordinates.

pub mod error;
pub mod model;
pub mod geometry {
    pub mod cubic;
    pub mod intersect;
    pub mod math;
    pub mod numeric;
    pub mod tolerance;
}

pub use error::GeometryError;
pub use geometry::intersect::intersect;
pub use geometry::tolerance::Tolerances;
pub use model::{BoundingBox, Curve, Point};

/// A committed collection of curves plus an in-progress active set.
///
/// Tools append curves to the active set (or directly to the committed
/// set); [`CurveNetwork::commit`] merges the active curves in while
/// restoring the network invariant: no two committed curves cross at an
/// interior point without having been split there. Self-intersections of
/// individual curves are not resolved by commit; that gap is deliberate
/// and documented rather than patched with different behavior.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveNetwork {
    committed: Vec<Curve>,
    active: Vec<Curve>,
    tol: Tolerances,
}

impl CurveNetwork {
    pub fn new() -> Self {
        Self::with_tolerances(Tolerances::default())
    }

    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self { committed: Vec::new(), active: Vec::new(), tol }
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tol
    }

    /// Append a curve to the active (in-progress) set.
    pub fn add_active(&mut self, curve: Curve) {
        self.active.push(curve);
    }

    /// Append a curve directly to the committed set, bypassing crossing
    /// resolution. Useful for pre-normalized geometry.
    pub fn add_committed(&mut self, curve: Curve) {
        self.committed.push(curve);
    }

    /// Committed curves in insertion order (split pieces replace their
    /// parent in place).
    pub fn committed(&self) -> &[Curve] {
        &self.committed
    }

    /// Active curves awaiting the next commit.
    pub fn active(&self) -> &[Curve] {
        &self.active
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.active.clear();
    }

    /// Merge the active curves into the committed set, splitting every
    /// crossing between a committed and an active curve and between two
    /// active curves.
    ///
    /// Each intersection point is mapped back to a parameter on both
    /// participating curves; each curve is then replaced by its split at
    /// the accumulated parameters. The replacement is atomic: the new
    /// committed sequence is built completely before it is installed, so
    /// any intersection or parameter-inversion error leaves the network
    /// exactly as it was.
    pub fn commit(&mut self) -> Result<(), GeometryError> {
        if self.active.is_empty() {
            return Ok(());
        }

        let n_committed = self.committed.len();
        let mut all: Vec<Curve> = Vec::with_capacity(n_committed + self.active.len());
        all.extend_from_slice(&self.committed);
        all.extend_from_slice(&self.active);

        let mut cuts: Vec<Vec<f64>> = vec![Vec::new(); all.len()];
        for i in 0..all.len() {
            // Committed curves are already mutually resolved; only pairs
            // touching at least one active curve are examined.
            let first_j = (i + 1).max(n_committed);
            for j in first_j..all.len() {
                let points = intersect(&all[i], &all[j], &self.tol)?;
                for p in points {
                    cuts[i].push(all[i].parameter_of(p, &self.tol)?);
                    cuts[j].push(all[j].parameter_of(p, &self.tol)?);
                }
            }
        }

        let mut next: Vec<Curve> = Vec::with_capacity(all.len());
        for (curve, ts) in all.iter().zip(&cuts) {
            next.extend(curve.split(ts));
        }

        self.committed = next;
        self.active.clear();
        Ok(())
    }
}
