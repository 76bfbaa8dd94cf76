//! Pairwise curve intersection by adaptive subdivision with an explicit
//! work list and a hard depth cap.

use crate::error::GeometryError;
use crate::model::{Curve, Point};

use super::tolerance::{approx_eq, Tolerances};

struct WorkItem {
    a: Curve,
    b: Curve,
    depth: u32,
}

// Merged per axis: representatives of adjacent terminal cells sit within
// eps on each axis but up to eps * sqrt(2) apart in euclidean distance.
fn push_merged(points: &mut Vec<Point>, candidate: Point, eps: f64) {
    let dup = points
        .iter()
        .any(|p| approx_eq(p.x, candidate.x, eps) && approx_eq(p.y, candidate.y, eps));
    if !dup {
        points.push(candidate);
    }
}

/// Intersection points of two cubic curves, deduplicated within the
/// coordinate tolerance on each axis.
///
/// Subdivision halves both curves and recurses over the four sub-pair
/// combinations until the loose bounding boxes are disjoint, degenerate
/// to perpendicular near-segments (solved directly), or shrink below the
/// area threshold (midpoint taken as the intersection).
///
/// Identical or overlapping curves never drive the combined box area
/// below the threshold along their shared span; the depth cap converts
/// that case into [`GeometryError::RecursionLimit`] carrying the points
/// collected so far instead of unbounded recursion.
pub fn intersect(a: &Curve, b: &Curve, tol: &Tolerances) -> Result<Vec<Point>, GeometryError> {
    let mut points: Vec<Point> = Vec::new();
    let mut depth_exceeded = false;
    let mut work = vec![WorkItem { a: *a, b: *b, depth: 0 }];

    while let Some(item) = work.pop() {
        let box_a = item.a.bounding_box();
        let box_b = item.b.bounding_box();
        if !box_a.overlaps(&box_b) {
            continue;
        }

        // Perpendicular near-segments: the crossing is determined by the
        // two thin axes, no recursion needed.
        let eps = tol.point_eps;
        if box_a.width() < eps && box_b.height() < eps {
            push_merged(&mut points, Point::new(box_a.min.x, box_b.min.y), eps);
            continue;
        }
        if box_b.width() < eps && box_a.height() < eps {
            push_merged(&mut points, Point::new(box_b.min.x, box_a.min.y), eps);
            continue;
        }

        if box_a.area() + box_b.area() < tol.area_eps {
            push_merged(&mut points, box_a.center(), eps);
            continue;
        }

        if item.depth >= tol.max_depth {
            depth_exceeded = true;
            continue;
        }

        let (a0, a1) = item.a.split_at(0.5);
        let (b0, b1) = item.b.split_at(0.5);
        let depth = item.depth + 1;
        work.push(WorkItem { a: a0, b: b0, depth });
        work.push(WorkItem { a: a0, b: b1, depth });
        work.push(WorkItem { a: a1, b: b0, depth });
        work.push(WorkItem { a: a1, b: b1, depth });
    }

    if depth_exceeded {
        Err(GeometryError::RecursionLimit { max_depth: tol.max_depth, partial: points })
    } else {
        Ok(points)
    }
}
