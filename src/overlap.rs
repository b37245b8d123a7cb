//! This module contains the axis-aligned bounding box overlap classifier used to reject
//! colliding candidates during scene generation. All comparisons use closed-interval
//! semantics: boxes which merely share a face, edge, or corner have a zero-volume
//! intersection and count as separated, which allows tightly packed layouts.

use crate::Aabb;

/// Enumerates the possible spatial relationships between two axis-aligned bounding boxes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlapResult {
    /// The boxes are disjoint; touching faces, edges, or corners count as disjoint
    NoOverlap,

    /// The boxes intersect with positive volume, but neither contains the other
    PartialOverlap,

    /// One box lies entirely within the other, boundary contact allowed. Two identical
    /// boxes also fall in this category.
    CompleteOverlap,
}

/// Classify the spatial relationship between two axis-aligned bounding boxes.
///
/// Containment is checked before separation. A degenerate (zero-volume) box sitting exactly
/// on the boundary of a larger box satisfies both the containment and the separation
/// conditions at once, and containment must win in that case.
///
/// # Arguments
///
/// * `a`: the first box
/// * `b`: the second box
///
/// returns: OverlapResult
///
/// # Examples
///
/// ```
/// use scenegen::{Aabb, OverlapResult, Point3, classify};
/// let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
/// let b = Aabb::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0));
/// assert_eq!(classify(&a, &b), OverlapResult::PartialOverlap);
/// ```
pub fn classify(a: &Aabb, b: &Aabb) -> OverlapResult {
    let a_in_b = (0..3).all(|i| a.mins[i] >= b.mins[i] && a.maxs[i] <= b.maxs[i]);
    let b_in_a = (0..3).all(|i| b.mins[i] >= a.mins[i] && b.maxs[i] <= a.maxs[i]);
    if a_in_b || b_in_a {
        return OverlapResult::CompleteOverlap;
    }

    for i in 0..3 {
        if a.maxs[i] <= b.mins[i] || a.mins[i] >= b.maxs[i] {
            return OverlapResult::NoOverlap;
        }
    }

    OverlapResult::PartialOverlap
}

/// Returns true if the candidate box partially or completely overlaps any box in the existing
/// set. Stops at the first overlapping box found; the order of the set does not matter.
///
/// # Arguments
///
/// * `candidate`: the box to test
/// * `existing`: the boxes already accepted
///
/// returns: bool
pub fn overlaps_any(candidate: &Aabb, existing: &[Aabb]) -> bool {
    existing
        .iter()
        .any(|x| classify(candidate, x) != OverlapResult::NoOverlap)
}
