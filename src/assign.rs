//! Nearest-footing assignment - maps a reaction point to the closest
//! derived footing centroid
//!
//! Plain O(footings) scan per point, which is fine at single-floor scale
//! (tens to low hundreds of footings). The contract is by-value in, footing
//! reference out, so a grid or k-d tree could replace the scan without
//! touching callers if models ever get large enough to matter.

use nalgebra::{distance_squared, Point2};

use crate::geometry::FootingRect;

/// Assigns points to the nearest footing centroid by squared Euclidean
/// distance.
///
/// Ties keep the first footing in slice order. [`footings_from_corners`]
/// returns footings in ascending-id order, so with that input the
/// deterministic tie-break is "lowest footing id wins".
///
/// [`footings_from_corners`]: crate::geometry::footings_from_corners
#[derive(Debug, Clone)]
pub struct NearestFootingAssigner<'a> {
    footings: &'a [FootingRect],
}

impl<'a> NearestFootingAssigner<'a> {
    /// Create an assigner over a set of footings
    pub fn new(footings: &'a [FootingRect]) -> Self {
        Self { footings }
    }

    /// Find the footing whose centroid is closest to `point`.
    ///
    /// Returns `None` only when the footing set is empty.
    pub fn assign(&self, point: Point2<f64>) -> Option<&'a FootingRect> {
        let mut best: Option<(&FootingRect, f64)> = None;
        for footing in self.footings {
            let d2 = distance_squared(&point, &footing.centroid());
            match best {
                Some((_, best_d2)) if d2 >= best_d2 => {}
                _ => best = Some((footing, d2)),
            }
        }
        best.map(|(footing, _)| footing)
    }
}
