//! Footing geometry resolution - three strategies for obtaining footing
//! rectangles
//!
//! Which strategy applies is a property of the input tables the caller has,
//! declared once via [`GeometrySource`], not a per-row branch on optional
//! columns. Each strategy is a total, pure function over its own inputs:
//!
//! - [`footings_from_corners`] - bounding rectangles from area corner points
//! - [`sizes_from_table`] - explicit per-joint length/width lookup
//! - [`size_from_bearing`] - square sizing from reaction and bearing capacity

use std::collections::{BTreeMap, HashMap};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{ReconError, ReconResult};
use crate::rows::{field_f64, field_str, Row};

/// Declares which geometry inputs are available for a reconciliation run
#[derive(Debug, Clone)]
pub enum GeometrySource {
    /// Footing/area corner rows; rectangles are derived per footing id and
    /// reactions are assigned to the nearest footing centroid
    CornerRows(Vec<Row>),
    /// Explicit per-joint size rows, joined by joint identifier
    SizeTable(Vec<Row>),
    /// No geometry input; square footings are sized from the reaction and
    /// this allowable bearing pressure in kPa
    BearingPressure(f64),
}

/// Axis-aligned footing rectangle derived from corner points.
///
/// Bounds and centroid are in millimetres (export coordinates); length and
/// width are in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingRect {
    /// Footing identifier from the corner table
    pub id: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Centroid X in mm
    pub x_c: f64,
    /// Centroid Y in mm
    pub y_c: f64,
    /// Plan length (X extent) in metres
    pub length_m: f64,
    /// Plan width (Y extent) in metres
    pub width_m: f64,
}

impl FootingRect {
    /// Centroid as a point, in mm
    pub fn centroid(&self) -> Point2<f64> {
        Point2::new(self.x_c, self.y_c)
    }
}

/// Explicit per-joint footing size in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingSize {
    pub length_m: f64,
    pub width_m: f64,
}

/// Square footing sized from bearing capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingSize {
    /// Side of the square footing in metres
    pub side_m: f64,
    /// Required area `|FZ| / q` in square metres, before the minimum-side floor
    pub required_area_m2: f64,
}

/// Geometry attached to a reconciled record, tagged by strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordGeometry {
    /// Rectangle derived from corner points, shared by every reaction
    /// assigned to that footing
    Derived(FootingRect),
    /// Size taken from the explicit per-joint table (or the configured
    /// default when the joint had no size row)
    Explicit(FootingSize),
    /// Square side computed from bearing capacity
    Computed(BearingSize),
    /// Explicit lookup found no size row and no default was configured;
    /// the renderer draws a plain marker
    Missing,
}

/// Compute the bounding rectangle of one footing's corner points.
///
/// Fails with [`ReconError::DegenerateGeometry`] when the points cannot
/// describe a rectangle with positive area: fewer than two distinct corner
/// positions, or zero extent along either axis (collinear corners).
pub fn footing_from_corners(id: &str, points: &[Point2<f64>]) -> ReconResult<FootingRect> {
    let distinct = distinct_count(points);
    if distinct < 2 {
        return Err(ReconError::DegenerateGeometry(
            id.to_string(),
            format!("only {distinct} distinct corner point(s)"),
        ));
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    if x_max == x_min || y_max == y_min {
        return Err(ReconError::DegenerateGeometry(
            id.to_string(),
            "zero extent along one axis".to_string(),
        ));
    }

    Ok(FootingRect {
        id: id.to_string(),
        x_min,
        x_max,
        y_min,
        y_max,
        x_c: (x_min + x_max) / 2.0,
        y_c: (y_min + y_max) / 2.0,
        length_m: (x_max - x_min) / 1000.0,
        width_m: (y_max - y_min) / 1000.0,
    })
}

/// Derive footing rectangles from area corner rows.
///
/// Rows are grouped by footing id (`Object Name`); rows missing the footing
/// id, corner joint id, or either coordinate are dropped as sparse export
/// data. Degenerate groups are skipped and their ids returned alongside the
/// resolved footings. The returned footings are ordered by ascending id,
/// which downstream nearest-assignment relies on for its tie-break.
pub fn footings_from_corners(corner_rows: &[Row]) -> (Vec<FootingRect>, Vec<String>) {
    let mut groups: BTreeMap<String, Vec<Point2<f64>>> = BTreeMap::new();
    for row in corner_rows {
        let Some(footing_id) = field_str(row, "Object Name") else {
            continue;
        };
        if field_str(row, "Joint").is_none() {
            continue;
        }
        let (Some(x), Some(y)) = (field_f64(row, "Global X"), field_f64(row, "Global Y")) else {
            continue;
        };
        groups.entry(footing_id).or_default().push(Point2::new(x, y));
    }

    let mut footings = Vec::with_capacity(groups.len());
    let mut degenerate = Vec::new();
    for (id, points) in &groups {
        match footing_from_corners(id, points) {
            Ok(rect) => footings.push(rect),
            Err(err) => {
                log::warn!("skipping footing: {err}");
                degenerate.push(id.clone());
            }
        }
    }
    (footings, degenerate)
}

/// Build the explicit per-joint size lookup from a size table.
///
/// Sizes are given in millimetres and converted to metres. Rows missing the
/// joint id or either dimension, or with a non-positive dimension, are
/// dropped. Duplicate joint ids overwrite, last row wins.
pub fn sizes_from_table(size_rows: &[Row]) -> HashMap<String, FootingSize> {
    let mut sizes = HashMap::new();
    for row in size_rows {
        let Some(joint_id) = field_str(row, "Unique Name") else {
            continue;
        };
        let (Some(l_mm), Some(b_mm)) = (
            field_f64(row, "Footing_L_mm"),
            field_f64(row, "Footing_B_mm"),
        ) else {
            continue;
        };
        if l_mm <= 0.0 || b_mm <= 0.0 {
            log::debug!("ignoring non-positive size for joint '{joint_id}'");
            continue;
        }
        sizes.insert(
            joint_id,
            FootingSize {
                length_m: l_mm / 1000.0,
                width_m: b_mm / 1000.0,
            },
        );
    }
    sizes
}

/// Size a square footing from the reaction magnitude and allowable bearing
/// pressure.
///
/// Required area is `|FZ| / q`; the side is floored at `min_side_m` as a
/// conservative minimum-size policy, not a structural check. Tension
/// reactions are sized by magnitude, same as compression, matching the
/// source tool's convention.
pub fn size_from_bearing(fz_kn: f64, bearing_kpa: f64, min_side_m: f64) -> BearingSize {
    let required_area_m2 = fz_kn.abs() / bearing_kpa;
    BearingSize {
        side_m: required_area_m2.sqrt().max(min_side_m),
        required_area_m2,
    }
}

fn distinct_count(points: &[Point2<f64>]) -> usize {
    let mut seen: Vec<Point2<f64>> = Vec::new();
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}
