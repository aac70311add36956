//! Reaction-footing reconciliation - the orchestrating entry point
//!
//! [`reconcile`] joins reaction rows to joint positions, resolves footing
//! geometry via the declared [`GeometrySource`], and emits one
//! [`ReconciledRecord`] per surviving reaction row. Reactions without a
//! coordinate match are dropped, not fabricated: exports routinely contain
//! non-joint reaction entries (spring supports and the like) with no footing
//! context. The drop count is returned so an unexpectedly large rate is
//! visible to the caller.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::assign::NearestFootingAssigner;
use crate::error::{ReconError, ReconResult};
use crate::geometry::{
    footings_from_corners, size_from_bearing, sizes_from_table, FootingSize, GeometrySource,
    RecordGeometry,
};
use crate::joints::JointCoordinateIndex;
use crate::rows::{field_f64, field_str, Row};
use crate::schema::{
    validate_schema, COORDINATES_FIELDS, COORDINATES_ROLE, CORNERS_FIELDS, CORNERS_ROLE,
    REACTIONS_FIELDS, REACTIONS_ROLE, SIZES_FIELDS, SIZES_ROLE,
};

/// Lowest accepted allowable bearing pressure, kPa
pub const BEARING_KPA_MIN: f64 = 50.0;
/// Highest accepted allowable bearing pressure, kPa
pub const BEARING_KPA_MAX: f64 = 500.0;

/// Configuration for a reconciliation run.
///
/// All knobs are explicit parameters; the engine keeps no module-level
/// defaults and no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Square size in mm substituted when the explicit size table has no row
    /// for a joint. `None` leaves such records without geometry.
    pub default_footing_size_mm: Option<f64>,
    /// Minimum footing side in metres for bearing-capacity sizing
    pub min_footing_side_m: f64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            default_footing_size_mm: None,
            min_footing_side_m: 1.0,
        }
    }
}

impl ReconcileConfig {
    /// Set the fallback size for joints absent from the explicit size table
    pub fn with_default_footing_size_mm(mut self, size_mm: f64) -> Self {
        self.default_footing_size_mm = Some(size_mm);
        self
    }

    /// Set the minimum footing side for bearing-capacity sizing
    pub fn with_min_footing_side_m(mut self, side_m: f64) -> Self {
        self.min_footing_side_m = side_m;
        self
    }

    fn validate(&self) -> ReconResult<()> {
        if !(self.min_footing_side_m > 0.0 && self.min_footing_side_m.is_finite()) {
            return Err(ReconError::Configuration(format!(
                "minimum footing side must be a positive number of metres, got {}",
                self.min_footing_side_m
            )));
        }
        if let Some(size_mm) = self.default_footing_size_mm {
            if !(size_mm > 0.0 && size_mm.is_finite()) {
                return Err(ReconError::Configuration(format!(
                    "default footing size must be a positive number of mm, got {size_mm}"
                )));
            }
        }
        Ok(())
    }
}

/// One reaction joined with its joint position and resolved footing geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledRecord {
    /// Joint identifier
    pub joint: String,
    /// Output case (load combination) name
    pub output_case: String,
    /// Vertical reaction in kN, sign per source convention
    pub fz: f64,
    /// Joint global X in mm
    pub x: f64,
    /// Joint global Y in mm
    pub y: f64,
    /// Resolved footing geometry
    pub geometry: RecordGeometry,
}

impl ReconciledRecord {
    /// Joint position as a point, in mm
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Footing identifier, present only for corner-derived geometry
    pub fn footing_id(&self) -> Option<&str> {
        match &self.geometry {
            RecordGeometry::Derived(rect) => Some(&rect.id),
            _ => None,
        }
    }

    /// Footing length in metres, if geometry was resolved
    pub fn length_m(&self) -> Option<f64> {
        match &self.geometry {
            RecordGeometry::Derived(rect) => Some(rect.length_m),
            RecordGeometry::Explicit(size) => Some(size.length_m),
            RecordGeometry::Computed(size) => Some(size.side_m),
            RecordGeometry::Missing => None,
        }
    }

    /// Footing width in metres, if geometry was resolved
    pub fn width_m(&self) -> Option<f64> {
        match &self.geometry {
            RecordGeometry::Derived(rect) => Some(rect.width_m),
            RecordGeometry::Explicit(size) => Some(size.width_m),
            RecordGeometry::Computed(size) => Some(size.side_m),
            RecordGeometry::Missing => None,
        }
    }

    /// Required bearing area in square metres, bearing-capacity strategy only
    pub fn required_area_m2(&self) -> Option<f64> {
        match &self.geometry {
            RecordGeometry::Computed(size) => Some(size.required_area_m2),
            _ => None,
        }
    }

    /// Annotation text for rendering at the footing location,
    /// e.g. `-450.0 kN` / `1.7 × 1.7 m`
    pub fn label(&self) -> String {
        match (self.length_m(), self.width_m()) {
            (Some(l), Some(b)) => format!("{:.1} kN\n{:.1} × {:.1} m", self.fz, l, b),
            _ => format!("{:.1} kN", self.fz),
        }
    }
}

/// Output of a reconciliation run: records plus run metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// One record per reaction row that survived the coordinate join,
    /// in reaction-row order
    pub records: Vec<ReconciledRecord>,
    /// Reaction rows dropped for lack of a coordinate match
    pub dropped_reactions: usize,
    /// Footing ids skipped for degenerate corner geometry
    pub degenerate_footings: Vec<String>,
}

impl Reconciliation {
    /// Records belonging to one output case
    pub fn records_for_case(&self, case: &str) -> Vec<&ReconciledRecord> {
        self.records
            .iter()
            .filter(|r| r.output_case == case)
            .collect()
    }
}

/// Reconcile reaction rows with joint coordinates and footing geometry.
///
/// Validates every input row set against its role schema, builds the joint
/// coordinate index, inner-joins reactions to positions, resolves geometry
/// per `source`, and emits the reconciled records. Schema and configuration
/// problems fail the whole run up front; join mismatches and degenerate
/// footings are skipped and reported in the output metadata.
pub fn reconcile(
    reaction_rows: &[Row],
    coord_rows: &[Row],
    source: &GeometrySource,
    config: &ReconcileConfig,
) -> ReconResult<Reconciliation> {
    config.validate()?;

    validate_schema(reaction_rows, &REACTIONS_FIELDS, REACTIONS_ROLE)?;
    validate_schema(coord_rows, &COORDINATES_FIELDS, COORDINATES_ROLE)?;
    match source {
        GeometrySource::CornerRows(rows) => validate_schema(rows, &CORNERS_FIELDS, CORNERS_ROLE)?,
        GeometrySource::SizeTable(rows) => validate_schema(rows, &SIZES_FIELDS, SIZES_ROLE)?,
        GeometrySource::BearingPressure(q) => {
            if !(*q >= BEARING_KPA_MIN && *q <= BEARING_KPA_MAX) {
                return Err(ReconError::Configuration(format!(
                    "bearing pressure {q} kPa is outside the accepted range \
                     {BEARING_KPA_MIN}-{BEARING_KPA_MAX} kPa"
                )));
            }
        }
    }

    let index = JointCoordinateIndex::build(coord_rows);

    // Inner join reactions to positions. Rows missing id, case, or FZ are
    // sparse export data and are skipped before the join.
    let mut joined = Vec::new();
    let mut dropped_reactions = 0usize;
    for row in reaction_rows {
        let (Some(joint), Some(output_case), Some(fz)) = (
            field_str(row, "Unique Name"),
            field_str(row, "Output Case"),
            field_f64(row, "FZ"),
        ) else {
            continue;
        };
        match index.position(&joint) {
            Some(pos) => joined.push((joint, output_case, fz, pos)),
            None => dropped_reactions += 1,
        }
    }
    if dropped_reactions > 0 {
        log::warn!(
            "{dropped_reactions} reaction row(s) had no coordinate match and were dropped"
        );
    }

    let mut degenerate_footings = Vec::new();
    let records: Vec<ReconciledRecord> = match source {
        GeometrySource::CornerRows(rows) => {
            let (footings, degenerate) = footings_from_corners(rows);
            degenerate_footings = degenerate;
            if footings.is_empty() && !joined.is_empty() {
                log::warn!("no usable footing could be derived from the corner rows");
            }
            let assigner = NearestFootingAssigner::new(&footings);
            joined
                .into_iter()
                .map(|(joint, output_case, fz, pos)| {
                    let geometry = match assigner.assign(pos) {
                        Some(rect) => RecordGeometry::Derived(rect.clone()),
                        None => RecordGeometry::Missing,
                    };
                    ReconciledRecord {
                        joint,
                        output_case,
                        fz,
                        x: pos.x,
                        y: pos.y,
                        geometry,
                    }
                })
                .collect()
        }
        GeometrySource::SizeTable(rows) => {
            let sizes = sizes_from_table(rows);
            let default_size = config.default_footing_size_mm.map(|mm| FootingSize {
                length_m: mm / 1000.0,
                width_m: mm / 1000.0,
            });
            joined
                .into_iter()
                .map(|(joint, output_case, fz, pos)| {
                    let geometry = sizes
                        .get(&joint)
                        .copied()
                        .or(default_size)
                        .map(RecordGeometry::Explicit)
                        .unwrap_or(RecordGeometry::Missing);
                    ReconciledRecord {
                        joint,
                        output_case,
                        fz,
                        x: pos.x,
                        y: pos.y,
                        geometry,
                    }
                })
                .collect()
        }
        GeometrySource::BearingPressure(q) => joined
            .into_iter()
            .map(|(joint, output_case, fz, pos)| ReconciledRecord {
                joint,
                output_case,
                fz,
                x: pos.x,
                y: pos.y,
                geometry: RecordGeometry::Computed(size_from_bearing(
                    fz,
                    *q,
                    config.min_footing_side_m,
                )),
            })
            .collect(),
    };

    log::debug!(
        "reconciled {} record(s), dropped {}, degenerate footing(s): {}",
        records.len(),
        dropped_reactions,
        degenerate_footings.len()
    );

    Ok(Reconciliation {
        records,
        dropped_reactions,
        degenerate_footings,
    })
}
