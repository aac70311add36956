//! footing-recon - reconciles structural analysis export data into
//! foundation-load records
//!
//! The engine joins per-joint support reactions to joint coordinates,
//! resolves footing geometry for each reaction, and partitions the result
//! by output case. Footing geometry comes from whichever input the export
//! provides:
//! - corner points of footing outlines (bounding rectangles, reactions
//!   assigned to the nearest footing centroid)
//! - an explicit per-joint size table
//! - nothing at all, in which case square footings are sized from an
//!   allowable bearing pressure
//!
//! Spreadsheet parsing, sheet selection, and rendering are out of scope;
//! the engine consumes already-parsed row sets and emits reconciled
//! records for a display layer.
//!
//! Units: coordinates in mm, reactions in kN, footing sizes in metres,
//! bearing pressure in kPa.
//!
//! ## Example
//! ```rust
//! use footing_recon::prelude::*;
//! use serde_json::json;
//!
//! let reactions = rows_from_json(&json!([
//!     {"Unique Name": "7", "Output Case": "1.2DL+1.6LL", "FZ": -450.0},
//! ]));
//! let coords = rows_from_json(&json!([
//!     {"Object Name": "7", "Global X": 2000.0, "Global Y": 3000.0},
//! ]));
//!
//! // No geometry in the export: size square footings from bearing capacity
//! let outcome = reconcile(
//!     &reactions,
//!     &coords,
//!     &GeometrySource::BearingPressure(150.0),
//!     &ReconcileConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(outcome.records.len(), 1);
//! assert!((outcome.records[0].length_m().unwrap() - 3.0_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod assign;
pub mod cases;
pub mod error;
pub mod geometry;
pub mod joints;
pub mod reconcile;
pub mod rows;
pub mod schema;

// Re-export common types
pub mod prelude {
    pub use crate::assign::NearestFootingAssigner;
    pub use crate::cases::{distinct_cases, LoadCaseIndex};
    pub use crate::error::{ReconError, ReconResult};
    pub use crate::geometry::{
        footing_from_corners, footings_from_corners, size_from_bearing, sizes_from_table,
        BearingSize, FootingRect, FootingSize, GeometrySource, RecordGeometry,
    };
    pub use crate::joints::JointCoordinateIndex;
    pub use crate::reconcile::{
        reconcile, ReconcileConfig, ReconciledRecord, Reconciliation, BEARING_KPA_MAX,
        BEARING_KPA_MIN,
    };
    pub use crate::rows::{field_f64, field_str, rows_from_json, Row};
    pub use crate::schema::validate_schema;
}
