//! Schema validation - checks a row set carries the fields its role requires
//!
//! Field names are fixed identifiers from the source export format and are
//! matched exactly. Validation runs before any join so that a mis-mapped
//! table fails with a diagnostic naming the role and every missing column,
//! rather than producing an empty or garbled join downstream.

use crate::error::{ReconError, ReconResult};
use crate::rows::Row;

/// Role label for the joint reactions table
pub const REACTIONS_ROLE: &str = "Joint Reactions";
/// Required columns for the joint reactions table
pub const REACTIONS_FIELDS: [&str; 3] = ["Unique Name", "Output Case", "FZ"];

/// Role label for the joint coordinates table
pub const COORDINATES_ROLE: &str = "Joint Coordinates";
/// Required columns for the joint coordinates table
pub const COORDINATES_FIELDS: [&str; 3] = ["Object Name", "Global X", "Global Y"];

/// Role label for the footing/area corner geometry table
pub const CORNERS_ROLE: &str = "Footing Corners";
/// Required columns for the corner geometry table
pub const CORNERS_FIELDS: [&str; 4] = ["Object Name", "Joint", "Global X", "Global Y"];

/// Role label for the explicit footing size table
pub const SIZES_ROLE: &str = "Footing Sizes";
/// Required columns for the explicit footing size table
pub const SIZES_FIELDS: [&str; 3] = ["Unique Name", "Footing_L_mm", "Footing_B_mm"];

/// Check that every required column appears in the row set.
///
/// A column counts as present when at least one row carries it as a key,
/// null cells included. An empty row set therefore fails for every role,
/// which is the desired diagnostic when the wrong sheet was mapped. Pure
/// check, no side effects.
pub fn validate_schema(rows: &[Row], required: &[&str], role: &str) -> ReconResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !rows.iter().any(|row| row.contains_key(**field)))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReconError::Schema {
            role: role.to_string(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::rows_from_json;
    use serde_json::json;

    #[test]
    fn test_valid_schema_passes() {
        let rows = rows_from_json(&json!([
            {"Unique Name": "1", "Output Case": "DL", "FZ": -100.0},
        ]));
        assert!(validate_schema(&rows, &REACTIONS_FIELDS, REACTIONS_ROLE).is_ok());
    }

    #[test]
    fn test_null_cells_still_count_as_present() {
        let rows = rows_from_json(&json!([
            {"Unique Name": null, "Output Case": null, "FZ": null},
        ]));
        assert!(validate_schema(&rows, &REACTIONS_FIELDS, REACTIONS_ROLE).is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        // A coordinates table supplied where reactions were expected
        let rows = rows_from_json(&json!([
            {"Object Name": "1", "Global X": 0.0, "Global Y": 0.0},
        ]));
        let err = validate_schema(&rows, &REACTIONS_FIELDS, REACTIONS_ROLE).unwrap_err();
        match err {
            crate::error::ReconError::Schema { role, missing } => {
                assert_eq!(role, REACTIONS_ROLE);
                assert_eq!(missing, vec!["Unique Name", "Output Case", "FZ"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_row_set_fails() {
        let err = validate_schema(&[], &COORDINATES_FIELDS, COORDINATES_ROLE).unwrap_err();
        assert!(err.to_string().contains("Joint Coordinates"));
        assert!(err.to_string().contains("Object Name"));
    }
}
