//! Joint coordinate index - joint identifier to planar position lookup

use std::collections::HashMap;

use nalgebra::Point2;

use crate::rows::{field_f64, field_str, Row};

/// Lookup from joint identifier to planar position, in millimetres
#[derive(Debug, Clone, Default)]
pub struct JointCoordinateIndex {
    positions: HashMap<String, Point2<f64>>,
}

impl JointCoordinateIndex {
    /// Build the index from coordinate rows.
    ///
    /// Rows missing the identifier or either coordinate are dropped without
    /// error; sparse rows are a known characteristic of the export format.
    /// Duplicate identifiers overwrite, last row wins, since re-exports may
    /// append helper rows.
    pub fn build(coord_rows: &[Row]) -> Self {
        let mut positions = HashMap::new();
        for row in coord_rows {
            let Some(id) = field_str(row, "Object Name") else {
                continue;
            };
            let Some(x) = field_f64(row, "Global X") else {
                continue;
            };
            let Some(y) = field_f64(row, "Global Y") else {
                continue;
            };
            positions.insert(id, Point2::new(x, y));
        }
        Self { positions }
    }

    /// Get the position of a joint, if indexed
    pub fn position(&self, joint_id: &str) -> Option<Point2<f64>> {
        self.positions.get(joint_id).copied()
    }

    /// Number of indexed joints
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no joints were indexed
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::rows_from_json;
    use serde_json::json;

    #[test]
    fn test_build_and_lookup() {
        let rows = rows_from_json(&json!([
            {"Object Name": "7", "Global X": 1000.0, "Global Y": 2000.0},
            {"Object Name": "8", "Global X": 3000.0, "Global Y": 4000.0},
        ]));
        let index = JointCoordinateIndex::build(&rows);
        assert_eq!(index.len(), 2);
        assert_eq!(index.position("7"), Some(Point2::new(1000.0, 2000.0)));
        assert_eq!(index.position("99"), None);
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let rows = rows_from_json(&json!([
            {"Object Name": "7", "Global X": 1000.0, "Global Y": null},
            {"Object Name": null, "Global X": 1.0, "Global Y": 2.0},
            {"Object Name": "9", "Global X": 5.0, "Global Y": 6.0},
        ]));
        let index = JointCoordinateIndex::build(&rows);
        assert_eq!(index.len(), 1);
        assert!(index.position("7").is_none());
        assert!(index.position("9").is_some());
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let rows = rows_from_json(&json!([
            {"Object Name": "7", "Global X": 1.0, "Global Y": 1.0},
            {"Object Name": "7", "Global X": 9.0, "Global Y": 9.0},
        ]));
        let index = JointCoordinateIndex::build(&rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.position("7"), Some(Point2::new(9.0, 9.0)));
    }
}
