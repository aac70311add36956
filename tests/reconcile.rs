use approx::assert_relative_eq;
use footing_recon::prelude::*;
use serde_json::json;

fn reaction(joint: &str, case: &str, fz: f64) -> serde_json::Value {
    json!({"Unique Name": joint, "Output Case": case, "FZ": fz})
}

fn coordinate(joint: &str, x: f64, y: f64) -> serde_json::Value {
    json!({"Object Name": joint, "Global X": x, "Global Y": y})
}

fn corner(footing: &str, joint: &str, x: f64, y: f64) -> serde_json::Value {
    json!({"Object Name": footing, "Joint": joint, "Global X": x, "Global Y": y})
}

/// Two rectangular footings from corner sheets, reactions at two joints
/// under two output cases, plus a spring reaction with no coordinates.
fn floor_plan() -> (Vec<Row>, Vec<Row>, Vec<Row>) {
    let reactions = rows_from_json(&json!([
        reaction("1", "DL", -320.0),
        reaction("2", "DL", -290.0),
        reaction("1", "1.2DL+1.6LL", -510.0),
        reaction("2", "1.2DL+1.6LL", -465.0),
        reaction("spring-1", "DL", -12.0),
    ]));
    let coords = rows_from_json(&json!([
        coordinate("1", 2000.0, 1000.0),
        coordinate("2", 9000.0, 1000.0),
    ]));
    let corners = rows_from_json(&json!([
        corner("F1", "11", 0.0, 0.0),
        corner("F1", "12", 4000.0, 0.0),
        corner("F1", "13", 0.0, 2000.0),
        corner("F1", "14", 4000.0, 2000.0),
        corner("F2", "21", 8000.0, 0.0),
        corner("F2", "22", 10000.0, 0.0),
        corner("F2", "23", 10000.0, 2000.0),
        corner("F2", "24", 8000.0, 2000.0),
    ]));
    (reactions, coords, corners)
}

#[test]
fn corner_strategy_end_to_end() {
    let (reactions, coords, corners) = floor_plan();
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::CornerRows(corners),
        &ReconcileConfig::default(),
    )
    .unwrap();

    // Inner-join completeness: 4 of 5 reaction rows have coordinates
    assert_eq!(outcome.records.len(), 4);
    assert_eq!(outcome.dropped_reactions, 1);
    assert!(outcome.degenerate_footings.is_empty());

    // Every record has a position and positive footing dimensions
    for record in &outcome.records {
        assert!(record.length_m().unwrap() > 0.0);
        assert!(record.width_m().unwrap() > 0.0);
    }

    // Joint 1 sits inside F1: the 4 m x 2 m rectangle from the corner sheet
    let record = outcome
        .records
        .iter()
        .find(|r| r.joint == "1")
        .unwrap();
    assert_eq!(record.footing_id(), Some("F1"));
    match &record.geometry {
        RecordGeometry::Derived(rect) => {
            assert_relative_eq!(rect.x_c, 2000.0);
            assert_relative_eq!(rect.y_c, 1000.0);
            assert_relative_eq!(rect.length_m, 4.0);
            assert_relative_eq!(rect.width_m, 2.0);
        }
        other => panic!("expected derived geometry, got {other:?}"),
    }

    // Joint 2 lands on the other footing
    let record = outcome
        .records
        .iter()
        .find(|r| r.joint == "2")
        .unwrap();
    assert_eq!(record.footing_id(), Some("F2"));
}

#[test]
fn corner_strategy_skips_degenerate_footing_and_continues() {
    let (reactions, coords, mut corners) = floor_plan();
    corners.extend(rows_from_json(&json!([
        corner("F0", "31", 500.0, 500.0),
    ])));
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::CornerRows(corners),
        &ReconcileConfig::default(),
    )
    .unwrap();

    assert_eq!(outcome.degenerate_footings, vec!["F0"]);
    // The run still resolves every surviving reaction against F1/F2
    assert_eq!(outcome.records.len(), 4);
    assert!(outcome
        .records
        .iter()
        .all(|r| matches!(r.footing_id(), Some("F1") | Some("F2"))));
}

#[test]
fn nearest_assignment_tie_break_is_deterministic() {
    // Centroids at (0,0) and (1000,0); the joint at (500,0) is exactly
    // equidistant. Lower footing id must win on every run.
    let reactions = rows_from_json(&json!([reaction("1", "DL", -100.0)]));
    let coords = rows_from_json(&json!([coordinate("1", 500.0, 0.0)]));
    let corners = rows_from_json(&json!([
        corner("FB", "21", 500.0, -500.0),
        corner("FB", "22", 1500.0, 500.0),
        corner("FA", "11", -500.0, -500.0),
        corner("FA", "12", 500.0, 500.0),
    ]));

    for _ in 0..10 {
        let outcome = reconcile(
            &reactions,
            &coords,
            &GeometrySource::CornerRows(corners.clone()),
            &ReconcileConfig::default(),
        )
        .unwrap();
        assert_eq!(outcome.records[0].footing_id(), Some("FA"));
    }
}

#[test]
fn bearing_strategy_sizes_from_reaction_magnitude() {
    let reactions = rows_from_json(&json!([
        reaction("1", "DL", -450.0),
        reaction("2", "DL", -100.0),
    ]));
    let coords = rows_from_json(&json!([
        coordinate("1", 0.0, 0.0),
        coordinate("2", 5000.0, 0.0),
    ]));
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::BearingPressure(150.0),
        &ReconcileConfig::default(),
    )
    .unwrap();

    let heavy = &outcome.records[0];
    assert_relative_eq!(heavy.required_area_m2().unwrap(), 3.0);
    assert_relative_eq!(heavy.length_m().unwrap(), 3.0_f64.sqrt(), epsilon = 1e-12);

    // The light reaction needs 0.667 m2 but is floored at a 1.0 m side
    let light = &outcome.records[1];
    assert_relative_eq!(light.required_area_m2().unwrap(), 100.0 / 150.0);
    assert_relative_eq!(light.length_m().unwrap(), 1.0);
    assert_relative_eq!(light.width_m().unwrap(), 1.0);
}

#[test]
fn explicit_strategy_left_join_semantics() {
    let reactions = rows_from_json(&json!([
        reaction("1", "DL", -100.0),
        reaction("2", "DL", -200.0),
    ]));
    let coords = rows_from_json(&json!([
        coordinate("1", 0.0, 0.0),
        coordinate("2", 6000.0, 0.0),
    ]));
    let sizes = rows_from_json(&json!([
        {"Unique Name": "2", "Footing_L_mm": 2400.0, "Footing_B_mm": 2000.0},
    ]));
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::SizeTable(sizes),
        &ReconcileConfig::default(),
    )
    .unwrap();

    // Joint 2 gets its table size; joint 1 has no row and no default
    assert_eq!(outcome.records[0].geometry, RecordGeometry::Missing);
    assert_relative_eq!(outcome.records[1].length_m().unwrap(), 2.4);
    assert_relative_eq!(outcome.records[1].width_m().unwrap(), 2.0);
}

#[test]
fn reconciliation_is_idempotent() {
    let (reactions, coords, corners) = floor_plan();
    let source = GeometrySource::CornerRows(corners);
    let config = ReconcileConfig::default();

    let first = reconcile(&reactions, &coords, &source, &config).unwrap();
    let second = reconcile(&reactions, &coords, &source, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn load_case_partition_covers_in_first_seen_order() {
    let (reactions, coords, corners) = floor_plan();
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::CornerRows(corners),
        &ReconcileConfig::default(),
    )
    .unwrap();

    let index = LoadCaseIndex::partition(&outcome.records);
    assert_eq!(index.cases(), ["DL", "1.2DL+1.6LL"]);
    assert_eq!(index.len(), outcome.records.len());
    for case in index.cases() {
        assert!(!index.records_for(case).is_empty());
        assert!(index.records_for(case).iter().all(|r| &r.output_case == case));
        assert_eq!(
            index.records_for(case).len(),
            outcome.records_for_case(case).len()
        );
    }
}
