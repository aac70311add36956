//! footing-recon example - reconcile a small two-footing floor plan

use footing_recon::prelude::*;
use serde_json::json;

fn main() {
    env_logger::init();

    println!("=== footing-recon example: two footings, two load cases ===\n");

    // Parsed export rows, as a spreadsheet front end would hand them over.
    // Joint "spring-1" has no coordinate row and is dropped by the join.
    let reactions = rows_from_json(&json!([
        {"Unique Name": "1", "Output Case": "DL", "FZ": -320.0},
        {"Unique Name": "2", "Output Case": "DL", "FZ": -290.0},
        {"Unique Name": "1", "Output Case": "1.2DL+1.6LL", "FZ": -510.0},
        {"Unique Name": "2", "Output Case": "1.2DL+1.6LL", "FZ": -465.0},
        {"Unique Name": "spring-1", "Output Case": "DL", "FZ": -12.0},
    ]));
    let coords = rows_from_json(&json!([
        {"Object Name": "1", "Global X": 1000.0, "Global Y": 1000.0},
        {"Object Name": "2", "Global X": 7000.0, "Global Y": 1000.0},
    ]));
    let corners = rows_from_json(&json!([
        {"Object Name": "F1", "Joint": "11", "Global X": 0.0,    "Global Y": 0.0},
        {"Object Name": "F1", "Joint": "12", "Global X": 2000.0, "Global Y": 0.0},
        {"Object Name": "F1", "Joint": "13", "Global X": 2000.0, "Global Y": 2000.0},
        {"Object Name": "F1", "Joint": "14", "Global X": 0.0,    "Global Y": 2000.0},
        {"Object Name": "F2", "Joint": "21", "Global X": 6000.0, "Global Y": 0.0},
        {"Object Name": "F2", "Joint": "22", "Global X": 8000.0, "Global Y": 0.0},
        {"Object Name": "F2", "Joint": "23", "Global X": 8000.0, "Global Y": 2000.0},
        {"Object Name": "F2", "Joint": "24", "Global X": 6000.0, "Global Y": 2000.0},
    ]));

    let config = ReconcileConfig::default();

    // Strategy 1: footing rectangles derived from the corner sheet
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::CornerRows(corners),
        &config,
    )
    .expect("corner reconciliation failed");

    println!("Derived-from-corners:");
    println!(
        "  {} record(s), {} reaction(s) dropped by the join",
        outcome.records.len(),
        outcome.dropped_reactions
    );
    let index = LoadCaseIndex::partition(&outcome.records);
    for case in index.cases() {
        println!("  case '{case}':");
        for record in index.records_for(case) {
            println!(
                "    joint {} @ ({:.0}, {:.0}) mm -> footing {} ({:.1} x {:.1} m), FZ = {:.1} kN",
                record.joint,
                record.x,
                record.y,
                record.footing_id().unwrap_or("-"),
                record.length_m().unwrap_or(0.0),
                record.width_m().unwrap_or(0.0),
                record.fz
            );
        }
    }

    // Strategy 2: no geometry sheet, size from allowable bearing pressure
    let outcome = reconcile(
        &reactions,
        &coords,
        &GeometrySource::BearingPressure(150.0),
        &config,
    )
    .expect("bearing reconciliation failed");

    println!("\nComputed-from-bearing (q = 150 kPa, 1.0 m minimum side):");
    for record in &outcome.records {
        println!(
            "    joint {} [{}]: required area {:.2} m2, side {:.2} m",
            record.joint,
            record.output_case,
            record.required_area_m2().unwrap_or(0.0),
            record.length_m().unwrap_or(0.0)
        );
    }
}
