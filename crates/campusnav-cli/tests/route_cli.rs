mod common;

use predicates::prelude::*;
use serde_json::Value;

use common::campusnav;

#[test]
fn route_prints_shortest_walk() {
    campusnav()
        .args(["route", "--from", "Library", "--to", "Main Gate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Library to Main Gate (4 stops):",
        ))
        .stdout(predicate::str::contains("START: Library"))
        .stdout(predicate::str::contains("STOP:  Student Cafe"))
        .stdout(predicate::str::contains("END:   Main Gate"))
        .stdout(predicate::str::contains("Total distance: 450 m (0.45 km)"))
        .stdout(predicate::str::contains("Estimated time: 9.0 min"))
        .stdout(predicate::str::contains("  - Library"))
        .stdout(predicate::str::contains("  - Gate"))
        .stdout(predicate::str::contains(
            "Step 3: From Science Block to Main Gate (200 m, 4.0 min)",
        ))
        .stdout(predicate::str::contains("Current time").not());
}

#[test]
fn route_json_output() {
    let output = campusnav()
        .args(["--format", "json", "route", "--from", "Library", "--to", "Main Gate"])
        .output()
        .expect("run campusnav");
    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(summary["start"], "Library");
    assert_eq!(summary["goal"], "Main Gate");
    assert_eq!(summary["hops"], 3);
    assert_eq!(summary["total_distance"], 450.0);
    assert_eq!(summary["total_time"], 9.0);
    assert_eq!(
        summary["landmarks"],
        serde_json::json!(["library", "cafe", "gate"])
    );
    assert!(summary.get("live_time").is_none());
}

#[test]
fn congestion_reports_live_time_but_keeps_stored_route() {
    campusnav()
        .args([
            "route",
            "--from",
            "Library",
            "--to",
            "Main Gate",
            "--congestion",
            "Student Cafe:Science Block=3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("STOP:  Student Cafe"))
        .stdout(predicate::str::contains("Estimated time: 9.0 min"))
        .stdout(predicate::str::contains(
            "Current time:   15.0 min (with congestion)",
        ));
}

#[test]
fn congestion_on_missing_walkway_fails() {
    campusnav()
        .args([
            "route",
            "--from",
            "Library",
            "--to",
            "Main Gate",
            "--congestion",
            "Library:Main Gate=2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no walkway between Library and Main Gate"));
}

#[test]
fn malformed_congestion_is_a_usage_error() {
    campusnav()
        .args([
            "route",
            "--from",
            "Library",
            "--to",
            "Main Gate",
            "--congestion",
            "Library-Main Gate",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected FROM:TO=FACTOR"));
}

#[test]
fn unreachable_destination_fails() {
    campusnav()
        .args(["route", "--from", "Library", "--to", "Boat House"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Library and Boat House",
        ));
}

#[test]
fn same_start_and_end_is_rejected() {
    campusnav()
        .args(["route", "--from", "Library", "--to", "Library"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "start and end locations cannot be the same",
        ));
}

#[test]
fn unknown_location_suggests_names() {
    campusnav()
        .args(["route", "--from", "Libary", "--to", "Main Gate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Libary"))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("'Library'"));
}
