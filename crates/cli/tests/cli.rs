use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("figure-cli").unwrap()
}

#[test]
fn classify_prints_label() {
    cli()
        .args(["classify", "--points", "0,0 3,0 0,4"])
        .assert()
        .success()
        .stdout("triangle: right\n");
}

#[test]
fn classify_bowtie() {
    cli()
        .args(["classify", "--points", "0,0 2,2 2,0 0,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("self-intersecting: quadrilateral"));
}

#[test]
fn classify_json_report() {
    let out = cli()
        .args(["classify", "--points", "0,0 2,0 2,2 0,2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["category"], "quadrilateral");
    assert_eq!(report["subtype"], "square");
    assert_eq!(report["points"][0]["color"], "red");
    assert_eq!(report["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn shrunk_figure_needs_loop_policy() {
    let square_with_midpoint = "0,0 1,0 2,0 2,2 0,2";
    cli()
        .args(["classify", "--points", square_with_midpoint])
        .assert()
        .failure()
        .stderr(predicate::str::contains("references point 4"));
    cli()
        .args([
            "classify",
            "--points",
            square_with_midpoint,
            "--edge-policy",
            "loop",
        ])
        .assert()
        .success()
        .stdout("quadrilateral: square\n");
}

#[test]
fn explicit_edges_and_bad_input() {
    cli()
        .args(["classify", "--points", "0,0 4,0 3,2 1,2", "--edges", "0-1 1-2 2-3 3-0"])
        .assert()
        .success()
        .stdout("quadrilateral: trapezoid\n");
    cli()
        .args(["classify", "--points", "0,0 nope"])
        .assert()
        .failure();
}

#[test]
fn generate_json_lines_are_reproducible() {
    let run = || {
        cli()
            .args(["generate", "--seed", "42", "--count", "5"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());
    let lines: Vec<Value> = String::from_utf8(first)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    for r in &lines {
        assert!(r["label"].is_string());
    }
}

#[test]
fn generate_to_file_writes_sidecar() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("batch.json");
    cli()
        .args(["generate", "--seed", "3", "--count", "4", "--out"])
        .arg(&out)
        .assert()
        .success();
    let reports: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 4);

    let sidecar = dir.path().join("batch.provenance.json");
    let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
    assert_eq!(prov["params"]["seed"], 3);
    assert_eq!(prov["replay"].as_array().unwrap().len(), 4);
}

#[test]
fn report_prints_version() {
    cli()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}
