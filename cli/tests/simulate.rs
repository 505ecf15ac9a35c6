use assert_cmd::Command;
use predicates::prelude::*;

fn skirmish() -> Command {
    Command::cargo_bin("skirmish").unwrap()
}

#[test]
fn simulate_builtin_roster_prints_a_win_rate() {
    skirmish()
        .args([
            "simulate",
            "--trials",
            "2000",
            "--min-samples",
            "200",
            "--threshold",
            "0.05",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("win rate:"))
        .stdout(predicate::str::contains("final HP of Zylet"));
}

#[test]
fn simulate_json_output_is_parseable() {
    let output = skirmish()
        .args([
            "simulate",
            "--trials",
            "1000",
            "--min-samples",
            "100",
            "--threshold",
            "0.05",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["trials"].as_u64().unwrap() > 0);
    assert_eq!(report["samples"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_roster_file_fails() {
    skirmish()
        .args(["simulate", "--roster", "no/such/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn sweep_prints_one_line_per_configuration() {
    skirmish()
        .args([
            "sweep",
            "--hp",
            "1,7",
            "--trials",
            "1000",
            "--min-samples",
            "100",
            "--threshold",
            "0.05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("evil max HP   1"))
        .stdout(predicate::str::contains("evil max HP   7"));
}

#[test]
fn roster_dump_round_trips_through_json() {
    let output = skirmish().args(["roster-dump"]).output().unwrap();
    assert!(output.status.success());
    let defs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(defs.as_array().unwrap().len(), 3);
    assert_eq!(defs[0]["name"], "Zylet");
}

#[test]
fn unknown_builtin_roster_fails() {
    skirmish()
        .args(["roster-dump", "--name", "dragon_lair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown builtin roster"));
}
