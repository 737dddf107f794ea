//! CLI integration tests.

mod support;

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use squadforge::testkit::pool::pool_json;
use support::fixtures::{twenty_player_pool, TWENTY_SQUAD};
use tempfile::TempDir;

fn squadforge(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("squadforge");
    cmd.current_dir(dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn pool_file(dir: &TempDir) -> PathBuf {
    write(dir, "pool.json", &pool_json(&twenty_player_pool()))
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("bad JSON ({e}): {stdout}"))
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    squadforge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("top"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn build_prints_team_tables() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    squadforge(&dir)
        .args(["--color", "never", "build", "--workers", "1", "--players"])
        .arg(&pool)
        .assert()
        .success()
        .stdout(predicate::str::contains("4-4-2"))
        .stdout(predicate::str::contains("Foden"))
        .stdout(predicate::str::contains("Starting XI"))
        .stdout(predicate::str::contains("100.0"));
}

#[test]
fn build_json_report() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    let output = squadforge(&dir)
        .args(["--json", "build", "--workers", "2", "--players"])
        .arg(&pool)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["command"], "build");
    let report = &json["report"];
    assert_eq!(report["status"], "optimal");
    assert_eq!(report["lineup"]["formation"], "4-4-2");
    assert_eq!(report["captaincy"]["captain"]["id"], 11);
    assert_eq!(report["captaincy"]["vice_captain"]["id"], 12);
    assert!(report["generated_at"].is_string());

    let mut ids: Vec<u64> = report["squad"]["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, TWENTY_SQUAD.iter().map(|id| u64::from(*id)).collect::<Vec<_>>());
}

#[test]
fn build_budget_override_can_make_rules_infeasible() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    squadforge(&dir)
        .args(["build", "--budget", "80", "--players"])
        .arg(&pool)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cheapest valid squad costs"));
}

#[test]
fn build_rejects_malformed_pool() {
    let dir = TempDir::new().unwrap();
    let pool = write(
        &dir,
        "pool.json",
        r#"[
            {"id": 1, "position": "GK", "team": "ARS", "price": 4.5, "score": 2.0},
            {"id": 1, "position": "DEF", "team": "LIV", "price": 5.0, "score": 3.0}
        ]"#,
    );
    squadforge(&dir)
        .args(["build", "--players"])
        .arg(&pool)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate player id 1"));
}

#[test]
fn build_names_the_missing_record_field() {
    let dir = TempDir::new().unwrap();
    let pool = write(
        &dir,
        "pool.json",
        r#"[{"id": 1, "position": "GK", "price": 4.5, "score": 2.0}]"#,
    );
    squadforge(&dir)
        .args(["build", "--players"])
        .arg(&pool)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("player record 0 is malformed"))
        .stderr(predicate::str::contains("missing field `team`"));
}

#[test]
fn build_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    let config = write(
        &dir,
        "custom.toml",
        "[rules]\nformations = [\"5-3-2\"]\n\n[solver]\nworkers = 1\n",
    );
    let output = squadforge(&dir)
        .args(["--json", "build", "--players"])
        .arg(&pool)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["report"]["lineup"]["formation"], "5-3-2");
}

#[test]
fn top_lists_best_per_position() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    let output = squadforge(&dir)
        .args(["--json", "top", "-n", "2", "--players"])
        .arg(&pool)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    let mids = json["positions"]["MID"].as_array().unwrap();
    assert_eq!(mids.len(), 2);
    assert_eq!(mids[0]["id"], 11);
    assert_eq!(mids[1]["id"], 12);
}

#[test]
fn top_position_filter() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    squadforge(&dir)
        .args(["--color", "never", "top", "--position", "FWD", "--players"])
        .arg(&pool)
        .assert()
        .success()
        .stdout(predicate::str::contains("Haaland"))
        .stdout(predicate::str::contains("Foden").not());
}

#[test]
fn top_rejects_zero_count() {
    let dir = TempDir::new().unwrap();
    let pool = pool_file(&dir);
    squadforge(&dir)
        .args(["top", "-n", "0", "--players"])
        .arg(&pool)
        .assert()
        .code(3);
}

#[test]
fn check_accepts_valid_config() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "squadforge.toml", "[rules]\nbudget = 100.0\n");
    squadforge(&dir)
        .args(["--color", "never", "check", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn check_uses_default_file_name() {
    let dir = TempDir::new().unwrap();
    write(&dir, "squadforge.toml", "[rules]\nteam_cap = 2\n");
    let output = squadforge(&dir).args(["--json", "check"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["rules"]["team_cap"], 2);
}

#[test]
fn check_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.toml", "[rules]\nteam_cap = 0\n");
    squadforge(&dir)
        .args(["--color", "never", "check", "--config"])
        .arg(&config)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("team_cap"));
}

#[test]
fn check_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    squadforge(&dir)
        .args(["check", "--config", "absent.toml"])
        .assert()
        .code(6);
}
