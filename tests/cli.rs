/// CLI integration tests for healthlens.
///
/// Each test spawns the compiled binary and points `HEALTHLENS_HOME` at a
/// fresh `TempDir` so no real user data is touched.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("healthlens");
    c.env("HEALTHLENS_HOME", dir.path());
    c.env_remove("RUST_LOG");
    c
}

fn init_dir(dir: &TempDir) {
    cmd_in(dir).args(["init", "--skip"]).assert().success();
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

fn log_food(dir: &TempDir, date: &str, name: &str, kcal: &str, protein: &str) {
    cmd_in(dir)
        .args(["--date", date, "log", "food", name, kcal, "--protein", protein])
        .assert()
        .success();
}

// ── init / config ────────────────────────────────────────────────────────────

#[test]
fn test_init_skip_creates_config_file() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config initialized"));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["config", "set", "age", "30"])
        .assert()
        .success();
    let out = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&out);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["config"]["profile"]["age"], 30);
}

#[test]
fn test_config_set_unknown_key_fails_with_envelope() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let out = cmd_in(&dir)
        .args(["config", "set", "shoe_size", "44"])
        .assert()
        .failure();
    let json = parse_stderr_json(&out);
    assert_eq!(json["status"], "error");
    assert_eq!(json["command"], "config");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("unknown config key")
    );
}

// ── log ──────────────────────────────────────────────────────────────────────

#[test]
fn test_log_food_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let out = cmd_in(&dir)
        .args([
            "--date", "2025-01-05", "log", "food", "oats", "350", "--protein", "12", "--carbs",
            "60", "--fat", "6",
        ])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["command"], "log");
    assert_eq!(json["data"]["entry"]["name"], "oats");
    assert_eq!(json["data"]["entry"]["date"], "2025-01-05");
    assert_eq!(json["data"]["entry"]["calories"], 350.0);
}

#[test]
fn test_log_food_rejects_negative_calories() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["log", "food", "oats", "--", "-5"])
        .assert()
        .failure();
}

#[test]
fn test_log_run_reports_pace() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let out = cmd_in(&dir)
        .args(["--date", "2025-01-05", "log", "run", "5", "--duration", "25"])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["data"]["pace_min_per_km"], 5.0);
}

// ── analytics commands ───────────────────────────────────────────────────────

#[test]
fn test_daily_and_streak() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    for d in ["2025-01-01", "2025-01-02", "2025-01-04", "2025-01-05"] {
        log_food(&dir, d, "meal", "2000", "120");
    }

    let out = cmd_in(&dir)
        .args(["--date", "2025-01-05", "daily", "--period", "5", "--fill"])
        .assert()
        .success();
    let json = parse_json(&out);
    let days = json["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[2]["calories"], 0.0);

    let out = cmd_in(&dir)
        .args(["--date", "2025-01-05", "streak"])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["data"]["current_streak"], 2);
    assert_eq!(json["data"]["longest_streak"], 2);
    assert_eq!(json["data"]["total_days_logged"], 4);
}

#[test]
fn test_compare_two_weeks() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    log_food(&dir, "2025-01-03", "meal", "2000", "100");
    log_food(&dir, "2025-01-10", "meal", "2500", "100");

    let out = cmd_in(&dir)
        .args(["--date", "2025-01-14", "compare", "--days", "7"])
        .assert()
        .success();
    let json = parse_json(&out);
    let c = &json["data"]["summary"]["comparison"];
    assert_eq!(c["calories_diff"], 500.0);
    assert_eq!(c["calories_percent"], 25.0);
}

#[test]
fn test_pace_from_logged_weights() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    for (d, w) in [("2025-01-01", "80"), ("2025-01-15", "79")] {
        cmd_in(&dir)
            .args(["--date", d, "log", "weight", w])
            .assert()
            .success();
    }
    let out = cmd_in(&dir)
        .args(["--date", "2025-01-15", "pace", "--period", "30"])
        .assert()
        .success();
    let json = parse_json(&out);
    let rate = json["data"]["pace"]["weekly_rate"].as_f64().unwrap();
    assert!((rate + 0.5).abs() < 1e-9);
    assert_eq!(json["data"]["pace"]["pace_assessment"], "healthy");
}

#[test]
fn test_macros_incomplete_then_complete() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let out = cmd_in(&dir).arg("macros").assert().success();
    let json = parse_json(&out);
    assert!(json["data"]["recommendation"].is_null());
    assert!(!json["data"]["missing"].as_array().unwrap().is_empty());

    for (k, v) in [
        ("age", "30"),
        ("gender", "male"),
        ("height", "180"),
        ("weight", "80"),
        ("goal", "cut"),
    ] {
        cmd_in(&dir).args(["config", "set", k, v]).assert().success();
    }
    let out = cmd_in(&dir).arg("macros").assert().success();
    let json = parse_json(&out);
    let calories = json["data"]["recommendation"]["calories"].as_f64().unwrap();
    assert!((calories - 2259.0).abs() < 1e-6);
    assert_eq!(json["data"]["recommendation"]["protein_g"], 160.0);
}

#[test]
fn test_score_and_analytics_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    for d in 1..=7 {
        log_food(&dir, &format!("2025-01-{:02}", d), "meal", "2000", "150");
    }

    let out = cmd_in(&dir)
        .args(["--date", "2025-01-07", "score", "--period", "7"])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["data"]["consistency"]["score"], 100.0);
    assert!(json["data"]["nutrition"]["grade"].is_string());

    let out = cmd_in(&dir)
        .args(["--date", "2025-01-07", "analytics", "--period", "7"])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["command"], "analytics");
    assert_eq!(json["data"]["streaks"]["current_streak"], 7);
    assert_eq!(json["data"]["daily_data"].as_array().unwrap().len(), 7);
}

#[test]
fn test_analytics_human_output() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    log_food(&dir, "2025-01-07", "meal", "2000", "150");
    cmd_in(&dir)
        .args(["--date", "2025-01-07", "analytics", "--human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HealthLens"));
}

#[test]
fn test_invalid_period_is_an_error() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["daily", "--period", "forever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("healthlens"));
}

#[test]
fn test_oversized_periods_fail_with_envelope() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let out = cmd_in(&dir)
        .args(["--date", "2025-01-05", "daily", "--period", "1000000000"])
        .assert()
        .failure();
    let json = parse_stderr_json(&out);
    assert_eq!(json["command"], "daily");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("window out of date range")
    );

    cmd_in(&dir)
        .args(["--date", "2025-01-05", "compare", "--days", "90000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("window out of date range"));
}
