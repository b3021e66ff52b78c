use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use std::path::Path;
use tempfile::TempDir;

fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack_cli").unwrap();
    cmd.env("FINTRACK_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const TRANSACTIONS: &str = r#"[
    {"id": 1, "type": "expense", "category": "Food", "amount": 12.5, "date": "2024-03-15", "goal_id": null},
    {"id": 2, "type": "income", "category": "Salary", "amount": 3000, "date": "2024-03-01", "goal_id": null},
    {"id": 3, "type": "expense", "category": "Rent", "amount": 900, "date": "2024-04-02", "goal_id": null}
]"#;

#[test]
fn normalize_prints_canonical_series() {
    let home = tempfile::tempdir().unwrap();
    let input = write(&home, "trend.json", r#"[{"month": "Jan", "amount": 100}]"#);
    cli(home.path())
        .args(["normalize", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("\"labels\"").and(contains("\"Jan\"")).and(contains("100.0")));
}

#[test]
fn normalize_reads_stdin() {
    let home = tempfile::tempdir().unwrap();
    cli(home.path())
        .args(["normalize", "-"])
        .write_stdin(r#"{"labels": ["a"], "data": [4]}"#)
        .assert()
        .success()
        .stdout(contains("\"a\""));
}

#[test]
fn bucket_applies_range_and_period() {
    let home = tempfile::tempdir().unwrap();
    let input = write(&home, "trans.json", TRANSACTIONS);
    cli(home.path())
        .args([
            "bucket",
            input.to_str().unwrap(),
            "--period",
            "weekly",
            "--start",
            "2024-03-01",
            "--end",
            "2024-03-31",
        ])
        .assert()
        .success()
        .stdout(
            contains("\"periodKey\": \"2024-03-10\"")
                .and(contains("\"periodKey\": \"2024-02-25\""))
                .and(contains("Rent").not()),
        );
}

#[test]
fn bucket_rejects_one_sided_range() {
    let home = tempfile::tempdir().unwrap();
    let input = write(&home, "trans.json", TRANSACTIONS);
    cli(home.path())
        .args(["bucket", input.to_str().unwrap(), "--start", "2024-03-01"])
        .assert()
        .failure()
        .stderr(contains("both start and end"));
}

#[test]
fn bucket_uses_config_when_defaults_disabled() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("config")).unwrap();
    std::fs::write(
        home.path().join("config/config.json"),
        r#"{"default_period": "monthly", "default_to_current_month": false, "preview_limit": 2}"#,
    )
    .unwrap();
    let input = write(&home, "trans.json", TRANSACTIONS);
    cli(home.path())
        .args(["bucket", input.to_str().unwrap(), "--preview"])
        .assert()
        .success()
        .stdout(contains("\"has_more\": true").and(contains("\"periodKey\": \"2024-03\"")));
}

#[test]
fn error_envelope_fails_with_message() {
    let home = tempfile::tempdir().unwrap();
    let input = write(&home, "viz.json", r#"{"status": "error", "message": "Invalid period"}"#);
    cli(home.path())
        .args(["visualize", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Error loading visualization: Invalid period"));
}

#[test]
fn version_prints_build_metadata() {
    let home = tempfile::tempdir().unwrap();
    cli(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("fintrack"));
}
