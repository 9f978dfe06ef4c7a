//! End-to-end runs of the `swipedeck replay` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const JOBS: &str = r#"[
    {"id": "j1", "title": "Barista", "tags": ["coffee"], "salary_min": 18, "salary_max": 22},
    {"id": "j2", "title": "Night porter", "is_active": false},
    {"id": "j3", "title": "Courier", "imageUrls": ["https://example.com/bike.png"]}
]"#;

fn run(dir: &Path, script: &str, extra: &[&str]) -> Output {
    fs::write(dir.join("jobs.json"), JOBS).unwrap();
    fs::write(dir.join("script.toml"), script).unwrap();
    fs::write(dir.join("config.toml"), "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_swipedeck"))
        .arg("replay")
        .arg(dir.join("jobs.json"))
        .arg(dir.join("script.toml"))
        .arg("--config")
        .arg(dir.join("config.toml"))
        .args(extra)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn replay_merges_into_ledger_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("swipes.json");
    fs::write(&ledger, r#"{"likes": ["old"], "dislikes": []}"#).unwrap();

    let script = r#"
        [[step]]
        action = "drag"
        path = [40.0, 80.0, 120.0, 160.0]
        velocity = 0.0

        [[step]]
        action = "reject"

        [[step]]
        action = "accept"
    "#;
    let output = run(dir.path(), script, &["--ledger", ledger.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");

    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    steps:     3 (1 ignored)
    decided:   1 accept, 1 reject, 0 abort
    resolved:  2
    position:  2/2 (0 remaining)
    exhausted: yes
    torn down: no
    ledger:    2 likes, 1 dislikes
    ");

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&ledger).unwrap()).unwrap();
    assert_eq!(saved["likes"], serde_json::json!(["j1", "old"]));
    assert_eq!(saved["dislikes"], serde_json::json!(["j3"]));
}

#[test]
fn width_flag_overrides_the_config() {
    let dir = tempfile::tempdir().unwrap();
    // 90 units is past a quarter of 320 but not of the default 400.
    let script = r#"
        [[step]]
        action = "drag"
        path = [45.0, 90.0]
        velocity = 0.0
    "#;

    let narrow = run(dir.path(), script, &["--width", "320"]);
    assert!(narrow.status.success());
    assert!(String::from_utf8_lossy(&narrow.stdout).contains("decided:   1 accept"));

    let default = run(dir.path(), script, &[]);
    assert!(default.status.success());
    assert!(String::from_utf8_lossy(&default.stdout).contains("1 abort"));
}

#[test]
fn missing_jobs_file_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_swipedeck"))
        .arg("replay")
        .arg(dir.path().join("absent.json"))
        .arg(dir.path().join("script.toml"))
        .env("RUST_LOG", "off")
        .env("SWIPEDECK_CONFIG", dir.path().join("config.toml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read jobs"));
}

#[test]
fn invalid_width_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), "", &["--width", "0"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid --width"));
}

#[test]
fn rejected_deck_setup_leaves_the_ledger_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("swipes.json");
    let original = r#"{"likes":["old"],"dislikes":[]}"#;
    fs::write(&ledger, original).unwrap();

    // A 60 wide viewport puts the position threshold below the label fade start.
    let output = run(
        dir.path(),
        "[[step]]\naction = \"accept\"\n",
        &["--width", "60", "--ledger", ledger.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("label fade start"));
    assert_eq!(fs::read_to_string(&ledger).unwrap(), original);
}
