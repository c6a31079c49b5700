//! Integration tests for the replay command (CLI)

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{config_dir_with, empty_config_dir, fixture, load_fixture, run_timesel};

fn replay(name: &str, extra: &[&str]) -> (String, String, i32) {
    let config = empty_config_dir();
    let path = fixture(name);
    let path = path.to_string_lossy();
    let mut args = vec!["replay", path.as_ref()];
    args.extend_from_slice(extra);
    run_timesel(config.path(), &args)
}

// ============================================================================
// Fixtures without coalescing
// ============================================================================

#[test]
fn scrub_and_pause_unwindowed() {
    let (stdout, _stderr, code) = replay("scrub_and_pause.jsonl", &["--window-ms", "0"]);
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r"
    time=0 point=- source=drift
    time=1 point=100 source=pause
    time=3 point=- source=drift
    time=3.01 point=300 source=pause
    ");
}

#[test]
fn playback_unwindowed() {
    let (stdout, _stderr, code) = replay("playback.jsonl", &["--window-ms", "0"]);
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r"
    time=2 point=200 source=pause
    time=2 point=- source=playback
    time=2.5 point=- source=playback
    time=3 point=- source=playback
    time=3 point=300 source=pause
    ");
}

#[test]
fn hover_burst_unwindowed_emits_every_hover() {
    let (stdout, _stderr, code) = replay("hover_burst.jsonl", &["--window-ms", "0"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "time=5.1 point=- source=hover");
    assert_eq!(lines[4], "time=5.4 point=- source=hover");
    assert_eq!(lines[5], "time=5 point=500 source=pause");
}

// ============================================================================
// Coalescing with the default window
// ============================================================================

#[test]
fn scrub_and_pause_default_window_drops_transient_state() {
    let (stdout, _stderr, code) = replay("scrub_and_pause.jsonl", &[]);
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r"
    time=1 point=100 source=pause
    time=3 point=- source=drift
    time=3.01 point=300 source=pause
    ");
}

#[test]
fn hover_burst_collapses_to_latest() {
    let (stdout, _stderr, code) = replay("hover_burst.jsonl", &[]);
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r"
    time=5 point=500 source=pause
    time=5.4 point=- source=hover
    time=5 point=500 source=pause
    ");
}

#[test]
fn stats_are_printed_to_stderr() {
    let (stdout, stderr, code) = replay("hover_burst.jsonl", &["--stats"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 3);
    assert!(
        stderr.contains("6 updates, 3 evaluated, 3 superseded, 0 unchanged, 3 emitted"),
        "stderr was: {stderr}"
    );
}

#[test]
fn window_from_config_file_is_used() {
    let config = config_dir_with("[coalesce]\nwindow_ms = 0\n");
    let path = fixture("hover_burst.jsonl");
    let (stdout, _stderr, code) =
        run_timesel(config.path(), &["replay", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn tolerance_flag_applies_to_replay() {
    // A wide tolerance keeps the pause selected while scrubbing away.
    let (stdout, _stderr, code) = replay(
        "scrub_and_pause.jsonl",
        &["--window-ms", "0", "--tolerance", "5.0"],
    );
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r"
    time=1 point=100 source=pause
    time=3.01 point=300 source=pause
    ");
}

// ============================================================================
// Output formats and input sources
// ============================================================================

#[test]
fn json_lines_output() {
    let (stdout, _stderr, code) = replay("scrub_and_pause.jsonl", &["--json"]);
    assert_eq!(code, 0);
    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["execution_point"], "100");
    assert!(values[1]["execution_point"].is_null());
    assert_eq!(values[1]["source"], "drift");
    assert_eq!(values[2]["time"], 3.01);
}

#[test]
fn reads_session_from_stdin() {
    let config = empty_config_dir();
    Command::cargo_bin("timesel")
        .unwrap()
        .args(["replay", "-", "--window-ms", "0"])
        .env("TIMESEL_CONFIG_DIR", config.path())
        .env("NO_COLOR", "1")
        .write_stdin(load_fixture("playback.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("time=2 point=200 source=pause\n"))
        .stdout(predicate::str::ends_with("time=3 point=300 source=pause\n"));
}

#[test]
fn empty_session_prints_nothing() {
    let config = empty_config_dir();
    Command::cargo_bin("timesel")
        .unwrap()
        .args(["replay", "-"])
        .env("TIMESEL_CONFIG_DIR", config.path())
        .write_stdin("# nothing recorded\n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn invalid_update_reports_line() {
    let (stdout, stderr, code) = replay("invalid.jsonl", &[]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Line 2"), "stderr was: {stderr}");
}

#[test]
fn missing_file_is_an_error() {
    let config = empty_config_dir();
    let missing = config.path().join("missing.jsonl");
    let (_stdout, stderr, code) =
        run_timesel(config.path(), &["replay", missing.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to read session"));
}

#[test]
fn out_of_range_stamp_is_an_error_not_a_crash() {
    let config = empty_config_dir();
    Command::cargo_bin("timesel")
        .unwrap()
        .args(["replay", "-"])
        .env("TIMESEL_CONFIG_DIR", config.path())
        .env("NO_COLOR", "1")
        .write_stdin("{\"at\":0.0,\"type\":\"seek\",\"time\":1}\n{\"at\":1e300,\"type\":\"seek\",\"time\":2}\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Line 2: stamp must be between 0 and"));
}
