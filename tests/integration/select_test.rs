//! Integration tests for the select command (CLI)

use crate::helpers::{config_dir_with, empty_config_dir, run_timesel};

fn select(args: &[&str]) -> (String, String, i32) {
    let config = empty_config_dir();
    let mut full = vec!["select"];
    full.extend_from_slice(args);
    run_timesel(config.path(), &full)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn in_sync_pause_selects_pause_time_and_point() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "10.0",
        "--pause-time",
        "10.02",
        "--point",
        "ep1",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=10.02 point=ep1 source=pause");
}

#[test]
fn playback_selects_current_time_without_point() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "5.0",
        "--pause-time",
        "5.0",
        "--point",
        "ep1",
        "--playing",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=5 point=- source=playback");
}

#[test]
fn drift_wins_over_hover() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "3.0",
        "--pause-time",
        "4.0",
        "--hover",
        "3.5",
        "--prefer-hover",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=3 point=- source=drift");
}

#[test]
fn hover_wins_when_pause_is_in_sync() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "3.0",
        "--pause-time",
        "3.01",
        "--hover",
        "3.5",
        "--prefer-hover",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=3.5 point=- source=hover");
}

#[test]
fn hover_without_preference_is_ignored() {
    let (stdout, _stderr, _code) = select(&[
        "--current",
        "3.0",
        "--pause-time",
        "3.01",
        "--point",
        "42",
        "--hover",
        "3.5",
    ]);
    assert_eq!(stdout.trim(), "time=3.01 point=42 source=pause");
}

// ============================================================================
// Tolerance
// ============================================================================

#[test]
fn tolerance_flag_overrides_default() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "3.0",
        "--pause-time",
        "4.0",
        "--point",
        "7",
        "--tolerance",
        "1.0",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=4 point=7 source=pause");
}

#[test]
fn tolerance_from_config_file_is_used() {
    let config = config_dir_with("[selection]\ndrift_tolerance = 2.0\n");
    let (stdout, _stderr, code) = run_timesel(
        config.path(),
        &["select", "--current", "3.0", "--pause-time", "4.0", "--point", "7"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "time=4 point=7 source=pause");
}

#[test]
fn negative_tolerance_is_an_error() {
    let (stdout, stderr, code) = select(&[
        "--current",
        "1.0",
        "--pause-time",
        "1.0",
        "--tolerance",
        "-0.5",
    ]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid --tolerance"));
    assert!(stderr.contains("must not be negative"));
}

#[test]
fn invalid_config_file_is_reported() {
    let config = config_dir_with("[selection]\ndrift_tolerance = \"wide\"\n");
    let (_stdout, stderr, code) = run_timesel(
        config.path(),
        &["select", "--current", "1.0", "--pause-time", "1.0"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid config file"));
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn json_output_for_pause() {
    let (stdout, _stderr, code) = select(&[
        "--current",
        "10.0",
        "--pause-time",
        "10.02",
        "--point",
        "ep1",
        "--json",
    ]);
    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim(), @r#"{"time":10.02,"execution_point":"ep1","source":"pause"}"#);
}

#[test]
fn json_output_uses_null_for_missing_point() {
    let (stdout, _stderr, _code) = select(&[
        "--current",
        "5.0",
        "--pause-time",
        "5.0",
        "--playing",
        "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["time"], 5.0);
    assert!(value["execution_point"].is_null());
    assert_eq!(value["source"], "playback");
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn missing_required_flags_exit_2() {
    let (_stdout, stderr, code) = select(&["--current", "1.0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--pause-time"));
}

#[test]
fn help_describes_flags() {
    let (stdout, _stderr, code) = select(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Evaluate a single snapshot"));
    assert!(stdout.contains("--prefer-hover"));
    assert!(stdout.contains("--tolerance"));
}
