//! Integration tests for the config subcommands (CLI)

use std::fs;

use crate::helpers::{config_dir_with, empty_config_dir, run_timesel};

#[test]
fn show_prints_defaults_without_a_file() {
    let config = empty_config_dir();
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[selection]"));
    assert!(stdout.contains("drift_tolerance = 0.05"));
    assert!(stdout.contains("prefer_hover_graphics = true"));
    assert!(stdout.contains("[coalesce]"));
    assert!(stdout.contains("window_ms = 16"));
    assert!(!config.path().join("config.toml").exists());
}

#[test]
fn show_reflects_file_values() {
    let config = config_dir_with("[selection]\ndrift_tolerance = 0.25\n");
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("drift_tolerance = 0.25"));
    assert!(stdout.contains("window_ms = 16"));
}

#[test]
fn migrate_yes_creates_file() {
    let config = empty_config_dir();
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "migrate", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("does not exist"));
    assert!(stdout.contains("+ selection.drift_tolerance"));
    assert!(stdout.contains("+ coalesce.window_ms"));
    assert!(stdout.contains("Config updated successfully."));

    let written = fs::read_to_string(config.path().join("config.toml")).unwrap();
    assert!(written.contains("drift_tolerance = 0.05"));
}

#[test]
fn migrate_twice_reports_up_to_date() {
    let config = empty_config_dir();
    run_timesel(config.path(), &["config", "migrate", "-y"]);
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "migrate", "-y"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Config is already up to date."));
}

#[test]
fn migrate_keeps_existing_values_and_comments() {
    let config = config_dir_with("# slow machine\n[selection]\ndrift_tolerance = 0.3\n");
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "migrate", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("+ selection.prefer_hover_graphics"));
    assert!(!stdout.contains("+ selection.drift_tolerance"));

    let written = fs::read_to_string(config.path().join("config.toml")).unwrap();
    assert!(written.starts_with("# slow machine\n"));
    assert!(written.contains("drift_tolerance = 0.3"));
    assert!(written.contains("window_ms = 16"));
}

#[test]
fn migrate_without_yes_in_non_interactive_mode_changes_nothing() {
    let config = empty_config_dir();
    let (stdout, _stderr, code) = run_timesel(config.path(), &["config", "migrate"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Non-interactive mode"));
    assert!(stdout.contains("No changes made."));
    assert!(!config.path().join("config.toml").exists());
}

#[test]
fn show_rejects_invalid_file() {
    let config = config_dir_with("[coalesce]\nwindow_ms = \"fast\"\n");
    let (_stdout, stderr, code) = run_timesel(config.path(), &["config", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid config file"));
}
