//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the session fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture into a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("fixture should exist")
}

/// Run the timesel binary with an isolated config directory.
///
/// Returns (stdout, stderr, exit code).
pub fn run_timesel(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_timesel"))
        .args(args)
        .env("TIMESEL_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("TIMESEL_LOG")
        .output()
        .expect("Failed to execute timesel");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A fresh, empty config directory.
pub fn empty_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A config directory containing the given config.toml content.
pub fn config_dir_with(content: &str) -> TempDir {
    let dir = empty_config_dir();
    fs::write(dir.path().join("config.toml"), content).expect("Failed to write config");
    dir
}
