//! Subcommand handlers

pub mod config;
pub mod replay;
pub mod select;

use anyhow::{Context, Result};
use timesel::{Config, DriftTolerance, TimeSelection};

/// Resolve the drift tolerance: the command-line value wins over the config.
pub fn resolve_tolerance(flag: Option<f64>, config: &Config) -> Result<DriftTolerance> {
    match flag {
        Some(value) => DriftTolerance::new(value).context("Invalid --tolerance"),
        None => Ok(config.selection.drift_tolerance),
    }
}

/// Render a selection as a single output line.
pub fn format_selection(selection: &TimeSelection, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(selection)?)
    } else {
        Ok(selection.to_string())
    }
}
