//! Command-line interface definitions
//!
//! Kept in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Long version string: package version plus build metadata from build.rs.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TIMESEL_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "timesel",
    version,
    long_version = LONG_VERSION,
    about = "Pick the time and execution point a replay viewer should render",
    long_about = "Pick the time and execution point a replay viewer should render.\n\n\
        The pause time (with its execution point) is preferred. The scrubber time is \
        used instead while playback runs or when the pause drifted too far away, and \
        the hover time is used for hover previews."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a single snapshot of timeline and pause state
    Select(SelectArgs),

    /// Replay a session file of store updates and print each selection
    Replay(ReplayArgs),

    /// Show, edit, or migrate the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Time the timeline scrubber shows
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub current: f64,

    /// Time of the current pause
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub pause_time: f64,

    /// Execution point of the current pause
    #[arg(long, value_name = "POINT")]
    pub point: Option<String>,

    /// Time under the pointer on the scrubber
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub hover: Option<f64>,

    /// Let hover previews drive graphics
    #[arg(long)]
    pub prefer_hover: bool,

    /// Animated playback is running
    #[arg(long)]
    pub playing: bool,

    /// Drift tolerance (defaults to the configured value)
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub tolerance: Option<f64>,

    /// Print the selection as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Session file (JSON Lines), or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Coalescing window in milliseconds (defaults to the configured value)
    #[arg(long, value_name = "MS")]
    pub window_ms: Option<u64>,

    /// Drift tolerance (defaults to the configured value)
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub tolerance: Option<f64>,

    /// Print selections as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Print coalescing statistics to stderr when done
    #[arg(long)]
    pub stats: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without asking for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}
