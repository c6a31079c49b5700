//! Development tasks for timesel (`cargo run -p xtask -- <task>`)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use timesel::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for timesel and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn render(cmd: &clap::Command, name: &str, out: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => {
            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            let cmd = Cli::command();
            render(&cmd, "timesel", &out)?;
            for sub in cmd.get_subcommands() {
                let name = format!("timesel-{}", sub.get_name());
                render(sub, &name, &out)?;
            }
            Ok(())
        }
    }
}
