//! `timesel replay`: run a session file through the store and coalescer.

use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use timesel::cli::ReplayArgs;
use timesel::stream::{self, SessionEvent};
use timesel::theme::current_theme;
use timesel::{Coalescer, Config, PauseState, Store, TimelineState};

use super::{format_selection, resolve_tolerance};

fn read_events(path: &Path) -> Result<Vec<SessionEvent>> {
    if path == Path::new("-") {
        let stdin = io::stdin();
        return stream::parse_reader(BufReader::new(stdin.lock()))
            .context("Failed to read session from stdin");
    }
    stream::parse_file(path).with_context(|| format!("Failed to read session {}", path.display()))
}

pub fn handle(args: &ReplayArgs) -> Result<()> {
    let config = Config::load()?;
    let tolerance = resolve_tolerance(args.tolerance, &config)?;
    let window = args
        .window_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| config.coalesce.window());

    let events = read_events(&args.file)?;
    tracing::debug!(events = events.len(), ?window, %tolerance, "replaying session");

    let store = Store::with_state(
        TimelineState {
            show_hover_time_graphics: config.selection.prefer_hover_graphics,
            ..Default::default()
        },
        PauseState::default(),
    );
    let mut coalescer = Coalescer::new(tolerance, window);
    let selections = stream::replay(&events, &store, &mut coalescer);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for selection in &selections {
        writeln!(out, "{}", format_selection(selection, args.json)?)?;
    }
    out.flush()?;

    if args.stats {
        let stats = coalescer.stats();
        let theme = current_theme();
        eprintln!(
            "{}",
            theme.secondary_text(&format!(
                "{} updates, {} evaluated, {} superseded, {} unchanged, {} emitted",
                events.len(),
                stats.evaluated,
                stats.superseded,
                stats.deduplicated,
                selections.len()
            ))
        );
    }

    Ok(())
}
