//! `timesel select`: evaluate one snapshot.

use anyhow::Result;

use timesel::cli::SelectArgs;
use timesel::{select, Config, ExecutionPoint, Playback, SelectorInputs};

use super::{format_selection, resolve_tolerance};

/// Build selector inputs from command-line flags.
fn inputs_from_args(args: &SelectArgs) -> SelectorInputs {
    SelectorInputs {
        // The flag only says playback is running; bounds are irrelevant to
        // the selection, so they span the current time.
        playback: args.playing.then_some(Playback {
            begin_time: args.current,
            end_time: args.current,
        }),
        hover_time: args.hover,
        prefer_hover_graphics: args.prefer_hover,
        pause_execution_point: args.point.clone().map(ExecutionPoint::from),
        pause_time: args.pause_time,
        current_time: args.current,
    }
}

pub fn handle(args: &SelectArgs) -> Result<()> {
    let config = Config::load()?;
    let tolerance = resolve_tolerance(args.tolerance, &config)?;
    let inputs = inputs_from_args(args);

    tracing::debug!(drift = inputs.drift(), %tolerance, "evaluating snapshot");
    let selection = select(&inputs, tolerance);
    println!("{}", format_selection(&selection, args.json)?);
    Ok(())
}
