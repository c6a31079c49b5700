//! Timeline and pause state held by the store.

use serde::{Deserialize, Serialize};

use crate::selection::{ExecutionPoint, SelectorInputs};

/// An animated playback session. Exists only while playback runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playback {
    /// Timeline time playback started from.
    pub begin_time: f64,
    /// Timeline time playback stops at.
    pub end_time: f64,
}

/// State owned by the timeline: playback, hover and scrubber position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    pub playback: Option<Playback>,
    pub hover_time: Option<f64>,
    pub show_hover_time_graphics: bool,
    pub current_time: f64,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            playback: None,
            hover_time: None,
            show_hover_time_graphics: true,
            current_time: 0.0,
        }
    }
}

/// State owned by the debugger: the current pause.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PauseState {
    pub execution_point: Option<ExecutionPoint>,
    pub time: f64,
}

/// A versioned, consistent copy of both states.
///
/// Versions increase by one with every applied update, so a larger version
/// always reflects later input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub timeline: TimelineState,
    pub pause: PauseState,
}

impl Snapshot {
    /// Project the snapshot onto the selector's inputs.
    pub fn inputs(&self) -> SelectorInputs {
        SelectorInputs {
            playback: self.timeline.playback,
            hover_time: self.timeline.hover_time,
            prefer_hover_graphics: self.timeline.show_hover_time_graphics,
            pause_execution_point: self.pause.execution_point.clone(),
            pause_time: self.pause.time,
            current_time: self.timeline.current_time,
        }
    }
}
