//! The time/execution point selection heuristic.
//!
//! The "current time" is what the timeline scrubber shows. It follows the
//! user while scrubbing and advances during playback. The "pause time" is a
//! higher-fidelity version of it that comes with an execution point, which
//! lets the renderer request an exact repaint instead of the nearest
//! screenshot. The pause time is preferred whenever it can be trusted.
//!
//! It cannot be trusted while playback is running, or when the user has
//! scrubbed somewhere no pause exists yet (for instance outside the focus
//! window). The second case is detected by how far the two times drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::ExecutionPoint;
use super::tolerance::DriftTolerance;
use crate::store::Playback;

/// One consistent read of everything the selector looks at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorInputs {
    /// Present only while animated playback is running.
    pub playback: Option<Playback>,
    /// Time under the pointer on the scrubber, if any.
    pub hover_time: Option<f64>,
    /// Whether hover previews should drive graphics.
    pub prefer_hover_graphics: bool,
    /// Execution point of the current pause, if one was created.
    pub pause_execution_point: Option<ExecutionPoint>,
    /// Time of the current pause.
    pub pause_time: f64,
    /// Time the timeline scrubber shows.
    pub current_time: f64,
}

impl SelectorInputs {
    /// Absolute gap between the pause time and the scrubber time.
    pub fn drift(&self) -> f64 {
        (self.pause_time - self.current_time).abs()
    }
}

/// Which input ended up authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// Playback is running; current time wins.
    Playback,
    /// Pause time drifted too far from the scrubber; current time wins.
    Drift,
    /// Hover preview.
    Hover,
    /// The paused snapshot.
    Pause,
}

impl SelectionSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Playback => "playback",
            Self::Drift => "drift",
            Self::Hover => "hover",
            Self::Pause => "pause",
        }
    }
}

/// Time and optional execution point the UI should render.
///
/// `execution_point` is only ever set when `source` is
/// [`SelectionSource::Pause`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSelection {
    pub time: f64,
    pub execution_point: Option<ExecutionPoint>,
    pub source: SelectionSource,
}

impl TimeSelection {
    fn without_point(time: f64, source: SelectionSource) -> Self {
        Self {
            time,
            execution_point: None,
            source,
        }
    }
}

impl fmt::Display for TimeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = self
            .execution_point
            .as_ref()
            .map_or("-", ExecutionPoint::as_str);
        write!(
            f,
            "time={} point={} source={}",
            self.time,
            point,
            self.source.name()
        )
    }
}

// Equality is about what gets rendered; the branch that produced a pair
// does not make two identical pairs different.
impl PartialEq for TimeSelection {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.execution_point == other.execution_point
    }
}

/// Choose the time and execution point to render.
///
/// Branches are tried in order and the first match wins:
/// 1. playback is running, or the pause time drifted more than `tolerance`
///    away from the current time: `(current_time, None)`
/// 2. hover graphics are preferred and a hover time exists: `(hover_time, None)`
/// 3. otherwise: `(pause_time, pause_execution_point)`
pub fn select(inputs: &SelectorInputs, tolerance: DriftTolerance) -> TimeSelection {
    if inputs.playback.is_some() {
        return TimeSelection::without_point(inputs.current_time, SelectionSource::Playback);
    }

    if tolerance.is_exceeded_by(inputs.drift()) {
        return TimeSelection::without_point(inputs.current_time, SelectionSource::Drift);
    }

    if inputs.prefer_hover_graphics {
        if let Some(hover_time) = inputs.hover_time {
            return TimeSelection::without_point(hover_time, SelectionSource::Hover);
        }
    }

    TimeSelection {
        time: inputs.pause_time,
        execution_point: inputs.pause_execution_point.clone(),
        source: SelectionSource::Pause,
    }
}
