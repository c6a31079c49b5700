//! Changes that can be applied to the store.

use serde::{Deserialize, Serialize};

use super::state::{PauseState, Playback, Snapshot};
use crate::selection::ExecutionPoint;

/// A single change pushed into the store.
///
/// Serialized with a `"type"` tag so session files read naturally:
///
/// ```json
/// {"type":"paused","point":"1298074214633706907132624082305024","time":12.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreUpdate {
    /// Animated playback began.
    PlaybackStarted { begin_time: f64, end_time: f64 },
    /// Animated playback ended or was stopped.
    PlaybackStopped,
    /// Pointer moved over (or left) the scrubber.
    Hover {
        #[serde(default)]
        time: Option<f64>,
    },
    /// Hover previews were turned on or off.
    ShowHoverGraphics { enabled: bool },
    /// The scrubber moved.
    Seek { time: f64 },
    /// A pause was created (or cleared when `point` is absent).
    Paused {
        #[serde(default)]
        point: Option<ExecutionPoint>,
        time: f64,
    },
    /// Several changes that must be observed together.
    Batch { updates: Vec<StoreUpdate> },
}

impl StoreUpdate {
    /// Apply the change to a snapshot in place. Does not touch the version.
    pub(crate) fn apply_to(self, snapshot: &mut Snapshot) {
        match self {
            Self::PlaybackStarted {
                begin_time,
                end_time,
            } => {
                snapshot.timeline.playback = Some(Playback {
                    begin_time,
                    end_time,
                });
            }
            Self::PlaybackStopped => snapshot.timeline.playback = None,
            Self::Hover { time } => snapshot.timeline.hover_time = time,
            Self::ShowHoverGraphics { enabled } => {
                snapshot.timeline.show_hover_time_graphics = enabled;
            }
            Self::Seek { time } => snapshot.timeline.current_time = time,
            Self::Paused { point, time } => {
                snapshot.pause = PauseState {
                    execution_point: point,
                    time,
                };
            }
            Self::Batch { updates } => {
                for update in updates {
                    update.apply_to(snapshot);
                }
            }
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlaybackStarted { .. } => "playback_started",
            Self::PlaybackStopped => "playback_stopped",
            Self::Hover { .. } => "hover",
            Self::ShowHoverGraphics { .. } => "show_hover_graphics",
            Self::Seek { .. } => "seek",
            Self::Paused { .. } => "paused",
            Self::Batch { .. } => "batch",
        }
    }
}
