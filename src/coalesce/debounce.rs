//! Deferred evaluation of store snapshots.
//!
//! Scrubbing and playback can change the store on every pointer move or
//! frame. The coalescer keeps only the newest snapshot seen during a short
//! window and evaluates the selector once when the window closes. Time is
//! passed in explicitly so the behavior is deterministic under test.

use std::time::{Duration, Instant};

use super::slot::LatestSlot;
use crate::selection::{select, DriftTolerance, TimeSelection};
use crate::store::Snapshot;

/// Counters describing what the coalescer did with its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoalesceStats {
    /// Snapshots offered through [`Coalescer::push`].
    pub received: u64,
    /// Snapshots ignored because a newer version was already seen.
    pub stale: u64,
    /// Snapshots replaced by a newer one before evaluation.
    pub superseded: u64,
    /// Selector evaluations.
    pub evaluated: u64,
    /// Evaluations suppressed because they matched the previous emission.
    pub deduplicated: u64,
}

/// Latest-value debounce in front of the selector.
#[derive(Debug)]
pub struct Coalescer {
    tolerance: DriftTolerance,
    window: Duration,
    slot: LatestSlot<Snapshot>,
    window_opened: Option<Instant>,
    newest_version: Option<u64>,
    last_emitted: Option<TimeSelection>,
    stats: CoalesceStats,
}

impl Coalescer {
    pub fn new(tolerance: DriftTolerance, window: Duration) -> Self {
        Self {
            tolerance,
            window,
            slot: LatestSlot::new(),
            window_opened: None,
            newest_version: None,
            last_emitted: None,
            stats: CoalesceStats::default(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn tolerance(&self) -> DriftTolerance {
        self.tolerance
    }

    /// Offer a snapshot observed at `now`.
    ///
    /// Returns false when the snapshot is not newer than one already seen.
    /// Such a snapshot would otherwise let an older state overwrite a newer
    /// one.
    pub fn push(&mut self, snapshot: Snapshot, now: Instant) -> bool {
        self.stats.received += 1;

        if let Some(newest) = self.newest_version {
            if snapshot.version <= newest {
                self.stats.stale += 1;
                tracing::trace!(
                    version = snapshot.version,
                    newest,
                    "ignoring stale snapshot"
                );
                return false;
            }
        }

        self.newest_version = Some(snapshot.version);
        if self.slot.offer(snapshot) {
            self.stats.superseded += 1;
        }
        if self.window_opened.is_none() {
            self.window_opened = Some(now);
        }
        true
    }

    /// When the current window closes, if one is open.
    ///
    /// None when no window is open, or when the window is too long to
    /// close at a representable instant.
    pub fn deadline(&self) -> Option<Instant> {
        self.window_opened.and_then(|opened| opened.checked_add(self.window))
    }

    /// Whether a snapshot is waiting for evaluation.
    pub fn has_pending(&self) -> bool {
        !self.slot.is_empty()
    }

    /// Evaluate the pending snapshot if its window has closed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TimeSelection> {
        let opened = self.window_opened?;
        if now.saturating_duration_since(opened) < self.window {
            return None;
        }
        self.evaluate_pending()
    }

    /// Evaluate the pending snapshot right away, ignoring the window.
    pub fn flush(&mut self) -> Option<TimeSelection> {
        self.evaluate_pending()
    }

    /// The last selection handed out.
    pub fn last_emitted(&self) -> Option<&TimeSelection> {
        self.last_emitted.as_ref()
    }

    pub fn stats(&self) -> CoalesceStats {
        self.stats
    }

    fn evaluate_pending(&mut self) -> Option<TimeSelection> {
        self.window_opened = None;
        let snapshot = self.slot.take()?;

        self.stats.evaluated += 1;
        let selection = select(&snapshot.inputs(), self.tolerance);

        if self.last_emitted.as_ref() == Some(&selection) {
            self.stats.deduplicated += 1;
            tracing::trace!(version = snapshot.version, "selection unchanged");
            return None;
        }

        tracing::debug!(
            version = snapshot.version,
            time = selection.time,
            source = selection.source.name(),
            "selection changed"
        );
        self.last_emitted = Some(selection.clone());
        Some(selection)
    }
}
