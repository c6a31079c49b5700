//! Session files: recorded sequences of store updates.
//!
//! A session file is JSON Lines, one [`StoreUpdate`] per line, optionally
//! stamped with `"at"` (seconds since the start of the stream):
//!
//! ```text
//! # scrub to 3s, then pause there
//! {"at":0.0,"type":"seek","time":3.0}
//! {"at":0.02,"type":"paused","point":"4200","time":3.01}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A line without
//! `"at"` inherits the previous line's stamp. Stamps range from 0 to
//! [`MAX_STAMP_SECS`].

mod error;

pub use error::StreamError;

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::coalesce::Coalescer;
use crate::selection::TimeSelection;
use crate::store::{Store, StoreUpdate};

/// Largest accepted `"at"` stamp, in seconds (about 31 years).
pub const MAX_STAMP_SECS: f64 = 1e9;

/// A store update with its position in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// 1-based line number in the source.
    pub line: usize,
    /// Seconds since the start of the stream.
    pub at: f64,
    pub update: StoreUpdate,
}

impl SessionEvent {
    /// Offset from the start of the stream, clamped to
    /// `0..=MAX_STAMP_SECS`.
    pub fn offset(&self) -> Duration {
        Duration::try_from_secs_f64(self.at.min(MAX_STAMP_SECS)).unwrap_or(Duration::ZERO)
    }
}

#[derive(Deserialize)]
struct RawLine {
    #[serde(default)]
    at: Option<f64>,
    #[serde(flatten)]
    update: StoreUpdate,
}

/// Parse a session file from a path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<SessionEvent>, StreamError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| StreamError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

/// Parse a session from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<SessionEvent>, StreamError> {
    let mut events = Vec::new();
    let mut last_at = 0.0f64;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| StreamError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let raw: RawLine = serde_json::from_str(trimmed).map_err(|source| StreamError::Parse {
            line: line_no,
            source,
        })?;

        let at = match raw.at {
            Some(at) if !(0.0..=MAX_STAMP_SECS).contains(&at) => {
                return Err(StreamError::InvalidStamp { line: line_no, at });
            }
            Some(at) if at < last_at => {
                return Err(StreamError::OutOfOrder {
                    line: line_no,
                    at,
                    previous: last_at,
                });
            }
            Some(at) => at,
            None => last_at,
        };
        last_at = at;

        events.push(SessionEvent {
            line: line_no,
            at,
            update: raw.update,
        });
    }

    tracing::debug!(events = events.len(), "parsed session stream");
    Ok(events)
}

/// Parse a session held in memory.
pub fn parse_str(content: &str) -> Result<Vec<SessionEvent>, StreamError> {
    parse_reader(content.as_bytes())
}

/// Feed `events` into `store` on a virtual clock and collect the selections
/// the coalescer emits, in order.
///
/// Each event is applied at `start + event.at`. Windows are closed against
/// the same virtual clock, so the result does not depend on how fast the
/// events are processed. Pending input is flushed after the last event.
pub fn replay(
    events: &[SessionEvent],
    store: &Store,
    coalescer: &mut Coalescer,
) -> Vec<TimeSelection> {
    let subscription = store.subscribe();
    let start = Instant::now();
    let mut emitted = Vec::new();

    for event in events {
        let now = start.checked_add(event.offset()).unwrap_or(start);
        emitted.extend(coalescer.poll(now));

        tracing::trace!(
            line = event.line,
            kind = event.update.kind(),
            "replaying update"
        );
        store.apply(event.update.clone());
        for snapshot in subscription.try_iter() {
            coalescer.push(snapshot, now);
        }
        emitted.extend(coalescer.poll(now));
    }

    emitted.extend(coalescer.flush());
    emitted
}
