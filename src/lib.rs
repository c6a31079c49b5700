//! timesel - time and execution point selection for replay viewers
//!
//! A replay viewer has several candidate "now"s at any moment: the time the
//! timeline scrubber shows, the time of the current pause (which carries an
//! execution point), and the time under the pointer when hovering. This
//! crate decides which one graphics should follow.
//!
//! - `selection`: the pure selection heuristic
//! - `store`: observable timeline/pause state with atomic updates
//! - `coalesce`: latest-value debouncing between the store and the selector
//! - `stream`: session files of recorded store updates
//! - `config`: TOML configuration
//!
//! # Example
//!
//! ```
//! use timesel::{select, DriftTolerance, ExecutionPoint, SelectorInputs};
//!
//! let inputs = SelectorInputs {
//!     current_time: 10.0,
//!     pause_time: 10.02,
//!     pause_execution_point: Some(ExecutionPoint::new("ep1")),
//!     ..Default::default()
//! };
//! let selection = select(&inputs, DriftTolerance::DEFAULT);
//! assert_eq!(selection.time, 10.02);
//! assert_eq!(selection.execution_point, Some(ExecutionPoint::new("ep1")));
//! ```

pub mod cli;
pub mod coalesce;
pub mod config;
pub mod selection;
pub mod store;
pub mod stream;
pub mod theme;

pub use coalesce::{CoalesceStats, Coalescer, LatestSlot, SelectionWorker, WorkerReport};
pub use config::Config;
pub use selection::{
    select, DriftTolerance, ExecutionPoint, SelectionSource, SelectorInputs, TimeSelection,
    ToleranceError,
};
pub use store::{PauseState, Playback, Snapshot, Store, StoreUpdate, TimelineState};
pub use stream::{SessionEvent, StreamError};
