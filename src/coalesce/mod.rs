//! Coalescing of rapid store changes.
//!
//! - `slot`: single-slot "latest value wins" mailbox
//! - `debounce`: deterministic windowed coalescer in front of the selector
//! - `worker`: background thread driving a coalescer from a store subscription

mod debounce;
mod slot;
mod worker;

pub use debounce::{CoalesceStats, Coalescer};
pub use slot::LatestSlot;
pub use worker::{worker_loop, SelectionWorker, WorkerReport};
