//! Background worker that turns store snapshots into selections.
//!
//! Receives snapshots from a store subscription on a dedicated thread,
//! coalesces them, and sends each changed selection back over a channel.
//! The worker exits when the subscription closes (store closed or dropped)
//! or when [`SelectionWorker::shutdown`] is called. Pending input is always
//! flushed before exiting.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::debounce::{CoalesceStats, Coalescer};
use crate::selection::TimeSelection;
use crate::store::Subscription;

/// How long the worker blocks when idle before checking for shutdown.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// What a stopped worker leaves behind.
#[derive(Debug, Default)]
pub struct WorkerReport {
    /// Selections emitted but not yet read through [`SelectionWorker::results`].
    pub unread: Vec<TimeSelection>,
    pub stats: CoalesceStats,
}

/// Handle to a running selection worker.
pub struct SelectionWorker {
    results: Receiver<TimeSelection>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<CoalesceStats>>,
}

impl SelectionWorker {
    /// Spawn a worker consuming `subscription`.
    pub fn spawn(subscription: Subscription, coalescer: Coalescer) -> io::Result<Self> {
        let (result_tx, results) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("timesel-worker".to_string())
            .spawn(move || worker_loop(subscription, result_tx, coalescer, &worker_stop))?;

        Ok(Self {
            results,
            stop,
            handle: Some(handle),
        })
    }

    /// Channel of emitted selections, in emission order.
    pub fn results(&self) -> &Receiver<TimeSelection> {
        &self.results
    }

    /// Ask the worker to stop and wait for it.
    pub fn shutdown(mut self) -> WorkerReport {
        self.stop.store(true, Ordering::Release);
        self.finish()
    }

    /// Wait for the worker to exit on its own (after the store closes).
    pub fn join(mut self) -> WorkerReport {
        self.finish()
    }

    fn finish(&mut self) -> WorkerReport {
        let stats = self.join_inner();
        WorkerReport {
            unread: self.results.try_iter().collect(),
            stats,
        }
    }

    fn join_inner(&mut self) -> CoalesceStats {
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(stats)) => stats,
            Some(Err(_)) => {
                tracing::warn!("selection worker panicked");
                CoalesceStats::default()
            }
            None => CoalesceStats::default(),
        }
    }
}

impl Drop for SelectionWorker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop.store(true, Ordering::Release);
            self.join_inner();
        }
    }
}

/// Worker loop: coalesce snapshots and forward changed selections.
///
/// Exits when the subscription disconnects, `stop` is set, or the result
/// receiver has been dropped.
pub fn worker_loop(
    subscription: Subscription,
    result_tx: Sender<TimeSelection>,
    mut coalescer: Coalescer,
    stop: &AtomicBool,
) -> CoalesceStats {
    loop {
        if stop.load(Ordering::Acquire) {
            break;
        }

        let timeout = coalescer
            .deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        match subscription.recv_timeout(timeout) {
            Ok(snapshot) => {
                coalescer.push(snapshot, Instant::now());
                for snapshot in subscription.try_iter() {
                    coalescer.push(snapshot, Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(selection) = coalescer.poll(Instant::now()) {
            if result_tx.send(selection).is_err() {
                tracing::debug!("selection receiver dropped, stopping worker");
                return coalescer.stats();
            }
        }
    }

    // Drain whatever arrived before the stop request or disconnect.
    for snapshot in subscription.try_iter() {
        coalescer.push(snapshot, Instant::now());
    }
    if let Some(selection) = coalescer.flush() {
        // Ignore send errors (receiver may already be gone)
        let _ = result_tx.send(selection);
    }
    coalescer.stats()
}
