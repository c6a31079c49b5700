//! Observable timeline/pause store.
//!
//! The store owns the inputs of the selector. Every update is applied under
//! one write lock and then pushed, as a full snapshot, to every subscriber.
//! Readers therefore never see a half-applied batch.

mod state;
mod update;

pub use state::{PauseState, Playback, Snapshot, TimelineState};
pub use update::StoreUpdate;

use std::sync::mpsc::{self, Receiver, Sender};

use parking_lot::{Mutex, RwLock};

/// Receiving end of a store subscription.
///
/// The channel is unbounded: every snapshot published while the receiver
/// is alive stays queued until it is read. Consumers must drain it, or drop
/// it once they stop reading.
pub type Subscription = Receiver<Snapshot>;

/// Shared timeline and pause state with push-on-change subscriptions.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<Snapshot>,
    subscribers: Mutex<Vec<Sender<Snapshot>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting from the given timeline and pause state.
    pub fn with_state(timeline: TimelineState, pause: PauseState) -> Self {
        Self {
            state: RwLock::new(Snapshot {
                version: 0,
                timeline,
                pause,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// A consistent copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().clone()
    }

    /// Current version (number of updates applied so far).
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    /// Subscribe to every future snapshot.
    ///
    /// The returned [`Subscription`] buffers snapshots until they are read.
    /// A live receiver that is never drained keeps every snapshot in memory.
    /// [`SelectionWorker`](crate::SelectionWorker) and
    /// [`stream::replay`](crate::stream::replay) drain theirs continuously.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Number of live subscriptions. Dropped receivers are only noticed on
    /// the next publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Apply an update atomically, publish the new snapshot and return it.
    pub fn apply(&self, update: StoreUpdate) -> Snapshot {
        let kind = update.kind();
        // Publishing while still holding the write lock keeps snapshots in
        // version order on every subscriber channel.
        let mut state = self.state.write();
        update.apply_to(&mut state);
        state.version += 1;
        let snapshot = state.clone();
        tracing::trace!(version = snapshot.version, kind, "store update applied");
        self.publish(&snapshot);
        snapshot
    }

    fn publish(&self, snapshot: &Snapshot) {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        let pruned = before - subscribers.len();
        if pruned > 0 {
            tracing::debug!(pruned, "dropped closed store subscriptions");
        }
    }

    /// Drop every subscription, closing the receivers.
    pub fn close(&self) {
        self.subscribers.lock().clear();
    }
}
