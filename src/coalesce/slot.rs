//! Single-slot mailbox where the newest value replaces any pending one.

/// Holds at most one pending value. Offering a new value discards the
/// previous pending one.
#[derive(Debug)]
pub struct LatestSlot<T> {
    pending: Option<T>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Store `value`, returning true if it replaced a value nobody took.
    pub fn offer(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Take the pending value, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
