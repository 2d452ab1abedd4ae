//! `RoutineQueue`: plain FIFO of non-urgent bins.

use std::collections::VecDeque;

use bf_core::BinId;

use crate::QueueEntry;

/// First-in, first-out queue.  After a rebuild its order is ascending
/// distance because it is fed from an in-order tree walk.
#[derive(Clone, Debug, Default)]
pub struct RoutineQueue {
    inner: VecDeque<QueueEntry>,
}

impl RoutineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail.
    pub fn push(&mut self, entry: QueueEntry) {
        self.inner.push_back(entry);
    }

    /// Remove and return the head.
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.inner.front()
    }

    /// Unlink the first entry for `id` (linear scan).  `None` if absent.
    pub fn remove(&mut self, id: BinId) -> Option<QueueEntry> {
        let pos = self.inner.iter().position(|e| e.id == id)?;
        self.inner.remove(pos)
    }

    pub fn contains(&self, id: BinId) -> bool {
        self.inner.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entries head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> + '_ {
        self.inner.iter()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
