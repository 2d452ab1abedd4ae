//! `UrgentQueue`: bins at or above the urgent threshold, highest priority
//! first.
//!
//! # Insertion rule
//!
//! The queue is kept non-increasing in priority from head to tail:
//!
//! - priority ≥ head     → new head
//! - priority < tail     → new tail
//! - otherwise           → before the first entry whose priority ≤ the new one
//!
//! A new entry therefore lands at the front of any run of equal priorities.
//! The three cases collapse into the single `position` scan below; the head
//! and tail checks are kept as fast paths.

use std::collections::VecDeque;

use bf_core::BinId;

use crate::QueueEntry;

#[derive(Clone, Debug, Default)]
pub struct UrgentQueue {
    inner: VecDeque<QueueEntry>,
}

impl UrgentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` at its priority position.
    pub fn push(&mut self, entry: QueueEntry) {
        let head = self.inner.front().map(|e| e.priority);
        let tail = self.inner.back().map(|e| e.priority);
        let (Some(head), Some(tail)) = (head, tail) else {
            self.inner.push_back(entry);
            return;
        };
        if entry.priority >= head {
            self.inner.push_front(entry);
            return;
        }
        if entry.priority < tail {
            self.inner.push_back(entry);
            return;
        }
        let pos = self
            .inner
            .iter()
            .position(|e| e.priority <= entry.priority)
            .unwrap_or(self.inner.len());
        self.inner.insert(pos, entry);
    }

    /// Remove and return the head (highest priority).
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
