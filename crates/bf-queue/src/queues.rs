//! `DispatchQueues`: the routine/urgent pair and the only way into it.

use log::debug;

use bf_core::{Bin, BinId};

use crate::{DistanceTree, QueueEntry, RoutineQueue, UrgentQueue};

/// Which of the two queues an entry sits in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueKind {
    Routine,
    Urgent,
}

impl QueueKind {
    /// The queue a bin with `bin`'s current fill level belongs in.
    #[inline]
    pub fn for_bin(bin: &Bin) -> QueueKind {
        if bin.is_urgent() { QueueKind::Urgent } else { QueueKind::Routine }
    }
}

/// Both dispatch queues.
///
/// Bins enter through [`classify`][Self::classify] (add, fill update, rebuild)
/// or, for freshly emptied bins only, through
/// [`requeue_collected`][Self::requeue_collected].  The inner queues are
/// exposed read-only.
#[derive(Clone, Debug, Default)]
pub struct DispatchQueues {
    routine: RoutineQueue,
    urgent:  UrgentQueue,
}

impl DispatchQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a snapshot of `bin` into the queue its fill level selects.
    pub fn classify(&mut self, bin: &Bin) -> QueueKind {
        let kind = QueueKind::for_bin(bin);
        match kind {
            QueueKind::Urgent  => self.urgent.push(QueueEntry::from(bin)),
            QueueKind::Routine => self.routine.push(QueueEntry::from(bin)),
        }
        kind
    }

    /// Append a just-collected bin to the routine tail without classifying.
    ///
    /// Any existing entry for the bin is removed first.  The caller guarantees
    /// the bin is empty and therefore not urgent.
    pub fn requeue_collected(&mut self, bin: &Bin) {
        debug_assert!(!bin.is_urgent());
        self.remove(bin.id());
        self.routine.push(QueueEntry::from(bin));
    }

    /// Remove `id` from whichever queue holds it.  Returns where it was.
    pub fn remove(&mut self, id: BinId) -> Option<QueueKind> {
        let in_routine = self.routine.remove(id).is_some();
        let in_urgent = self.urgent.remove(id).is_some();
        match (in_urgent, in_routine) {
            (true, _)      => Some(QueueKind::Urgent),
            (false, true)  => Some(QueueKind::Routine),
            (false, false) => None,
        }
    }

    /// Clear both queues and refill them from `bins` in ascending distance.
    ///
    /// Urgent and routine bins are sorted in separate trees; each tree is
    /// drained in order through `classify`.
    pub fn rebuild<'a, I>(&mut self, bins: I)
    where
        I: IntoIterator<Item = &'a Bin>,
    {
        self.clear();

        let mut urgent_tree = DistanceTree::new();
        let mut routine_tree = DistanceTree::new();
        for bin in bins {
            match QueueKind::for_bin(bin) {
                QueueKind::Urgent  => urgent_tree.insert(bin),
                QueueKind::Routine => routine_tree.insert(bin),
            }
        }

        for bin in urgent_tree.in_order() {
            self.classify(bin);
        }
        for bin in routine_tree.in_order() {
            self.classify(bin);
        }

        debug!(
            "queues rebuilt: {} urgent, {} routine",
            self.urgent.len(),
            self.routine.len()
        );
    }

    /// Pop the next dispatch target: urgent head first, else routine head.
    pub fn pop_next(&mut self) -> Option<(QueueEntry, QueueKind)> {
        if let Some(e) = self.urgent.pop() {
            return Some((e, QueueKind::Urgent));
        }
        self.routine.pop().map(|e| (e, QueueKind::Routine))
    }

    /// Where `id` currently sits, if anywhere.
    pub fn locate(&self, id: BinId) -> Option<QueueKind> {
        if self.urgent.contains(id) {
            Some(QueueKind::Urgent)
        } else if self.routine.contains(id) {
            Some(QueueKind::Routine)
        } else {
            None
        }
    }

    pub fn routine(&self) -> &RoutineQueue {
        &self.routine
    }

    pub fn urgent(&self) -> &UrgentQueue {
        &self.urgent
    }

    /// Total entries across both queues.
    pub fn len(&self) -> usize {
        self.routine.len() + self.urgent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routine.is_empty() && self.urgent.is_empty()
    }

    pub fn clear(&mut self) {
        self.routine.clear();
        self.urgent.clear();
    }
}
