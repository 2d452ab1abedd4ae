//! Queue entries are copies, not references.
//!
//! An entry records the bin's fields as they were when it was enqueued.  If
//! the bin changes without being re-enqueued the entry goes stale, so every
//! mutation path in the engine removes and reinserts the bin, and the
//! dispatcher re-resolves a popped id against the registry before use.

use bf_core::{Bin, BinId};

/// Snapshot of one bin held by a dispatch queue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry {
    pub id:          BinId,
    pub area:        String,
    pub distance_km: f64,
    pub fill_level:  u8,
    pub priority:    i32,
}

impl From<&Bin> for QueueEntry {
    fn from(bin: &Bin) -> Self {
        Self {
            id:          bin.id(),
            area:        bin.area().to_owned(),
            distance_km: bin.distance_km(),
            fill_level:  bin.fill_level(),
            priority:    bin.priority(),
        }
    }
}
