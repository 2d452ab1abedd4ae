//! Status counts and fill-change reports.

use std::fmt;

use bf_core::{Bin, BinId, FillBand, URGENT_FILL};

// ── FillTransition ────────────────────────────────────────────────────────────

/// How a fill-level change moved a bin across the urgent threshold.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillTransition {
    /// Stayed on the same side of the threshold.
    Unchanged,
    /// Went from below 90 % to 90 % or more.
    BecameUrgent,
    /// Went from 90 % or more to below 90 %.
    ClearedUrgent,
}

impl FillTransition {
    pub fn between(old_fill: u8, new_fill: u8) -> FillTransition {
        match (old_fill >= URGENT_FILL, new_fill >= URGENT_FILL) {
            (false, true) => FillTransition::BecameUrgent,
            (true, false) => FillTransition::ClearedUrgent,
            _             => FillTransition::Unchanged,
        }
    }
}

// ── AdvanceReport ─────────────────────────────────────────────────────────────

/// Result of one fill-advance step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceReport {
    /// Bins whose fill level actually rose (bins already at 100 % don't).
    pub updated: usize,
    /// Bins that crossed the urgent threshold, in registry order.
    pub transitions: Vec<(BinId, FillTransition)>,
}

impl AdvanceReport {
    /// Ids of bins that became urgent during the step.
    pub fn newly_urgent(&self) -> impl Iterator<Item = BinId> + '_ {
        self.transitions
            .iter()
            .filter(|(_, t)| *t == FillTransition::BecameUrgent)
            .map(|(id, _)| *id)
    }
}

// ── StatusCounts ──────────────────────────────────────────────────────────────

/// Bin counts per fill band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub total:  usize,
    pub urgent: usize,
    pub high:   usize,
    pub medium: usize,
    pub low:    usize,
}

impl StatusCounts {
    pub fn from_bins<'a, I>(bins: I) -> Self
    where
        I: IntoIterator<Item = &'a Bin>,
    {
        let mut counts = StatusCounts::default();
        for bin in bins {
            counts.total += 1;
            match bin.band() {
                FillBand::Urgent => counts.urgent += 1,
                FillBand::High   => counts.high += 1,
                FillBand::Medium => counts.medium += 1,
                FillBand::Low    => counts.low += 1,
            }
        }
        counts
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bins: {} urgent (>=90%), {} high (70-89%), {} medium (50-69%), {} low (<50%)",
            self.total, self.urgent, self.high, self.medium, self.low
        )
    }
}
