//! Dispatch results.

use std::fmt;

use bf_core::BinId;

/// Outcome of the most recent successful dispatch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchSummary {
    pub target_id:       BinId,
    pub area:            String,
    /// Target bin's distance from the depot, km.
    pub distance_km:     f64,
    /// Target bin's fill level when the truck left.
    pub start_fill:      u8,
    /// Non-empty bins in `area` that were emptied.
    pub bins_collected:  usize,
    pub one_way_minutes: f64,
    pub loading_minutes: f64,
    /// Outward + return + loading.
    pub total_minutes:   f64,
    /// Target was at or above the urgent threshold.
    pub was_urgent:      bool,
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} target bin {} in {} ({:.2} km, {}%): {} bins collected, {:.1} min \
             ({:.1} out + {:.1} loading + {:.1} back)",
            if self.was_urgent { "URGENT" } else { "NORMAL" },
            self.target_id,
            self.area,
            self.distance_km,
            self.start_fill,
            self.bins_collected,
            self.total_minutes,
            self.one_way_minutes,
            self.loading_minutes,
            self.one_way_minutes,
        )
    }
}

/// What a call to `simulate_dispatch` did.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    /// A truck went out; the summary is also stored as the last dispatch.
    Dispatched(DispatchSummary),
    /// Both queues were empty.
    NothingToDispatch,
    /// The popped target was gone from the registry or already empty.
    /// No bin was touched.
    TargetUnavailable(BinId),
}

impl DispatchOutcome {
    pub fn summary(&self) -> Option<&DispatchSummary> {
        match self {
            DispatchOutcome::Dispatched(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched(_))
    }
}
