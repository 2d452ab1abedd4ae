//! Engine observer trait for surfacing events to the presentation layer.

use bf_core::{Bin, BinId};

use crate::DispatchSummary;

/// Callbacks invoked by [`DispatchEngine`][crate::DispatchEngine] when
/// something reportable happens.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The engine never notifies users itself;
/// an observer is where a UI hooks in its warnings and toasts.
///
/// # Example: urgent alert
///
/// ```rust,ignore
/// struct Alerts;
///
/// impl DispatchObserver for Alerts {
///     fn on_urgent_entered(&mut self, bin: &Bin) {
///         eprintln!("bin {} needs immediate collection", bin.id());
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A bin's fill level crossed up to 90 % or more.
    fn on_urgent_entered(&mut self, _bin: &Bin) {}

    /// A bin's fill level dropped below 90 % through a fill update.
    fn on_urgent_cleared(&mut self, _bin: &Bin) {}

    /// A bin was emptied by a truck.  `previous_fill` is its level before.
    fn on_bin_collected(&mut self, _bin: &Bin, _previous_fill: u8) {}

    /// A dispatch completed.
    fn on_dispatch(&mut self, _summary: &DispatchSummary) {}

    /// A dispatch was requested with both queues empty.
    fn on_nothing_to_dispatch(&mut self) {}

    /// A dispatch popped a target that no longer needed collection.
    fn on_target_unavailable(&mut self, _id: BinId) {}
}

/// A [`DispatchObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
