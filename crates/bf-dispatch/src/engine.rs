//! The `DispatchEngine` struct: the single owner of all dispatch state.

use log::{debug, info, warn};

use bf_core::{AreaDistances, Bin, BinId, DispatchConfig, SimRng, URGENT_FILL, validate_fill};
use bf_queue::{DispatchQueues, QueueKind, RoutineQueue, UrgentQueue};

use crate::{
    BinRegistry, DispatchError, DispatchObserver, DispatchOutcome, DispatchResult,
    DispatchSummary, FillTransition, StatusCounts,
};

/// The dispatch engine.
///
/// `DispatchEngine<O>` owns the bin registry, both dispatch queues, the area
/// distance table, the RNG, and the last dispatch summary.  Every mutating
/// operation takes `&mut self` and runs to completion, so one engine is one
/// serialization domain; a multi-threaded host wraps the whole engine in a
/// single lock.
///
/// Queue invariants maintained here:
///
/// - `add_bin` and `update_fill_level` remove any old entry and enqueue the
///   bin through `DispatchQueues::classify`.
/// - `delete_bin` unlinks the bin's entry before dropping it.
/// - `sort_and_requeue` rebuilds both queues from the registry.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct DispatchEngine<O: DispatchObserver> {
    pub(crate) config:       DispatchConfig,
    pub(crate) registry:     BinRegistry,
    pub(crate) queues:       DispatchQueues,
    pub(crate) areas:        AreaDistances,
    pub(crate) rng:          SimRng,
    pub(crate) last_summary: Option<DispatchSummary>,
    pub(crate) observer:     O,
}

impl<O: DispatchObserver> DispatchEngine<O> {
    // ── Bin lifecycle ─────────────────────────────────────────────────────

    /// Register a new bin and enqueue it.  Returns the queue it landed in.
    ///
    /// # Errors
    ///
    /// `DuplicateBin`, `Invalid` (fill, distance, area), or `Capacity`.  The
    /// engine is unchanged on error.
    pub fn add_bin(
        &mut self,
        id:          BinId,
        area:        &str,
        distance_km: f64,
        fill_level:  u8,
    ) -> DispatchResult<QueueKind> {
        let bin = self.registry.add(id, area, distance_km, fill_level)?;
        let kind = self.queues.classify(bin);
        debug!("added {bin} to the {kind:?} queue");
        Ok(kind)
    }

    /// Remove a bin from its queue and the registry.
    ///
    /// # Errors
    ///
    /// `RegistryEmpty` (benign, see [`DispatchError::is_empty_state`]) or
    /// `BinNotFound`.
    pub fn delete_bin(&mut self, id: BinId) -> DispatchResult<Bin> {
        if self.registry.is_empty() {
            return Err(DispatchError::RegistryEmpty);
        }
        if !self.registry.contains(id) {
            return Err(DispatchError::BinNotFound(id));
        }
        self.queues.remove(id);
        let bin = self.registry.remove(id)?;
        debug!("deleted {bin}");
        Ok(bin)
    }

    /// Change a bin's fill level and move it to the queue it now belongs in.
    ///
    /// Crossing the urgent threshold in either direction is reported to the
    /// observer and returned.
    ///
    /// # Errors
    ///
    /// `Invalid` for a level above 100, `BinNotFound` for an unknown id.
    pub fn update_fill_level(&mut self, id: BinId, fill_level: u8) -> DispatchResult<FillTransition> {
        validate_fill(fill_level)?;
        let (bin, previous) = self.registry.set_fill_level(id, fill_level)?;

        self.queues.remove(id);
        self.queues.classify(bin);

        let transition = FillTransition::between(previous, fill_level);
        match transition {
            FillTransition::BecameUrgent => {
                warn!("bin {id} is now URGENT ({fill_level}%) and needs immediate collection");
                self.observer.on_urgent_entered(bin);
            }
            FillTransition::ClearedUrgent => {
                info!("bin {id} is no longer urgent ({fill_level}%)");
                self.observer.on_urgent_cleared(bin);
            }
            FillTransition::Unchanged => {}
        }
        Ok(transition)
    }

    #[inline]
    pub fn find_bin(&self, id: BinId) -> Option<&Bin> {
        self.registry.get(id)
    }

    /// Every bin in insertion order.
    pub fn bins(&self) -> impl Iterator<Item = &Bin> + '_ {
        self.registry.iter()
    }

    pub fn bin_count(&self) -> usize {
        self.registry.len()
    }

    /// Drop every bin and every queue entry.
    pub fn release_all_bins(&mut self) {
        self.queues.clear();
        self.registry.clear();
    }

    // ── Area distances ────────────────────────────────────────────────────

    #[inline]
    pub fn area_distance(&self, area: &str) -> Option<f64> {
        self.areas.get(area)
    }

    /// Insert or overwrite an area's canonical distance.
    pub fn set_area_distance(&mut self, area: &str, distance_km: f64) -> DispatchResult<()> {
        self.areas.set(area, distance_km)?;
        Ok(())
    }

    pub fn release_area_distances(&mut self) {
        self.areas.clear();
    }

    pub fn areas(&self) -> &AreaDistances {
        &self.areas
    }

    // ── Ordering ──────────────────────────────────────────────────────────

    /// Rebuild both queues from the registry in ascending-distance order.
    pub fn sort_and_requeue(&mut self) {
        self.queues.rebuild(&self.registry);
    }

    pub fn urgent_queue(&self) -> &UrgentQueue {
        self.queues.urgent()
    }

    pub fn routine_queue(&self) -> &RoutineQueue {
        self.queues.routine()
    }

    /// Which queue holds `id`, if any.
    pub fn queue_of(&self, id: BinId) -> Option<QueueKind> {
        self.queues.locate(id)
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Send one truck to the most pressing bin and empty its whole area.
    ///
    /// The last summary is cleared first, so it is `None` afterwards unless
    /// this call dispatched.  See the crate docs for the cycle.
    pub fn simulate_dispatch(&mut self) -> DispatchOutcome {
        self.last_summary = None;
        self.sort_and_requeue();

        let Some((entry, _)) = self.queues.pop_next() else {
            info!("all queues are empty, no truck to dispatch");
            self.observer.on_nothing_to_dispatch();
            return DispatchOutcome::NothingToDispatch;
        };

        // The entry is a snapshot; the live bin is authoritative.
        let (area, distance_km, start_fill) = match self.registry.get(entry.id) {
            Some(bin) if !bin.is_empty() => {
                (bin.area().to_owned(), bin.distance_km(), bin.fill_level())
            }
            _ => {
                info!("target bin {} is gone or already empty, dispatch skipped", entry.id);
                self.observer.on_target_unavailable(entry.id);
                return DispatchOutcome::TargetUnavailable(entry.id);
            }
        };

        let one_way_minutes = self.config.travel_minutes(distance_km);
        let bins_collected = self.collect_area(&area);
        let loading_minutes = bins_collected as f64 * self.config.load_minutes_per_bin;

        let summary = DispatchSummary {
            target_id: entry.id,
            area,
            distance_km,
            start_fill,
            bins_collected,
            one_way_minutes,
            loading_minutes,
            total_minutes: 2.0 * one_way_minutes + loading_minutes,
            was_urgent: start_fill >= URGENT_FILL,
        };

        info!("dispatch complete: {summary}");
        self.observer.on_dispatch(&summary);
        self.last_summary = Some(summary.clone());
        DispatchOutcome::Dispatched(summary)
    }

    /// Empty every non-empty bin in `area` and append each to the routine
    /// queue.  Returns the number of bins emptied.
    fn collect_area(&mut self, area: &str) -> usize {
        let targets: Vec<BinId> = self
            .registry
            .iter()
            .filter(|b| b.area() == area && !b.is_empty())
            .map(Bin::id)
            .collect();

        let mut collected = 0;
        for id in targets {
            let Ok((bin, previous)) = self.registry.set_fill_level(id, 0) else {
                continue;
            };
            // Known empty, so classification is skipped.
            self.queues.requeue_collected(bin);
            debug!("collected bin {id} ({previous}%) in {area}");
            self.observer.on_bin_collected(bin, previous);
            collected += 1;
        }
        collected
    }

    /// The last dispatch, or `None` if the most recent call did not dispatch.
    pub fn last_dispatch_summary(&self) -> Option<&DispatchSummary> {
        self.last_summary.as_ref()
    }

    // ── Status ────────────────────────────────────────────────────────────

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::from_bins(&self.registry)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
