//! Integration tests for bf-dispatch.

use bf_core::{AreaDistances, Bin, BinId, CoreError, DispatchConfig};
use bf_queue::QueueKind;

use crate::{
    BinRegistry, DispatchEngine, DispatchError, DispatchObserver, DispatchOutcome,
    DispatchSummary, EngineBuilder, NoopObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(seed: u64) -> DispatchConfig {
    DispatchConfig { seed, ..Default::default() }
}

fn engine() -> DispatchEngine<NoopObserver> {
    EngineBuilder::new(test_config(42)).build().unwrap()
}

fn recording_engine() -> DispatchEngine<Recorder> {
    EngineBuilder::new(test_config(42))
        .observer(Recorder::default())
        .build()
        .unwrap()
}

fn urgent_ids<O: DispatchObserver>(engine: &DispatchEngine<O>) -> Vec<u32> {
    engine.urgent_queue().iter().map(|e| e.id.0).collect()
}

fn routine_ids<O: DispatchObserver>(engine: &DispatchEngine<O>) -> Vec<u32> {
    engine.routine_queue().iter().map(|e| e.id.0).collect()
}

fn fill_of<O: DispatchObserver>(engine: &DispatchEngine<O>, id: u32) -> u8 {
    engine.find_bin(BinId(id)).unwrap().fill_level()
}

/// Every bin sits in exactly the queue its fill level selects.
fn assert_classified<O: DispatchObserver>(engine: &DispatchEngine<O>) {
    for bin in engine.bins() {
        assert_eq!(engine.queue_of(bin.id()), Some(QueueKind::for_bin(bin)), "{bin}");
    }
    let queued = engine.urgent_queue().len() + engine.routine_queue().len();
    assert_eq!(queued, engine.bin_count());
}

/// Observer that records every event it receives.
#[derive(Default)]
struct Recorder {
    entered:     Vec<BinId>,
    cleared:     Vec<BinId>,
    collected:   Vec<(BinId, u8)>,
    dispatches:  Vec<DispatchSummary>,
    nothing:     usize,
    unavailable: Vec<BinId>,
}

impl DispatchObserver for Recorder {
    fn on_urgent_entered(&mut self, bin: &Bin) {
        self.entered.push(bin.id());
    }
    fn on_urgent_cleared(&mut self, bin: &Bin) {
        self.cleared.push(bin.id());
    }
    fn on_bin_collected(&mut self, bin: &Bin, previous_fill: u8) {
        self.collected.push((bin.id(), previous_fill));
    }
    fn on_dispatch(&mut self, summary: &DispatchSummary) {
        self.dispatches.push(summary.clone());
    }
    fn on_nothing_to_dispatch(&mut self) {
        self.nothing += 1;
    }
    fn on_target_unavailable(&mut self, id: BinId) {
        self.unavailable.push(id);
    }
}

// ── BinRegistry ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn add_then_get() {
        let mut reg = BinRegistry::new();
        reg.add(BinId(3), "Camp", 2.5, 40).unwrap();
        let bin = reg.get(BinId(3)).unwrap();
        assert_eq!(bin.area(), "Camp");
        assert_eq!(bin.fill_level(), 40);
        assert_eq!(bin.priority(), 67);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected_without_side_effects() {
        let mut reg = BinRegistry::new();
        reg.add(BinId(1), "Camp", 2.0, 40).unwrap();
        let err = reg.add(BinId(1), "Baner", 9.0, 95).unwrap_err();
        assert!(matches!(err, DispatchError::DuplicateBin(BinId(1))));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(BinId(1)).unwrap().area(), "Camp");
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut reg = BinRegistry::new();
        assert!(matches!(
            reg.add(BinId(1), "Camp", 2.0, 101),
            Err(DispatchError::Invalid(CoreError::FillOutOfRange(101)))
        ));
        assert!(matches!(
            reg.add(BinId(1), "Camp", -1.0, 10),
            Err(DispatchError::Invalid(CoreError::InvalidDistance(_)))
        ));
        assert!(matches!(
            reg.add(BinId(1), "   ", 1.0, 10),
            Err(DispatchError::Invalid(CoreError::InvalidArea(_)))
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn remove_keeps_insertion_order_and_index() {
        let mut reg = BinRegistry::new();
        for id in 1..=4 {
            reg.add(BinId(id), "Camp", f64::from(id), 10).unwrap();
        }
        let removed = reg.remove(BinId(2)).unwrap();
        assert_eq!(removed.id(), BinId(2));

        let order: Vec<u32> = reg.iter().map(|b| b.id().0).collect();
        assert_eq!(order, vec![1, 3, 4]);
        assert_eq!(reg.get(BinId(4)).unwrap().distance_km(), 4.0);
        assert!(reg.get(BinId(2)).is_none());
    }

    #[test]
    fn remove_from_empty_is_benign() {
        let mut reg = BinRegistry::new();
        let err = reg.remove(BinId(1)).unwrap_err();
        assert!(err.is_empty_state());
    }

    #[test]
    fn remove_unknown_id() {
        let mut reg = BinRegistry::new();
        reg.add(BinId(1), "Camp", 1.0, 10).unwrap();
        let err = reg.remove(BinId(9)).unwrap_err();
        assert!(matches!(err, DispatchError::BinNotFound(BinId(9))));
        assert!(!err.is_empty_state());
    }

    #[test]
    fn set_fill_level_returns_previous() {
        let mut reg = BinRegistry::new();
        reg.add(BinId(1), "Camp", 2.0, 40).unwrap();
        let (bin, previous) = reg.set_fill_level(BinId(1), 95).unwrap();
        assert_eq!(previous, 40);
        assert_eq!(bin.fill_level(), 95);
        assert_eq!(bin.priority(), 180);
    }

    #[test]
    fn max_id_ignores_insertion_order() {
        let mut reg = BinRegistry::new();
        assert_eq!(reg.max_id(), None);
        reg.add(BinId(7), "Camp", 1.0, 0).unwrap();
        reg.add(BinId(3), "Camp", 1.0, 0).unwrap();
        assert_eq!(reg.max_id(), Some(BinId(7)));
    }
}

// ── Bin lifecycle through the engine ──────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn add_bin_enqueues_by_fill() {
        let mut e = engine();
        assert_eq!(e.add_bin(BinId(1), "Camp", 2.0, 95).unwrap(), QueueKind::Urgent);
        assert_eq!(e.add_bin(BinId(2), "Camp", 2.0, 89).unwrap(), QueueKind::Routine);
        assert_eq!(e.queue_of(BinId(1)), Some(QueueKind::Urgent));
        assert_eq!(e.queue_of(BinId(2)), Some(QueueKind::Routine));
        assert_classified(&e);
    }

    #[test]
    fn failed_add_leaves_engine_unchanged() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 2.0, 40).unwrap();
        assert!(e.add_bin(BinId(1), "Camp", 3.0, 95).is_err());
        assert!(e.add_bin(BinId(2), "", 3.0, 95).is_err());
        assert_eq!(e.bin_count(), 1);
        assert!(e.urgent_queue().is_empty());
        assert_eq!(routine_ids(&e), vec![1]);
    }

    #[test]
    fn delete_removes_bin_and_queue_entry() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 1.0, 10).unwrap();
        e.add_bin(BinId(2), "Camp", 2.0, 95).unwrap();
        e.add_bin(BinId(3), "Camp", 3.0, 20).unwrap();

        let bin = e.delete_bin(BinId(2)).unwrap();
        assert_eq!(bin.fill_level(), 95);
        assert!(e.find_bin(BinId(2)).is_none());
        assert_eq!(e.queue_of(BinId(2)), None);
        assert!(e.urgent_queue().is_empty());
        assert_eq!(e.bin_count(), 2);
        assert_classified(&e);
    }

    #[test]
    fn delete_errors() {
        let mut e = engine();
        let err = e.delete_bin(BinId(1)).unwrap_err();
        assert!(matches!(err, DispatchError::RegistryEmpty));
        assert!(err.is_empty_state());

        e.add_bin(BinId(1), "Camp", 1.0, 10).unwrap();
        assert!(matches!(e.delete_bin(BinId(5)), Err(DispatchError::BinNotFound(BinId(5)))));
        assert_eq!(e.bin_count(), 1);
    }

    #[test]
    fn fill_update_moves_bin_between_queues() {
        let mut e = recording_engine();
        e.add_bin(BinId(1), "Camp", 2.0, 40).unwrap();

        assert_eq!(e.update_fill_level(BinId(1), 95).unwrap(), crate::FillTransition::BecameUrgent);
        assert_eq!(e.queue_of(BinId(1)), Some(QueueKind::Urgent));
        assert_eq!(e.urgent_queue().peek().unwrap().fill_level, 95);

        assert_eq!(e.update_fill_level(BinId(1), 20).unwrap(), crate::FillTransition::ClearedUrgent);
        assert_eq!(e.queue_of(BinId(1)), Some(QueueKind::Routine));
        assert!(e.urgent_queue().is_empty());

        assert_eq!(e.update_fill_level(BinId(1), 30).unwrap(), crate::FillTransition::Unchanged);

        assert_eq!(e.observer().entered, vec![BinId(1)]);
        assert_eq!(e.observer().cleared, vec![BinId(1)]);
        assert_classified(&e);
    }

    #[test]
    fn fill_update_errors() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 2.0, 40).unwrap();
        assert!(matches!(
            e.update_fill_level(BinId(1), 150),
            Err(DispatchError::Invalid(CoreError::FillOutOfRange(150)))
        ));
        assert_eq!(fill_of(&e, 1), 40);
        assert!(matches!(
            e.update_fill_level(BinId(2), 50),
            Err(DispatchError::BinNotFound(BinId(2)))
        ));
    }

    #[test]
    fn release_all_bins_empties_everything() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 1.0, 95).unwrap();
        e.add_bin(BinId(2), "Camp", 1.0, 10).unwrap();
        e.release_all_bins();
        assert_eq!(e.bin_count(), 0);
        assert!(e.urgent_queue().is_empty());
        assert!(e.routine_queue().is_empty());
    }

    #[test]
    fn area_distances_round_trip_through_engine() {
        let mut e = engine();
        assert_eq!(e.area_distance("Camp"), None);
        e.set_area_distance("Camp", 4.5).unwrap();
        e.set_area_distance("Camp", 6.0).unwrap();
        assert_eq!(e.area_distance("Camp"), Some(6.0));
        assert!(e.set_area_distance("Camp", f64::NAN).is_err());
        assert_eq!(e.area_distance("Camp"), Some(6.0));
        e.release_area_distances();
        assert!(e.areas().is_empty());
    }

    #[test]
    fn status_counts_by_band() {
        let mut e = engine();
        for (id, fill) in [(1, 95), (2, 75), (3, 55), (4, 10), (5, 0)] {
            e.add_bin(BinId(id), "Camp", 1.0, fill).unwrap();
        }
        let counts = e.status_counts();
        assert_eq!(counts.total, 5);
        assert_eq!(counts.urgent, 1);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 2);
    }
}

// ── Queue ordering ────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn urgent_queue_is_priority_descending_after_requeue() {
        let mut e = engine();
        // Priorities: 1 → 185, 2 → 175, 3 → 180.
        e.add_bin(BinId(1), "Camp", 3.0, 100).unwrap();
        e.add_bin(BinId(2), "Camp", 1.0, 90).unwrap();
        e.add_bin(BinId(3), "Camp", 2.0, 95).unwrap();
        e.sort_and_requeue();

        assert_eq!(urgent_ids(&e), vec![1, 3, 2]);
        let priorities: Vec<i32> = e.urgent_queue().iter().map(|q| q.priority).collect();
        assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn routine_queue_is_distance_ascending_after_requeue() {
        let mut e = engine();
        e.add_bin(BinId(10), "Camp", 7.0, 10).unwrap();
        e.add_bin(BinId(20), "Camp", 3.0, 60).unwrap();
        e.add_bin(BinId(30), "Camp", 5.0, 80).unwrap();
        assert_eq!(routine_ids(&e), vec![10, 20, 30]);

        e.sort_and_requeue();
        assert_eq!(routine_ids(&e), vec![20, 30, 10]);
        assert_classified(&e);
    }

    #[test]
    fn requeue_is_stable_when_nothing_changed() {
        let mut e = engine();
        e.seed_random_bins(25, &crate::DEFAULT_AREAS).unwrap();
        e.sort_and_requeue();
        let (u1, r1) = (urgent_ids(&e), routine_ids(&e));
        e.sort_and_requeue();
        assert_eq!(urgent_ids(&e), u1);
        assert_eq!(routine_ids(&e), r1);
        assert_classified(&e);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;

    #[test]
    fn empty_engine_has_nothing_to_dispatch() {
        let mut e = recording_engine();
        assert_eq!(e.simulate_dispatch(), DispatchOutcome::NothingToDispatch);
        assert_eq!(e.simulate_dispatch(), DispatchOutcome::NothingToDispatch);
        assert!(e.last_dispatch_summary().is_none());
        assert_eq!(e.observer().nothing, 2);
        assert!(e.observer().dispatches.is_empty());
    }

    #[test]
    fn urgent_target_empties_its_whole_area() {
        let mut e = recording_engine();
        e.add_bin(BinId(1), "Kothrud", 5.0, 95).unwrap();
        e.add_bin(BinId(2), "Kothrud", 5.2, 10).unwrap();
        e.add_bin(BinId(3), "Baner", 1.0, 50).unwrap();

        let outcome = e.simulate_dispatch();
        let summary = outcome.summary().unwrap().clone();

        assert_eq!(summary.target_id, BinId(1));
        assert_eq!(summary.area, "Kothrud");
        assert_eq!(summary.start_fill, 95);
        assert!(summary.was_urgent);
        assert_eq!(summary.bins_collected, 2);
        assert!((summary.one_way_minutes - 10.0).abs() < 1e-9);
        assert!((summary.loading_minutes - 6.0).abs() < 1e-9);
        assert!((summary.total_minutes - 26.0).abs() < 1e-9);

        assert_eq!(fill_of(&e, 1), 0);
        assert_eq!(fill_of(&e, 2), 0);
        assert_eq!(fill_of(&e, 3), 50);
        assert_eq!(e.last_dispatch_summary(), Some(&summary));
        assert_eq!(e.observer().collected, vec![(BinId(1), 95), (BinId(2), 10)]);
    }

    #[test]
    fn dispatch_conserves_bins() {
        let mut e = engine();
        e.seed_random_bins(30, &crate::DEFAULT_AREAS).unwrap();
        for _ in 0..5 {
            e.simulate_dispatch();
            assert_eq!(e.bin_count(), 30);
            let queued = e.urgent_queue().len() + e.routine_queue().len();
            assert!(queued <= 30);
            for entry in e.urgent_queue().iter().chain(e.routine_queue().iter()) {
                assert!(e.find_bin(entry.id).is_some());
            }
        }
    }

    #[test]
    fn collected_bins_are_appended_to_routine_tail() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 4.0, 95).unwrap();
        e.add_bin(BinId(2), "Baner", 1.0, 30).unwrap();
        e.add_bin(BinId(3), "Camp", 2.0, 60).unwrap();

        assert!(e.simulate_dispatch().is_dispatched());
        assert!(e.urgent_queue().is_empty());
        assert_eq!(routine_ids(&e), vec![2, 1, 3]);
    }

    #[test]
    fn routine_dispatch_takes_nearest_bin() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 8.0, 80).unwrap();
        e.add_bin(BinId(2), "Baner", 3.0, 20).unwrap();

        let summary = e.simulate_dispatch().summary().cloned().unwrap();
        assert_eq!(summary.target_id, BinId(2));
        assert!(!summary.was_urgent);
        assert_eq!(summary.bins_collected, 1);
        assert_eq!(fill_of(&e, 1), 80);
    }

    #[test]
    fn already_empty_target_is_skipped() {
        let mut e = recording_engine();
        e.add_bin(BinId(1), "Camp", 1.0, 0).unwrap();
        e.add_bin(BinId(2), "Baner", 5.0, 40).unwrap();

        assert_eq!(e.simulate_dispatch(), DispatchOutcome::TargetUnavailable(BinId(1)));
        assert_eq!(fill_of(&e, 2), 40);
        assert!(e.last_dispatch_summary().is_none());
        assert_eq!(e.observer().unavailable, vec![BinId(1)]);
        assert!(e.observer().collected.is_empty());
    }

    #[test]
    fn summary_is_cleared_by_a_dispatch_that_does_nothing() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 2.0, 70).unwrap();
        assert!(e.simulate_dispatch().is_dispatched());
        assert!(e.last_dispatch_summary().is_some());

        // Only bin is now empty.
        assert_eq!(e.simulate_dispatch(), DispatchOutcome::TargetUnavailable(BinId(1)));
        assert!(e.last_dispatch_summary().is_none());
    }

    #[test]
    fn dispatch_sees_fill_changes_made_since_last_requeue() {
        let mut e = engine();
        e.add_bin(BinId(1), "Camp", 1.0, 10).unwrap();
        e.add_bin(BinId(2), "Baner", 6.0, 10).unwrap();
        e.update_fill_level(BinId(2), 92).unwrap();

        let summary = e.simulate_dispatch().summary().cloned().unwrap();
        assert_eq!(summary.target_id, BinId(2));
        assert_eq!(summary.start_fill, 92);
        assert!(summary.was_urgent);
    }
}

// ── Seeding and fill growth ───────────────────────────────────────────────────

#[cfg(test)]
mod seeding {
    use super::*;
    use crate::{DEFAULT_AREAS, DEFAULT_BIN_COUNT, FillTransition};

    #[test]
    fn same_seed_same_fleet() {
        let mut a = EngineBuilder::new(test_config(7)).build().unwrap();
        let mut b = EngineBuilder::new(test_config(7)).build().unwrap();
        a.reinitialize().unwrap();
        b.reinitialize().unwrap();
        let fa: Vec<Bin> = a.bins().cloned().collect();
        let fb: Vec<Bin> = b.bins().cloned().collect();
        assert_eq!(fa, fb);
    }

    #[test]
    fn different_seed_different_fleet() {
        let mut a = EngineBuilder::new(test_config(1)).build().unwrap();
        let mut b = EngineBuilder::new(test_config(2)).build().unwrap();
        a.seed_random_bins(20, &DEFAULT_AREAS).unwrap();
        b.seed_random_bins(20, &DEFAULT_AREAS).unwrap();
        let fa: Vec<Bin> = a.bins().cloned().collect();
        let fb: Vec<Bin> = b.bins().cloned().collect();
        assert_ne!(fa, fb);
    }

    #[test]
    fn seeded_bins_stay_near_their_area() {
        let mut e = engine();
        e.seed_random_bins(200, &DEFAULT_AREAS).unwrap();
        for bin in e.bins() {
            assert!(DEFAULT_AREAS.contains(&bin.area()));
            assert!(bin.fill_level() <= 100);
            let canonical = e.area_distance(bin.area()).unwrap();
            assert!((2.0..=20.0).contains(&canonical));
            assert!((bin.distance_km() - canonical).abs() <= 0.5 + 1e-9, "{bin}");
            assert!(bin.distance_km() >= 0.5);
        }
        assert_classified(&e);
    }

    #[test]
    fn preloaded_area_distance_is_used() {
        let mut areas = AreaDistances::new();
        areas.set("Camp", 4.0).unwrap();
        let mut e = EngineBuilder::new(test_config(3)).areas(areas).build().unwrap();
        e.seed_random_bins(20, &["Camp"]).unwrap();
        assert_eq!(e.area_distance("Camp"), Some(4.0));
        assert!(e.bins().all(|b| (3.5..=4.5).contains(&b.distance_km())));
    }

    #[test]
    fn ids_continue_after_largest() {
        let mut e = engine();
        e.add_bin(BinId(41), "Camp", 1.0, 10).unwrap();
        let ids = e.seed_random_bins(3, &["Camp", "Baner"]).unwrap();
        assert_eq!(ids, vec![BinId(42), BinId(43), BinId(44)]);
        assert_eq!(e.bin_count(), 4);
    }

    #[test]
    fn seeding_edge_cases() {
        let mut e = engine();
        assert!(e.seed_random_bins(0, &[]).unwrap().is_empty());
        assert!(matches!(e.seed_random_bins(3, &[]), Err(DispatchError::EmptyAreaPool)));
        assert!(matches!(
            e.seed_random_bins(3, &["Camp", ""]),
            Err(DispatchError::Invalid(CoreError::InvalidArea(_)))
        ));
        assert_eq!(e.bin_count(), 0);

        e.add_bin(BinId(u32::MAX), "Camp", 1.0, 10).unwrap();
        assert!(matches!(e.seed_random_bins(1, &["Camp"]), Err(DispatchError::IdsExhausted)));
        assert_eq!(e.bin_count(), 1);
    }

    #[test]
    fn advance_raises_every_fill_within_range() {
        let mut e = engine();
        for id in 1..=20 {
            e.add_bin(BinId(id), "Camp", f64::from(id), 50).unwrap();
        }
        let report = e.advance_fill_levels().unwrap();
        assert_eq!(report.updated, 20);
        assert!(report.transitions.is_empty());
        for bin in e.bins() {
            assert!((55..=74).contains(&bin.fill_level()), "{bin}");
        }
        assert_classified(&e);
    }

    #[test]
    fn advance_caps_at_full_and_reports_crossings() {
        let mut e = recording_engine();
        e.add_bin(BinId(1), "Camp", 1.0, 100).unwrap();
        e.add_bin(BinId(2), "Camp", 2.0, 85).unwrap();
        e.add_bin(BinId(3), "Camp", 3.0, 99).unwrap();

        let report = e.advance_fill_levels().unwrap();
        assert_eq!(report.updated, 2);
        assert_eq!(report.transitions, vec![(BinId(2), FillTransition::BecameUrgent)]);
        assert_eq!(report.newly_urgent().collect::<Vec<_>>(), vec![BinId(2)]);

        assert_eq!(fill_of(&e, 1), 100);
        assert!(fill_of(&e, 2) >= 90);
        assert_eq!(fill_of(&e, 3), 100);
        assert_eq!(e.observer().entered, vec![BinId(2)]);
        assert_eq!(e.urgent_queue().len(), 3);
        assert_classified(&e);
    }

    #[test]
    fn reinitialize_resets_everything() {
        let mut e = engine();
        e.add_bin(BinId(77), "Nowhere", 3.0, 95).unwrap();
        e.set_area_distance("Nowhere", 3.0).unwrap();
        assert!(e.simulate_dispatch().is_dispatched());

        let ids = e.reinitialize().unwrap();
        assert_eq!(ids, (1..=10).map(BinId).collect::<Vec<_>>());
        assert_eq!(e.bin_count(), DEFAULT_BIN_COUNT);
        assert!(e.last_dispatch_summary().is_none());
        assert_eq!(e.area_distance("Nowhere"), None);
        assert!(e.areas().iter().all(|(a, _)| DEFAULT_AREAS.contains(&a)));
        assert_classified(&e);
    }
}

// ── EngineBuilder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let e = engine();
        assert_eq!(e.bin_count(), 0);
        assert_eq!(e.config().seed, 42);
        assert!(e.areas().is_empty());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = DispatchConfig { truck_speed_kmph: 0.0, ..Default::default() };
        let result = EngineBuilder::new(config).build();
        assert!(matches!(result, Err(DispatchError::Invalid(CoreError::Config(_)))));

        let config = DispatchConfig { fill_increase_min: 30, fill_increase_max: 10, ..Default::default() };
        assert!(EngineBuilder::new(config).build().is_err());
    }

    #[test]
    fn travel_time_follows_truck_speed() {
        let config = DispatchConfig { truck_speed_kmph: 60.0, load_minutes_per_bin: 1.0, ..Default::default() };
        let mut e = EngineBuilder::new(config).build().unwrap();
        e.add_bin(BinId(1), "Camp", 15.0, 50).unwrap();
        let summary = e.simulate_dispatch().summary().cloned().unwrap();
        assert!((summary.one_way_minutes - 15.0).abs() < 1e-9);
        assert!((summary.total_minutes - 31.0).abs() < 1e-9);
    }
}
