//! Random fleet seeding and fill-level growth.
//!
//! Both operations draw from the engine's `SimRng`, so the same seed and the
//! same call sequence reproduce the same fleet.

use log::info;

use bf_core::{BinId, MAX_FILL, validate_area};

use crate::{
    AdvanceReport, DispatchEngine, DispatchError, DispatchObserver, DispatchResult, FillTransition,
};

/// The reference area pool: ten neighbourhoods of Pune.
pub const DEFAULT_AREAS: [&str; 10] = [
    "Shivajinagar",
    "Kothrud",
    "Koregaon Park",
    "Viman Nagar",
    "Hinjewadi",
    "Baner",
    "Kharadi",
    "Hadapsar",
    "Swargate",
    "Camp",
];

/// Fleet size created by [`DispatchEngine::reinitialize`].
pub const DEFAULT_BIN_COUNT: usize = 10;

impl<O: DispatchObserver> DispatchEngine<O> {
    /// Create `count` random bins spread over `area_pool`.
    ///
    /// Each bin gets an area chosen uniformly from the pool, a distance within
    /// `± area_jitter_km` of that area's canonical distance (clamped to at
    /// least `min_bin_distance_km`), and a fill level uniform in 0..=100.  An
    /// area without a canonical distance first receives one drawn from the
    /// configured area distance range.  Ids continue after the largest
    /// registered id, starting at 1.
    ///
    /// Returns the new ids in creation order.
    ///
    /// # Errors
    ///
    /// `EmptyAreaPool`, `Invalid` for a malformed area name (checked before
    /// any bin is created), `IdsExhausted`, or `Capacity`.
    pub fn seed_random_bins(&mut self, count: usize, area_pool: &[&str]) -> DispatchResult<Vec<BinId>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if area_pool.is_empty() {
            return Err(DispatchError::EmptyAreaPool);
        }
        for area in area_pool {
            validate_area(area)?;
        }

        let mut next_id = match self.registry.max_id() {
            Some(max) => max.next().ok_or(DispatchError::IdsExhausted)?,
            None => BinId(1),
        };

        let mut created = Vec::with_capacity(count);
        for i in 0..count {
            let Some(&area) = self.rng.choose(area_pool) else {
                return Err(DispatchError::EmptyAreaPool);
            };
            let canonical = self.canonical_distance(area)?;

            let jitter = self.config.area_jitter_km;
            let offset: f64 = self.rng.gen_range(-jitter..=jitter);
            let distance_km = (canonical + offset).max(self.config.min_bin_distance_km);
            let fill_level: u8 = self.rng.gen_range(0..=MAX_FILL);

            self.add_bin(next_id, area, distance_km, fill_level)?;
            created.push(next_id);

            if i + 1 < count {
                next_id = next_id.next().ok_or(DispatchError::IdsExhausted)?;
            }
        }

        info!("seeded {} bins across {} areas", created.len(), area_pool.len());
        Ok(created)
    }

    /// Canonical distance of `area`, drawing and storing one if absent.
    fn canonical_distance(&mut self, area: &str) -> DispatchResult<f64> {
        if let Some(d) = self.areas.get(area) {
            return Ok(d);
        }
        let d: f64 = self
            .rng
            .gen_range(self.config.area_distance_min_km..=self.config.area_distance_max_km);
        self.areas.set(area, d)?;
        Ok(d)
    }

    /// Let time pass: every bin fills by a random 5–24 % (configurable),
    /// capped at 100 %.
    ///
    /// Each change goes through [`update_fill_level`][Self::update_fill_level],
    /// so urgent transitions reach the observer.  Both queues are rebuilt
    /// afterwards.
    pub fn advance_fill_levels(&mut self) -> DispatchResult<AdvanceReport> {
        let ids: Vec<BinId> = self.registry.iter().map(|b| b.id()).collect();
        let mut report = AdvanceReport::default();

        for id in ids {
            let Some(current) = self.registry.get(id).map(|b| b.fill_level()) else {
                continue;
            };
            let increase: u8 = self
                .rng
                .gen_range(self.config.fill_increase_min..=self.config.fill_increase_max);
            let new_level = current.saturating_add(increase).min(MAX_FILL);
            if new_level <= current {
                continue;
            }

            let transition = self.update_fill_level(id, new_level)?;
            report.updated += 1;
            if transition != FillTransition::Unchanged {
                report.transitions.push((id, transition));
            }
        }

        self.sort_and_requeue();
        info!("{} bins updated with new fill levels", report.updated);
        Ok(report)
    }

    /// Clear bins, queues, area distances, and the last summary, then seed
    /// [`DEFAULT_BIN_COUNT`] bins over [`DEFAULT_AREAS`].
    pub fn reinitialize(&mut self) -> DispatchResult<Vec<BinId>> {
        self.release_all_bins();
        self.release_area_distances();
        self.last_summary = None;
        info!("reinitializing with {DEFAULT_BIN_COUNT} bins");
        self.seed_random_bins(DEFAULT_BIN_COUNT, &DEFAULT_AREAS)
    }
}
