//! Engine configuration.
//!
//! Dispatch timing and seeding parameters.  The defaults reproduce the
//! reference fleet: a 30 km/h truck, 3 minutes of loading per bin, areas
//! between 2 and 20 km from the depot, bins within ±0.5 km of their area, and
//! 5–24 % growth per fill-advance step.

use crate::{CoreError, CoreResult, MAX_FILL};

/// Top-level engine configuration.
///
/// Typically built with `DispatchConfig { seed, ..Default::default() }` by the
/// application and handed to `bf_dispatch::EngineBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Constant truck speed used for both legs of a round trip.
    pub truck_speed_kmph: f64,

    /// Loading time charged per collected bin.
    pub load_minutes_per_bin: f64,

    /// Master RNG seed.  The same seed always produces identical fleets.
    pub seed: u64,

    /// Canonical distances assigned to previously unseen areas are drawn
    /// uniformly from `[area_distance_min_km, area_distance_max_km]`.
    pub area_distance_min_km: f64,
    pub area_distance_max_km: f64,

    /// Seeded bins sit within `± area_jitter_km` of their area's distance.
    pub area_jitter_km: f64,

    /// Lower clamp for seeded bin distances.
    pub min_bin_distance_km: f64,

    /// Per-step fill growth is drawn uniformly from
    /// `fill_increase_min..=fill_increase_max` percent.
    pub fill_increase_min: u8,
    pub fill_increase_max: u8,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            truck_speed_kmph:     30.0,
            load_minutes_per_bin: 3.0,
            seed:                 0,
            area_distance_min_km: 2.0,
            area_distance_max_km: 20.0,
            area_jitter_km:       0.5,
            min_bin_distance_km:  0.5,
            fill_increase_min:    5,
            fill_increase_max:    24,
        }
    }
}

impl DispatchConfig {
    /// Minutes needed to drive `distance_km` one way.
    #[inline]
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.truck_speed_kmph * 60.0
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// `CoreError::Config` naming the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.truck_speed_kmph.is_finite() && self.truck_speed_kmph > 0.0) {
            return Err(CoreError::Config(format!(
                "truck_speed_kmph must be positive, got {}",
                self.truck_speed_kmph
            )));
        }
        if !(self.load_minutes_per_bin.is_finite() && self.load_minutes_per_bin >= 0.0) {
            return Err(CoreError::Config(format!(
                "load_minutes_per_bin must be non-negative, got {}",
                self.load_minutes_per_bin
            )));
        }
        if !(self.area_distance_min_km.is_finite()
            && self.area_distance_max_km.is_finite()
            && 0.0 <= self.area_distance_min_km
            && self.area_distance_min_km <= self.area_distance_max_km)
        {
            return Err(CoreError::Config(format!(
                "area distance range {}..={} km is invalid",
                self.area_distance_min_km, self.area_distance_max_km
            )));
        }
        if !(self.area_jitter_km.is_finite() && self.area_jitter_km >= 0.0) {
            return Err(CoreError::Config(format!(
                "area_jitter_km must be non-negative, got {}",
                self.area_jitter_km
            )));
        }
        if !(self.min_bin_distance_km.is_finite() && self.min_bin_distance_km >= 0.0) {
            return Err(CoreError::Config(format!(
                "min_bin_distance_km must be non-negative, got {}",
                self.min_bin_distance_km
            )));
        }
        if self.fill_increase_min > self.fill_increase_max || self.fill_increase_max > MAX_FILL {
            return Err(CoreError::Config(format!(
                "fill increase range {}..={} is invalid",
                self.fill_increase_min, self.fill_increase_max
            )));
        }
        Ok(())
    }
}
