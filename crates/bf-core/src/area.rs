//! Canonical depot distance per collection area.
//!
//! Bins created for the same area share one canonical distance and are
//! scattered a little around it by the seeder, so the area's distance is
//! stable while individual bins vary.  Lookups are by exact name; there is no
//! ordering requirement.

use std::collections::HashMap;

use crate::CoreResult;
use crate::bin::{validate_area, validate_distance};

/// Area name → canonical distance from the depot in km.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaDistances {
    inner: HashMap<String, f64>,
}

impl AreaDistances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical distance of `area`, or `None` if it was never set.
    #[inline]
    pub fn get(&self, area: &str) -> Option<f64> {
        self.inner.get(area).copied()
    }

    /// Insert or overwrite the canonical distance of `area`.
    ///
    /// # Errors
    ///
    /// `InvalidArea` or `InvalidDistance`; the table is left unchanged.
    pub fn set(&mut self, area: &str, distance_km: f64) -> CoreResult<()> {
        validate_area(area)?;
        validate_distance(distance_km)?;
        match self.inner.get_mut(area) {
            Some(d) => *d = distance_km,
            None    => {
                self.inner.insert(area.to_owned(), distance_km);
            }
        }
        Ok(())
    }

    /// Forget every area.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate `(area, distance_km)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.inner.iter().map(|(a, &d)| (a.as_str(), d))
    }
}
