//! `BinRegistry`: owning store of every bin, in insertion order.
//!
//! Bins live in a `Vec` in the order they were added; an `FxHashMap` maps each
//! `BinId` to its slot for O(1) lookup.  Removal shifts later slots down and
//! patches their index entries, so iteration order stays insertion order.
//!
//! The registry knows nothing about queues.  Keeping a bin's queue entry in
//! step with its fill level is the engine's job.

use rustc_hash::FxHashMap;

use bf_core::{Bin, BinId};

use crate::{DispatchError, DispatchResult};

#[derive(Clone, Debug, Default)]
pub struct BinRegistry {
    bins:  Vec<Bin>,
    index: FxHashMap<BinId, usize>,
}

impl BinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new bin.
    ///
    /// # Errors
    ///
    /// - `DuplicateBin` if `id` is already registered.
    /// - `Invalid` for an out-of-range fill level, bad distance, or bad area.
    /// - `Capacity` if storage cannot grow.
    ///
    /// The registry is unchanged on every error.
    pub fn add(
        &mut self,
        id:          BinId,
        area:        &str,
        distance_km: f64,
        fill_level:  u8,
    ) -> DispatchResult<&Bin> {
        if self.index.contains_key(&id) {
            return Err(DispatchError::DuplicateBin(id));
        }
        let bin = Bin::new(id, area, distance_km, fill_level)?;

        self.bins.try_reserve(1)?;
        self.index.try_reserve(1)?;

        let slot = self.bins.len();
        self.bins.push(bin);
        self.index.insert(id, slot);
        Ok(&self.bins[slot])
    }

    /// Remove and return the bin with `id`.
    ///
    /// # Errors
    ///
    /// `RegistryEmpty` if there are no bins at all, `BinNotFound` if `id` is
    /// not registered.
    pub fn remove(&mut self, id: BinId) -> DispatchResult<Bin> {
        if self.bins.is_empty() {
            return Err(DispatchError::RegistryEmpty);
        }
        let slot = self.index.remove(&id).ok_or(DispatchError::BinNotFound(id))?;
        let bin = self.bins.remove(slot);
        for later in &self.bins[slot..] {
            if let Some(s) = self.index.get_mut(&later.id()) {
                *s -= 1;
            }
        }
        Ok(bin)
    }

    /// Set the fill level of `id`, recomputing its priority.
    ///
    /// Returns the updated bin and its previous fill level.
    ///
    /// # Errors
    ///
    /// `BinNotFound`, or `Invalid` if `fill_level > 100`.
    pub fn set_fill_level(&mut self, id: BinId, fill_level: u8) -> DispatchResult<(&Bin, u8)> {
        let slot = *self.index.get(&id).ok_or(DispatchError::BinNotFound(id))?;
        let bin = &mut self.bins[slot];
        let previous = bin.fill_level();
        bin.set_fill_level(fill_level)?;
        Ok((&*bin, previous))
    }

    #[inline]
    pub fn get(&self, id: BinId) -> Option<&Bin> {
        self.index.get(&id).map(|&slot| &self.bins[slot])
    }

    #[inline]
    pub fn contains(&self, id: BinId) -> bool {
        self.index.contains_key(&id)
    }

    /// Bins in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }

    /// Largest registered id, if any.
    pub fn max_id(&self) -> Option<BinId> {
        self.bins.iter().map(Bin::id).max()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Drop every bin.
    pub fn clear(&mut self) {
        self.bins.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a BinRegistry {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}
