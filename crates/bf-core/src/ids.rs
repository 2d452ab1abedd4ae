//! Strongly typed bin identifier.
//!
//! `BinId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  Identifiers are chosen by the caller (or by the seeder)
//! and are not dense indices: the registry keeps its own id → slot index.

use std::fmt;

/// Caller-assigned identifier of one bin.  Unique within a registry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinId(pub u32);

impl BinId {
    /// The id immediately after `self`, or `None` on overflow.
    #[inline]
    pub fn next(self) -> Option<BinId> {
        self.0.checked_add(1).map(BinId)
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for BinId {
    #[inline(always)]
    fn from(n: u32) -> BinId {
        BinId(n)
    }
}

impl TryFrom<usize> for BinId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<BinId, Self::Error> {
        u32::try_from(n).map(BinId)
    }
}
