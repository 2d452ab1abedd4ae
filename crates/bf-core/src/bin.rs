//! The `Bin` record and its derived quantities.
//!
//! A bin's priority score is always derived from its fill level and distance:
//!
//!   priority = trunc(2 × fill − 5 × distance)
//!
//! The score is an integer; fractional parts are truncated toward zero.  It is
//! only used to order the urgent queue, so the fields that feed it are private
//! and every mutation goes through a method that recomputes it.

use std::fmt;

use crate::{BinId, CoreError, CoreResult};

/// Highest valid fill level (percent).
pub const MAX_FILL: u8 = 100;

/// Fill level at or above which a bin is urgent.
pub const URGENT_FILL: u8 = 90;

/// Lower bound of the `High` status band.
pub const HIGH_FILL: u8 = 70;

/// Lower bound of the `Medium` status band.
pub const MEDIUM_FILL: u8 = 50;

/// Longest accepted area name, in bytes.
pub const MAX_AREA_LEN: usize = 49;

/// Priority score for a bin with `fill_level` percent at `distance_km`.
///
/// The float → int cast truncates toward zero and saturates on overflow.
#[inline]
pub fn priority_score(fill_level: u8, distance_km: f64) -> i32 {
    (2.0 * f64::from(fill_level) - 5.0 * distance_km) as i32
}

// ── Validation helpers ────────────────────────────────────────────────────────

/// `FillOutOfRange` unless `fill_level` is within 0..=100.
pub fn validate_fill(fill_level: u8) -> CoreResult<()> {
    if fill_level > MAX_FILL {
        return Err(CoreError::FillOutOfRange(fill_level));
    }
    Ok(())
}

/// `InvalidDistance` unless `distance_km` is finite and non-negative.
pub fn validate_distance(distance_km: f64) -> CoreResult<()> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(CoreError::InvalidDistance(distance_km));
    }
    Ok(())
}

/// `InvalidArea` if `area` is blank or longer than [`MAX_AREA_LEN`] bytes.
pub fn validate_area(area: &str) -> CoreResult<()> {
    if area.trim().is_empty() || area.len() > MAX_AREA_LEN {
        return Err(CoreError::InvalidArea(area.to_owned()));
    }
    Ok(())
}

// ── Bin ───────────────────────────────────────────────────────────────────────

/// One waste receptacle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    id:          BinId,
    area:        String,
    distance_km: f64,
    fill_level:  u8,
    priority:    i32,
}

impl Bin {
    /// Validate the inputs and build a bin with its priority computed.
    ///
    /// # Errors
    ///
    /// `FillOutOfRange`, `InvalidDistance`, or `InvalidArea`.
    pub fn new(id: BinId, area: &str, distance_km: f64, fill_level: u8) -> CoreResult<Self> {
        validate_fill(fill_level)?;
        validate_distance(distance_km)?;
        validate_area(area)?;
        Ok(Self {
            id,
            area: area.to_owned(),
            distance_km,
            fill_level,
            priority: priority_score(fill_level, distance_km),
        })
    }

    #[inline]
    pub fn id(&self) -> BinId {
        self.id
    }

    #[inline]
    pub fn area(&self) -> &str {
        &self.area
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    #[inline]
    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// `true` when the fill level is at or above [`URGENT_FILL`].
    #[inline]
    pub fn is_urgent(&self) -> bool {
        self.fill_level >= URGENT_FILL
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fill_level == 0
    }

    #[inline]
    pub fn band(&self) -> FillBand {
        FillBand::of(self.fill_level)
    }

    /// Set a new fill level and recompute the priority score.
    ///
    /// # Errors
    ///
    /// `FillOutOfRange` if `fill_level > 100`; the bin is left unchanged.
    pub fn set_fill_level(&mut self, fill_level: u8) -> CoreResult<()> {
        validate_fill(fill_level)?;
        self.fill_level = fill_level;
        self.priority = priority_score(fill_level, self.distance_km);
        Ok(())
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bin {} in {} ({:.2} km, {}%)",
            self.id, self.area, self.distance_km, self.fill_level
        )
    }
}

// ── FillBand ──────────────────────────────────────────────────────────────────

/// Status band used by status reporting and bin listings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillBand {
    /// 90–100 %.
    Urgent,
    /// 70–89 %.
    High,
    /// 50–69 %.
    Medium,
    /// Below 50 %.
    Low,
}

impl FillBand {
    pub fn of(fill_level: u8) -> FillBand {
        match fill_level {
            f if f >= URGENT_FILL => FillBand::Urgent,
            f if f >= HIGH_FILL   => FillBand::High,
            f if f >= MEDIUM_FILL => FillBand::Medium,
            _                     => FillBand::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FillBand::Urgent => "URGENT",
            FillBand::High   => "HIGH",
            FillBand::Medium => "MEDIUM",
            FillBand::Low    => "LOW",
        }
    }
}

impl fmt::Display for FillBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
