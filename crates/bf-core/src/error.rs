//! Validation error type shared by the `bf-*` crates.
//!
//! Higher crates wrap `CoreError` as one variant of their own enum via
//! `#[from]`, so a failed `Bin::new` propagates with `?` unchanged.

use thiserror::Error;

/// Errors produced while validating bins, areas, and configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("fill level {0} is outside 0..=100")]
    FillOutOfRange(u8),

    #[error("distance {0} km must be finite and non-negative")]
    InvalidDistance(f64),

    #[error("area name {0:?} must be 1..=49 bytes and not blank")]
    InvalidArea(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
