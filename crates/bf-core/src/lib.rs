//! `bf-core`: foundational types for the `binfleet` dispatch engine.
//!
//! This crate is a dependency of every other `bf-*` crate.  It has no `bf-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `BinId`                                                 |
//! | [`bin`]      | `Bin`, `FillBand`, `priority_score`, fill thresholds    |
//! | [`area`]     | `AreaDistances`: canonical depot distance per area     |
//! | [`config`]   | `DispatchConfig`                                        |
//! | [`rng`]      | `SimRng`                                                |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod area;
pub mod bin;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::AreaDistances;
pub use bin::{
    Bin, FillBand, HIGH_FILL, MAX_AREA_LEN, MAX_FILL, MEDIUM_FILL, URGENT_FILL, priority_score,
    validate_area, validate_distance, validate_fill,
};
pub use config::DispatchConfig;
pub use error::{CoreError, CoreResult};
pub use ids::BinId;
pub use rng::SimRng;
