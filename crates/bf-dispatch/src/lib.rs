//! `bf-dispatch`: bin registry and dispatch engine for the binfleet framework.
//!
//! # Dispatch cycle
//!
//! ```text
//! registry mutation (add / delete / update / advance fills)
//!   ① Rebuild  : both queues cleared and refilled in distance order.
//!   ② Pop      : urgent head first, else routine head.
//!   ③ Resolve  : popped id looked up in the live registry; a missing or
//!                 already empty bin aborts the dispatch as a no-op.
//!   ④ Collect  : every non-empty bin in the target's area reset to 0 %
//!                 and appended to the routine queue.
//!   ⑤ Publish  : round-trip time computed, summary stored and returned.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bf_core::{BinId, DispatchConfig};
//! use bf_dispatch::{DispatchOutcome, EngineBuilder};
//!
//! let mut engine = EngineBuilder::new(DispatchConfig::default()).build()?;
//! engine.add_bin(BinId(1), "Camp", 5.0, 95)?;
//! if let DispatchOutcome::Dispatched(summary) = engine.simulate_dispatch() {
//!     println!("{summary}");
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod registry;
pub mod report;
pub mod seed;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::DispatchEngine;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use registry::BinRegistry;
pub use report::{AdvanceReport, FillTransition, StatusCounts};
pub use seed::{DEFAULT_AREAS, DEFAULT_BIN_COUNT};
pub use summary::{DispatchOutcome, DispatchSummary};
