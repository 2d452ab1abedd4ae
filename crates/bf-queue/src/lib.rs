//! `bf-queue`: distance ordering and the two dispatch queues.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`entry`]   | `QueueEntry`: detached snapshot of a bin at enqueue time  |
//! | [`sorter`]  | `DistanceTree`: scratch BST yielding ascending distance   |
//! | [`routine`] | `RoutineQueue`: FIFO of non-urgent bins                   |
//! | [`urgent`]  | `UrgentQueue`: non-increasing priority order              |
//! | [`queues`]  | `DispatchQueues`, `QueueKind`: classify, rebuild, pop     |
//!
//! # Rebuild model (summary)
//!
//! ```text
//! clear both queues
//! urgent bins  → DistanceTree ─┐
//! other bins   → DistanceTree ─┤ in-order walk → classify → queue
//! drop both trees
//! ```
//!
//! The routine queue ends up in ascending distance because it is FIFO and fed
//! in tree order.  The urgent queue applies its own priority insertion rule,
//! so tree order only decides how equal priorities are first met.

pub mod entry;
pub mod queues;
pub mod routine;
pub mod sorter;
pub mod urgent;


pub use entry::QueueEntry;
pub use queues::{DispatchQueues, QueueKind};
pub use routine::RoutineQueue;
pub use sorter::DistanceTree;
pub use urgent::UrgentQueue;
