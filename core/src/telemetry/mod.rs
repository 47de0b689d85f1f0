//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for encode/decode runs.
//!
//! Snapshots are plain data: attached to pipeline outcomes and serialisable
//! to JSON for reporting.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
