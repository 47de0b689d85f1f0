//! Boundary to the carrier media.
//!
//! The core never touches pixels or containers. It drives a `SlotStore`
//! (one fragment per slot) and, optionally, an `IndexCarrier` (the still
//! image that carries the encrypted slot list).

pub mod types;
pub mod store;
pub mod memory;

pub use types::{AssignmentError, SlotAssignment, SlotError};
pub use store::{IndexCarrier, SlotStore};
pub use memory::{MemoryIndexCarrier, MemorySlot, MemorySlotStore};
