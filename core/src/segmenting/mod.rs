//! Fragmenting of the envelope text.
//!
//! Responsibilities:
//! - Cut one envelope string into N ordered, contiguous fragments
//! - Concatenate fragments back in sequence order
//!
//! Non-responsibilities:
//! - Cryptography
//! - Slot addressing

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{ChunkError, Fragment};
pub use encode::split;
pub use decode::{join, join_fragments};
