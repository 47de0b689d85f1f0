//! Slot-index lists: the human frame spec grammar and the encrypted
//! side channel that carries a list to the receiver.

pub mod types;
pub mod spec;
pub mod literal;
pub mod channel;

pub use types::{FrameIndexError, FrameSpecError};
pub use spec::{format, parse, to_range_spec};
pub use literal::parse_list_literal;
pub use channel::FrameIndexChannel;
